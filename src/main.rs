use anyhow::Context;
use log::{info, warn};
use record_store::AppConfig;
use record_store::demos::{finance, grading, health, inventory_log, warehouse};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();

    info!("Running demos with data directory {}", config.data_dir.display());

    let now = chrono::Local::now().naive_local();
    let today = now.date();

    finance::run(today).context("finance demo failed")?;
    health::run(today).context("health demo failed")?;
    warehouse::run(today).context("warehouse demo failed")?;

    // Grading depends on an input file the user provides; a failure is reported, not fatal
    if let Err(err) = grading::run(&config.students_path(), &config.report_path()) {
        warn!("Grading demo skipped: {err:#}");
        println!("GradingSystem Error: {err:#}\n");
    }

    inventory_log::run(&config.inventory_path(), now).context("inventory demo failed")?;

    info!("All demos finished");
    Ok(())
}
