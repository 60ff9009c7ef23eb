//! Grading demo
//!
//! Reads `id, name, score` lines, grades every student, and writes a report.

use crate::models::Student;
use crate::utils::logging::{log_operation_complete, log_operation_start, print_section};
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Errors raised while reading student results
#[derive(Debug, thiserror::Error)]
pub enum GradingError {
    /// A line did not contain exactly three comma-separated fields
    #[error("line {line}: expected 3 fields, found {found}")]
    MissingField { line: usize, found: usize },

    /// The ID or score field is not an integer
    #[error("line {line}: {field} '{value}' is not a valid integer")]
    InvalidScoreFormat {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Reading the input or writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parses student results and writes grade reports
#[derive(Debug, Default, Clone, Copy)]
pub struct StudentResultProcessor;

impl StudentResultProcessor {
    /// Parse one student per line. Line numbers in errors start at 1.
    pub fn parse_students<R: BufRead>(&self, reader: R) -> Result<Vec<Student>, GradingError> {
        let mut students = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let parts: Vec<&str> = line.split(',').collect();

            if parts.len() != 3 {
                return Err(GradingError::MissingField {
                    line: line_number,
                    found: parts.len(),
                });
            }

            let id = parse_field(parts[0], "ID", line_number)?;
            let full_name = parts[1].trim();
            let score = parse_field(parts[2], "score", line_number)?;

            students.push(Student::new(id, full_name, score));
        }

        Ok(students)
    }

    pub fn read_students_from_file(&self, path: &Path) -> Result<Vec<Student>, GradingError> {
        log_operation_start("Reading student results from", path.display());
        let file = File::open(path)?;
        let students = self.parse_students(BufReader::new(file))?;
        log_operation_complete("read", path.display(), students.len(), None);
        Ok(students)
    }

    /// Write one report line per student
    pub fn write_report<W: Write>(&self, students: &[Student], mut writer: W) -> io::Result<()> {
        for student in students {
            writeln!(
                writer,
                "{} (ID: {}): Score = {}, Grade = {}",
                student.full_name,
                student.id,
                student.score,
                student.grade()
            )?;
        }
        writer.flush()
    }

    pub fn write_report_to_file(
        &self,
        students: &[Student],
        path: &Path,
    ) -> Result<(), GradingError> {
        let file = File::create(path)?;
        self.write_report(students, BufWriter::new(file))?;
        log_operation_complete("wrote", path.display(), students.len(), None);
        Ok(())
    }
}

fn parse_field(raw: &str, field: &'static str, line: usize) -> Result<i32, GradingError> {
    raw.trim()
        .parse()
        .map_err(|_| GradingError::InvalidScoreFormat {
            line,
            field,
            value: raw.trim().to_string(),
        })
}

/// Run the grading demo over `input`, writing the report to `output`
pub fn run(input: &Path, output: &Path) -> anyhow::Result<()> {
    print_section("Grading System");

    let processor = StudentResultProcessor;
    let students = processor
        .read_students_from_file(input)
        .with_context(|| format!("failed to read student results from {}", input.display()))?;
    processor
        .write_report_to_file(&students, output)
        .with_context(|| format!("failed to write grade report to {}", output.display()))?;

    println!("Grading report generated successfully.\n");
    Ok(())
}
