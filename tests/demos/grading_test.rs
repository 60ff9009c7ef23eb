//! File-based grading tests

use record_store::demos::{GradingError, StudentResultProcessor};
use record_store::models::Grade;
use std::fs;

#[test]
fn test_report_written_from_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("students.txt");
    let output = dir.path().join("report.txt");
    fs::write(&input, "1,Ama Mensah,85\n2,Kofi Boateng,65\n3,Yaw Owusu,30\n").unwrap();

    record_store::demos::grading::run(&input, &output).unwrap();

    let report = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Ama Mensah (ID: 1): Score = 85, Grade = A");
    assert_eq!(lines[1], "Kofi Boateng (ID: 2): Score = 65, Grade = C");
    assert_eq!(lines[2], "Yaw Owusu (ID: 3): Score = 30, Grade = F");
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StudentResultProcessor
        .read_students_from_file(&dir.path().join("absent.txt"))
        .unwrap_err();
    assert!(matches!(err, GradingError::Io(_)));
}

#[test]
fn test_bad_line_stops_the_run_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("students.txt");
    let output = dir.path().join("report.txt");
    fs::write(&input, "1,Ama Mensah,85\n2,Kofi Boateng\n").unwrap();

    assert!(record_store::demos::grading::run(&input, &output).is_err());
    assert!(!output.exists());
}

#[test]
fn test_grade_bands() {
    assert_eq!(Grade::from(80), Grade::A);
    assert_eq!(Grade::from(79), Grade::B);
    assert_eq!(Grade::from(50), Grade::D);
    assert_eq!(Grade::from(49), Grade::F);
}
