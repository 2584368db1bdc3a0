use java_crash_id::commands::validate_report_file;
use java_crash_id::output::{build_report, read_report, write_report, CrashReport};
use tempfile::NamedTempFile;

fn create_test_report() -> CrashReport {
    build_report(
        "java.lang.NullPointerException: msg\n\tat com.example.Foo.bar(Foo.java:10)\n",
        Some("crash.txt".to_string()),
    )
    .unwrap()
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();

    let loaded = read_report(path).unwrap();
    assert_eq!(loaded.version, report.version);
    assert_eq!(loaded.fingerprint, "4a6b65ff1114932f9f71c6f1328cf2c3338caefc");
    assert_eq!(loaded.source.as_deref(), Some("crash.txt"));
}

#[test]
fn test_validate_command_reports_missing_file_as_read_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let err = validate_report_file(missing).unwrap_err();
    let message = format!("{:#}", err);

    assert!(message.contains("Failed to read file"));
    assert!(!message.contains("Failed to write file"));
}

#[test]
fn test_validate_command_accepts_written_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("reports/crash.json");

    write_report(&create_test_report(), &path).unwrap();

    assert!(validate_report_file(path).is_ok());
}

#[test]
fn test_read_report_invalid_json() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{ not json").unwrap();

    assert!(read_report(temp_file.path()).is_err());
}
