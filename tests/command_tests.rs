use java_crash_id::commands::{execute_fingerprint, validate_args, FingerprintArgs};
use java_crash_id::output::read_report;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn trace_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "java.lang.NullPointerException: msg").unwrap();
    writeln!(file, "\tat com.example.Foo.bar(Foo.java:10)").unwrap();
    writeln!(file, "\tat java.lang.Thread.run(Thread.java:920)").unwrap();
    file
}

#[test]
fn test_validate_args_stdin() {
    assert!(validate_args(&FingerprintArgs::default()).is_ok());
}

#[test]
fn test_validate_args_missing_input() {
    let args = FingerprintArgs {
        input: Some(PathBuf::from("/no/such/trace.txt")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_json_is_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = FingerprintArgs {
        output_json: Some(temp_dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_digest_with_report() {
    let file = trace_file();
    let temp_dir = tempfile::tempdir().unwrap();
    let json_path = temp_dir.path().join("report.json");

    let args = FingerprintArgs {
        input: Some(file.path().to_path_buf()),
        raw: false,
        output_json: Some(json_path.clone()),
    };

    assert!(validate_args(&args).is_ok());
    let result = execute_fingerprint(args).unwrap();
    assert_eq!(result, "4a6b65ff1114932f9f71c6f1328cf2c3338caefc");

    let report = read_report(&json_path).unwrap();
    assert_eq!(report.fingerprint, result);
    assert_eq!(report.summary.discarded_frames, 1);
}
