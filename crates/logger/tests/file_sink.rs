//! Loggers writing to a real file.

use klio_logger::{Level, Logger, Output, OutputTarget};
use test_support::TempLog;

#[test]
fn frames_land_in_the_file_in_order() {
    let log = TempLog::new().expect("temp file");
    let output = Output::new(log.writer().expect("reopen"));
    assert_eq!(output.target(), OutputTarget::Writer);

    let logger = Logger::new(output).with_tags(["job", "42"]);
    logger.print("started").expect("first frame");
    logger
        .with_level(Level::Warn)
        .printf(format_args!("retry {}", 2))
        .expect("second frame");
    logger.output().flush().expect("flush");

    let contents = String::from_utf8(log.read().expect("read")).expect("UTF-8");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "\x1b_klio_log_level \"info\"\x1b\\\x1b_klio_tags [\"job\",\"42\"]\x1b\\started\x1b_klio_reset\x1b\\",
            "\x1b_klio_log_level \"warn\"\x1b\\\x1b_klio_tags [\"job\",\"42\"]\x1b\\retry 2\x1b_klio_reset\x1b\\",
        ]
    );
}

#[test]
fn switching_files_moves_later_frames_only() {
    let first = TempLog::new().expect("first temp file");
    let second = TempLog::new().expect("second temp file");

    let logger = Logger::new(Output::new(first.writer().expect("reopen first")));
    logger.print("one").expect("first file");
    let previous = logger.set_output(Output::new(second.writer().expect("reopen second")));
    logger.print("two").expect("second file");
    previous.flush().expect("flush first");
    logger.output().flush().expect("flush second");

    let first_text = String::from_utf8(first.read().expect("read first")).expect("UTF-8");
    let second_text = String::from_utf8(second.read().expect("read second")).expect("UTF-8");
    assert!(first_text.contains("one"));
    assert!(!first_text.contains("two"));
    assert!(second_text.contains("two"));
    assert!(!second_text.contains("one"));
}
