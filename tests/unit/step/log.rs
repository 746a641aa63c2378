use super::*;

#[test]
fn blank_lines_are_skipped_but_numbers_kept() {
    let log = StepLog::parse_str("Initialize: (1 2)\n\n  \nAdd_edge: (1,2)\r\n");
    assert_eq!(log.len(), 2);
    assert_eq!(log.lines()[0].number, 1);
    assert_eq!(log.lines()[1].number, 4);
    assert_eq!(log.lines()[1].text, "Add_edge: (1,2)");
}

#[test]
fn missing_file_reports_path() {
    let err = StepLog::from_path("target/definitely/missing/steps.txt").unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("steps.txt"), "{msg}");
}

#[test]
fn empty_text_is_empty_log() {
    assert!(StepLog::parse_str("").is_empty());
}
