use std::io::Write;

use indoc::indoc;

use super::batch::{BatchError, TestBatch, TestCase, load_batches, parse_batches};
use super::test::{Report, RunOptions, run_batches};

fn batch(name: &str, regex: &str, cases: &[(&str, bool)]) -> TestBatch {
    TestBatch {
        name: name.to_owned(),
        regex: regex.to_owned(),
        test_strings: cases
            .iter()
            .map(|&(input, expected)| TestCase {
                input: input.to_owned(),
                expected,
            })
            .collect(),
    }
}

fn run(batches: &[TestBatch], quiet: bool) -> (String, Report) {
    let options = RunOptions {
        quiet,
        ..RunOptions::default()
    };
    let mut out = Vec::new();
    let report = run_batches(batches, options, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), report)
}

fn sample() -> Vec<TestBatch> {
    vec![
        batch("star", "a*", &[("", true), ("aaa", true), ("b", false)]),
        batch("concat", "ab", &[("ab", true), ("a", true)]),
    ]
}

#[test]
fn report_counts_verdicts() {
    let mut report = Report::new();

    assert!(report.record("a", "a", true, true));
    assert!(report.record("a", "b", false, false));
    assert!(!report.record("a", "aa", false, true));

    assert_eq!(report.passed(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.failures()[0].word, "aa");
    assert_eq!(report.failures()[0].actual, Some(false));
    assert_eq!(report.summary(), "2 passed and 1 failed");
}

#[test]
fn report_uncompiled_words_fail() {
    let mut report = Report::new();
    report.record_uncompiled("(", "x", false);

    assert_eq!(report.passed(), 0);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.failures()[0].actual, None);
}

#[test]
fn run_prints_headers_and_mismatches() {
    let (output, report) = run(&sample(), false);

    insta::assert_snapshot!(output, @r"
    === Testing star: 'a*' ===
    Postfix: a*
    '' -> true
    'aaa' -> true
    'b' -> false

    === Testing concat: 'ab' ===
    Postfix: ab.
    'ab' -> true
    'a' -> false, expected true

    4 passed and 1 failed
    ");
    assert_eq!(report.failed(), 1);
}

#[test]
fn quiet_run_prints_only_failures() {
    let (output, report) = run(&sample(), true);

    insta::assert_snapshot!(output, @r"
    concat: 'a' -> false, expected true
    4 passed and 1 failed
    ");
    assert_eq!(report.passed(), 4);
}

#[test]
fn uncompilable_batch_counts_words_as_failed() {
    let batches = vec![
        batch("bad", "a|", &[("a", true), ("", false)]),
        batch("good", "a", &[("a", true)]),
    ];
    let (output, report) = run(&batches, false);

    assert!(output.contains("bad: failed to build automaton for 'a|'"));
    assert!(!output.contains("Postfix: a|"));
    assert!(output.contains("=== Testing good: 'a' ==="));
    assert!(output.ends_with("1 passed and 2 failed\n"));
    assert_eq!(report.failed(), 2);
    assert!(report.failures().iter().all(|f| f.actual.is_none()));
}

#[test]
fn empty_specification_reports_zero() {
    let (output, report) = run(&[], false);

    assert_eq!(output, "0 passed and 0 failed\n");
    assert_eq!(report, Report::new());
}

#[test]
fn parse_batches_reads_json() {
    let json = indoc! {r#"
        [
          {
            "name": "union",
            "regex": "a|b",
            "test_strings": [
              { "input": "a", "expected": true },
              { "input": "ab", "expected": false }
            ]
          }
        ]
    "#};

    let batches = parse_batches(json).unwrap();
    assert_eq!(batches, vec![batch("union", "a|b", &[("a", true), ("ab", false)])]);
}

#[test]
fn parse_batches_rejects_missing_fields() {
    let json = r#"[{ "name": "x", "regex": "a" }]"#;
    assert!(parse_batches(json).is_err());
}

#[test]
fn load_batches_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[{"name": "one", "regex": "a+", "test_strings": []}]"#)
        .unwrap();
    file.flush().unwrap();

    let batches = load_batches(file.path()).unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].regex, "a+");
}

#[test]
fn load_batches_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = load_batches(&path).unwrap_err();
    assert!(matches!(err, BatchError::Io { .. }));
    assert!(err.to_string().starts_with("failed to read '"));
}

#[test]
fn load_batches_reports_json_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    file.flush().unwrap();

    let err = load_batches(file.path()).unwrap_err();
    assert!(matches!(err, BatchError::Json { .. }));
    assert!(err.to_string().starts_with("invalid test specification '"));
}
