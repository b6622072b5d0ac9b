use std::io::{self, Write};

use calc_lox::report::{Diagnostic, StreamReporter};
use calc_lox::{run, Outcome, Session};

struct Run {
    output: String,
    diagnostics: Vec<String>,
    outcome: Outcome,
}

fn run_source(source: &str) -> Run {
    let mut out = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = vec![];
    let outcome = run(source, &mut out, &mut diagnostics).expect("writing to memory cannot fail");
    Run {
        output: String::from_utf8(out).unwrap(),
        diagnostics: diagnostics.iter().map(ToString::to_string).collect(),
        outcome,
    }
}

fn outputs(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("Your Output is: \n{}\n", v))
        .collect()
}

fn assert_prints(source: &str, expected: &[&str]) {
    let result = run_source(source);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(result.output, outputs(expected));
    assert_eq!(result.outcome.emitted, expected.len());
}

#[test]
fn multiplication_before_addition() {
    assert_prints("1 + 2 * 3", &["7.0"]);
}

#[test]
fn subtraction_is_left_associative() {
    assert_prints("10 - 2 - 3", &["5.0"]);
}

#[test]
fn division_is_left_associative() {
    assert_prints("4 / 2 / 2", &["1.0"]);
}

#[test]
fn negation_binds_tightest() {
    assert_prints("-3 * -3", &["9.0"]);
}

#[test]
fn decimals() {
    assert_prints("0.5 * 3 + 0.25", &["1.75"]);
}

#[test]
fn results_outside_plain_range_use_exponent() {
    assert_prints("100000000000000000000000 * 10000000000", &["1.0E33"]);
    assert_prints("1 / 10000000", &["1.0E-7"]);
    assert_prints("0.002 / 4", &["5.0E-4"]);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_prints("5 / 0", &["Infinity"]);
    assert_prints("-5 / 0", &["-Infinity"]);
    assert_prints("0 / 0", &["NaN"]);
}

#[test]
fn expressions_on_separate_lines() {
    assert_prints("1+1\n2+2", &["2.0", "4.0"]);
}

#[test]
fn comments_are_ignored() {
    assert_prints("1 + 2 // plus 40\n3 // three", &["3.0", "3.0"]);
    assert_prints("// just a comment", &[]);
}

#[test]
fn trailing_operator_reports_and_prints_nothing() {
    let result = run_source("1 +");
    assert_eq!(result.output, "");
    assert_eq!(
        result.diagnostics,
        vec!["[line 1] Error at end: Expect number."]
    );
    assert_eq!(result.outcome.emitted, 0);
}

#[test]
fn unexpected_character_does_not_stop_scanning() {
    let result = run_source("3 # 4");
    assert_eq!(result.output, outputs(&["3.0", "4.0"]));
    assert_eq!(
        result.diagnostics,
        vec!["[line 1] Error: Unexpected character."]
    );
}

#[test]
fn dangling_decimal_point() {
    let result = run_source("3.");
    assert_eq!(result.output, outputs(&["3.0"]));
    assert_eq!(
        result.diagnostics,
        vec!["[line 1] Error: Unexpected character."]
    );
}

#[test]
fn overflowing_literal_never_reaches_evaluation() {
    let source = format!("{} + 1", "9".repeat(400));
    let result = run_source(&source);
    assert_eq!(result.output, "");
    assert_eq!(
        result.diagnostics,
        vec![
            "[line 1] Error: Invalid number.",
            "[line 1] Error at '+': Expect number.",
        ]
    );
}

#[test]
fn parse_error_drops_the_rest_of_input() {
    let result = run_source("1\n2 * / 3\n4");
    assert_eq!(result.output, outputs(&["1.0"]));
    assert_eq!(
        result.diagnostics,
        vec!["[line 2] Error at '/': Expect number."]
    );
}

#[test]
fn diagnostics_carry_their_line() {
    let result = run_source("1 @\n\n2 -");
    assert_eq!(
        result.diagnostics,
        vec![
            "[line 1] Error: Unexpected character.",
            "[line 3] Error at end: Expect number.",
        ]
    );
}

#[test]
fn runs_are_independent() {
    let source = "1 + 2 $ 3 *";
    let first = run_source(source);
    let second = run_source(source);
    assert_eq!(first.output, second.output);
    assert_eq!(first.diagnostics, second.diagnostics);
    assert_eq!(first.outcome, second.outcome);
}

#[test]
fn stream_reporter_collects_to_stderr_like_writer() {
    let mut out = Vec::new();
    let mut reporter = StreamReporter::new(Vec::new());
    let outcome = Session::new("2 ? 2").run(&mut out, &mut reporter).unwrap();

    assert_eq!(outcome.emitted, 2);
    assert!(reporter.had_error());
    assert!(!reporter.had_runtime_error());
    assert_eq!(
        String::from_utf8(reporter.into_inner()).unwrap(),
        "[line 1] Error: Unexpected character.\n"
    );
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failed_output_write_is_returned() {
    let mut diagnostics: Vec<Diagnostic> = vec![];
    let err = run("1 + 1", &mut BrokenPipe, &mut diagnostics).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert!(diagnostics.is_empty());
}
