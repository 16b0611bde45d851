use std::{f64::consts::PI, fs};

use plotcalc::{
    ErrorKind, EvalError, compile_function_of_x, evaluate_arithmetic_expression, evaluate_at,
    sample_plot,
};
use walkdir::WalkDir;

fn close_enough(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn evaluate_function_at(text: &str, x: f64) -> Result<f64, EvalError> {
    evaluate_at(&compile_function_of_x(text)?, x)
}

fn assert_value(src: &str, expected: f64) {
    match evaluate_arithmetic_expression(src) {
        Ok(value) => assert!(close_enough(value, expected),
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate_arithmetic_expression(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?} failed with the wrong error: {e}"),
    }
}

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            check_case(line).unwrap_or_else(|message| {
                                panic!("{path:?} line {}: {line}\n{message}", i + 1)
                            });
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Runs one `input => expected` line. An `@` in the input makes it a grapher
/// case evaluated at the number after it.
fn check_case(line: &str) -> Result<(), String> {
    let (input, expected) = line.rsplit_once("=>")
                                .ok_or_else(|| "missing `=>`".to_string())?;
    let expected = expected.trim();

    let result = match input.split_once('@') {
        Some((function, x)) => {
            let x = x.trim().parse::<f64>().map_err(|e| format!("bad x: {e}"))?;
            evaluate_function_at(function.trim(), x)
        },
        None => evaluate_arithmetic_expression(input.trim()),
    };

    match (expected.strip_prefix("error "), result) {
        (Some(kind), Err(e)) if format!("{:?}", e.kind()) == kind.trim() => Ok(()),
        (Some(kind), Err(e)) => Err(format!("expected {kind}, got {:?}: {e}", e.kind())),
        (Some(kind), Ok(value)) => Err(format!("expected {kind}, got {value}")),
        (None, Ok(value)) => {
            let expected = expected.parse::<f64>()
                                   .map_err(|e| format!("bad expected value: {e}"))?;
            if close_enough(value, expected) {
                Ok(())
            } else {
                Err(format!("expected {expected}, got {value}"))
            }
        },
        (None, Err(e)) => Err(format!("expected {expected}, got error: {e}")),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("10-2*3", 4.0);
    assert_value("2^2^3", 256.0);
    assert_value("10/2/5", 1.0);
    assert_value("((2+3)*2)^2", 100.0);
}

#[test]
fn implicit_multiplication() {
    assert_value("2(3+4)", 14.0);
    assert_eq!(evaluate_function_at("2x+1", 3.0), Ok(7.0));
}

#[test]
fn calculator_builtins() {
    assert_value("sqrt(2)^2", 2.0);
    assert_value("abs(-pi)", PI);
    assert_value("round(0.5) + round(1.5)", 2.0);
    assert_value("min(4, -1, 2) * max(1, 2, 3)", -3.0);
}

#[test]
fn grapher_builtins() {
    assert_eq!(evaluate_function_at("sin(x)", 0.0), Ok(0.0));
    assert_eq!(evaluate_function_at("cos(x)", 0.0), Ok(1.0));
    assert_eq!(evaluate_function_at("f(x) = sqrt(x) + abs(x)", 4.0), Ok(6.0));
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5/0", ErrorKind::DivisionByZero);
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_failure("(2+3", ErrorKind::UnbalancedParentheses);
    assert_failure("2+3)", ErrorKind::UnbalancedParentheses);
}

#[test]
fn empty_input_is_error() {
    assert_failure("", ErrorKind::EmptyInput);
    assert_failure("   ", ErrorKind::EmptyInput);
}

#[test]
fn errors_have_readable_messages() {
    let err = evaluate_arithmetic_expression("5/0").unwrap_err();
    assert!(!err.to_string().is_empty());

    let err = evaluate_arithmetic_expression("2+#").unwrap_err();
    assert!(err.to_string().contains('#'), "message was: {err}");
}

#[test]
fn compiled_function_is_reusable() {
    let f = compile_function_of_x("x^2 - 1").expect("compiles");
    for (x, expected) in [(0.0, -1.0), (1.0, 0.0), (3.0, 8.0)] {
        assert_eq!(evaluate_at(&f, x), Ok(expected));
    }
}

#[test]
fn sampling_tolerates_poles() {
    let tan = compile_function_of_x("tan(x)").expect("compiles");
    let series = sample_plot(&tan, -PI, PI, 100).expect("samples");

    assert!(!series.is_empty());
    assert!(series.len() <= 100);
    assert!(series.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
    assert!(series.xs().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn sampling_skips_undefined_points() {
    let f = compile_function_of_x("1/x").expect("compiles");
    let series = sample_plot(&f, -1.0, 1.0, 5).expect("samples");
    assert_eq!(series.xs(), vec![-1.0, -0.5, 0.5, 1.0]);
}

#[test]
fn sampling_errors() {
    let f = compile_function_of_x("sqrt(x)").expect("compiles");
    assert_eq!(sample_plot(&f, -5.0, -1.0, 10).unwrap_err().kind(), ErrorKind::EmptyDomain);
    assert_eq!(sample_plot(&f, 1.0, 0.0, 10).unwrap_err().kind(), ErrorKind::InvalidRange);
    assert_eq!(sample_plot(&f, 0.0, 1.0, 1).unwrap_err().kind(), ErrorKind::InvalidRange);
}

#[test]
fn unavailable_functions_are_rejected_when_compiling() {
    let err = compile_function_of_x("round(x)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownIdentifier);
    assert_failure("sin(0)", ErrorKind::UnknownIdentifier);
}

#[test]
fn deeply_nested_input_is_a_syntax_error() {
    let parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_failure(&parens, ErrorKind::Syntax);
    assert_failure(&format!("{}1", "-".repeat(10_000)), ErrorKind::Syntax);
    assert_failure(&format!("{}1", "1+".repeat(10_000)), ErrorKind::Syntax);

    let f = compile_function_of_x(&format!("{}x{}", "sin(".repeat(10_000), ")".repeat(10_000)));
    assert_eq!(f.unwrap_err().kind(), ErrorKind::Syntax);

    assert_value(&format!("{}7{}", "(".repeat(64), ")".repeat(64)), 7.0);
}

#[test]
fn end_of_input_errors_point_past_the_text() {
    let err = evaluate_arithmetic_expression("1+sqrt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert!(err.to_string().contains("position 6"), "{err}");
}

#[test]
fn ranges_too_narrow_for_their_magnitude_are_rejected() {
    let f = compile_function_of_x("x").expect("compiles");
    let err = sample_plot(&f, 1e16, 1e16 + 8.0, 100).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRange);

    let series = sample_plot(&f, 1e16, 1e16 + 1e6, 100).expect("samples");
    assert!(series.xs().windows(2).all(|w| w[0] < w[1]));
}
