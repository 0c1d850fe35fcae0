use std::fs::{self};

use moonlet::{interpreter::evaluator::core::Program, run_with};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "mnl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read \
                                                                      {expected_path:?}: {e}")
                                                          });

        count += 1;
        let output = run_output(&source).unwrap_or_else(|e| {
                                             panic!("Script {path:?} failed:\n{source}\nError: \
                                                     {e}")
                                         });
        assert_eq!(output, expected, "Output of {path:?} differs");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn run_output(src: &str) -> Result<String, moonlet::error::Error> {
    let mut program = Program::with_output(Vec::new());
    run_with(src, &mut program)?;
    Ok(String::from_utf8_lossy(&program.into_output()).into_owned())
}

fn assert_success(src: &str) {
    if let Err(e) = run_output(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_output(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn declarations_and_compound_assignment() {
    assert_success("=: x 1\n=+ x 2");
    assert_success("=: x 7\n=* x 9");
    assert_success("=: x 8\n=- x 5");
    assert_success("=: x 10\n=/ x 2");
    assert_failure("=+ x 2");
    assert_failure("=: x 10\n=/ x 0");
}

#[test]
fn comments() {
    assert_success("=# a comment on its own line\n=: x 1 =# and one after a statement");
    assert_success("=#compact");
}

#[test]
fn blank_lines_and_indentation() {
    assert_success("\n\n    =: x 1\n\t=: y 2\n\n");
}

#[test]
fn functions() {
    assert_success("=| id(a) ={\n=> a\n}\n=@ id(1) =: x");
    assert_success("=| id(a) ={\n=> a\n}\nid(1) =: x");
    assert_success("=| nothing() ={\n}\nnothing()");
    assert_failure("=| id(a) ={\n=> a\n}\n=@ id() =: x");
    assert_failure("=| id(a) ={\n=> a\n}\n=@ other(1) =: x");
}

#[test]
fn conditionals() {
    assert_success("=: x 1\n=? x == 1 =: one");
    assert_success("=: x 1\n=? (x == 1) ={\n=! x\n} : ={\n=! 0\n}");
    assert_failure("=: x 1\n=? x == 1 =! x :");
    assert_failure("=: x 1\n=? x == 'one' =: same");
}

#[test]
fn malformed_programs() {
    assert_failure("");
    assert_failure("=: x 'unterminated");
    assert_failure("=| f(a ={\n=> a\n}");
    assert_failure("x");
}
