use std::collections::BTreeMap;

use moonlet::{
    PROGRAM_SCOPE,
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::core::{MAX_CALL_DEPTH, Program},
        lexer::tokenize,
        parser::core::parse,
        scope::Scope,
    },
    run_with,
};

type RunResult = Result<BTreeMap<String, String>, Error>;

fn run_captured(src: &str) -> (RunResult, String) {
    let mut program = Program::with_output(Vec::new());
    let result = run_with(src, &mut program);
    let output = String::from_utf8(program.into_output()).expect("print output is not UTF-8");
    (result, output)
}

fn bindings(src: &str) -> BTreeMap<String, String> {
    run_captured(src).0
                     .unwrap_or_else(|e| panic!("script failed: {e}\n{src}"))
}

fn output(src: &str) -> String {
    let (result, output) = run_captured(src);
    if let Err(e) = result {
        panic!("script failed: {e}\n{src}");
    }
    output
}

fn failure(src: &str, kind: ErrorKind) -> Error {
    match run_captured(src).0 {
        Ok(bindings) => panic!("script succeeded with {bindings:?} but was expected to fail\n{src}"),
        Err(e) => {
            assert_eq!(e.kind, kind, "unexpected error: {e}\n{src}");
            e
        },
    }
}

#[test]
fn declaration_binds_value() {
    let bindings = bindings("=: x 10");
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings["x"], "10");
}

#[test]
fn literals_of_every_kind() {
    let bindings = bindings("=: i 7\n=: f 5.0\n=: s 'moon'\n=: b false");
    assert_eq!(bindings["i"], "7");
    assert_eq!(bindings["f"], "5.0");
    assert_eq!(bindings["s"], "moon");
    assert_eq!(bindings["b"], "false");
}

#[test]
fn compound_assignments() {
    assert_eq!(bindings("=: x 10\n=+ x 5\n=- x 3\n=* x 2")["x"], "24");
    assert_eq!(bindings("=: x 1.5\n=* x 2")["x"], "3.0");
    assert_eq!(bindings("=: s 'moon'\n=+ s 'let'")["s"], "moonlet");
}

#[test]
fn division_always_yields_a_float() {
    assert_eq!(bindings("=: x 7\n=/ x 2")["x"], "3.5");
    assert_eq!(bindings("=: x 6\n=/ x 2")["x"], "3.0");
}

#[test]
fn expressions_in_declarations() {
    let bindings = bindings("=: x 2\n=: y x * 3\n=: x + 3\n=: z (y - 1)");
    assert_eq!(bindings["x"], "5");
    assert_eq!(bindings["y"], "6");
    assert_eq!(bindings["z"], "5");
}

#[test]
fn mismatched_kinds_are_rejected() {
    failure("=: x 1\n=+ x 'a'", ErrorKind::RunTime);
    failure("=: x 'a'\n=: y x + 1", ErrorKind::RunTime);
    failure("=: x true\n=? x == 1 =: c", ErrorKind::RunTime);
}

#[test]
fn inapplicable_operators_are_invalid_syntax() {
    failure("=: b true\n=+ b false", ErrorKind::InvalidSyntax);
    failure("=: s 'a'\n=* s 'b'", ErrorKind::InvalidSyntax);
    failure("=: s 'a'\n=- s 'b'", ErrorKind::InvalidSyntax);
}

#[test]
fn integer_overflow_is_a_runtime_error() {
    failure("=: x 9223372036854775807\n=+ x 1", ErrorKind::RunTime);
}

#[test]
fn zero_division_leaves_the_binding_untouched() {
    failure("=: x 4\n=/ x 0.0", ErrorKind::ZeroDivision);

    let tokens = tokenize("=: x 4\n=/ x 0").unwrap();
    let tree = parse(&tokens).unwrap();
    let root = Scope::root(PROGRAM_SCOPE);
    let mut program = Program::with_output(Vec::new());

    let error = program.exec_list(&tree, &root).unwrap_err();
    assert_eq!(error.kind, ErrorKind::ZeroDivision);
    assert_eq!(root.borrow().snapshot()["x"], "4");
}

#[test]
fn unknown_identifiers() {
    let error = failure("=+ y 1", ErrorKind::RunTime);
    assert_eq!(error.message, "'y' doesn't exist within scope '<Program>'");

    failure("=! nothing", ErrorKind::RunTime);
    failure("=@ nothing(1) =: r", ErrorKind::RunTime);
}

#[test]
fn print_writes_to_the_sink() {
    assert_eq!(output("=! 'hello'\n=: x 3\n=! x\n=! 1.5\n=! true"),
               "hello\n3\n1.5\ntrue\n");
}

#[test]
fn functions_print_their_signature() {
    assert_eq!(output("=| f(a, b) ={\n=> a\n}\n=! f"), "f(a, b)\n");
}

#[test]
fn call_stores_only_the_returned_value() {
    let src = "=| add(a, b) ={\n    =: s a + b\n    => s\n}\n=@ add(2, 3) =: r";
    let bindings = bindings(src);

    assert_eq!(bindings["r"], "5");
    assert_eq!(bindings["add"], "add(a, b)");
    assert!(!bindings.contains_key("s"));
    assert!(!bindings.contains_key("a"));
}

#[test]
fn arity_mismatch_names_the_missing_count() {
    let declare = "=| add(a, b) ={\n=: s a + b\n=> s\n}\n";

    let error = failure(&format!("{declare}=@ add(1) =: r"), ErrorKind::RunTime);
    assert!(error.message.contains("1 missing"), "{}", error.message);

    let error = failure(&format!("{declare}=@ add(1, 2, 3) =: r"), ErrorKind::RunTime);
    assert!(error.message.contains("1 too many"), "{}", error.message);
}

#[test]
fn result_requires_a_return() {
    let error = failure("=| f(a) ={\n=: b a\n}\n=@ f(1) =: r", ErrorKind::RunTime);
    assert!(error.message.contains("didn't return"), "{}", error.message);
}

#[test]
fn discarded_result() {
    let src = "=| show(a) ={\n=! a\n}\nshow(7)";
    assert_eq!(output(src), "7\n");
    assert_eq!(bindings(src).len(), 1);
}

#[test]
fn printing_is_silent_while_declaring() {
    assert_eq!(output("=| f(a) ={\n=! 'body'\n=> a\n}"), "");
}

#[test]
fn callee_cannot_change_the_callers_binding() {
    let src = "=: x 1\n=| bump(x) ={\n    =+ x 10\n    => x\n}\n=@ bump(x) =: y";
    let bindings = bindings(src);

    assert_eq!(bindings["x"], "1");
    assert_eq!(bindings["y"], "11");
}

#[test]
fn values_are_not_inherited() {
    let error = failure("=: x 1\n=| f() ={\n=> x\n}", ErrorKind::RunTime);
    assert_eq!(error.message, "'x' doesn't exist within scope '<Function: 'f'>'");
}

#[test]
fn functions_are_visible_in_nested_scopes() {
    let src = "=| double(n) ={\n    =: r n * 2\n    => r\n}\n=| quad(n) ={\n    =@ double(n) =: \
               d\n    =@ double(d) =: q\n    => q\n}\n=@ quad(3) =: x";
    assert_eq!(bindings(src)["x"], "12");
}

#[test]
fn recursion() {
    let src = "=| fact(n) ={\n    =? (n <= 1) => 1\n    =: m n - 1\n    =@ fact(m) =: r\n    =* \
               r n\n    => r\n}\n=@ fact(5) =: result";
    assert_eq!(bindings(src)["result"], "120");
}

#[test]
fn inline_call_in_return() {
    let src = "=| inc(n) ={\n    =: m n + 1\n    => m\n}\n=| twice(n) ={\n    =@ inc(n) =: a\n    \
               => inc(a)\n}\n=@ twice(1) =: x";
    assert_eq!(bindings(src)["x"], "3");
}

#[test]
fn functions_as_arguments() {
    let src = "=| inc(n) ={\n=: m n + 1\n=> m\n}\n=| apply(f, v) ={\n=@ f(v) =: r\n=> \
               r\n}\n=@ apply(inc, 41) =: x";
    assert_eq!(bindings(src)["x"], "42");
}

#[test]
fn functions_passed_as_arguments_survive_the_call() {
    let src = "=| inc(n) ={\n=: m n + 1\n=> m\n}\n=| apply(f, v) ={\n=@ f(v) =: r\n=> \
               r\n}\n=@ apply(inc, 41) =: x\n=@ inc(1) =: y";
    let bindings = bindings(src);

    assert_eq!(bindings["x"], "42");
    assert_eq!(bindings["y"], "2");
}

#[test]
fn returned_functions_still_see_outer_functions() {
    let src = "=| h(a) ={\n=> a\n}\n=| mk() ={\n    =| inner(a) ={\n        =@ h(a) =: r\n        \
               => r\n    }\n    => inner\n}\n=@ mk() =: g\n=@ g(5) =: out";
    let bindings = bindings(src);

    assert_eq!(bindings["g"], "inner(a)");
    assert_eq!(bindings["out"], "5");
}

#[test]
fn inline_recursion() {
    let src = "=| down(n) ={\n    =? n <= 0 => 0\n    =: m n - 1\n    => down(m)\n}\n=@ \
               down(3) =: x";
    assert_eq!(bindings(src)["x"], "0");
}

#[test]
fn unresolved_inline_call_is_a_placeholder() {
    let bindings = bindings("=| f(n) ={\n=> nope(n)\n}\n=@ f(1) =: x");
    assert_eq!(bindings["x"], "unbound");
}

#[test]
fn call_depth_is_limited() {
    let src = "=| forever(n) ={\n=@ forever(n) =: r\n=> r\n}\n=@ forever(1) =: x";
    let mut program = Program::with_output(Vec::new()).with_max_call_depth(10);
    assert_eq!(program.max_call_depth(), 10);

    let error = run_with(src, &mut program).unwrap_err();
    assert_eq!(error.kind, ErrorKind::RunTime);
    assert_eq!(error.message, "maximum call depth of 10 exceeded");

    assert_eq!(Program::with_output(Vec::new()).max_call_depth(), MAX_CALL_DEPTH);
}

#[test]
fn duplicate_definitions() {
    failure("=| f() ={\n=> 1\n}\n=| f() ={\n=> 2\n}", ErrorKind::RunTime);
    failure("=| f(a, a) ={\n=> a\n}", ErrorKind::RunTime);
    failure("=: f 1\n=| f() ={\n=> 1\n}", ErrorKind::RunTime);
}

#[test]
fn results_cannot_override_functions() {
    let error = failure("=| f() ={\n=> 1\n}\n=| g() ={\n=> 2\n}\n=@ f() =: g",
                        ErrorKind::RunTime);
    assert_eq!(error.message, "can't override function 'g'");
}

#[test]
fn values_are_not_callable() {
    failure("=: f 1\nf(2)", ErrorKind::RunTime);
}

#[test]
fn conditionals() {
    let src = "=: x 5\n=? (x > 3) =: big\n=? x > 3 =! 'big' : =! 'small'\n=? x < 3 =! 'big' : =! \
               'small'\n=? x == 4 =! 'four'";
    let (result, output) = run_captured(src);

    assert_eq!(result.unwrap()["big"], "true");
    assert_eq!(output, "big\nsmall\n");
}

#[test]
fn conditional_blocks_run_in_the_same_scope() {
    let bindings = bindings("=: x 5\n=? x == 5 ={\n    =: y 1\n    =+ y 1\n} : =: y 0");
    assert_eq!(bindings["y"], "2");
}

#[test]
fn return_ends_every_enclosing_block() {
    let src = "=| sign(n) ={\n    =? n < 0 ={\n        => 'negative'\n    }\n    => \
               'positive'\n}\n=@ sign(0 - 5) =: a\n=@ sign(3) =: b";
    let bindings = bindings(src);

    assert_eq!(bindings["a"], "negative");
    assert_eq!(bindings["b"], "positive");
}

#[test]
fn comparisons() {
    let bindings = bindings("=? 'abc' < 'abd' =: s\n=? 2 >= 2.0 =: n\n=? false < true =: b\n=? 1 \
                             != 1 =: ne");
    assert_eq!(bindings["s"], "true");
    assert_eq!(bindings["n"], "true");
    assert_eq!(bindings["b"], "true");
    assert_eq!(bindings["ne"], "false");
}

#[test]
fn empty_programs() {
    assert!(bindings("\n\n").is_empty());
    failure("", ErrorKind::Error);
}

#[test]
fn evaluation_is_deterministic() {
    let src = "=| add(a, b) ={\n=: s a + b\n=> s\n}\n=@ add(1, 2) =: r\n=: t r * 1.5";
    assert_eq!(run_captured(src), run_captured(src));
}
