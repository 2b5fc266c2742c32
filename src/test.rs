use super::{Error, Interpreter, MAX_DEPTH};

fn evaluates_to(input: &str, expected: f64) {
    let mut interpreter = Interpreter::new();
    let result = interpreter.interpret(input);
    assert!(
        matches!(result, Ok(Some(value)) if value == expected),
        "\nFailed to evaluate \"{}\":\nexpected {:?}, got {:?}\n",
        input,
        expected,
        result
    );
}

fn assert_raises_error(input: &str, msg: &str) {
    let mut interpreter = Interpreter::new();
    match interpreter.interpret(input) {
        Err(err) => assert_eq!(msg, err.to_string()),
        Ok(value) => panic!("expected \"{input}\" to fail, got {value:?}"),
    }
}

#[test]
fn test_empty_line() {
    let mut interpreter = Interpreter::new();
    assert_eq!(Ok(None), interpreter.interpret(""));
    assert_eq!(Ok(None), interpreter.interpret("   "));
}

#[test]
fn test_arithmetic() {
    evaluates_to("1 + 1", 2.0);
    evaluates_to("7 % 3", 1.0);
    evaluates_to("1 / 4", 0.25);
    evaluates_to("(1 + 2) * 3", 9.0);
    evaluates_to("2 + 3 * 4", 14.0);
    evaluates_to("2 * 3 + 4", 10.0);
    evaluates_to("((((5))))", 5.0);
    evaluates_to(".5 + 1.25", 1.75);
}

#[test]
fn test_multiplicative_left_to_right() {
    evaluates_to("8 / 4 / 2", 1.0);
    evaluates_to("2 * 6 / 3 % 3", 1.0);
}

#[test]
fn test_additive_right_to_left() {
    evaluates_to("10 - 3 - 2", 9.0);
    evaluates_to("10 - 2 + 3", 5.0);
    evaluates_to("1 - 1 * 2 - 3", 2.0);
}

#[test]
fn test_multiplicative_before_group_takes_remainder() {
    // The eager collapse only fires when the right operand is already a number.
    evaluates_to("2 * (3) + 1", 8.0);
    evaluates_to("(2) * 3 + 1", 7.0);
}

#[test]
fn test_floored_modulo() {
    evaluates_to("(0 - 7) % 3", 2.0);
    evaluates_to("7 % (0 - 3)", -2.0);
}

#[test]
fn test_modulo_zero_sign() {
    let mut interpreter = Interpreter::new();
    let negative = interpreter.interpret("6 % (0 - 3)").unwrap().unwrap();
    assert!(negative == 0.0 && negative.is_sign_negative());
    let positive = interpreter.interpret("(0 * (0 - 1)) % 3").unwrap().unwrap();
    assert!(positive == 0.0 && positive.is_sign_positive());
}

#[test]
fn test_float_names() {
    evaluates_to("inf", f64::INFINITY);
    evaluates_to("Infinity - 1", f64::INFINITY);
    let mut interpreter = Interpreter::new();
    assert!(matches!(interpreter.interpret("nan"), Ok(Some(n)) if n.is_nan()));
    assert_eq!(Err(Error::invalid()), interpreter.interpret("inf = 3"));
    assert!(interpreter.variables().is_empty());
}

#[test]
fn test_assignment() {
    let mut interpreter = Interpreter::new();
    assert_eq!(Ok(Some(5.0)), interpreter.interpret("x = 5"));
    assert_eq!(Ok(Some(5.0)), interpreter.interpret("x"));
    assert_eq!(Ok(Some(11.0)), interpreter.interpret("y = x * 2 + 1"));
    assert_eq!(Ok(Some(16.0)), interpreter.interpret("x + y"));
    assert_eq!(Ok(Some(6.0)), interpreter.interpret("x = x + 1"));
    assert_eq!(Ok(6.0), interpreter.get_variable("x"));
    assert_eq!(2, interpreter.variables().len());
}

#[test]
fn test_undefined_variable() {
    let mut interpreter = Interpreter::new();
    let err = interpreter.interpret("y").unwrap_err();
    assert_eq!(Error::UndefinedVariable("y".to_string()), err);
    assert!(err.is_invalid_input());
    assert_eq!(
        Err(Error::UndefinedVariable("z".to_string())),
        interpreter.interpret("1 + z")
    );
    assert_eq!(
        Err(Error::UndefinedVariable("q".to_string())),
        interpreter.get_variable("q")
    );
}

#[test]
fn test_failed_assignment_leaves_store_untouched() {
    let mut interpreter = Interpreter::new();
    assert!(interpreter.interpret("x = 1 +").is_err());
    assert!(interpreter.interpret("x = y").is_err());
    assert!(interpreter.variables().is_empty());
    assert_eq!(
        Err(Error::UndefinedVariable("x".to_string())),
        interpreter.interpret("x")
    );
}

#[test]
fn test_assignment_without_value() {
    let mut interpreter = Interpreter::new();
    assert_eq!(
        Err(Error::UndefinedVariable("x".to_string())),
        interpreter.interpret("x =")
    );
    assert!(interpreter.variables().is_empty());
    assert_eq!(Ok(Some(4.0)), interpreter.interpret("x = 4"));
    assert_eq!(Err(Error::invalid()), interpreter.interpret("x ="));
    assert_eq!(Ok(4.0), interpreter.get_variable("x"));
    assert_eq!(1, interpreter.variables().len());
}

#[test]
fn test_long_chains() {
    let chain = |terms: usize| vec!["1"; terms].join(" + ");
    evaluates_to(&chain(MAX_DEPTH), MAX_DEPTH as f64);
    assert_raises_error(
        &chain(100_000),
        "Invalid input: expression nested too deeply.",
    );
    // Multiplicative runs collapse in place and are not limited.
    evaluates_to(&vec!["1"; 100_000].join(" * "), 1.0);
}

#[test]
fn test_deep_nesting() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    evaluates_to(&nested(crate::MAX_NESTING), 1.0);
    assert_raises_error(
        &nested(100_000),
        "Invalid input: failed to tokenize. (Parentheses nested too deeply at column 129)",
    );
}

#[test]
fn test_invalid_input() {
    assert_raises_error("+ 1", "Invalid input.");
    assert_raises_error("1 +", "Invalid input.");
    assert_raises_error("1 + * 2", "Invalid input.");
    assert_raises_error("1 2", "Invalid input.");
    assert_raises_error("1 = 2", "Invalid input.");
    assert_raises_error("x => 2", "Undefined variable x");
    assert_raises_error("()", "Invalid input.");
    assert_raises_error("+", "Invalid input.");
}

#[test]
fn test_tokenizer_failures() {
    assert_raises_error(
        "(1 + 1",
        "Invalid input: failed to tokenize. (Imbalanced parentheses at column 1)",
    );
    assert_raises_error(
        "1 + 1)",
        "Invalid input: failed to tokenize. (Imbalanced parentheses at column 6)",
    );
    assert_raises_error(
        "1 $ 2",
        "Invalid input: failed to tokenize. (unrecognized input '$' at column 3)",
    );
    let mut interpreter = Interpreter::new();
    assert!(interpreter.interpret("1 $ 2").unwrap_err().is_invalid_input());
}

#[test]
fn test_division_by_zero() {
    assert_raises_error("1 / 0", "Arithmetic fault: division by zero");
    assert_raises_error("1 % (2 - 2)", "Arithmetic fault: modulo by zero");
    let mut interpreter = Interpreter::new();
    let err = interpreter.interpret("1 / 0").unwrap_err();
    assert!(!err.is_invalid_input());
}
