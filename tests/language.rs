use exacta::{
    ParseOptions, Value,
    error::ErrorKind,
    number::{base::BaseSystem, integer::Integer, rational::Rational},
    parse,
};

fn eval(src: &str) -> Value {
    parse(src, &ParseOptions::default()).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn assert_value(src: &str, expected: &str) {
    assert_eq!(eval(src).to_string(), expected, "while evaluating '{src}'");
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match parse(src, &ParseOptions::default()) {
        Ok(v) => panic!("'{src}' succeeded with {v} but was expected to fail with {kind:?}"),
        Err(e) => assert_eq!(e.kind(), kind, "while evaluating '{src}': {e}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("1 + 2 * 3", "7");
    assert_value("(1 + 2) * 3", "9");
    assert_value("10 - 4 - 3", "3");
    assert_value("2 * 3 / 4", "3/2");
    assert_value("-2^2", "-4");
    assert_value("(-2)^2", "4");
    assert_value("2^-1", "1/2");
}

#[test]
fn whitespace_separates_fractions_from_division() {
    assert_eq!(eval("7/2"), Value::Rational(Rational::new(7, 2).unwrap()));
    assert_value("12/ 3", "4");
    assert_value("12 /3", "4");
    assert_value("1/2/2", "1/4");
}

#[test]
fn whole_results_are_integers() {
    assert_eq!(eval("4/2"), Value::Integer(Integer::new(2)));
    assert_eq!(eval("3/1"), Value::Integer(Integer::new(3)));
    assert_eq!(eval("1/2 + 1/2"), Value::Integer(Integer::new(1)));
    assert_eq!(eval("0.5 * 4"), Value::Integer(Integer::new(2)));
}

#[test]
fn explicit_base_fractions_stay_rational() {
    assert_eq!(eval("4/2[10]"), Value::Rational(Rational::from_integer(2)));
    assert_eq!(eval("4/2[10]!"), Value::Rational(Rational::from_integer(2)));
    assert_eq!(eval("4/2[10] + 0"), Value::Integer(Integer::new(2)));
}

#[test]
fn repeating_and_continued_fractions() {
    assert_value("0.#3", "1/3");
    assert_value("733.#3", "2200/3");
    assert_value("0.1#6 * 6", "1");
    assert_value("3.~7~16", "355/113");
    assert_value("-3.~7", "-20/7");
    assert_value("2..3/4", "11/4");
}

#[test]
fn uncertainty_notation() {
    let Value::Interval(interval) = eval("1.23[56,67]") else {
        panic!("expected an interval");
    };
    assert_eq!(interval.low(), &Rational::new(12356, 10000).unwrap());
    assert_eq!(interval.high(), &Rational::new(12367, 10000).unwrap());

    assert_value("1.3[+-1]", "129/100:131/100");
    assert_value("-1.3[+-1]", "-131/100:-129/100");
    assert_value("1.3[+- 1]", "129/100:131/100");
}

#[test]
fn intervals() {
    assert_value("3:1", "1:3");
    assert_value("1:2 + 1", "2:3");
    assert_value("(1:2) * (-1:1)", "-2:2");
    assert_value("1:1", "1:1");
    assert_value("1:1 + 0", "1");
    assert_failure("1:2:3", ErrorKind::UndefinedOperation);
}

#[test]
fn power_operators_disagree_across_zero() {
    assert_value("(-1:2)^2", "0:4");
    assert_value("(-1:2)**2", "-2:4");
    assert_value("(1:2)^-1", "1/2:1");
}

#[test]
fn repeated_multiplication_is_never_promoted() {
    assert!(matches!(eval("2**2"), Value::Interval(_)));
    assert_value("2**2", "4:4");
    assert_value("2**-2", "1/4:1/4");
    assert_value("2**2 + 1", "5");
}

#[test]
fn scientific_notation() {
    assert_value("1E2", "100");
    assert_value("1.5E-3", "3/2000");
    assert_value("2 E3", "2000");
    assert_value("1 + 2 E3", "2001");
    assert_value("(2)E1^2", "400");
}

#[test]
fn factorials() {
    assert_value("5!", "120");
    assert_value("7!!", "105");
    assert_value("-4!", "-24");
    assert_failure("(1/2)!", ErrorKind::UndefinedOperation);
    assert_failure("(0-3)!", ErrorKind::UndefinedOperation);
}

#[test]
fn arithmetic_errors() {
    assert_failure("0^0", ErrorKind::UndefinedOperation);
    assert_failure("(0:0)^0", ErrorKind::UndefinedOperation);
    assert_failure("1/0", ErrorKind::DivisionByZero);
    assert_failure("1/(1-1)", ErrorKind::DivisionByZero);
    assert_failure("1/(-1:1)", ErrorKind::DivisionByZero);
    assert_failure("0^-1", ErrorKind::DivisionByZero);
}

#[test]
fn syntax_and_format_errors() {
    assert_failure("", ErrorKind::Format);
    assert_failure("   ", ErrorKind::Format);
    assert_failure("2^3^2", ErrorKind::Syntax);
    assert_failure("2 +", ErrorKind::Syntax);
    assert_failure("(1 + 2", ErrorKind::Syntax);
    assert_failure("1 + 2)", ErrorKind::Syntax);
    assert_failure("1 $ 2", ErrorKind::Syntax);
    assert_failure("12a", ErrorKind::InvalidDigit);
    assert_failure("1[63]", ErrorKind::Range);
    assert_failure("3.~7~", ErrorKind::Format);
}

#[test]
fn input_base_applies_to_bare_numerals() {
    let hex = ParseOptions::default().with_input_base(BaseSystem::hexadecimal());
    assert_eq!(parse("FF + 1", &hex).unwrap().to_string(), "256");
    assert_eq!(parse("A.8", &hex).unwrap().to_string(), "21/2");
    assert_eq!(parse("1_^2", &hex).unwrap().to_string(), "256");
    assert_eq!(parse("10[10] + 1", &hex).unwrap().to_string(), "11");

    let binary = ParseOptions::default().with_input_base(BaseSystem::binary());
    assert_eq!(parse("101 + 1", &binary).unwrap().to_string(), "6");
    assert_eq!(parse("2", &binary).unwrap_err().kind(), ErrorKind::InvalidDigit);
}

#[test]
fn base_literals_in_decimal_input() {
    assert_value("11[2] + 1", "4");
    assert_value("FF[16]", "255");
    assert_value("Z[36]", "35");
}

#[test]
fn legacy_mode_always_returns_intervals() {
    let legacy = ParseOptions::default().with_type_aware(false);
    assert_eq!(parse("1/2", &legacy).unwrap().to_string(), "1/2:1/2");
    assert_eq!(parse("2 + 3", &legacy).unwrap().to_string(), "5:5");
    assert!(matches!(parse("4/2", &legacy).unwrap(), Value::Interval(_)));
}
