use opcalc::{
    CalcError, calculate, compile,
    interpreter::{evaluator::core::evaluate, parser::render},
};

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => {
            let tolerance = 1e-5 * expected.abs().max(1.0);
            assert!((value - expected).abs() <= tolerance,
                    "{src:?} evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("{src:?} failed:\n{}", e.report(src)),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match calculate(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_without_parentheses() {
    assert_value("2+3*4", 14.0);
    assert_value("3+4*2", 11.0);
    assert_value("10-4", 6.0);
    assert_value("8-3-2", 3.0);
    assert_value("16/4/2", 2.0);
    assert_value("2^3^2", 512.0);
    assert_value("2*3^2", 18.0);
    assert_value("10-3$4", 6.0);
    assert_value("1+7%4*2", 7.0);
}

#[test]
fn simple_operators() {
    assert_value("2+3", 5.0);
    assert_value("3*4", 12.0);
    assert_value("8/2", 4.0);
    assert_value("2^3", 8.0);
    assert_value("5!", 120.0);
    assert_value("~3", -3.0);
    assert_value("10%3", 1.0);
    assert_value("10$3", 10.0);
    assert_value("10&3", 3.0);
    assert_value("10@20", 15.0);
    assert_value("123#", 6.0);
    assert_value("1.5 + .5", 2.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20.0);
    assert_value("(10-2)^2", 64.0);
    assert_value("(10#-2)^2", 1.0);
    assert_value("((3+4)^2)/7", 7.0);
}

#[test]
fn complex_expressions() {
    assert_value("(2+3)*4-5", 15.0);
    assert_value("10/(2+3)*4", 8.0);
    assert_value("~(5*2)+10", 0.0);
    assert_value("(10%3)^2+4", 5.0);
    assert_value("2^(3+1)+1", 17.0);
    assert_value("(3+4)*(5-2)", 21.0);
    assert_value("10/(2+3) + (5-1)", 6.0);
    assert_value("(2*5)!/(10)", 362_880.0);
    assert_value("((3+2)!/(5-1))*2", 60.0);
    assert_value("(10-3$4)*2", 12.0);
    assert_value("((3+5)@(2+3))^2", 42.25);
    assert_value("(3+4)*(2+3)^2", 175.0);
    assert_value("((2+3)*4-5+6+10+1)", 32.0);
    assert_value("~(5*2)+(10/(5-3)+20+1)", 16.0);
    assert_value("(((3+4)^2)/7)+(2^2+12+1)", 24.0);
    assert_value("(2*5)!/(10-5)+14+1+2", 725_777.0);
    assert_value("((3+5)@(2+3))^2+(10-3+9+1)", 59.25);
}

#[test]
fn postfix_operators_bind_first() {
    assert_value("3!+2", 8.0);
    assert_value("(3!+2)^2", 64.0);
    assert_value("2^3!", 64.0);
    assert_value("3!!", 720.0);
    assert_value("19#!", 3_628_800.0);
}

#[test]
fn unary_chains() {
    assert_value("-3", -3.0);
    assert_value("--3", 3.0);
    assert_value("~--3", -3.0);
    assert_value("~-3", 3.0);
    assert_value("2--3", 5.0);
    assert_value("-2^2", -4.0);
    assert_value("2^-1", 0.5);
    assert_value("-(2+3)", -5.0);
    assert_value("-3!", -6.0);
    assert_value("~3!", -6.0);
    assert_value("5$-3", 5.0);
}

#[test]
fn repeated_evaluation_is_identical() {
    for src in ["2+3*4", "(3!+2)^2", "5/0", "~--3", "(3+5"] {
        assert_eq!(calculate(src), calculate(src));
    }
}

#[test]
fn division_and_modulo_by_zero() {
    assert_eq!(assert_failure("5/0"), CalcError::DivisionByZero { offset: 1 });
    assert_eq!(assert_failure("5%0"), CalcError::DivisionByZero { offset: 1 });
    assert_eq!(assert_failure("1/(2-2)"), CalcError::DivisionByZero { offset: 1 });
}

#[test]
fn mismatched_parentheses_point_at_the_culprit() {
    assert_eq!(assert_failure("(3+5"), CalcError::MismatchedParentheses { offset: 0 });
    assert_eq!(assert_failure("4+5)"), CalcError::MismatchedParentheses { offset: 3 });
    assert_eq!(assert_failure("(1+(2)"), CalcError::MismatchedParentheses { offset: 0 });
}

#[test]
fn factorial_domain() {
    assert!(matches!(assert_failure("(-3)!"), CalcError::FactorialNegativeNumber { .. }));
    assert!(matches!(assert_failure("2.5!"), CalcError::FactorialNonInteger { .. }));
    assert_value("170!", 7.257_415_615_307_994e306);
    assert!(matches!(assert_failure("171!"), CalcError::RangeExceeded { .. }));
    assert_value("((0.1+0.2)*10)!", 6.0);
}

#[test]
fn results_beyond_range_are_errors() {
    assert!(matches!(assert_failure("10^309"), CalcError::RangeExceeded { .. }));
    assert!(matches!(assert_failure("10^200*10^200"), CalcError::RangeExceeded { .. }));
    assert!(matches!(assert_failure("(10^17)#"), CalcError::RangeExceeded { .. }));
}

#[test]
fn literals_above_ceiling_are_errors() {
    let big = format!("17{}", "0".repeat(307));
    assert_eq!(assert_failure(&big).offset(), Some(0));
    assert!(matches!(assert_failure(&big), CalcError::RangeExceeded { .. }));

    for src in [format!("{big}@{big}"), format!("{big}$1"), format!("1&{big}"), format!("-{big}")] {
        assert!(matches!(assert_failure(&src), CalcError::RangeExceeded { .. }), "{src}");
    }
    assert_value(&format!("1{}", "0".repeat(308)), 1e308);
}

#[test]
fn invalid_syntax() {
    for src in ["2*^3", "5//2", "3+*", "3+", "*3", "!3", "-~3", "2~3", "1 2", "2(3)"] {
        assert!(matches!(assert_failure(src), CalcError::InvalidExpression { .. }),
                "{src:?}");
    }
}

#[test]
fn lexical_errors() {
    assert_eq!(assert_failure("abc123"),
               CalcError::InvalidCharacter { character: 'a',
                                             offset:    0, });
    assert!(matches!(assert_failure("ג'יבריש"), CalcError::InvalidCharacter { .. }));
    assert!(matches!(assert_failure("1.2.3"), CalcError::InvalidToken { .. }));
    assert_eq!(assert_failure("~~3"), CalcError::ConsecutiveTildes { offset: 1 });
    assert!(matches!(assert_failure("2*()"), CalcError::InvalidExpression { offset: Some(2), .. }));
    assert!(calculate("!@#$%^&*").is_err());
}

#[test]
fn empty_and_whitespace_input() {
    for src in ["", "   ", "\t\t"] {
        assert!(matches!(assert_failure(src), CalcError::InvalidExpression { offset: None, .. }));
    }
}

#[test]
fn report_draws_marker_under_offset() {
    let src = "2 * (3 + 4";
    let report = assert_failure(src).report(src).to_string();
    assert_eq!(report, "Error: Mismatched parentheses.\n2*(3+4\n  ^");

    let src = "7 ! + 1 / 0";
    let report = assert_failure(src).report(src).to_string();
    assert_eq!(report, "Error: Division by zero is not allowed.\n7!+1/0\n    ^");
}

#[test]
fn compiled_plan_evaluates_like_calculate() {
    for src in ["2^-3", "~3!+10#", "5@7$2", "-(4-6)%3"] {
        let plan = compile(src).unwrap();
        assert_eq!(evaluate(&plan), calculate(src), "{src} ({})", render(&plan));
    }
    assert_eq!(compile("(1+2").unwrap_err(), calculate("(1+2").unwrap_err());
}
