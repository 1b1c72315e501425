use kalkulator::{
    engine::evaluate,
    error::EvalError,
    util::locale::{format_number, to_eval_notation},
};

#[test]
fn positional_range_edges() {
    assert_eq!(format_number(1e14), "100000000000000");
    assert_eq!(format_number(123_456_789_012_345.0), "123456789012345");
    assert_eq!(format_number(1e15), "1E+15");
    assert_eq!(format_number(0.000_01), "0,00001");
    assert_eq!(format_number(0.000_001), "1E-06");
    assert_eq!(format_number(-2.5e-300), "-2,5E-300");
}

#[test]
fn scientific_text_is_expanded() {
    assert_eq!(to_eval_notation("1E+20").as_deref(), Ok("100000000000000000000"));
    assert_eq!(to_eval_notation("12,5E-1").as_deref(), Ok("1.25"));
    assert_eq!(to_eval_notation("1,5E+1").as_deref(), Ok("15"));
    assert_eq!(to_eval_notation("2*(1,5E-07+1)").as_deref(), Ok("2*(0.00000015+1)"));
    assert_eq!(to_eval_notation("(1+2)").as_deref(), Ok("(1+2)"));
}

#[test]
fn malformed_exponents_are_left_alone() {
    assert_eq!(to_eval_notation("2E+401").as_deref(), Ok("2E+401"));
    assert_eq!(to_eval_notation("E+5").as_deref(), Ok("E+5"));
    assert_eq!(to_eval_notation("1E").as_deref(), Ok("1E"));
    assert!(matches!(evaluate("2E+401"), Err(EvalError::MalformedExpression { .. })));
}

#[test]
fn dot_decimals_are_rejected() {
    let err = to_eval_notation("1+3.5").unwrap_err();
    assert!(err.to_string().contains("column 4"), "{err}");
}
