use kalkulator::{
    calculator::{Accumulator, DisplayState, Event, Paren},
    error::EvalError,
    operator::{BinaryOperator, UnaryOperator},
};

fn typed(keys: &str) -> Accumulator {
    let mut calc = Accumulator::new();
    for event in Event::parse_sequence(keys).unwrap() {
        calc.handle(event);
    }
    calc
}

#[test]
fn starts_empty() {
    let calc = Accumulator::new();
    assert_eq!(calc.text(), "");
    assert_eq!(calc.state(), DisplayState::Empty);
    assert_eq!(calc.last_error(), None);
}

#[test]
fn comma_decimals_round_trip() {
    let mut calc = typed("3,5");
    assert_eq!(calc.text(), "3,5");
    calc.equals();
    assert_eq!(calc.text(), "3,5");
    assert_eq!(calc.state(), DisplayState::Result);

    let mut calc = typed("1,5+2,5");
    calc.equals();
    assert_eq!(calc.text(), "4");

    let mut calc = typed("0,1+0,2");
    calc.equals();
    assert_eq!(calc.text(), "0,3");
}

#[test]
fn square_and_square_root() {
    let mut calc = typed("4");
    calc.apply_unary(UnaryOperator::Square);
    assert_eq!(calc.text(), "16");
    assert_eq!(calc.state(), DisplayState::Result);

    let mut calc = typed("2,25");
    calc.handle(Event::SquareRoot);
    assert_eq!(calc.text(), "1,5");
}

#[test]
fn square_root_of_negative_shows_error() {
    let mut calc = typed("-4");
    assert_eq!(calc.buffer(), "-4");
    calc.apply_unary(UnaryOperator::SquareRoot);
    assert_eq!(calc.text(), "Error!");
    assert_eq!(calc.buffer(), "");
    assert_eq!(calc.state(), DisplayState::ErrorShown);
    assert!(matches!(calc.last_error(), Some(EvalError::DomainError { .. })));
}

#[test]
fn unary_needs_a_single_number() {
    let mut calc = typed("1+2");
    calc.apply_unary(UnaryOperator::Square);
    assert_eq!(calc.state(), DisplayState::ErrorShown);

    let mut calc = Accumulator::new();
    calc.apply_unary(UnaryOperator::SquareRoot);
    assert_eq!(calc.state(), DisplayState::ErrorShown);
}

#[test]
fn squaring_past_the_range_overflows() {
    let mut calc = Accumulator::new();
    calc.equals_on("1E+200");
    assert_eq!(calc.text(), "1E+200");
    calc.apply_unary(UnaryOperator::Square);
    assert_eq!(calc.state(), DisplayState::ErrorShown);
    assert_eq!(calc.last_error(), Some(&EvalError::NumberOverflow));
}

#[test]
fn second_separator_in_a_number_is_ignored() {
    let mut calc = typed("1,2");
    calc.append_decimal_separator();
    assert_eq!(calc.text(), "1,2");

    calc.append_operator(BinaryOperator::Add);
    calc.append_digit(3);
    calc.append_decimal_separator();
    assert_eq!(calc.text(), "1,2+3,");
}

#[test]
fn digit_after_error_starts_fresh() {
    let mut calc = typed("5/0=");
    assert_eq!(calc.text(), "Error!");
    assert_eq!(calc.state(), DisplayState::ErrorShown);
    assert_eq!(calc.last_error(), Some(&EvalError::DivisionByZero));

    let shown = calc.handle(Event::Digit(7));
    assert_eq!(shown.text, "7");
    assert_eq!(shown.state, DisplayState::Entering);
    assert_eq!(calc.last_error(), None);
}

#[test]
fn operator_after_error_starts_fresh() {
    let mut calc = typed("1+*2=");
    assert_eq!(calc.state(), DisplayState::ErrorShown);
    calc.append_operator(BinaryOperator::Sub);
    assert_eq!(calc.text(), "-");
    assert_eq!(calc.state(), DisplayState::Entering);
}

#[test]
fn digit_after_result_starts_fresh() {
    let mut calc = typed("2+2=");
    assert_eq!(calc.text(), "4");
    calc.handle(Event::Digit(5));
    assert_eq!(calc.text(), "5");

    let mut calc = typed("2+2=");
    calc.handle(Event::Paren(Paren::Open));
    assert_eq!(calc.text(), "(");

    let mut calc = typed("2+2=");
    calc.handle(Event::DecimalSeparator);
    assert_eq!(calc.text(), ",");
}

#[test]
fn operator_after_result_continues_from_it() {
    let mut calc = typed("4 x^2 +1 =");
    assert_eq!(calc.text(), "17");

    let mut calc = Accumulator::new();
    calc.equals_on("1E+20");
    for event in Event::parse_sequence("*2=").unwrap() {
        calc.handle(event);
    }
    assert_eq!(calc.text(), "2E+20");
}

#[test]
fn backspace() {
    let mut calc = Accumulator::new();
    calc.backspace();
    assert_eq!(calc.state(), DisplayState::Empty);
    assert_eq!(calc.text(), "");

    let mut calc = typed("12");
    calc.backspace();
    assert_eq!(calc.text(), "1");
    assert_eq!(calc.state(), DisplayState::Entering);
    calc.backspace();
    assert_eq!(calc.text(), "");
    assert_eq!(calc.state(), DisplayState::Empty);

    let mut calc = typed("12,5*2=");
    assert_eq!(calc.text(), "25");
    calc.handle(Event::Backspace);
    assert_eq!(calc.text(), "");
    assert_eq!(calc.state(), DisplayState::Empty);

    let mut calc = typed("1/0=");
    calc.backspace();
    assert_eq!(calc.text(), "");
    assert_eq!(calc.state(), DisplayState::Empty);
}

#[test]
fn clears() {
    let mut calc = typed("12+3");
    calc.handle(Event::ClearEntry);
    assert_eq!(calc.text(), "");
    assert_eq!(calc.state(), DisplayState::Empty);

    let mut calc = typed("5/0=");
    calc.handle(Event::ClearAll);
    assert_eq!(calc.text(), "");
    assert_eq!(calc.state(), DisplayState::Empty);
    assert_eq!(calc.last_error(), None);
}

#[test]
fn equals_on_empty_does_nothing() {
    let mut calc = Accumulator::new();
    let shown = calc.handle(Event::Equals);
    assert_eq!(shown.text, "");
    assert_eq!(shown.state, DisplayState::Empty);
}

#[test]
fn malformed_input_shows_error() {
    for keys in ["2(3+4)=", "(1+2=", "2+=", "()="] {
        let calc = typed(keys);
        assert_eq!(calc.state(), DisplayState::ErrorShown, "{keys}");
        assert!(matches!(calc.last_error(), Some(EvalError::MalformedExpression { .. })),
                "{keys}");
    }
}

#[test]
fn custom_error_marker() {
    let mut calc = Accumulator::with_error_marker("Błąd!");
    calc.equals_on("5/0");
    assert_eq!(calc.text(), "Błąd!");
    assert_eq!(calc.error_marker(), "Błąd!");
    assert_eq!(calc.buffer(), "");
}

#[test]
fn out_of_range_digit_is_ignored() {
    let mut calc = typed("1");
    calc.append_digit(12);
    assert_eq!(calc.text(), "1");
}

#[test]
fn instances_are_independent() {
    let mut first = typed("1+1");
    let second = typed("9");
    first.equals();
    assert_eq!(first.text(), "2");
    assert_eq!(second.text(), "9");
    assert_eq!(second.state(), DisplayState::Entering);
}

#[test]
fn small_scientific_result_can_be_continued() {
    let mut calc = typed("3/20000000=");
    assert_eq!(calc.text(), "1,5E-07");
    for event in Event::parse_sequence("+1=").unwrap() {
        calc.handle(event);
    }
    assert_eq!(calc.text(), "1,00000015");
}

#[test]
fn deeply_nested_input_shows_error() {
    let mut calc = Accumulator::new();
    calc.equals_on(&format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000)));
    assert_eq!(calc.state(), DisplayState::ErrorShown);
    assert!(matches!(calc.last_error(), Some(EvalError::MalformedExpression { .. })));
}

#[test]
fn dot_is_not_a_display_decimal() {
    let mut calc = Accumulator::new();
    calc.equals_on("3.5");
    assert_eq!(calc.state(), DisplayState::ErrorShown);
    assert!(matches!(calc.last_error(), Some(EvalError::MalformedExpression { .. })));

    calc.equals_on("3,5");
    assert_eq!(calc.text(), "3,5");
}
