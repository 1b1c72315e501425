use kalkulator::{
    calculator::{Event, KEYPAD_LABELS, Paren},
    error::EventError,
    operator::BinaryOperator,
};

#[test]
fn every_keypad_label_is_an_event() {
    for label in KEYPAD_LABELS.iter().flatten() {
        let event: Event = label.parse().unwrap_or_else(|e| panic!("label '{label}': {e}"));
        assert_eq!(event.to_string(), *label);
    }
}

#[test]
fn labels_round_trip_through_display() {
    let mut events: Vec<Event> = (0..=9).map(Event::Digit).collect();
    events.extend(BinaryOperator::ALL.map(Event::Operator));
    events.extend([Event::Paren(Paren::Open),
                   Event::Paren(Paren::Close),
                   Event::DecimalSeparator,
                   Event::Equals,
                   Event::Square,
                   Event::SquareRoot,
                   Event::ClearEntry,
                   Event::ClearAll,
                   Event::Backspace]);

    for event in events {
        assert_eq!(event.to_string().parse::<Event>(), Ok(event));
    }
}

#[test]
fn aliases() {
    assert_eq!("sqr".parse::<Event>(), Ok(Event::Square));
    assert_eq!("²".parse::<Event>(), Ok(Event::Square));
    assert_eq!("√".parse::<Event>(), Ok(Event::SquareRoot));
    assert_eq!("back".parse::<Event>(), Ok(Event::Backspace));
    assert_eq!("⌫".parse::<Event>(), Ok(Event::Backspace));
    assert_eq!(".".parse::<Event>(), Ok(Event::DecimalSeparator));
}

#[test]
fn clear_labels_are_distinct() {
    assert_eq!(Event::parse_sequence("C CE"), Ok(vec![Event::ClearAll, Event::ClearEntry]));
}

#[test]
fn sequences_mix_labels_and_character_runs() {
    let events = Event::parse_sequence("12 sqrt <- 3,5=").unwrap();
    assert_eq!(events,
               vec![Event::Digit(1),
                    Event::Digit(2),
                    Event::SquareRoot,
                    Event::Backspace,
                    Event::Digit(3),
                    Event::DecimalSeparator,
                    Event::Digit(5),
                    Event::Equals]);

    assert_eq!(Event::parse_sequence("   "), Ok(vec![]));
}

#[test]
fn unknown_labels() {
    assert_eq!("".parse::<Event>(), Err(EventError::Empty));
    assert_eq!("%".parse::<Event>(), Err(EventError::UnknownLabel { label: "%".to_string() }));
    assert_eq!(Event::parse_sequence("1 + x2"),
               Err(EventError::UnknownLabel { label: "x2".to_string() }));
}

#[test]
fn unary_events() {
    assert!(Event::Square.unary_operator().is_some());
    assert!(Event::SquareRoot.unary_operator().is_some());
    assert_eq!(Event::Equals.unary_operator(), None);
}
