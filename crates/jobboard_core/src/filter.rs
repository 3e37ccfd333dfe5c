use std::cell::Cell;
use std::rc::Rc;

use crate::{Signal, Subscription};

/// `^[0-9]*$`: empty or ASCII digits only.
pub fn is_valid_request_id(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Validation state of the request-id field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Empty,
    ValidNonEmpty,
    Invalid,
}

impl FieldState {
    /// Evaluates the full text; the previous state plays no part.
    pub fn classify(text: &str) -> Self {
        if text.is_empty() {
            FieldState::Empty
        } else if is_valid_request_id(text) {
            FieldState::ValidNonEmpty
        } else {
            FieldState::Invalid
        }
    }

    pub fn is_valid(self) -> bool {
        !matches!(self, FieldState::Invalid)
    }
}

/// The request-id text field.
///
/// The raw text is always kept (it is what the user sees). Publishing to the
/// shared filter happens through the listener attached by [`FilterInput::bind`].
#[derive(Debug, Default)]
pub struct FilterInput {
    text: Signal<String>,
    state: Rc<Cell<FieldState>>,
}

impl FilterInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.set(FieldState::classify(&text));
        self.text.set(text);
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn field_state(&self) -> FieldState {
        self.state.get()
    }

    /// Watches value changes and publishes every valid value to `filter`.
    /// Invalid values are dropped, leaving the last valid one in place.
    pub fn bind(&self, filter: &Signal<String>) -> Subscription {
        let filter = filter.clone();
        self.text.subscribe(move |value| {
            if is_valid_request_id(value) {
                filter.set(value.clone());
            }
        })
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.text.listener_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_follows_full_text() {
        assert_eq!(FieldState::classify(""), FieldState::Empty);
        assert_eq!(FieldState::classify("0"), FieldState::ValidNonEmpty);
        assert_eq!(FieldState::classify("0123456789"), FieldState::ValidNonEmpty);
        assert_eq!(FieldState::classify("12a"), FieldState::Invalid);
        assert_eq!(FieldState::classify(" 12"), FieldState::Invalid);
        assert_eq!(FieldState::classify("-1"), FieldState::Invalid);
        assert_eq!(FieldState::classify("1.5"), FieldState::Invalid);
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        // Arabic-Indic digit three.
        assert!(!is_valid_request_id("\u{0663}"));
        assert!(!is_valid_request_id("１２"));
    }

    #[test]
    fn bound_input_publishes_only_valid_text() {
        let filter = Signal::new(String::new());
        let input = FilterInput::new();
        let _sub = input.bind(&filter);

        input.set_text("12");
        assert_eq!(filter.get(), "12");

        input.set_text("12a");
        assert_eq!(input.field_state(), FieldState::Invalid);
        assert_eq!(input.text(), "12a");
        assert_eq!(filter.get(), "12");

        input.set_text("");
        assert_eq!(input.field_state(), FieldState::Empty);
        assert_eq!(filter.get(), "");
    }

    #[test]
    fn unbound_input_still_validates_but_never_publishes() {
        let filter = Signal::new("5".to_string());
        let input = FilterInput::new();
        let sub = input.bind(&filter);
        assert!(input.is_bound());
        drop(sub);
        assert!(!input.is_bound());

        input.set_text("77");

        assert_eq!(input.field_state(), FieldState::ValidNonEmpty);
        assert_eq!(filter.get(), "5");
    }
}
