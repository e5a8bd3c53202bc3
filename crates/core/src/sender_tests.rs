use super::*;
use crate::resource::TransactionError;

#[test]
fn message_display_shows_kind() {
    let message = TypedMessage::new("event.recorded", r#"{"id":7}"#);
    assert_eq!(message.to_string(), "event.recorded");
}

#[test]
fn message_body_is_opaque() {
    let message = TypedMessage::new("event.recorded", "not json at all");
    assert_eq!(message.body, "not json at all");
}

#[test]
fn transaction_errors_pass_through_send_error() {
    let err = SendError::from(TransactionError::NonExistent);
    assert_eq!(err.to_string(), "no active transaction on this thread");
}

#[test]
fn delay_too_long_names_both_durations() {
    let err = SendError::DelayTooLong {
        requested: std::time::Duration::from_secs(901),
        max: std::time::Duration::from_secs(900),
    };
    let text = err.to_string();
    assert!(text.contains("901"));
    assert!(text.contains("900"));
}
