use super::*;

#[test]
fn records_sends_in_order() {
    let sender = FakeSender::new();

    sender.send(TypedMessage::new("a", "{}")).unwrap();
    sender
        .send_delayed(TypedMessage::new("b", "{}"), Duration::from_secs(5))
        .unwrap();

    assert_eq!(
        sender.calls(),
        vec![
            SenderCall::Send {
                message: TypedMessage::new("a", "{}")
            },
            SenderCall::SendDelayed {
                message: TypedMessage::new("b", "{}"),
                delay: Duration::from_secs(5)
            },
        ]
    );
}

#[test]
fn clear_calls_resets_the_record() {
    let sender = FakeSender::new();
    sender.send(TypedMessage::new("a", "{}")).unwrap();

    sender.clear_calls();

    assert!(sender.calls().is_empty());
}

#[test]
fn configured_failure_rejects_and_records_nothing() {
    let sender = FakeSender::new();
    sender.set_send_fails(true);

    let err = sender.send(TypedMessage::new("a", "{}")).unwrap_err();

    assert!(matches!(err, SendError::Rejected(_)));
    assert!(sender.calls().is_empty());
}
