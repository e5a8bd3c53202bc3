use super::*;
use crate::action::Action;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Note(u32);

#[derive(Default)]
struct Tape {
    applied: Mutex<Vec<u32>>,
    refuse: Option<u32>,
}

#[derive(Debug, PartialEq)]
enum TapeError {
    Refused(u32),
    Transaction(TransactionError),
}

impl From<TransactionError> for TapeError {
    fn from(e: TransactionError) -> Self {
        TapeError::Transaction(e)
    }
}

impl Action<Tape> for Note {
    type Error = TapeError;

    fn apply(self, target: &Tape) -> Result<(), TapeError> {
        if target.refuse == Some(self.0) {
            return Err(TapeError::Refused(self.0));
        }
        target.applied.lock().unwrap().push(self.0);
        Ok(())
    }
}

fn tx(n: u32) -> TransactionId {
    TransactionId::new(format!("tx-{}", n))
}

#[test]
fn begin_binds_a_fresh_transaction() {
    let bindings = ThreadBindings::<Note>::new();
    bindings.begin(tx(1)).unwrap();
    assert_eq!(bindings.current_id(), Some(tx(1)));
}

#[test]
fn nested_begin_reports_the_existing_id() {
    let bindings = ThreadBindings::<Note>::new();
    bindings.begin(tx(1)).unwrap();

    let err = bindings.begin(tx(2)).unwrap_err();

    assert_eq!(err, TransactionError::Nested { existing: tx(1) });
    // the first transaction is still the bound one
    assert_eq!(bindings.current_id(), Some(tx(1)));
}

#[test]
fn append_without_begin_fails() {
    let bindings = ThreadBindings::<Note>::new();
    let err = bindings.append(Note(1)).unwrap_err();
    assert_eq!(err, TransactionError::NonExistent);
}

#[test]
fn commit_without_begin_fails() {
    let bindings = ThreadBindings::<Note>::new();
    let tape = Tape::default();

    let err = bindings.commit(&tape).unwrap_err();

    assert_eq!(err, TapeError::Transaction(TransactionError::NonExistent));
}

#[test]
fn commit_applies_and_unbinds() {
    let bindings = ThreadBindings::<Note>::new();
    let tape = Tape::default();
    bindings.begin(tx(1)).unwrap();
    bindings.append(Note(1)).unwrap();
    bindings.append(Note(2)).unwrap();

    let (id, count) = bindings.commit(&tape).unwrap();

    assert_eq!(id, tx(1));
    assert_eq!(count, 2);
    assert_eq!(*tape.applied.lock().unwrap(), vec![1, 2]);
    assert_eq!(bindings.current_id(), None);
}

#[test]
fn commit_failure_keeps_the_remainder_bound() {
    let bindings = ThreadBindings::<Note>::new();
    let tape = Tape {
        refuse: Some(2),
        ..Tape::default()
    };
    bindings.begin(tx(1)).unwrap();
    for n in [1, 2, 3] {
        bindings.append(Note(n)).unwrap();
    }

    let err = bindings.commit(&tape).unwrap_err();

    assert_eq!(err, TapeError::Refused(2));
    assert_eq!(*tape.applied.lock().unwrap(), vec![1]);
    // still bound, holding the un-applied remainder for abort to discard
    assert_eq!(bindings.current_id(), Some(tx(1)));
    assert_eq!(bindings.abort(), Some((tx(1), 1)));
}

#[test]
fn abort_without_transaction_is_a_noop() {
    let bindings = ThreadBindings::<Note>::new();
    assert_eq!(bindings.abort(), None);
}

#[test]
fn abort_discards_buffered_actions() {
    let bindings = ThreadBindings::<Note>::new();
    bindings.begin(tx(1)).unwrap();
    bindings.append(Note(1)).unwrap();

    assert_eq!(bindings.abort(), Some((tx(1), 1)));
    assert_eq!(bindings.current_id(), None);
}

#[test]
fn threads_bind_independently() {
    let bindings = ThreadBindings::<Note>::new();
    let tape = Tape::default();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..2u32)
            .map(|i| {
                let bindings = &bindings;
                let tape = &tape;
                s.spawn(move || {
                    bindings.begin(tx(i)).unwrap();
                    bindings.append(Note(i * 10)).unwrap();
                    bindings.append(Note(i * 10 + 1)).unwrap();
                    let (id, count) = bindings.commit(tape).unwrap();
                    assert_eq!(id, tx(i));
                    assert_eq!(count, 2);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });

    let mut applied = tape.applied.lock().unwrap().clone();
    applied.sort_unstable();
    assert_eq!(applied, vec![0, 1, 10, 11]);
    assert_eq!(bindings.current_id(), None);
}
