use std::cell::RefCell;

use lookupcli::pipeline::{Lookup, Outcome, Phase, run_cycle};

/// Records every query it receives and answers with a fixed value.
struct FakeLookup {
    answer: Option<u32>,
    queries: RefCell<Vec<String>>,
}

impl FakeLookup {
    fn new(answer: Option<u32>) -> Self {
        Self {
            answer,
            queries: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl Lookup for FakeLookup {
    type Record = u32;

    async fn fetch(&self, query: &str) -> Option<u32> {
        self.queries.borrow_mut().push(query.to_string());
        self.answer
    }
}

#[tokio::test]
async fn test_empty_input_never_calls_lookup() {
    let lookup = FakeLookup::new(Some(1));

    for query in ["", " ", "\t", "  \n"] {
        let mut phases = Vec::new();
        let outcome = run_cycle(&lookup, query, |p| phases.push(p)).await;

        assert_eq!(outcome, Outcome::Idle);
        assert_eq!(phases, vec![Phase::Idle]);
    }

    assert_eq!(lookup.calls(), 0);
}

#[tokio::test]
async fn test_rendered_cycle() {
    let lookup = FakeLookup::new(Some(42));
    let mut phases = Vec::new();

    let outcome = run_cycle(&lookup, "  Maria ", |p| phases.push(p)).await;

    assert_eq!(
        outcome,
        Outcome::Rendered {
            query: "Maria".to_string(),
            record: 42
        }
    );
    assert_eq!(outcome.record(), Some(&42));
    assert_eq!(phases, vec![Phase::Querying, Phase::Rendered]);
    assert_eq!(*lookup.queries.borrow(), vec!["Maria".to_string()]);
}

#[tokio::test]
async fn test_empty_cycle() {
    let lookup = FakeLookup::new(None);
    let mut phases = Vec::new();

    let outcome = run_cycle(&lookup, "Xptoqwerty", |p| phases.push(p)).await;

    assert_eq!(
        outcome,
        Outcome::Empty {
            query: "Xptoqwerty".to_string()
        }
    );
    assert_eq!(outcome.phase(), Phase::Empty);
    assert!(outcome.record().is_none());
    assert_eq!(phases, vec![Phase::Querying, Phase::Empty]);
}

#[tokio::test]
async fn test_cycles_do_not_share_state() {
    let lookup = FakeLookup::new(Some(7));

    let first = run_cycle(&lookup, "Ana", |_| {}).await;
    let idle = run_cycle(&lookup, "", |_| {}).await;
    let second = run_cycle(&lookup, "Ana", |_| {}).await;

    assert_eq!(first, second);
    assert_eq!(idle.phase(), Phase::Idle);
    assert_eq!(lookup.calls(), 2);
}

#[test]
fn test_phase_display() {
    assert_eq!(Phase::Idle.to_string(), "idle");
    assert_eq!(Phase::Querying.to_string(), "querying");
    assert_eq!(Phase::Rendered.to_string(), "rendered");
    assert_eq!(Phase::Empty.to_string(), "empty");
}
