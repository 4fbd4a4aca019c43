//! Integration tests for waitline behavior.
//!
//! These tests drive the public API through whole scenarios rather than
//! single operations.

use waitline_lib::{Entrant, Outcome, Script, Waitline, WaitlineError, parse_step};

fn line_of(names: &[&str]) -> Waitline {
    names.iter().map(|name| Entrant::regular(*name)).collect()
}

fn names(line: &Waitline) -> Vec<String> {
    line.iter().map(|entrant| entrant.name().to_string()).collect()
}

#[test]
fn size_counts_every_enqueued_entrant() {
    let mut line = Waitline::new();

    for n in 0..50 {
        line.enqueue(Entrant::regular(format!("guest-{n}")));
        line.enqueue(None::<Entrant>);
    }

    assert_eq!(line.size(), 50);
}

#[test]
fn served_entrants_come_out_in_enqueue_order() {
    let mut line = line_of(&["Alice", "Bob", "Charlie", "David"]);

    let first = line.serve_one().unwrap();
    let group = line.serve_many_entrants(2);
    let last = line.serve_one().unwrap();

    assert_eq!(first.name(), "Alice");
    assert_eq!(group, [Entrant::regular("Bob"), Entrant::regular("Charlie")]);
    assert_eq!(last.name(), "David");
    assert_eq!(line.serve_one(), None);
}

#[test]
fn oversized_group_empties_line_and_returns_original_size() {
    let mut line = line_of(&["Alice", "Bob", "Charlie"]);

    assert_eq!(line.serve_many(usize::MAX), 3);
    assert!(line.is_empty());
}

#[test]
fn insert_places_exactly_position_entrants_ahead() {
    for position in 0..=3 {
        let mut line = line_of(&["Alice", "Bob", "Charlie"]);

        assert!(line.insert_at(Entrant::with_priority_pass("Frank"), position));
        assert_eq!(line.size(), 4);
        assert_eq!(line.position_of("Frank"), Some(position));
    }
}

#[test]
fn rejected_insert_leaves_line_unchanged() {
    let mut line = line_of(&["Alice", "Bob"]);
    let before = names(&line);

    let result = line.try_insert_at(Entrant::with_priority_pass("Frank"), 3);

    assert_eq!(
        result,
        Err(WaitlineError::InvalidPosition { position: 3, len: 2 })
    );
    assert_eq!(names(&line), before);
}

#[test]
fn demo_script_leaves_three_waiting() {
    let mut line = Waitline::new();
    let outcomes = Script::demo().run(&mut line);

    let prose: Vec<String> = outcomes[5..].iter().map(ToString::to_string).collect();
    assert_eq!(
        prose,
        [
            "Alice got their ticket and entered the park.",
            "2 people got their tickets and entered the park together.",
            "Frank bribed their way into position 2 in the line.",
            "Number of people still in line: 3",
        ]
    );
    assert_eq!(names(&line), ["David", "Eve", "Frank"]);
    assert_eq!(line.front().map(Entrant::name), Some("David"));
}

#[test]
fn parsed_steps_run_like_built_steps() {
    let steps = ["join:Alice", "join+:Bob", "serve:5", "serve", "bribe:Frank@1", "size"]
        .into_iter()
        .map(parse_step)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let mut line = Waitline::new();
    let outcomes = Script::new(steps).run(&mut line);

    assert_eq!(
        outcomes[2],
        Outcome::GroupServed {
            count: 2,
            names: vec!["Alice".to_string(), "Bob".to_string()],
        }
    );
    assert_eq!(outcomes[3], Outcome::NobodyWaiting);
    assert_eq!(
        outcomes[4],
        Outcome::BribeRejected {
            name: "Frank".to_string(),
            position: 1,
            size: 0,
        }
    );
    assert_eq!(outcomes[5], Outcome::Size { size: 0 });
}
