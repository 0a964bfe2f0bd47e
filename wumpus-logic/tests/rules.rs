use proptest::prelude::*;
use wumpus_logic::{
    Answer, Engine, EngineError, NextPath, NextTarget, Predicate, Query, RuleEngine, Term,
};

fn zero_cell() -> Term {
    Term::compound(
        "cell",
        vec![Term::float(0.0), Term::float(0.0), Term::float(0.0)],
    )
}

fn zero_beliefs(width: i64, height: i64) -> Term {
    Term::list(
        (0..height)
            .map(|_| Term::list((0..width).map(|_| zero_cell()).collect()))
            .collect(),
    )
}

fn with_cell(beliefs: Term, x: usize, y: usize, w: f64, p: f64, g: f64) -> Term {
    let Term::List(mut rows) = beliefs else { unreachable!() };
    let Term::List(ref mut row) = rows[y] else { unreachable!() };
    row[x] = Term::compound("cell", vec![Term::float(w), Term::float(p), Term::float(g)]);
    Term::List(rows)
}

fn visited(cells: &[(i64, i64)]) -> Term {
    Term::list(cells.iter().map(|&(x, y)| Term::pos(x, y)).collect())
}

fn target_query(beliefs: Term, seen: &[(i64, i64)], w: i64, h: i64) -> Query {
    Query::new(
        "next_target",
        vec![beliefs, visited(seen), Term::int(w), Term::int(h), Term::var("T")],
    )
}

#[test]
fn next_target_prefers_the_home_block() {
    let mut engine = RuleEngine::default();
    let answer = engine
        .query(&target_query(zero_beliefs(4, 4), &[(0, 0)], 4, 4))
        .expect("query");

    // Both (1,0) and (0,1) get the home bonus; (1,0) comes first in row-major order.
    let bindings = answer.bindings().expect("solved");
    assert_eq!(bindings.get("T"), Some(&Term::pos(1, 0)));
}

#[test]
fn next_target_avoids_suspected_hazards() {
    let mut engine = RuleEngine::default();
    let beliefs = with_cell(zero_beliefs(4, 4), 1, 0, 0.25, 0.25, 0.0);
    let answer = engine
        .query(&target_query(beliefs, &[(0, 0)], 4, 4))
        .expect("query");

    assert_eq!(answer.bindings().and_then(|b| b.get("T")), Some(&Term::pos(0, 1)));
}

#[test]
fn next_target_is_drawn_to_likely_gold() {
    let mut engine = RuleEngine::default();
    let beliefs = with_cell(zero_beliefs(4, 4), 2, 1, 0.0, 0.0, 1.0);
    let answer = engine
        .query(&target_query(beliefs, &[(0, 0), (1, 0), (1, 1)], 4, 4))
        .expect("query");

    assert_eq!(answer.bindings().and_then(|b| b.get("T")), Some(&Term::pos(2, 1)));
}

#[test]
fn next_target_without_frontier_has_no_solution() {
    let mut engine = RuleEngine::default();
    let all: Vec<(i64, i64)> = (0..3).flat_map(|y| (0..3).map(move |x| (x, y))).collect();
    let answer = engine
        .query(&target_query(zero_beliefs(3, 3), &all, 3, 3))
        .expect("query");
    assert_eq!(answer, Answer::NoSolution);
}

#[test]
fn next_target_rejects_mismatched_belief_shape() {
    let mut engine = RuleEngine::default();
    let err = engine
        .query(&target_query(zero_beliefs(3, 2), &[(0, 0)], 3, 3))
        .unwrap_err();
    assert!(matches!(err, EngineError::MalformedArgument { index: 0, .. }));
}

#[test]
fn oversized_width_is_malformed_not_fatal() {
    let mut engine = RuleEngine::default();
    let beliefs = Term::list(vec![Term::list(vec![])]);
    let err = engine
        .query(&target_query(beliefs, &[(0, 0)], i64::MAX, 1))
        .unwrap_err();
    assert!(matches!(err, EngineError::MalformedArgument { index: 0, .. }));

    let huge = target_query(zero_beliefs(3, 3), &[(0, 0)], i64::MAX, i64::MAX);
    let json = serde_json::to_string(&huge).expect("serialize query");
    assert!(engine.query_json(&json).is_err());
}

#[test]
fn predicates_check_arity_when_called_directly() {
    assert!(matches!(
        NextTarget.solve(&[]),
        Err(EngineError::ArityMismatch {
            expected: 5,
            actual: 0,
            ..
        })
    ));
    assert!(matches!(
        NextPath.solve(&[Term::pos(0, 0)]),
        Err(EngineError::ArityMismatch {
            expected: 4,
            actual: 1,
            ..
        })
    ));
}

#[test]
fn next_path_walks_visited_cells_only() {
    let mut engine = RuleEngine::default();
    let query = Query::new(
        "next_path",
        vec![
            Term::pos(0, 0),
            Term::pos(2, 1),
            visited(&[(0, 0), (1, 0), (2, 0), (0, 1)]),
            Term::var("P"),
        ],
    );

    let answer = engine.query(&query).expect("query");
    let path = answer.bindings().and_then(|b| b.get("P")).expect("bound path");
    assert_eq!(
        path,
        &visited(&[(0, 0), (1, 0), (2, 0), (2, 1)])
    );
}

#[test]
fn next_path_reports_no_solution_when_cut_off() {
    let mut engine = RuleEngine::default();
    let query = Query::new(
        "next_path",
        vec![Term::pos(0, 0), Term::pos(3, 3), visited(&[(0, 0)]), Term::var("P")],
    );
    assert_eq!(engine.query(&query).expect("query"), Answer::NoSolution);
}

#[test]
fn ground_output_slot_checks_instead_of_binding() {
    let mut engine = RuleEngine::default();
    let query = Query::new(
        "next_path",
        vec![Term::pos(0, 0), Term::pos(1, 0), visited(&[(0, 0)]), visited(&[(0, 0), (1, 0)])],
    );
    let answer = engine.query(&query).expect("query");
    assert!(answer.is_solved());
    assert!(answer.bindings().is_some_and(|b| b.is_empty()));
}

#[test]
fn malformed_position_is_reported() {
    let mut engine = RuleEngine::default();
    let query = Query::new(
        "next_path",
        vec![Term::atom("home"), Term::pos(1, 0), visited(&[]), Term::var("P")],
    );
    let err = engine.query(&query).unwrap_err();
    assert!(matches!(err, EngineError::MalformedArgument { index: 0, .. }));
}

#[test]
fn json_queries_roundtrip() {
    let mut engine = RuleEngine::default();
    let query = Query::new(
        "next_path",
        vec![Term::pos(0, 0), Term::pos(0, 1), visited(&[(0, 0)]), Term::var("P")],
    );
    let json = serde_json::to_string(&query).expect("serialize query");

    let out = engine.query_json(&json).expect("answer");
    let answer: Answer = serde_json::from_str(&out).expect("deserialize answer");
    assert!(answer.is_solved());
    assert_eq!(engine.queries_issued(), 1);
}

proptest! {
    #[test]
    fn derived_paths_only_cross_visited_cells(
        seen in proptest::collection::btree_set((0i64..6, 0i64..6), 1..30),
        goal in (0i64..6, 0i64..6),
    ) {
        let seen: Vec<(i64, i64)> = seen.into_iter().collect();
        let start = seen[0];
        let mut engine = RuleEngine::default();
        let query = Query::new(
            "next_path",
            vec![
                Term::pos(start.0, start.1),
                Term::pos(goal.0, goal.1),
                visited(&seen),
                Term::var("P"),
            ],
        );

        let answer = engine.query(&query).expect("query");
        let Some(path) = answer.bindings().and_then(|b| b.get("P")) else {
            prop_assert_ne!(goal, start);
            return Ok(());
        };
        let cells: Vec<(i64, i64)> = path
            .as_list()
            .expect("list")
            .iter()
            .map(|t| t.as_pos().expect("pos"))
            .collect();

        prop_assert_eq!(cells.first(), Some(&start));
        prop_assert_eq!(cells.last(), Some(&goal));
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert_eq!((a.0 - b.0).abs() + (a.1 - b.1).abs(), 1);
        }
        for c in &cells[..cells.len() - 1] {
            prop_assert!(seen.contains(c));
        }
    }
}
