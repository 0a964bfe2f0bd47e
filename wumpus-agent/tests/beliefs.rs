use proptest::prelude::*;
use wumpus_agent::{Agent, BeliefCell, EmptyFlag, Knowledge, LocalAgent};
use wumpus_core::{Bounds, Coord, Grid, Perception, Perceptions, Tile};
use wumpus_world::World;

fn sensed(ps: &[Perception]) -> Perceptions {
    ps.iter().copied().collect()
}

fn world(width: i32, height: i32, tiles: &[((i32, i32), Tile)]) -> World {
    let mut field = Grid::filled(Bounds::new(width, height), Tile::Empty);
    for &(c, tile) in tiles {
        field.set(Coord::from(c), tile);
    }
    World::from_field(field).expect("world")
}

#[test]
fn quiet_start_proves_both_neighbors_safe() {
    let world = world(3, 3, &[((2, 2), Tile::Wumpus), ((2, 0), Tile::Gold)]);
    let agent = LocalAgent::new(&world);

    let beliefs = agent.knowledge().beliefs();
    assert_eq!(beliefs.get(Coord::new(1, 0)), BeliefCell::SAFE);
    assert_eq!(beliefs.get(Coord::new(0, 1)), BeliefCell::SAFE);
    assert_eq!(beliefs.get(Coord::new(0, 0)), BeliefCell::SAFE);
    assert_eq!(beliefs.get(Coord::new(1, 1)).empty, EmptyFlag::Unknown);
    assert!(agent.knowledge().visited().contains(Coord::ORIGIN));
}

#[test]
fn add_visited_is_idempotent() {
    let world = world(4, 4, &[((1, 2), Tile::Pit), ((3, 3), Tile::Wumpus), ((3, 0), Tile::Gold)]);
    let mut agent = LocalAgent::new(&world);
    let before = agent.knowledge().clone();

    assert!(!agent.add_visited(&world, Coord::ORIGIN));
    assert!(!agent.add_visited(&world, Coord::ORIGIN));
    assert_eq!(agent.knowledge(), &before);
}

#[test]
fn out_of_bounds_visit_is_ignored() {
    let mut knowledge = Knowledge::new(Bounds::new(3, 3));
    assert!(!knowledge.visit(Coord::new(3, 0), &Perceptions::new()));
    assert!(knowledge.visited().is_empty());
}

#[test]
fn wumpus_evidence_collapses_but_pits_do_not() {
    let mut k = Knowledge::new(Bounds::new(5, 5));
    let both = sensed(&[Perception::Breeze, Perception::Stench]);

    k.visit(Coord::new(2, 1), &both);
    assert_eq!(k.beliefs().get(Coord::new(2, 2)).wumpus, 0.25);
    assert_eq!(k.beliefs().get(Coord::new(2, 0)).wumpus, 0.25);

    k.visit(Coord::new(1, 2), &both);
    let b = k.beliefs();
    // (2,2) and (1,1) each border both stench sources.
    assert_eq!(b.get(Coord::new(2, 2)).wumpus, 1.0);
    assert_eq!(b.get(Coord::new(1, 1)).wumpus, 1.0);
    assert_eq!(b.get(Coord::new(2, 0)).wumpus, 0.0);
    assert_eq!(b.get(Coord::new(0, 2)).wumpus, 0.0);
    for (_, cell) in b.iter() {
        assert!(cell.wumpus == 0.0 || cell.wumpus == 1.0);
    }

    assert_eq!(b.get(Coord::new(2, 2)).pit, 0.5);
    assert_eq!(b.get(Coord::new(2, 0)).pit, 0.25);
    assert_eq!(b.get(Coord::new(0, 2)).pit, 0.25);
}

#[test]
fn gold_evidence_collapses_independently() {
    let mut k = Knowledge::new(Bounds::new(5, 5));
    let glitter = sensed(&[Perception::Glitter]);

    k.visit(Coord::new(3, 2), &glitter);
    k.visit(Coord::new(4, 3), &glitter);

    let b = k.beliefs();
    assert_eq!(b.get(Coord::new(4, 2)).gold, 1.0);
    assert_eq!(b.get(Coord::new(3, 3)).gold, 1.0);
    assert_eq!(b.get(Coord::new(2, 2)).gold, 0.0);
    assert!(b.iter().all(|(_, c)| c.wumpus == 0.0));
    assert!(b.iter().all(|(_, c)| c.gold == 0.0 || c.gold == 1.0));
}

#[test]
fn suspect_flag_follows_the_score_sum() {
    let mut k = Knowledge::new(Bounds::new(4, 4));
    k.visit(Coord::new(1, 1), &sensed(&[Perception::Breeze]));
    assert_eq!(k.beliefs().get(Coord::new(2, 1)).empty, EmptyFlag::Unknown);

    k.visit(Coord::new(2, 2), &sensed(&[Perception::Breeze]));
    let cell = k.beliefs().get(Coord::new(2, 1));
    assert_eq!(cell.pit, 0.5);
    assert_eq!(cell.empty, EmptyFlag::Suspect);
}

#[test]
fn later_quiet_visit_clears_suspicion() {
    let mut k = Knowledge::new(Bounds::new(4, 4));
    k.visit(Coord::new(1, 1), &sensed(&[Perception::Breeze]));
    k.visit(Coord::new(2, 2), &sensed(&[Perception::Breeze]));
    k.visit(Coord::new(3, 1), &Perceptions::new());

    assert_eq!(k.beliefs().get(Coord::new(2, 1)), BeliefCell::SAFE);
}

fn perception_set() -> impl Strategy<Value = Perceptions> {
    proptest::collection::vec(
        prop_oneof![
            Just(Perception::Breeze),
            Just(Perception::Stench),
            Just(Perception::Glitter)
        ],
        0..3,
    )
    .prop_map(|ps| ps.into_iter().collect())
}

proptest! {
    #[test]
    fn scores_stay_non_negative_and_collapse_is_total(
        visits in proptest::collection::vec((0i32..6, 0i32..6, perception_set()), 1..30),
    ) {
        let mut k = Knowledge::new(Bounds::new(6, 6));
        for (x, y, perceptions) in visits {
            let before = k.clone();
            let fresh = k.visit(Coord::new(x, y), &perceptions);
            if !fresh {
                prop_assert_eq!(&k, &before);
            }

            let cells: Vec<BeliefCell> = k.beliefs().iter().map(|(_, c)| *c).collect();
            prop_assert!(cells.iter().all(|c| c.wumpus >= 0.0 && c.pit >= 0.0 && c.gold >= 0.0));
            if cells.iter().any(|c| c.wumpus >= 0.5) {
                prop_assert!(cells.iter().all(|c| c.wumpus == 0.0 || c.wumpus == 1.0));
            }
            if cells.iter().any(|c| c.gold >= 0.5) {
                prop_assert!(cells.iter().all(|c| c.gold == 0.0 || c.gold == 1.0));
            }
            for v in k.visited().iter() {
                prop_assert_eq!(k.beliefs().get(v), BeliefCell::SAFE);
            }
        }
    }
}
