//! End-to-end walkthroughs of the engine.

use std::sync::Arc;

use roster::{FieldSlot, PlayerId};

use crate::engine::{AssignmentEngine, Origin, Placement};
use crate::error::AssignmentError;
use crate::intent::Intent;
use crate::schedule::Schedule;
use crate::snapshot::ShareSnapshot;

use super::helpers::{engine_with_bench, test_catalog, ALL_IDS, CATCHER, IF, OF, OF2, P1, UT};

// =============================================================================
// Placement walkthroughs
// =============================================================================

#[test]
fn three_player_walkthrough() {
    let mut engine = AssignmentEngine::new(Arc::new(test_catalog()));
    engine.init_bench([CATCHER, OF, P1]);

    engine.place_in_field(CATCHER, FieldSlot::Catcher).unwrap();
    assert_eq!(engine.field().get(FieldSlot::Catcher), Some(CATCHER));
    assert_eq!(engine.bench().as_slice(), &[OF, P1]);

    engine.place_in_field(OF, FieldSlot::DesignatedHitter).unwrap();
    assert_eq!(engine.field().get(FieldSlot::DesignatedHitter), Some(OF));
    assert_eq!(engine.bench().as_slice(), &[P1]);

    let before = engine.clone();
    assert!(matches!(
        engine.place_in_field(P1, FieldSlot::Catcher),
        Err(AssignmentError::Ineligible { .. })
    ));
    assert_eq!(engine.field(), before.field());
    assert_eq!(engine.bench(), before.bench());

    engine.set_rotation_slot(0, P1).unwrap();
    assert_eq!(engine.rotation().get(0), Some(P1));
}

#[test]
fn swap_is_a_full_exchange() {
    let mut engine = engine_with_bench();
    engine.place_in_field(UT, FieldSlot::SecondBase).unwrap();
    engine.place_in_field(IF, FieldSlot::ThirdBase).unwrap();

    let placement = engine.place_in_field(UT, FieldSlot::ThirdBase).unwrap();

    assert_eq!(
        placement,
        Placement::Swapped {
            from: Origin::Field(FieldSlot::SecondBase),
            displaced: IF
        }
    );
    assert_eq!(engine.field().get(FieldSlot::ThirdBase), Some(UT));
    assert_eq!(engine.field().get(FieldSlot::SecondBase), Some(IF));
    assert_eq!(engine.field().filled(), 2);
}

#[test]
fn swap_does_not_recheck_occupant() {
    // The occupant lands in the vacated slot even if it could not have been
    // placed there directly.
    let mut engine = engine_with_bench();
    engine.place_in_field(UT, FieldSlot::ShortStop).unwrap();
    engine.place_in_field(IF, FieldSlot::FirstBase).unwrap();

    engine.place_in_field(IF, FieldSlot::ShortStop).unwrap();

    assert_eq!(engine.field().get(FieldSlot::ShortStop), Some(IF));
    assert_eq!(engine.field().get(FieldSlot::FirstBase), Some(UT));
    assert!(engine.place_in_field(UT, FieldSlot::FirstBase).is_err());
}

#[test]
fn bench_player_sends_occupant_to_bench() {
    let mut engine = engine_with_bench();
    engine.place_in_field(OF, FieldSlot::RightField).unwrap();

    engine.place_in_field(OF2, FieldSlot::RightField).unwrap();

    assert_eq!(engine.field().get(FieldSlot::RightField), Some(OF2));
    assert!(engine.bench().contains(OF));
    assert!(!engine.bench().contains(OF2));
}

#[test]
fn overlays_survive_field_moves() {
    let mut engine = engine_with_bench();
    engine.place_in_field(OF, FieldSlot::LeftField).unwrap();
    engine.set_lineup_slot(3, OF).unwrap();

    engine.remove_from_field(FieldSlot::LeftField);

    assert_eq!(engine.lineup().get(3), Some(OF));
    assert_eq!(engine.view().display_position(OF), Some("OF"));
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn reset_after_a_full_session() {
    let mut engine = engine_with_bench();
    let session = [
        Intent::PlaceInField { player: CATCHER, slot: FieldSlot::Catcher },
        Intent::PlaceInField { player: UT, slot: FieldSlot::ShortStop },
        Intent::SetLineupSlot { index: 0, player: UT },
        Intent::SetLineupSlot { index: 1, player: CATCHER },
        Intent::MoveLineupEntry { from: 0, to: 1 },
        Intent::SetRotationSlot { index: 2, player: P1 },
        Intent::SelectPlayer { player: IF },
        Intent::SetManagerName { first: "Omar".into(), last: "Lopez".into() },
    ];
    for intent in session {
        engine.apply(intent).unwrap();
    }
    assert_eq!(engine.lineup().get(0), Some(CATCHER));
    assert!(ShareSnapshot::capture(&engine, &Schedule::pool_play()).is_ok());

    engine.apply(Intent::Reset).unwrap();

    assert!(engine.bench().is_empty());
    assert!(engine.field().is_empty());
    assert_eq!(engine.lineup().slots(), &[None; 9]);
    assert_eq!(engine.rotation().slots(), &[None; 4]);
    assert_eq!(engine.selected(), None);
    assert!(ShareSnapshot::capture(&engine, &Schedule::pool_play()).is_err());
}

#[test]
fn reinit_restores_full_bench() {
    let mut engine = engine_with_bench();
    engine.place_in_field(OF, FieldSlot::CenterField).unwrap();
    engine.reset();
    engine.init_from_catalog();

    let bench: Vec<PlayerId> = engine.bench().iter().collect();
    assert_eq!(bench, ALL_IDS.to_vec());
}

#[test]
fn rejected_intents_leave_state_alone() {
    let mut engine = engine_with_bench();
    engine.place_in_field(OF, FieldSlot::LeftField).unwrap();
    engine.set_lineup_slot(0, OF).unwrap();
    let before = engine.clone();

    let rejected = [
        Intent::PlaceInField { player: PlayerId::new(77_777), slot: FieldSlot::LeftField },
        Intent::PlaceInField { player: P1, slot: FieldSlot::DesignatedHitter },
        Intent::SetLineupSlot { index: 9, player: IF },
        Intent::SetLineupSlot { index: 0, player: P1 },
        Intent::SetRotationSlot { index: 0, player: OF },
        Intent::ReorderLineup { order: vec![None; 9] },
        Intent::MoveLineupEntry { from: 0, to: 12 },
        Intent::PlaceSelected { slot: FieldSlot::Catcher },
    ];
    for intent in rejected {
        assert!(engine.apply(intent).is_err());
    }

    assert_eq!(engine.bench(), before.bench());
    assert_eq!(engine.field(), before.field());
    assert_eq!(engine.lineup(), before.lineup());
    assert_eq!(engine.rotation(), before.rotation());
    assert_eq!(engine.selected(), before.selected());
}
