//! Property tests over random intent sequences.
//!
//! Sequences start from a fully benched catalog and never re-initialize, so
//! every catalog player is on the bench or in the field throughout.

use std::collections::BTreeSet;

use proptest::prelude::*;
use roster::{is_eligible, FieldSlot, PlayerId};

use crate::engine::AssignmentEngine;
use crate::intent::Intent;

use super::helpers::{engine_with_bench, ALL_IDS};

// =============================================================================
// Strategies
// =============================================================================

fn player_strategy() -> impl Strategy<Value = PlayerId> {
    prop_oneof![
        9 => (0..ALL_IDS.len()).prop_map(|i| ALL_IDS[i]),
        1 => Just(PlayerId::new(404)),
    ]
}

fn slot_strategy() -> impl Strategy<Value = FieldSlot> {
    (0..FieldSlot::COUNT).prop_map(|i| FieldSlot::ALL[i])
}

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        4 => (player_strategy(), slot_strategy())
            .prop_map(|(player, slot)| Intent::PlaceInField { player, slot }),
        2 => slot_strategy().prop_map(|slot| Intent::RemoveFromField { slot }),
        2 => (0..10usize, player_strategy())
            .prop_map(|(index, player)| Intent::SetLineupSlot { index, player }),
        1 => (0..10usize, 0..10usize).prop_map(|(from, to)| Intent::MoveLineupEntry { from, to }),
        1 => (0..10usize).prop_map(|index| Intent::RemoveFromLineup { index }),
        2 => (0..5usize, player_strategy())
            .prop_map(|(index, player)| Intent::SetRotationSlot { index, player }),
        1 => (0..5usize).prop_map(|index| Intent::RemoveFromRotation { index }),
        1 => player_strategy().prop_map(|player| Intent::SelectPlayer { player }),
        1 => slot_strategy().prop_map(|slot| Intent::PlaceSelected { slot }),
    ]
}

// =============================================================================
// Invariant checks
// =============================================================================

fn assert_invariants(engine: &AssignmentEngine) -> Result<(), TestCaseError> {
    let bench: Vec<PlayerId> = engine.bench().iter().collect();
    let field: Vec<PlayerId> = engine.field().occupied().map(|(_, id)| id).collect();

    let bench_set: BTreeSet<PlayerId> = bench.iter().copied().collect();
    let field_set: BTreeSet<PlayerId> = field.iter().copied().collect();
    prop_assert_eq!(bench_set.len(), bench.len(), "bench repeats a player");
    prop_assert_eq!(field_set.len(), field.len(), "field repeats a player");
    prop_assert!(bench_set.is_disjoint(&field_set), "player on bench and field");

    let union: BTreeSet<PlayerId> = bench_set.union(&field_set).copied().collect();
    let catalog: BTreeSet<PlayerId> = engine.catalog().ids().collect();
    prop_assert_eq!(union, catalog, "bench and field lost or invented a player");

    for order in [&engine.lineup().slots()[..], &engine.rotation().slots()[..]] {
        let filled: Vec<PlayerId> = order.iter().flatten().copied().collect();
        let unique: BTreeSet<PlayerId> = filled.iter().copied().collect();
        prop_assert_eq!(unique.len(), filled.len(), "order repeats a player");
    }
    Ok(())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn invariants_hold_for_any_session(intents in prop::collection::vec(intent_strategy(), 0..60)) {
        let mut engine = engine_with_bench();
        for intent in intents {
            let before = engine.clone();
            if engine.apply(intent).is_err() {
                prop_assert_eq!(engine.bench(), before.bench());
                prop_assert_eq!(engine.field(), before.field());
                prop_assert_eq!(engine.lineup(), before.lineup());
                prop_assert_eq!(engine.rotation(), before.rotation());
            }
            assert_invariants(&engine)?;
        }
    }

    #[test]
    fn placement_succeeds_iff_eligible(
        setup in prop::collection::vec((player_strategy(), slot_strategy()), 0..20),
        player in player_strategy(),
        slot in slot_strategy(),
    ) {
        let mut engine = engine_with_bench();
        for (p, s) in setup {
            let _ = engine.place_in_field(p, s);
        }
        let eligible = engine
            .catalog()
            .class_of(player)
            .is_some_and(|class| is_eligible(class, slot));

        let result = engine.place_in_field(player, slot);

        prop_assert_eq!(result.is_ok(), eligible);
        if eligible {
            prop_assert_eq!(engine.field().get(slot), Some(player));
        }
    }

    #[test]
    fn remove_from_field_is_idempotent(
        setup in prop::collection::vec((player_strategy(), slot_strategy()), 0..20),
        slot in slot_strategy(),
    ) {
        let mut engine = engine_with_bench();
        for (p, s) in setup {
            let _ = engine.place_in_field(p, s);
        }
        engine.remove_from_field(slot);
        let once = engine.clone();
        prop_assert_eq!(engine.remove_from_field(slot), None);
        prop_assert_eq!(engine.bench(), once.bench());
        prop_assert_eq!(engine.field(), once.field());
    }

    #[test]
    fn lineup_write_leaves_one_copy(
        first in 0..9usize,
        second in 0..9usize,
        player in (0..ALL_IDS.len()).prop_map(|i| ALL_IDS[i]),
    ) {
        let mut engine = engine_with_bench();
        prop_assume!(engine.set_lineup_slot(first, player).is_ok());

        engine.set_lineup_slot(second, player).unwrap();

        prop_assert_eq!(engine.lineup().position_of(player), Some(second));
        prop_assert_eq!(engine.lineup().filled(), 1);
    }
}
