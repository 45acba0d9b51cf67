use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dugout_core::AssignmentEngine;
use roster::{Catalog, FieldSlot, Player, PlayerId, PositionClass};

/// A 30-man roster shaped like a tournament squad.
fn squad() -> Arc<Catalog> {
    let classes = [
        (PositionClass::Pitcher, 14),
        (PositionClass::Catcher, 2),
        (PositionClass::CatcherFirstBase, 1),
        (PositionClass::Infielder, 6),
        (PositionClass::Utility, 2),
        (PositionClass::Outfielder, 5),
    ];
    let mut players = Vec::new();
    let mut next = 600_000;
    for (class, count) in classes {
        for _ in 0..count {
            players.push(Player::new(PlayerId::new(next), format!("Player {next}"), class));
            next += 1;
        }
    }
    Arc::new(Catalog::from_players(players).expect("unique ids"))
}

fn bench_field_swap(c: &mut Criterion) {
    let mut engine = AssignmentEngine::new(squad());
    engine.init_from_catalog();
    let outfielders: Vec<PlayerId> = engine.view().eligible_for_field(FieldSlot::CenterField)
        .iter()
        .map(|p| p.id)
        .collect();
    engine.place_in_field(outfielders[0], FieldSlot::LeftField).unwrap();
    engine.place_in_field(outfielders[1], FieldSlot::CenterField).unwrap();

    // Each iteration swaps the two outfielders back and forth
    c.bench_function("field_swap", |b| {
        b.iter(|| {
            black_box(engine.place_in_field(black_box(outfielders[0]), FieldSlot::CenterField)).ok();
        })
    });
}

fn bench_lineup_reorder(c: &mut Criterion) {
    let mut engine = AssignmentEngine::new(squad());
    engine.init_from_catalog();
    let batters: Vec<PlayerId> = engine.view().eligible_for_lineup().iter().map(|p| p.id).collect();
    for (index, &player) in batters.iter().take(9).enumerate() {
        engine.set_lineup_slot(index, player).unwrap();
    }

    c.bench_function("lineup_move_entry", |b| {
        b.iter(|| engine.move_lineup_entry(black_box(0), black_box(8)).ok())
    });
}

fn bench_candidate_query(c: &mut Criterion) {
    let mut engine = AssignmentEngine::new(squad());
    engine.init_from_catalog();

    c.bench_function("eligible_for_field", |b| {
        b.iter(|| {
            for slot in FieldSlot::ALL {
                black_box(engine.view().eligible_for_field(slot));
            }
        })
    });
}

criterion_group!(benches, bench_field_swap, bench_lineup_reorder, bench_candidate_query);
criterion_main!(benches);
