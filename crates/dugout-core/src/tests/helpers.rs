//! Shared test catalog and engine setup.
//!
//! The catalog holds one player per interesting eligibility profile, listed
//! in display-group order:
//!
//! | Constant  | Class   |
//! |-----------|---------|
//! | `P1`, `P2`| P       |
//! | `CATCHER` | C       |
//! | `C1B`     | C/1B    |
//! | `IF`      | IF      |
//! | `UT`      | UT      |
//! | `OF`, `OF2`, `CF` | OF |
//! | `MYSTERY` | unknown |

use std::sync::Arc;

use roster::{Catalog, Hand, Player, PlayerId, PositionClass};

use crate::engine::AssignmentEngine;

pub const CATCHER: PlayerId = PlayerId::new(1);
pub const C1B: PlayerId = PlayerId::new(2);
pub const IF: PlayerId = PlayerId::new(3);
pub const UT: PlayerId = PlayerId::new(4);
pub const OF: PlayerId = PlayerId::new(5);
pub const OF2: PlayerId = PlayerId::new(6);
pub const CF: PlayerId = PlayerId::new(7);
pub const P1: PlayerId = PlayerId::new(8);
pub const P2: PlayerId = PlayerId::new(9);
pub const MYSTERY: PlayerId = PlayerId::new(10);

/// Every catalog id, in catalog order.
pub const ALL_IDS: [PlayerId; 10] = [P1, P2, CATCHER, C1B, IF, UT, OF, OF2, CF, MYSTERY];

/// Builds the shared test catalog.
pub fn test_catalog() -> Catalog {
    Catalog::from_players(vec![
        Player::new(P1, "Ranger Suarez", PositionClass::Pitcher).with_hand(Hand::Left),
        Player::new(P2, "Pablo Lopez", PositionClass::Pitcher).with_hand(Hand::Right),
        Player::new(CATCHER, "Salvador Perez", PositionClass::Catcher),
        Player::new(C1B, "William Contreras", PositionClass::CatcherFirstBase),
        Player::new(IF, "Luis Arraez", PositionClass::Infielder),
        Player::new(UT, "Gleyber Torres", PositionClass::Utility),
        Player::new(OF, "Ronald Acuna Jr.", PositionClass::Outfielder),
        Player::new(OF2, "Jackson Chourio", PositionClass::Outfielder),
        Player::new(CF, "Wilyer Abreu", PositionClass::Outfielder),
        Player::new(MYSTERY, "Walk On", PositionClass::Unknown),
    ])
    .expect("test catalog ids are unique")
}

/// An engine over the test catalog with every player on the bench.
pub fn engine_with_bench() -> AssignmentEngine {
    let mut engine = AssignmentEngine::new(Arc::new(test_catalog()));
    engine.init_from_catalog();
    engine
}

/// Copies a list of ids, for `init_bench` calls.
pub fn ids(players: &[PlayerId]) -> Vec<PlayerId> {
    players.to_vec()
}
