// Property tests for roster invariants over random edit sessions.
// Increase cases locally with: PROPTEST_CASES=2000 cargo test -p fantasy-backend

use std::collections::HashSet;

use proptest::prelude::*;
use time::OffsetDateTime;

use crate::domain::test_gens::{self, Op};
use crate::domain::{assign, eligible_positions, remove, Position, Roster, Slot};

fn config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);
    ProptestConfig {
        cases,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn no_duplicates(roster: &Roster) -> bool {
    let mut seen = HashSet::new();
    roster.occupied().all(|(_, name)| seen.insert(name))
}

fn within_capacity(roster: &Roster) -> bool {
    Position::ALL
        .iter()
        .all(|p| roster.filled(*p) <= p.capacity())
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn every_step_preserves_uniqueness_and_capacity(ops in test_gens::ops()) {
        let now = OffsetDateTime::UNIX_EPOCH;
        let mut roster = Roster::empty("user-prop", now);
        for op in ops {
            roster = match op {
                Op::Assign(name, position) => match assign(&roster, &name, position, now) {
                    Ok(next) => {
                        prop_assert!(next.slots_of(&name).all(|s| s.position() == position));
                        prop_assert!(next.holds(&name));
                        next
                    }
                    Err(e) => {
                        prop_assert!(e.is_capacity_exceeded());
                        roster
                    }
                },
                Op::Remove(slot) => remove(&roster, slot, now),
            };
            prop_assert!(no_duplicates(&roster));
            prop_assert!(within_capacity(&roster));
        }
    }

    #[test]
    fn eligible_positions_never_exceed_capacity(
        roster in test_gens::reachable_roster(),
        name in test_gens::name(),
    ) {
        for position in eligible_positions(Some(&roster), &name) {
            let result = assign(&roster, &name, position, OffsetDateTime::UNIX_EPOCH);
            prop_assert!(result.is_ok(), "{position} was eligible but assign failed");
        }
    }

    #[test]
    fn ineligible_positions_are_rejected(
        roster in test_gens::reachable_roster(),
        name in test_gens::name(),
    ) {
        let eligible = eligible_positions(Some(&roster), &name);
        for position in Position::ALL.into_iter().filter(|p| !eligible.contains(p)) {
            let result = assign(&roster, &name, position, OffsetDateTime::UNIX_EPOCH);
            prop_assert!(matches!(result, Err(ref e) if e.is_capacity_exceeded()));
        }
    }

    #[test]
    fn reassigning_current_position_keeps_slots(roster in test_gens::reachable_roster()) {
        for (slot, name) in roster.occupied() {
            let again = assign(&roster, name, slot.position(), OffsetDateTime::UNIX_EPOCH).unwrap();
            prop_assert!(again.same_slots(&roster));
        }
    }

    #[test]
    fn remove_touches_only_its_slot(
        roster in test_gens::reachable_roster(),
        target in test_gens::slot(),
    ) {
        let after = remove(&roster, target, OffsetDateTime::UNIX_EPOCH);
        prop_assert_eq!(after.get(target), None);
        for slot in Slot::ALL.into_iter().filter(|s| *s != target) {
            prop_assert_eq!(after.get(slot), roster.get(slot));
        }
    }
}
