#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Weighted seed selector for tiered raid encounters.
//!
//! A raid seed first rolls a star count (for tiers below the top one) and then
//! a slot roll in `0..total`, where `total` is the tier's rate total for the
//! game version. Each slot owns the half-open range `[floor, floor + weight)`
//! of that roll. Sibling versions carry independent floors; a floor of
//! [`WeightedSlot::UNAVAILABLE`] removes the slot from that version.

use pidlab_core::{GameVersion, WeightedRateTable, WeightedSlot, BASE_RATE_TABLE};
use pidlab_system_rng::Xoroshiro128Plus;

/// Tier whose seeds skip the star roll.
pub const TOP_TIER: u8 = WeightedRateTable::MAX_TIER;

const STAR_ROLL: u64 = 100;

/// Roll total of `tier` in `version`, `None` when the version has no table.
#[must_use]
pub fn rate_total(table: &WeightedRateTable, tier: u8, version: GameVersion) -> Option<u16> {
    table.total(tier, version)
}

/// Slot roll a raid seed yields for `tier` against `total`.
#[must_use]
pub fn slot_roll(seed: u32, tier: u8, total: u16) -> u64 {
    let mut rng = Xoroshiro128Plus::new(u64::from(seed));
    if tier != TOP_TIER {
        let _ = rng.next_int(STAR_ROLL);
    }
    rng.next_int(u64::from(total))
}

/// Whether `roll` lands in the slot's range for `version`.
#[must_use]
pub fn selects_roll(roll: u64, slot: &WeightedSlot, version: GameVersion) -> bool {
    match slot.floor_for(version) {
        Some(floor) if floor >= 0 => {
            roll.wrapping_sub(floor as u64) < u64::from(slot.weight())
        }
        _ => false,
    }
}

/// Whether a raid seed selects `slot` of `tier` in `version` under the base tables.
#[must_use]
pub fn selects(seed: u32, tier: u8, slot: &WeightedSlot, version: GameVersion) -> bool {
    selects_in(&BASE_RATE_TABLE, seed, tier, slot, version)
}

/// [`selects`] against an explicit rate table.
#[must_use]
pub fn selects_in(
    table: &WeightedRateTable,
    seed: u32,
    tier: u8,
    slot: &WeightedSlot,
    version: GameVersion,
) -> bool {
    if !slot.is_available(version) {
        return false;
    }
    let Some(total) = rate_total(table, tier, version) else {
        return false;
    };
    selects_roll(slot_roll(seed, tier, total), slot, version)
}

/// Index of the slot that owns `roll` in `version`.
#[must_use]
pub fn selected_index<'a>(
    roll: u64,
    slots: impl IntoIterator<Item = &'a WeightedSlot>,
    version: GameVersion,
) -> Option<usize> {
    slots
        .into_iter()
        .position(|slot| selects_roll(roll, slot, version))
}

/// Whether the ranges of the available slots tile `[0, total)` without gaps or overlaps.
#[must_use]
pub fn partitions<'a>(
    slots: impl IntoIterator<Item = &'a WeightedSlot>,
    total: u16,
    version: GameVersion,
) -> bool {
    let mut ranges: Vec<(u32, u32)> = slots
        .into_iter()
        .filter(|slot| slot.is_available(version) && slot.weight() != 0)
        .filter_map(|slot| {
            let floor = u32::try_from(slot.floor_for(version)?).ok()?;
            Some((floor, u32::from(slot.weight())))
        })
        .collect();
    ranges.sort_unstable();

    let mut cursor = 0u32;
    for (floor, weight) in ranges {
        if floor != cursor {
            return false;
        }
        cursor += weight;
    }
    cursor == u32::from(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_tier_skips_the_star_roll() {
        let mut rng = Xoroshiro128Plus::new(77);
        assert_eq!(slot_roll(77, TOP_TIER, 6500), rng.next_int(6500));

        let mut rng = Xoroshiro128Plus::new(77);
        let _ = rng.next_int(STAR_ROLL);
        assert_eq!(slot_roll(77, 1, 5800), rng.next_int(5800));
    }

    #[test]
    fn group_versions_never_select() {
        let slot = WeightedSlot::new(100, 0, 0);
        assert!(!selects(0, 1, &slot, GameVersion::Sv));
        assert!(!selects_roll(0, &slot, GameVersion::Sword));
    }
}
