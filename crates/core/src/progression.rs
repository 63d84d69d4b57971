//! Progression - cumulative lines cleared to level, and back
//!
//! Levels are grouped into tiers with a fixed line cost per level:
//!
//! | Levels | Lines per level | Tier starts at |
//! |--------|-----------------|----------------|
//! | 1-5 | 10 | 0 lines |
//! | 6-10 | 15 | 50 lines |
//! | 11-20 | 20 | 125 lines |
//! | 21-30 | 25 | 325 lines |
//! | 31+ | 30 | 575 lines |
//!
//! Each tier's starting threshold is the sum of every earlier tier, so the table is exact
//! and [`lines_for_level`] inverts [`level_for_lines`] at every boundary.

/// A run of levels sharing one line cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTier {
    pub first_level: u32,
    pub first_lines: u32,
    pub lines_per_level: u32,
}

/// Tier table, ascending
pub const LEVEL_TIERS: [LevelTier; 5] = [
    LevelTier {
        first_level: 1,
        first_lines: 0,
        lines_per_level: 10,
    },
    LevelTier {
        first_level: 6,
        first_lines: 50,
        lines_per_level: 15,
    },
    LevelTier {
        first_level: 11,
        first_lines: 125,
        lines_per_level: 20,
    },
    LevelTier {
        first_level: 21,
        first_lines: 325,
        lines_per_level: 25,
    },
    LevelTier {
        first_level: 31,
        first_lines: 575,
        lines_per_level: 30,
    },
];

/// Level reached after `total_lines` cleared lines (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    let tier = LEVEL_TIERS
        .iter()
        .rev()
        .find(|t| total_lines >= t.first_lines)
        .unwrap_or(&LEVEL_TIERS[0]);
    tier.first_level + (total_lines - tier.first_lines) / tier.lines_per_level
}

/// Cumulative lines needed to reach `level`
pub fn lines_for_level(level: u32) -> u32 {
    if level <= 1 {
        return 0;
    }
    let tier = LEVEL_TIERS
        .iter()
        .rev()
        .find(|t| level >= t.first_level)
        .unwrap_or(&LEVEL_TIERS[0]);
    (level - tier.first_level)
        .saturating_mul(tier.lines_per_level)
        .saturating_add(tier.first_lines)
}

/// Lines still missing before the next level
pub fn lines_to_next_level(total_lines: u32) -> u32 {
    lines_for_level(level_for_lines(total_lines) + 1).saturating_sub(total_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds_are_cumulative() {
        for pair in LEVEL_TIERS.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            let span = next.first_level - prev.first_level;
            assert_eq!(
                prev.first_lines + span * prev.lines_per_level,
                next.first_lines
            );
        }
    }

    #[test]
    fn test_first_tier() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(49), 5);
        assert_eq!(level_for_lines(50), 6);
    }

    #[test]
    fn test_lines_to_next_level() {
        assert_eq!(lines_to_next_level(0), 10);
        assert_eq!(lines_to_next_level(48), 2);
        assert_eq!(lines_to_next_level(50), 15);
    }

    #[test]
    fn test_lines_for_level_below_one() {
        assert_eq!(lines_for_level(0), 0);
        assert_eq!(lines_for_level(1), 0);
    }
}
