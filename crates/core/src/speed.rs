//! Speed scaling - drop interval by level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1-3 | 400ms |
//! | 4-9 | 365ms |
//! | 10-18 | 330ms |
//! | 19-30 | 295ms |
//! | 31+ | `400 - tier * 35` with `tier = 4 + (level - 18) / 12`, floor 50ms |

/// Interval at level 1
pub const BASE_INTERVAL_MS: u32 = 400;

/// Reduction per speed tier
pub const INTERVAL_STEP_MS: u32 = 35;

/// Fastest drop interval
pub const MIN_INTERVAL_MS: u32 = 50;

/// Drop-tick interval in milliseconds for `level`
pub fn interval_for_level(level: u32) -> u32 {
    let tier = match level {
        0..=3 => 0,
        4..=9 => 1,
        10..=18 => 2,
        19..=30 => 3,
        _ => 4 + (level - 18) / 12,
    };
    BASE_INTERVAL_MS
        .saturating_sub(tier.saturating_mul(INTERVAL_STEP_MS))
        .max(MIN_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_tiers() {
        assert_eq!(interval_for_level(1), 400);
        assert_eq!(interval_for_level(9), 365);
        assert_eq!(interval_for_level(10), 330);
        assert_eq!(interval_for_level(18), 330);
        assert_eq!(interval_for_level(19), 295);
        assert_eq!(interval_for_level(30), 295);
    }

    #[test]
    fn test_open_ended_tiers() {
        // tier = 4 + 13 / 12 = 5
        assert_eq!(interval_for_level(31), 225);
        // tier = 4 + 24 / 12 = 6
        assert_eq!(interval_for_level(42), 190);
        assert_eq!(interval_for_level(500), MIN_INTERVAL_MS);
        assert_eq!(interval_for_level(u32::MAX), MIN_INTERVAL_MS);
    }

    #[test]
    fn test_never_increases_with_level() {
        let mut prev = interval_for_level(1);
        for level in 2..200 {
            let next = interval_for_level(level);
            assert!(next <= prev, "level {} got slower", level);
            prev = next;
        }
    }
}
