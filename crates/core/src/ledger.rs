//! Ability ledger - slot assignment and per-ability charges
//!
//! Pure bookkeeping: the ledger never touches the board. Slots are numbered from 1 in
//! every public method, matching how hosts present them.

use crate::types::{AbilityKind, ABILITY_SLOTS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilityLedger {
    slots: [AbilityKind; ABILITY_SLOTS],
    charges: [u32; AbilityKind::ALL.len()],
}

impl AbilityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[AbilityKind; ABILITY_SLOTS] {
        &self.slots
    }

    /// Ability in 1-based `slot`; None outside `1..=4`
    pub fn slot(&self, slot: usize) -> Option<AbilityKind> {
        slot.checked_sub(1).and_then(|i| self.slots.get(i)).copied()
    }

    pub fn contains(&self, kind: AbilityKind) -> bool {
        !kind.is_none() && self.slots.contains(&kind)
    }

    /// Put `kind` into the first empty slot.
    ///
    /// No-op (false) for `None`, an already assigned kind, or a full ledger.
    pub fn assign(&mut self, kind: AbilityKind) -> bool {
        if kind.is_none() || self.contains(kind) {
            return false;
        }
        match self.slots.iter_mut().find(|s| s.is_none()) {
            Some(slot) => {
                *slot = kind;
                true
            }
            None => false,
        }
    }

    /// Empty every slot holding `kind`; other slots keep their positions.
    pub fn remove(&mut self, kind: AbilityKind) -> bool {
        if kind.is_none() {
            return false;
        }
        let mut removed = false;
        for slot in self.slots.iter_mut().filter(|s| **s == kind) {
            *slot = AbilityKind::None;
            removed = true;
        }
        removed
    }

    pub fn charges(&self, kind: AbilityKind) -> u32 {
        kind.index().map_or(0, |i| self.charges[i])
    }

    pub fn has_charge(&self, kind: AbilityKind) -> bool {
        self.charges(kind) > 0
    }

    pub fn increment(&mut self, kind: AbilityKind) {
        if let Some(i) = kind.index() {
            self.charges[i] = self.charges[i].saturating_add(1);
        }
    }

    /// Use one charge; false if there was none
    pub fn decrement(&mut self, kind: AbilityKind) -> bool {
        match kind.index() {
            Some(i) if self.charges[i] > 0 => {
                self.charges[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// `"[n] <name> (x<charges>)"`, or `"[n] None"` for an empty slot
    pub fn slot_text(&self, slot: usize) -> String {
        match self.slot(slot) {
            Some(kind) if !kind.is_none() => {
                format!("[{}] {} (x{})", slot, kind.name(), self.charges(kind))
            }
            _ => format!("[{}] None", slot),
        }
    }

    /// Display text for every slot, in order
    pub fn slot_texts(&self) -> Vec<String> {
        (1..=ABILITY_SLOTS).map(|n| self.slot_text(n)).collect()
    }

    /// Empty all slots and drop all charges
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_fills_first_empty_slot() {
        let mut ledger = AbilityLedger::new();
        assert!(ledger.assign(AbilityKind::ColorClear));
        assert!(ledger.assign(AbilityKind::ClearRows));
        assert_eq!(ledger.slot(1), Some(AbilityKind::ColorClear));
        assert_eq!(ledger.slot(2), Some(AbilityKind::ClearRows));
        assert_eq!(ledger.slot(3), Some(AbilityKind::None));
        assert_eq!(ledger.slot(0), None);
        assert_eq!(ledger.slot(5), None);
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut ledger = AbilityLedger::new();
        assert!(ledger.assign(AbilityKind::ColorClear));
        assert!(!ledger.assign(AbilityKind::ColorClear));
        let held = |ledger: &AbilityLedger| {
            ledger
                .slots()
                .iter()
                .filter(|s| **s == AbilityKind::ColorClear)
                .count()
        };
        assert_eq!(held(&ledger), 1);

        // Once removed, the kind goes back into the first free slot.
        assert!(ledger.assign(AbilityKind::ClearRows));
        assert!(ledger.remove(AbilityKind::ColorClear));
        assert_eq!(ledger.slot(1), Some(AbilityKind::None));
        assert!(ledger.assign(AbilityKind::ColorClear));
        assert!(!ledger.assign(AbilityKind::ColorClear));
        assert_eq!(held(&ledger), 1);
        assert_eq!(ledger.slot(1), Some(AbilityKind::ColorClear));
        assert_eq!(ledger.slot(2), Some(AbilityKind::ClearRows));
    }

    #[test]
    fn test_assign_none_is_noop() {
        let mut ledger = AbilityLedger::new();
        assert!(!ledger.assign(AbilityKind::None));
        assert_eq!(ledger.slots(), &[AbilityKind::None; ABILITY_SLOTS]);
    }

    #[test]
    fn test_remove_does_not_compact() {
        let mut ledger = AbilityLedger::new();
        ledger.assign(AbilityKind::ClearRows);
        ledger.assign(AbilityKind::ColorClear);
        ledger.assign(AbilityKind::ColorConvert);

        assert!(ledger.remove(AbilityKind::ClearRows));
        assert_eq!(
            ledger.slots(),
            &[
                AbilityKind::None,
                AbilityKind::ColorClear,
                AbilityKind::ColorConvert,
                AbilityKind::None
            ]
        );
        assert!(!ledger.remove(AbilityKind::ClearRows));
    }

    #[test]
    fn test_charges_floor_at_zero() {
        let mut ledger = AbilityLedger::new();
        assert!(!ledger.decrement(AbilityKind::ColorConvert));
        ledger.increment(AbilityKind::ColorConvert);
        ledger.increment(AbilityKind::ColorConvert);
        assert_eq!(ledger.charges(AbilityKind::ColorConvert), 2);
        assert!(ledger.decrement(AbilityKind::ColorConvert));
        assert!(ledger.decrement(AbilityKind::ColorConvert));
        assert!(!ledger.decrement(AbilityKind::ColorConvert));
        assert_eq!(ledger.charges(AbilityKind::ColorConvert), 0);

        ledger.increment(AbilityKind::None);
        assert!(!ledger.has_charge(AbilityKind::None));
    }

    #[test]
    fn test_charges_are_independent_of_slots() {
        let mut ledger = AbilityLedger::new();
        ledger.increment(AbilityKind::ClearRows);
        assert!(ledger.has_charge(AbilityKind::ClearRows));
        assert!(!ledger.contains(AbilityKind::ClearRows));
    }

    #[test]
    fn test_slot_text() {
        let mut ledger = AbilityLedger::new();
        ledger.assign(AbilityKind::ClearRows);
        ledger.increment(AbilityKind::ClearRows);
        ledger.increment(AbilityKind::ClearRows);
        ledger.increment(AbilityKind::ClearRows);

        assert_eq!(ledger.slot_text(1), "[1] Clear Rows (x3)");
        assert_eq!(ledger.slot_text(2), "[2] None");
        assert_eq!(
            ledger.slot_texts(),
            vec!["[1] Clear Rows (x3)", "[2] None", "[3] None", "[4] None"]
        );
    }

    #[test]
    fn test_reset() {
        let mut ledger = AbilityLedger::new();
        ledger.assign(AbilityKind::ColorClear);
        ledger.increment(AbilityKind::ColorClear);
        ledger.reset();
        assert_eq!(ledger, AbilityLedger::new());
    }
}
