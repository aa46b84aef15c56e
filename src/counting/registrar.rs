//! Binding of volatile raw ids to stable sequential identities.

use std::collections::HashMap;

use tracing::debug;

use crate::counting::detection::{RawId, StableId};

/// Assigns each raw id at most one stable identity, in order of confirmation.
///
/// Identities start at 1 and have no gaps. The counter lives in the
/// registrar, so independent streams each own their own numbering.
#[derive(Debug, Clone)]
pub struct IdentityRegistrar {
    bindings: HashMap<RawId, StableId>,
    next_stable_id: StableId,
}

impl Default for IdentityRegistrar {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
            next_stable_id: 1,
        }
    }
}

impl IdentityRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stable id bound to `raw_id`, binding the next one first if
    /// `appearance_count` has reached `threshold`. A raw id that was never
    /// observed (`appearance_count == 0`) is never bound.
    pub fn confirm_if_eligible(
        &mut self,
        raw_id: RawId,
        appearance_count: u32,
        threshold: u32,
    ) -> Option<StableId> {
        if let Some(&stable_id) = self.bindings.get(&raw_id) {
            return Some(stable_id);
        }
        if appearance_count == 0 || appearance_count < threshold {
            return None;
        }

        let stable_id = self.next_stable_id;
        self.next_stable_id += 1;
        self.bindings.insert(raw_id, stable_id);
        debug!(raw_id, stable_id, appearance_count, "confirmed object");
        Some(stable_id)
    }

    pub fn stable_id(&self, raw_id: RawId) -> Option<StableId> {
        self.bindings.get(&raw_id).copied()
    }

    /// Total number of identities ever assigned. Never decreases.
    pub fn confirmed_count(&self) -> u64 {
        self.next_stable_id - 1
    }

    /// Number of bindings currently retained.
    pub fn bound_len(&self) -> usize {
        self.bindings.len()
    }

    /// Forget the binding for `raw_id`. The stable id is not reused.
    pub fn release(&mut self, raw_id: RawId) -> Option<StableId> {
        self.bindings.remove(&raw_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_at_threshold() {
        let mut registrar = IdentityRegistrar::new();
        assert_eq!(registrar.confirm_if_eligible(7, 1, 3), None);
        assert_eq!(registrar.confirm_if_eligible(7, 2, 3), None);
        assert_eq!(registrar.confirm_if_eligible(7, 3, 3), Some(1));
        assert_eq!(registrar.confirmed_count(), 1);
    }

    #[test]
    fn test_binding_is_idempotent() {
        let mut registrar = IdentityRegistrar::new();
        assert_eq!(registrar.confirm_if_eligible(7, 3, 3), Some(1));
        assert_eq!(registrar.confirm_if_eligible(7, 4, 3), Some(1));
        // An already-bound id is returned even when the count argument is low
        assert_eq!(registrar.confirm_if_eligible(7, 0, 3), Some(1));
        assert_eq!(registrar.confirmed_count(), 1);
    }

    #[test]
    fn test_ids_follow_confirmation_order() {
        let mut registrar = IdentityRegistrar::new();
        // 5 was seen first but 8 crosses the threshold first
        assert_eq!(registrar.confirm_if_eligible(5, 1, 2), None);
        assert_eq!(registrar.confirm_if_eligible(8, 2, 2), Some(1));
        assert_eq!(registrar.confirm_if_eligible(5, 2, 2), Some(2));
        assert_eq!(registrar.stable_id(5), Some(2));
        assert_eq!(registrar.stable_id(8), Some(1));
    }

    #[test]
    fn test_unobserved_id_never_confirmed() {
        let mut registrar = IdentityRegistrar::new();
        assert_eq!(registrar.confirm_if_eligible(5, 0, 0), None);
        assert_eq!(registrar.confirm_if_eligible(5, 0, 3), None);
        assert_eq!(registrar.stable_id(5), None);
        assert_eq!(registrar.confirmed_count(), 0);
        // First real observation under a zero threshold still binds
        assert_eq!(registrar.confirm_if_eligible(5, 1, 0), Some(1));
    }

    #[test]
    fn test_release_does_not_reuse_ids() {
        let mut registrar = IdentityRegistrar::new();
        registrar.confirm_if_eligible(1, 1, 1);
        assert_eq!(registrar.release(1), Some(1));
        assert_eq!(registrar.bound_len(), 0);
        assert_eq!(registrar.confirmed_count(), 1);
        assert_eq!(registrar.confirm_if_eligible(2, 1, 1), Some(2));
    }
}
