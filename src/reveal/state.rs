//! Per-element reveal state
//!
//! Elements live in an arena indexed by [`ElementId`]. The watch set holds the
//! indices still eligible for a reveal; an element leaves it on its first
//! qualifying notification and never re-enters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::margin::RootMargin;
use crate::error::EnhanceError;

/// Threshold and margin for one reveal group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealOptions {
    /// Fraction of the element (0.0 - 1.0) that must be visible
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"0px 0px -50px 0px"`
    pub root_margin: String,
}

impl RevealOptions {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Self {
        Self {
            threshold,
            root_margin: root_margin.into(),
        }
    }

    pub fn validate(&self) -> Result<(), EnhanceError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(EnhanceError::InvalidConfig(format!(
                "reveal threshold {} outside 0..=1",
                self.threshold
            )));
        }
        self.margin().map(|_| ())
    }

    pub fn margin(&self) -> Result<RootMargin, EnhanceError> {
        self.root_margin.parse()
    }
}

/// Handle into a [`RevealSet`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

/// Lifecycle of a single element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Registered but not yet handed to the observer
    #[default]
    Unobserved,
    /// Waiting for its first qualifying notification
    Watching,
    /// Revealed for the rest of the page lifetime
    Revealed,
}

/// One visibility notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub target: ElementId,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Intersection {
    pub fn new(target: ElementId, ratio: f64, is_intersecting: bool) -> Self {
        Self {
            target,
            ratio,
            is_intersecting,
        }
    }
}

/// Watched element set for one reveal group
#[derive(Debug, Clone)]
pub struct RevealSet {
    options: RevealOptions,
    phases: Vec<RevealPhase>,
    watching: BTreeSet<usize>,
}

impl RevealSet {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            phases: Vec::new(),
            watching: BTreeSet::new(),
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Allocate an arena slot
    pub fn register(&mut self) -> ElementId {
        self.phases.push(RevealPhase::Unobserved);
        ElementId(self.phases.len() - 1)
    }

    /// Move an element into the watch set.
    /// Returns false if it is unknown or already past `Unobserved`.
    pub fn watch(&mut self, id: ElementId) -> bool {
        match self.phases.get_mut(id.0) {
            Some(phase @ RevealPhase::Unobserved) => {
                *phase = RevealPhase::Watching;
                self.watching.insert(id.0);
                true
            }
            _ => false,
        }
    }

    /// Register and watch `count` elements, returning their ids in order
    pub fn watch_all(&mut self, count: usize) -> Vec<ElementId> {
        (0..count)
            .map(|_| {
                let id = self.register();
                self.watch(id);
                id
            })
            .collect()
    }

    /// Apply a batch of notifications.
    /// Returns the elements revealed by this batch; these must stop being observed.
    pub fn notify(&mut self, entries: &[Intersection]) -> Vec<ElementId> {
        let mut revealed = Vec::new();
        for entry in entries {
            if !self.qualifies(entry) {
                continue;
            }
            if self.watching.remove(&entry.target.0) {
                self.phases[entry.target.0] = RevealPhase::Revealed;
                revealed.push(entry.target);
            }
        }
        revealed
    }

    /// Reveal everything not yet revealed (no visibility detection available)
    pub fn reveal_all(&mut self) -> Vec<ElementId> {
        self.watching.clear();
        self.phases
            .iter_mut()
            .enumerate()
            .filter(|(_, phase)| **phase != RevealPhase::Revealed)
            .map(|(i, phase)| {
                *phase = RevealPhase::Revealed;
                ElementId(i)
            })
            .collect()
    }

    /// The observer is built with the group's threshold and only reports
    /// crossings, so `is_intersecting` is the gate. Reported ratios can land
    /// just under the threshold, and elements taller than the viewport never
    /// reach it.
    fn qualifies(&self, entry: &Intersection) -> bool {
        entry.is_intersecting
    }

    pub fn phase(&self, id: ElementId) -> Option<RevealPhase> {
        self.phases.get(id.0).copied()
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.phase(id) == Some(RevealPhase::Revealed)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn watching_len(&self) -> usize {
        self.watching.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.phases
            .iter()
            .filter(|p| **p == RevealPhase::Revealed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fade_in_set() -> RevealSet {
        RevealSet::new(RevealOptions::new(0.1, "0px 0px -50px 0px"))
    }

    #[test]
    fn test_watch_lifecycle() {
        let mut set = fade_in_set();
        let id = set.register();
        assert_eq!(set.phase(id), Some(RevealPhase::Unobserved));

        assert!(set.watch(id));
        assert_eq!(set.phase(id), Some(RevealPhase::Watching));
        assert!(!set.watch(id), "watching twice is a no-op");

        let revealed = set.notify(&[Intersection::new(id, 0.5, true)]);
        assert_eq!(revealed, vec![id]);
        assert_eq!(set.phase(id), Some(RevealPhase::Revealed));
        assert_eq!(set.watching_len(), 0);
        assert!(!set.watch(id), "revealed elements never re-enter the watch set");
    }

    #[test]
    fn test_not_intersecting_does_not_reveal() {
        let mut set = fade_in_set();
        let ids = set.watch_all(2);

        let revealed = set.notify(&[
            Intersection::new(ids[0], 0.0, false),
            Intersection::new(ids[1], 0.9, false),
        ]);
        assert!(revealed.is_empty());
        assert_eq!(set.revealed_count(), 0);
        assert_eq!(set.watching_len(), 2);
    }

    #[test]
    fn test_crossing_reported_just_below_threshold_reveals() {
        let mut set = fade_in_set();
        let ids = set.watch_all(1);
        assert_eq!(set.notify(&[Intersection::new(ids[0], 0.099_999_99, true)]), ids);
        assert_eq!(set.phase(ids[0]), Some(RevealPhase::Revealed));
        assert_eq!(set.watching_len(), 0);
    }

    #[test]
    fn test_element_taller_than_viewport_reveals() {
        // A card ten viewports tall never shows more than ~10% of itself
        let mut set = fade_in_set();
        let ids = set.watch_all(1);
        assert_eq!(set.notify(&[Intersection::new(ids[0], 0.08, true)]), ids);
    }

    #[test]
    fn test_zero_threshold_reveals_on_any_intersection() {
        let mut set = RevealSet::new(RevealOptions::new(0.0, "0px"));
        let ids = set.watch_all(1);
        assert_eq!(set.notify(&[Intersection::new(ids[0], 0.0, true)]), ids);
    }

    #[test]
    fn test_repeated_notifications_are_idempotent() {
        let mut set = fade_in_set();
        let ids = set.watch_all(3);

        let first = set.notify(&[Intersection::new(ids[1], 1.0, true)]);
        assert_eq!(first, vec![ids[1]]);

        // Scrolling away and back does not un-reveal or re-report
        let second = set.notify(&[
            Intersection::new(ids[1], 0.0, false),
            Intersection::new(ids[1], 1.0, true),
        ]);
        assert!(second.is_empty());
        assert!(set.is_revealed(ids[1]));
        assert_eq!(set.watching_len(), 2);
    }

    #[test]
    fn test_unwatched_and_unknown_ids_ignored() {
        let mut set = fade_in_set();
        let registered = set.register();
        let revealed = set.notify(&[
            Intersection::new(registered, 1.0, true),
            Intersection::new(ElementId(42), 1.0, true),
        ]);
        assert!(revealed.is_empty());
        assert_eq!(set.phase(registered), Some(RevealPhase::Unobserved));
        assert_eq!(set.phase(ElementId(42)), None);
    }

    #[test]
    fn test_empty_set_is_noop() {
        let mut set = fade_in_set();
        assert!(set.is_empty());
        assert!(set.notify(&[]).is_empty());
        assert!(set.reveal_all().is_empty());
    }

    #[test]
    fn test_reveal_all_fallback() {
        let mut set = RevealSet::new(RevealOptions::new(0.0, "0px"));
        let ids = set.watch_all(4);
        set.notify(&[Intersection::new(ids[2], 1.0, true)]);

        let revealed = set.reveal_all();
        assert_eq!(revealed, vec![ids[0], ids[1], ids[3]]);
        assert_eq!(set.revealed_count(), 4);
        assert_eq!(set.watching_len(), 0);
    }

    #[test]
    fn test_options_validation() {
        assert!(RevealOptions::new(0.1, "0px 0px -50px 0px").validate().is_ok());
        assert!(RevealOptions::new(1.5, "0px").validate().is_err());
        assert!(RevealOptions::new(-0.1, "0px").validate().is_err());
        assert!(RevealOptions::new(0.5, "50pt").validate().is_err());
    }

    fn arb_batches() -> impl Strategy<Value = Vec<Vec<(usize, f64, bool)>>> {
        prop::collection::vec(
            prop::collection::vec((0usize..8, 0.0f64..=1.0, any::<bool>()), 0..6),
            0..12,
        )
    }

    proptest! {
        #[test]
        fn prop_reveal_is_monotonic_and_reported_once(batches in arb_batches()) {
            let mut set = fade_in_set();
            let ids = set.watch_all(8);
            let mut reported = vec![0usize; 8];

            for batch in &batches {
                let before: Vec<bool> = ids.iter().map(|id| set.is_revealed(*id)).collect();
                let entries: Vec<Intersection> = batch
                    .iter()
                    .map(|(i, ratio, hit)| Intersection::new(ids[*i], *ratio, *hit))
                    .collect();

                for id in set.notify(&entries) {
                    reported[id.0] += 1;
                }

                for (i, id) in ids.iter().enumerate() {
                    let qualified = batch.iter().any(|(j, _, hit)| *j == i && *hit);
                    let now = set.is_revealed(*id);
                    // Never un-reveals
                    prop_assert!(!before[i] || now);
                    // Never reveals without a qualifying notification
                    prop_assert!(before[i] || now == qualified);
                }
            }

            prop_assert!(reported.iter().all(|n| *n <= 1));
            prop_assert_eq!(set.watching_len() + set.revealed_count(), 8);
        }
    }
}
