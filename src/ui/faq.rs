//! FAQ accordion
//!
//! At most one entry is open. Activating an entry closes every other one and
//! toggles the activated entry.

/// An entry whose open state changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryChange {
    pub index: usize,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    /// All entries closed
    pub fn new(len: usize) -> Self {
        Self {
            open: vec![false; len],
        }
    }

    /// Build from observed DOM state, keeping only the first open entry
    pub fn from_states(states: Vec<bool>) -> Self {
        let mut seen = false;
        let open = states
            .into_iter()
            .map(|is_open| {
                let keep = is_open && !seen;
                seen |= is_open;
                keep
            })
            .collect();
        Self { open }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open.iter().position(|o| *o)
    }

    /// Activate an entry (click or keyboard).
    /// Returns the entries whose state changed, in index order.
    pub fn activate(&mut self, index: usize) -> Vec<EntryChange> {
        let Some(was_open) = self.open.get(index).copied() else {
            return Vec::new();
        };

        let mut changes = Vec::new();
        for (i, open) in self.open.iter_mut().enumerate() {
            let next = i == index && !was_open;
            if *open != next {
                *open = next;
                changes.push(EntryChange { index: i, open: next });
            }
        }
        changes
    }
}

/// Keys that activate a focused question
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_open_then_switch() {
        let mut faq = Accordion::new(3);
        assert_eq!(
            faq.activate(0),
            vec![EntryChange { index: 0, open: true }]
        );
        assert_eq!(
            faq.activate(2),
            vec![
                EntryChange { index: 0, open: false },
                EntryChange { index: 2, open: true },
            ]
        );
        assert_eq!(faq.open_index(), Some(2));
    }

    #[test]
    fn test_reactivating_open_entry_closes_all() {
        let mut faq = Accordion::new(2);
        faq.activate(1);
        assert_eq!(
            faq.activate(1),
            vec![EntryChange { index: 1, open: false }]
        );
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut faq = Accordion::new(2);
        faq.activate(0);
        assert!(faq.activate(5).is_empty());
        assert!(faq.is_open(0));
    }

    #[test]
    fn test_from_states_normalizes() {
        let faq = Accordion::from_states(vec![false, true, true, false]);
        assert_eq!(faq.open_index(), Some(1));
        assert!(!faq.is_open(2));
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Spacebar"));
    }

    proptest! {
        #[test]
        fn prop_single_open_invariant(
            len in 1usize..8,
            presses in prop::collection::vec(0usize..10, 0..40),
        ) {
            let mut faq = Accordion::new(len);
            for index in presses {
                let was_open = faq.is_open(index);
                faq.activate(index);

                let open_count = (0..len).filter(|i| faq.is_open(*i)).count();
                prop_assert!(open_count <= 1);
                if index < len {
                    prop_assert_eq!(faq.is_open(index), !was_open);
                    if was_open {
                        prop_assert_eq!(open_count, 0);
                    }
                }
            }
        }
    }
}
