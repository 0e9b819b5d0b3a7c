//! Stateless interaction handlers
//!
//! Each submodule holds the decision logic for one handler; the DOM side reads
//! the current classes, asks these types what to change, and writes it back.

pub mod anchor;
pub mod faq;
pub mod header;
pub mod menu;

pub use anchor::{fragment_id, scroll_target};
pub use faq::{Accordion, EntryChange, is_activation_key};
pub use header::{HeaderScroll, HeaderStyle, ScrollAction, is_scrolled};
pub use menu::{MenuState, outside_click};
