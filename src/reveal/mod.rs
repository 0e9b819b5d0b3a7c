//! Scroll-triggered reveal
//!
//! Watch a set of elements and mark each one revealed the first time enough of
//! it enters the viewport, then stop tracking it. Used for the content card
//! fade-in and for lazy avatar images. Browser wiring lives in `web::reveal`.

pub mod margin;
pub mod state;

pub use margin::{MarginLength, RootMargin};
pub use state::{ElementId, Intersection, RevealOptions, RevealPhase, RevealSet};
