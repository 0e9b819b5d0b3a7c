//! Khodroban landing page - progressive enhancement in WebAssembly
//!
//! Core modules:
//! - `reveal`: One-shot visibility reveal (fade-in cards, lazy avatars)
//! - `ui`: Menu, header, anchor scroll and FAQ accordion state
//! - `timing`: Debounce/throttle state machines
//! - `diagnostics`: Error reports and page-load timing
//! - `init`: Ordered, fault-isolated initializer runner
//! - `config`: Data-driven tuning read from the page
//! - `web`: DOM bindings (wasm32 only)
//!
//! Everything outside `web` is platform independent so it can be tested natively.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod init;
pub mod reveal;
pub mod timing;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::LandingConfig;
pub use error::EnhanceError;

/// DOM contract and tuning defaults
pub mod consts {
    /// Element ids
    pub const HEADER_ID: &str = "header";
    pub const MENU_BUTTON_ID: &str = "mobileMenuBtn";
    pub const NAV_LINKS_ID: &str = "navLinks";
    /// Inline JSON config (`<script type="application/json" id="landing-config">`)
    pub const CONFIG_ELEMENT_ID: &str = "landing-config";

    /// State classes
    pub const NAV_OPEN_CLASS: &str = "active";
    pub const HEADER_SCROLLED_CLASS: &str = "scrolled";
    pub const REVEALED_CLASS: &str = "fade-in";
    pub const FAQ_OPEN_CLASS: &str = "active";
    pub const FAQ_ANSWER_OPEN_CLASS: &str = "show";
    pub const JS_ENABLED_CLASS: &str = "js-enabled";
    pub const LOADING_CLASS: &str = "loading";

    /// Selectors
    pub const FAQ_QUESTION_SELECTOR: &str = ".faq-question";
    pub const FAQ_ANSWER_SELECTOR: &str = ".faq-answer";
    pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
    pub const AVATAR_SELECTOR: &str = ".testimonial-avatar";
    pub const FADE_IN_SELECTORS: [&str; 4] =
        [".feature-card", ".stat-card", ".step", ".testimonial-card"];

    /// Menu button glyphs
    pub const MENU_GLYPH_CLOSED: &str = "☰";
    pub const MENU_GLYPH_OPEN: &str = "✕";

    /// Header gets the scrolled style strictly past this offset (px)
    pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
    /// Fixed header height subtracted from anchor scroll targets (px)
    pub const HEADER_OFFSET: f64 = 80.0;

    /// Content cards reveal once 10% is visible, 50px above the bottom edge
    pub const FADE_IN_THRESHOLD: f64 = 0.1;
    pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
    /// Avatars reveal as soon as any part intersects
    pub const AVATAR_THRESHOLD: f64 = 0.0;
    pub const AVATAR_ROOT_MARGIN: &str = "0px";

    /// Global namespace exposed on `window`
    pub const GLOBAL_NAMESPACE: &str = "KhodrobanLanding";
}
