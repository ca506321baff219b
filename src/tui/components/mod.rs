//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing deck position and status
//!
//! ### Transient Wrappers (Borrowed Core State)
//!
//! Components created each frame around borrowed core state. Both return the
//! screen regions they drew so the event loop can hit-test mouse input
//! against them:
//! - `SlideStrip`: the left/center/right panes, driven by slide roles
//! - `IndicatorBar`: the dot row, driven by the active indicator
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props" (struct fields or function
//! parameters), not by directly accessing global state. This makes
//! dependencies explicit and components testable. None of them is a source
//! of truth: roles and the active indicator are recomputed from the deck
//! every frame, so a failed draw corrupts nothing.

mod indicator_bar;
mod slide_strip;
mod title_bar;

pub use indicator_bar::IndicatorBar;
pub use slide_strip::SlideStrip;
pub use title_bar::TitleBar;
