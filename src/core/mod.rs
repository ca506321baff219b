//! # Core Carousel Logic
//!
//! This module contains Marquee's navigation engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • deck (current index) │
//!                    │  • layout (roles)       │
//!                    │  • gesture (swipes)     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    web     │      │   tests    │
//!     │  Adapter   │      │  (future)  │      │            │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: `SlideDeck` — the current index and its wraparound arithmetic
//! - [`layout`]: slide roles and indicator state, recomputed per render
//! - [`gesture`]: swipe interpretation from pointer coordinate pairs
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`state`]: the `App` struct — all carousel state in one place
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod deck;
pub mod gesture;
pub mod layout;
pub mod state;
