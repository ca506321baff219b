//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::{App, Slide};

/// Builds `n` throwaway slides with distinct titles.
pub fn test_slides(n: usize) -> Vec<Slide> {
    (0..n)
        .map(|i| Slide {
            title: format!("Slide {}", i + 1),
            body: format!("Body text for slide {}", i + 1),
        })
        .collect()
}

/// Creates a test App with `n` slides and default settings.
pub fn test_app(n: usize) -> App {
    App::new(test_slides(n))
}
