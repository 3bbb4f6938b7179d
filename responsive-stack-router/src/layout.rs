//! Screen layout classification
//!
//! The width class is ambient, externally-owned state: the facade reads it
//! from a [`LayoutSource`] exactly once per rehydration call and never
//! caches it across calls. The core transformation takes the resulting
//! [`ScreenLayout`] as an explicit argument so it stays a pure function of
//! its inputs.

use std::sync::Arc;

/// Width class of the hosting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenLayout {
    /// Compact single-pane layout (phones, narrow windows).
    Narrow,
    /// Wide layout with room for a dedicated content pane.
    Wide,
}

impl ScreenLayout {
    /// True for the compact single-pane layout.
    pub fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}

/// Source of the current layout classification, owned by the hosting
/// runtime.
pub type LayoutSource = Arc<dyn Fn() -> ScreenLayout + Send + Sync>;
