//! Layout-aware state rehydration for stack-based navigation
//!
//! A stack navigation state restored from a deep link, a persisted session
//! or a partial update arrives incomplete: routes may be missing, the
//! active index unset, nested navigators half-built. Rehydration must turn
//! it into a complete, internally consistent tree — and on wide layouts
//! that tree has structural obligations a deep link knows nothing about.
//!
//! [`ResponsiveStackRouter`] wraps any [`StackRouter`] and overrides only
//! rehydration: it reads the current [`ScreenLayout`] once, runs two
//! structural rewrites over the partial tree (content pane injection for
//! wide layouts, settings bootstrap for modal-opened settings flows), then
//! delegates to the wrapped router.
//!
//! # Example
//! ```rust,ignore
//! use responsive_stack_router::{
//!     BaseStackRouter, ResponsiveStackRouter, RouterConfigOptions, ScreenLayout, StackRouter,
//! };
//!
//! let router = ResponsiveStackRouter::with_fixed_layout(
//!     BaseStackRouter::new(),
//!     ScreenLayout::Wide,
//! );
//! let state = router.rehydrate(partial, &options)?;
//! ```

mod base;
mod config;
mod content_pane;
mod error;
mod inspect;
mod layout;
pub mod names;
mod router;
mod settings;
mod state;

pub use base::*;
pub use config::*;
pub use content_pane::*;
pub use error::*;
pub use inspect::*;
pub use layout::*;
pub use router::*;
pub use settings::*;
pub use state::*;

#[cfg(test)]
mod tests;
