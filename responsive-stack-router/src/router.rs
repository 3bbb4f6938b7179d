//! Stack router capability and the responsive facade
//!
//! [`StackRouter`] is the capability set a stack navigator needs from its
//! router: route-table-driven state construction, rehydration of partial
//! states, and path generation. [`ResponsiveStackRouter`] wraps any
//! implementation and overrides rehydration alone: it adjusts the partial
//! tree for the current screen layout, then delegates.

use crate::config::RouterConfigOptions;
use crate::content_pane::ensure_content_pane;
use crate::error::NavResult;
use crate::layout::{LayoutSource, ScreenLayout};
use crate::settings::bootstrap_settings;
use crate::state::NavigationState;
use std::sync::Arc;

/// Capability set of a stack router.
pub trait StackRouter: Send + Sync {
    /// Build the initial state for the configured route table.
    fn initial_state(&self, options: &RouterConfigOptions) -> NavResult<NavigationState>;

    /// Complete a partial state: assign keys, merge default params, clamp
    /// the active index and clear staleness, recursively.
    fn rehydrate(
        &self,
        partial: NavigationState,
        options: &RouterConfigOptions,
    ) -> NavResult<NavigationState>;

    /// Deep-link path for the active route chain of a state.
    fn path_for(&self, state: &NavigationState, options: &RouterConfigOptions) -> String;
}

/// Stack router facade that adjusts partial states for the current screen
/// layout before delegating to the wrapped router.
///
/// Two structural rewrites run on every rehydration, in order: the content
/// pane injection (wide layouts only), then the settings bootstrap. The
/// wrapped router's own key generation, path matching and history merging
/// are untouched.
///
/// # Example
/// ```rust,ignore
/// let router = ResponsiveStackRouter::new(
///     BaseStackRouter::new(),
///     Arc::new(|| window.layout()),
/// );
/// let state = router.rehydrate(partial, &options)?;
/// ```
pub struct ResponsiveStackRouter<R> {
    inner: R,
    layout_source: LayoutSource,
}

impl<R: StackRouter> ResponsiveStackRouter<R> {
    /// Wrap `inner`, reading the layout from `layout_source` once per
    /// rehydration call.
    pub fn new(inner: R, layout_source: LayoutSource) -> Self {
        Self {
            inner,
            layout_source,
        }
    }

    /// Wrap `inner` with a layout that never changes. Useful for tests and
    /// fixed-geometry hosts.
    pub fn with_fixed_layout(inner: R, layout: ScreenLayout) -> Self {
        Self::new(inner, Arc::new(move || layout))
    }

    /// Core transformation with the layout passed explicitly: adjust the
    /// partial tree structurally, then delegate. A pure function of its
    /// inputs.
    pub fn rehydrate_with_layout(
        &self,
        mut partial: NavigationState,
        options: &RouterConfigOptions,
        layout: ScreenLayout,
    ) -> NavResult<NavigationState> {
        ensure_content_pane(&mut partial, layout);
        bootstrap_settings(&mut partial);
        self.inner.rehydrate(partial, options)
    }

    /// The wrapped router.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: StackRouter> StackRouter for ResponsiveStackRouter<R> {
    fn initial_state(&self, options: &RouterConfigOptions) -> NavResult<NavigationState> {
        self.inner.initial_state(options)
    }

    fn rehydrate(
        &self,
        partial: NavigationState,
        options: &RouterConfigOptions,
    ) -> NavResult<NavigationState> {
        let layout = (self.layout_source)();
        self.rehydrate_with_layout(partial, options, layout)
    }

    fn path_for(&self, state: &NavigationState, options: &RouterConfigOptions) -> String {
        self.inner.path_for(state, options)
    }
}
