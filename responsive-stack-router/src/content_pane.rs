//! Primary content pane injection for wide layouts
//!
//! A wide layout must always show a primary content pane next to the base
//! navigator. States restored from deep links or persisted sessions often
//! lack one; this rewriter inserts it and fixes up the derived bookkeeping.

use crate::inspect::{deepest_context_id, is_route_present};
use crate::layout::ScreenLayout;
use crate::names::{navigators, params, screens};
use crate::state::{NavigationState, ParamMap, Route};
use tracing::debug;

/// Ensure a wide-layout state carries a primary content pane.
///
/// The pane is a nested navigator holding a single content route whose
/// context identifier comes from the deep-context search over the tree as
/// it was before the insert. An empty identifier is valid: the content
/// screen then resolves its own target from the most recently accessed
/// item.
///
/// No-op on narrow layouts and on states that already carry a content
/// pane, so repeated rehydration never stacks panes.
pub fn ensure_content_pane(state: &mut NavigationState, layout: ScreenLayout) {
    if layout.is_narrow() || is_route_present(state, navigators::CONTENT_PANE) {
        return;
    }

    let context_id = deepest_context_id(state);
    debug!(context_id = %context_id, "injecting content pane");

    let mut pane_params = ParamMap::new();
    pane_params.insert(
        params::CONTEXT_ID.to_owned(),
        serde_json::Value::String(context_id),
    );
    let pane = Route::named(navigators::CONTENT_PANE).with_state(NavigationState::with_routes(
        vec![Route::named(screens::CONTENT).with_params(pane_params)],
    ));

    // Slot 1 keeps the first navigator as the base of the stack; shorter
    // sequences take the pane at the end.
    let slot = state.routes.len().min(1);
    state.routes.insert(slot, pane);
    state.index = Some(state.routes.len() - 1);
    state.stale = true;
}
