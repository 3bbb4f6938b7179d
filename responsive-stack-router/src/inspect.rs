//! Read-only predicates over the navigation state tree

use crate::names::{navigators, params};
use crate::state::NavigationState;

/// True iff a top-level route with the given name exists.
///
/// Deliberately shallow: used to decide whether a structural insert at the
/// top level would duplicate an existing branch.
pub fn is_route_present(state: &NavigationState, name: &str) -> bool {
    state.routes.iter().any(|route| route.name == name)
}

/// Resolve the most specific active contextual identifier in the tree.
///
/// Overlay content wins over background content: the search descends into
/// the nested state of the last modal-overlay branch when one carries one,
/// then into the nested state of the last route overall, and only reads the
/// context parameter once there is nothing deeper to descend into. The
/// empty string means no identifier is carried anywhere along that chain.
pub fn deepest_context_id(state: &NavigationState) -> String {
    let last_overlay = state
        .routes
        .iter()
        .rev()
        .find(|route| route.name == navigators::MODAL_OVERLAY);
    if let Some(nested) = last_overlay.and_then(|route| route.state.as_ref()) {
        return deepest_context_id(nested);
    }

    let Some(top) = state.routes.last() else {
        return String::new();
    };
    if let Some(nested) = &top.state {
        return deepest_context_id(nested);
    }

    top.string_param(params::CONTEXT_ID)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .unwrap_or_default()
}
