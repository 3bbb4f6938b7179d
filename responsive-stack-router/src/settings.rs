//! Settings bootstrap for modal-opened settings flows
//!
//! Deep-linking into a settings sub-screen opens it inside the modal
//! overlay. The user still needs the full-screen settings split view
//! underneath to navigate away from: this rewriter detects the condition
//! and synthesizes that branch, pointed at the section owning the opened
//! sub-screen.

use crate::inspect::is_route_present;
use crate::names::{navigators, screens};
use crate::state::{NavigationState, Route};
use tracing::debug;

/// Sub-screen to owning section. Deep-linking into a detail screen must
/// still show its parent section as the navigable home; names missing here
/// fall back to the profile section.
const SECTION_BY_SUB_SCREEN: &[(&str, &str)] = &[
    (screens::settings::DISPLAY_NAME, screens::settings::PROFILE),
    (screens::settings::CONTACT_METHODS, screens::settings::PROFILE),
    (
        screens::settings::CONTACT_METHOD_DETAILS,
        screens::settings::PROFILE,
    ),
    (screens::settings::SECURITY, screens::settings::SECURITY),
    (screens::settings::LANGUAGE, screens::settings::PREFERENCES),
    (screens::settings::THEME, screens::settings::PREFERENCES),
    (
        screens::settings::PRIORITY_MODE,
        screens::settings::PREFERENCES,
    ),
];

fn section_for(sub_screen: &str) -> &'static str {
    SECTION_BY_SUB_SCREEN
        .iter()
        .find(|(name, _)| *name == sub_screen)
        .map(|(_, section)| *section)
        .unwrap_or(screens::settings::PROFILE)
}

/// Inject a full-screen settings branch when the modal overlay opened the
/// settings entry screen.
///
/// Every missing piece of the expected structure is a silent no-op: absent
/// overlay, overlay without nested state, a different first screen, an
/// already-present full-screen branch, or a missing sub-screen all leave
/// the tree untouched.
pub fn bootstrap_settings(state: &mut NavigationState) {
    let Some(entry) = settings_entry(state) else {
        return;
    };
    if is_route_present(state, navigators::FULL_SCREEN) {
        return;
    }
    let Some(sub_screen) = entry
        .state
        .as_ref()
        .and_then(|nested| nested.routes.first())
        .map(|route| route.name.clone())
    else {
        return;
    };

    let section = section_for(&sub_screen);
    debug!(sub_screen = %sub_screen, section = %section, "injecting full-screen settings");

    let full_screen =
        Route::named(navigators::FULL_SCREEN).with_state(NavigationState::with_routes(vec![
            Route::named(screens::SETTINGS_HOME),
            Route::named(screens::SETTINGS_CONTENT).with_state(NavigationState::with_routes(
                vec![Route::named(section)],
            )),
        ]));

    // Slot 2 assumes the content pane already settled into slot 1; shorter
    // sequences take the branch at the end.
    let slot = state.routes.len().min(2);
    state.routes.insert(slot, full_screen);
    state.index = Some(state.routes.len() - 1);
    state.stale = true;
}

/// The settings entry route sitting first in the modal overlay, if the
/// overlay is currently on it.
fn settings_entry(state: &NavigationState) -> Option<&Route> {
    let overlay = state
        .routes
        .iter()
        .find(|route| route.name == navigators::MODAL_OVERLAY)?;
    let first = overlay.state.as_ref()?.routes.first()?;
    if first.name != screens::SETTINGS {
        return None;
    }
    Some(first)
}
