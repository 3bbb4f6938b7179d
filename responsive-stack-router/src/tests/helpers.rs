//! Shared fixtures for rewriter and router tests

use crate::names::{navigators, params, screens};
use crate::{
    BaseStackRouter, NavigationState, ParamMap, ResponsiveStackRouter, Route, RouterConfigOptions,
    ScreenLayout,
};

/// First navigator of the application stack in these fixtures.
pub const HOME: &str = "HomeNavigator";

pub fn state(routes: Vec<Route>) -> NavigationState {
    NavigationState::with_routes(routes)
}

pub fn route(name: &str) -> Route {
    Route::named(name)
}

pub fn navigator(name: &str, routes: Vec<Route>) -> Route {
    Route::named(name).with_state(NavigationState::with_routes(routes))
}

pub fn context_route(name: &str, context_id: &str) -> Route {
    let mut route_params = ParamMap::new();
    route_params.insert(
        params::CONTEXT_ID.to_owned(),
        serde_json::Value::String(context_id.to_owned()),
    );
    Route::named(name).with_params(route_params)
}

/// Modal overlay currently sitting on `Settings -> sub_screen`.
pub fn settings_overlay(sub_screen: &str) -> Route {
    navigator(
        navigators::MODAL_OVERLAY,
        vec![route(screens::SETTINGS).with_state(state(vec![route(sub_screen)]))],
    )
}

/// Route table covering every name these tests touch.
pub fn options() -> RouterConfigOptions {
    RouterConfigOptions::new([
        HOME,
        navigators::MODAL_OVERLAY,
        navigators::CONTENT_PANE,
        navigators::FULL_SCREEN,
        screens::CONTENT,
        screens::SETTINGS,
        screens::SETTINGS_HOME,
        screens::SETTINGS_CONTENT,
        screens::settings::DISPLAY_NAME,
        screens::settings::CONTACT_METHODS,
        screens::settings::CONTACT_METHOD_DETAILS,
        screens::settings::SECURITY,
        screens::settings::LANGUAGE,
        screens::settings::THEME,
        screens::settings::PRIORITY_MODE,
        screens::settings::PROFILE,
        screens::settings::PREFERENCES,
    ])
}

pub fn wide_router() -> ResponsiveStackRouter<BaseStackRouter> {
    ResponsiveStackRouter::with_fixed_layout(BaseStackRouter::new(), ScreenLayout::Wide)
}

pub fn narrow_router() -> ResponsiveStackRouter<BaseStackRouter> {
    ResponsiveStackRouter::with_fixed_layout(BaseStackRouter::new(), ScreenLayout::Narrow)
}

/// Assert that every node of a rehydrated tree is complete: in-bounds
/// index, a key on every route, staleness cleared.
pub fn assert_complete(state: &NavigationState) {
    assert!(!state.stale, "rehydrated state must not be stale");
    let index = state.index.expect("rehydrated state must have an index");
    assert!(
        index < state.routes.len(),
        "index {} out of bounds for {} routes",
        index,
        state.routes.len()
    );
    for route in &state.routes {
        assert!(route.key.is_some(), "route '{}' has no key", route.name);
        if let Some(nested) = &route.state {
            assert_complete(nested);
        }
    }
}
