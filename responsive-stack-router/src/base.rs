//! Reference stack router implementation
//!
//! [`BaseStackRouter`] is a plain stack router: no layout awareness, no
//! screen-specific bootstrap. Rehydration keeps only routes present in the
//! route table, merges default parameters under provided ones, assigns
//! stable keys, clamps the active index and clears staleness, recursing
//! through nested navigators. Hosts with their own router keep using it
//! through [`StackRouter`]; this one exists so the facade is usable out of
//! the box.

use crate::config::RouterConfigOptions;
use crate::error::{NavError, NavResult};
use crate::router::StackRouter;
use crate::state::{NavigationState, ParamMap, Route};
use tracing::trace;
use uuid::Uuid;

/// Plain stack router over a flat route table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseStackRouter;

impl BaseStackRouter {
    pub fn new() -> Self {
        Self
    }

    fn rehydrate_node(
        &self,
        node: NavigationState,
        options: &RouterConfigOptions,
        initial: &str,
    ) -> NavigationState {
        let regenerate = node.stale;
        let mut routes: Vec<Route> = Vec::with_capacity(node.routes.len());
        for route in node.routes {
            if !options.contains(&route.name) {
                trace!(name = %route.name, "dropping route not in the route table");
                continue;
            }
            routes.push(self.rehydrate_route(route, options, regenerate, initial));
        }
        if routes.is_empty() {
            trace!("no configured routes survived; falling back to the initial route");
            routes.push(self.rehydrate_route(Route::named(initial), options, true, initial));
        }

        let index = match node.index {
            Some(index) if index < routes.len() => index,
            _ => routes.len() - 1,
        };
        NavigationState {
            routes,
            index: Some(index),
            stale: false,
        }
    }

    fn rehydrate_route(
        &self,
        mut route: Route,
        options: &RouterConfigOptions,
        regenerate: bool,
        initial: &str,
    ) -> Route {
        let mut params = options.route_param_list.get(&route.name).cloned();
        if let Some(provided) = route.params.take() {
            let merged = params.get_or_insert_with(ParamMap::new);
            for (key, value) in provided {
                merged.insert(key, value);
            }
        }
        route.params = params;

        if regenerate || route.key.is_none() {
            route.key = Some(self.key_for(&route.name, route.params.as_ref(), options));
        }
        if let Some(nested) = route.state.take() {
            route.state = Some(self.rehydrate_node(nested, options, initial));
        }
        route
    }

    fn key_for(
        &self,
        name: &str,
        params: Option<&ParamMap>,
        options: &RouterConfigOptions,
    ) -> String {
        match options.id_for(name, params) {
            Some(id) => format!("{name}-{id}"),
            None => format!("{name}-{}", Uuid::now_v7()),
        }
    }
}

impl StackRouter for BaseStackRouter {
    /// Initial state: the first route of the route table with its default
    /// parameters.
    fn initial_state(&self, options: &RouterConfigOptions) -> NavResult<NavigationState> {
        self.rehydrate(NavigationState::default(), options)
    }

    fn rehydrate(
        &self,
        partial: NavigationState,
        options: &RouterConfigOptions,
    ) -> NavResult<NavigationState> {
        let Some(initial) = options.route_names.first() else {
            return Err(NavError::invalid_configuration("route table is empty"));
        };
        Ok(self.rehydrate_node(partial, options, initial))
    }

    fn path_for(&self, state: &NavigationState, options: &RouterConfigOptions) -> String {
        let mut segments = Vec::new();
        let mut node = Some(state);
        while let Some(current) = node {
            let Some(route) = current.active_route() else {
                break;
            };
            match options.id_for(&route.name, route.params.as_ref()) {
                Some(id) => segments.push(format!("{}/{}", route.name, id)),
                None => segments.push(route.name.clone()),
            }
            node = route.state.as_ref();
        }
        format!("/{}", segments.join("/"))
    }
}
