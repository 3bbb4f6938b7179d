//! Navigation state tree model
//!
//! A [`NavigationState`] is a recursive tree: each node holds an ordered
//! back stack of [`Route`]s, and a route that is itself a navigator carries
//! a nested state. States arrive *partial* — `index` unset, keys missing,
//! `routes` possibly incomplete — from deep-link parsing or session restore,
//! and leave rehydration *complete*: every node has an in-bounds `index`
//! and every route a stable key.

use serde::{Deserialize, Serialize};

/// JSON object map carried as route parameters.
pub type ParamMap = serde_json::Map<String, serde_json::Value>;

/// A node in the navigation state tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Back-stack entries; insertion order is navigation order.
    #[serde(default)]
    pub routes: Vec<Route>,
    /// Currently active entry in `routes`. `None` while the state is partial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Signals the host runtime that route keys in this subtree must be
    /// regenerated. Set whenever routes are edited outside the normal
    /// action-driven mutation path.
    #[serde(default)]
    pub stale: bool,
}

impl NavigationState {
    /// State holding the given routes, with index and staleness unset.
    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            routes,
            index: None,
            stale: false,
        }
    }

    /// The route rendered on top: the entry at `index`, or the last entry
    /// while the state is still partial.
    pub fn active_route(&self) -> Option<&Route> {
        match self.index {
            Some(index) => self.routes.get(index),
            None => self.routes.last(),
        }
    }

    /// True when `index` addresses an existing entry, or is still unset.
    pub fn index_in_bounds(&self) -> bool {
        match self.index {
            Some(index) => index < self.routes.len(),
            None => true,
        }
    }
}

/// A single back-stack entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Screen or navigator name; unique meaning within its enclosing stack,
    /// but not globally.
    pub name: String,
    /// Stable identity the host runtime keys renders on. Absent in partial
    /// states; assigned during rehydration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Contextual data for the screen (e.g. a thread identifier).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ParamMap>,
    /// Nested navigator state, present iff this route hosts child routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<NavigationState>,
}

impl Route {
    /// Route with the given name and nothing else.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Attach parameters.
    pub fn with_params(mut self, params: ParamMap) -> Self {
        self.params = Some(params);
        self
    }

    /// Attach a nested navigator state.
    pub fn with_state(mut self, state: NavigationState) -> Self {
        self.state = Some(state);
        self
    }

    /// String-valued parameter lookup.
    pub fn string_param(&self, key: &str) -> Option<&str> {
        self.params
            .as_ref()
            .and_then(|params| params.get(key))
            .and_then(|value| value.as_str())
    }
}
