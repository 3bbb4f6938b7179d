//! Router configuration bundle
//!
//! [`RouterConfigOptions`] is handed to every rehydration call: the ordered
//! route table, per-route default parameters, and per-route identity-key
//! generators. The bundle is passed through the facade to the wrapped
//! router unchanged.
//!
//! # Example
//! ```rust,ignore
//! let options = RouterConfigOptions::new(["Home", "ContentScreen"])
//!     .with_default_params("ContentScreen", defaults)
//!     .with_id_generator("ContentScreen", |params| {
//!         params.get("contextID")?.as_str().map(str::to_owned)
//!     });
//! ```

use crate::state::ParamMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identity-key generator for a route: derives a stable id from the route's
/// parameters, or `None` when the route has no natural identity.
pub type RouteIdFn = Arc<dyn Fn(&ParamMap) -> Option<String> + Send + Sync>;

/// Routing configuration consumed by [`StackRouter`](crate::StackRouter)
/// implementations.
#[derive(Clone, Default)]
pub struct RouterConfigOptions {
    /// Ordered route table; the first entry is the initial route.
    pub route_names: Vec<String>,
    /// Default parameters merged under provided parameters, per route name.
    pub route_param_list: HashMap<String, ParamMap>,
    /// Per-route identity-key generators.
    pub route_get_id_list: HashMap<String, RouteIdFn>,
}

impl RouterConfigOptions {
    /// Configuration with the given route table and no defaults.
    pub fn new<I, S>(route_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            route_names: route_names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Register default parameters for a route.
    pub fn with_default_params(mut self, name: impl Into<String>, params: ParamMap) -> Self {
        self.route_param_list.insert(name.into(), params);
        self
    }

    /// Register an identity-key generator for a route.
    pub fn with_id_generator<F>(mut self, name: impl Into<String>, get_id: F) -> Self
    where
        F: Fn(&ParamMap) -> Option<String> + Send + Sync + 'static,
    {
        self.route_get_id_list.insert(name.into(), Arc::new(get_id));
        self
    }

    /// True iff the route table contains the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.route_names.iter().any(|known| known == name)
    }

    /// Identity for a route name and parameter set, when a generator is
    /// registered and yields one.
    pub fn id_for(&self, name: &str, params: Option<&ParamMap>) -> Option<String> {
        let get_id = self.route_get_id_list.get(name)?;
        let empty = ParamMap::new();
        get_id(params.unwrap_or(&empty))
    }
}

impl fmt::Debug for RouterConfigOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterConfigOptions")
            .field("route_names", &self.route_names)
            .field("route_param_list", &self.route_param_list)
            .field(
                "route_get_id_list",
                &self.route_get_id_list.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}
