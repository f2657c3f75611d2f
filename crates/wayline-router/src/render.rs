//! Rendering and document collaborator contracts.
//!
//! The router never paints anything itself. Content is handed to a
//! [`Renderer`] and target lookup, clearing, and link highlighting go
//! through a [`Document`]. Hosts implement both against their actual page
//! model; tests implement them in memory.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use wayline_core::WaylineResult;

use crate::route::Route;

/// Data handed to the renderer alongside the content.
pub type RenderData = HashMap<String, Value>;

/// A function that produces render data from the matched route.
pub type DataFn = Arc<dyn Fn(&Route) -> RenderData + Send + Sync>;

/// Paints content into a named target.
pub trait Renderer {
    /// Renders `content` with `data` into the target named `target`.
    ///
    /// The target is guaranteed to exist in the document by the time this
    /// is called.
    fn paint(&mut self, content: &str, data: &RenderData, target: &str) -> WaylineResult<()>;
}

/// Queries and manipulates the host page.
pub trait Document {
    /// True if a target with this name exists in the page.
    fn contains_target(&self, target: &str) -> bool;

    /// Removes the previous content of the target.
    fn clear_target(&mut self, target: &str);

    /// Updates link highlighting so that anchors pointing at `fragment`
    /// (the raw, `#`-prefixed form) are marked active and all others are
    /// not.
    fn update_active_links(&mut self, fragment: &str);
}

/// Where render data comes from.
///
/// The two cases are explicit variants resolved at the call site: a map
/// used as-is, or a producer invoked with the matched route.
#[derive(Clone)]
pub enum DataSource {
    /// A plain mapping, copied key by key (no deep merge).
    Literal(RenderData),
    /// A function invoked with the matched route.
    Computed(DataFn),
}

impl DataSource {
    /// Resolves this source into concrete render data for `route`.
    pub fn resolve(&self, route: &Route) -> RenderData {
        match self {
            Self::Literal(map) => map.clone(),
            Self::Computed(producer) => producer(route),
        }
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(map) => f.debug_tuple("Literal").field(map).finish(),
            Self::Computed(_) => f.debug_tuple("Computed").field(&"<fn>").finish(),
        }
    }
}

/// Per-call options for a render.
///
/// # Examples
///
/// ```
/// use wayline_router::render::RenderOptions;
///
/// let options = RenderOptions::new().with_target("sidebar");
/// ```
#[derive(Debug, Default, Clone)]
pub struct RenderOptions {
    /// Overrides the router's default target when set.
    pub(crate) target: Option<String>,
    /// Render data source; absent means empty data.
    pub(crate) data: Option<DataSource>,
}

impl RenderOptions {
    /// Creates empty options: default target, no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders into `target` instead of the router's default target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Supplies a plain data mapping.
    #[must_use]
    pub fn with_data(mut self, data: RenderData) -> Self {
        self.data = Some(DataSource::Literal(data));
        self
    }

    /// Supplies a data-producing function invoked with the matched route.
    #[must_use]
    pub fn with_data_fn(mut self, producer: DataFn) -> Self {
        self.data = Some(DataSource::Computed(producer));
        self
    }
}
