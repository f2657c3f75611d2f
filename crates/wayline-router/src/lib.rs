//! # wayline-router
//!
//! The navigation core of wayline: a route registry with `:name` path
//! placeholders, a fragment-to-route resolver, a bounded history, global
//! navigation events, and the transition state machine with a vetoable
//! per-route leave hook.
//!
//! The router performs no I/O of its own. The address bar, the document,
//! and the renderer are collaborator traits the host implements; tests run
//! against in-memory implementations and drive time through a virtual
//! clock.
//!
//! ## Modules
//!
//! - [`pattern`] - Path template compilation and matching
//! - [`route`] - Route definitions and registration options
//! - [`router`] - The router and its transition machine
//! - [`history`] - Bounded navigation history
//! - [`events`] - Global navigation events
//! - [`render`] - Renderer and document collaborator contracts
//! - [`address`] - Address source collaborator contract
//! - [`config`] - Configuration loading
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use wayline_router::{
//!     MemoryAddress, RenderData, RouteOptions, Router, RouterConfig, Transition,
//! };
//! use wayline_core::WaylineResult;
//!
//! // A minimal single-target page standing in for the host document.
//! #[derive(Default)]
//! struct Page {
//!     content: String,
//! }
//!
//! impl wayline_router::Document for Page {
//!     fn contains_target(&self, target: &str) -> bool {
//!         target == "yield"
//!     }
//!     fn clear_target(&mut self, _target: &str) {
//!         self.content.clear();
//!     }
//!     fn update_active_links(&mut self, _fragment: &str) {}
//! }
//!
//! impl wayline_router::Renderer for Page {
//!     fn paint(&mut self, content: &str, _data: &RenderData, _target: &str) -> WaylineResult<()> {
//!         self.content = content.to_string();
//!         Ok(())
//!     }
//! }
//!
//! let mut router = Router::new(
//!     RouterConfig::default(),
//!     MemoryAddress::starting_at("/pages/42"),
//!     Page::default(),
//!     Page::default(),
//! );
//!
//! router
//!     .route("/pages/:id", RouteOptions::new(Arc::new(|ctx| {
//!         let id = ctx.route().param("id").unwrap_or("?").to_string();
//!         ctx.render(&format!("page {id}"), &Default::default()).ok();
//!     })))
//!     .unwrap();
//!
//! assert_eq!(router.refresh(), Transition::Committed);
//! assert_eq!(router.current_route().unwrap().param("id"), Some("42"));
//! ```

pub mod address;
pub mod config;
pub mod events;
pub mod history;
pub mod pattern;
pub mod render;
pub mod route;
pub mod router;

// Re-export the most commonly used types at the crate root.
pub use address::{AddressSource, MemoryAddress};
pub use config::RouterConfig;
pub use events::{EventHub, RouteObserver, RouterEvent};
pub use history::History;
pub use pattern::PathPattern;
pub use render::{DataFn, DataSource, Document, RenderData, RenderOptions, Renderer};
pub use route::{LeaveHook, Route, RouteAction, RouteOptions, RouteParams};
pub use router::{ActionContext, Router, Transition};
