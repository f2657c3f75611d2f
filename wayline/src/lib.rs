//! # wayline
//!
//! A client-side fragment navigation resolver for Rust.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `wayline` to get the whole stack, or depend on
//! individual crates for finer-grained control.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use wayline::prelude::*;
//!
//! # #[derive(Default)] struct Page { content: String }
//! # impl Document for Page {
//! #     fn contains_target(&self, target: &str) -> bool { target == "yield" }
//! #     fn clear_target(&mut self, _target: &str) { self.content.clear(); }
//! #     fn update_active_links(&mut self, _fragment: &str) {}
//! # }
//! # impl Renderer for Page {
//! #     fn paint(&mut self, content: &str, _data: &RenderData, _target: &str)
//! #         -> wayline::core::WaylineResult<()>
//! #     { self.content = content.to_string(); Ok(()) }
//! # }
//! let mut router = Router::new(
//!     RouterConfig::default(),
//!     MemoryAddress::starting_at("/"),
//!     Page::default(),
//!     Page::default(),
//! );
//!
//! router
//!     .route("/", RouteOptions::new(Arc::new(|ctx| {
//!         ctx.render("welcome", &RenderOptions::new()).ok();
//!     })))
//!     .unwrap();
//!
//! assert_eq!(router.refresh(), Transition::Committed);
//! ```

/// Foundation types: errors, logging setup, and the one-shot scheduler.
pub use wayline_core as core;

/// Signal dispatcher for decoupled event handling.
#[cfg(feature = "signals")]
pub use wayline_signals as signals;

/// Route registry, fragment resolution, history, and transitions.
#[cfg(feature = "router")]
pub use wayline_router as router;

// Third-party re-exports so hosts need not pin matching versions.
pub use serde;
pub use serde_json;
pub use tracing;

/// The types most hosts need, importable in one line.
pub mod prelude {
    pub use wayline_core::{WaylineError, WaylineResult};

    #[cfg(feature = "signals")]
    pub use wayline_signals::Signal;

    #[cfg(feature = "router")]
    pub use wayline_router::{
        ActionContext, AddressSource, DataSource, Document, MemoryAddress, RenderData,
        RenderOptions, Renderer, Route, RouteOptions, RouteParams, Router, RouterConfig,
        RouterEvent, Transition,
    };
}
