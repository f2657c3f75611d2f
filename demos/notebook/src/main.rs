//! # wayline Notebook Demo
//!
//! A small notebook application demonstrating the wayline pipeline:
//!
//! - **Routes**: a literal index, a dynamic `/notes/:id` page, and a
//!   guarded `/drafts` page whose leave hook vetoes the first attempt to
//!   navigate away
//! - **Collaborators**: an in-memory page implementing `Document` and
//!   `Renderer`, and an in-memory address bar
//! - **Events**: a `route` observer logging every match
//! - **Config & logging**: `RouterConfig` from the environment, feeding the
//!   tracing setup
//!
//! ## Running
//!
//! ```bash
//! cargo run --package notebook-demo
//! ```
//!
//! There is no browser here: the script plays the host, writing fragments,
//! pumping `refresh` the way a hashchange listener would, and advancing the
//! virtual clock to settle a cancelled navigation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;

use wayline::core::logging::setup_logging;
use wayline::prelude::*;
use wayline::router::config;

/// The in-memory page. Clones share state so the script can read what the
/// router painted.
#[derive(Clone, Default)]
struct Page {
    state: Arc<Mutex<PageState>>,
}

#[derive(Default)]
struct PageState {
    targets: HashMap<String, String>,
    active_fragment: String,
}

impl Page {
    fn with_target(name: &str) -> Self {
        let page = Self::default();
        page.state
            .lock()
            .unwrap()
            .targets
            .insert(name.to_string(), String::new());
        page
    }

    fn show(&self) {
        let state = self.state.lock().unwrap();
        for (target, content) in &state.targets {
            println!("  [{target}] {content}");
        }
        println!("  active link: {}", state.active_fragment);
    }
}

impl Document for Page {
    fn contains_target(&self, target: &str) -> bool {
        self.state.lock().unwrap().targets.contains_key(target)
    }

    fn clear_target(&mut self, target: &str) {
        if let Some(content) = self.state.lock().unwrap().targets.get_mut(target) {
            content.clear();
        }
    }

    fn update_active_links(&mut self, fragment: &str) {
        self.state.lock().unwrap().active_fragment = fragment.to_string();
    }
}

impl Renderer for Page {
    fn paint(&mut self, content: &str, data: &RenderData, target: &str) -> WaylineResult<()> {
        let mut rendered = content.to_string();
        for (key, value) in data {
            if let Value::String(text) = value {
                rendered = rendered.replace(&format!("{{{key}}}"), text);
            }
        }
        self.state
            .lock()
            .unwrap()
            .targets
            .insert(target.to_string(), rendered);
        Ok(())
    }
}

/// The in-memory address bar the script and the router both write to.
#[derive(Clone, Default)]
struct Address(Arc<Mutex<String>>);

impl AddressSource for Address {
    fn fragment(&self) -> String {
        self.0.lock().unwrap().clone()
    }

    fn set_fragment(&mut self, path: &str) {
        *self.0.lock().unwrap() = format!("#{path}");
    }
}

/// Plays the hashchange listener: refresh, and refresh again if the action
/// redirected.
fn pump(router: &mut Router) -> Transition {
    let mut transition = router.refresh();
    while router.is_redirecting() {
        transition = router.refresh();
    }
    transition
}

fn navigate(router: &mut Router, address: &mut Address, path: &str) -> Transition {
    println!("\n-> navigating to {path}");
    address.set_fragment(path);
    pump(router)
}

fn main() -> WaylineResult<()> {
    let router_config = config::from_env();
    setup_logging(&router_config.log_config());

    let page = Page::with_target(&router_config.target);
    let mut address = Address::default();
    let mut router = Router::new(
        router_config,
        address.clone(),
        page.clone(),
        page.clone(),
    );

    router.on(
        RouterEvent::Route,
        "match-logger",
        Arc::new(|route: &Route| {
            tracing::info!(path = route.path(), name = route.name(), "route matched");
        }),
    )?;

    let notes: Arc<HashMap<&str, &str>> = Arc::new(
        [
            ("1", "Milk, eggs, coffee"),
            ("2", "Call the plumber on Monday"),
            ("3", "Wayline release checklist"),
        ]
        .into_iter()
        .collect(),
    );

    router.route(
        "/",
        RouteOptions::new(Arc::new(|ctx| {
            ctx.render("Notebook index: /notes/1 /notes/2 /notes/3", &RenderOptions::new())
                .ok();
        }))
        .with_name("index"),
    )?;

    let known = notes.clone();
    router.route(
        "/notes/:id",
        RouteOptions::new(Arc::new(move |ctx| {
            let id = ctx.route().param("id").unwrap_or("?").to_string();
            match known.get(id.as_str()) {
                Some(body) => {
                    let options = RenderOptions::new().with_data_fn(Arc::new({
                        let body = (*body).to_string();
                        move |route: &Route| {
                            let mut data = RenderData::new();
                            let id = route.param("id").unwrap_or("?").to_string();
                            data.insert("id".to_string(), Value::String(id));
                            data.insert("body".to_string(), Value::String(body.clone()));
                            data
                        }
                    }));
                    ctx.render("Note {id}: {body}", &options).ok();
                }
                None => ctx.redirect("/"),
            }
        }))
        .with_name("note"),
    )?;

    let saved = Arc::new(AtomicBool::new(false));
    let guard = saved.clone();
    router.route(
        "/drafts",
        RouteOptions::new(Arc::new(|ctx| {
            ctx.render("Draft: unsaved changes...", &RenderOptions::new())
                .ok();
        }))
        .with_leave(Arc::new(move |route| {
            if guard.load(Ordering::SeqCst) {
                true
            } else {
                println!("  (leave hook on {} says: save your draft first!)", route.path());
                false
            }
        })),
    )?;

    router.set_not_found_action(Arc::new(|ctx| {
        let path = ctx.route().path().to_string();
        ctx.render(&format!("Nothing here: {path}"), &RenderOptions::new())
            .ok();
    }));

    // The page-load bootstrap a host would run when auto_run is set.
    if router.auto_run() {
        pump(&mut router);
    }

    navigate(&mut router, &mut address, "/");
    page.show();

    navigate(&mut router, &mut address, "/notes/2");
    page.show();

    // An unknown note id redirects back to the index.
    navigate(&mut router, &mut address, "/notes/99");
    page.show();

    navigate(&mut router, &mut address, "/drafts");
    page.show();

    // Leaving the draft is vetoed: the fragment rolls back and the router
    // sits disabled until the rollback settles.
    let transition = navigate(&mut router, &mut address, "/");
    println!("  transition: {transition:?}, enabled: {}", router.is_enabled());
    router.tick(Duration::from_millis(100));
    pump(&mut router);

    // Save, then leaving goes through.
    saved.store(true, Ordering::SeqCst);
    navigate(&mut router, &mut address, "/");
    page.show();

    // A fragment nothing matches falls back to the not-found action.
    navigate(&mut router, &mut address, "/attic");
    page.show();

    // Two-pop back navigation.
    println!("\n-> history {:?}, going back", router.history().as_slice());
    router.go_back();
    pump(&mut router);
    println!("  now at {:?}", router.current_route().map(Route::path));

    Ok(())
}
