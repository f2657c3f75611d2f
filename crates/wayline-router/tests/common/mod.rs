//! Shared fixtures for the router integration tests: an in-memory page
//! standing in for the host document/renderer, and a settable address bar.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use wayline_core::WaylineResult;
use wayline_router::{AddressSource, Document, RenderData, Renderer};

/// One recorded paint call.
#[derive(Debug, Clone)]
pub struct PaintRecord {
    pub target: String,
    pub content: String,
    pub data: RenderData,
}

#[derive(Default)]
struct PageState {
    targets: HashMap<String, String>,
    active_fragment: String,
    paints: Vec<PaintRecord>,
}

/// An in-memory page implementing both collaborator traits.
///
/// Clones share state, so a test keeps one handle for assertions after
/// moving clones into the router.
#[derive(Clone, Default)]
pub struct PageStub {
    state: Arc<Mutex<PageState>>,
}

impl PageStub {
    pub fn with_target(name: &str) -> Self {
        let page = Self::default();
        page.add_target(name);
        page
    }

    pub fn add_target(&self, name: &str) {
        self.state
            .lock()
            .unwrap()
            .targets
            .insert(name.to_string(), String::new());
    }

    pub fn content(&self, target: &str) -> Option<String> {
        self.state.lock().unwrap().targets.get(target).cloned()
    }

    pub fn active_fragment(&self) -> String {
        self.state.lock().unwrap().active_fragment.clone()
    }

    pub fn paints(&self) -> Vec<PaintRecord> {
        self.state.lock().unwrap().paints.clone()
    }

    pub fn paint_count(&self) -> usize {
        self.state.lock().unwrap().paints.len()
    }
}

impl Document for PageStub {
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

impl Renderer for PageStub {
    fn paint(&mut self, content: &str, data: &RenderData, target: &str) -> WaylineResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .targets
            .insert(target.to_string(), content.to_string());
        state.paints.push(PaintRecord {
            target: target.to_string(),
            content: content.to_string(),
            data: data.clone(),
        });
        Ok(())
    }
}

/// An in-memory address bar whose clones share one fragment.
#[derive(Clone, Default)]
pub struct StubAddress(Arc<Mutex<String>>);

impl StubAddress {
    /// The raw fragment as stored, `#` prefix included.
    pub fn raw(&self) -> String {
        self.0.lock().unwrap().clone()
    }
}

impl AddressSource for StubAddress {
    fn fragment(&self) -> String {
        self.0.lock().unwrap().clone()
    }

    fn set_fragment(&mut self, path: &str) {
        *self.0.lock().unwrap() = format!("#{path}");
    }
}
