//! Address source collaborator contract.
//!
//! The router reads the current fragment from an [`AddressSource`] and
//! writes a new fragment to trigger navigation. The host owns the real
//! address bar and is responsible for invoking
//! [`Router::refresh`](crate::Router::refresh) whenever the fragment
//! changes, however the change happened.

/// The address bar, reduced to its fragment.
pub trait AddressSource {
    /// Returns the current fragment, possibly `#`-prefixed (the router
    /// strips the prefix itself).
    fn fragment(&self) -> String;

    /// Replaces the fragment. `path` carries no `#` prefix; implementations
    /// store it `#`-prefixed the way a browser address bar would.
    fn set_fragment(&mut self, path: &str);
}

/// An in-memory address bar.
///
/// # Examples
///
/// ```
/// use wayline_router::address::{AddressSource, MemoryAddress};
///
/// let mut address = MemoryAddress::new();
/// address.set_fragment("/pages/42");
/// assert_eq!(address.fragment(), "#/pages/42");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryAddress {
    fragment: String,
}

impl MemoryAddress {
    /// Creates an address with an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an address already pointing at `path`.
    pub fn starting_at(path: &str) -> Self {
        let mut address = Self::new();
        address.set_fragment(path);
        address
    }
}

impl AddressSource for MemoryAddress {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, path: &str) {
        self.fragment = format!("#{path}");
    }
}
