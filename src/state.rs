//! Form state for the generator.
//!
//! One mutable struct holds the three input fields plus per-field touched
//! flags; the target URL is recomputed from it on demand and never stored
//! as a second source of truth.

use crate::constants::defaults;
use crate::url_model;

/// Per-field edit tracking, display-only.
/// A flag switches the field text from the muted default color to the
/// full-strength edited color. Once set it stays set for the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchedFlags {
    pub base_url: bool,
    pub code: bool,
    pub id: bool,
}

/// Current input values, owned by the application for the session.
/// The input widgets mutate the strings directly and set the matching
/// touched flag on change.
#[derive(Debug, Clone)]
pub struct FormState {
    pub base_url: String,
    pub code: String,
    pub id: String,
    pub touched: TouchedFlags,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Starts from the built-in defaults, nothing touched.
    pub fn new() -> Self {
        Self::with_initial(defaults::BASE_URL, defaults::CODE, defaults::ID)
    }

    /// Starts from explicit initial values (CLI overrides), nothing touched.
    pub fn with_initial(base_url: &str, code: &str, id: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            code: code.to_string(),
            id: id.to_string(),
            touched: TouchedFlags::default(),
        }
    }

    /// Recomputes the target URL from the current field values.
    pub fn derived_url(&self) -> String {
        url_model::derive_url(&self.base_url, &self.code, &self.id)
    }

    /// Filename an export of the current state would be saved under.
    pub fn export_filename(&self) -> String {
        url_model::export_filename(&self.code, &self.id)
    }
}
