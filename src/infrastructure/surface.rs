//! Automation surface - infrastructure layer
//!
//! The only way the services touch the recruiting platform. Implemented over
//! CDP by [`ChromeSurface`](super::ChromeSurface); tests provide an in-memory
//! platform.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::AppResult;
use crate::infrastructure::selectors::Target;

/// Keys the workflows send to focused inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowDown,
    Tab,
}

impl Key {
    /// DOM key name
    pub fn name(self) -> &'static str {
        match self {
            Key::Enter => "Enter",
            Key::ArrowDown => "ArrowDown",
            Key::Tab => "Tab",
        }
    }
}

/// Outcome of an interaction the caller is allowed to skip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Applied,
    Unavailable(String),
}

impl Availability {
    pub fn is_applied(&self) -> bool {
        matches!(self, Availability::Applied)
    }
}

/// Page capability consumed by every service
///
/// Methods addressing a single element act on the first match and fail with
/// `ElementNotFound` when there is none. Multi-element reads return one entry
/// per match, in document order.
#[async_trait]
pub trait AutomationSurface: Send + Sync {
    async fn navigate(&self, url: &str) -> AppResult<()>;

    async fn reload(&self) -> AppResult<()>;

    /// Number of elements currently matching
    async fn count(&self, target: &Target) -> AppResult<usize>;

    async fn read_texts(&self, target: &Target) -> AppResult<Vec<String>>;

    async fn read_attributes(&self, target: &Target, name: &str) -> AppResult<Vec<Option<String>>>;

    async fn read_text(&self, target: &Target) -> AppResult<String>;

    async fn read_attribute(&self, target: &Target, name: &str) -> AppResult<Option<String>>;

    /// Current value of a form control
    async fn read_value(&self, target: &Target) -> AppResult<String>;

    async fn click(&self, target: &Target) -> AppResult<()>;

    /// Clicks every match found at call time, pausing after each click
    async fn click_all(&self, target: &Target, pause: Duration) -> AppResult<usize>;

    /// Like `click`, but a missing or non-interactable element is reported
    /// instead of failing
    async fn try_click(&self, target: &Target) -> AppResult<Availability>;

    /// `try_click` on every match found at call time; empty when none match
    async fn try_click_each(&self, target: &Target) -> AppResult<Vec<Availability>>;

    async fn type_text(&self, target: &Target, text: &str) -> AppResult<()>;

    async fn clear(&self, target: &Target) -> AppResult<()>;

    async fn press_key(&self, target: &Target, key: Key) -> AppResult<()>;

    async fn run_script(&self, code: &str) -> AppResult<JsonValue>;
}
