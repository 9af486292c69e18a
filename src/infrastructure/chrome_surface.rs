//! CDP backed automation surface - infrastructure layer
//!
//! Holds the single page of the session and exposes it only through
//! [`AutomationSurface`].

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Element, Page};
use serde_json::Value as JsonValue;
use tokio::time::sleep;
use tracing::debug;

use crate::error::{AppError, AppResult, AutomationError, BrowserError};
use crate::infrastructure::selectors::{Locator, SelectorTable, Target};
use crate::infrastructure::surface::{Availability, AutomationSurface, Key};

/// Clears a form control through the native value setter so framework
/// managed inputs observe the change
const CLEAR_VALUE_JS: &str = r#"function() {
    const proto = Object.getPrototypeOf(this);
    const descriptor = Object.getOwnPropertyDescriptor(proto, 'value');
    if (descriptor && descriptor.set) {
        descriptor.set.call(this, '');
    } else {
        this.value = '';
    }
    this.dispatchEvent(new Event('input', { bubbles: true }));
}"#;

const READ_VALUE_JS: &str = "function() { return this.value; }";

/// Automation surface over a chromiumoxide page
///
/// Responsibilities:
/// - owns the only `Page` of the session
/// - resolves logical targets through the selector table
/// - knows nothing about requisitions or postings
pub struct ChromeSurface {
    page: Page,
    selectors: SelectorTable,
}

impl ChromeSurface {
    pub fn new(page: Page, selectors: SelectorTable) -> Self {
        Self { page, selectors }
    }

    async fn find(&self, target: &Target) -> AppResult<Vec<Element>> {
        let elements = match self.selectors.resolve(target) {
            Locator::Css(css) => self.page.find_elements(css).await?,
            Locator::XPath(xpath) => self.page.find_xpaths(xpath).await?,
        };
        Ok(elements)
    }

    async fn find_one(&self, target: &Target) -> AppResult<Element> {
        self.find(target)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::element_not_found(target))
    }
}

#[async_trait]
impl AutomationSurface for ChromeSurface {
    async fn navigate(&self, url: &str) -> AppResult<()> {
        debug!("navigating to {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|source| BrowserError::NavigationFailed {
                url: url.to_string(),
                source,
            })?;
        Ok(())
    }

    async fn reload(&self) -> AppResult<()> {
        self.page.reload().await?;
        Ok(())
    }

    async fn count(&self, target: &Target) -> AppResult<usize> {
        Ok(self.find(target).await?.len())
    }

    async fn read_texts(&self, target: &Target) -> AppResult<Vec<String>> {
        let mut texts = Vec::new();
        for element in self.find(target).await? {
            texts.push(element.inner_text().await?.unwrap_or_default());
        }
        Ok(texts)
    }

    async fn read_attributes(&self, target: &Target, name: &str) -> AppResult<Vec<Option<String>>> {
        let mut values = Vec::new();
        for element in self.find(target).await? {
            values.push(element.attribute(name).await?);
        }
        Ok(values)
    }

    async fn read_text(&self, target: &Target) -> AppResult<String> {
        let element = self.find_one(target).await?;
        Ok(element.inner_text().await?.unwrap_or_default())
    }

    async fn read_attribute(&self, target: &Target, name: &str) -> AppResult<Option<String>> {
        let element = self.find_one(target).await?;
        Ok(element.attribute(name).await?)
    }

    async fn read_value(&self, target: &Target) -> AppResult<String> {
        let element = self.find_one(target).await?;
        let returns = element.call_js_fn(READ_VALUE_JS, false).await?;
        Ok(returns
            .result
            .value
            .as_ref()
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string())
    }

    async fn click(&self, target: &Target) -> AppResult<()> {
        self.find_one(target).await?.click().await?;
        Ok(())
    }

    async fn click_all(&self, target: &Target, pause: Duration) -> AppResult<usize> {
        let elements = self.find(target).await?;
        for element in &elements {
            element.click().await?;
            sleep(pause).await;
        }
        Ok(elements.len())
    }

    async fn try_click(&self, target: &Target) -> AppResult<Availability> {
        let Some(element) = self.find(target).await?.into_iter().next() else {
            return Ok(Availability::Unavailable(format!("{} not present", target)));
        };
        match element.click().await {
            Ok(_) => Ok(Availability::Applied),
            Err(e) => Ok(Availability::Unavailable(format!("{} not clickable: {}", target, e))),
        }
    }

    async fn try_click_each(&self, target: &Target) -> AppResult<Vec<Availability>> {
        let mut outcomes = Vec::new();
        for element in self.find(target).await? {
            outcomes.push(match element.click().await {
                Ok(_) => Availability::Applied,
                Err(e) => Availability::Unavailable(format!("{} not clickable: {}", target, e)),
            });
        }
        Ok(outcomes)
    }

    async fn type_text(&self, target: &Target, text: &str) -> AppResult<()> {
        let element = self.find_one(target).await?;
        element.focus().await?;
        element.type_str(text).await?;
        Ok(())
    }

    async fn clear(&self, target: &Target) -> AppResult<()> {
        let element = self.find_one(target).await?;
        element.call_js_fn(CLEAR_VALUE_JS, false).await?;
        Ok(())
    }

    async fn press_key(&self, target: &Target, key: Key) -> AppResult<()> {
        let element = self.find_one(target).await?;
        element.focus().await?;
        element.press_key(key.name()).await?;
        Ok(())
    }

    async fn run_script(&self, code: &str) -> AppResult<JsonValue> {
        let result = self
            .page
            .evaluate(code)
            .await
            .map_err(|e| AutomationError::ScriptFailed {
                reason: e.to_string(),
            })?;
        Ok(result.value().cloned().unwrap_or(JsonValue::Null))
    }
}
