//! Bounded condition waits
//!
//! Every blocking wait in the program goes through [`Waiter`]: one attempt, one
//! fixed timeout, the condition polled at a fixed interval.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::selectors::Target;
use crate::infrastructure::surface::AutomationSurface;

#[derive(Debug, Clone, Copy)]
pub struct Waiter {
    timeout: Duration,
    poll_interval: Duration,
}

impl Waiter {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.wait_timeout, config.poll_interval)
    }

    /// Polls `probe` until it yields a value or the timeout elapses
    ///
    /// Errors returned by the probe abort the wait immediately.
    pub async fn until<T, F, Fut>(&self, condition: &str, mut probe: F) -> AppResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AppResult<Option<T>>>,
    {
        let deadline = Instant::now() + self.timeout;
        let mut polls = 0usize;
        loop {
            polls += 1;
            if let Some(value) = probe().await? {
                debug!("condition '{}' met after {} poll(s)", condition, polls);
                return Ok(value);
            }
            if Instant::now() >= deadline {
                return Err(AppError::timeout(condition, self.timeout));
            }
            sleep(self.poll_interval).await;
        }
    }

    /// Waits until at least one element matches, returning the match count
    pub async fn for_presence(
        &self,
        surface: &dyn AutomationSurface,
        target: &Target,
    ) -> AppResult<usize> {
        let condition = target.to_string();
        self.until(&condition, || async move {
            let found = surface.count(target).await?;
            Ok::<_, AppError>((found > 0).then_some(found))
        })
        .await
    }

    /// Waits until the posting listing has rendered: location cells exist, or
    /// the table body is present without rows
    pub async fn for_listing(&self, surface: &dyn AutomationSurface) -> AppResult<usize> {
        self.until("posting listing to render", || async move {
            let rows = surface.count(&Target::RowLocations).await?;
            if rows > 0 {
                return Ok::<_, AppError>(Some(rows));
            }
            let empty = surface.count(&Target::EmptyListing).await?;
            Ok::<_, AppError>((empty > 0).then_some(0))
        })
        .await
    }
}
