//! SSO sign-in - business capability layer

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::{Config, Pacing};
use crate::error::{AppResult, AutomationError};
use crate::infrastructure::{Availability, AutomationSurface, Target, Waiter};
use crate::models::Credentials;

/// Source of the second authentication factor
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> AppResult<String>;
}

/// Asks the operator on the terminal
pub struct StdinTokenPrompt;

#[async_trait]
impl TokenSource for StdinTokenPrompt {
    async fn token(&self) -> AppResult<String> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(b"Enter your 2FA token: ")
            .await
            .map_err(|source| AutomationError::PromptFailed { source })?;
        stdout
            .flush()
            .await
            .map_err(|source| AutomationError::PromptFailed { source })?;

        let mut line = String::new();
        BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
            .map_err(|source| AutomationError::PromptFailed { source })?;
        Ok(line.trim().to_string())
    }
}

/// SSO sign-in
///
/// Responsibilities:
/// - accepts cookie prompts and closes tips and trays that block clicks
/// - enters credentials, and the 2FA token when a token source is given
pub struct SsoAuthenticator {
    waiter: Waiter,
    pacing: Pacing,
    base_url: String,
}

impl SsoAuthenticator {
    pub fn new(config: &Config) -> Self {
        Self {
            waiter: Waiter::from_config(config),
            pacing: config.pacing.clone(),
            base_url: config.base_url.clone(),
        }
    }

    pub async fn sign_in(
        &self,
        surface: &dyn AutomationSurface,
        credentials: &Credentials,
        mfa: Option<&dyn TokenSource>,
    ) -> AppResult<()> {
        info!("🔐 Signing in as {}", credentials.username);
        surface.navigate(&self.base_url).await?;

        log_optional("cookie policy", surface.try_click(&Target::AcceptCookies).await?);

        surface.type_text(&Target::EmailInput, &credentials.username).await?;
        surface.type_text(&Target::PasswordInput, &credentials.password).await?;
        log_optional("continue button", surface.try_click(&Target::ContinueButton).await?);

        for outcome in surface.try_click_each(&Target::CookieBanner).await? {
            log_optional("cookie banner", outcome);
        }
        log_optional("\"Got it\" tip", surface.try_click(&Target::GotItTip).await?);
        let trays = surface.click_all(&Target::TrayClose, Duration::ZERO).await?;
        debug!("{} tray(s) minimised", trays);

        if let Some(source) = mfa {
            let token = source.token().await?;
            sleep(self.pacing.mfa_settle).await;
            self.waiter.for_presence(surface, &Target::MfaInput).await?;
            surface.type_text(&Target::MfaInput, &token).await?;
            surface.click(&Target::MfaSubmit).await?;
        }

        info!("✓ Signed in");
        Ok(())
    }
}

fn log_optional(what: &str, outcome: Availability) {
    match outcome {
        Availability::Applied => debug!("{} handled", what),
        Availability::Unavailable(reason) => debug!("{} skipped: {}", what, reason),
    }
}
