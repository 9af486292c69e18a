//! Logical UI targets and the table that maps them to concrete selectors
//!
//! Services only ever name a [`Target`]; markup knowledge lives here so a
//! platform redesign means editing (or overriding) one table.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Something on the page the workflows interact with
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    // --- sign-in ---
    AcceptCookies,
    EmailInput,
    PasswordInput,
    ContinueButton,
    CookieBanner,
    GotItTip,
    TrayClose,
    MfaInput,
    MfaSubmit,

    // --- posting listing ---
    /// Table body with no rows, the ready signal of an empty listing
    EmptyListing,
    ListingRows,
    RowLocations,
    RowNames,
    RowEditLinks,
    RowBoards,
    NextPage,
    DraftPublishButtons,
    /// 1-based row of the current listing page
    Row(usize),
    RowBoard(usize),
    RowName(usize),
    RowUnpublish(usize),
    RowOptions(usize),
    RowDeleteLink(usize),
    ConfirmUnpublish,
    ConfirmDelete,

    // --- duplicate posting form ---
    NameInput,
    PostToInput,
    LocationInput,
    /// Checkbox of an external job board, by its label
    BoardToggle(String),
    PublishLocationInput,
    /// Autocomplete entry containing the given text
    LocationSuggestion(String),
    RemoteToggle,
    SaveButton,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::AcceptCookies => write!(f, "cookie policy accept button"),
            Target::EmailInput => write!(f, "SSO email field"),
            Target::PasswordInput => write!(f, "SSO password field"),
            Target::ContinueButton => write!(f, "SSO continue button"),
            Target::CookieBanner => write!(f, "cookie banner button"),
            Target::GotItTip => write!(f, "\"Got it\" tip"),
            Target::TrayClose => write!(f, "tray close control"),
            Target::MfaInput => write!(f, "2FA token field"),
            Target::MfaSubmit => write!(f, "2FA submit button"),
            Target::EmptyListing => write!(f, "empty posting table"),
            Target::ListingRows => write!(f, "posting rows"),
            Target::RowLocations => write!(f, "posting locations"),
            Target::RowNames => write!(f, "posting names"),
            Target::RowEditLinks => write!(f, "posting edit links"),
            Target::RowBoards => write!(f, "posting boards"),
            Target::NextPage => write!(f, "next page control"),
            Target::DraftPublishButtons => write!(f, "draft publish buttons"),
            Target::Row(n) => write!(f, "posting row {}", n),
            Target::RowBoard(n) => write!(f, "board of posting row {}", n),
            Target::RowName(n) => write!(f, "name of posting row {}", n),
            Target::RowUnpublish(n) => write!(f, "unpublish button of posting row {}", n),
            Target::RowOptions(n) => write!(f, "options menu of posting row {}", n),
            Target::RowDeleteLink(n) => write!(f, "delete entry of posting row {}", n),
            Target::ConfirmUnpublish => write!(f, "unpublish confirmation"),
            Target::ConfirmDelete => write!(f, "delete confirmation"),
            Target::NameInput => write!(f, "posting name field"),
            Target::PostToInput => write!(f, "\"Post To\" field"),
            Target::LocationInput => write!(f, "\"Location\" field"),
            Target::BoardToggle(board) => write!(f, "\"{}\" board toggle", board),
            Target::PublishLocationInput => write!(f, "publish location field"),
            Target::LocationSuggestion(text) => write!(f, "location suggestion \"{}\"", text),
            Target::RemoteToggle => write!(f, "\"Remote\" toggle"),
            Target::SaveButton => write!(f, "save button"),
        }
    }
}

/// Concrete query understood by the browser backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Css(String),
    XPath(String),
}

/// Concrete selectors, keyed by logical field name
///
/// Row scoped entries are XPath fragments appended to the row expression
/// (`{row}` is replaced by the row XPath). `{board}` and `{text}` are
/// replaced by a complete XPath string literal, quotes included, so templates
/// leave them unquoted. Every field can be overridden from a TOML file; missing
/// fields keep their defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorTable {
    pub accept_cookies: String,
    pub email_input: String,
    pub password_input: String,
    pub continue_button: String,
    pub cookie_banner: String,
    pub got_it_tip: String,
    pub tray_close: String,
    pub mfa_input: String,
    pub mfa_submit: String,

    pub empty_listing: String,
    pub listing_rows: String,
    pub row_locations: String,
    pub row_names: String,
    pub row_edit_links: String,
    pub row_boards: String,
    pub next_page: String,
    pub draft_publish_buttons: String,
    pub row: String,
    pub row_board: String,
    pub row_name: String,
    pub row_unpublish: String,
    pub row_options: String,
    pub row_delete_link: String,
    pub confirm_unpublish: String,
    pub confirm_delete: String,

    pub name_input: String,
    pub post_to_input: String,
    pub location_input: String,
    pub board_toggle: String,
    pub publish_location_input: String,
    pub location_suggestion: String,
    pub remote_toggle: String,
    pub save_button: String,
}

impl Default for SelectorTable {
    fn default() -> Self {
        let s = |v: &str| v.to_string();
        Self {
            accept_cookies: s(r#"//*[@id="cookie-policy-button-accept"]"#),
            email_input: s(r#"//*[@id="id_email"]"#),
            password_input: s(r#"//*[@id="id_password"]"#),
            continue_button: s(r#"//button[@name="continue"]"#),
            cookie_banner: s("#inform-cookies button"),
            got_it_tip: s(r#"//a[text()="Got it"]"#),
            tray_close: s(r#"//div[@data-provides="tray-close"]"#),
            mfa_input: s(r#"//*[@id="id_oath_token"]"#),
            mfa_submit: s(r#"//*[@id="login-form"]/button"#),

            empty_listing: s(r#"//*[@id="job_applications"]/tbody[not(tr)]"#),
            listing_rows: s(r#"//*[@id="job_applications"]/tbody/tr"#),
            row_locations: s(".job-application__offices"),
            row_names: s(".job-application__name"),
            row_edit_links: s(".job-edit-pencil"),
            row_boards: s(".board-column"),
            next_page: s(".next_page"),
            draft_publish_buttons: s(
                r#"//tr[@class="job-application draft external"]//img[@class="publish-application-button"]"#,
            ),
            row: s(r#"//*[@id="job_applications"]/tbody/tr[{n}]"#),
            row_board: s(r#"{row}//*[contains(concat(" ", normalize-space(@class), " "), " board-column ")]"#),
            row_name: s(r#"{row}//*[contains(concat(" ", normalize-space(@class), " "), " job-application__name ")]"#),
            row_unpublish: s(r#"{row}//*[contains(concat(" ", normalize-space(@class), " "), " unpublish-application-button ")]"#),
            row_options: s("{row}/td[3]/div/div[1]"),
            row_delete_link: s("{row}/td[3]/div/div[2]/span/a"),
            confirm_unpublish: s(r#"//a[text()="Unpublish"]"#),
            confirm_delete: s(r#"//*[@id="confirm-delete-post"]"#),

            name_input: s(r#"//input[contains(@class, "Input__InputElem-sc-ipbxf8-0")]"#),
            post_to_input: s(r#"//label[text()="Post To"]/..//input[1]"#),
            location_input: s(r#"//label[text()="Location"]/..//input[1]"#),
            board_toggle: s("//label[text()={board}]/input[1]"),
            publish_location_input: s(r#"//input[@placeholder="Select location"]"#),
            location_suggestion: s(
                r#"//ul[contains(@class, "ui-menu")]/li[contains(@class, "ui-menu-item")]/div[contains(text(), {text})]"#,
            ),
            remote_toggle: s(r#"//label[text()="Remote"]/input[1]"#),
            save_button: s(r#"//a[text()="Save"]"#),
        }
    }
}

impl SelectorTable {
    /// Loads overrides from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves a logical target to a concrete locator
    pub fn resolve(&self, target: &Target) -> Locator {
        let row_scoped = |n: usize, template: &str| {
            let row = self.row.replace("{n}", &n.to_string());
            locator(&template.replace("{row}", &row))
        };

        match target {
            Target::AcceptCookies => locator(&self.accept_cookies),
            Target::EmailInput => locator(&self.email_input),
            Target::PasswordInput => locator(&self.password_input),
            Target::ContinueButton => locator(&self.continue_button),
            Target::CookieBanner => locator(&self.cookie_banner),
            Target::GotItTip => locator(&self.got_it_tip),
            Target::TrayClose => locator(&self.tray_close),
            Target::MfaInput => locator(&self.mfa_input),
            Target::MfaSubmit => locator(&self.mfa_submit),
            Target::EmptyListing => locator(&self.empty_listing),
            Target::ListingRows => locator(&self.listing_rows),
            Target::RowLocations => locator(&self.row_locations),
            Target::RowNames => locator(&self.row_names),
            Target::RowEditLinks => locator(&self.row_edit_links),
            Target::RowBoards => locator(&self.row_boards),
            Target::NextPage => locator(&self.next_page),
            Target::DraftPublishButtons => locator(&self.draft_publish_buttons),
            Target::Row(n) => row_scoped(*n, "{row}"),
            Target::RowBoard(n) => row_scoped(*n, &self.row_board),
            Target::RowName(n) => row_scoped(*n, &self.row_name),
            Target::RowUnpublish(n) => row_scoped(*n, &self.row_unpublish),
            Target::RowOptions(n) => row_scoped(*n, &self.row_options),
            Target::RowDeleteLink(n) => row_scoped(*n, &self.row_delete_link),
            Target::ConfirmUnpublish => locator(&self.confirm_unpublish),
            Target::ConfirmDelete => locator(&self.confirm_delete),
            Target::NameInput => locator(&self.name_input),
            Target::PostToInput => locator(&self.post_to_input),
            Target::LocationInput => locator(&self.location_input),
            Target::BoardToggle(board) => {
                locator(&self.board_toggle.replace("{board}", &xpath_literal(board)))
            }
            Target::PublishLocationInput => locator(&self.publish_location_input),
            Target::LocationSuggestion(text) => {
                locator(&self.location_suggestion.replace("{text}", &xpath_literal(text)))
            }
            Target::RemoteToggle => locator(&self.remote_toggle),
            Target::SaveButton => locator(&self.save_button),
        }
    }
}

/// Expressions starting with `/` or `(` are XPath, anything else is CSS
fn locator(expr: &str) -> Locator {
    if expr.starts_with('/') || expr.starts_with('(') {
        Locator::XPath(expr.to_string())
    } else {
        Locator::Css(expr.to_string())
    }
}

/// Quotes `text` as an XPath 1.0 string literal
///
/// XPath has no escape sequences, so text holding both quote kinds is split on
/// `"` and joined back with `concat()`.
fn xpath_literal(text: &str) -> String {
    if !text.contains('"') {
        return format!("\"{}\"", text);
    }
    if !text.contains('\'') {
        return format!("'{}'", text);
    }
    let parts: Vec<String> = text.split('"').map(|part| format!("\"{}\"", part)).collect();
    format!("concat({})", parts.join(r#", '"', "#))
}
