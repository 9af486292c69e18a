//! In-memory recruiting platform implementing `AutomationSurface`
//!
//! Models just enough of the real pages for the services to run end to end:
//! a paginated listing per requisition, the duplicate posting form and the
//! sign-in page. Every mutation is journaled so tests can assert on it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use greenhouse_fanout::error::{AppError, AppResult, AutomationError};
use greenhouse_fanout::infrastructure::{Availability, AutomationSurface, Key, Target};
use greenhouse_fanout::Config;
use serde_json::Value as JsonValue;

pub const BASE_URL: &str = "https://example.test";
pub const SECONDARY_BOARD: &str = "Indeed";

/// Configuration pointing at the fake platform
pub fn test_config() -> Config {
    Config {
        base_url: BASE_URL.to_string(),
        wait_timeout: Duration::from_secs(10),
        poll_interval: Duration::from_millis(250),
        ..Config::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakePosting {
    pub id: String,
    pub board: String,
    pub name: String,
    pub location: String,
    pub live: bool,
}

impl FakePosting {
    pub fn new(id: &str, board: &str, name: &str, location: &str, live: bool) -> Self {
        Self {
            id: id.to_string(),
            board: board.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            live,
        }
    }

    fn is_external(&self) -> bool {
        self.board != "INTERNAL"
    }

    fn row_class(&self) -> String {
        let status = if self.live { "live" } else { "draft" };
        if self.is_external() {
            format!("job-application {} external", status)
        } else {
            format!("job-application {}", status)
        }
    }
}

/// How the last listing page renders its "next" control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastPageControl {
    Absent,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum View {
    Blank,
    Login,
    Listing { job_id: String, page: usize },
    DuplicateForm { job_id: String },
}

#[derive(Debug, Clone, Default)]
struct Form {
    name: String,
    post_to: String,
    board: String,
    location: String,
    publish_location: String,
    publish_location_committed: bool,
    secondary_board: bool,
    remote: bool,
}

#[derive(Debug, Default)]
pub struct Journal {
    /// (job id, posting) for every saved duplicate, in save order
    pub created: Vec<(String, FakePosting)>,
    pub deleted: Vec<FakePosting>,
    pub unpublished: Vec<String>,
    pub published: Vec<String>,
    pub navigations: Vec<String>,
    /// Listing pages rendered, as (job id, page)
    pub listing_views: Vec<(String, usize)>,
    pub typed: Vec<(Target, String)>,
    pub tooltips_closed: usize,
    pub trays_closed: usize,
    pub cookie_buttons_clicked: usize,
    pub signed_in: bool,
}

struct State {
    requisitions: HashMap<String, Vec<FakePosting>>,
    page_size: usize,
    last_page_control: LastPageControl,
    secondary_board_available: bool,
    suggestions_enabled: bool,
    pending_tooltips: usize,
    relative_edit_links: bool,
    cookie_buttons: usize,
    detached_cookie_buttons: usize,
    view: View,
    form: Form,
    open_menu: Option<usize>,
    pending_delete: Option<usize>,
    pending_unpublish: Option<usize>,
    next_id: u64,
    journal: Journal,
}

pub struct FakePlatform {
    state: Mutex<State>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                requisitions: HashMap::new(),
                page_size: 50,
                last_page_control: LastPageControl::Absent,
                secondary_board_available: true,
                suggestions_enabled: true,
                pending_tooltips: 0,
                relative_edit_links: false,
                cookie_buttons: 0,
                detached_cookie_buttons: 0,
                view: View::Blank,
                form: Form::default(),
                open_menu: None,
                pending_delete: None,
                pending_unpublish: None,
                next_id: 90_000,
                journal: Journal::default(),
            }),
        }
    }

    pub fn with_requisition(self, job_id: &str, postings: Vec<FakePosting>) -> Self {
        self.lock().requisitions.insert(job_id.to_string(), postings);
        self
    }

    pub fn with_page_size(self, page_size: usize) -> Self {
        self.lock().page_size = page_size;
        self
    }

    pub fn with_last_page_control(self, control: LastPageControl) -> Self {
        self.lock().last_page_control = control;
        self
    }

    pub fn without_secondary_board(self) -> Self {
        self.lock().secondary_board_available = false;
        self
    }

    pub fn without_location_suggestions(self) -> Self {
        self.lock().suggestions_enabled = false;
        self
    }

    pub fn with_tooltips(self, count: usize) -> Self {
        self.lock().pending_tooltips = count;
        self
    }

    /// Edit links rendered as `/jobapps/<id>/edit`, as in server markup
    pub fn with_relative_edit_links(self) -> Self {
        self.lock().relative_edit_links = true;
        self
    }

    /// Cookie banner with `total` buttons, the first `detached` of which
    /// reject clicks
    pub fn with_cookie_buttons(self, total: usize, detached: usize) -> Self {
        {
            let mut state = self.lock();
            state.cookie_buttons = total;
            state.detached_cookie_buttons = detached;
        }
        self
    }

    pub fn postings(&self, job_id: &str) -> Vec<FakePosting> {
        self.lock()
            .requisitions
            .get(job_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn journal<R>(&self, read: impl FnOnce(&Journal) -> R) -> R {
        read(&self.lock().journal)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("fake platform state poisoned")
    }
}

impl State {
    fn listing(&self) -> Option<(&str, usize)> {
        match &self.view {
            View::Listing { job_id, page } => Some((job_id.as_str(), *page)),
            _ => None,
        }
    }

    fn page_count(&self, job_id: &str) -> usize {
        let total = self.requisitions.get(job_id).map_or(0, Vec::len);
        total.div_ceil(self.page_size).max(1)
    }

    fn page_range(&self) -> Option<(String, std::ops::Range<usize>)> {
        let (job_id, page) = self.listing()?;
        let total = self.requisitions.get(job_id).map_or(0, Vec::len);
        let start = ((page - 1) * self.page_size).min(total);
        let end = (page * self.page_size).min(total);
        Some((job_id.to_string(), start..end))
    }

    fn page_rows(&self) -> Vec<FakePosting> {
        match self.page_range() {
            Some((job_id, range)) => self.requisitions[&job_id][range].to_vec(),
            None => Vec::new(),
        }
    }

    /// Index into the requisition of the 1-based row `n` on the current page
    fn row_index(&self, n: usize) -> Option<(String, usize)> {
        let (job_id, range) = self.page_range()?;
        (n >= 1 && n <= range.len()).then(|| (job_id, range.start + n - 1))
    }

    fn row(&self, n: usize) -> Option<&FakePosting> {
        let (job_id, idx) = self.row_index(n)?;
        self.requisitions.get(&job_id).and_then(|p| p.get(idx))
    }

    fn has_next_page(&self) -> bool {
        match self.listing() {
            Some((job_id, page)) => page < self.page_count(job_id),
            None => false,
        }
    }

    fn in_form(&self) -> bool {
        matches!(self.view, View::DuplicateForm { .. })
    }

    fn count(&self, target: &Target) -> usize {
        let rows = self.page_rows();
        let login = self.view == View::Login;
        match target {
            Target::AcceptCookies | Target::EmailInput | Target::PasswordInput => login as usize,
            Target::ContinueButton | Target::MfaInput | Target::MfaSubmit => login as usize,
            Target::CookieBanner => {
                if login {
                    self.cookie_buttons
                } else {
                    0
                }
            }
            Target::GotItTip => 0,
            Target::TrayClose => {
                if login {
                    2
                } else {
                    0
                }
            }

            Target::EmptyListing => (self.listing().is_some() && rows.is_empty()) as usize,
            Target::ListingRows
            | Target::RowLocations
            | Target::RowNames
            | Target::RowEditLinks
            | Target::RowBoards => rows.len(),
            Target::NextPage => match self.listing() {
                Some(_) if self.has_next_page() => 1,
                Some(_) => (self.last_page_control == LastPageControl::Disabled) as usize,
                None => 0,
            },
            Target::DraftPublishButtons => rows.iter().filter(|p| !p.live && p.is_external()).count(),
            Target::Row(n) | Target::RowBoard(n) | Target::RowName(n) | Target::RowOptions(n) => {
                self.row(*n).is_some() as usize
            }
            Target::RowUnpublish(n) => self.row(*n).is_some_and(|p| p.live) as usize,
            Target::RowDeleteLink(n) => (self.open_menu == Some(*n)) as usize,
            Target::ConfirmUnpublish => self.pending_unpublish.is_some() as usize,
            Target::ConfirmDelete => self.pending_delete.is_some() as usize,

            Target::NameInput
            | Target::PostToInput
            | Target::LocationInput
            | Target::PublishLocationInput
            | Target::RemoteToggle
            | Target::SaveButton => self.in_form() as usize,
            Target::BoardToggle(board) => {
                (self.in_form() && self.secondary_board_available && board == SECONDARY_BOARD) as usize
            }
            Target::LocationSuggestion(text) => (self.in_form()
                && self.suggestions_enabled
                && !self.form.publish_location.is_empty()
                && text.contains(self.form.publish_location.as_str()))
                as usize,
        }
    }

    fn require(&self, target: &Target) -> AppResult<()> {
        if self.count(target) == 0 {
            return Err(AppError::element_not_found(target));
        }
        Ok(())
    }

    fn click(&mut self, target: &Target) -> AppResult<()> {
        self.require(target)?;
        match target {
            Target::NextPage => {
                if !self.has_next_page() {
                    return Err(script_failed("clicked a disabled next page control"));
                }
                if let View::Listing { job_id, page } = &self.view {
                    let (job_id, page) = (job_id.clone(), *page + 1);
                    self.journal.listing_views.push((job_id.clone(), page));
                    self.view = View::Listing { job_id, page };
                }
            }
            Target::RowUnpublish(n) => self.pending_unpublish = Some(*n),
            Target::ConfirmUnpublish => {
                if let Some((job_id, idx)) = self.pending_unpublish.take().and_then(|n| self.row_index(n)) {
                    let posting = &mut self.requisitions.get_mut(&job_id).expect("listed")[idx];
                    posting.live = false;
                    self.journal.unpublished.push(posting.id.clone());
                }
            }
            Target::RowOptions(n) => self.open_menu = Some(*n),
            Target::RowDeleteLink(n) => {
                self.open_menu = None;
                self.pending_delete = Some(*n);
            }
            Target::ConfirmDelete => {
                let Some((job_id, idx)) = self.pending_delete.take().and_then(|n| self.row_index(n)) else {
                    return Err(script_failed("delete confirmed without a row"));
                };
                let postings = self.requisitions.get_mut(&job_id).expect("listed");
                if postings[idx].live {
                    return Err(script_failed("live postings cannot be deleted"));
                }
                let removed = postings.remove(idx);
                self.journal.deleted.push(removed);
            }
            Target::BoardToggle(_) => self.form.secondary_board = true,
            Target::RemoteToggle => self.form.remote = true,
            Target::SaveButton => self.save()?,
            Target::MfaSubmit => self.journal.signed_in = true,
            Target::TrayClose => self.journal.trays_closed += 1,
            _ => {}
        }
        Ok(())
    }

    fn save(&mut self) -> AppResult<()> {
        let View::DuplicateForm { job_id } = self.view.clone() else {
            return Err(script_failed("save outside the posting form"));
        };
        if !self.form.remote || !self.form.publish_location_committed || self.form.board.is_empty() {
            return Err(script_failed("posting form incomplete"));
        }

        self.next_id += 1;
        let posting = FakePosting::new(
            &self.next_id.to_string(),
            &self.form.board,
            &self.form.name,
            &self.form.location,
            false,
        );
        self.requisitions
            .entry(job_id.clone())
            .or_default()
            .push(posting.clone());
        self.journal.created.push((job_id.clone(), posting));

        self.form = Form::default();
        self.journal.listing_views.push((job_id.clone(), 1));
        self.view = View::Listing { job_id, page: 1 };
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> AppResult<()> {
        self.journal.navigations.push(url.to_string());
        self.open_menu = None;
        self.pending_delete = None;
        self.pending_unpublish = None;

        if url.trim_end_matches('/') == BASE_URL {
            self.view = View::Login;
            return Ok(());
        }

        let path = url
            .strip_prefix(BASE_URL)
            .ok_or_else(|| script_failed(&format!("unexpected host in {}", url)))?;
        let job_id = path
            .strip_prefix("/plans/")
            .and_then(|rest| rest.split('/').next())
            .ok_or_else(|| script_failed(&format!("unexpected path {}", path)))?
            .to_string();

        if let Some((_, source_id)) = url.split_once("&greenhouse_job_application_id=") {
            if !path.contains("/jobapps/new?from=duplicate") {
                return Err(script_failed(&format!("malformed duplicate url {}", url)));
            }
            let source = self
                .requisitions
                .get(&job_id)
                .and_then(|p| p.iter().find(|p| p.id == source_id))
                .cloned()
                .ok_or_else(|| script_failed(&format!("no posting {} to duplicate", source_id)))?;
            self.form = Form {
                name: format!("Copy of {}", source.name),
                location: source.location,
                ..Form::default()
            };
            self.view = View::DuplicateForm { job_id };
        } else if path.ends_with("/jobapp") {
            self.journal.listing_views.push((job_id.clone(), 1));
            self.view = View::Listing { job_id, page: 1 };
        } else {
            return Err(script_failed(&format!("unexpected path {}", path)));
        }
        Ok(())
    }
}

fn script_failed(reason: &str) -> AppError {
    AutomationError::ScriptFailed {
        reason: reason.to_string(),
    }
    .into()
}

fn name_cell(posting: &FakePosting) -> String {
    let status = if posting.live { "Live" } else { "Draft" };
    format!("{}\n{}", posting.name, status)
}

#[async_trait]
impl AutomationSurface for FakePlatform {
    async fn navigate(&self, url: &str) -> AppResult<()> {
        self.lock().navigate(url)
    }

    async fn reload(&self) -> AppResult<()> {
        Ok(())
    }

    async fn count(&self, target: &Target) -> AppResult<usize> {
        Ok(self.lock().count(target))
    }

    async fn read_texts(&self, target: &Target) -> AppResult<Vec<String>> {
        let state = self.lock();
        let rows = state.page_rows();
        let texts = match target {
            Target::RowLocations => rows.iter().map(|p| format!("({})", p.location)).collect(),
            Target::RowNames => rows.iter().map(name_cell).collect(),
            Target::RowBoards => rows.iter().map(|p| p.board.clone()).collect(),
            other => return Err(script_failed(&format!("no text column for {}", other))),
        };
        Ok(texts)
    }

    async fn read_attributes(&self, target: &Target, name: &str) -> AppResult<Vec<Option<String>>> {
        let state = self.lock();
        match (target, name) {
            (Target::RowEditLinks, "href") => {
                let host = if state.relative_edit_links { "" } else { BASE_URL };
                Ok(state
                    .page_rows()
                    .iter()
                    .map(|p| Some(format!("{}/jobapps/{}/edit", host, p.id)))
                    .collect())
            }
            _ => Err(script_failed(&format!("no attribute {} on {}", name, target))),
        }
    }

    async fn read_text(&self, target: &Target) -> AppResult<String> {
        let state = self.lock();
        state.require(target)?;
        match target {
            Target::RowBoard(n) => Ok(state.row(*n).map(|p| p.board.clone()).unwrap_or_default()),
            Target::RowName(n) => Ok(state.row(*n).map(name_cell).unwrap_or_default()),
            other => Err(script_failed(&format!("no text for {}", other))),
        }
    }

    async fn read_attribute(&self, target: &Target, name: &str) -> AppResult<Option<String>> {
        let state = self.lock();
        state.require(target)?;
        match (target, name) {
            (Target::NextPage, "class") => Ok(Some(if state.has_next_page() {
                "next_page".to_string()
            } else {
                "next_page disabled".to_string()
            })),
            (Target::Row(n), "class") => Ok(state.row(*n).map(FakePosting::row_class)),
            _ => Ok(None),
        }
    }

    async fn read_value(&self, target: &Target) -> AppResult<String> {
        let state = self.lock();
        state.require(target)?;
        match target {
            Target::NameInput => Ok(state.form.name.clone()),
            Target::LocationInput => Ok(state.form.location.clone()),
            Target::PublishLocationInput => Ok(state.form.publish_location.clone()),
            _ => Ok(String::new()),
        }
    }

    async fn click(&self, target: &Target) -> AppResult<()> {
        self.lock().click(target)
    }

    async fn click_all(&self, target: &Target, pause: Duration) -> AppResult<usize> {
        let mut clicked = 0;
        loop {
            {
                let mut state = self.lock();
                match target {
                    Target::DraftPublishButtons => {
                        let Some((job_id, range)) = state.page_range() else {
                            break;
                        };
                        let postings = state.requisitions.get_mut(&job_id).expect("listed");
                        let Some(posting) = postings[range]
                            .iter_mut()
                            .find(|p| !p.live && p.is_external())
                        else {
                            break;
                        };
                        posting.live = true;
                        let id = posting.id.clone();
                        state.journal.published.push(id);
                    }
                    Target::TrayClose => {
                        if clicked == state.count(target) {
                            break;
                        }
                        state.journal.trays_closed += 1;
                    }
                    other => {
                        if clicked == state.count(other) {
                            break;
                        }
                        state.click(other)?;
                    }
                }
            }
            clicked += 1;
            tokio::time::sleep(pause).await;
        }
        Ok(clicked)
    }

    async fn try_click(&self, target: &Target) -> AppResult<Availability> {
        let mut state = self.lock();
        if state.count(target) == 0 {
            return Ok(Availability::Unavailable(format!("{} not present", target)));
        }
        state.click(target)?;
        Ok(Availability::Applied)
    }

    async fn try_click_each(&self, target: &Target) -> AppResult<Vec<Availability>> {
        let mut state = self.lock();
        let outcomes = (0..state.count(target))
            .map(|i| match target {
                Target::CookieBanner if i < state.detached_cookie_buttons => {
                    Availability::Unavailable(format!("{} not clickable", target))
                }
                Target::CookieBanner => {
                    state.journal.cookie_buttons_clicked += 1;
                    Availability::Applied
                }
                other => match state.click(other) {
                    Ok(()) => Availability::Applied,
                    Err(e) => Availability::Unavailable(e.to_string()),
                },
            })
            .collect();
        Ok(outcomes)
    }

    async fn type_text(&self, target: &Target, text: &str) -> AppResult<()> {
        let mut state = self.lock();
        state.require(target)?;
        state.journal.typed.push((target.clone(), text.to_string()));
        let form = &mut state.form;
        match target {
            Target::NameInput => form.name.push_str(text),
            Target::PostToInput => form.post_to.push_str(text),
            Target::LocationInput => form.location.push_str(text),
            Target::PublishLocationInput => {
                form.publish_location.push_str(text);
                form.publish_location_committed = false;
            }
            _ => {}
        }
        Ok(())
    }

    async fn clear(&self, target: &Target) -> AppResult<()> {
        let mut state = self.lock();
        state.require(target)?;
        let form = &mut state.form;
        match target {
            Target::NameInput => form.name.clear(),
            Target::PostToInput => form.post_to.clear(),
            Target::LocationInput => form.location.clear(),
            Target::PublishLocationInput => {
                form.publish_location.clear();
                form.publish_location_committed = false;
            }
            _ => {}
        }
        Ok(())
    }

    async fn press_key(&self, target: &Target, key: Key) -> AppResult<()> {
        let mut state = self.lock();
        state.require(target)?;
        let suggestion_open = state.count(&Target::LocationSuggestion(state.form.publish_location.clone())) > 0;
        let form = &mut state.form;
        match (target, key) {
            (Target::PostToInput, Key::Enter) => form.board = std::mem::take(&mut form.post_to),
            (Target::PublishLocationInput, Key::Tab) if suggestion_open => {
                form.publish_location_committed = true;
            }
            _ => {}
        }
        Ok(())
    }

    async fn run_script(&self, _code: &str) -> AppResult<JsonValue> {
        let mut state = self.lock();
        if state.pending_tooltips > 0 {
            state.pending_tooltips -= 1;
            state.journal.tooltips_closed += 1;
            return Ok(JsonValue::Bool(true));
        }
        Ok(JsonValue::Bool(false))
    }
}
