// Form controllers: explicit state objects driven by events, re-validated
// after every transition.

use crate::config::FormConfig;
use crate::error::{Field, FieldError, FieldErrors, SubmitError};
use crate::option::CrawlOptionId;
use crate::submit::{SubmitResult, log_payload};
use crate::validate::{Phase, option_errors, validate_base_url, validate_options};
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// The base URL form. Independent of [`OptionsForm`].
#[derive(Debug, Clone, Default)]
pub struct BaseUrlForm {
    url: String,
    error: Option<FieldError>,
}

impl BaseUrlForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        validate_base_url(&self.url).is_ok()
    }

    /// Replace the value and re-validate immediately
    pub fn set_url(&mut self, value: impl Into<String>) {
        self.url = value.into();
        self.error = validate_base_url(&self.url).err();
    }

    pub fn validate(&self) -> Result<Url, FieldErrors> {
        validate_base_url(&self.url).map_err(|e| {
            let mut errors = FieldErrors::new();
            errors.insert(Field::Url, e);
            errors
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which card is active. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    SelectedAll,
    SelectedStartWith,
    SelectedOne,
}

impl Selection {
    pub fn id(&self) -> Option<CrawlOptionId> {
        match self {
            Selection::Unselected => None,
            Selection::SelectedAll => Some(CrawlOptionId::All),
            Selection::SelectedStartWith => Some(CrawlOptionId::StartWith),
            Selection::SelectedOne => Some(CrawlOptionId::One),
        }
    }
}

impl From<Option<CrawlOptionId>> for Selection {
    fn from(id: Option<CrawlOptionId>) -> Self {
        match id {
            None => Selection::Unselected,
            Some(CrawlOptionId::All) => Selection::SelectedAll,
            Some(CrawlOptionId::StartWith) => Selection::SelectedStartWith,
            Some(CrawlOptionId::One) => Selection::SelectedOne,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting {
        started: Instant,
    },
}

/// User interactions with the option form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Click on a card
    Toggle(CrawlOptionId),
    /// Make `id` the selection, whatever was selected before
    Select(CrawlOptionId),
    UrlPathChanged(String),
    PageUrlChanged(String),
    Reset,
}

/// The option selection form.
#[derive(Debug, Clone, Default)]
pub struct OptionsForm {
    selection: Selection,
    url_path: String,
    page_url: String,
    errors: FieldErrors,
    status: SubmitStatus,
    config: FormConfig,
}

impl OptionsForm {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<CrawlOptionId> {
        self.selection.id()
    }

    pub fn is_selected(&self, id: CrawlOptionId) -> bool {
        self.selected() == Some(id)
    }

    pub fn url_path(&self) -> &str {
        &self.url_path
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting { .. })
    }

    /// Submit control is disabled while nothing is selected or in flight
    pub fn can_submit(&self) -> bool {
        self.selected().is_some() && !self.is_submitting()
    }

    /// Clear control follows the same rule as submit
    pub fn can_clear(&self) -> bool {
        self.can_submit()
    }

    /// Reducer entry point
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::Toggle(id) => {
                let next = if self.is_selected(id) { None } else { Some(id) };
                self.transition(next);
            }
            FormEvent::Select(id) => self.transition(Some(id)),
            FormEvent::UrlPathChanged(value) => {
                if !self.is_selected(CrawlOptionId::StartWith) {
                    debug!("Ignoring URL path edit without Start With selected");
                    return;
                }
                self.url_path = value;
                self.revalidate();
            }
            FormEvent::PageUrlChanged(value) => {
                if !self.is_selected(CrawlOptionId::One) {
                    debug!("Ignoring page URL edit without One Page selected");
                    return;
                }
                self.page_url = value;
                self.revalidate();
            }
            FormEvent::Reset => self.reset(),
        }
    }

    pub fn toggle(&mut self, id: CrawlOptionId) {
        self.apply(FormEvent::Toggle(id));
    }

    pub fn select(&mut self, id: CrawlOptionId) {
        self.apply(FormEvent::Select(id));
    }

    pub fn set_url_path(&mut self, value: impl Into<String>) {
        self.apply(FormEvent::UrlPathChanged(value.into()));
    }

    pub fn set_page_url(&mut self, value: impl Into<String>) {
        self.apply(FormEvent::PageUrlChanged(value.into()));
    }

    /// Back to the mount-time defaults. Refused while a submission is in
    /// flight, the pending request must finish first.
    pub fn reset(&mut self) {
        if self.is_submitting() {
            warn!("Reset ignored, a submission is already in flight");
            return;
        }
        debug!("Resetting option form");
        *self = Self::new(self.config);
    }

    fn transition(&mut self, next: Option<CrawlOptionId>) {
        let previous = self.selected();
        if previous == next {
            return;
        }

        // Auxiliary values never outlive the option they belong to
        if previous == Some(CrawlOptionId::StartWith) {
            self.url_path.clear();
            self.errors.remove(Field::UrlPath);
        }
        if previous == Some(CrawlOptionId::One) {
            self.page_url.clear();
            self.errors.remove(Field::PageUrl);
        }

        self.selection = Selection::from(next);
        debug!(?previous, ?next, "Selection changed");
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = option_errors(self.selected(), &self.url_path, &self.page_url, Phase::Edit);
    }

    /// Run the submit-time checks. On success the payload goes to the
    /// diagnostic log and the form stays `Submitting` until
    /// [`poll_submission`](Self::poll_submission) or
    /// [`finish_submission`](Self::finish_submission).
    pub fn begin_submit(&mut self, now: Instant) -> SubmitResult {
        if self.is_submitting() {
            warn!("Submit ignored, a submission is already in flight");
            return Err(SubmitError::InFlight);
        }

        match validate_options(self.selected(), &self.url_path, &self.page_url) {
            Ok(request) => {
                log_payload(&request);
                self.errors.clear();
                self.status = SubmitStatus::Submitting { started: now };
                Ok(request)
            }
            Err(errors) => {
                debug!(%errors, "Submit blocked by field errors");
                self.errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Return to idle once the configured delay has elapsed since the
    /// submission started. Returns true when the submission just finished.
    pub fn poll_submission(&mut self, now: Instant) -> bool {
        match self.status {
            SubmitStatus::Submitting { started }
                if now.saturating_duration_since(started) >= self.config.submit_delay =>
            {
                self.finish_submission();
                true
            }
            _ => false,
        }
    }

    pub fn finish_submission(&mut self) {
        if self.is_submitting() {
            debug!("Submission finished");
        }
        self.status = SubmitStatus::Idle;
    }
}
