// Pure validation for both forms. No state, no side effects.

use crate::error::{Field, FieldError, FieldErrors};
use crate::input::RawOptionInput;
use crate::option::CrawlOptionId;
use crate::request::{CrawlRequest, CrawlScope};
use url::Url;

/// When validation runs. Required-field rules only apply on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reactive validation after every change
    Edit,
    Submit,
}

pub const URL_PATH_REQUIRED: &str = "URL path is required";
pub const PAGE_URL_REQUIRED: &str = "Page URL is required";

/// Parse `value` as an absolute URL.
pub fn validate_absolute_url(value: &str) -> Result<Url, FieldError> {
    Url::parse(value).map_err(|_| FieldError::url_format())
}

/// The base URL is required, so an empty value is a format error as well.
pub fn validate_base_url(value: &str) -> Result<Url, FieldError> {
    if value.is_empty() {
        return Err(FieldError::url_format());
    }
    validate_absolute_url(value)
}

pub fn validate_url_path(value: &str) -> Result<(), FieldError> {
    if value.starts_with('/') {
        Ok(())
    } else {
        Err(FieldError::path_format())
    }
}

/// Exactly one known option id must be present.
pub fn validate_selection<S: AsRef<str>>(items: &[S]) -> Result<CrawlOptionId, FieldError> {
    match items {
        [only] => only
            .as_ref()
            .parse::<CrawlOptionId>()
            .map_err(|_| FieldError::selection()),
        _ => Err(FieldError::selection()),
    }
}

/// Field errors of the option form for the given selection.
///
/// Format rules apply to any non-empty auxiliary field. In [`Phase::Submit`]
/// the field belonging to the selected option is also required.
pub fn option_errors(
    selected: Option<CrawlOptionId>,
    url_path: &str,
    page_url: &str,
    phase: Phase,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if selected.is_none() {
        errors.insert(Field::Items, FieldError::selection());
    }

    if !url_path.is_empty() {
        if let Err(e) = validate_url_path(url_path) {
            errors.insert(Field::UrlPath, e);
        }
    }

    if !page_url.is_empty() {
        if let Err(e) = validate_absolute_url(page_url) {
            errors.insert(Field::PageUrl, e);
        }
    }

    if phase == Phase::Submit {
        match selected {
            Some(CrawlOptionId::StartWith) if url_path.is_empty() => {
                errors.insert(Field::UrlPath, FieldError::required(URL_PATH_REQUIRED));
            }
            Some(CrawlOptionId::One) if page_url.is_empty() => {
                errors.insert(Field::PageUrl, FieldError::required(PAGE_URL_REQUIRED));
            }
            _ => {}
        }
    }

    errors
}

/// Validate the option form for submission and build the payload.
///
/// The payload carries only the selected option's auxiliary field.
pub fn validate_options(
    selected: Option<CrawlOptionId>,
    url_path: &str,
    page_url: &str,
) -> Result<CrawlRequest, FieldErrors> {
    let errors = option_errors(selected, url_path, page_url, Phase::Submit);
    if !errors.is_empty() {
        return Err(errors);
    }

    let scope = match selected {
        Some(CrawlOptionId::All) => CrawlScope::All,
        Some(CrawlOptionId::StartWith) => CrawlScope::StartWith {
            url_path: url_path.to_string(),
        },
        Some(CrawlOptionId::One) => CrawlScope::One {
            page_url: validate_absolute_url(page_url).map_err(|e| single(Field::PageUrl, e))?,
        },
        None => return Err(single(Field::Items, FieldError::selection())),
    };

    Ok(CrawlRequest::new(scope))
}

fn single(field: Field, error: FieldError) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field, error);
    errors
}

/// Validate an unchecked option form, e.g. one loaded from a file.
pub fn validate_raw(input: &RawOptionInput) -> Result<CrawlRequest, FieldErrors> {
    let url_path = input.url_path.as_deref().unwrap_or_default();
    let page_url = input.page_url.as_deref().unwrap_or_default();

    match validate_selection(&input.items) {
        Ok(selected) => validate_options(Some(selected), url_path, page_url),
        Err(selection_error) => {
            let mut errors = option_errors(None, url_path, page_url, Phase::Submit);
            errors.insert(Field::Items, selection_error);
            Err(errors)
        }
    }
}
