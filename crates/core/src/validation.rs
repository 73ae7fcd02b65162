//! Validation of create/update request bodies.
//!
//! Bodies arrive as untyped JSON. Each entry point inspects every field,
//! collects one [`FieldError`] per failed rule (never stopping at the first),
//! and only when the list is empty hands back the typed payload.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::resolution::Resolution;
use crate::timestamp;
use crate::video::{CreateVideo, UpdateVideo};

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

pub const FIELD_TITLE: &str = "title";
pub const FIELD_AUTHOR: &str = "author";
pub const FIELD_CAN_BE_DOWNLOADED: &str = "canBeDownloaded";
pub const FIELD_MIN_AGE_RESTRICTION: &str = "minAgeRestriction";
pub const FIELD_PUBLICATION_DATE: &str = "publicationDate";
pub const FIELD_AVAILABLE_RESOLUTIONS: &str = "availableResolutions";

pub const TITLE_MAX_LEN: usize = 40;
pub const AUTHOR_MAX_LEN: usize = 20;
pub const MIN_AGE_RESTRICTION_RANGE: RangeInclusive<i64> = 1..=18;

/// Publication dates must look like `20YY-MM-DDTHH:MM:SS.mmmZ`.
const PUBLICATION_DATE_PATTERN: &str = r"^20\d{2}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$";

static PUBLICATION_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PUBLICATION_DATE_PATTERN).expect("valid regex"));

/* --------------------------------------------------------------------------
Error records
-------------------------------------------------------------------------- */

/// One failed rule: which field, and the message shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
    pub field: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            message: message.to_string(),
            field: field.to_string(),
        }
    }
}

/// Message wording differs between the two entry points.
struct Messages {
    title: &'static str,
    author: &'static str,
    available_resolutions: &'static str,
}

const CREATE_MESSAGES: Messages = Messages {
    title: "Invalid title",
    author: "Invalid author",
    available_resolutions: "Invalid availableResolutions",
};

const UPDATE_MESSAGES: Messages = Messages {
    title: "Incorrect title",
    author: "Incorrect author",
    available_resolutions: "Incorrect availableResolutions",
};

const MSG_CAN_BE_DOWNLOADED: &str = "Incorrect canBeDownloaded";
const MSG_MIN_AGE_RESTRICTION: &str = "Incorrect minAgeRestriction";
const MSG_PUBLICATION_DATE: &str = "Incorrect publicationDate";

/// Which string the length limit is measured on.
#[derive(Clone, Copy)]
enum Measure {
    Trimmed,
    Raw,
}

/* --------------------------------------------------------------------------
Entry points
-------------------------------------------------------------------------- */

/// True for a JSON object with no keys, which update treats as a no-op.
pub fn is_empty_body(body: &Value) -> bool {
    body.as_object().is_some_and(Map::is_empty)
}

/// Validate a create body.
///
/// A body that is not an object is read as one with no fields.
pub fn validate_create(body: &Value) -> Result<CreateVideo, Vec<FieldError>> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);
    let mut errors = Vec::new();

    let title = required_text(fields.get(FIELD_TITLE), TITLE_MAX_LEN, Measure::Trimmed);
    if title.is_none() {
        errors.push(FieldError::new(FIELD_TITLE, CREATE_MESSAGES.title));
    }

    let author = required_text(fields.get(FIELD_AUTHOR), AUTHOR_MAX_LEN, Measure::Trimmed);
    if author.is_none() {
        errors.push(FieldError::new(FIELD_AUTHOR, CREATE_MESSAGES.author));
    }

    let available_resolutions = resolutions(
        fields.get(FIELD_AVAILABLE_RESOLUTIONS),
        CREATE_MESSAGES.available_resolutions,
        &mut errors,
    );

    match (title, author) {
        (Some(title), Some(author)) if errors.is_empty() => Ok(CreateVideo {
            title,
            author,
            available_resolutions,
        }),
        _ => Err(errors),
    }
}

/// Validate an update body. Callers check [`is_empty_body`] first.
///
/// Every field is required except `minAgeRestriction` (absent or `null`
/// clears it) and `availableResolutions` (absent means none).
pub fn validate_update(body: &Value) -> Result<UpdateVideo, Vec<FieldError>> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);
    let mut errors = Vec::new();

    let title = required_text(fields.get(FIELD_TITLE), TITLE_MAX_LEN, Measure::Raw);
    if title.is_none() {
        errors.push(FieldError::new(FIELD_TITLE, UPDATE_MESSAGES.title));
    }

    let author = required_text(fields.get(FIELD_AUTHOR), AUTHOR_MAX_LEN, Measure::Raw);
    if author.is_none() {
        errors.push(FieldError::new(FIELD_AUTHOR, UPDATE_MESSAGES.author));
    }

    // Only a literal `true` passes; an explicit `false` is rejected too.
    let can_be_downloaded = matches!(
        fields.get(FIELD_CAN_BE_DOWNLOADED),
        Some(Value::Bool(true))
    );
    if !can_be_downloaded {
        errors.push(FieldError::new(
            FIELD_CAN_BE_DOWNLOADED,
            MSG_CAN_BE_DOWNLOADED,
        ));
    }

    let min_age_restriction = match fields.get(FIELD_MIN_AGE_RESTRICTION) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let age = whole_number(value)
                .filter(|age| MIN_AGE_RESTRICTION_RANGE.contains(age))
                .and_then(|age| u8::try_from(age).ok());
            if age.is_none() {
                errors.push(FieldError::new(
                    FIELD_MIN_AGE_RESTRICTION,
                    MSG_MIN_AGE_RESTRICTION,
                ));
            }
            age
        }
    };

    let publication_date = fields
        .get(FIELD_PUBLICATION_DATE)
        .and_then(Value::as_str)
        .filter(|raw| PUBLICATION_DATE_RE.is_match(raw))
        .and_then(timestamp::parse);
    if publication_date.is_none() {
        errors.push(FieldError::new(FIELD_PUBLICATION_DATE, MSG_PUBLICATION_DATE));
    }

    let available_resolutions = resolutions(
        fields.get(FIELD_AVAILABLE_RESOLUTIONS),
        UPDATE_MESSAGES.available_resolutions,
        &mut errors,
    );

    match (title, author, publication_date) {
        (Some(title), Some(author), Some(publication_date)) if errors.is_empty() => {
            Ok(UpdateVideo {
                title,
                author,
                can_be_downloaded,
                min_age_restriction,
                publication_date,
                available_resolutions,
            })
        }
        _ => Err(errors),
    }
}

/* --------------------------------------------------------------------------
Field rules
-------------------------------------------------------------------------- */

/// A present string that is not blank and fits `max_len` characters.
/// The untrimmed text is returned.
fn required_text(value: Option<&Value>, max_len: usize, measure: Measure) -> Option<String> {
    let text = value?.as_str()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let len = match measure {
        Measure::Trimmed => trimmed.chars().count(),
        Measure::Raw => text.chars().count(),
    };
    (len <= max_len).then(|| text.to_string())
}

/// A JSON number with no fractional part. `18`, `18.0` and `1.8e1` all
/// read as `18`.
fn whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
        .map(|f| f as i64)
}

/// Parse a resolution list, pushing one error per unrecognised element.
/// Anything that is not an array counts as an empty list.
fn resolutions(
    value: Option<&Value>,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Vec<Resolution> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut parsed = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str().and_then(|token| token.parse::<Resolution>().ok()) {
            Some(resolution) => parsed.push(resolution),
            None => errors.push(FieldError::new(FIELD_AVAILABLE_RESOLUTIONS, message)),
        }
    }
    parsed
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
