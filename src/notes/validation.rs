//! Payload validation for note create and update requests.
//!
//! Rules:
//! - `title` must be non-empty after trimming and at most [`MAX_TITLE_CHARS`] characters
//! - `content` must be non-empty after trimming
//! - On update, each field is optional but must follow the same rule when present
//!
//! Title rules are checked before content rules, so the first violation reported
//! is always about the title when both fields are invalid.

use crate::model::{
    CreateNoteRequest, MAX_TITLE_CHARS, NewNote, NoteChanges, UpdateNoteRequest,
};

/// Validates a create payload and returns the normalized note data.
///
/// The title is trimmed. Content is kept verbatim, since leading and trailing
/// whitespace can be meaningful in a note body.
///
/// # Examples
/// ```
/// use notes::model::CreateNoteRequest;
/// use notes::validation::{validate_create, ValidationError};
///
/// let ok = CreateNoteRequest { title: Some(" Shopping ".into()), content: Some("milk".into()) };
/// assert_eq!(validate_create(&ok).unwrap().title, "Shopping");
///
/// let missing = CreateNoteRequest { title: None, content: Some("milk".into()) };
/// assert_eq!(validate_create(&missing), Err(ValidationError::TitleRequired));
/// ```
pub fn validate_create(payload: &CreateNoteRequest) -> Result<NewNote, ValidationError> {
    let title = check_title(payload.title.as_deref())?;
    let content = check_content(payload.content.as_deref())?;
    Ok(NewNote { title, content })
}

/// Validates an update payload. An empty payload is valid and yields empty changes.
pub fn validate_update(payload: &UpdateNoteRequest) -> Result<NoteChanges, ValidationError> {
    let title = match payload.title.as_deref() {
        Some(title) => Some(check_title(Some(title))?),
        None => None,
    };
    let content = match payload.content.as_deref() {
        Some(content) => Some(check_content(Some(content))?),
        None => None,
    };
    Ok(NoteChanges { title, content })
}

fn check_title(title: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = title.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if trimmed.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(trimmed.to_string())
}

fn check_content(content: Option<&str>) -> Result<String, ValidationError> {
    match content {
        Some(content) if !content.trim().is_empty() => Ok(content.to_string()),
        _ => Err(ValidationError::ContentRequired),
    }
}

/// Error type for rejected note payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is missing, empty, or whitespace only
    TitleRequired,
    /// Title exceeds the maximum length
    TitleTooLong,
    /// Content is missing, empty, or whitespace only
    ContentRequired,
    /// Body is not an object of optional string fields
    MalformedPayload(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::TitleRequired => write!(f, "Title is required"),
            ValidationError::TitleTooLong => {
                write!(f, "Title must be {} characters or less", MAX_TITLE_CHARS)
            }
            ValidationError::ContentRequired => write!(f, "Content is required"),
            ValidationError::MalformedPayload(detail) => {
                write!(f, "Invalid request body: {}", detail)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
