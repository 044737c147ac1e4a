//! # API Facade
//!
//! [`NotesApi`] is the single entry point for front ends. It turns raw JSON
//! bodies into validated inputs, calls the [`NotesService`], and answers with an
//! [`ApiResponse`]: a status plus an optional JSON body, shaped like the REST
//! contract of the notes backend.
//!
//! | Method | Route | Success | Failure |
//! |--------|-------|---------|---------|
//! | [`create_note`](NotesApi::create_note) | `POST /notes` | 201 + note | 400 |
//! | [`list_notes`](NotesApi::list_notes) | `GET /notes` | 200 + notes | 500 |
//! | [`get_note`](NotesApi::get_note) | `GET /notes/:id` | 200 + note | 404 |
//! | [`update_note`](NotesApi::update_note) | `PUT /notes/:id` | 200 + note | 400, 404 |
//! | [`delete_note`](NotesApi::delete_note) | `DELETE /notes/:id` | 204 | 404 |
//! | [`health`](NotesApi::health) | `GET /health` | 200 | |
//!
//! Errors are mapped by kind: [`NotesError::Validation`] becomes 400 with the
//! validation message, anything else becomes a logged 500. Binding these
//! methods to an actual HTTP server is left to the embedding application.

use crate::error::{NotesError, Result};
use crate::model::{CreateNoteRequest, UpdateNoteRequest};
use crate::service::NotesService;
use crate::store::memory::InMemoryStore;
use crate::store::NoteStore;
use crate::validation::{validate_create, validate_update, ValidationError};
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

pub const NOT_FOUND_MESSAGE: &str = "Note not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Status code plus optional JSON body, as an HTTP layer would send them.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Self> {
        Ok(Self {
            status,
            body: Some(serde_json::to_value(body)?),
        })
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(json!({ "error": message.into() })),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: None,
        }
    }

    pub fn not_found() -> Self {
        Self::error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    /// The `error` message of a failure body, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.body.as_ref()?.get("error")?.as_str()
    }
}

/// The main API facade for note operations.
///
/// Cheap to clone: clones share the same service.
pub struct NotesApi<S: NoteStore = InMemoryStore> {
    service: Arc<NotesService<S>>,
}

impl<S: NoteStore> Clone for NotesApi<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: NoteStore> NotesApi<S> {
    pub fn new(service: Arc<NotesService<S>>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &NotesService<S> {
        &self.service
    }

    pub fn create_note(&self, body: Value) -> ApiResponse {
        respond("create", || {
            let payload: CreateNoteRequest = parse_body(body)?;
            let data = validate_create(&payload)?;
            let note = self.service.create(data)?;
            ApiResponse::json(StatusCode::CREATED, &note)
        })
    }

    pub fn list_notes(&self) -> ApiResponse {
        respond("list", || {
            let notes = self.service.get_all()?;
            ApiResponse::json(StatusCode::OK, &notes)
        })
    }

    pub fn get_note(&self, id: &str) -> ApiResponse {
        respond("get", || match self.service.get_by_id(id)? {
            Some(note) => ApiResponse::json(StatusCode::OK, &note),
            None => Ok(ApiResponse::not_found()),
        })
    }

    pub fn update_note(&self, id: &str, body: Value) -> ApiResponse {
        respond("update", || {
            let payload: UpdateNoteRequest = parse_body(body)?;
            let changes = validate_update(&payload)?;
            match self.service.update(id, changes)? {
                Some(note) => ApiResponse::json(StatusCode::OK, &note),
                None => Ok(ApiResponse::not_found()),
            }
        })
    }

    pub fn delete_note(&self, id: &str) -> ApiResponse {
        respond("delete", || {
            if self.service.delete(id)? {
                Ok(ApiResponse::no_content())
            } else {
                Ok(ApiResponse::not_found())
            }
        })
    }

    pub fn health(&self) -> ApiResponse {
        let body = json!({
            "status": "OK",
            "timestamp": self.service.now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION"),
            "commit": env!("GIT_HASH"),
        });
        ApiResponse {
            status: StatusCode::OK,
            body: Some(body),
        }
    }
}

fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T> {
    serde_json::from_value(body)
        .map_err(|e| ValidationError::MalformedPayload(e.to_string()).into())
}

fn respond<F>(operation: &str, handler: F) -> ApiResponse
where
    F: FnOnce() -> Result<ApiResponse>,
{
    match handler() {
        Ok(response) => response,
        Err(NotesError::Validation(e)) => {
            ApiResponse::error(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            error!(operation, error = %e, "request failed");
            ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }
}
