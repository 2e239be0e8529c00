//! Factory functions — one per named kind, plus [`custom`] and the
//! kind-dispatching [`of`].
//!
//! None of these raise: they return the constructed [`HttpError`] and the
//! caller decides how to propagate it, e.g.
//! `return Err(throw::not_found("no such user"))`.
//!
//! For every named kind an empty message selects the kind's fixed default
//! ("Resource not found", "Validation failed", …); a non-empty message is
//! stored verbatim. [`custom`] never substitutes a default.

use crate::types::{ErrorKind, HttpError};

/// 400 — Bad request.
#[track_caller]
pub fn bad_request(message: impl Into<String>) -> HttpError {
    HttpError::named(ErrorKind::BadRequest, message.into())
}

/// 400 — Validation failed.
#[track_caller]
pub fn validation(message: impl Into<String>) -> HttpError {
    HttpError::named(ErrorKind::Validation, message.into())
}

/// 401 — Unauthorized access.
#[track_caller]
pub fn unauthorized(message: impl Into<String>) -> HttpError {
    HttpError::named(ErrorKind::Unauthorized, message.into())
}

/// 403 — Forbidden access.
#[track_caller]
pub fn forbidden(message: impl Into<String>) -> HttpError {
    HttpError::named(ErrorKind::Forbidden, message.into())
}

/// 404 — Resource not found.
#[track_caller]
pub fn not_found(message: impl Into<String>) -> HttpError {
    HttpError::named(ErrorKind::NotFound, message.into())
}

/// 409 — Conflict detected.
#[track_caller]
pub fn conflict(message: impl Into<String>) -> HttpError {
    HttpError::named(ErrorKind::Conflict, message.into())
}

/// 500 — Internal server error.
#[track_caller]
pub fn internal(message: impl Into<String>) -> HttpError {
    HttpError::named(ErrorKind::Internal, message.into())
}

/// 501 — Not implemented.
#[track_caller]
pub fn not_implemented(message: impl Into<String>) -> HttpError {
    HttpError::named(ErrorKind::NotImplemented, message.into())
}

/// 503 — Service unavailable.
#[track_caller]
pub fn service_unavailable(message: impl Into<String>) -> HttpError {
    HttpError::named(ErrorKind::ServiceUnavailable, message.into())
}

/// Construct a named-kind error by dispatching on `kind`. Same defaulting
/// rules as the per-kind functions.
#[track_caller]
pub fn of(kind: ErrorKind, message: impl Into<String>) -> HttpError {
    HttpError::named(kind, message.into())
}

/// Construct an error with any status code and a required message.
/// The result has no named kind ([`HttpError::kind`] returns `None`) and
/// the message is kept as given, empty or not.
#[track_caller]
pub fn custom(message: impl Into<String>, status_code: u16) -> HttpError {
    HttpError::custom(message.into(), status_code)
}
