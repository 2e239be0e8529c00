//! Core types for the ThrowMe HTTP error taxonomy.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::panic::Location;
use std::str::FromStr;
use thiserror::Error;

// ─── ErrorKind ────────────────────────────────────────────────────────────────

/// The nine named failure kinds, each a fixed (status code, default message)
/// pair. Custom errors carry no kind — see [`HttpError::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// 400 — malformed or otherwise unacceptable request.
    BadRequest,
    /// 400 — input failed semantic validation.
    Validation,
    /// 401 — missing or invalid credentials.
    Unauthorized,
    /// 403 — authenticated but not allowed.
    Forbidden,
    /// 404 — the requested resource does not exist.
    NotFound,
    /// 409 — the request conflicts with current state.
    Conflict,
    /// 500 — unexpected server-side failure surfaced as operational.
    Internal,
    /// 501 — the requested behavior is not implemented.
    NotImplemented,
    /// 503 — the service is temporarily unable to respond.
    ServiceUnavailable,
}

impl ErrorKind {
    /// All named kinds, in status-code order.
    pub const ALL: [ErrorKind; 9] = [
        Self::BadRequest,
        Self::Validation,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::Conflict,
        Self::Internal,
        Self::NotImplemented,
        Self::ServiceUnavailable,
    ];

    /// The fixed HTTP status code for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            Self::BadRequest | Self::Validation => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Internal => 500,
            Self::NotImplemented => 501,
            Self::ServiceUnavailable => 503,
        }
    }

    /// The fixed message used when the caller passes an empty one.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::Validation => "Validation failed",
            Self::Unauthorized => "Unauthorized access",
            Self::Forbidden => "Forbidden access",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Conflict detected",
            Self::Internal => "Internal server error",
            Self::NotImplemented => "Not implemented",
            Self::ServiceUnavailable => "Service unavailable",
        }
    }

    /// Stable snake_case tag, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Validation => "validation",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
            Self::NotImplemented => "not_implemented",
            Self::ServiceUnavailable => "service_unavailable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`ErrorKind::from_str`] for an unrecognized tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error kind: {0:?}")]
pub struct UnknownKind(pub String);

impl FromStr for ErrorKind {
    type Err = UnknownKind;

    /// Parses a kind tag. `-` and `_` separators are interchangeable,
    /// so `not-found` and `not_found` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "bad_request" => Ok(Self::BadRequest),
            "validation" => Ok(Self::Validation),
            "unauthorized" => Ok(Self::Unauthorized),
            "forbidden" => Ok(Self::Forbidden),
            "not_found" => Ok(Self::NotFound),
            "conflict" => Ok(Self::Conflict),
            "internal" => Ok(Self::Internal),
            "not_implemented" => Ok(Self::NotImplemented),
            "service_unavailable" => Ok(Self::ServiceUnavailable),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

// ─── HttpError ────────────────────────────────────────────────────────────────

/// An operational HTTP-facing error: message, status code, and the source
/// location that constructed it.
///
/// Fields are private and set once at construction; read them through the
/// accessors. `kind` discriminates the named variants — generic handlers that
/// only need status/message never have to look at it, while call sites that
/// care can match on [`HttpError::kind`] the way they would `instanceof` a
/// subtype elsewhere.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{status_code}: {message}")]
pub struct HttpError {
    kind: Option<ErrorKind>,
    message: String,
    status_code: u16,
    is_operational: bool,
    #[serde(serialize_with = "serialize_origin")]
    origin: &'static Location<'static>,
}

fn serialize_origin<S: Serializer>(
    loc: &&'static Location<'static>,
    ser: S,
) -> Result<S::Ok, S::Error> {
    ser.collect_str(&format_args!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
}

impl HttpError {
    /// Construct a named-kind error. An empty `message` falls back to the
    /// kind's default; the status code is always the kind's fixed value.
    #[track_caller]
    pub(crate) fn named(kind: ErrorKind, message: String) -> Self {
        let message = if message.is_empty() {
            kind.default_message().to_string()
        } else {
            message
        };
        Self::build(Some(kind), message, kind.status_code())
    }

    /// Construct a custom error with a caller-supplied status code.
    /// No default substitution: the message is stored as given.
    #[track_caller]
    pub(crate) fn custom(message: String, status_code: u16) -> Self {
        Self::build(None, message, status_code)
    }

    #[track_caller]
    fn build(kind: Option<ErrorKind>, message: String, status_code: u16) -> Self {
        let origin = Location::caller();
        tracing::trace!(?kind, status_code, origin = %origin, "constructed operational error");
        Self {
            kind,
            message,
            status_code,
            is_operational: true,
            origin,
        }
    }

    /// The named kind, or `None` for errors built with [`crate::throw::custom`].
    pub fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    /// Returns `true` if this error is of the given named kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == Some(kind)
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status code attached at construction.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Always `true` for taxonomy-constructed errors — downstream handlers
    /// read this to distinguish expected failures from defects.
    pub fn is_operational(&self) -> bool {
        self.is_operational
    }

    /// Source location of the factory call that built this error.
    pub fn origin(&self) -> &'static Location<'static> {
        self.origin
    }

    /// Returns `true` for 4xx status codes.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Returns `true` for 5xx status codes.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
