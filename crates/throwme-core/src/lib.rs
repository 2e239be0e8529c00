//! throwme-core — foundation of the ThrowMe HTTP error taxonomy.
//!
//! This crate defines:
//! - [`ErrorKind`] — the nine named HTTP failure kinds
//! - [`HttpError`] — the error value: message, status code, operational flag,
//!   construction origin
//! - [`throw`] — the factory functions callers use
//!
//! # Quick Start
//!
//! ```rust
//! use throwme_core::{throw, ErrorKind};
//!
//! fn find_user(id: u32) -> Result<String, throwme_core::HttpError> {
//!     if id == 0 {
//!         return Err(throw::not_found("no user with id 0"));
//!     }
//!     Ok(format!("user-{id}"))
//! }
//!
//! let err = find_user(0).unwrap_err();
//! assert_eq!(err.status_code(), 404);
//! assert!(err.is(ErrorKind::NotFound));
//! ```

pub mod throw;
pub mod types;

pub use types::{ErrorKind, HttpError, UnknownKind};
