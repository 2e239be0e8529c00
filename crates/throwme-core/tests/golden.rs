//! Golden fixture integration tests for throwme-core.
//!
//! `fixtures/kinds.json` is the source of truth for the taxonomy table.
//! Each entry lists a kind tag, its fixed status code, and its default
//! message; the tests build every kind through the public factories and
//! assert the constructed values match the fixture.

use throwme_core::{throw, ErrorKind, HttpError};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn fixture_path() -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures/kinds.json");
    p
}

fn load_kinds() -> Vec<serde_json::Value> {
    let content = std::fs::read_to_string(fixture_path()).expect("fixture not found");
    serde_json::from_str(&content).expect("invalid fixture JSON")
}

// ─── Taxonomy table ───────────────────────────────────────────────────────────

#[test]
fn golden_defaults_match_fixture() {
    let entries = load_kinds();
    assert_eq!(entries.len(), ErrorKind::ALL.len(), "fixture entry count");

    for entry in &entries {
        let tag = entry["kind"].as_str().expect("missing kind");
        let kind: ErrorKind = tag.parse().expect("unknown kind in fixture");

        let err = throw::of(kind, "");
        assert_eq!(
            u64::from(err.status_code()),
            entry["statusCode"].as_u64().unwrap(),
            "status mismatch for {tag}"
        );
        assert_eq!(
            err.message(),
            entry["defaultMessage"].as_str().unwrap(),
            "default message mismatch for {tag}"
        );
        assert!(err.is_operational(), "{tag} must be operational");
        assert!(err.is(kind), "{tag} must carry its own kind");
    }
}

#[test]
fn golden_explicit_message_keeps_status() {
    for entry in load_kinds() {
        let tag = entry["kind"].as_str().unwrap();
        let kind: ErrorKind = tag.parse().unwrap();

        let err = throw::of(kind, "Service unavailable until Tuesday");
        assert_eq!(err.message(), "Service unavailable until Tuesday");
        assert_eq!(
            u64::from(err.status_code()),
            entry["statusCode"].as_u64().unwrap(),
            "explicit message must not change the status of {tag}"
        );
    }
}

// ─── Documented scenarios ─────────────────────────────────────────────────────

#[test]
fn scenario_not_found_default() {
    let err = throw::not_found("");
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.message(), "Resource not found");
}

#[test]
fn scenario_validation_with_message() {
    let err = throw::validation("Email is invalid");
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.message(), "Email is invalid");
}

#[test]
fn scenario_service_unavailable_default() {
    let err = throw::service_unavailable("");
    assert_eq!(err.status_code(), 503);
    assert_eq!(err.message(), "Service unavailable");
}

#[test]
fn scenario_custom_teapot() {
    let err = throw::custom("Custom Alert", 418);
    assert_eq!(err.status_code(), 418);
    assert_eq!(err.message(), "Custom Alert");
    assert_eq!(err.kind(), None);
}

// ─── Host error mechanism ─────────────────────────────────────────────────────

#[test]
fn caught_as_dyn_error_with_origin_here() {
    fn trigger() -> Result<(), Box<dyn std::error::Error>> {
        Err(Box::new(throw::unauthorized("Expired Token")))
    }

    let boxed = trigger().unwrap_err();
    let err = boxed
        .downcast_ref::<HttpError>()
        .expect("should downcast to HttpError");
    assert!(err.is(ErrorKind::Unauthorized));
    assert_eq!(err.status_code(), 401);
    assert!(
        err.origin().file().ends_with("golden.rs"),
        "origin should reference the triggering file, was {}",
        err.origin()
    );
}

#[test]
fn display_combines_status_and_message() {
    let err = throw::forbidden("");
    assert_eq!(err.to_string(), "403: Forbidden access");
}
