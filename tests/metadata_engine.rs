//! End-to-end tests for the metadata engine: generation, parsing,
//! validation, and content verification against the bundled registry.

use serde_json::json;
use wonzimer_sdk::{ContentDigest, MetadataEngine, MetadataError, ValidationError};

fn engine() -> MetadataEngine {
    MetadataEngine::bundled().unwrap()
}

#[test]
fn generates_metadata() {
    let metadata = engine()
        .generate(
            "wonzimer-20210101",
            &json!({
                "name": "wonzimer whitepaper",
                "description": "internet renaissance",
                "version": "wonzimer-20210101",
                "mimeType": "application/json",
            }),
        )
        .unwrap();

    assert_eq!(
        metadata,
        r#"{"description":"internet renaissance","mimeType":"application/json","name":"wonzimer whitepaper","version":"wonzimer-20210101"}"#
    );
}

#[test]
fn generate_is_deterministic_across_key_order() {
    let e = engine();
    let forward = e
        .generate(
            "wonzimer-20210101",
            &json!({
                "name": "blah blah",
                "description": "blah blah blah",
                "version": "wonzimer-20210101",
                "mimeType": "text/plain",
            }),
        )
        .unwrap();
    let shuffled = e
        .generate(
            "wonzimer-20210101",
            &json!({
                "mimeType": "text/plain",
                "version": "wonzimer-20210101",
                "description": "blah blah blah",
                "name": "blah blah",
            }),
        )
        .unwrap();

    assert_eq!(forward, shuffled);
}

#[test]
fn generate_raises_if_version_is_unsupported() {
    let e = engine();

    let err = e.generate("coinbase-20210101", &json!({})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are no versions with the coinbase project name"
    );

    let err = e.generate("wonzimer-20210102", &json!({})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are no versions in the wonzimer namespace with the 20210102 calendar version"
    );
}

#[test]
fn generate_details_the_violated_constraint() {
    let e = engine();

    let err = e
        .generate(
            "wonzimer-20210101",
            &json!({
                "name": "a",
                "description": "b",
                "version": "wonzimer-20210101",
            }),
        )
        .unwrap_err();
    match err {
        MetadataError::Validation(ValidationError::MissingField { field }) => {
            assert_eq!(field, "mimeType")
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = e
        .generate(
            "wonzimer-20210101",
            &json!({
                "name": "a",
                "description": "b",
                "version": "wonzimer-20210101",
                "mimeType": "text/plain",
                "editionOf": 10,
            }),
        )
        .unwrap_err();
    match err {
        MetadataError::Validation(ValidationError::UnexpectedField { field }) => {
            assert_eq!(field, "editionOf")
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = e
        .generate(
            "wonzimer-20210101",
            &json!({
                "name": "a",
                "description": "b",
                "version": "wonzimer-20210101",
                "mimeType": false,
            }),
        )
        .unwrap_err();
    match err {
        MetadataError::Validation(ValidationError::WrongType {
            field, expected, ..
        }) => {
            assert_eq!(field, "mimeType");
            assert_eq!(expected, "string");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parses_metadata() {
    let raw = serde_json::to_string(&json!({
        "description": "blah",
        "mimeType": "application/json",
        "name": "who cares",
        "version": "wonzimer-01012021",
    }))
    .unwrap();

    let result = engine().parse("wonzimer-20210101", &raw).unwrap();

    for field in ["name", "mimeType", "version", "description"] {
        assert!(result.get(field).is_some());
    }
    assert_eq!(result["description"], "blah");
    assert_eq!(result["name"], "who cares");
}

#[test]
fn parse_round_trips_generated_metadata() {
    let e = engine();
    let fields = json!({
        "description": "internet renaissance",
        "mimeType": "application/json",
        "name": "wonzimer whitepaper",
        "version": "wonzimer-20210101",
    });

    let generated = e.generate("wonzimer-20210101", &fields).unwrap();
    let parsed = e.parse("wonzimer-20210101", &generated).unwrap();

    assert_eq!(parsed, fields);
}

#[test]
fn parse_raises_if_version_is_unsupported() {
    let e = engine();

    let err = e.parse("coinbase-20210101", "{}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are no versions with the coinbase project name"
    );

    let err = e.parse("wonzimer-20210102", "{}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are no versions in the wonzimer namespace with the 20210102 calendar version"
    );
}

#[test]
fn parse_rejects_malformed_json() {
    let err = engine().parse("wonzimer-20210101", "not json").unwrap_err();
    assert!(matches!(err, MetadataError::Json(_)));
}

#[test]
fn validate_returns_true_for_conforming_documents() {
    let result = engine()
        .validate(
            "wonzimer-20210101",
            &json!({
                "description": "blah",
                "mimeType": "application/json",
                "name": "who cares",
                "version": "wonzimer-01012021",
            }),
        )
        .unwrap();
    assert!(result);
}

#[test]
fn validate_returns_false_for_nonconforming_documents() {
    let e = engine();

    // an undeclared field flips the result
    let extra = e
        .validate(
            "wonzimer-20210101",
            &json!({
                "description": "blah",
                "mimeType": "application/json",
                "name": "who cares",
                "version": "wonzimer-01012021",
                "additionalProperty": "idk",
            }),
        )
        .unwrap();
    assert!(!extra);

    let missing = e
        .validate("wonzimer-20210101", &json!({ "name": "who cares" }))
        .unwrap();
    assert!(!missing);

    let wrong_type = e
        .validate(
            "wonzimer-20210101",
            &json!({
                "description": "blah",
                "mimeType": "application/json",
                "name": 42,
                "version": "wonzimer-01012021",
            }),
        )
        .unwrap();
    assert!(!wrong_type);
}

#[test]
fn validate_raises_if_version_is_unsupported() {
    let e = engine();

    let err = e.validate("coinbase-20210101", &json!({})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are no versions with the coinbase project name"
    );

    let err = e.validate("wonzimer-20210102", &json!({})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "There are no versions in the wonzimer namespace with the 20210102 calendar version"
    );
}

#[test]
fn later_calendar_version_accepts_optional_fields() {
    let e = engine();
    let fields = json!({
        "description": "genesis drop",
        "mimeType": "image/png",
        "name": "piece one",
        "version": "wonzimer-20210604",
        "external_url": "https://wonzimer.example/piece/1",
        "attributes": [{ "trait_type": "palette", "value": "warm" }],
    });

    assert!(e.validate("wonzimer-20210604", &fields).unwrap());
    // the earlier revision forbids those fields
    assert!(!e.validate("wonzimer-20210101", &fields).unwrap());
}

#[test]
fn verifies_content_against_declared_digest() {
    let e = engine();
    let metadata = e
        .generate(
            "wonzimer-20210101",
            &json!({
                "description": "blah blah blah",
                "mimeType": "text/plain",
                "name": "blah blah",
                "version": "wonzimer-20210101",
            }),
        )
        .unwrap();

    let declared = ContentDigest::from_bytes(metadata.as_bytes());
    assert!(e.verify_content(declared.as_str(), metadata.as_bytes()));
    assert!(!e.verify_content(declared.as_str(), b"invert"));
}
