//! Tests for the origin set builder

use corsair::error::CorsairError;
use corsair::origins::{self, Origin, DEFAULT_ORIGINS};

#[test]
fn default_set_is_exact_and_ordered() {
    let set = origins::build(None).expect("default set");

    let values: Vec<&str> = set.iter().map(|o| o.as_str()).collect();
    assert_eq!(values, vec!["http://evil.com", "http://localhost", "null"]);
    assert_eq!(values, DEFAULT_ORIGINS);
}

#[test]
fn user_supplied_origins_are_kept_verbatim_in_order() {
    let set = origins::build(Some(vec![
        "https://a.example/".to_string(),
        "http://b.example:8080".to_string(),
        "https://a.example/".to_string(),
        "null".to_string(),
    ]))
    .expect("valid origins");

    let values: Vec<&str> = set.iter().map(|o| o.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "https://a.example/",
            "http://b.example:8080",
            "https://a.example/",
            "null"
        ]
    );
}

#[test]
fn one_invalid_origin_rejects_the_whole_set() {
    let result = origins::build(Some(vec![
        "http://ok.example".to_string(),
        "ftp://bad.example".to_string(),
        "http://also-ok.example".to_string(),
    ]));

    match result {
        Err(CorsairError::InvalidOrigin(value)) => assert_eq!(value, "ftp://bad.example"),
        other => panic!("expected InvalidOrigin, got {other:?}"),
    }
}

#[test]
fn null_literal_is_accepted() {
    let parsed = Origin::parse("null").expect("null is a valid origin");
    assert!(parsed.is_null());
}

#[test]
fn scheme_check_is_case_sensitive() {
    assert!(Origin::parse("HTTP://evil.com").is_err());
    assert!(Origin::parse("NULL").is_err());
}

#[test]
fn bare_hostnames_are_rejected() {
    assert!(Origin::parse("evil.com").is_err());
    assert!(Origin::parse("").is_err());
}

#[test]
fn https_origins_are_accepted() {
    let parsed = Origin::parse("https://evil.com").expect("https origin");
    assert_eq!(parsed.as_str(), "https://evil.com");
    assert!(!parsed.is_null());
}
