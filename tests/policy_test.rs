//! Tests for the CORS policy evaluator decision table

use corsair::models::{MatchMode, VerdictKind};
use corsair::origins::Origin;
use corsair::scanner::CorsPolicy;
use reqwest::header::{HeaderMap, HeaderValue};

const ACAO: &str = "access-control-allow-origin";
const ACAC: &str = "access-control-allow-credentials";

fn origin(value: &str) -> Origin {
    Origin::parse(value).expect("valid origin")
}

fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_str(value).expect("header value"));
    }
    map
}

#[test]
fn wildcard_fires_for_every_origin() {
    let policy = CorsPolicy::default();

    for value in ["http://evil.com", "http://localhost", "null", "https://a.com"] {
        let verdict = policy.evaluate(&origin(value), &headers(&[(ACAO, "*")]));
        assert_eq!(
            verdict.kind,
            VerdictKind::WildcardVulnerable,
            "origin {value} should hit the wildcard rule"
        );
    }
}

#[test]
fn missing_header_is_no_policy() {
    let policy = CorsPolicy::default();
    let verdict = policy.evaluate(&origin("http://evil.com"), &HeaderMap::new());

    assert_eq!(verdict.kind, VerdictKind::NoPolicy);
    assert_eq!(verdict.allow_origin, None);
}

#[test]
fn missing_header_is_no_policy_even_with_credentials() {
    let policy = CorsPolicy::default();
    let verdict = policy.evaluate(&origin("http://evil.com"), &headers(&[(ACAC, "true")]));

    assert_eq!(verdict.kind, VerdictKind::NoPolicy);
    assert_eq!(verdict.allow_credentials.as_deref(), Some("true"));
}

#[test]
fn empty_header_is_no_policy() {
    let policy = CorsPolicy::default();
    let verdict = policy.evaluate(&origin("http://evil.com"), &headers(&[(ACAO, "")]));

    assert_eq!(verdict.kind, VerdictKind::NoPolicy);
}

#[test]
fn echoed_origin_is_correctly_configured() {
    let policy = CorsPolicy::default();
    let verdict = policy.evaluate(
        &origin("http://a.com"),
        &headers(&[(ACAO, "http://a.com")]),
    );

    assert_eq!(verdict.kind, VerdictKind::CorrectlyConfigured);
    assert_eq!(verdict.allow_origin.as_deref(), Some("http://a.com"));
}

#[test]
fn different_origin_is_a_mismatch() {
    let policy = CorsPolicy::default();
    let verdict = policy.evaluate(
        &origin("http://a.com"),
        &headers(&[(ACAO, "http://b.com")]),
    );

    assert_eq!(verdict.kind, VerdictKind::MismatchVulnerable);
}

#[test]
fn containment_counts_as_a_match_by_default() {
    // The default mode accepts any ACAO value that contains the origin as a
    // substring, including lookalike domains.
    let policy = CorsPolicy::default();
    let verdict = policy.evaluate(
        &origin("http://evil.com"),
        &headers(&[(ACAO, "http://evil.com.attacker.com")]),
    );

    assert_eq!(verdict.kind, VerdictKind::CorrectlyConfigured);
}

#[test]
fn exact_mode_rejects_containment() {
    let policy = CorsPolicy::new(MatchMode::Exact);
    let verdict = policy.evaluate(
        &origin("http://evil.com"),
        &headers(&[(ACAO, "http://evil.com.attacker.com")]),
    );

    assert_eq!(verdict.kind, VerdictKind::MismatchVulnerable);
}

#[test]
fn exact_mode_still_accepts_an_echo() {
    let policy = CorsPolicy::new(MatchMode::Exact);
    let verdict = policy.evaluate(
        &origin("http://a.com"),
        &headers(&[(ACAO, "http://a.com")]),
    );

    assert_eq!(verdict.kind, VerdictKind::CorrectlyConfigured);
}

#[test]
fn null_policy_matches_null_origin() {
    let policy = CorsPolicy::default();
    let verdict = policy.evaluate(&origin("null"), &headers(&[(ACAO, "null")]));

    assert_eq!(verdict.kind, VerdictKind::CorrectlyConfigured);
}

#[test]
fn null_policy_with_specific_origin_is_vulnerable() {
    let policy = CorsPolicy::default();
    let verdict = policy.evaluate(&origin("http://evil.com"), &headers(&[(ACAO, "null")]));

    assert_eq!(verdict.kind, VerdictKind::NullOriginVulnerable);
}

#[test]
fn credentials_are_captured_but_never_escalate() {
    let policy = CorsPolicy::default();

    let with_creds = policy.evaluate(
        &origin("http://evil.com"),
        &headers(&[(ACAO, "*"), (ACAC, "true")]),
    );
    let without_creds = policy.evaluate(&origin("http://evil.com"), &headers(&[(ACAO, "*")]));

    assert_eq!(with_creds.kind, VerdictKind::WildcardVulnerable);
    assert_eq!(with_creds.kind, without_creds.kind);
    assert_eq!(with_creds.allow_credentials.as_deref(), Some("true"));
    assert_eq!(without_creds.allow_credentials, None);
}

#[test]
fn evaluation_is_deterministic() {
    let policy = CorsPolicy::default();
    let request_origin = origin("http://a.com");
    let response_headers = headers(&[(ACAO, "http://b.com"), (ACAC, "true")]);

    let first = policy.evaluate(&request_origin, &response_headers);
    let second = policy.evaluate(&request_origin, &response_headers);

    assert_eq!(first, second);
}
