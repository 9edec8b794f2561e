//! Resolution of free-text requests into search parameters

use mailsearch_core::{
    Ambiguity, Count, MailsearchError, OutputFormat, Scope, SearchParameters, resolve_request,
};

fn params(text: &str) -> SearchParameters {
    resolve_request(text)
        .unwrap_or_else(|e| panic!("'{}' should resolve: {}", text, e))
        .params
}

#[test]
fn test_plain_term_gets_defaults() {
    assert_eq!(
        params("invoice"),
        SearchParameters {
            term: "invoice".to_string(),
            scope: Scope::Both,
            count: Count::clamped(10),
            format: OutputFormat::Json,
            full_body: false,
        }
    );
}

#[test]
fn test_no_modifiers_means_defaults_for_any_text() {
    for text in ["invoice", "lunch with Dana", "Re: contract v2", "état des lieux"] {
        let p = params(text);
        assert_eq!(p.term, text);
        assert_eq!(p.scope, Scope::Both);
        assert_eq!(p.count.get(), 10);
        assert_eq!(p.format, OutputFormat::Json);
        assert!(!p.full_body);
    }
}

#[test]
fn test_subject_modifier() {
    let p = params("meeting subject");
    assert_eq!(p.term, "meeting");
    assert_eq!(p.scope, Scope::Subject);
    assert_eq!(p.count.get(), 10);
    assert_eq!(p.format, OutputFormat::Json);
}

#[test]
fn test_body_and_count_modifiers() {
    let p = params("report body 20");
    assert_eq!(p.term, "report");
    assert_eq!(p.scope, Scope::Body);
    assert_eq!(p.count.get(), 20);
    assert_eq!(p.format, OutputFormat::Json);
}

#[test]
fn test_text_format_modifier() {
    for text in ["urgent text", "urgent readable"] {
        let p = params(text);
        assert_eq!(p.term, "urgent");
        assert_eq!(p.format, OutputFormat::Text);
        assert_eq!(p.scope, Scope::Both);
        assert_eq!(p.count.get(), 10);
    }
}

#[test]
fn test_full_body_does_not_change_format() {
    for text in ["budget full", "budget complete"] {
        let p = params(text);
        assert_eq!(p.term, "budget");
        assert!(p.full_body);
        assert_eq!(p.format, OutputFormat::Json);
    }
}

#[test]
fn test_count_clamps_high_and_low() {
    assert_eq!(params("invoice 51").count.get(), 50);
    assert_eq!(params("invoice 1000").count.get(), 50);
    assert_eq!(params("invoice 0").count.get(), 1);
    assert_eq!(params("invoice -3").count.get(), 1);
    assert_eq!(params("invoice 50").count.get(), 50);
    assert_eq!(params("invoice 1").count.get(), 1);
}

#[test]
fn test_clamp_is_reported() {
    let resolution = resolve_request("invoice 0").unwrap();
    assert_eq!(
        resolution.ambiguities,
        vec![Ambiguity::CountClamped {
            requested: "0".to_string(),
            applied: 1,
        }]
    );
}

#[test]
fn test_first_integer_wins() {
    let resolution = resolve_request("invoice 5 2023").unwrap();
    assert_eq!(resolution.params.count.get(), 5);
    assert_eq!(resolution.params.term, "invoice 2023");
    assert_eq!(
        resolution.ambiguities,
        vec![Ambiguity::ExtraIntegers {
            tokens: vec!["2023".to_string()],
        }]
    );
}

#[test]
fn test_subject_and_body_resolve_to_both() {
    let resolution = resolve_request("offsite subject body").unwrap();
    assert_eq!(resolution.params.scope, Scope::Both);
    assert!(resolution.is_ambiguous());
}

#[test]
fn test_all_modifiers_together() {
    let p = params("Full 25 quarterly BODY readable report");
    assert_eq!(p.term, "quarterly report");
    assert_eq!(p.scope, Scope::Body);
    assert_eq!(p.count.get(), 25);
    assert_eq!(p.format, OutputFormat::Text);
    assert!(p.full_body);
}

#[test]
fn test_empty_after_stripping_is_error() {
    for text in ["", "   ", "subject", "body 20 full", "text complete 3"] {
        let err = resolve_request(text).unwrap_err();
        assert!(
            matches!(err, MailsearchError::EmptyQuery),
            "'{}' should be EmptyQuery, got {:?}",
            text,
            err
        );
    }
}

#[test]
fn test_keyword_inside_intended_term_is_consumed() {
    // "subject line" reads as a subject-scoped search for "line"
    let p = params("subject line");
    assert_eq!(p.term, "line");
    assert_eq!(p.scope, Scope::Subject);
}

#[test]
fn test_resolution_is_deterministic() {
    let a = resolve_request("report body 20").unwrap();
    let b = resolve_request("report body 20").unwrap();
    assert_eq!(a, b);
}
