use forsale_domain::{ContentClassifier, ContentTag, Severity, Verdict};

mod helpers;
use helpers::{record, record_with_ttl, RawRecordBuilder};

#[test]
fn test_fval_record_is_valid() {
    let classified = ContentClassifier::classify(&record_with_ttl("v=FORSALE1;fval=USD750", 300));

    assert_eq!(classified.verdict, Verdict::Valid);
    assert_eq!(classified.tag, Some(ContentTag::Fval));
    assert_eq!(classified.value_text().as_deref(), Some("USD750"));
    assert!(!classified.has_blocking_messages());
    assert_eq!(classified.ttl, 300);
}

#[test]
fn test_bare_version_tag_is_valid() {
    let classified = ContentClassifier::classify(&record("v=FORSALE1;"));

    assert_eq!(classified.verdict, Verdict::Valid);
    assert!(classified.tag.is_none());
    assert!(classified.value.is_none());
    assert!(classified
        .messages_with(Severity::Info)
        .any(|m| m.message.contains("only the version tag")));
}

#[test]
fn test_version_tag_is_case_sensitive() {
    for content in ["V=FORSALE1;fcod=ABC", "v=forsale1;fcod=ABC", "v=FORSALE2;"] {
        let classified = ContentClassifier::classify(&record(content));
        assert_eq!(classified.verdict, Verdict::Ignored, "{content}");
        assert!(classified.tag.is_none());
    }
}

#[test]
fn test_multi_part_record_is_joined() {
    let raw = RawRecordBuilder::new()
        .part("v=FORSALE1;ftxt=Hello ")
        .part("World")
        .build();

    let classified = ContentClassifier::classify(&raw);

    assert_eq!(classified.verdict, Verdict::Valid);
    assert!(classified.fits_single_charstring);
    assert!(classified.multi_part);
    assert_eq!(classified.value_text().as_deref(), Some("Hello World"));
    assert_eq!(classified.decoded.part_lengths, vec![22, 5]);
    assert_eq!(classified.decoded.total_length, 27);
    assert_eq!(
        classified
            .messages_with(Severity::Warning)
            .filter(|m| m.message.contains("multi-part"))
            .count(),
        1
    );
}

#[test]
fn test_escaped_nul_in_ftxt_is_invalid() {
    let classified = ContentClassifier::classify(&record("v=FORSALE1;ftxt=bad\\000value"));

    assert_eq!(classified.value.as_deref(), Some(&b"bad\0value"[..]));
    assert_eq!(classified.verdict, Verdict::Invalid);
    assert!(classified.has_blocking_messages());
}

#[test]
fn test_lowercase_currency_is_invalid() {
    let classified = ContentClassifier::classify(&record("v=FORSALE1;fval=eur50"));

    assert_eq!(classified.verdict, Verdict::Invalid);
    assert_eq!(classified.tag, Some(ContentTag::Fval));
}

#[test]
fn test_zero_strings_is_invalid() {
    let classified = ContentClassifier::classify(&RawRecordBuilder::new().build());

    assert_eq!(classified.verdict, Verdict::Invalid);
    assert!(classified.has_blocking_messages());
    assert_eq!(classified.decoded.total_length, 0);
}

#[test]
fn test_unrecognised_tag_stays_valid() {
    let classified = ContentClassifier::classify(&record("v=FORSALE1;price=USD750"));

    assert_eq!(classified.verdict, Verdict::Valid);
    assert!(classified.tag.is_none());
    assert!(classified
        .messages_with(Severity::Warning)
        .any(|m| m.message.contains("recognised content tag")));
}

#[test]
fn test_whitespace_after_version_is_tolerated() {
    let classified = ContentClassifier::classify(&record("v=FORSALE1; fval=USD750"));

    assert_eq!(classified.verdict, Verdict::Valid);
    assert_eq!(classified.tag, Some(ContentTag::Fval));
    assert!(classified
        .messages_with(Severity::Warning)
        .any(|m| m.message.contains("whitespace")));
}

#[test]
fn test_embedded_second_pair_warns() {
    let classified = ContentClassifier::classify(&record("v=FORSALE1;ftxt=hi;fval=USD5"));

    assert_eq!(classified.verdict, Verdict::Valid);
    assert!(classified
        .messages_with(Severity::Warning)
        .any(|m| m.message.contains(";fval=")));
}

#[test]
fn test_invalid_furi_is_lenient() {
    let classified = ContentClassifier::classify(&record("v=FORSALE1;furi=not a uri"));

    assert_eq!(classified.verdict, Verdict::Valid);
    assert_eq!(classified.tag, Some(ContentTag::Furi));
    assert!(!classified.has_blocking_messages());
}

#[test]
fn test_javascript_furi_carries_safety_warning() {
    let unsafe_uri = ContentClassifier::classify(&record("v=FORSALE1;furi=javascript:alert(1)"));
    let safe_uri = ContentClassifier::classify(&record("v=FORSALE1;furi=https://example.com"));

    assert_eq!(unsafe_uri.verdict, Verdict::Valid);
    assert_eq!(safe_uri.verdict, Verdict::Valid);
    assert!(unsafe_uri.messages_with(Severity::Warning).count() > 0);
    assert_eq!(safe_uri.messages_with(Severity::Warning).count(), 0);
}

#[test]
fn test_oversized_content_is_invalid() {
    let content = format!("v=FORSALE1;ftxt={}", "a".repeat(250));
    let classified = ContentClassifier::classify(&record(&content));

    assert!(!classified.fits_single_charstring);
    assert_eq!(classified.verdict, Verdict::Invalid);
}

#[test]
fn test_oversized_part_in_multi_part_record_is_blocking() {
    let raw = RawRecordBuilder::new()
        .part(&format!("v=FORSALE1;fcod={}", "x".repeat(250)))
        .part("y")
        .build();

    let classified = ContentClassifier::classify(&raw);

    assert_eq!(classified.verdict, Verdict::Invalid);
    assert!(classified
        .messages_with(Severity::Error)
        .any(|m| m.message.contains("character-string #0")));
}

#[test]
fn test_oversized_record_without_version_stays_ignored() {
    let classified = ContentClassifier::classify(&record(&"z".repeat(300)));
    assert_eq!(classified.verdict, Verdict::Ignored);
}

#[test]
fn test_fits_single_charstring_tracks_total_length() {
    for (a, b) in [(100usize, 155usize), (100, 156), (0, 255), (255, 1)] {
        let raw = RawRecordBuilder::new()
            .part(&"a".repeat(a))
            .part(&"b".repeat(b))
            .build();
        let classified = ContentClassifier::classify(&raw);
        assert_eq!(classified.fits_single_charstring, a + b <= 255, "{a}+{b}");
    }
}

#[test]
fn test_bad_escape_is_a_warning() {
    let classified = ContentClassifier::classify(&record("v=FORSALE1;fcod=A\\999B"));

    assert_eq!(classified.verdict, Verdict::Valid);
    assert_eq!(classified.value_text().as_deref(), Some("AB"));
    assert!(classified
        .messages_with(Severity::Warning)
        .any(|m| m.message.contains("unescaping")));
}

#[test]
fn test_high_ttl_warns_on_record() {
    let classified = ContentClassifier::classify(&record_with_ttl("v=FORSALE1;", 86_400));

    assert_eq!(classified.verdict, Verdict::Valid);
    assert!(classified
        .messages_with(Severity::Warning)
        .any(|m| m.message.contains("TTL=86400")));
}

#[test]
fn test_classification_is_idempotent() {
    let raw = RawRecordBuilder::new()
        .ttl(7200)
        .part("v=FORSALE1;ftxt=caf\\195\\169 ")
        .part("\\\"ok\\\"")
        .build();

    let first = ContentClassifier::classify(&raw);
    let second = ContentClassifier::classify(&raw);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_json_field_names() {
    let classified = ContentClassifier::classify(&record("v=FORSALE1;fval=USD750"));
    let json = serde_json::to_value(&classified).unwrap();

    assert_eq!(json["content"], "v=FORSALE1;fval=USD750");
    assert_eq!(json["concatenated_length"], 22);
    assert_eq!(json["raw_decoded_lens"][0], 22);
    assert_eq!(json["tag"], "fval");
    assert_eq!(json["tag_value"], "USD750");
    assert_eq!(json["verdict"], "valid");
    assert_eq!(json["fits_single_charstring"], true);
}
