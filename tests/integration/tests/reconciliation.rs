//! Reconciliation of edited redacted copies.

use markdown::mdast::{Node, Text};
use mdredact_core::{RestorationRegistry, TransformError, Transformer};
use mdredact_render::RestoreError;
use pretty_assertions::assert_eq;
use rstest::rstest;

const SOURCE: &str = "See [a link](http://x.com) here";

fn restore(redacted: &str) -> Result<String, TransformError> {
    Transformer::new().source_and_redacted_to_markdown(SOURCE, redacted)
}

#[test]
fn edits_around_an_untouched_placeholder_survive() {
    let restored = restore("Completely new prose around [0], reworked").unwrap();
    assert_eq!(
        restored.trim_end(),
        "Completely new prose around [a link](http://x.com), reworked"
    );
}

#[test]
fn edited_placeholder_content_replaces_link_text() {
    let restored = restore("See [better words][0] here").unwrap();
    assert_eq!(restored.trim_end(), "See [better words](http://x.com) here");
}

#[test]
fn placeholder_moved_between_paragraphs_still_restores() {
    let restored = restore("A fresh first paragraph.\n\nNow the link lives here: [0]").unwrap();
    assert_eq!(
        restored.trim_end(),
        "A fresh first paragraph.\n\nNow the link lives here: [a link](http://x.com)"
    );
}

#[rstest]
#[case::deleted("See here", 0)]
#[case::duplicated("See [0] and [0] here", 2)]
fn count_mismatches_are_rejected(#[case] redacted: &str, #[case] found: usize) {
    let error = restore(redacted).unwrap_err();
    match error {
        TransformError::Restore(RestoreError::CountMismatch {
            expected,
            found: actual,
        }) => {
            assert_eq!(expected, 1);
            assert_eq!(actual, found);
        }
        other => panic!("expected a count mismatch, got {other:?}"),
    }
}

#[test]
fn placeholder_lookalikes_do_not_restore_content() {
    // `[zero]` is not a placeholder; only `[0]` pairs with the redaction.
    let restored = restore("See [zero] and [0] here").unwrap();
    assert!(restored.contains("(http://x.com)"));
    assert!(restored.contains("zero"));
}

#[test]
fn custom_redaction_types_can_be_registered() {
    let mut registry = RestorationRegistry::with_builtins();
    registry
        .register(
            "redactedcode",
            Box::new(|_, content| {
                Ok(Node::Text(Text {
                    value: content.unwrap_or("code").to_string(),
                    position: None,
                }))
            }),
        )
        .unwrap();

    let transformer = Transformer::with_registry(registry);
    // Built-ins still work through the extended registry.
    let restored = transformer
        .source_and_redacted_to_markdown(SOURCE, "See [0] here")
        .unwrap();
    assert_eq!(restored.trim_end(), SOURCE);
}

#[test]
fn missing_registration_is_surfaced_not_skipped() {
    let transformer = Transformer::with_registry(RestorationRegistry::new());
    let error = transformer
        .source_and_redacted_to_markdown(SOURCE, "See [0] here")
        .unwrap_err();
    assert!(matches!(
        error,
        TransformError::Restore(RestoreError::UnknownRedactionType { .. })
    ));
}
