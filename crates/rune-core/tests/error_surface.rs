use rune_core::errors::{ErrorInfo, RuneError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("bits", "5")
        .with_context("reason", "example")
}

#[test]
fn length_error_surface() {
    let err = RuneError::Length(sample_info("L001", "bit length below one"));
    assert_eq!(err.info().code, "L001");
    assert!(err.info().context.contains_key("bits"));
}

#[test]
fn pattern_error_surface() {
    let err = RuneError::Pattern(sample_info("P001", "rank out of range"));
    assert_eq!(err.info().code, "P001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn store_error_surface() {
    let err = RuneError::Store(sample_info("ST001", "entry unreadable"));
    assert_eq!(err.info().code, "ST001");
}

#[test]
fn serde_error_surface() {
    let err = RuneError::Serde(sample_info("S001", "schema mismatch"));
    assert_eq!(err.info().code, "S001");
}

#[test]
fn display_includes_context_and_hint() {
    let err = RuneError::Length(
        ErrorInfo::new("L001", "bit length below one")
            .with_context("bits", "0")
            .with_hint("pass a bit length of at least 1"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("L001"));
    assert!(rendered.contains("bits=0"));
    assert!(rendered.contains("hint"));
}
