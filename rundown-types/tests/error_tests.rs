use rundown_types::Error;

#[test]
fn error_display_missing_required_field() {
    let err = Error::MissingRequiredField("cueId".into());
    assert_eq!(format!("{err}"), "cueId is required");
}

#[test]
fn error_display_empty_data() {
    let err = Error::EmptyData { id: "doc-9".into() };
    let msg = format!("{err}");
    assert!(msg.contains("undefined"));
    assert!(msg.contains("doc-9"));
}

#[test]
fn error_display_invalid_document() {
    let err = Error::InvalidDocument("not an object".into());
    assert!(format!("{err}").contains("invalid document"));
}

#[test]
fn error_display_invalid_timestamp() {
    let err = Error::InvalidTimestamp("Timestamp(seconds=1, nanoseconds=0)".into());
    assert!(format!("{err}").contains("invalid timestamp"));
}

#[test]
fn error_from_serde_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Serialization(_)));
    assert!(format!("{err}").contains("serialization error"));
}

#[test]
fn error_is_debug() {
    let err = Error::MissingRequiredField("columnId".into());
    assert!(format!("{err:?}").contains("MissingRequiredField"));
}
