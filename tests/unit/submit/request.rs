use super::*;

#[test]
fn missing_mask_is_sent_as_empty_field() {
    let form = FormFields {
        style: Style::Classic,
        primary_color: "navy".to_string(),
        secondary_color: "#ffcc00".to_string(),
    };
    let req = SubmissionRequest::new(None, &form);
    assert_eq!(
        req.fields(),
        [
            ("imageFile", ""),
            ("style", "Classic"),
            ("pColor", "navy"),
            ("sColor", "#ffcc00"),
        ]
    );
}

#[test]
fn unset_style_is_sent_literally() {
    let req = SubmissionRequest::new(Some("data:x".to_string()), &FormFields::default());
    assert_eq!(req.fields()[0], ("imageFile", "data:x"));
    assert_eq!(req.fields()[1], ("style", "Select a base style"));
}

#[test]
fn results_decode_with_optional_fields() {
    let body = r#"[
        {"b64_json": "", "revised_prompt": "a chair", "url": "https://cdn.example/1.png"},
        {"url": "https://cdn.example/2.png"}
    ]"#;
    let results: Vec<GenerationResult> = serde_json::from_str(body).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].revised_prompt, "a chair");
    assert_eq!(results[1].url, "https://cdn.example/2.png");
    assert!(results[1].b64_json.is_empty());
}

#[test]
fn result_without_url_is_rejected() {
    assert!(serde_json::from_str::<Vec<GenerationResult>>(r#"[{"b64_json": ""}]"#).is_err());
}
