use folio_core::project::{
    normalize_project, RawProject, CARD_PLACEHOLDER, DEFAULT_LONG_DESCRIPTION,
    DEFAULT_PROJECT_NAME, DEFAULT_SHORT_DESCRIPTION, SPOTLIGHT_PLACEHOLDER,
};
use serde_json::json;

fn full_record() -> RawProject {
    RawProject {
        project_id: Some("project_demo".to_string()),
        project_name: Some("Demo".to_string()),
        short_description: Some("Short.".to_string()),
        long_description: Some("Long.".to_string()),
        card_image: Some("./images/demo_card.webp".to_string()),
        spotlight_image: Some("./images/demo_spotlight.webp".to_string()),
        url: Some("https://example.com/demo".to_string()),
    }
}

#[test]
fn missing_record_fills_every_field() {
    let project = normalize_project(None, 0);
    assert_eq!(project.project_id, "project_1");
    assert_eq!(project.project_name, DEFAULT_PROJECT_NAME);
    assert_eq!(project.short_description, DEFAULT_SHORT_DESCRIPTION);
    assert_eq!(project.long_description, DEFAULT_LONG_DESCRIPTION);
    assert_eq!(project.card_image, CARD_PLACEHOLDER);
    assert_eq!(project.spotlight_image, SPOTLIGHT_PLACEHOLDER);
    assert_eq!(project.url, "");
    assert!(!project.has_url());
}

#[test]
fn blank_fields_fall_back_to_defaults() {
    let record = RawProject {
        project_id: Some("   ".to_string()),
        project_name: Some("  ".to_string()),
        short_description: Some("".to_string()),
        long_description: Some(" \t ".to_string()),
        card_image: Some("  ".to_string()),
        spotlight_image: None,
        url: Some("  ".to_string()),
    };
    let project = normalize_project(Some(&record), 2);
    assert_eq!(project.project_id, "project_3");
    assert_eq!(project.project_name, DEFAULT_PROJECT_NAME);
    assert_eq!(project.short_description, DEFAULT_SHORT_DESCRIPTION);
    assert_eq!(project.long_description, DEFAULT_LONG_DESCRIPTION);
    assert_eq!(project.card_image, CARD_PLACEHOLDER);
    assert_eq!(project.spotlight_image, SPOTLIGHT_PLACEHOLDER);
    assert_eq!(project.url, "");
}

#[test]
fn synthesized_ids_are_one_indexed() {
    assert_eq!(normalize_project(None, 4).project_id, "project_5");
}

#[test]
fn text_fields_are_trimmed() {
    let record = RawProject {
        project_name: Some("  Demo  ".to_string()),
        url: Some("  https://example.com/demo  ".to_string()),
        ..Default::default()
    };
    let project = normalize_project(Some(&record), 0);
    assert_eq!(project.project_name, "Demo");
    assert_eq!(project.url, "https://example.com/demo");
    assert!(project.has_url());
}

#[test]
fn complete_records_normalize_idempotently() {
    let first = normalize_project(Some(&full_record()), 0);
    let again = RawProject {
        project_id: Some(first.project_id.clone()),
        project_name: Some(first.project_name.clone()),
        short_description: Some(first.short_description.clone()),
        long_description: Some(first.long_description.clone()),
        card_image: Some(first.card_image.clone()),
        spotlight_image: Some(first.spotlight_image.clone()),
        url: Some(first.url.clone()),
    };
    assert_eq!(normalize_project(Some(&again), 7), first);
}

#[test]
fn relative_image_paths_resolve_during_normalization() {
    let record = RawProject {
        card_image: Some("../images/x.png".to_string()),
        spotlight_image: Some("photo.png".to_string()),
        ..Default::default()
    };
    let project = normalize_project(Some(&record), 0);
    assert_eq!(project.card_image, "./images/x.png");
    assert_eq!(project.spotlight_image, "./photo.png");
}

#[test]
fn from_value_reads_only_string_fields() {
    let record = RawProject::from_value(&json!({
        "project_id": 7,
        "project_name": "Typed",
        "url": null,
    }));
    assert_eq!(record.project_id, None);
    assert_eq!(record.project_name.as_deref(), Some("Typed"));
    assert_eq!(record.url, None);

    let empty = RawProject::from_value(&json!(42));
    assert_eq!(empty, RawProject::default());
}
