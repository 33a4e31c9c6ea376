use readtree_core::{NewWork, Work, WorkId, WorkValidationError};

#[test]
fn work_new_sets_defaults() {
    let work = Work::new("Dune").unwrap();

    assert!(!work.id.as_str().is_empty());
    assert_eq!(work.title, "Dune");
    assert_eq!(work.author, None);
    assert_eq!(work.image_url, None);
    assert!(work.prerequisites.is_empty());
}

#[test]
fn work_new_generates_distinct_ids() {
    let first = Work::new("A").unwrap();
    let second = Work::new("A").unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn work_rejects_blank_titles() {
    assert_eq!(Work::new("").unwrap_err(), WorkValidationError::BlankTitle);
    assert_eq!(Work::new("   ").unwrap_err(), WorkValidationError::BlankTitle);
}

#[test]
fn validate_catches_title_blanked_after_creation() {
    let mut work = Work::new("Dune").unwrap();
    assert!(work.validate().is_ok());

    work.title = String::new();
    assert_eq!(work.validate().unwrap_err(), WorkValidationError::BlankTitle);
}

#[test]
fn work_id_parse_rejects_blank() {
    assert!(WorkId::parse("").is_none());
    assert!(WorkId::parse("  ").is_none());
    assert_eq!(WorkId::parse("abc").unwrap().as_str(), "abc");
}

#[test]
fn work_serialization_uses_snapshot_field_names() {
    let mut work = Work::with_id(WorkId::parse("w-42").unwrap(), "El Aleph").unwrap();
    work.author = Some("Borges".to_string());
    work.prerequisites = vec!["Ficciones".to_string()];

    let json = serde_json::to_value(&work).unwrap();
    assert_eq!(json["id"], "w-42");
    assert_eq!(json["title"], "El Aleph");
    assert_eq!(json["author"], "Borges");
    assert_eq!(json["image_url"], serde_json::Value::Null);
    assert_eq!(json["antes"], serde_json::json!(["Ficciones"]));
    assert!(json.get("prerequisites").is_none());
}

#[test]
fn cover_ignores_empty_image_url() {
    let mut work = Work::new("Dune").unwrap();
    assert_eq!(work.cover(), None);

    work.image_url = Some(String::new());
    assert_eq!(work.cover(), None);

    work.image_url = Some("https://covers.example/dune.jpg".to_string());
    assert_eq!(work.cover(), Some("https://covers.example/dune.jpg"));
}

#[test]
fn new_work_builder_collects_fields() {
    let request = NewWork::new("Dune Messiah")
        .author("Herbert")
        .image_url("messiah.png")
        .read_after("Dune");

    assert_eq!(request.title, "Dune Messiah");
    assert_eq!(request.author.as_deref(), Some("Herbert"));
    assert_eq!(request.image_url.as_deref(), Some("messiah.png"));
    assert_eq!(request.prerequisites, vec!["Dune".to_string()]);
}
