use readtree_core::{NewWork, RegistryError, WorkRegistry};

fn titles(registry: &WorkRegistry) -> Vec<String> {
    registry.get_all().iter().map(|work| work.title.clone()).collect()
}

#[test]
fn add_work_stores_supplied_fields() {
    let mut registry = WorkRegistry::new();

    let created = registry
        .add_work(
            NewWork::new("Dune")
                .author("Herbert")
                .image_url("https://covers.example/dune.jpg"),
        )
        .unwrap()
        .clone();

    assert_eq!(created.title, "Dune");
    assert_eq!(created.author.as_deref(), Some("Herbert"));
    assert_eq!(
        created.image_url.as_deref(),
        Some("https://covers.example/dune.jpg")
    );
    assert!(created.prerequisites.is_empty());
    assert_eq!(registry.get("Dune"), Some(&created));
}

#[test]
fn distinct_adds_are_all_listed() {
    let mut registry = WorkRegistry::new();
    for title in ["C", "A", "B"] {
        registry.add_work(NewWork::new(title)).unwrap();
    }

    assert_eq!(registry.len(), 3);
    assert_eq!(titles(&registry), vec!["C", "A", "B"]);
}

#[test]
fn add_work_accepts_dangling_prerequisites() {
    let mut registry = WorkRegistry::new();
    let work = registry
        .add_work(NewWork::new("B").read_after("Not yet added"))
        .unwrap();
    assert_eq!(work.prerequisites, vec!["Not yet added".to_string()]);
}

#[test]
fn duplicate_title_is_rejected_and_registry_unchanged() {
    let mut registry = WorkRegistry::new();
    registry
        .add_work(NewWork::new("Dune").author("Herbert"))
        .unwrap();
    let before: Vec<_> = registry.get_all().into_iter().cloned().collect();

    let err = registry
        .add_work(NewWork::new("Dune").author("Somebody else"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateTitle(ref title) if title == "Dune"));

    let after: Vec<_> = registry.get_all().into_iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn duplicate_check_is_case_sensitive() {
    let mut registry = WorkRegistry::new();
    registry.add_work(NewWork::new("Dune")).unwrap();
    registry.add_work(NewWork::new("dune")).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn blank_title_is_rejected() {
    let mut registry = WorkRegistry::new();

    let err = registry.add_work(NewWork::new("")).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidTitle(_)));

    let err = registry.add_work(NewWork::new(" \t ")).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidTitle(_)));

    assert!(registry.is_empty());
}

#[test]
fn titles_are_stored_verbatim() {
    let mut registry = WorkRegistry::new();
    registry.add_work(NewWork::new(" Dune ")).unwrap();
    assert!(registry.contains(" Dune "));
    assert!(!registry.contains("Dune"));
}

#[test]
fn candidate_titles_are_sorted() {
    let mut registry = WorkRegistry::new();
    for title in ["Rayuela", "Ficciones", "Pedro Páramo"] {
        registry.add_work(NewWork::new(title)).unwrap();
    }
    assert_eq!(
        registry.candidate_titles(),
        vec!["Ficciones", "Pedro Páramo", "Rayuela"]
    );
}

#[test]
fn duplicate_error_message_names_title() {
    let mut registry = WorkRegistry::new();
    registry.add_work(NewWork::new("Dune")).unwrap();
    let err = registry.add_work(NewWork::new("Dune")).unwrap_err();
    assert!(err.to_string().contains("Dune"), "unexpected message: {err}");
}
