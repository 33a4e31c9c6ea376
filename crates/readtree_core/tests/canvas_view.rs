use readtree_core::{
    ArrowStyle, CanvasOptions, CanvasView, CardShape, Edge, LayoutDirection, NewWork, WorkRegistry,
};

fn sample_registry() -> WorkRegistry {
    let mut registry = WorkRegistry::new();
    registry
        .add_work(
            NewWork::new("Dune")
                .author("Herbert")
                .image_url("https://covers.example/dune.jpg"),
        )
        .unwrap();
    registry
        .add_work(NewWork::new("Dune Messiah").read_after("Dune").read_after("Lost"))
        .unwrap();
    registry
        .add_work(NewWork::new("Blank cover").image_url(""))
        .unwrap();
    registry
}

#[test]
fn default_options_describe_top_down_layout() {
    let options = CanvasOptions::default();
    assert_eq!(options.direction, LayoutDirection::UpDown);
    assert_eq!(options.level_separation, 150);
    assert_eq!(options.node_spacing, 200);
    assert!(!options.physics);
    assert_eq!(options.arrows, ArrowStyle::To);
}

#[test]
fn cards_follow_registry_with_labels_and_shapes() {
    let view = CanvasView::from_registry(&sample_registry(), CanvasOptions::default());

    assert_eq!(view.cards.len(), 3);

    let dune = view.card("Dune").unwrap();
    assert_eq!(dune.label, "Dune\nHerbert");
    assert_eq!(
        dune.shape,
        CardShape::Image {
            url: "https://covers.example/dune.jpg".to_string()
        }
    );

    let messiah = view.card("Dune Messiah").unwrap();
    assert_eq!(messiah.label, "Dune Messiah\n");
    assert_eq!(messiah.shape, CardShape::Box);

    let blank = view.card("Blank cover").unwrap();
    assert_eq!(blank.shape, CardShape::Box);
    assert_eq!(blank.image_url.as_deref(), Some(""));
}

#[test]
fn edges_match_derived_graph() {
    let view = CanvasView::from_registry(&sample_registry(), CanvasOptions::default());
    assert_eq!(view.edges, vec![Edge::new("Dune", "Dune Messiah")]);
}

#[test]
fn view_serializes_as_typed_json() {
    let options = CanvasOptions {
        direction: LayoutDirection::LeftRight,
        physics: true,
        ..CanvasOptions::default()
    };
    let view = CanvasView::from_registry(&sample_registry(), options);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["options"]["direction"], "LR");
    assert_eq!(json["options"]["physics"], true);
    assert_eq!(json["options"]["arrows"], "to");
    assert_eq!(json["cards"][0]["shape"]["kind"], "image");
    assert_eq!(json["cards"][1]["shape"]["kind"], "box");
    assert_eq!(json["edges"][0]["from"], "Dune");
    assert_eq!(json["edges"][0]["to"], "Dune Messiah");
}

#[test]
fn options_deserialize_with_defaults() {
    let options: CanvasOptions = serde_json::from_str(r#"{"node_spacing": 320}"#).unwrap();
    assert_eq!(options.node_spacing, 320);
    assert_eq!(options.level_separation, 150);
    assert_eq!(options.direction, LayoutDirection::UpDown);
}
