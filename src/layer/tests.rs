use serde_json::json;

use crate::model::{AxisKind, ImageMeta, MaskColor, Point, ViewSize};

use super::{CompositionMode, ImageLayer, Layer, LayerError, LayerGroup, LayerNode};

fn image(id: &str, shape: &[usize]) -> Layer {
    Layer::Image(ImageLayer::new(
        id,
        ImageMeta::from_shape(shape),
        ViewSize::new(200, 100),
    ))
}

fn root_with(layers: Vec<Layer>) -> LayerGroup {
    let mut root = LayerGroup::new("root");
    for layer in layers {
        root.push(layer);
    }
    root
}

#[test]
fn image_reports_frames_per_axis() {
    let layer = image("a", &[64, 32, 12, 4]);
    let node = layer.node();
    assert_eq!(node.frame_count(AxisKind::Spectral), 12);
    assert_eq!(node.frame_count(AxisKind::Stokes), 4);
    assert_eq!(node.frame_count(AxisKind::Tabular), 1);
    assert_eq!(node.hidden_axes(), vec![AxisKind::Spectral, AxisKind::Stokes]);
}

#[test]
fn group_aggregates_children() {
    let mut nested = LayerGroup::new("g");
    nested.push(image("b", &[16, 16, 3]));
    nested.push(image("c", &[16, 16, 9]));
    let root = root_with(vec![image("a", &[8, 8]), Layer::Group(nested)]);

    let group = root.find("g").expect("group");
    assert_eq!(group.node().frame_count(AxisKind::Spectral), 9);
    assert!(group.node().is_descendant("c"));
    assert!(!group.node().is_descendant("a"));
    assert_eq!(root.layer_ids(), vec!["root", "a", "g", "b", "c"]);
    assert!(root.find("c").is_some());
}

#[test]
fn empty_group_is_not_drawable() {
    let root = root_with(vec![
        image("a", &[8, 8]),
        Layer::Group(LayerGroup::new("g")),
    ]);
    assert_eq!(root.visible_count(), 1);
    assert!(!root.children()[1].is_drawable());
}

#[test]
fn close_data_searches_nested_groups() {
    let mut nested = LayerGroup::new("g");
    nested.push(image("b", &[16, 16]));
    let mut root = root_with(vec![image("a", &[8, 8]), Layer::Group(nested)]);

    let removed = root.close_data("b").expect("removed");
    assert_eq!(removed.node().id(), "b");
    assert!(root.find("b").is_none());
    assert!(root.close_data("missing").is_none());
    assert_eq!(root.len(), 2);
}

#[test]
fn composition_mode_only_applies_to_groups() {
    let mut root = root_with(vec![image("a", &[8, 8]), Layer::Group(LayerGroup::new("g"))]);
    assert!(root.set_composition_mode("g", CompositionMode::Plus).expect("group"));
    assert!(!root.set_composition_mode("g", CompositionMode::Plus).expect("group"));
    assert!(root.set_composition_mode("root", CompositionMode::Alpha).expect("root"));
    assert!(matches!(
        root.set_composition_mode("a", CompositionMode::Alpha),
        Err(LayerError::NotAGroup(_))
    ));
    assert!(matches!(
        root.set_composition_mode("zz", CompositionMode::Alpha),
        Err(LayerError::NotFound(_))
    ));
    assert_eq!(CompositionMode::recognize("plus"), Some(CompositionMode::Plus));
    assert_eq!(CompositionMode::recognize("blend"), None);
}

#[test]
fn mask_changes_report_whether_anything_moved() {
    let mut root = root_with(vec![image("a", &[8, 8])]);
    let color = MaskColor {
        red: 10,
        green: 20,
        blue: 30,
    };
    assert!(root.set_layer_mask_color("a", color).expect("found"));
    assert!(!root.set_layer_mask_color("a", color).expect("found"));
    assert!(root.set_layer_mask_alpha("a", 12).expect("found"));
    assert!(root.set_layer_mask_alpha("b", 12).is_err());
    let layer = root.find("a").and_then(Layer::as_image).expect("image");
    assert_eq!(layer.mask(), color);
    assert_eq!(layer.mask_alpha(), 12);
}

#[test]
fn grouping_and_ungrouping_selected_layers() {
    let mut root = root_with(vec![
        image("a", &[8, 8]),
        image("b", &[8, 8]),
        image("c", &[8, 8]),
    ]);
    assert!(!root.group_selected("g1"));
    assert!(root.set_selected_ids(&["b".to_string(), "c".to_string()]));
    assert!(root.group_selected("g1"));
    assert_eq!(root.len(), 2);
    let group = root.children()[1].as_group().expect("group");
    assert_eq!(group.len(), 2);
    assert!(group.is_selected());

    assert!(root.ungroup_selected());
    let ids = root
        .children()
        .iter()
        .map(|layer| layer.node().id().to_string())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn truncated_state_drops_session_detail() {
    let mut layer = image("a", &[8, 8, 5]);
    layer.node_mut().grid_changed(&json!({"showGrid": true}));
    layer.node_mut().load(&[0, 0, 3], Default::default());

    let full = layer.state(false).expect("full state");
    assert_eq!(full["grid"], json!({"showGrid": true}));
    assert_eq!(full["type"], json!("image"));
    let truncated = layer.state(true).expect("truncated state");
    assert!(truncated.get("grid").is_none());
    assert!(truncated.get("frames").is_none());

    let restored = Layer::from_state(&full).expect("restore");
    assert_eq!(restored, layer);
}

#[test]
fn malformed_layer_state_is_rejected() {
    assert!(Layer::from_state(&json!({"type": "image", "id": 3})).is_err());
    let mut state = image("a", &[8, 8]).state(false).expect("state");
    state["meta"]["dims"] = json!([{"axis": "spectral", "size": 0}, {"axis": "stokes", "size": 1}]);
    assert!(Layer::from_state(&state).is_err());
}

#[test]
fn group_pan_and_zoom_fan_out() {
    let mut nested = LayerGroup::new("g");
    nested.push(image("b", &[16, 16]));
    nested.push(image("c", &[32, 32]));
    let mut layer = Layer::Group(nested);

    layer.node_mut().set_zoom(2.0);
    layer.node_mut().set_pan(Point::new(3.0, 4.0));
    let group = layer.as_group().expect("group");
    for child in group.children() {
        assert_eq!(child.node().zoom(), 2.0);
        assert_eq!(child.node().center_pixel(), Some(Point::new(3.0, 4.0)));
    }
    layer.node_mut().reset_pan();
    assert_eq!(layer.node().center_pixel(), Some(Point::new(8.0, 8.0)));
}
