use serde_json::json;

use crate::model::Point;

use super::{JsonRegionFactory, Region, RegionFactory, RegionShape};

fn point_region(id: &str) -> Region {
    Region::new(
        id,
        RegionShape::Point {
            at: Point::new(1.0, 2.0),
        },
    )
}

#[test]
fn match_is_by_id_prefix() {
    assert!(point_region("r1").is_match("r1"));
    assert!(point_region("r1.1").is_match("r1"));
    assert!(point_region("r1/edge").is_match("r1"));
    assert!(point_region("r10").is_match("r1"));
    assert!(!point_region("r2").is_match("r1"));
    assert!(!point_region("r").is_match("r1"));
}

#[test]
fn factory_restores_serialized_region() {
    let region = Region::new(
        "r3",
        RegionShape::Ellipse {
            center: Point::new(5.0, 5.0),
            radius_x: 2.0,
            radius_y: 1.5,
        },
    )
    .with_name("core");
    let state = region.state().expect("state");
    assert_eq!(state["shape"]["kind"], json!("ellipse"));
    assert_eq!(state["shape"]["radiusX"], json!(2.0));
    let restored = JsonRegionFactory.make_region(&state).expect("restore");
    assert_eq!(restored, region);
}

#[test]
fn factory_rejects_invalid_regions() {
    let degenerate = json!({
        "id": "p",
        "shape": {"kind": "polygon", "points": [{"x": 0.0, "y": 0.0}]}
    });
    assert!(JsonRegionFactory.make_region(&degenerate).is_err());
    assert!(JsonRegionFactory.make_region(&json!({"id": 4})).is_err());
    let nameless = point_region("").state().expect("state");
    assert!(JsonRegionFactory.make_region(&nameless).is_err());
}

#[test]
fn summaries_describe_the_shape() {
    let line = RegionShape::Line {
        start: Point::new(0.0, 0.0),
        end: Point::new(3.0, 4.0),
    };
    assert_eq!(line.summary(), "Line length 5.00");
}
