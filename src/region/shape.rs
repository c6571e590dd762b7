use serde::{Deserialize, Serialize};

use crate::model::Point;

/// Channel/Stokes position a region was drawn at; `None` spans every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stokes: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RegionShape {
    Rectangle { start: Point, end: Point },
    Ellipse { center: Point, radius_x: f64, radius_y: f64 },
    Polygon { points: Vec<Point> },
    Line { start: Point, end: Point },
    Point { at: Point },
}

impl RegionShape {
    pub fn validate(&self) -> Result<(), String> {
        match self {
            RegionShape::Ellipse {
                radius_x, radius_y, ..
            } if *radius_x <= 0.0 || *radius_y <= 0.0 => {
                Err("ellipse radii must be positive".to_string())
            }
            RegionShape::Polygon { points } if points.len() < 3 => {
                Err(format!("polygon needs 3 vertices, got {}", points.len()))
            }
            _ => Ok(()),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            RegionShape::Rectangle { start, end } => {
                let w = (end.x - start.x).abs();
                let h = (end.y - start.y).abs();
                format!("Rectangle {w:.0}x{h:.0}")
            }
            RegionShape::Ellipse {
                radius_x, radius_y, ..
            } => format!("Ellipse {radius_x:.1}x{radius_y:.1}"),
            RegionShape::Polygon { points } => format!("Polygon vertices {}", points.len()),
            RegionShape::Line { start, end } => {
                format!("Line length {:.2}", start.distance(*end))
            }
            RegionShape::Point { at } => format!("Point ({:.1}, {:.1})", at.x, at.y),
        }
    }
}
