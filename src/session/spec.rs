use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{AxisKind, SkyCs};
use crate::region::Region;

use super::{Result, SessionError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionScript {
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<SessionStep>,
}

/// One stack operation. Screen points are view pixels, `all` applies the
/// operation to every layer instead of the current one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SessionStep {
    AddImage {
        path: PathBuf,
    },
    AddGroup,
    CloseLayer {
        id: String,
    },
    AddRegion {
        region: Region,
    },
    CloseRegion {
        id: String,
    },
    SetVisible {
        id: String,
        visible: bool,
    },
    SelectLayers {
        ids: Vec<String>,
    },
    MoveSelected {
        down: bool,
    },
    SetFrameImage {
        index: usize,
    },
    SetFrameAxis {
        axis: AxisKind,
        frame: usize,
    },
    SetMaskColor {
        id: String,
        red: i32,
        green: i32,
        blue: i32,
    },
    SetMaskAlpha {
        id: String,
        alpha: i32,
    },
    SetCompositionMode {
        id: String,
        mode: String,
    },
    SetLayerName {
        id: String,
        name: String,
    },
    GroupLayers {
        grouped: bool,
    },
    SetCoordinateSystem {
        cs: SkyCs,
    },
    Pan {
        x: f64,
        y: f64,
        #[serde(default)]
        all: bool,
    },
    Zoom {
        x: f64,
        y: f64,
        factor: f64,
        #[serde(default)]
        all: bool,
    },
    SetZoom {
        zoom: f64,
        #[serde(default)]
        all: bool,
    },
    ResetPan {
        #[serde(default)]
        all: bool,
    },
    ResetZoom {
        #[serde(default)]
        all: bool,
    },
    Load,
    Render,
    Save {
        path: PathBuf,
    },
}

impl SessionStep {
    pub fn op(&self) -> &'static str {
        match self {
            SessionStep::AddImage { .. } => "addImage",
            SessionStep::AddGroup => "addGroup",
            SessionStep::CloseLayer { .. } => "closeLayer",
            SessionStep::AddRegion { .. } => "addRegion",
            SessionStep::CloseRegion { .. } => "closeRegion",
            SessionStep::SetVisible { .. } => "setVisible",
            SessionStep::SelectLayers { .. } => "selectLayers",
            SessionStep::MoveSelected { .. } => "moveSelected",
            SessionStep::SetFrameImage { .. } => "setFrameImage",
            SessionStep::SetFrameAxis { .. } => "setFrameAxis",
            SessionStep::SetMaskColor { .. } => "setMaskColor",
            SessionStep::SetMaskAlpha { .. } => "setMaskAlpha",
            SessionStep::SetCompositionMode { .. } => "setCompositionMode",
            SessionStep::SetLayerName { .. } => "setLayerName",
            SessionStep::GroupLayers { .. } => "groupLayers",
            SessionStep::SetCoordinateSystem { .. } => "setCoordinateSystem",
            SessionStep::Pan { .. } => "pan",
            SessionStep::Zoom { .. } => "zoom",
            SessionStep::SetZoom { .. } => "setZoom",
            SessionStep::ResetPan { .. } => "resetPan",
            SessionStep::ResetZoom { .. } => "resetZoom",
            SessionStep::Load => "load",
            SessionStep::Render => "render",
            SessionStep::Save { .. } => "save",
        }
    }
}

impl SessionScript {
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(SessionError::Parse(
                "session must include at least one step".to_string(),
            ));
        }
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                SessionStep::SetZoom { zoom, .. } if !zoom.is_finite() || *zoom <= 0.0 => {
                    return Err(SessionError::Parse(format!(
                        "step {index}: zoom must be a positive number"
                    )));
                }
                SessionStep::AddImage { path } | SessionStep::Save { path }
                    if path.as_os_str().is_empty() =>
                {
                    return Err(SessionError::Parse(format!(
                        "step {index}: `{}` needs a path",
                        step.op()
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
