use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{AxisKind, CoreError, Result, default_axis_for_index};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dim {
    pub axis: AxisKind,
    pub size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Dim {
    pub fn new(axis: AxisKind, size: usize) -> Self {
        Self {
            axis,
            size,
            unit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageMeta {
    pub dims: Vec<Dim>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl ImageMeta {
    pub fn from_shape(shape: &[usize]) -> Self {
        let dims = shape
            .iter()
            .enumerate()
            .map(|(index, size)| Dim::new(default_axis_for_index(index), *size))
            .collect();
        Self {
            dims,
            ..Self::default()
        }
    }

    pub fn shape(&self) -> Vec<usize> {
        self.dims.iter().map(|d| d.size).collect()
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn width(&self) -> usize {
        self.dims.first().map_or(0, |d| d.size)
    }

    pub fn height(&self) -> usize {
        self.dims.get(1).map_or(0, |d| d.size)
    }

    pub fn axis_index(&self, axis: AxisKind) -> Option<usize> {
        self.dims.iter().position(|d| d.axis == axis)
    }

    pub fn axis_types(&self) -> Vec<AxisKind> {
        self.dims.iter().map(|d| d.axis).collect()
    }

    /// Number of frames along `axis`; an axis the image lacks has one frame.
    pub fn frame_count(&self, axis: AxisKind) -> usize {
        self.axis_index(axis)
            .map_or(1, |index| self.dims[index].size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dims.len() < 2 {
            return Err(CoreError::TooFewDimensions(self.dims.len()));
        }
        for (axis, dim) in self.dims.iter().enumerate() {
            if dim.size == 0 {
                return Err(CoreError::ZeroSizedDimension { axis });
            }
        }
        for (index, dim) in self.dims.iter().enumerate() {
            if dim.axis == AxisKind::Other {
                continue;
            }
            if self.dims[..index].iter().any(|d| d.axis == dim.axis) {
                return Err(CoreError::DuplicateAxis(dim.axis));
            }
        }
        Ok(())
    }
}
