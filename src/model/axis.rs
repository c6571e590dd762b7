use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    DirectionLon,
    DirectionLat,
    Spectral,
    Stokes,
    Tabular,
    Quality,
    Linear,
    Other,
}

impl AxisKind {
    /// Every axis kind that gets frame bookkeeping; `Other` is the sentinel.
    /// Position in this array is the axis selection slot.
    pub const KNOWN: [AxisKind; 7] = [
        AxisKind::DirectionLon,
        AxisKind::DirectionLat,
        AxisKind::Spectral,
        AxisKind::Stokes,
        AxisKind::Tabular,
        AxisKind::Quality,
        AxisKind::Linear,
    ];

    pub const KNOWN_COUNT: usize = Self::KNOWN.len();

    pub fn slot(self) -> Option<usize> {
        Self::KNOWN.iter().position(|known| *known == self)
    }

    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::KNOWN.get(slot).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            AxisKind::DirectionLon => "directionLon",
            AxisKind::DirectionLat => "directionLat",
            AxisKind::Spectral => "spectral",
            AxisKind::Stokes => "stokes",
            AxisKind::Tabular => "tabular",
            AxisKind::Quality => "quality",
            AxisKind::Linear => "linear",
            AxisKind::Other => "other",
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxisKind {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.trim().to_ascii_lowercase();
        let kind = match lowered.as_str() {
            "directionlon" | "lon" | "ra" => AxisKind::DirectionLon,
            "directionlat" | "lat" | "dec" => AxisKind::DirectionLat,
            "spectral" | "channel" | "frequency" => AxisKind::Spectral,
            "stokes" => AxisKind::Stokes,
            "tabular" => AxisKind::Tabular,
            "quality" => AxisKind::Quality,
            "linear" => AxisKind::Linear,
            "other" => AxisKind::Other,
            _ => return Err(CoreError::UnknownAxis(value.to_string())),
        };
        Ok(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SkyCs {
    #[default]
    J2000,
    B1950,
    Icrs,
    Galactic,
    Ecliptic,
}

impl FromStr for SkyCs {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "j2000" => Ok(SkyCs::J2000),
            "b1950" => Ok(SkyCs::B1950),
            "icrs" => Ok(SkyCs::Icrs),
            "galactic" => Ok(SkyCs::Galactic),
            "ecliptic" => Ok(SkyCs::Ecliptic),
            _ => Err(CoreError::UnknownCoordinateSystem(value.to_string())),
        }
    }
}

/// Human-facing name of an axis under a sky coordinate system. Also used as
/// the persisted key of the axis selection, so names are unique per system.
pub fn axis_purpose(axis: AxisKind, cs: SkyCs) -> &'static str {
    match (axis, cs) {
        (AxisKind::DirectionLon, SkyCs::Galactic) => "Galactic Longitude",
        (AxisKind::DirectionLat, SkyCs::Galactic) => "Galactic Latitude",
        (AxisKind::DirectionLon, SkyCs::Ecliptic) => "Ecliptic Longitude",
        (AxisKind::DirectionLat, SkyCs::Ecliptic) => "Ecliptic Latitude",
        (AxisKind::DirectionLon, _) => "Right Ascension",
        (AxisKind::DirectionLat, _) => "Declination",
        (AxisKind::Spectral, _) => "Channel",
        (AxisKind::Stokes, _) => "Stokes",
        (AxisKind::Tabular, _) => "Tabular",
        (AxisKind::Quality, _) => "Quality",
        (AxisKind::Linear, _) => "Linear",
        (AxisKind::Other, _) => "Other",
    }
}

pub fn default_axis_for_index(index: usize) -> AxisKind {
    match index {
        0 => AxisKind::DirectionLon,
        1 => AxisKind::DirectionLat,
        2 => AxisKind::Spectral,
        3 => AxisKind::Stokes,
        _ => AxisKind::Other,
    }
}
