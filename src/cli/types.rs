use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "stack",
    version,
    about = "Multi-layer astronomical image stack: frames, regions and saved state"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints the shape and axes of an image as JSON.
    Info {
        input: PathBuf,
    },
    /// Lists the known axes and their names under a sky coordinate system.
    Axes {
        #[arg(long, default_value = "j2000")]
        cs: String,
    },
    /// Runs a session script against a fresh stack.
    Run {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct ImageInfo {
    pub(super) shape: Vec<usize>,
    pub(super) ndim: usize,
    pub(super) axes: Vec<String>,
    pub(super) frames: BTreeMap<String, usize>,
    pub(super) title: Option<String>,
    pub(super) source: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct AxisRow {
    pub(super) slot: usize,
    pub(super) axis: String,
    pub(super) purpose: &'static str,
}
