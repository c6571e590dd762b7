use std::str::FromStr;

use clap::Parser;
use log::info;

use crate::model::{AxisKind, SkyCs, axis_purpose};
use crate::runtime::AppContext;

use super::types::{AxisRow, Cli, Commands, ImageInfo};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => {
            let app = AppContext::new();
            let meta = app
                .image_service()
                .read_meta(&input)
                .map_err(|error| error.to_string())?;
            let frames = AxisKind::KNOWN
                .into_iter()
                .filter(|axis| meta.axis_index(*axis).is_some())
                .map(|axis| (axis.name().to_string(), meta.frame_count(axis)))
                .collect();
            let info = ImageInfo {
                shape: meta.shape(),
                ndim: meta.ndim(),
                axes: meta
                    .axis_types()
                    .into_iter()
                    .map(|axis| axis.name().to_string())
                    .collect(),
                frames,
                title: meta.title.clone(),
                source: meta.source.as_ref().map(|path| path.display().to_string()),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
        }
        Commands::Axes { cs } => {
            let cs = SkyCs::from_str(&cs).map_err(|error| error.to_string())?;
            let rows = AxisKind::KNOWN
                .into_iter()
                .enumerate()
                .map(|(slot, axis)| AxisRow {
                    slot,
                    axis: axis.name().to_string(),
                    purpose: axis_purpose(axis, cs),
                })
                .collect::<Vec<_>>();
            println!(
                "{}",
                serde_json::to_string_pretty(&rows).map_err(|error| error.to_string())?
            );
        }
        Commands::Run {
            script,
            config,
            report,
        } => {
            let app = match config {
                Some(path) => AppContext::with_config_file(path).map_err(|error| error.to_string())?,
                None => AppContext::new(),
            };
            let session = app
                .session_service()
                .load_script(&script)
                .map_err(|error| error.to_string())?;
            info!("running session {}", script.display());
            let run_report = app
                .session_service()
                .run(&session, app.config())
                .map_err(|error| error.to_string())?;
            if let Some(report_path) = report {
                app.session_service()
                    .save_report(report_path, &run_report)
                    .map_err(|error| error.to_string())?;
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&run_report).map_err(|error| error.to_string())?
            );
        }
    }

    Ok(())
}
