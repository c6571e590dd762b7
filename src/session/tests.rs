use std::path::Path;

use serde_json::json;
use tempfile::tempdir;

use super::{SessionScript, SessionStep, load_script, run_session, save_report};
use crate::config::StackConfig;
use crate::events::StackEvent;
use crate::formats::DefaultImageLoader;
use crate::model::AxisKind;
use crate::render::PreviewSaveService;

fn write_cube(dir: &Path, name: &str, channels: usize) -> std::path::PathBuf {
    let path = dir.join(name);
    let header = json!({
        "dims": [
            {"axis": "directionLon", "size": 32},
            {"axis": "directionLat", "size": 16},
            {"axis": "spectral", "size": channels},
        ],
        "title": name,
    });
    std::fs::write(&path, header.to_string()).expect("write header");
    path
}

#[test]
fn session_runs_steps_in_order_and_records_failures() {
    let dir = tempdir().expect("tempdir");
    let first = write_cube(dir.path(), "first.json", 12);
    let second = write_cube(dir.path(), "second.json", 4);
    let script = SessionScript {
        name: Some("demo".to_string()),
        steps: vec![
            SessionStep::AddImage { path: first },
            SessionStep::AddImage { path: second },
            SessionStep::SetFrameImage { index: 0 },
            SessionStep::SetFrameAxis {
                axis: AxisKind::Spectral,
                frame: 9,
            },
            SessionStep::CloseRegion {
                id: "missing".to_string(),
            },
            SessionStep::Load,
            SessionStep::Render,
            SessionStep::Save {
                path: dir.path().join("stack.png"),
            },
        ],
    };

    let report = run_session(
        &script,
        &StackConfig::default(),
        &DefaultImageLoader,
        &PreviewSaveService,
    )
    .expect("session");

    assert_eq!(report.steps.len(), 8);
    assert_eq!(report.failures(), 1);
    assert_eq!(
        report.steps[4].message.as_deref(),
        Some("Could not find region to remove for id=missing")
    );
    assert_eq!(report.steps[0].message.as_deref(), Some("image1"));
    assert_eq!(report.renders, 2);
    assert_eq!(report.current_id.as_deref(), Some("image1"));
    assert!(
        report
            .events
            .contains(&StackEvent::FrameChanged(AxisKind::Spectral))
    );
    assert!(report.events.contains(&StackEvent::SaveImageResult(true)));
    assert_eq!(report.final_state["Channel"], json!(r#"{"index":9,"upperBound":12}"#));
    assert!(dir.path().join("stack.png").exists());
}

#[test]
fn scripts_load_from_yaml_and_reports_save() {
    let dir = tempdir().expect("tempdir");
    let cube = write_cube(dir.path(), "cube.json", 3);
    let script_path = dir.path().join("session.yaml");
    std::fs::write(
        &script_path,
        format!(
            "name: yaml\nsteps:\n  - op: addImage\n    path: {}\n  - op: setZoom\n    zoom: 2.0\n    all: true\n  - op: addGroup\n",
            cube.display()
        ),
    )
    .expect("write script");

    let script = load_script(&script_path).expect("script");
    assert_eq!(script.steps.len(), 3);
    assert_eq!(script.steps[2], SessionStep::AddGroup);

    let report = run_session(
        &script,
        &StackConfig::default(),
        &DefaultImageLoader,
        &PreviewSaveService,
    )
    .expect("session");
    assert_eq!(report.failures(), 0);
    assert_eq!(report.layer_ids, vec!["image1", "group2"]);

    let report_path = dir.path().join("report.json");
    save_report(&report_path, &report).expect("save report");
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read")).expect("json");
    assert_eq!(saved["session_name"], json!("yaml"));
}

#[test]
fn invalid_scripts_are_rejected() {
    let empty = SessionScript {
        name: None,
        steps: vec![],
    };
    assert!(empty.validate().is_err());

    let zero_zoom = SessionScript {
        name: None,
        steps: vec![SessionStep::SetZoom {
            zoom: 0.0,
            all: false,
        }],
    };
    assert!(zero_zoom.validate().is_err());

    let step: SessionStep =
        serde_json::from_value(json!({"op": "setMaskColor", "id": "image1", "red": 1, "green": 2, "blue": 3}))
            .expect("step");
    assert_eq!(step.op(), "setMaskColor");
    assert!(serde_json::from_value::<SessionStep>(json!({"op": "explode"})).is_err());
}
