use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::StackConfig;
use crate::events::StackEvent;
use crate::formats::ImageLoader;
use crate::model::Point;
use crate::render::{ChannelDraw, SaveService};
use crate::stack::{self, Stack};

use super::{Result, SessionReport, SessionScript, SessionStep, StepReport};

/// Upper bound on waiting for one started save to report back.
const SAVE_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs every step against a fresh stack. A failing step is recorded in the
/// report and the session carries on.
pub fn run_session(
    script: &SessionScript,
    config: &StackConfig,
    loader: &dyn ImageLoader,
    saver: &dyn SaveService,
) -> Result<SessionReport> {
    script.validate()?;

    let (draw, renders) = ChannelDraw::channel(config.view);
    let mut stack = Stack::new(*config, Box::new(draw))?;
    let events = stack.subscribe();
    let mut steps = Vec::with_capacity(script.steps.len());
    let mut pending_saves = 0_usize;

    for (index, step) in script.steps.iter().enumerate() {
        let started = Instant::now();
        let outcome = apply(&mut stack, step, config, loader, saver);
        let duration_ms = started.elapsed().as_millis();
        let (ok, message) = match outcome {
            Ok(message) => {
                if matches!(step, SessionStep::Save { .. }) {
                    pending_saves += 1;
                }
                (true, message)
            }
            Err(err) => {
                warn!("step {index} ({}) failed: {err}", step.op());
                (false, Some(err.to_string()))
            }
        };
        steps.push(StepReport {
            op: step.op().to_string(),
            duration_ms,
            ok,
            message,
        });
    }

    let mut collected: Vec<StackEvent> = events.try_iter().collect();
    let mut finished = count_saves(&collected);
    while finished < pending_saves {
        match events.recv_timeout(SAVE_TIMEOUT) {
            Ok(event) => {
                collected.push(event);
                finished = count_saves(&collected);
            }
            Err(_) => {
                warn!("{} save(s) did not report back", pending_saves - finished);
                break;
            }
        }
    }

    let final_state = serde_json::from_str(&stack.state_string()?)?;
    let report = SessionReport {
        session_name: script.name.clone(),
        steps,
        renders: renders.try_iter().count(),
        events: collected,
        layer_ids: stack.layer_ids(),
        current_id: stack.current_id(),
        final_state,
    };
    info!(
        "session {} finished: {} step(s), {} failure(s)",
        script.name.as_deref().unwrap_or("<unnamed>"),
        report.steps.len(),
        report.failures()
    );
    Ok(report)
}

fn count_saves(events: &[StackEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, StackEvent::SaveImageResult(_)))
        .count()
}

fn apply(
    stack: &mut Stack,
    step: &SessionStep,
    config: &StackConfig,
    loader: &dyn ImageLoader,
    saver: &dyn SaveService,
) -> stack::Result<Option<String>> {
    let changed = |changed: bool| Some(if changed { "changed" } else { "unchanged" }.to_string());
    let message = match step {
        SessionStep::AddImage { path } => Some(stack.add_data_image(path, loader)?),
        SessionStep::AddGroup => Some(stack.add_group()?),
        SessionStep::CloseLayer { id } => changed(stack.close_data(id)?),
        SessionStep::AddRegion { region } => {
            stack.add_data_regions([region.clone()])?;
            None
        }
        SessionStep::CloseRegion { id } => {
            stack.close_region(id)?;
            None
        }
        SessionStep::SetVisible { id, visible } => changed(stack.set_visible(id, *visible)?),
        SessionStep::SelectLayers { ids } => changed(stack.set_selected(ids)?),
        SessionStep::MoveSelected { down } => {
            stack.move_selected_layers(*down)?;
            None
        }
        SessionStep::SetFrameImage { index } => stack.set_frame_image(*index),
        SessionStep::SetFrameAxis { axis, frame } => changed(stack.set_frame_axis(*frame, *axis)),
        SessionStep::SetMaskColor {
            id,
            red,
            green,
            blue,
        } => changed(stack.set_mask_color(id, *red, *green, *blue)?),
        SessionStep::SetMaskAlpha { id, alpha } => changed(stack.set_mask_alpha(id, *alpha)?),
        SessionStep::SetCompositionMode { id, mode } => {
            changed(stack.set_composition_mode(id, mode)?)
        }
        SessionStep::SetLayerName { id, name } => changed(stack.set_layer_name(id, name)?),
        SessionStep::GroupLayers { grouped } => changed(stack.set_layers_grouped(*grouped)?),
        SessionStep::SetCoordinateSystem { cs } => changed(stack.set_coordinate_system(*cs)?),
        SessionStep::Pan { x, y, all } => {
            stack.update_pan(Point::new(*x, *y), *all);
            None
        }
        SessionStep::Zoom { x, y, factor, all } => {
            stack.update_zoom(Point::new(*x, *y), *factor, *all);
            None
        }
        SessionStep::SetZoom { zoom, all } => {
            stack.set_zoom_level(*zoom, *all);
            None
        }
        SessionStep::ResetPan { all } => {
            stack.reset_pan(*all);
            None
        }
        SessionStep::ResetZoom { all } => {
            stack.reset_zoom(*all);
            None
        }
        SessionStep::Load => {
            let clip = config.clip;
            stack.load(
                clip.recompute_on_new_frame,
                clip.min_percentile,
                clip.max_percentile,
            );
            None
        }
        SessionStep::Render => {
            stack.render_all();
            None
        }
        SessionStep::Save { path } => {
            stack.save_image(path, saver)?;
            None
        }
    };
    Ok(message)
}
