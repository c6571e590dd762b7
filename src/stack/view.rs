use std::path::Path;

use log::{debug, info, warn};
use serde_json::Value;

use crate::events::StackEvent;
use crate::layer::{ClipSettings, Layer, stepped_zoom};
use crate::model::{AxisKind, Point, SkyCs, ViewSize};
use crate::render::{RenderRequest, SaveJob, SaveService};

use super::{Result, Stack, StackError};

impl Stack {
    /// Centers the view on the image point `center`.
    pub fn set_pan(&mut self, center: Point, all: bool) {
        for layer in self.targets_mut(all) {
            layer.node_mut().set_pan(center);
        }
        self.emit(StackEvent::ViewLoad);
    }

    /// Centers the view on whatever image point lies under `screen`.
    pub fn update_pan(&mut self, screen: Point, all: bool) {
        for layer in self.targets_mut(all) {
            if let Some(center) = layer.node().image_pt(screen) {
                layer.node_mut().set_pan(center);
            }
        }
        self.emit(StackEvent::ViewLoad);
    }

    pub fn set_zoom_level(&mut self, zoom: f64, all: bool) {
        for layer in self.targets_mut(all) {
            layer.node_mut().set_zoom(zoom);
        }
        self.emit(StackEvent::ViewLoad);
    }

    /// One zoom step anchored at `screen`: the image point under it stays
    /// under it. A negative `factor` divides the zoom by 0.9, anything else
    /// multiplies it by 0.9.
    pub fn update_zoom(&mut self, screen: Point, factor: f64, all: bool) {
        for layer in self.targets_mut(all) {
            zoom_anchored(layer, screen, factor);
        }
        self.emit(StackEvent::ViewLoad);
    }

    pub fn reset_pan(&mut self, all: bool) {
        for layer in self.targets_mut(all) {
            layer.node_mut().reset_pan();
        }
        self.emit(StackEvent::ViewLoad);
    }

    pub fn reset_zoom(&mut self, all: bool) {
        for layer in self.targets_mut(all) {
            layer.node_mut().reset_zoom();
        }
        self.emit(StackEvent::ViewLoad);
    }

    /// Ignored while no layer is current.
    pub fn grid_changed(&mut self, grid: &Value, all: bool) {
        if self.index_current().is_none() {
            return;
        }
        for layer in self.targets_mut(all) {
            layer.node_mut().grid_changed(grid);
        }
        self.emit(StackEvent::ViewLoad);
    }

    pub fn display_axes_changed(&mut self, axes: &[AxisKind], all: bool) {
        let frames = self.frame_indices();
        for layer in self.targets_mut(all) {
            layer.node_mut().display_axes_changed(axes, &frames);
        }
        self.emit(StackEvent::ViewLoad);
    }

    /// Lays every layer out for the draw collaborator's current size.
    pub fn view_resize(&mut self) {
        let size = self.draw.client_size();
        for layer in self.group.children_mut() {
            layer.node_mut().view_resize(size);
        }
        self.emit(StackEvent::ViewLoad);
    }

    pub fn resize_view(&mut self, size: ViewSize) {
        debug!("view resized to {}x{}", size.width, size.height);
        self.draw.resize(size);
        self.view_resize();
    }

    /// Loads every layer at the selected frames and redraws.
    pub fn load(&mut self, recompute_clips: bool, min_percentile: f64, max_percentile: f64) {
        let frames = self.frame_indices();
        let clip = ClipSettings {
            recompute_on_new_frame: recompute_clips,
            min_percentile,
            max_percentile,
        };
        for layer in self.group.children_mut() {
            layer.node_mut().load(&frames, clip);
        }
        self.render_all();
    }

    /// Submits the visible layers to the draw collaborator.
    pub fn render_all(&mut self) {
        let request = self.render_request(None);
        self.draw.render(request);
    }

    pub fn set_coordinate_system(&mut self, cs: SkyCs) -> Result<bool> {
        if self.cs == cs {
            return Ok(false);
        }
        self.cs = cs;
        self.save_state()?;
        self.emit(StackEvent::ViewLoad);
        Ok(true)
    }

    /// Starts exporting the composite to `path`. Completion is reported with
    /// a `SaveImageResult` event from the thread that finishes the job.
    pub fn save_image(&mut self, path: impl AsRef<Path>, service: &dyn SaveService) -> Result<()> {
        let path = path.as_ref();
        let save = self.config.save;
        let job = SaveJob {
            file_name: path.to_path_buf(),
            aspect_ratio: save.aspect_ratio,
            request: self.render_request(Some(save.size())),
        };
        let emitter = self.events.emitter();
        let started = service.save_image(
            job,
            Box::new(move |ok| emitter.emit(StackEvent::SaveImageResult(ok))),
        );
        if !started {
            warn!("save of {} was not started", path.display());
            return Err(StackError::SaveNotStarted);
        }
        info!("saving stack to {}", path.display());
        Ok(())
    }

    fn render_request(&self, output_size: Option<ViewSize>) -> RenderRequest {
        let layers = self
            .group
            .drawable()
            .map(|(_, layer)| layer.clone())
            .collect();
        RenderRequest {
            layers,
            frames: self.frame_indices(),
            cs: self.cs,
            top_index: self.index_current(),
            output_size,
        }
    }
}

fn zoom_anchored(layer: &mut Layer, screen: Point, factor: f64) {
    let Some(before) = layer.node().image_pt(screen) else {
        return;
    };
    let zoom = stepped_zoom(layer.node().zoom(), factor);
    layer.node_mut().set_zoom(zoom);
    let Some(after) = layer.node().screen_to_image(screen) else {
        return;
    };
    if let Some(center) = layer.node().center_pixel() {
        layer.node_mut().set_pan(center + (before - after));
    }
}
