use std::path::{Path, PathBuf};
use std::thread;

use image::{DynamicImage, Rgba, RgbaImage};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::layer::{ImageLayer, Layer};
use crate::model::ViewSize;

use super::RenderRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AspectRatio {
    /// Use the requested size as is.
    Ignore,
    /// Largest size inside the requested one with the image's proportions.
    #[default]
    Keep,
    /// Smallest size around the requested one with the image's proportions.
    Expand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveJob {
    pub file_name: PathBuf,
    pub aspect_ratio: AspectRatio,
    pub request: RenderRequest,
}

pub type SaveCallback = Box<dyn FnOnce(bool) + Send + 'static>;

/// Collaborator that exports a composite to disk. Returns whether the job was
/// started; `on_complete` runs once with the outcome of a started job.
pub trait SaveService {
    fn save_image(&self, job: SaveJob, on_complete: SaveCallback) -> bool;
}

/// Writes a flat preview of the composite: each layer contributes its mask
/// color blended with its mask opacity, in stack order.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreviewSaveService;

impl PreviewSaveService {
    pub fn supports(path: &Path) -> bool {
        path.extension()
            .and_then(|value| value.to_str())
            .map(|value| value.to_ascii_lowercase())
            .is_some_and(|ext| matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "tif" | "tiff"))
    }
}

impl SaveService for PreviewSaveService {
    fn save_image(&self, job: SaveJob, on_complete: SaveCallback) -> bool {
        if !Self::supports(&job.file_name) {
            warn!("refusing to save {}: unsupported extension", job.file_name.display());
            return false;
        }
        thread::spawn(move || {
            let path = job.file_name.clone();
            let outcome = write_preview(&job);
            match &outcome {
                Ok(()) => info!("saved preview {}", path.display()),
                Err(err) => warn!("saving {} failed: {err}", path.display()),
            }
            on_complete(outcome.is_ok());
        });
        true
    }
}

fn write_preview(job: &SaveJob) -> image::ImageResult<()> {
    let size = output_size(&job.request, job.aspect_ratio);
    let canvas = composite(&job.request, size);
    let is_jpeg = job
        .file_name
        .extension()
        .and_then(|value| value.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"));
    let image = DynamicImage::ImageRgba8(canvas);
    if is_jpeg {
        DynamicImage::ImageRgb8(image.to_rgb8()).save(&job.file_name)
    } else {
        image.save(&job.file_name)
    }
}

pub(crate) fn output_size(request: &RenderRequest, aspect: AspectRatio) -> ViewSize {
    let requested = request.output_size.unwrap_or(ViewSize::new(1, 1));
    let requested = ViewSize::new(requested.width.max(1), requested.height.max(1));
    let Some((image_width, image_height)) = reference_size(request) else {
        return requested;
    };
    let scale_x = f64::from(requested.width) / image_width as f64;
    let scale_y = f64::from(requested.height) / image_height as f64;
    let scale = match aspect {
        AspectRatio::Ignore => return requested,
        AspectRatio::Keep => scale_x.min(scale_y),
        AspectRatio::Expand => scale_x.max(scale_y),
    };
    ViewSize::new(
        ((image_width as f64 * scale).round() as u32).max(1),
        ((image_height as f64 * scale).round() as u32).max(1),
    )
}

fn reference_size(request: &RenderRequest) -> Option<(usize, usize)> {
    request
        .layers
        .iter()
        .find_map(first_image)
        .map(|image| (image.meta().width().max(1), image.meta().height().max(1)))
}

fn first_image(layer: &Layer) -> Option<&ImageLayer> {
    match layer {
        Layer::Image(image) => Some(image),
        Layer::Group(group) => group.children().iter().find_map(first_image),
    }
}

fn collect_masks(layer: &Layer, out: &mut Vec<Rgba<u8>>) {
    if !layer.node().is_visible() || layer.node().is_empty() {
        return;
    }
    match layer {
        Layer::Image(image) => {
            let mask = image.mask();
            out.push(Rgba([mask.red, mask.green, mask.blue, image.mask_alpha()]));
        }
        Layer::Group(group) => {
            for child in group.children() {
                collect_masks(child, out);
            }
        }
    }
}

pub(crate) fn composite(request: &RenderRequest, size: ViewSize) -> RgbaImage {
    let mut masks = Vec::new();
    for layer in &request.layers {
        collect_masks(layer, &mut masks);
    }
    let mut color = [0.0_f64; 3];
    let mut coverage = 0.0_f64;
    for mask in masks {
        let alpha = f64::from(mask[3]) / 255.0;
        for (channel, value) in color.iter_mut().zip(mask.0) {
            *channel = f64::from(value) * alpha + *channel * (1.0 - alpha);
        }
        coverage = alpha + coverage * (1.0 - alpha);
    }
    let pixel = Rgba([
        color[0].round() as u8,
        color[1].round() as u8,
        color[2].round() as u8,
        (coverage * 255.0).round() as u8,
    ]);
    RgbaImage::from_pixel(size.width, size.height, pixel)
}
