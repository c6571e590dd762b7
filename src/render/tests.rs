use std::sync::mpsc::channel;
use std::time::Duration;

use tempfile::tempdir;

use super::save::{composite, output_size};
use super::{
    AspectRatio, ChannelDraw, DrawSynchronizer, PreviewSaveService, RenderRequest, SaveJob,
    SaveService,
};
use crate::layer::{ImageLayer, Layer};
use crate::model::{ImageMeta, MaskColor, SkyCs, ViewSize};

fn request(layers: Vec<Layer>, output: Option<ViewSize>) -> RenderRequest {
    RenderRequest {
        layers,
        frames: vec![0; 7],
        cs: SkyCs::J2000,
        top_index: Some(0),
        output_size: output,
    }
}

fn image(id: &str, width: usize, height: usize) -> Layer {
    Layer::Image(ImageLayer::new(
        id,
        ImageMeta::from_shape(&[width, height]),
        ViewSize::new(100, 100),
    ))
}

#[test]
fn channel_draw_forwards_requests_until_receiver_drops() {
    let (mut draw, receiver) = ChannelDraw::channel(ViewSize::new(40, 30));
    draw.render(request(vec![image("a", 4, 4)], None));
    let received = receiver.try_recv().expect("request");
    assert_eq!(received.layers.len(), 1);

    draw.resize(ViewSize::new(80, 60));
    assert_eq!(draw.client_size(), ViewSize::new(80, 60));
    drop(receiver);
    draw.render(request(Vec::new(), None));
}

#[test]
fn output_size_follows_aspect_mode() {
    let req = request(vec![image("a", 200, 100)], Some(ViewSize::new(100, 100)));
    assert_eq!(output_size(&req, AspectRatio::Ignore), ViewSize::new(100, 100));
    assert_eq!(output_size(&req, AspectRatio::Keep), ViewSize::new(100, 50));
    assert_eq!(output_size(&req, AspectRatio::Expand), ViewSize::new(200, 100));
}

#[test]
fn composite_blends_masks_in_stack_order() {
    let mut top = image("b", 2, 2);
    top.node_mut().set_mask_color(MaskColor {
        red: 255,
        green: 0,
        blue: 0,
    });
    top.node_mut().set_mask_alpha(0);
    let req = request(vec![image("a", 2, 2), top], None);

    let canvas = composite(&req, ViewSize::new(3, 2));
    assert_eq!(canvas.dimensions(), (3, 2));
    assert_eq!(canvas.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn preview_service_reports_completion() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("stack.png");
    let (sender, receiver) = channel();
    let job = SaveJob {
        file_name: path.clone(),
        aspect_ratio: AspectRatio::Keep,
        request: request(vec![image("a", 8, 4)], Some(ViewSize::new(16, 16))),
    };
    assert!(PreviewSaveService.save_image(job, Box::new(move |ok| {
        let _ = sender.send(ok);
    })));
    let ok = receiver
        .recv_timeout(Duration::from_secs(10))
        .expect("completion");
    assert!(ok);
    assert_eq!(image::image_dimensions(&path).expect("saved"), (16, 8));
}

#[test]
fn preview_service_rejects_unknown_extensions() {
    let job = SaveJob {
        file_name: "stack.fits".into(),
        aspect_ratio: AspectRatio::Ignore,
        request: request(Vec::new(), None),
    };
    assert!(!PreviewSaveService.save_image(job, Box::new(|_| {})));
}
