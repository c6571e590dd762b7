use serde::{Deserialize, Serialize};

use crate::model::{Point, ViewSize};

pub const MIN_ZOOM: f64 = 1.0 / 72.0;
pub const MAX_ZOOM: f64 = 32.0;

/// Multiplicative factor of one wheel step.
pub const ZOOM_STEP: f64 = 0.9;

/// Maps between screen pixels of the view and image pixels. `center` is the
/// image point drawn at the middle of the view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransform {
    pub zoom: f64,
    pub center: Point,
    pub view_size: ViewSize,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(1, 1, ViewSize::default())
    }
}

impl ViewTransform {
    pub fn new(image_width: usize, image_height: usize, view_size: ViewSize) -> Self {
        Self {
            zoom: 1.0,
            center: image_center(image_width, image_height),
            view_size,
        }
    }

    pub fn screen_to_image(&self, screen: Point) -> Point {
        let half = self.view_size.center();
        Point::new(
            self.center.x + (screen.x - half.x) / self.zoom,
            self.center.y + (screen.y - half.y) / self.zoom,
        )
    }

    pub fn image_to_screen(&self, image: Point) -> Point {
        let half = self.view_size.center();
        Point::new(
            half.x + (image.x - self.center.x) * self.zoom,
            half.y + (image.y - self.center.y) * self.zoom,
        )
    }

    /// Image point under `screen`, or `None` when it falls outside the image.
    pub fn image_pt(&self, screen: Point, image_width: usize, image_height: usize) -> Option<Point> {
        let image = self.screen_to_image(screen);
        let inside = (0.0..image_width as f64).contains(&image.x)
            && (0.0..image_height as f64).contains(&image.y);
        inside.then_some(image)
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() || zoom <= 0.0 {
            return;
        }
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    pub fn set_pan(&mut self, center: Point) {
        if center.x.is_finite() && center.y.is_finite() {
            self.center = center;
        }
    }

    pub fn reset_pan(&mut self, image_width: usize, image_height: usize) {
        self.center = image_center(image_width, image_height);
    }
}

pub fn image_center(image_width: usize, image_height: usize) -> Point {
    Point::new(image_width as f64 / 2.0, image_height as f64 / 2.0)
}

/// Next zoom level for a wheel step: a negative factor divides by
/// [`ZOOM_STEP`], anything else multiplies by it.
pub fn stepped_zoom(zoom: f64, factor: f64) -> f64 {
    if factor < 0.0 {
        zoom / ZOOM_STEP
    } else {
        zoom * ZOOM_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_ZOOM, ViewTransform, stepped_zoom};
    use crate::model::{Point, ViewSize};

    #[test]
    fn view_center_maps_to_pan_center() {
        let transform = ViewTransform::new(100, 50, ViewSize::new(200, 200));
        let image = transform.screen_to_image(Point::new(100.0, 100.0));
        assert_eq!(image, Point::new(50.0, 25.0));
        let back = transform.image_to_screen(image);
        assert!(back.distance(Point::new(100.0, 100.0)) < 1e-9);
    }

    #[test]
    fn points_outside_the_image_are_rejected() {
        let transform = ViewTransform::new(10, 10, ViewSize::new(100, 100));
        assert!(transform.image_pt(Point::new(50.0, 50.0), 10, 10).is_some());
        assert!(transform.image_pt(Point::new(0.0, 0.0), 10, 10).is_none());
    }

    #[test]
    fn zoom_is_clamped_and_validated() {
        let mut transform = ViewTransform::default();
        transform.set_zoom(1_000.0);
        assert_eq!(transform.zoom, MAX_ZOOM);
        transform.set_zoom(-2.0);
        assert_eq!(transform.zoom, MAX_ZOOM);
        transform.set_zoom(f64::NAN);
        assert_eq!(transform.zoom, MAX_ZOOM);
    }

    #[test]
    fn wheel_steps_follow_factor_sign() {
        assert!((stepped_zoom(1.0, -1.0) - 1.0 / 0.9).abs() < 1e-12);
        assert!((stepped_zoom(1.0, 1.0) - 0.9).abs() < 1e-12);
        assert!((stepped_zoom(2.0, 0.0) - 1.8).abs() < 1e-12);
    }
}
