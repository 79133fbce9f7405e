use eframe::egui::{Color32, Vec2, vec2};

use crate::assets::Raster;

pub(super) const BACKGROUND: Color32 = Color32::from_gray(25);
pub(super) const CENTER_LINE: [u8; 4] = [200, 100, 255, 50];

/// Linear remap of `value` from one range onto another. Values outside `from`
/// extrapolate; an empty `from` range maps everything to `to.0`.
pub(super) fn map_range(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    to.0 + ((value - from.0) / span) * (to.1 - to.0)
}

pub(super) fn pulse_scale(frame_index: u64, pulse_speed: f32, amplitude: f32) -> f32 {
    let phase = frame_index as f64 * f64::from(pulse_speed);
    1.0 + amplitude * phase.sin() as f32
}

/// Portrait width is a fraction of the canvas width capped at `max_width`; the height
/// follows the image's aspect ratio.
pub(super) fn portrait_size(
    raster: &Raster,
    canvas_size: Vec2,
    width_fraction: f32,
    max_width: f32,
) -> Vec2 {
    raster.size_for_width((canvas_size.x * width_fraction).min(max_width))
}

pub(super) fn rgba(color: [u8; 4]) -> Color32 {
    let [r, g, b, a] = color;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub(super) fn canvas_center(canvas_size: Vec2) -> Vec2 {
    vec2(canvas_size.x * 0.5, canvas_size.y * 0.5)
}
