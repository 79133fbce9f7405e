use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, TextureId, Vec2, pos2};

/// Draw calls issued by the renderer, in canvas coordinates with the origin at the
/// canvas' top-left corner.
pub(in crate::app) trait Surface {
    fn background(&mut self, color: Color32);
    /// Draws `texture` stretched to `size`, centred on `center`.
    fn image(&mut self, texture: TextureId, center: Pos2, size: Vec2);
    fn ellipse(&mut self, center: Pos2, diameter: f32, fill: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);
}

pub(in crate::app) struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub(in crate::app) fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.rect.min + point.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn background(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn image(&mut self, texture: TextureId, center: Pos2, size: Vec2) {
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        self.painter.image(
            texture,
            Rect::from_center_size(self.to_screen(center), size),
            uv,
            Color32::WHITE,
        );
    }

    fn ellipse(&mut self, center: Pos2, diameter: f32, fill: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), diameter * 0.5, fill);
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], stroke);
    }
}
