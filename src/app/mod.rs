use eframe::egui::{self, Align2, Color32, Context, FontId, Sense, Ui, Vec2, vec2};

use crate::assets::AssetLibrary;
use crate::config::PlexusConfig;

mod connections;
mod fps;
mod nodes;
mod physics;
mod render_utils;
mod surface;
mod view;

use fps::FpsCounter;
use nodes::NodeStore;
use surface::PainterSurface;

/// Drives the animation: owns the node store, the frame counter and the loaded images,
/// and renders one frame per repaint.
pub struct PlexusApp {
    config: PlexusConfig,
    assets: AssetLibrary,
    // Populated on the first frame, once the canvas size is known.
    store: Option<NodeStore>,
    frame_index: u64,
    canvas_size: Vec2,
    fps: FpsCounter,
}

impl PlexusApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: PlexusConfig) -> Self {
        let assets = AssetLibrary::load(&cc.egui_ctx, &config.assets);
        Self {
            config,
            assets,
            store: None,
            frame_index: 0,
            canvas_size: Vec2::ZERO,
            fps: FpsCounter::default(),
        }
    }

    fn draw_canvas(&mut self, ui: &mut Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);

        let canvas_size = rect.size();
        if canvas_size != self.canvas_size {
            log::debug!("canvas resized to {}x{}", canvas_size.x, canvas_size.y);
            self.canvas_size = canvas_size;
        }

        let config = &self.config;
        let assets = &self.assets;
        let store = self.store.get_or_insert_with(|| {
            let store = NodeStore::populate(
                config,
                &assets.achievement_rasters(),
                canvas_size,
                &mut rand::thread_rng(),
            );
            log::info!(
                "Initialized {} nodes ({} images, {} dots)",
                store.len(),
                store.image_count(),
                store.len() - store.image_count()
            );
            store
        });

        self.frame_index += 1;
        let mut surface = PainterSurface::new(&painter, rect);
        let stats = view::render_frame(
            &mut surface,
            store,
            config,
            canvas_size,
            self.frame_index,
            assets.portrait(),
        );

        if config.show_fps {
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                self.fps.display_text(stats),
                FontId::monospace(13.0),
                Color32::from_gray(230),
            );
        }
    }
}

impl eframe::App for PlexusApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.fps.record(ctx.input(|input| input.stable_dt));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_canvas(ui));

        ctx.request_repaint();
    }
}
