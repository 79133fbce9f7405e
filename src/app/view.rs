use eframe::egui::{Stroke, Vec2};

use crate::assets::Raster;
use crate::config::PlexusConfig;

use super::connections::{connections_for, stroke_width};
use super::nodes::{NodeKind, NodeStore};
use super::physics::advance_node;
use super::render_utils::{
    BACKGROUND, CENTER_LINE, canvas_center, portrait_size, pulse_scale, rgba,
};
use super::surface::Surface;

/// Draw-call counts for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::app) struct FrameStats {
    pub(in crate::app) nodes: usize,
    pub(in crate::app) images: usize,
    pub(in crate::app) lines: usize,
}

/// Renders one frame: background, portrait, then for every node in store order its
/// motion step, its own draw call and the lines it draws to its neighbours.
///
/// Nodes later in the store are drawn on top. A node's lines are drawn before later
/// nodes have moved this frame.
pub(in crate::app) fn render_frame(
    surface: &mut impl Surface,
    store: &mut NodeStore,
    config: &PlexusConfig,
    canvas_size: Vec2,
    frame_index: u64,
    portrait: Option<Raster>,
) -> FrameStats {
    let mut stats = FrameStats::default();
    let center = canvas_center(canvas_size);

    surface.background(BACKGROUND);

    if let Some(raster) = portrait {
        let size = portrait_size(
            &raster,
            canvas_size,
            config.portrait_width_fraction,
            config.portrait_max_width,
        );
        surface.image(raster.texture, center.to_pos2(), size);
        stats.images += 1;
    }

    let motion = config.motion();
    for index in 0..store.len() {
        advance_node(store, index, canvas_size, motion);

        let nodes = store.nodes();
        let node = &nodes[index];
        let position = node.position.to_pos2();
        stats.nodes += 1;

        match &node.kind {
            NodeKind::Image(image) => {
                if let Some(raster) = image.image {
                    let scale = pulse_scale(frame_index, node.pulse_speed, config.pulse_amplitude);
                    let size = raster.size_for_width(image.base_size * scale);
                    surface.image(raster.texture, position, size);
                    stats.images += 1;
                }
            }
            NodeKind::Dot(dot) => {
                surface.ellipse(position, dot.size, rgba(dot.color));
            }
        }

        let width = stroke_width(node);
        for connection in connections_for(index, nodes, config.connection_distance) {
            surface.line(
                position,
                connection.other.position.to_pos2(),
                Stroke::new(width, connection.color()),
            );
            stats.lines += 1;
        }

        if node.is_image() {
            surface.line(
                center.to_pos2(),
                position,
                Stroke::new(width, rgba(CENTER_LINE)),
            );
            stats.lines += 1;
        }
    }

    stats
}
