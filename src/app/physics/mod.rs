mod forces;

use eframe::egui::{Vec2, vec2};

use crate::config::MotionConfig;

use super::nodes::{NodeKind, NodeStore};
use forces::{accumulate_repulsion, reflect_axis};

pub(in crate::app) fn orbit_radius(canvas_size: Vec2, radius_factor: f32) -> f32 {
    canvas_size.x.min(canvas_size.y) * radius_factor
}

/// Point on the orbit circle around the canvas centre at `angle`.
pub(in crate::app) fn orbit_target(canvas_size: Vec2, radius_factor: f32, angle: f32) -> Vec2 {
    canvas_size * 0.5 + vec2(angle.cos(), angle.sin()) * orbit_radius(canvas_size, radius_factor)
}

/// Advances every node by one frame, in store order.
pub(in crate::app) fn advance(
    store: &mut NodeStore,
    canvas_size: Vec2,
    frame_index: u64,
    config: MotionConfig,
) {
    for index in 0..store.len() {
        advance_node(store, index, canvas_size, config);
    }
    log::trace!("advanced {} nodes for frame {frame_index}", store.len());
}

/// Advances the node at `index` by one frame.
///
/// Image nodes ease toward their orbit target and are then pushed away from every
/// other image node closer than the repulsion radius. Later nodes see the positions
/// earlier nodes already moved to this frame. Dots move by their velocity and bounce
/// off the canvas edges without being clamped back inside.
pub(in crate::app) fn advance_node(
    store: &mut NodeStore,
    index: usize,
    canvas_size: Vec2,
    config: MotionConfig,
) {
    let nodes = store.nodes_mut();
    let Some(node) = nodes.get_mut(index) else {
        return;
    };

    let eased = match &mut node.kind {
        NodeKind::Image(image) => {
            image.angle += image.orbit_speed;
            let target = orbit_target(canvas_size, config.orbit_radius_factor, image.angle);
            node.position + (target - node.position) * config.orbit_easing
        }
        NodeKind::Dot(dot) => {
            node.position += dot.velocity;
            dot.velocity.x = reflect_axis(node.position.x, dot.velocity.x, canvas_size.x);
            dot.velocity.y = reflect_axis(node.position.y, dot.velocity.y, canvas_size.y);
            return;
        }
    };

    let others = nodes
        .iter()
        .enumerate()
        .filter(|&(other_index, other)| other_index != index && other.is_image())
        .map(|(_, other)| other.position);
    let repelled = accumulate_repulsion(
        eased,
        others,
        config.repulsion_radius,
        config.repulsion_strength,
    );
    nodes[index].position = repelled;
}
