use eframe::egui::Color32;

use super::nodes::Node;
use super::render_utils::map_range;

const ALPHA_NEAR: f32 = 80.0;
const ALPHA_FAR: f32 = 10.0;
const IMAGE_STROKE_WIDTH: f32 = 2.5;
const DOT_STROKE_WIDTH: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) enum LineTone {
    /// At least one endpoint is an image node.
    Highlight,
    /// Both endpoints are dots.
    Neutral,
}

impl LineTone {
    pub(in crate::app) fn rgb(self) -> [u8; 3] {
        match self {
            Self::Highlight => [100, 200, 255],
            Self::Neutral => [150, 150, 150],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct Connection<'a> {
    pub(in crate::app) other: &'a Node,
    pub(in crate::app) tone: LineTone,
    pub(in crate::app) alpha: f32,
}

impl Connection<'_> {
    pub(in crate::app) fn color(&self) -> Color32 {
        let [r, g, b] = self.tone.rgb();
        Color32::from_rgba_unmultiplied(r, g, b, self.alpha.round().clamp(0.0, 255.0) as u8)
    }
}

/// Linear fade from 80 at distance 0 to 10 at `threshold`.
pub(in crate::app) fn connection_alpha(distance: f32, threshold: f32) -> f32 {
    map_range(distance, (0.0, threshold), (ALPHA_NEAR, ALPHA_FAR))
}

/// Width of every line drawn from `node`'s side, including its centre line.
pub(in crate::app) fn stroke_width(node: &Node) -> f32 {
    if node.is_image() {
        IMAGE_STROKE_WIDTH
    } else {
        DOT_STROKE_WIDTH
    }
}

/// Lines `nodes[index]` draws toward every other node closer than `threshold`.
///
/// Undirected pairs are not merged: both endpoints report the pair, each with its own
/// stroke width at draw time.
pub(in crate::app) fn connections_for<'a>(
    index: usize,
    nodes: &'a [Node],
    threshold: f32,
) -> impl Iterator<Item = Connection<'a>> + 'a {
    let node = nodes.get(index);

    nodes
        .iter()
        .enumerate()
        .filter_map(move |(other_index, other)| {
            let node = node?;
            if other_index == index {
                return None;
            }

            let distance = (node.position - other.position).length();
            if distance >= threshold {
                return None;
            }

            let tone = if node.is_image() || other.is_image() {
                LineTone::Highlight
            } else {
                LineTone::Neutral
            };

            Some(Connection {
                other,
                tone,
                alpha: connection_alpha(distance, threshold),
            })
        })
}
