use std::f32::consts::TAU;

use eframe::egui::{Vec2, vec2};
use rand::Rng;

use crate::assets::Raster;
use crate::config::{PlexusConfig, Span};

use super::physics::orbit_target;

#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) struct ImageNode {
    /// `None` when the slot's image failed to load; the node still moves and connects.
    pub(in crate::app) image: Option<Raster>,
    pub(in crate::app) base_size: f32,
    pub(in crate::app) angle: f32,
    pub(in crate::app) orbit_speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) struct DotNode {
    pub(in crate::app) velocity: Vec2,
    /// Diameter in pixels.
    pub(in crate::app) size: f32,
    /// Unmultiplied sRGBA.
    pub(in crate::app) color: [u8; 4],
}

#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) enum NodeKind {
    Image(ImageNode),
    Dot(DotNode),
}

#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) struct Node {
    pub(in crate::app) position: Vec2,
    pub(in crate::app) pulse_speed: f32,
    pub(in crate::app) kind: NodeKind,
}

impl Node {
    pub(in crate::app) fn is_image(&self) -> bool {
        matches!(self.kind, NodeKind::Image(_))
    }
}

/// Every simulated node in draw order. Image nodes come first, dots after.
///
/// The collection never grows or shrinks after [`NodeStore::populate`]; only the
/// motion step gets mutable access.
#[derive(Clone, Debug, Default)]
pub(in crate::app) struct NodeStore {
    nodes: Vec<Node>,
}

impl NodeStore {
    pub(in crate::app) fn populate<R: Rng>(
        config: &PlexusConfig,
        images: &[Option<Raster>],
        canvas_size: Vec2,
        rng: &mut R,
    ) -> Self {
        let mut nodes = Vec::with_capacity(images.len() + config.dot_count);
        let image_count = images.len();

        for (index, image) in images.iter().enumerate() {
            let angle = (index as f32 / image_count as f32) * TAU;
            nodes.push(Node {
                position: orbit_target(canvas_size, config.orbit_radius_factor, angle),
                pulse_speed: sample(rng, config.image_pulse_speed),
                kind: NodeKind::Image(ImageNode {
                    image: *image,
                    base_size: config.image_base_size,
                    angle,
                    orbit_speed: sample(rng, config.orbit_speed),
                }),
            });
        }

        for _ in 0..config.dot_count {
            let position = vec2(
                sample(rng, Span::new(0.0, canvas_size.x)),
                sample(rng, Span::new(0.0, canvas_size.y)),
            );
            let heading = rng.gen_range(0.0..TAU);
            let color = [
                sample(rng, Span::new(150.0, 200.0)) as u8,
                sample(rng, Span::new(150.0, 220.0)) as u8,
                255,
                150,
            ];

            nodes.push(Node {
                position,
                pulse_speed: sample(rng, config.dot_pulse_speed),
                kind: NodeKind::Dot(DotNode {
                    velocity: vec2(heading.cos(), heading.sin()) * config.dot_speed,
                    size: sample(rng, config.dot_size),
                    color,
                }),
            });
        }

        Self { nodes }
    }

    #[cfg(test)]
    pub(in crate::app) fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub(in crate::app) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(in crate::app) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub(in crate::app) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(in crate::app) fn image_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_image()).count()
    }
}

fn sample<R: Rng>(rng: &mut R, span: Span) -> f32 {
    if span.max > span.min {
        rng.gen_range(span.min..span.max)
    } else {
        span.min
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::TextureId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn raster(id: u64) -> Option<Raster> {
        Some(Raster {
            texture: TextureId::Managed(id),
            width: 100,
            height: 50,
        })
    }

    #[test]
    fn populate_places_images_first_then_dots() {
        let config = PlexusConfig::default();
        let images = vec![raster(1), None, raster(3)];
        let mut rng = StdRng::seed_from_u64(7);

        let store = NodeStore::populate(&config, &images, vec2(1000.0, 800.0), &mut rng);

        assert_eq!(store.len(), 3 + config.dot_count);
        assert_eq!(store.image_count(), 3);
        assert!(store.nodes()[..3].iter().all(Node::is_image));
        assert!(store.nodes()[3..].iter().all(|node| !node.is_image()));

        let NodeKind::Image(failed) = &store.nodes()[1].kind else {
            panic!("expected image node");
        };
        assert_eq!(failed.image, None);
    }

    #[test]
    fn images_start_evenly_spaced_on_orbit() {
        let config = PlexusConfig::default();
        let images = vec![None; 4];
        let mut rng = StdRng::seed_from_u64(1);
        let canvas = vec2(1000.0, 800.0);

        let store = NodeStore::populate(&config, &images, canvas, &mut rng);

        for (index, node) in store.nodes().iter().enumerate().take(4) {
            let NodeKind::Image(image) = &node.kind else {
                panic!("expected image node");
            };
            assert!((image.angle - index as f32 * TAU / 4.0).abs() < 1e-6);
            let from_center = (node.position - canvas * 0.5).length();
            assert!((from_center - 280.0).abs() < 1e-3);
            assert!(image.orbit_speed.abs() <= 0.005);
            assert!((0.02..0.04).contains(&node.pulse_speed));
            assert_eq!(image.base_size, 220.0);
        }
    }

    #[test]
    fn dots_respect_configured_ranges() {
        let config = PlexusConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let canvas = vec2(640.0, 480.0);

        let store = NodeStore::populate(&config, &[], canvas, &mut rng);

        assert_eq!(store.len(), 100);
        for node in store.nodes() {
            let NodeKind::Dot(dot) = &node.kind else {
                panic!("expected dot node");
            };
            assert!((0.0..=canvas.x).contains(&node.position.x));
            assert!((0.0..=canvas.y).contains(&node.position.y));
            assert!((dot.velocity.length() - 0.2).abs() < 1e-5);
            assert!((5.0..10.0).contains(&dot.size));
            assert!((0.05..0.1).contains(&node.pulse_speed));
            let [r, g, b, a] = dot.color;
            assert!((150..200).contains(&r));
            assert!((150..220).contains(&g));
            assert_eq!((b, a), (255, 150));
        }
    }

    #[test]
    fn degenerate_canvas_and_spans_do_not_panic() {
        let config = PlexusConfig {
            dot_size: Span::new(6.0, 6.0),
            orbit_speed: Span::new(0.0, 0.0),
            ..PlexusConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);

        let store = NodeStore::populate(&config, &[None], Vec2::ZERO, &mut rng);

        assert_eq!(store.len(), 101);
        assert!(store.nodes().iter().all(|node| node.position == Vec2::ZERO));
    }
}
