use std::collections::VecDeque;

use super::view::FrameStats;

const FPS_SAMPLE_WINDOW: usize = 180;

#[derive(Default)]
pub(in crate::app) struct FpsCounter {
    current: f32,
    samples: VecDeque<f32>,
}

impl FpsCounter {
    pub(in crate::app) fn record(&mut self, dt: f32) {
        if dt <= f32::EPSILON {
            return;
        }

        self.current = (1.0 / dt).clamp(0.0, 1000.0);
        self.samples.push_back(self.current);
        while self.samples.len() > FPS_SAMPLE_WINDOW {
            self.samples.pop_front();
        }
    }

    fn average(&self) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f32>() / self.samples.len() as f32)
    }

    pub(in crate::app) fn display_text(&self, stats: FrameStats) -> String {
        let mut parts = vec![format!("FPS {:.0}", self.current)];

        if let Some(avg) = self.average() {
            parts.push(format!("avg {avg:.1}"));
        }

        if self.current > f32::EPSILON {
            parts.push(format!("{:.1} ms", 1000.0 / self.current));
        }

        parts.push(format!(
            "nodes: {} / images: {} / lines: {}",
            stats.nodes, stats.images, stats.lines
        ));
        parts.join(" | ")
    }
}
