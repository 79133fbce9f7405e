use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Inclusive-exclusive sampling range used for randomized node attributes.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AchievementAsset {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetManifest {
    pub portrait: PathBuf,
    pub achievements: Vec<AchievementAsset>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        const SLOTS: [(&str, &str); 9] = [
            ("masters", "assets/masters.png"),
            ("cern", "assets/cern.png"),
            ("mit", "assets/mit.jpg"),
            ("xprize", "assets/xprize.jpg"),
            ("skills", "assets/skills.jpg"),
            ("harvard", "assets/harvard.jpg"),
            ("satellite", "assets/satellite.jpg"),
            ("solar", "assets/solar.jpg"),
            ("electro", "assets/electro.jpg"),
        ];

        Self {
            portrait: PathBuf::from("assets/my-portrait.jpg"),
            achievements: SLOTS
                .iter()
                .map(|(name, path)| AchievementAsset {
                    name: (*name).to_owned(),
                    path: PathBuf::from(path),
                })
                .collect(),
        }
    }
}

impl AssetManifest {
    /// Resolves every relative asset path against `root`.
    pub fn rebase(&mut self, root: &Path) {
        if self.portrait.is_relative() {
            self.portrait = root.join(&self.portrait);
        }
        for achievement in &mut self.achievements {
            if achievement.path.is_relative() {
                achievement.path = root.join(&achievement.path);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlexusConfig {
    pub connection_distance: f32,
    pub dot_count: usize,
    pub dot_speed: f32,
    pub dot_size: Span,
    pub dot_pulse_speed: Span,
    pub image_pulse_speed: Span,
    pub orbit_speed: Span,
    pub image_base_size: f32,
    pub orbit_radius_factor: f32,
    pub orbit_easing: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub pulse_amplitude: f32,
    pub portrait_max_width: f32,
    pub portrait_width_fraction: f32,
    pub show_fps: bool,
    pub assets: AssetManifest,
}

impl Default for PlexusConfig {
    fn default() -> Self {
        Self {
            connection_distance: 280.0,
            dot_count: 100,
            dot_speed: 0.2,
            dot_size: Span::new(5.0, 10.0),
            dot_pulse_speed: Span::new(0.05, 0.1),
            image_pulse_speed: Span::new(0.02, 0.04),
            orbit_speed: Span::new(-0.005, 0.005),
            image_base_size: 220.0,
            orbit_radius_factor: 0.35,
            orbit_easing: 0.1,
            repulsion_radius: 150.0,
            repulsion_strength: 0.5,
            pulse_amplitude: 0.8,
            portrait_max_width: 300.0,
            portrait_width_fraction: 0.25,
            show_fps: false,
            assets: AssetManifest::default(),
        }
    }
}

/// The subset of [`PlexusConfig`] the motion step reads every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub orbit_radius_factor: f32,
    pub orbit_easing: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
}

impl PlexusConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::info!("using built-in configuration");
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).context("config is not valid JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("connection_distance", self.connection_distance),
            ("dot_speed", self.dot_speed),
            ("image_base_size", self.image_base_size),
            ("orbit_radius_factor", self.orbit_radius_factor),
            ("orbit_easing", self.orbit_easing),
            ("repulsion_radius", self.repulsion_radius),
            ("repulsion_strength", self.repulsion_strength),
            ("pulse_amplitude", self.pulse_amplitude),
            ("portrait_max_width", self.portrait_max_width),
            ("portrait_width_fraction", self.portrait_width_fraction),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                bail!("{name} must be a finite non-negative number, got {value}");
            }
        }

        let spans = [
            ("dot_size", self.dot_size),
            ("dot_pulse_speed", self.dot_pulse_speed),
            ("image_pulse_speed", self.image_pulse_speed),
            ("orbit_speed", self.orbit_speed),
        ];
        for (name, span) in spans {
            if !span.min.is_finite() || !span.max.is_finite() {
                bail!("{name} bounds must be finite");
            }
            if span.min > span.max {
                bail!("{name} has min {} greater than max {}", span.min, span.max);
            }
        }

        Ok(())
    }

    pub fn motion(&self) -> MotionConfig {
        MotionConfig {
            orbit_radius_factor: self.orbit_radius_factor,
            orbit_easing: self.orbit_easing,
            repulsion_radius: self.repulsion_radius,
            repulsion_strength: self.repulsion_strength,
        }
    }
}
