mod app;
mod assets;
mod config;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::config::PlexusConfig;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON configuration file; built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory that relative asset paths are resolved against.
    #[arg(long)]
    assets_dir: Option<PathBuf>,
    /// Number of free-floating dots.
    #[arg(long)]
    dots: Option<usize>,
    /// Maximum distance in pixels at which two nodes are connected.
    #[arg(long)]
    connection_distance: Option<f32>,
    #[arg(long)]
    show_fps: bool,
    #[arg(long, default_value_t = 1440.0)]
    width: f32,
    #[arg(long, default_value_t = 920.0)]
    height: f32,
}

impl Args {
    fn apply_overrides(&self, config: &mut PlexusConfig) {
        if let Some(root) = &self.assets_dir {
            config.assets.rebase(root);
        }
        if let Some(dots) = self.dots {
            config.dot_count = dots;
        }
        if let Some(distance) = self.connection_distance {
            config.connection_distance = distance;
        }
        if self.show_fps {
            config.show_fps = true;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = PlexusConfig::load(args.config.as_deref())?;
    args.apply_overrides(&mut config);
    config.validate()?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "plexus-portrait",
        options,
        Box::new(move |cc| Ok(Box::new(app::PlexusApp::new(cc, config)))),
    )
    .map_err(|error| anyhow!("failed to run window: {error}"))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let args = Args::try_parse_from([
            "plexus-portrait",
            "--dots",
            "12",
            "--connection-distance",
            "150",
            "--assets-dir",
            "/srv/site",
            "--show-fps",
        ])
        .unwrap();
        let mut config = PlexusConfig::default();

        args.apply_overrides(&mut config);

        assert_eq!(config.dot_count, 12);
        assert_eq!(config.connection_distance, 150.0);
        assert!(config.show_fps);
        assert_eq!(
            config.assets.portrait,
            Path::new("/srv/site").join("assets/my-portrait.jpg")
        );
    }

    #[test]
    fn no_flags_keep_config() {
        let args = Args::try_parse_from(["plexus-portrait"]).unwrap();
        let mut config = PlexusConfig::default();

        args.apply_overrides(&mut config);

        assert_eq!(config, PlexusConfig::default());
        assert_eq!((args.width, args.height), (1440.0, 920.0));
    }

    #[test]
    fn negative_distance_fails_validation_after_override() {
        let args =
            Args::try_parse_from(["plexus-portrait", "--connection-distance=-5"]).unwrap();
        let mut config = PlexusConfig::default();

        args.apply_overrides(&mut config);

        assert!(config.validate().is_err());
    }
}
