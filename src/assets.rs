use std::path::Path;

use anyhow::{Context as _, Result};
use eframe::egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions, Vec2, vec2};
use image::RgbaImage;

use crate::config::AssetManifest;

/// Uploaded texture reference plus its pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Raster {
    pub texture: TextureId,
    pub width: u32,
    pub height: u32,
}

impl Raster {
    /// Size of the raster drawn `width` pixels wide with its aspect ratio preserved.
    pub fn size_for_width(&self, width: f32) -> Vec2 {
        if self.width == 0 {
            return vec2(width, 0.0);
        }
        vec2(width, (self.height as f32 / self.width as f32) * width)
    }
}

pub struct LoadedImage {
    pub raster: Raster,
    // Dropping the handle frees the texture.
    _handle: TextureHandle,
}

pub struct AchievementImage {
    pub name: String,
    pub image: Option<LoadedImage>,
}

pub struct AssetLibrary {
    pub portrait: Option<LoadedImage>,
    pub achievements: Vec<AchievementImage>,
}

impl AssetLibrary {
    pub fn load(ctx: &Context, manifest: &AssetManifest) -> Self {
        let portrait = load_image(ctx, "Central Portrait", &manifest.portrait);
        let achievements = manifest
            .achievements
            .iter()
            .map(|slot| AchievementImage {
                name: slot.name.clone(),
                image: load_image(ctx, &slot.name, &slot.path),
            })
            .collect::<Vec<_>>();

        let failed = achievements
            .iter()
            .filter(|slot| slot.image.is_none())
            .map(|slot| slot.name.as_str())
            .collect::<Vec<_>>();
        if !failed.is_empty() {
            log::warn!(
                "{} of {} achievement images failed to load and will not be drawn: {}",
                failed.len(),
                achievements.len(),
                failed.join(", ")
            );
        }

        Self {
            portrait,
            achievements,
        }
    }

    pub fn portrait(&self) -> Option<Raster> {
        self.portrait.as_ref().map(|image| image.raster)
    }

    /// One entry per configured achievement slot, in configuration order.
    pub fn achievement_rasters(&self) -> Vec<Option<Raster>> {
        self.achievements
            .iter()
            .map(|slot| slot.image.as_ref().map(|image| image.raster))
            .collect()
    }
}

pub fn decode_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?;
    Ok(image.into_rgba8())
}

fn upload(ctx: &Context, name: &str, rgba: &RgbaImage) -> LoadedImage {
    let (width, height) = rgba.dimensions();
    let color_image =
        ColorImage::from_rgba_unmultiplied([width as usize, height as usize], rgba.as_raw());
    let handle = ctx.load_texture(name, color_image, TextureOptions::LINEAR);

    LoadedImage {
        raster: Raster {
            texture: handle.id(),
            width,
            height,
        },
        _handle: handle,
    }
}

fn load_image(ctx: &Context, name: &str, path: &Path) -> Option<LoadedImage> {
    match decode_image(path) {
        Ok(rgba) => {
            log::info!("{name} loaded successfully ({}x{})", rgba.width(), rgba.height());
            Some(upload(ctx, name, &rgba))
        }
        Err(error) => {
            log::error!("error loading {name}: {error:#}");
            None
        }
    }
}
