//! Shared helpers for the example binaries: tracing setup and 2D PNG
//! snapshots of a [`LayoutState`].
use anyhow::Result;
use gallery_drift::prelude::*;
use glam::Vec3;
use image::{Rgb, RgbImage};

/// Initializes a tracing subscriber honoring `RUST_LOG`, defaulting to info.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Which 2D projection of the 3D layout to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPlane {
    /// Looking down: X right, Z up.
    Top,
    /// Looking at the wall: X right, Y up.
    Front,
}

/// Configuration for a layout snapshot image.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Output image size in pixels (width, height).
    pub image_size: (u32, u32),
    /// World-space extent mapped onto the image, centered on the origin.
    pub world_extent: f32,
    pub view: ViewPlane,
    pub background: [u8; 3],
    /// Marker half-size in pixels.
    pub marker: i32,
    pub occupied_color: [u8; 3],
    pub placeholder_color: [u8; 3],
}

impl SnapshotConfig {
    pub fn new(world_extent: f32, view: ViewPlane) -> Self {
        Self {
            image_size: (800, 800),
            world_extent,
            view,
            background: [26, 26, 26],
            marker: 4,
            occupied_color: [235, 235, 235],
            placeholder_color: [90, 90, 90],
        }
    }

    pub fn with_image_size(mut self, image_size: (u32, u32)) -> Self {
        self.image_size = image_size;
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }
}

/// Draws each slot of the layout as a filled square marker and writes the
/// image to `path`. Occupied slots draw bright, placeholders dim.
pub fn render_layout_to_png(state: &LayoutState, config: &SnapshotConfig, path: &str) -> Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    let scale = w.min(h) as f32 / config.world_extent;
    let center = Vec3::new(w as f32 * 0.5, h as f32 * 0.5, 0.0);

    for record in &state.records {
        let p = record.position;
        let (px, py) = match config.view {
            ViewPlane::Top => (center.x + p.x * scale, center.y - p.z * scale),
            ViewPlane::Front => (center.x + p.x * scale, center.y - p.y * scale),
        };

        let color = if record.is_placeholder() {
            Rgb(config.placeholder_color)
        } else {
            Rgb(config.occupied_color)
        };

        let cx = px.round() as i32;
        let cy = py.round() as i32;
        for dy in -config.marker..=config.marker {
            for dx in -config.marker..=config.marker {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
                    img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    img.save(path)?;
    Ok(())
}
