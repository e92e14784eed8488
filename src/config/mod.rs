use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};
use crate::geometry::Projection;
use crate::raster::{Color, ExportFormat};

/// Defaults of the classic plate: 1024px canvas, 480px circle, 3px dots every 8px.
pub mod defaults {
    pub const CANVAS_SIZE: u32 = 1024;
    pub const CIRCLE_RADIUS: u32 = 480;
    pub const DOT_RADIUS: u32 = 3;
    pub const DOT_SPACING: u32 = 8;
    pub const PADDING_FACTOR: f64 = 1.6;
    pub const BACKGROUND_COLOR_RANGE: [u8; 2] = [80, 220];
    pub const GEOMETRY_DOT_COLOR: [u8; 3] = [220, 50, 50];
    pub const RNG_SEED: u64 = 42;
}

fn default_canvas_size() -> u32 {
    defaults::CANVAS_SIZE
}
fn default_circle_radius() -> u32 {
    defaults::CIRCLE_RADIUS
}
fn default_dot_radius() -> u32 {
    defaults::DOT_RADIUS
}
fn default_dot_spacing() -> u32 {
    defaults::DOT_SPACING
}
fn default_padding_factor() -> f64 {
    defaults::PADDING_FACTOR
}
fn default_background_color_range() -> [u8; 2] {
    defaults::BACKGROUND_COLOR_RANGE
}
fn default_geometry_dot_color() -> [u8; 3] {
    defaults::GEOMETRY_DOT_COLOR
}
fn default_rng_seed() -> u64 {
    defaults::RNG_SEED
}

/// Every input the render pipeline consumes
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderConfig {
    /// Width and height of the square canvas in pixels
    #[serde(default = "default_canvas_size")]
    pub canvas_size: u32,
    /// Radius of the dotted background circle, also the fit target for geometry
    #[serde(default = "default_circle_radius")]
    pub circle_radius: u32,
    /// Radius of every stamped dot
    #[serde(default = "default_dot_radius")]
    pub dot_radius: u32,
    /// Grid step of the background dots
    #[serde(default = "default_dot_spacing")]
    pub dot_spacing: u32,
    /// Multiplier on `circle_radius` for the span the geometry is fit into
    #[serde(default = "default_padding_factor")]
    pub padding_factor: f64,
    /// Per-channel `[low, high)` range for background dot colors
    #[serde(default = "default_background_color_range")]
    pub background_color_range: [u8; 2],
    #[serde(default = "default_geometry_dot_color")]
    pub geometry_dot_color: [u8; 3],
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_size: default_canvas_size(),
            circle_radius: default_circle_radius(),
            dot_radius: default_dot_radius(),
            dot_spacing: default_dot_spacing(),
            padding_factor: default_padding_factor(),
            background_color_range: default_background_color_range(),
            geometry_dot_color: default_geometry_dot_color(),
            rng_seed: default_rng_seed(),
        }
    }
}

impl RenderConfig {
    /// Reject parameters that cannot produce a render
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("canvas_size", self.canvas_size),
            ("circle_radius", self.circle_radius),
            ("dot_radius", self.dot_radius),
            ("dot_spacing", self.dot_spacing),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(invalid(format!("{name} must be positive")));
            }
        }

        if self.dot_radius >= self.dot_spacing {
            return Err(invalid(format!(
                "dot_radius ({}) must be below dot_spacing ({})",
                self.dot_radius, self.dot_spacing
            )));
        }
        if self.dot_radius >= self.circle_radius {
            return Err(invalid(format!(
                "dot_radius ({}) must be below circle_radius ({})",
                self.dot_radius, self.circle_radius
            )));
        }

        if !(self.padding_factor.is_finite() && self.padding_factor > 0.0) {
            return Err(invalid(format!(
                "padding_factor must be a positive number, got {}",
                self.padding_factor
            )));
        }

        let [low, high] = self.background_color_range;
        if low >= high {
            return Err(invalid(format!(
                "background_color_range low ({low}) must be below high ({high})"
            )));
        }

        Ok(())
    }

    pub fn geometry_color(&self) -> Color {
        image::Rgb(self.geometry_dot_color)
    }

    /// Whether neighbouring background dots touch or overlap
    pub fn background_dots_overlap(&self) -> bool {
        u64::from(self.dot_spacing) <= 2 * u64::from(self.dot_radius)
    }
}

fn invalid(message: String) -> RenderError {
    RenderError::InvalidConfiguration(message)
}

/// On-disk settings (`ishihara-map.toml`)
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub format: Option<ExportFormat>,
    #[serde(default)]
    pub projection: Option<Projection>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub render: Option<RenderConfig>,
}

impl FileConfig {
    /// Read an explicitly requested config file; a missing or bad file is an error
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// First parseable file on the search path, if any
    pub fn load() -> Option<Self> {
        for path in get_config_paths().into_iter().filter(|p| p.exists()) {
            match Self::from_path(&path) {
                Ok(config) => return Some(config),
                Err(e) => log::warn!("Skipping config file: {:#}", e),
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("ishihara-map.toml"));
    paths.push(PathBuf::from(".ishihara-map.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("ishihara-map").join("config.toml"));
        paths.push(config_dir.join("ishihara-map.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".ishihara-map.toml"));
    }

    paths
}
