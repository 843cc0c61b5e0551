//! Texture loading and procedural texture generation
//!
//! Decodes image files into CPU-side [`TextureData`], running a one-shot
//! configure hook once the decode completes so callers can set
//! wrap/repeat/offset the moment the data is available. The GPU upload
//! happens later, when materials initialize their resources. Also provides
//! the procedural generators the demos fall back on, since no image assets
//! ship with the crate.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::texture_resource::{TextureResource, TextureSettings};

/// Errors produced while loading texture files
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to load texture '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded texture data awaiting GPU upload
///
/// Holds the RGBA pixels, the sampling settings configured at load time, and
/// whether the data is color (sRGB) or linear (normal maps).
#[derive(Debug, Clone)]
pub struct TextureData {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub settings: TextureSettings,
    pub srgb: bool,
    pub label: String,
}

impl TextureData {
    /// Wraps raw RGBA pixels as a color (sRGB) texture
    pub fn color_from_rgba(data: Vec<u8>, width: u32, height: u32, label: &str) -> Self {
        Self {
            data,
            width,
            height,
            settings: TextureSettings::default(),
            srgb: true,
            label: label.to_string(),
        }
    }

    /// Wraps raw RGBA pixels as a linear data texture (e.g. a normal map)
    pub fn normal_from_rgba(data: Vec<u8>, width: u32, height: u32, label: &str) -> Self {
        Self {
            srgb: false,
            ..Self::color_from_rgba(data, width, height, label)
        }
    }

    /// Applies a settings hook, builder style
    pub fn with_settings(mut self, configure: impl FnOnce(&mut TextureSettings)) -> Self {
        configure(&mut self.settings);
        self
    }

    /// Uploads the pixels to the GPU
    pub fn upload(&self, device: &wgpu::Device, queue: &wgpu::Queue) -> TextureResource {
        let format = if self.srgb {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        };
        TextureResource::create_from_rgba_data_with_format(
            device,
            queue,
            &self.data,
            self.width,
            self.height,
            &self.label,
            self.settings,
            format,
        )
    }
}

/// Loads a color (sRGB) texture from an image file
///
/// `configure` runs exactly once, after the decode succeeds; it receives the
/// texture's settings so wrap mode and UV repeat/offset can be adjusted per
/// asset.
pub fn load_color_texture(
    path: &Path,
    label: &str,
    configure: impl FnOnce(&mut TextureSettings),
) -> Result<TextureData, TextureError> {
    let (data, width, height) = decode_rgba(path)?;
    Ok(TextureData::color_from_rgba(data, width, height, label).with_settings(configure))
}

/// Loads a data (linear) texture from an image file, e.g. a normal map
pub fn load_normal_texture(
    path: &Path,
    label: &str,
    configure: impl FnOnce(&mut TextureSettings),
) -> Result<TextureData, TextureError> {
    let (data, width, height) = decode_rgba(path)?;
    Ok(TextureData::normal_from_rgba(data, width, height, label).with_settings(configure))
}

fn decode_rgba(path: &Path) -> Result<(Vec<u8>, u32, u32), TextureError> {
    let image = image::open(path).map_err(|source| TextureError::Load {
        path: path.display().to_string(),
        source,
    })?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("decoded texture {} ({}x{})", path.display(), width, height);
    Ok((rgba.into_raw(), width, height))
}

/// Generates a checkerboard pattern as raw RGBA data
///
/// # Arguments
/// * `width`, `height` - Texture size in pixels
/// * `cells` - Number of checker cells along each axis
/// * `color_a`, `color_b` - The two cell colors (RGB)
pub fn generate_checkerboard(
    width: u32,
    height: u32,
    cells: u32,
    color_a: [u8; 3],
    color_b: [u8; 3],
) -> Vec<u8> {
    let cells = cells.max(1);
    let cell_w = (width / cells).max(1);
    let cell_h = (height / cells).max(1);
    let mut data = Vec::with_capacity((width * height * 4) as usize);

    for y in 0..height {
        for x in 0..width {
            let checker = ((x / cell_w) + (y / cell_h)) % 2 == 0;
            let color = if checker { color_a } else { color_b };
            data.extend_from_slice(&[color[0], color[1], color[2], 255]);
        }
    }

    data
}

/// Generates a horizontal plank pattern (a stand-in for a wood floor)
///
/// Each plank gets a slightly different shade; groove rows between planks use
/// the groove color.
pub fn generate_planks(
    width: u32,
    height: u32,
    plank_height: u32,
    base: [u8; 3],
    groove: [u8; 3],
    seed: u64,
) -> Vec<u8> {
    let plank_height = plank_height.max(2);
    let mut rng = StdRng::seed_from_u64(seed);
    let plank_count = height / plank_height + 1;
    let shades: Vec<f32> = (0..plank_count)
        .map(|_| rng.random_range(0.8..1.1f32))
        .collect();

    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let plank = (y / plank_height) as usize;
        let in_groove = y % plank_height < 1;
        for _x in 0..width {
            if in_groove {
                data.extend_from_slice(&[groove[0], groove[1], groove[2], 255]);
            } else {
                let shade = shades[plank];
                let scaled = |c: u8| ((c as f32 * shade).min(255.0)) as u8;
                data.extend_from_slice(&[scaled(base[0]), scaled(base[1]), scaled(base[2]), 255]);
            }
        }
    }

    data
}

/// Generates a paneled ball pattern: base color with seam lines
///
/// Draws vertical seams splitting the texture into four panels plus one
/// horizontal equator seam.
pub fn generate_seamed_panels(
    width: u32,
    height: u32,
    base: [u8; 3],
    seam: [u8; 3],
    seam_width: u32,
) -> Vec<u8> {
    let seam_width = seam_width.max(1);
    let panel = (width / 4).max(1);
    let equator = height / 2;

    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let on_equator = y.abs_diff(equator) < seam_width;
        for x in 0..width {
            let on_seam = x % panel < seam_width || on_equator;
            let color = if on_seam { seam } else { base };
            data.extend_from_slice(&[color[0], color[1], color[2], 255]);
        }
    }

    data
}

/// Generates a tangent-space normal map from seeded noise
///
/// Builds a random height field and differentiates it; `strength` scales the
/// slope before normalization. With zero strength the map is flat.
pub fn generate_noise_normal(width: u32, height: u32, strength: f32, seed: u64) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;
    let mut rng = StdRng::seed_from_u64(seed);
    let heights: Vec<f32> = (0..w * h).map(|_| rng.random_range(0.0..1.0f32)).collect();

    let sample = |x: isize, y: isize| -> f32 {
        let x = x.rem_euclid(w as isize) as usize;
        let y = y.rem_euclid(h as isize) as usize;
        heights[y * w + x]
    };

    let mut data = Vec::with_capacity(w * h * 4);
    for y in 0..h as isize {
        for x in 0..w as isize {
            let dx = (sample(x - 1, y) - sample(x + 1, y)) * strength;
            let dy = (sample(x, y - 1) - sample(x, y + 1)) * strength;
            let len = (dx * dx + dy * dy + 1.0).sqrt();
            let normal = [dx / len, dy / len, 1.0 / len];

            let encode = |v: f32| ((v * 0.5 + 0.5) * 255.0).round().clamp(0.0, 255.0) as u8;
            data.extend_from_slice(&[encode(normal[0]), encode(normal[1]), encode(normal[2]), 255]);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::resources::texture_resource::WrapMode;

    #[test]
    fn test_checkerboard_dimensions_and_alternation() {
        let data = generate_checkerboard(8, 8, 2, [255, 0, 0], [0, 255, 0]);
        assert_eq!(data.len(), 8 * 8 * 4);
        // First cell is color_a, cell to its right is color_b
        assert_eq!(&data[0..3], &[255, 0, 0]);
        let right = (4 * 4) as usize; // pixel (4, 0)
        assert_eq!(&data[right..right + 3], &[0, 255, 0]);
    }

    #[test]
    fn test_planks_are_deterministic_for_a_seed() {
        let a = generate_planks(16, 16, 4, [150, 110, 70], [60, 40, 25], 7);
        let b = generate_planks(16, 16, 4, [150, 110, 70], [60, 40, 25], 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16 * 16 * 4);
    }

    #[test]
    fn test_flat_noise_normal_points_up() {
        let data = generate_noise_normal(4, 4, 0.0, 1);
        // Zero strength: every texel encodes (0, 0, 1) -> (128, 128, 255)
        for pixel in data.chunks(4) {
            assert_eq!(pixel, &[128, 128, 255, 255]);
        }
    }

    #[test]
    fn test_seamed_panels_have_seams() {
        let data = generate_seamed_panels(16, 16, [200, 100, 30], [20, 20, 20], 1);
        assert_eq!(data.len(), 16 * 16 * 4);
        // x == 0 sits on a panel seam
        assert_eq!(&data[0..3], &[20, 20, 20]);
        // An off-seam, off-equator pixel keeps the base color
        let idx = ((2 * 16) + 2) * 4;
        assert_eq!(&data[idx..idx + 3], &[200, 100, 30]);
    }

    #[test]
    fn test_settings_hook_runs_once_on_construction() {
        let data = TextureData::color_from_rgba(vec![0; 4], 1, 1, "t").with_settings(|s| {
            s.wrap = WrapMode::Repeat;
            s.repeat = [2.0, 2.0];
        });
        assert_eq!(data.settings.wrap, WrapMode::Repeat);
        assert_eq!(data.settings.repeat, [2.0, 2.0]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_color_texture(Path::new("no/such/file.png"), "missing", |_| {})
            .expect_err("load should fail");
        assert!(err.to_string().contains("no/such/file.png"));
    }
}
