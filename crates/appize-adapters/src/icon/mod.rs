//! Launcher icon derivation.
//!
//! Turns a single source image (local file, remote URL, or nothing at all)
//! into the full Android launcher set: one square and one round PNG per
//! density bucket, plus the adaptive-icon layer pair and its XML
//! descriptors. All assets are rendered and encoded in memory before the
//! first byte hits disk, so a failure never leaves a half-written set.

mod glyph;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{
    ImageFormat, Rgba, RgbaImage,
    imageops::{self, FilterType},
};
use tracing::{debug, error, info, warn};

use appize_core::{
    application::{ApplicationError, ports::{Fetcher, IconEngine}},
    domain::{ImageRef, StepOutcome},
    error::AppizeResult,
};

/// Android density buckets and their launcher icon edge sizes in pixels.
pub const DENSITIES: &[(&str, u32)] = &[
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Edge size of the adaptive icon layer canvas.
const ADAPTIVE_CANVAS: u32 = 108;

/// Edge size of the synthetic fallback icon.
const DEFAULT_CANVAS: u32 = 512;

/// Material blue-grey, used when no icon source is configured.
const DEFAULT_BACKGROUND: Rgba<u8> = Rgba([0x60, 0x7D, 0x8B, 0xFF]);

const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

/// Adaptive icon descriptor, written verbatim as both `ic_launcher.xml`
/// and `ic_launcher_round.xml`.
const ADAPTIVE_ICON_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@mipmap/ic_launcher_background" />
    <foreground android:drawable="@mipmap/ic_launcher_foreground" />
</adaptive-icon>
"#;

/// Raster icon engine backed by the `image` crate.
pub struct RasterEngine {
    fetcher: Box<dyn Fetcher>,
}

enum Asset {
    Png(RgbaImage),
    Text(&'static str),
}

impl RasterEngine {
    pub fn new(fetcher: Box<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Load and decode the configured source, falling back to the
    /// synthetic default on any fetch or decode problem.
    fn load_source(&self, source: &ImageRef) -> RgbaImage {
        match source {
            ImageRef::None => {
                info!("no icon source configured, using the default icon");
                default_icon()
            }
            ImageRef::Local(path) => match image::open(path) {
                Ok(img) => img.to_rgba8(),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load local icon, using the default icon");
                    default_icon()
                }
            },
            ImageRef::Remote(url) => {
                let decoded = self
                    .fetcher
                    .fetch(url)
                    .and_then(|bytes| {
                        image::load_from_memory(&bytes).map_err(|e| {
                            ApplicationError::ImageDecode {
                                reason: e.to_string(),
                            }
                            .into()
                        })
                    });
                match decoded {
                    Ok(img) => img.to_rgba8(),
                    Err(e) => {
                        warn!(url = %url, error = %e, "failed to fetch remote icon, using the default icon");
                        default_icon()
                    }
                }
            }
        }
    }

    fn derive_inner(
        &self,
        source: &ImageRef,
        res_root: &Path,
        background_color: &str,
    ) -> AppizeResult<()> {
        let base = self.load_source(source);
        let background = parse_hex_color(background_color);

        // Render everything before writing anything.
        let mut assets: Vec<(PathBuf, Asset)> = Vec::new();

        for (density, size) in DENSITIES {
            let dir = res_root.join(format!("mipmap-{}", density));
            let square = imageops::resize(&base, *size, *size, FilterType::Lanczos3);
            let round = circular_mask(&square);
            assets.push((dir.join("ic_launcher.png"), Asset::Png(square)));
            assets.push((dir.join("ic_launcher_round.png"), Asset::Png(round)));
        }

        let adaptive_dir = res_root.join("mipmap-anydpi-v26");
        let foreground = contain(&base, ADAPTIVE_CANVAS);
        let background_layer =
            RgbaImage::from_pixel(ADAPTIVE_CANVAS, ADAPTIVE_CANVAS, background);
        assets.push((
            adaptive_dir.join("ic_launcher_foreground.png"),
            Asset::Png(foreground),
        ));
        assets.push((
            adaptive_dir.join("ic_launcher_background.png"),
            Asset::Png(background_layer),
        ));
        assets.push((adaptive_dir.join("ic_launcher.xml"), Asset::Text(ADAPTIVE_ICON_XML)));
        assets.push((
            adaptive_dir.join("ic_launcher_round.xml"),
            Asset::Text(ADAPTIVE_ICON_XML),
        ));

        for (path, asset) in &assets {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| fs_error(parent, "create directory", e))?;
            }
            match asset {
                Asset::Png(img) => {
                    let bytes = encode_png(img)?;
                    std::fs::write(path, bytes).map_err(|e| fs_error(path, "write icon", e))?;
                }
                Asset::Text(content) => {
                    std::fs::write(path, content)
                        .map_err(|e| fs_error(path, "write descriptor", e))?;
                }
            }
            debug!(path = %path.display(), "wrote launcher asset");
        }

        info!(count = assets.len(), "derived launcher icon set");
        Ok(())
    }
}

impl IconEngine for RasterEngine {
    fn derive(&self, source: &ImageRef, res_root: &Path, background_color: &str) -> StepOutcome {
        match self.derive_inner(source, res_root, background_color) {
            Ok(()) => StepOutcome::Applied,
            Err(e) => {
                error!(error = %e, "icon derivation failed");
                StepOutcome::failed(e.to_string())
            }
        }
    }
}

fn fs_error(path: &Path, operation: &str, e: std::io::Error) -> appize_core::error::AppizeError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn encode_png(img: &RgbaImage) -> AppizeResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| ApplicationError::ImageDecode {
            reason: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(buffer.into_inner())
}

/// Synthetic 512x512 fallback: solid blue-grey square with "APP" in white.
fn default_icon() -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(DEFAULT_CANVAS, DEFAULT_CANVAS, DEFAULT_BACKGROUND);
    glyph::draw_app_label(&mut canvas, WHITE);
    canvas
}

/// Zero the alpha of every pixel outside the inscribed circle.
fn circular_mask(img: &RgbaImage) -> RgbaImage {
    let mut masked = img.clone();
    let size = masked.width().min(masked.height());
    let center = size as f32 / 2.0;
    let radius = size as f32 / 2.0;

    for (x, y, pixel) in masked.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if dx * dx + dy * dy > radius * radius {
            pixel.0[3] = 0;
        }
    }
    masked
}

/// Aspect-preserving fit onto a transparent square canvas.
fn contain(img: &RgbaImage, canvas_size: u32) -> RgbaImage {
    let (w, h) = (img.width().max(1), img.height().max(1));
    let scale = (canvas_size as f32 / w as f32).min(canvas_size as f32 / h as f32);
    let fitted_w = ((w as f32 * scale) as u32).max(1);
    let fitted_h = ((h as f32 * scale) as u32).max(1);

    let fitted = imageops::resize(img, fitted_w, fitted_h, FilterType::Lanczos3);
    let mut canvas = RgbaImage::from_pixel(canvas_size, canvas_size, Rgba([0, 0, 0, 0]));
    let offset_x = (canvas_size - fitted_w) as i64 / 2;
    let offset_y = (canvas_size - fitted_h) as i64 / 2;
    imageops::overlay(&mut canvas, &fitted, offset_x, offset_y);
    canvas
}

/// Parse `#RRGGBB`, falling back to white on anything malformed.
fn parse_hex_color(value: &str) -> Rgba<u8> {
    let digits = value.trim().trim_start_matches('#');
    if digits.len() == 6 {
        if let Ok(packed) = u32::from_str_radix(digits, 16) {
            return Rgba([
                (packed >> 16) as u8,
                (packed >> 8) as u8,
                packed as u8,
                0xFF,
            ]);
        }
    }
    warn!(value = %value, "unparseable background colour, using white");
    Rgba([0xFF, 0xFF, 0xFF, 0xFF])
}
