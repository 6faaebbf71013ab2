//! Built-in rasteriser — draws an [`AvatarLayout`] as flat shapes and encodes PNG.
//!
//! Layout coordinates live on a 200×200 canvas and are multiplied by the
//! request's `scale`.  Unknown variants draw with their category's default
//! geometry instead of failing.

use std::io::Cursor;

use async_trait::async_trait;
use image::{ImageFormat, Rgba, RgbaImage};

use super::{CaptureBackend, CaptureError, CaptureRequest};
use crate::render::{AvatarLayout, Layer};

/// Logical canvas edge length before scaling.
pub const CANVAS_SIZE: f32 = 200.0;

/// Largest accepted `scale`; keeps a typo from allocating gigabytes.
pub const MAX_SCALE: f32 = 16.0;

type Rgb = [u8; 3];

const EYE_WHITE: Rgb = [0xFF, 0xFF, 0xFF];
const PUPIL: Rgb = [0x22, 0x22, 0x22];
const BROW: Rgb = [0x3B, 0x2A, 0x1E];
const LIPS: Rgb = [0xB0, 0x3A, 0x48];

fn hair_color(value: &str) -> Rgb {
    match value {
        "black" => [0x1C, 0x1C, 0x1C],
        "blonde" => [0xF1, 0xD3, 0x6B],
        "red" => [0xB5, 0x46, 0x2A],
        "gray" => [0x9E, 0x9E, 0x9E],
        "pink" => [0xF4, 0x8F, 0xB1],
        _ => [0x6B, 0x44, 0x23],
    }
}

fn skin_color(value: &str) -> Rgb {
    match value {
        "fair" => [0xF9, 0xD5, 0xB5],
        "medium" => [0xE0, 0xAC, 0x69],
        "tan" => [0xC6, 0x86, 0x42],
        "dark" => [0x8D, 0x55, 0x24],
        _ => [0xFF, 0xE0, 0xC4],
    }
}

fn darken(color: Rgb) -> Rgb {
    color.map(|c| (u16::from(c) * 4 / 5) as u8)
}

/// Pure-Rust backend built on the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterBackend;

#[async_trait]
impl CaptureBackend for RasterBackend {
    async fn render_png(&self, request: &CaptureRequest) -> Result<Vec<u8>, CaptureError> {
        let request = request.clone();
        tokio::task::spawn_blocking(move || render(&request.layout, request.scale))
            .await
            .map_err(|e| CaptureError::Rejected(format!("render task failed: {}", e)))?
    }
}

/// Rasterise `layout` at `scale` and encode it as PNG.
pub fn render(layout: &AvatarLayout, scale: f32) -> Result<Vec<u8>, CaptureError> {
    if !(scale.is_finite() && scale > 0.0 && scale <= MAX_SCALE) {
        return Err(CaptureError::Rejected(format!(
            "scale must be in (0, {}], got {}",
            MAX_SCALE, scale
        )));
    }

    let mut canvas = Canvas::new(scale);
    let mut skin = skin_color("light");
    for layer in &layout.layers {
        canvas.draw_layer(layer, &mut skin);
    }

    let mut out = Cursor::new(Vec::new());
    canvas
        .image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| CaptureError::Rejected(e.to_string()))?;
    Ok(out.into_inner())
}

/// Variant token from the first modifier starting with `prefix-`.
fn variant<'a>(layer: &'a Layer, prefix: &str) -> Option<&'a str> {
    layer
        .modifiers
        .iter()
        .find_map(|m| m.strip_prefix(prefix)?.strip_prefix('-'))
}

struct Canvas {
    image: RgbaImage,
    scale: f32,
}

impl Canvas {
    fn new(scale: f32) -> Self {
        let size = (CANVAS_SIZE * scale).round().max(1.0) as u32;
        Self {
            image: RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0])),
            scale,
        }
    }

    fn draw_layer(&mut self, layer: &Layer, skin: &mut Rgb) {
        match layer.class.as_str() {
            "hair" => {
                let color = layer
                    .modifiers
                    .iter()
                    .find_map(|m| m.strip_prefix("hair-color-"))
                    .map_or_else(|| hair_color("brown"), hair_color);
                let style = layer
                    .modifiers
                    .iter()
                    .filter(|m| !m.starts_with("hair-color-"))
                    .find_map(|m| m.strip_prefix("hair-"))
                    .unwrap_or("short");
                self.hair(style, color);
            }
            "head" => {
                *skin = variant(layer, "skin").map_or(*skin, skin_color);
                self.ellipse(100.0, 105.0, 55.0, 65.0, *skin);
            }
            "eyebrows" => self.eyebrows(variant(layer, "eyebrows").unwrap_or("normal")),
            "eyes" => self.eyes(variant(layer, "eyes").unwrap_or("normal")),
            "nose" => self.nose(variant(layer, "nose").unwrap_or("normal"), *skin),
            "mouth" => self.mouth(variant(layer, "mouth").unwrap_or("smile")),
            _ => {}
        }
        // Eye children are drawn by `eyes`.
        if layer.class != "eyes" {
            for child in &layer.children {
                self.draw_layer(child, skin);
            }
        }
    }

    fn hair(&mut self, style: &str, color: Rgb) {
        match style {
            "bald" => {}
            "long" => {
                self.ellipse(100.0, 85.0, 68.0, 58.0, color);
                self.rect(32.0, 85.0, 168.0, 175.0, color);
            }
            "curly" => {
                for (cx, cy) in [(55.0, 70.0), (80.0, 48.0), (120.0, 48.0), (145.0, 70.0)] {
                    self.ellipse(cx, cy, 28.0, 28.0, color);
                }
                self.ellipse(100.0, 85.0, 66.0, 52.0, color);
            }
            "spiky" => {
                self.ellipse(100.0, 85.0, 62.0, 52.0, color);
                for x in [55.0, 78.0, 100.0, 122.0, 145.0] {
                    self.triangle((x - 10.0, 55.0), (x + 10.0, 55.0), (x, 22.0), color);
                }
            }
            _ => self.ellipse(100.0, 80.0, 62.0, 50.0, color),
        }
    }

    fn eyebrows(&mut self, style: &str) {
        let (y, thickness) = match style {
            "raised" => (62.0, 4.0),
            "angry" => (76.0, 5.0),
            "thin" => (70.0, 2.0),
            "thick" => (70.0, 7.0),
            "arched" => (66.0, 4.0),
            _ => (70.0, 4.0),
        };
        if style == "angry" {
            // Inner ends lower than outer ends.
            self.triangle((64.0, y - 6.0), (92.0, y + 2.0), (64.0, y - 6.0 + thickness), BROW);
            self.triangle((136.0, y - 6.0), (108.0, y + 2.0), (136.0, y - 6.0 + thickness), BROW);
        } else {
            self.rect(64.0, y, 92.0, y + thickness, BROW);
            self.rect(108.0, y, 136.0, y + thickness, BROW);
        }
    }

    fn eyes(&mut self, style: &str) {
        let (rx, ry) = match style {
            "big" => (12.0, 12.0),
            "small" => (6.0, 6.0),
            "wide" => (14.0, 10.0),
            "sleepy" | "droopy" => (10.0, 4.0),
            _ => (9.0, 9.0),
        };
        for (cx, winking) in [(78.0, false), (122.0, style == "wink")] {
            if winking {
                self.rect(cx - rx, 89.0, cx + rx, 91.0, PUPIL);
                continue;
            }
            self.ellipse(cx, 90.0, rx, ry, EYE_WHITE);
            self.ellipse(cx, 90.0, rx / 2.0, ry / 2.0, PUPIL);
        }
    }

    fn nose(&mut self, style: &str, skin: Rgb) {
        let (rx, ry) = match style {
            "button" => (4.0, 4.0),
            "pointed" => (3.0, 10.0),
            "wide" => (10.0, 5.0),
            _ => (5.0, 6.0),
        };
        self.ellipse(100.0, 112.0, rx, ry, darken(skin));
    }

    fn mouth(&mut self, style: &str) {
        let (cx, cy, rx, ry) = match style {
            "frown" => (100.0, 142.0, 18.0, 5.0),
            "neutral" => (100.0, 138.0, 16.0, 2.0),
            "laugh" => (100.0, 138.0, 20.0, 12.0),
            "surprised" | "open" => (100.0, 140.0, 9.0, 11.0),
            "kiss" => (100.0, 138.0, 6.0, 6.0),
            "grin" => (100.0, 136.0, 22.0, 7.0),
            "smirk" => (106.0, 137.0, 14.0, 4.0),
            "small" => (100.0, 138.0, 8.0, 3.0),
            _ => (100.0, 136.0, 18.0, 6.0),
        };
        self.ellipse(cx, cy, rx, ry, LIPS);
    }

    // ------------------------------------------------------------------------
    // Primitives (logical coordinates)
    // ------------------------------------------------------------------------

    fn put(&mut self, x: i64, y: i64, color: Rgb) {
        let (w, h) = self.image.dimensions();
        if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
            self.image
                .put_pixel(x as u32, y as u32, Rgba([color[0], color[1], color[2], 0xFF]));
        }
    }

    /// Pixel range covering logical `[lo, hi]`.
    fn span(&self, lo: f32, hi: f32) -> std::ops::RangeInclusive<i64> {
        ((lo * self.scale).floor() as i64)..=((hi * self.scale).ceil() as i64)
    }

    fn rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb) {
        for py in self.span(y0, y1) {
            for px in self.span(x0, x1) {
                self.put(px, py, color);
            }
        }
    }

    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgb) {
        let s = self.scale;
        for py in self.span(cy - ry, cy + ry) {
            for px in self.span(cx - rx, cx + rx) {
                let dx = (px as f32 + 0.5) / s - cx;
                let dy = (py as f32 + 0.5) / s - cy;
                if (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0 {
                    self.put(px, py, color);
                }
            }
        }
    }

    fn triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Rgb) {
        let edge = |p: (f32, f32), q: (f32, f32), r: (f32, f32)| {
            (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0)
        };
        let area = edge(a, b, c);
        if area == 0.0 {
            return;
        }
        let s = self.scale;
        let xs = (a.0.min(b.0).min(c.0), a.0.max(b.0).max(c.0));
        let ys = (a.1.min(b.1).min(c.1), a.1.max(b.1).max(c.1));
        for py in self.span(ys.0, ys.1) {
            for px in self.span(xs.0, xs.1) {
                let p = ((px as f32 + 0.5) / s, (py as f32 + 0.5) / s);
                let (w0, w1, w2) = (edge(b, c, p), edge(c, a, p), edge(a, b, p));
                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };
                if inside {
                    self.put(px, py, color);
                }
            }
        }
    }
}
