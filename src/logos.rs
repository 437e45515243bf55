use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, Widget,
    },
};
use reqwest::Client;

/// Team code -> logo. Unknown codes simply have no logo.
#[derive(Debug, Default)]
pub struct LogoStore {
    images: HashMap<String, DynamicImage>,
}

impl LogoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `<CODE>.png` in `dir`. Unreadable files are skipped.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut store = Self::new();
        let entries = std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            let is_png = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("png"));
            if !is_png {
                continue;
            }
            let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match image::open(&path) {
                Ok(img) => store.insert(code, img),
                Err(e) => tracing::debug!(path = %path.display(), error = %e, "skipping logo"),
            }
        }
        Ok(store)
    }

    pub fn insert(&mut self, code: &str, img: DynamicImage) {
        self.images.insert(code.to_uppercase(), img);
    }

    pub fn get(&self, code: &str) -> Option<&DynamicImage> {
        self.images.get(&code.to_uppercase())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.images.contains_key(&code.to_uppercase())
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Expands `{team}` in a logo URL template.
pub fn logo_url(template: &str, code: &str) -> String {
    template.replace("{team}", code)
}

pub async fn fetch_logo(client: &Client, url: &str) -> Result<DynamicImage> {
    let bytes = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("requesting {}", url))?
        .error_for_status()
        .with_context(|| format!("requesting {}", url))?
        .bytes()
        .await
        .with_context(|| format!("reading body of {}", url))?;
    let img = image::load_from_memory(&bytes).with_context(|| format!("decoding {}", url))?;
    Ok(img)
}

/// Braille rendering of a logo, opaque pixels only.
pub struct LogoWidget<'a> {
    pub image: &'a DynamicImage,
}

impl<'a> Widget for LogoWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let img = self.image;
        let canvas = Canvas::default()
            .block(Block::default())
            .marker(Marker::Braille)
            .x_bounds([0.0, 40.0])
            .y_bounds([0.0, 20.0])
            .paint(|ctx| {
                let (w, h) = img.dimensions();
                for y in 0..40 {
                    for x in 0..80 {
                        let img_x = (x as f64 / 80.0 * w as f64) as u32;
                        let img_y = (y as f64 / 40.0 * h as f64) as u32;
                        if img_x < w && img_y < h {
                            let p = img.get_pixel(img_x, img_y);
                            if p[3] > 128 {
                                ctx.draw(&Points {
                                    coords: &[(x as f64 / 2.0, 20.0 - (y as f64 / 2.0))],
                                    color: Color::Rgb(p[0], p[1], p[2]),
                                });
                            }
                        }
                    }
                }
            });
        canvas.render(area, buf);
    }
}
