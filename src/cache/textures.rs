use std::collections::HashMap;
use std::path::Path;

use eframe::egui;
use image::ImageReader;

/// Decoded-and-uploaded textures keyed by item index. Decode failures are
/// memoized as `None` so a broken file costs one attempt, not one per frame.
pub struct TextureCache {
    name: &'static str,
    max_edge: u32,
    capacity: usize,
    entries: HashMap<usize, Option<egui::TextureHandle>>,
}

impl TextureCache {
    pub fn new(name: &'static str, max_edge: u32, capacity: usize) -> Self {
        Self {
            name,
            max_edge,
            capacity,
            entries: HashMap::new(),
        }
    }

    pub fn get(
        &mut self,
        ctx: &egui::Context,
        item_index: usize,
        file_path: &str,
    ) -> Option<egui::TextureHandle> {
        if !self.entries.contains_key(&item_index) {
            if self.entries.len() >= self.capacity {
                self.entries.clear();
            }
            let texture = load_texture(ctx, self.name, item_index, file_path, self.max_edge);
            self.entries.insert(item_index, texture);
        }
        self.entries.get(&item_index).cloned().flatten()
    }
}

fn load_texture(
    ctx: &egui::Context,
    name: &'static str,
    item_index: usize,
    file_path: &str,
    max_edge: u32,
) -> Option<egui::TextureHandle> {
    let decoded = ImageReader::open(Path::new(file_path))
        .ok()?
        .with_guessed_format()
        .ok()?
        .decode()
        .ok()?;

    let scaled = if decoded.width() > max_edge || decoded.height() > max_edge {
        decoded.thumbnail(max_edge, max_edge)
    } else {
        decoded
    };

    let rgba = scaled.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

    Some(ctx.load_texture(
        format!("{name}-{item_index}"),
        color_image,
        egui::TextureOptions::LINEAR,
    ))
}

/// Scales `(width, height)` uniformly to fit inside `max`, never upscaling.
pub fn fit_within(size: egui::Vec2, max: egui::Vec2) -> egui::Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (max.x / size.x).min(max.y / size.y).min(1.0);
    size * scale
}
