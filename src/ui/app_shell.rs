use eframe::egui;

use crate::app::controller::{GalleryController, ALL_TAG};
use crate::app::events::AppEvent;
use crate::cache::textures::{fit_within, TextureCache};
use crate::gallery::models::GalleryItem;
use crate::infra::config::AppConfig;

const GRID_GAP: f32 = 8.0;
const CAPTION_GAP: f32 = 24.0;
const THUMB_CACHE_CAPACITY: usize = 256;
const PREVIEW_CACHE_CAPACITY: usize = 8;

pub struct GalleryApp {
    controller: GalleryController,
    config: AppConfig,
    thumbs: TextureCache,
    previews: TextureCache,
}

impl GalleryApp {
    fn new(config: AppConfig, controller: GalleryController) -> Self {
        Self {
            thumbs: TextureCache::new("thumb", config.thumbnail_edge, THUMB_CACHE_CAPACITY),
            previews: TextureCache::new("preview", config.preview_edge, PREVIEW_CACHE_CAPACITY),
            controller,
            config,
        }
    }

    /// Arrow keys and Escape act on the modal only while it is open.
    fn collect_key_events(&self, ctx: &egui::Context, events: &mut Vec<AppEvent>) {
        if !self.controller.modal().is_open {
            return;
        }
        ctx.input(|input| {
            if input.key_pressed(egui::Key::ArrowRight) {
                events.push(AppEvent::NextImage);
            }
            if input.key_pressed(egui::Key::ArrowLeft) {
                events.push(AppEvent::PrevImage);
            }
            if input.key_pressed(egui::Key::Escape) {
                events.push(AppEvent::CloseModal);
            }
        });
    }

    fn show_filter_bar(&self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        let tags = self.controller.tags();
        if tags.is_empty() {
            return;
        }

        ui.horizontal_wrapped(|ui| {
            let all_active = self.controller.is_filter_active(ALL_TAG);
            if ui.selectable_label(all_active, "Tous").clicked() {
                events.push(AppEvent::SelectTag(ALL_TAG.to_string()));
            }
            for tag in tags {
                let active = self.controller.is_filter_active(tag);
                if ui.selectable_label(active, tag).clicked() {
                    events.push(AppEvent::SelectTag(tag.clone()));
                }
            }
        });
    }

    fn show_grid(&mut self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        let visible: Vec<GalleryItem> = self
            .controller
            .visible_items()
            .into_iter()
            .cloned()
            .collect();

        if visible.is_empty() {
            ui.label("Aucune image pour ce filtre.");
            return;
        }

        let columns = self.config.grid_columns.max(1);
        let cell_edge = ((ui.available_width() - GRID_GAP * (columns as f32 - 1.0))
            / columns as f32)
            .max(32.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for row in visible.chunks(columns) {
                ui.horizontal(|ui| {
                    for item in row {
                        self.show_thumbnail(ui, item, cell_edge, events);
                    }
                });
                ui.add_space(GRID_GAP);
            }
        });
    }

    fn show_thumbnail(
        &mut self,
        ui: &mut egui::Ui,
        item: &GalleryItem,
        cell_edge: f32,
        events: &mut Vec<AppEvent>,
    ) {
        let cell = egui::vec2(cell_edge, cell_edge);
        let response = match self.thumbs.get(ui.ctx(), item.index, &item.file_path) {
            Some(texture) => {
                let fitted = fit_within(texture.size_vec2(), cell);
                ui.add_sized(
                    cell,
                    egui::ImageButton::new(egui::Image::new(egui::load::SizedTexture::new(
                        texture.id(),
                        fitted,
                    ))),
                )
            }
            // Undecodable files keep their grid slot and stay clickable.
            None => ui.add_sized(cell, egui::Button::new(file_name(&item.file_path))),
        };

        let response = response.on_hover_text(file_name(&item.file_path));
        if response.clicked() {
            events.push(AppEvent::OpenItem(item.index));
        }
    }

    fn show_modal(&mut self, ctx: &egui::Context, events: &mut Vec<AppEvent>) {
        if !self.controller.modal().is_open {
            return;
        }

        let current = self.controller.current_item().cloned();
        let position = self.controller.modal_position();
        let max_image = ctx.screen_rect().size() * 0.8;

        let modal = egui::Modal::new(egui::Id::new("image_viewer")).show(ctx, |ui| {
            match &current {
                Some(item) => {
                    match self.previews.get(ui.ctx(), item.index, &item.file_path) {
                        Some(texture) => {
                            let fitted = fit_within(texture.size_vec2(), max_image);
                            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                                texture.id(),
                                fitted,
                            )));
                        }
                        None => {
                            ui.label(format!("image illisible: {}", file_name(&item.file_path)));
                        }
                    }
                }
                None => {
                    ui.label("Aucune image.");
                }
            }

            ui.add_space(GRID_GAP);
            ui.horizontal(|ui| {
                if ui.button("\u{2190}").clicked() {
                    events.push(AppEvent::PrevImage);
                }
                if let Some((current, total)) = position {
                    ui.label(format!("{current} / {total}"));
                }
                if ui.button("\u{2192}").clicked() {
                    events.push(AppEvent::NextImage);
                }
                if ui.button("\u{2715}").clicked() {
                    events.push(AppEvent::CloseModal);
                }
            });
        });

        // Backdrop click (outside the image) closes, as does Escape.
        if modal.should_close() {
            events.push(AppEvent::CloseModal);
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<AppEvent> = Vec::new();
        self.collect_key_events(ctx, &mut events);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.heading("galerie");
            self.show_filter_bar(ui, &mut events);
        });

        if let Some(caption) = self.config.caption.clone() {
            egui::TopBottomPanel::bottom("caption").show(ctx, |ui| {
                // The footer hugs the grid when the filter empties it.
                if !self.controller.visible_items().is_empty() {
                    ui.add_space(CAPTION_GAP);
                }
                ui.label(caption);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_grid(ui, &mut events);
        });

        self.show_modal(ctx, &mut events);

        for event in events {
            self.controller.dispatch(event);
        }
    }
}

fn file_name(file_path: &str) -> &str {
    file_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_path)
}

pub fn launch_window(config: AppConfig, controller: GalleryController) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1120.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "galerie",
        options,
        Box::new(|_cc| Ok(Box::new(GalleryApp::new(config, controller)))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
