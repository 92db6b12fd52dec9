use super::input;
use super::WopanUploader;
use crate::upload::{StatusStyle, UploadItem};
use egui::{Align, Color32, RichText};

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const SUCCESS: Color32 = Color32::from_rgb(0, 180, 0);
const FAILURE: Color32 = Color32::from_rgb(220, 50, 50);
const MUTED: Color32 = Color32::from_rgb(150, 150, 150);

fn style_color(style: StatusStyle) -> Color32 {
    match style {
        StatusStyle::Waiting => MUTED,
        StatusStyle::Uploading => ACCENT,
        StatusStyle::Success => SUCCESS,
        StatusStyle::Error => FAILURE,
    }
}

impl WopanUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("Wopan File Uploader");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Drop files to send them to the Wopan video service")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    self.render_drop_zone(ui);

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("📄 Browse Files").clicked() {
                            if let Some(files) = input::browse_files() {
                                self.start_upload(files);
                            }
                        }
                        if ui.button("📁 Browse Folder").clicked() {
                            if let Some(files) = input::browse_folder() {
                                self.start_upload(files);
                            }
                        }
                    });

                    let items = self.state.items();
                    if !items.is_empty() {
                        ui.add_space(20.0);
                        ui.group(|ui| {
                            let progress_bar =
                                egui::ProgressBar::new(self.state.get_progress_percentage())
                                    .show_percentage()
                                    .animate(false)
                                    .fill(ACCENT);
                            ui.add(progress_bar);
                            ui.label(self.state.get_status_text());
                        });

                        ui.add_space(10.0);
                        egui::Frame::none()
                            .fill(ui.style().visuals.extreme_bg_color)
                            .inner_margin(8.0)
                            .show(ui, |ui| {
                                for item in &items {
                                    render_item(ui, item);
                                    ui.add_space(6.0);
                                }
                            });
                    }

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let stroke_color = if self.state.is_hovering {
            ACCENT
        } else {
            ui.visuals().weak_text_color()
        };

        let response = egui::Frame::none()
            .stroke(egui::Stroke::new(2.0, stroke_color))
            .rounding(8.0)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📂").size(32.0));
                    ui.label("Drop files here or click to browse");
                });
            })
            .response
            .interact(egui::Sense::click());

        if response.clicked() {
            if let Some(files) = input::browse_files() {
                self.start_upload(files);
            }
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Uploading to");
            if ui
                .add(
                    egui::Label::new(RichText::new(&self.origin).color(ACCENT))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            {
                let _ = open::that(&self.origin);
            }
        });

        if let Some(error) = &self.state.error_message {
            ui.add_space(5.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(FAILURE, error);
            });
        }
    }
}

fn render_item(ui: &mut egui::Ui, item: &UploadItem) {
    let color = style_color(item.style());
    ui.horizontal(|ui| {
        egui::Frame::none()
            .fill(ui.visuals().faint_bg_color)
            .rounding(4.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.label(RichText::new(item.ext_label()).monospace().strong());
            });

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&item.name).strong());
                ui.label(RichText::new(item.size_label()).color(MUTED));
            });
            ui.add(
                egui::ProgressBar::new(item.progress_fraction())
                    .animate(false)
                    .fill(color)
                    .desired_width(ui.available_width()),
            );
            ui.colored_label(color, item.status_text());
        });
    });
}
