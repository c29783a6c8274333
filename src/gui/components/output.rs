//! Output section: rendered QR image, derived-URL preview and actions

use eframe::egui;

use super::super::constants::{ITEM_SPACING, QR_DISPLAY_SIZE, URL_PREVIEW};

/// User request raised from the output section, handled by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputAction {
    None,
    CopyUrl,
    Export,
}

pub fn ui(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    derived_url: &str,
) -> OutputAction {
    let mut action = OutputAction::None;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Generated Output").heading().strong());
        ui.add_space(ITEM_SPACING);

        ui.vertical_centered(|ui| {
            match texture {
                Some(texture) => {
                    // Clicking the image exports it, same as the button below
                    let response = ui
                        .add(
                            egui::Image::new(texture)
                                .fit_to_exact_size(egui::vec2(QR_DISPLAY_SIZE, QR_DISPLAY_SIZE))
                                .sense(egui::Sense::click()),
                        )
                        .on_hover_text("Download PNG");
                    if response.clicked() {
                        action = OutputAction::Export;
                    }
                }
                None => {
                    ui.label(egui::RichText::new("(QR code unavailable)").weak());
                }
            }
        });

        ui.add_space(ITEM_SPACING);

        ui.label(egui::RichText::new("Encoded URL").small().weak());
        ui.horizontal(|ui| {
            ui.scope(|ui| {
                ui.style_mut().wrap_mode = Some(egui::TextWrapMode::Truncate);
                ui.colored_label(URL_PREVIEW, egui::RichText::new(derived_url).monospace());
            });
        });

        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            if ui.button("\u{1F4CB} Copy URL").clicked() {
                action = OutputAction::CopyUrl;
            }
            if ui.button("\u{2B07} Export QR Code").clicked() {
                action = OutputAction::Export;
            }
        });

        ui.add_space(ITEM_SPACING);
        ui.label(
            egui::RichText::new("The QR code updates in real time as the fields change.")
                .small()
                .weak(),
        );
    });

    action
}
