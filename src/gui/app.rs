//! Generator application implemented with egui/eframe

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use image::GrayImage;
use tracing::{info, warn};

use crate::cli::Args;
use crate::constants::qr::{EC_LEVEL, MODULE_SCALE, QUIET_ZONE_MODULES};
use crate::ports::{Clipboard, DiskSink, ImageSink};
use crate::qr;
use crate::state::FormState;
use crate::url_model;

use super::components::output::OutputAction;
use super::components::{form, output};
use super::constants::*;

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

/// Clipboard port backed by the egui context.
/// The write is queued as a platform command for the end of the frame;
/// egui reports no outcome, so queuing counts as success.
struct EguiClipboard {
    ctx: egui::Context,
}

impl Clipboard for EguiClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}

/// Writes the derived URL through the clipboard port and reports the
/// outcome, failure included.
fn copy_url(clipboard: &mut dyn Clipboard, url: &str) -> StatusMessage {
    match clipboard.set_text(url) {
        Ok(()) => {
            info!(url, "Copied URL to clipboard");
            StatusMessage {
                text: "URL copied to clipboard".to_string(),
                color: STATUS_OK,
            }
        }
        Err(err) => {
            warn!(error = ?err, "Clipboard write failed");
            StatusMessage {
                text: format!("Copy failed: {err}"),
                color: STATUS_ERROR,
            }
        }
    }
}

/// Encodes the rendered surface to PNG and saves it through the sink.
/// Without a rendered surface this is a no-op and returns no status.
fn export_surface(
    sink: &mut dyn ImageSink,
    surface: Option<&GrayImage>,
    filename: &str,
) -> Option<StatusMessage> {
    let surface = surface?;

    let message = match qr::png_bytes(surface).map_err(anyhow::Error::from).and_then(
        |bytes| sink.save_png(filename, &bytes),
    ) {
        Ok(path) => StatusMessage {
            text: format!("Saved {}", path.display()),
            color: STATUS_OK,
        },
        Err(err) => {
            warn!(error = ?err, filename, "Export failed");
            StatusMessage {
                text: format!("Export failed: {err}"),
                color: STATUS_ERROR,
            }
        }
    };
    Some(message)
}

pub struct GeneratorApp {
    state: FormState,
    derived_url: String,
    surface: Option<GrayImage>,
    texture: Option<egui::TextureHandle>,
    status_message: Option<StatusMessage>,
    sink: DiskSink,
}

impl GeneratorApp {
    fn new(cc: &CreationContext<'_>, state: FormState, sink: DiskSink) -> Self {
        info!(dir = %sink.dir().display(), "Initializing generator window");

        let mut app = Self {
            derived_url: String::new(),
            state,
            surface: None,
            texture: None,
            status_message: None,
            sink,
        };
        app.refresh_surface(&cc.egui_ctx);
        app
    }

    /// Recomputes the derived URL and re-renders the QR surface when it
    /// actually changed. Keeps the texture in lockstep with the surface.
    fn refresh_surface(&mut self, ctx: &egui::Context) {
        let derived = self.state.derived_url();
        if derived == self.derived_url && self.texture.is_some() {
            return;
        }
        self.derived_url = derived;

        match qr::render_qr(&self.derived_url, MODULE_SCALE, QUIET_ZONE_MODULES, EC_LEVEL) {
            Ok(img) => {
                let size = [img.width() as usize, img.height() as usize];
                let color_image = egui::ColorImage::from_gray(size, img.as_raw());
                self.texture = Some(ctx.load_texture(
                    "qr-code",
                    color_image,
                    egui::TextureOptions::NEAREST,
                ));
                self.surface = Some(img);
            }
            Err(err) => {
                // Payload too large for the symbol; keep the form usable
                warn!(error = ?err, "QR render failed");
                self.surface = None;
                self.texture = None;
            }
        }
    }
}

impl eframe::App for GeneratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(SECTION_SPACING);
            ui.heading("Key-Card QR Generator");
            ui.add_space(SECTION_SPACING);

            if form::ui(ui, &mut self.state) {
                self.refresh_surface(ctx);
            }

            ui.add_space(SECTION_SPACING);

            match output::ui(ui, self.texture.as_ref(), &self.derived_url) {
                OutputAction::CopyUrl => {
                    let mut clipboard = EguiClipboard { ctx: ctx.clone() };
                    self.status_message = Some(copy_url(&mut clipboard, &self.derived_url));
                }
                OutputAction::Export => {
                    let filename =
                        url_model::export_filename(&self.state.code, &self.state.id);
                    if let Some(message) =
                        export_surface(&mut self.sink, self.surface.as_ref(), &filename)
                    {
                        self.status_message = Some(message);
                    }
                }
                OutputAction::None => {}
            }

            if let Some(message) = &self.status_message {
                ui.add_space(ITEM_SPACING);
                ui.colored_label(message.color, &message.text);
            }
        });
    }
}

pub fn run_gui(args: Args) -> Result<()> {
    let state = FormState::with_initial(&args.base_url, &args.code, &args.id);
    let sink = match args.out_dir {
        Some(dir) => DiskSink::new(dir),
        None => DiskSink::default_location(),
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Key-Card QR Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "Key-Card QR Generator",
        options,
        Box::new(|cc| Ok(Box::new(GeneratorApp::new(cc, state, sink)))),
    )
    .map_err(|err| anyhow!("Failed to launch generator window: {err}"))
}
