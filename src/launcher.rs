use eframe::egui;
use std::path::{Path, PathBuf};

use crate::commands;
use crate::constants::{
    LOGO_FILE, LOGO_SIZE, UPLOAD_ERROR_MESSAGE, UPLOAD_ERROR_TITLE, UPLOAD_EXTENSION,
    WINDOW_SIZE, WINDOW_TITLE,
};
use crate::image_processing::load_logo;
use crate::settings::Settings;

/// User actions the window can dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    UploadImage,
    OpenMap,
}

pub struct LauncherApp {
    settings: Settings,
    logo: Option<egui::TextureHandle>,
}

impl LauncherApp {
    pub fn new(settings: Settings, ctx: &egui::Context) -> Self {
        let logo = match load_logo(Path::new(LOGO_FILE), LOGO_SIZE) {
            Ok(img) => {
                let size = [img.width() as usize, img.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                Some(ctx.load_texture("logo", color_image, egui::TextureOptions::LINEAR))
            }
            Err(e) => {
                tracing::debug!("Logo unavailable: {:#}", e);
                None
            }
        };

        Self { settings, logo }
    }

    fn dispatch(&self, command: Command) {
        match command {
            Command::UploadImage => self.handle_upload(),
            Command::OpenMap => self.handle_open_map(),
        }
    }

    fn handle_upload(&self) {
        let Some(path) = pick_jpeg() else {
            return;
        };

        if let Err(e) = commands::upload_image(&self.settings, &path) {
            tracing::error!("Upload of {} failed: {:#}", path.display(), e);
            show_error(UPLOAD_ERROR_TITLE, UPLOAD_ERROR_MESSAGE);
        }
    }

    fn handle_open_map(&self) {
        if let Err(e) = commands::open_map(&self.settings) {
            tracing::error!("Open map failed: {:#}", e);
            show_error("Open Map Error", &format!("{:#}", e));
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut requested = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                match &self.logo {
                    Some(texture) => {
                        ui.image(egui::load::SizedTexture::from_handle(texture));
                    }
                    None => {
                        ui.label("Logo");
                    }
                }
                ui.add_space(10.0);

                if ui.button("Upload Image").clicked() {
                    requested = Some(Command::UploadImage);
                }
                ui.add_space(10.0);
                if ui.button("Open Map").clicked() {
                    requested = Some(Command::OpenMap);
                }
            });
        });

        // Runs synchronously on the UI thread; the window waits for the pipeline
        if let Some(command) = requested {
            self.dispatch(command);
        }
    }
}

fn pick_jpeg() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select a photo")
        .add_filter("Image files", &[UPLOAD_EXTENSION])
        .pick_file()
}

fn show_error(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Opens the launcher window and blocks until it is closed.
pub fn run(settings: Settings) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(LauncherApp::new(settings, &cc.egui_ctx)))),
    )
}
