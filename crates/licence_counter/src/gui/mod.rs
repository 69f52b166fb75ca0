//! Counter window built on `eframe`.

use eframe::egui::{self, Color32, RichText};

use crate::{
    application::KeyCounts,
    config::WindowConfig,
    errors::{LicenceCounterError, LicenceCounterResult},
};

const WINDOW_SIZE: [f32; 2] = [325.0, 190.0];
const WINDOW_POSITION: [f32; 2] = [700.0, 400.0];
const BACKGROUND: Color32 = Color32::WHITE;
const FIELD_BACKGROUND: Color32 = Color32::from_rgb(0xEE, 0xEE, 0xEE);
const TEXT_COLOR: Color32 = Color32::BLACK;
const FONT_SIZE: f32 = 12.0;
const FOOTER_FONT_SIZE: f32 = 9.0;
const BUTTON_HEIGHT: f32 = 40.0;

/// Placeholder shown before the first refresh
pub const NOT_AVAILABLE: &str = "N/a";

/// Window state: captions, the latest counts and the refresh action
pub struct CounterApp {
    window: WindowConfig,
    counts: Option<KeyCounts>,
    refresh: Box<dyn FnMut() -> KeyCounts>,
}

impl CounterApp {
    pub fn new(window: WindowConfig, refresh: Box<dyn FnMut() -> KeyCounts>) -> Self {
        Self {
            window,
            counts: None,
            refresh,
        }
    }

    /// Run the refresh action and store its result
    pub fn update_keys(&mut self) {
        // Blocks the UI thread until both listings finish
        self.counts = Some((self.refresh)());
    }

    /// Text for the actual and activated count fields
    pub fn field_texts(&self) -> (String, String) {
        match self.counts {
            Some(counts) => (counts.actual.to_string(), counts.activated.to_string()),
            None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
        }
    }
}

impl eframe::App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panel_frame = egui::Frame::central_panel(&ctx.style()).fill(BACKGROUND);
        let mut refresh_clicked = false;

        egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            let (actual, activated) = self.field_texts();

            egui::Grid::new("key_counters")
                .num_columns(2)
                .spacing([20.0, 12.0])
                .show(ui, |ui| {
                    ui.label(caption(self.window.actual_label()));
                    ui.label(count_field(&actual));
                    ui.end_row();

                    ui.label(caption(self.window.activated_label()));
                    ui.label(count_field(&activated));
                    ui.end_row();
                });

            ui.add_space(12.0);

            let button = egui::Button::new(
                RichText::new(self.window.refresh_label())
                    .size(FONT_SIZE)
                    .strong()
                    .color(TEXT_COLOR),
            )
            .fill(FIELD_BACKGROUND)
            .min_size(egui::vec2(ui.available_width(), BUTTON_HEIGHT));
            refresh_clicked = ui.add(button).clicked();

            if !self.window.footer().is_empty() {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(self.window.footer())
                            .size(FOOTER_FONT_SIZE)
                            .color(TEXT_COLOR),
                    );
                });
            }
        });

        if refresh_clicked {
            self.update_keys();
            ctx.request_repaint();
        }
    }
}

fn caption(text: &str) -> RichText {
    RichText::new(text).size(FONT_SIZE).color(TEXT_COLOR)
}

fn count_field(text: &str) -> RichText {
    RichText::new(format!("  {}  ", text))
        .size(FONT_SIZE)
        .strong()
        .color(TEXT_COLOR)
        .background_color(FIELD_BACKGROUND)
}

/// Open the fixed-size counter window and block until it is closed
pub fn run(app: CounterApp) -> LicenceCounterResult<()> {
    let title = app.window.title().clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(WINDOW_SIZE)
            .with_position(WINDOW_POSITION)
            .with_resizable(false),
        ..Default::default()
    };

    tracing::debug!("Opening window '{}'", title);

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| LicenceCounterError::Gui(e.to_string()))
}
