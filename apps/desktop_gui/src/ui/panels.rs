use chrono::{DateTime, Local};
use eframe::egui;
use shared::{PredictionResult, ResultDisplay};

pub struct ResultPalette {
    pub stroke: egui::Color32,
    pub fill: egui::Color32,
    pub text: egui::Color32,
}

pub fn result_palette(display: ResultDisplay) -> ResultPalette {
    match display {
        ResultDisplay::WillLeave => ResultPalette {
            stroke: egui::Color32::RED,
            fill: egui::Color32::from_rgb(0xff, 0xe6, 0xe6),
            text: egui::Color32::from_rgb(0x8b, 0x00, 0x00),
        },
        ResultDisplay::WillStay => ResultPalette {
            stroke: egui::Color32::from_rgb(0x00, 0x80, 0x00),
            fill: egui::Color32::from_rgb(0xe6, 0xff, 0xe6),
            text: egui::Color32::from_rgb(0x00, 0x64, 0x00),
        },
        ResultDisplay::Error => ResultPalette {
            stroke: egui::Color32::from_rgb(175, 96, 96),
            fill: egui::Color32::from_rgb(111, 53, 53),
            text: egui::Color32::WHITE,
        },
    }
}

pub fn probability_line(probability: f64) -> String {
    format!("Probability of leaving: {:.1}%", probability * 100.0)
}

/// Draws the verdict box. Draws nothing when there is no displayable result.
pub fn show_result_panel(
    ui: &mut egui::Ui,
    result: Option<&PredictionResult>,
    updated_at: Option<DateTime<Local>>,
) {
    let Some(result) = result else {
        return;
    };
    let Some(display) = result.display() else {
        return;
    };
    let palette = result_palette(display);

    egui::Frame::NONE
        .fill(palette.fill)
        .stroke(egui::Stroke::new(2.0, palette.stroke))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(display.headline())
                        .strong()
                        .size(18.0)
                        .color(palette.text),
                );
                if let Some(probability) = result.probability() {
                    ui.label(egui::RichText::new(probability_line(probability)).color(palette.text));
                }
                if let Some(at) = updated_at {
                    ui.small(
                        egui::RichText::new(format!("Updated {}", at.format("%H:%M:%S")))
                            .color(palette.text),
                    );
                }
            });
        });
}
