//! Input controls for a single form field.

use eframe::egui;
use shared::{FieldKind, FieldSpec, FieldValue};

/// Renders the labelled control for `spec` and returns the raw text of an
/// edit, if the user made one this frame.
pub fn field_control(
    ui: &mut egui::Ui,
    spec: &FieldSpec,
    value: &FieldValue,
    enforce_bounds: bool,
) -> Option<String> {
    ui.label(egui::RichText::new(spec.label).strong());

    let edit = match spec.kind {
        FieldKind::Categorical { options, .. } => categorical_control(ui, spec.name, options, value),
        FieldKind::Numeric { min, max, .. } if enforce_bounds => {
            bounded_numeric_control(ui, spec.name, min, max, value)
        }
        FieldKind::Numeric { .. } => free_numeric_control(ui, spec.name, value),
    };

    if !spec.admits(value) {
        ui.small(
            egui::RichText::new(domain_hint(spec))
                .color(ui.visuals().warn_fg_color),
        );
    }

    edit
}

fn categorical_control(
    ui: &mut egui::Ui,
    id: &'static str,
    options: &'static [&'static str],
    value: &FieldValue,
) -> Option<String> {
    let current = value.as_text();
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.as_ref())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in options {
                if ui
                    .selectable_label(current.as_ref() == *option, *option)
                    .clicked()
                {
                    picked = Some(option.to_string());
                }
            }
        });
    picked.filter(|option| option.as_str() != current.as_ref())
}

/// Drag control clamped to [min, max]. Unparseable text starts at `min`.
fn bounded_numeric_control(
    ui: &mut egui::Ui,
    id: &'static str,
    min: i64,
    max: i64,
    value: &FieldValue,
) -> Option<String> {
    let mut number = value.as_int().unwrap_or(min);
    let response = ui
        .push_id(id, |ui| {
            ui.add_sized(
                [ui.available_width(), 28.0],
                egui::DragValue::new(&mut number).range(min..=max).speed(1.0),
            )
        })
        .inner;
    response.changed().then(|| number.to_string())
}

fn free_numeric_control(ui: &mut egui::Ui, id: &'static str, value: &FieldValue) -> Option<String> {
    let mut text = value.to_string();
    let response = ui.add_sized(
        [ui.available_width(), 28.0],
        egui::TextEdit::singleline(&mut text).id_salt(id),
    );
    response.changed().then_some(text)
}

pub fn domain_hint(spec: &FieldSpec) -> String {
    match spec.kind {
        FieldKind::Numeric { min, max, .. } => format!("Expected a whole number {min}–{max}"),
        FieldKind::Categorical { options, .. } => format!("Expected one of: {}", options.join(", ")),
    }
}
