use client_core::{Profile, SubmissionPolicy};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{schema, Section};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{abandon_submission, apply_event, reduce, FormState, UiAction};
use crate::ui::panels::show_result_panel;
use crate::ui::widgets::field_control;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub backend_url: String,
    pub profile: Profile,
    pub submission_policy: SubmissionPolicy,
}

pub struct AttritionApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    backend_url: String,
    state: FormState,
}

impl AttritionApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            backend_url: startup.backend_url,
            state: FormState::new(startup.profile, startup.submission_policy),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_event(&mut self.state, event);
        }
    }

    fn act(&mut self, action: UiAction) {
        let Some(cmd) = reduce(&mut self.state, action) else {
            return;
        };
        let ticket = cmd.ticket();
        if !dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state.status) {
            if let Some(ticket) = ticket {
                abandon_submission(&mut self.state, ticket);
            }
        }
    }

    fn show_section(&self, ui: &mut egui::Ui, section: Section, edits: &mut Vec<UiAction>) {
        ui.add_space(18.0);
        ui.heading(format!("{} {}", section.icon(), section.title()));
        ui.add_space(6.0);

        let enforce_bounds = self.state.profile.enforces_bounds();
        let fields: Vec<_> = schema::fields_in(section).collect();
        egui::Grid::new(section.title())
            .num_columns(2)
            .spacing([20.0, 14.0])
            .min_col_width(ui.available_width() / 2.0 - 20.0)
            .show(ui, |ui| {
                for pair in fields.chunks(2) {
                    for spec in pair {
                        let Some(value) = self.state.record.get(spec.name) else {
                            continue;
                        };
                        ui.vertical(|ui| {
                            if let Some(raw) = field_control(ui, spec, value, enforce_bounds) {
                                edits.push(UiAction::EditField {
                                    name: spec.name,
                                    raw,
                                });
                            }
                        });
                    }
                    ui.end_row();
                }
            });
    }

    fn show_actions(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.horizontal(|ui| {
            let loading = self.state.profile.shows_loading() && self.state.is_busy();
            let caption = if loading { "Predicting…" } else { "Predict" };
            let button = egui::Button::new(egui::RichText::new(caption).strong().size(16.0))
                .fill(egui::Color32::from_rgb(0x00, 0x7b, 0xff))
                .min_size(egui::vec2(140.0, 40.0));

            if ui.add_enabled(self.state.can_submit(), button).clicked() {
                self.act(UiAction::Submit);
            }
            if loading {
                ui.spinner();
            }
            if ui.button("Reset").clicked() {
                self.act(UiAction::Reset);
            }
            if ui.button("Check backend").clicked() {
                self.act(UiAction::CheckBackend);
            }
        });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.state.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!(
                        "{} · {} · {}",
                        self.backend_url, self.state.profile, self.state.policy
                    ));
                });
            });
        });
    }
}

impl eframe::App for AttritionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_status_bar(ctx);

        let mut edits = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_max_width(900.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Attrition Prediction");
                });

                for section in Section::ALL {
                    self.show_section(ui, section, &mut edits);
                }
                for edit in edits.drain(..) {
                    self.act(edit);
                }

                self.show_actions(ui);
                ui.add_space(24.0);
                show_result_panel(ui, self.state.result.as_ref(), self.state.result_updated_at);
            });
        });

        if self.state.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
