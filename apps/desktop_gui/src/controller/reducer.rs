//! Form state and the reducer that applies UI actions and backend events to it.
//!
//! `FormState` is the only writer of the form record and the prediction
//! result. UI actions may produce a backend command; backend events never do.

use std::collections::BTreeSet;

use chrono::{DateTime, Local};
use client_core::{Profile, SubmissionPolicy};
use shared::{FormRecord, PredictionResult};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub enum UiAction {
    EditField { name: &'static str, raw: String },
    Submit,
    Reset,
    CheckBackend,
}

pub struct FormState {
    pub record: FormRecord,
    pub result: Option<PredictionResult>,
    pub result_updated_at: Option<DateTime<Local>>,
    pub profile: Profile,
    pub policy: SubmissionPolicy,
    pub status: String,
    next_ticket: u64,
    in_flight: BTreeSet<u64>,
    /// Tickets below this are stale under `SubmissionPolicy::LatestRequest`.
    newest_applied: u64,
}

impl FormState {
    pub fn new(profile: Profile, policy: SubmissionPolicy) -> Self {
        Self {
            record: FormRecord::default(),
            result: None,
            result_updated_at: None,
            profile,
            policy,
            status: "Ready".to_string(),
            next_ticket: 1,
            in_flight: BTreeSet::new(),
            newest_applied: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Profiles with a loading state refuse new submissions while one is
    /// outstanding; the others always accept.
    pub fn can_submit(&self) -> bool {
        !(self.profile.shows_loading() && self.is_busy())
    }

    fn begin_submission(&mut self) -> BackendCommand {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight.insert(ticket);
        tracing::info!(ticket, profile = %self.profile, "submitting form");
        BackendCommand::Submit {
            ticket,
            record: self.record.clone(),
        }
    }

    /// Applies a finished submission. Returns whether it replaced the result.
    fn settle(&mut self, ticket: u64, result: PredictionResult) -> bool {
        self.in_flight.remove(&ticket);

        if self.policy == SubmissionPolicy::LatestRequest && ticket < self.newest_applied {
            tracing::debug!(ticket, newest = self.newest_applied, "dropping stale prediction");
            return false;
        }
        self.newest_applied = self.newest_applied.max(ticket);

        self.status = match &result {
            PredictionResult::Outcome(reply) => format!("Prediction received: {}", reply.label),
            PredictionResult::Failed { kind, detail } => {
                UiError::new(UiErrorContext::Submit, Some(*kind), detail.as_str()).status_line()
            }
        };
        self.result = Some(result);
        self.result_updated_at = Some(Local::now());
        true
    }
}

/// Applies a UI action. Returns the command to queue, if any.
pub fn reduce(state: &mut FormState, action: UiAction) -> Option<BackendCommand> {
    match action {
        UiAction::EditField { name, raw } => {
            if !state.record.update_field(name, raw) {
                tracing::warn!(field = name, "edit for unknown field ignored");
            }
            None
        }
        UiAction::Submit => {
            if !state.can_submit() {
                return None;
            }
            state.status = if state.profile.shows_loading() {
                "Predicting…".to_string()
            } else {
                "Request sent".to_string()
            };
            Some(state.begin_submission())
        }
        UiAction::Reset => {
            state.record.reset();
            state.result = None;
            state.result_updated_at = None;
            // Anything issued before the reset is stale under latest-request.
            state.newest_applied = state.next_ticket;
            state.status = "Form reset to defaults".to_string();
            None
        }
        UiAction::CheckBackend => Some(BackendCommand::CheckBackend),
    }
}

/// Forgets a submission whose command never reached the worker, so it does
/// not hold the form busy. The status line written by the failed dispatch is
/// kept.
pub fn abandon_submission(state: &mut FormState, ticket: u64) {
    if state.in_flight.remove(&ticket) {
        tracing::warn!(ticket, "submission not queued; released");
    }
}

/// Applies an event coming back from the worker.
pub fn apply_event(state: &mut FormState, event: UiEvent) {
    match event {
        UiEvent::Info(message) => state.status = message,
        UiEvent::PredictionSettled { ticket, result } => {
            state.settle(ticket, result);
        }
        UiEvent::BackendHealth(Ok(banner)) => {
            state.status = format!("Backend reachable: {}", banner.trim());
        }
        UiEvent::BackendHealth(Err(err)) => state.status = err.status_line(),
        UiEvent::Error(err) => state.status = err.status_line(),
    }
}
