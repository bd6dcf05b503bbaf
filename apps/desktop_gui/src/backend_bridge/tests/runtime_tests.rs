use super::*;
use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use client_core::{Profile, SubmissionPolicy, SubmitError};
use crossbeam_channel::bounded;
use shared::{FormRecord, PredictionReply, PredictionResult, ProtocolError, ResultDisplay};

use crate::controller::reducer::{apply_event, reduce, FormState, UiAction};

type Scripted = Result<PredictionReply, String>;

/// Answers by the record's `Age` value, each after its own delay.
struct ScriptedService {
    script: HashMap<String, (Duration, Scripted)>,
}

impl ScriptedService {
    fn new(script: Vec<(&str, Duration, Scripted)>) -> Arc<Self> {
        Arc::new(Self {
            script: script
                .into_iter()
                .map(|(age, delay, answer)| (age.to_string(), (delay, answer)))
                .collect(),
        })
    }
}

#[async_trait]
impl PredictionService for ScriptedService {
    async fn predict(&self, record: &FormRecord) -> Result<PredictionReply, SubmitError> {
        let age = record
            .get("Age")
            .map(|value| value.to_string())
            .unwrap_or_default();
        let (delay, answer) = self.script.get(&age).cloned().expect("unscripted call");
        tokio::time::sleep(delay).await;
        answer.map_err(|message| SubmitError::Protocol(ProtocolError::Backend(message)))
    }

    async fn health(&self) -> Result<String, SubmitError> {
        Ok("scripted backend".to_string())
    }
}

fn reply(label: &str) -> Scripted {
    Ok(PredictionReply {
        label: label.to_string(),
        probability: None,
    })
}

fn shown(state: &FormState) -> Option<ResultDisplay> {
    state.result.as_ref().and_then(PredictionResult::display)
}

fn recv_until<T>(rx: &Receiver<UiEvent>, mut pick: impl FnMut(UiEvent) -> Option<T>) -> T {
    loop {
        let event = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("event from worker");
        if let Some(found) = pick(event) {
            return found;
        }
    }
}

fn run_race(policy: SubmissionPolicy) -> (FormState, Vec<u64>) {
    let service = ScriptedService::new(vec![
        ("30", Duration::from_millis(300), reply("Yes")),
        ("31", Duration::from_millis(10), reply("No")),
    ]);
    let (cmd_tx, cmd_rx) = bounded(16);
    let (ui_tx, ui_rx) = bounded(16);
    let _worker = launch(cmd_rx, ui_tx, service);

    let mut state = FormState::new(Profile::Labeled, policy);
    for age in ["30", "31"] {
        reduce(
            &mut state,
            UiAction::EditField {
                name: "Age",
                raw: age.to_string(),
            },
        );
        let cmd = reduce(&mut state, UiAction::Submit).expect("submit command");
        cmd_tx.send(cmd).expect("queue submit");
    }

    let mut arrival = Vec::new();
    while arrival.len() < 2 {
        let (ticket, result) = recv_until(&ui_rx, |event| match event {
            UiEvent::PredictionSettled { ticket, result } => Some((ticket, result)),
            _ => None,
        });
        arrival.push(ticket);
        apply_event(&mut state, UiEvent::PredictionSettled { ticket, result });
    }
    (state, arrival)
}

#[test]
fn slower_earlier_submission_overwrites_faster_later_one() {
    let (state, arrival) = run_race(SubmissionPolicy::LastWriteWins);

    assert_eq!(arrival, vec![2, 1]);
    assert_eq!(shown(&state), Some(ResultDisplay::WillLeave));
    assert!(!state.is_busy());
}

#[test]
fn latest_request_policy_keeps_newest_ticket_result() {
    let (state, arrival) = run_race(SubmissionPolicy::LatestRequest);

    assert_eq!(arrival, vec![2, 1]);
    assert_eq!(shown(&state), Some(ResultDisplay::WillStay));
}

#[test]
fn failed_submission_settles_as_error() {
    let service = ScriptedService::new(vec![("35", Duration::ZERO, Err("boom".to_string()))]);
    let (cmd_tx, cmd_rx) = bounded(4);
    let (ui_tx, ui_rx) = bounded(4);
    let _worker = launch(cmd_rx, ui_tx, service);

    cmd_tx
        .send(BackendCommand::Submit {
            ticket: 7,
            record: FormRecord::default(),
        })
        .expect("queue submit");

    let (ticket, display) = recv_until(&ui_rx, |event| match event {
        UiEvent::PredictionSettled { ticket, result } => Some((ticket, result.display())),
        _ => None,
    });
    assert_eq!(ticket, 7);
    assert_eq!(display, Some(ResultDisplay::Error));
}

#[test]
fn check_backend_reports_health() {
    let service = ScriptedService::new(Vec::new());
    let (cmd_tx, cmd_rx) = bounded(4);
    let (ui_tx, ui_rx) = bounded(4);
    let _worker = launch(cmd_rx, ui_tx, service);

    cmd_tx
        .send(BackendCommand::CheckBackend)
        .expect("queue check");

    let health = recv_until(&ui_rx, |event| match event {
        UiEvent::BackendHealth(health) => Some(health),
        _ => None,
    });
    assert_eq!(health, Ok("scripted backend".to_string()));
}
