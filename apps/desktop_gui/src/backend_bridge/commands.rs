//! Backend commands queued from UI to backend worker.

use shared::FormRecord;

pub enum BackendCommand {
    /// Submit a snapshot of the form. `ticket` orders submissions.
    Submit { ticket: u64, record: FormRecord },
    CheckBackend,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Submit { .. } => "submit",
            BackendCommand::CheckBackend => "check_backend",
        }
    }

    pub fn ticket(&self) -> Option<u64> {
        match self {
            BackendCommand::Submit { ticket, .. } => Some(*ticket),
            BackendCommand::CheckBackend => None,
        }
    }
}
