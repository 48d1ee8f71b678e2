//! Status indicator - one-shot backend reachability checks

use chrono::{DateTime, Local};

use crate::messages::network::CallResult;

/// Indicator state for the current (or last) check
#[derive(Clone, Debug, PartialEq)]
pub enum StatusState {
    Checking,
    Connected,
    Failed { message: String },
}

impl StatusState {
    /// Map a finished `/status` call onto the indicator
    pub fn from_result(result: CallResult) -> Self {
        match result {
            Ok(resp) if resp.is_success() => StatusState::Connected,
            Ok(resp) => StatusState::Failed {
                message: resp.error_message().unwrap_or_default(),
            },
            Err(message) => StatusState::Failed { message },
        }
    }
}

/// The dashboard's status indicator.
///
/// Only the most recently started check may settle the indicator; results
/// for older ids are dropped.
#[derive(Clone, Debug)]
pub struct StatusIndicator {
    pub state: StatusState,
    pub last_checked: Option<DateTime<Local>>,
    pending: Option<u64>,
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusIndicator {
    pub fn new() -> Self {
        StatusIndicator {
            state: StatusState::Checking,
            last_checked: None,
            pending: None,
        }
    }

    /// Enter `Checking` for a new check with the given id
    pub fn begin(&mut self, id: u64) {
        self.state = StatusState::Checking;
        self.pending = Some(id);
    }

    /// Settle the indicator. Returns false if `id` is not the pending check.
    pub fn finish(&mut self, id: u64, result: CallResult) -> bool {
        if self.pending != Some(id) {
            tracing::debug!(id, pending = ?self.pending, "Dropping stale status result");
            return false;
        }
        self.pending = None;
        self.state = StatusState::from_result(result);
        self.last_checked = Some(Local::now());
        true
    }

    pub fn is_checking(&self) -> bool {
        self.pending.is_some()
    }
}
