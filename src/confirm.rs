//! Confirmation gate for destructive operations.
//!
//! An explicit two-state machine instead of ambient mutable modal state: the
//! gate is either `Closed` or holds exactly one pending action token plus the
//! message to show. Opening while something is pending replaces it; there is
//! no queue.

/// Gate state, parameterised over the action token a screen wants confirmed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmGate<T> {
    Closed,
    Pending { message: String, action: T },
}

impl<T> ConfirmGate<T> {
    pub fn new() -> Self {
        ConfirmGate::Closed
    }

    /// Request confirmation. Any previously pending action is discarded.
    pub fn open(&mut self, message: impl Into<String>, action: T) {
        *self = ConfirmGate::Pending {
            message: message.into(),
            action,
        };
    }

    /// Confirm: hand back the pending token and reset to closed.
    /// Returns `None` when nothing was pending.
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::replace(self, ConfirmGate::Closed) {
            ConfirmGate::Pending { action, .. } => Some(action),
            ConfirmGate::Closed => None,
        }
    }

    /// Cancel: reset to closed without invoking anything.
    pub fn cancel(&mut self) {
        *self = ConfirmGate::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmGate::Pending { .. })
    }

    /// Message of the pending confirmation, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ConfirmGate::Pending { message, .. } => Some(message),
            ConfirmGate::Closed => None,
        }
    }
}

impl<T> Default for ConfirmGate<T> {
    fn default() -> Self {
        Self::new()
    }
}
