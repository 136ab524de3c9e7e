//! Connection and notice state shared across the page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Connection lifecycle of the live-update socket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

/// Severity of the banner notice under the extraction form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient status or error line shown to the user.
///
/// Status and error text share one slot, so whichever arrived last is
/// what the user sees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    /// A progress/status notice.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Page-level UI state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub connection: ConnectionStatus,
    pub notice: Option<Notice>,
}
