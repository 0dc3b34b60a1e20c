//! State of a self-contained result panel (visualization, statistics).
//!
//! Panel failures stay inside the panel; they never reach the main error
//! banner. Each panel sequences its own requests.

use crate::request::{RequestSequencer, RequestToken};

/// What a panel currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent<T> {
    Idle,
    Ready(T),
    /// Inline error message.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState<T> {
    pub loading: bool,
    pub content: PanelContent<T>,
    requests: RequestSequencer,
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            content: PanelContent::Idle,
            requests: RequestSequencer::new(),
        }
    }
}

impl<T> PanelState<T> {
    /// Clear the panel, show the loading flag and issue a token.
    pub fn begin(&mut self) -> RequestToken {
        self.loading = true;
        self.content = PanelContent::Idle;
        self.requests.issue()
    }

    /// Store the outcome of `token`'s request. Returns false (and changes
    /// nothing) when a newer request has been issued since.
    pub fn finish(&mut self, token: RequestToken, content: PanelContent<T>) -> bool {
        if !self.requests.is_current(token) {
            return false;
        }
        self.loading = false;
        self.content = content;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_clears_previous_content() {
        let mut panel: PanelState<&str> = PanelState::default();
        let token = panel.begin();
        assert!(panel.finish(token, PanelContent::Ready("chart")));
        assert!(!panel.loading);

        panel.begin();
        assert!(panel.loading);
        assert_eq!(panel.content, PanelContent::Idle);
    }

    #[test]
    fn test_stale_finish_is_ignored() {
        let mut panel: PanelState<&str> = PanelState::default();
        let old = panel.begin();
        let new = panel.begin();
        assert!(!panel.finish(old, PanelContent::Failed("timeout".to_string())));
        assert!(panel.loading);
        assert!(panel.finish(new, PanelContent::Ready("humidity")));
        assert_eq!(panel.content, PanelContent::Ready("humidity"));
    }
}
