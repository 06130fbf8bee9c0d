use iced::Color;

use crate::preferences::Language;
use crate::translations;

/// One research request at a time: the submit trigger is disabled while
/// Loading, so Loading is only ever entered from an interactive state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Loading,
    Success,
    Failure { error: String },
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    text: String,
    color: Color,
}

impl StatusLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn ready(language: Language) -> Self {
        StatusLine {
            text: translations::status_ready(language).to_string(),
            color: Color::from_rgb8(200, 200, 200),
        }
    }
}

impl RequestState {
    pub fn status_line(&self, language: Language, waiting_dots: usize) -> StatusLine {
        match self {
            RequestState::Idle => StatusLine::ready(language),
            RequestState::Loading => StatusLine {
                text: format!(
                    "{}{}",
                    translations::status_loading(language),
                    ".".repeat(waiting_dots)
                ),
                color: Color::from_rgb8(140, 200, 255),
            },
            RequestState::Success => StatusLine {
                text: translations::status_success(language).to_string(),
                color: Color::from_rgb8(140, 220, 160),
            },
            RequestState::Failure { error } => StatusLine {
                text: format!("{}: {}", translations::status_failed(language), error),
                color: Color::from_rgb8(255, 150, 150),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// State to adopt when the form is cleared. Clearing never cancels an
    /// in-flight request, so Loading stays Loading and the submit trigger
    /// stays disabled until the request settles.
    pub fn after_clear(&self) -> RequestState {
        if self.is_loading() {
            RequestState::Loading
        } else {
            RequestState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_counts_as_loading() {
        assert!(RequestState::Loading.is_loading());
        assert!(!RequestState::Idle.is_loading());
        assert!(!RequestState::Success.is_loading());
        assert!(!RequestState::Failure {
            error: "boom".to_string()
        }
        .is_loading());
    }

    #[test]
    fn failure_status_carries_the_error_text() {
        let state = RequestState::Failure {
            error: "bad topic".to_string(),
        };
        let line = state.status_line(Language::English, 0);
        assert!(line.text().contains("bad topic"));
    }

    #[test]
    fn clearing_mid_request_keeps_the_trigger_disabled() {
        // A second submission must stay blocked until the first settles.
        let cleared = RequestState::Loading.after_clear();
        assert!(cleared.is_loading());

        assert_eq!(RequestState::Idle.after_clear(), RequestState::Idle);
        assert_eq!(RequestState::Success.after_clear(), RequestState::Idle);
        assert_eq!(
            RequestState::Failure {
                error: "boom".to_string()
            }
            .after_clear(),
            RequestState::Idle
        );
    }

    #[test]
    fn loading_status_animates_waiting_dots() {
        let line = RequestState::Loading.status_line(Language::English, 3);
        assert!(line.text().ends_with("..."));
    }
}
