use crate::preferences::{Language, StyleType};

#[derive(Debug, Clone)]
pub enum Message {
    TopicChanged(String),
    StepsChanged(String),
    SubmitPressed,
    RequestFinished(Result<String, String>),
    Tick,
    CopyReport,
    SaveReport,
    ClearPressed,
    ToggleSettings,
    Settings(SettingsMessage),
    ThemeChanged(StyleType),
    LanguageChanged(Language),
    ClearError,
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    EndpointChanged(String),
    TimeoutChanged(String),
    Save,
    Dismiss,
}
