use std::time::Duration;

pub const FONT_SIZE_TITLE: f32 = 32.0;
pub const FONT_SIZE_LABEL: f32 = 16.0;
pub const FONT_SIZE_STATUS: f32 = 18.0;
pub const FONT_SIZE_BUTTON: f32 = 16.0;
pub const FONT_SIZE_REPORT: f32 = 15.0;

pub const TICK_INTERVAL: Duration = Duration::from_millis(450);

/// How long the success status banner stays up before reverting to ready.
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(3);

/// How long the copy button shows its acknowledgment label.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);
