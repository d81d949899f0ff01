use chrono::{NaiveDate, NaiveDateTime};
use log::Level;

/// Third-party form-intake service receiving the registrations.
pub fn get_registration_endpoint() -> &'static str {
    "https://script.google.com/macros/s/AKfycbzo-CsuIDT8SdnsUrb-dFZjQZQbA1k1hUjcszlSfyoSN30mPjnDZF3LV66_36qBNvu58g/exec"
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Seconds shown on the countdown when the section mounts.
pub const COUNTDOWN_START_SECONDS: u32 = 5 * 60;

pub const COUNTDOWN_TICK_MILLIS: u32 = 1_000;

pub const SUBMIT_ERROR_MESSAGE: &str = "Si è verificato un errore. Riprova.";

/// Prefix shown in front of the phone input. It is not submitted.
pub const PHONE_PREFIX: &str = "+39";

pub const PRESENTATION_VIDEO_URL: &str =
    "https://drive.google.com/file/d/1QIjaguC1gqoMhhNgutfqckx6rqiHFjb_/preview";

/// Start of the live webinar, local Italian time.
pub fn get_event_start() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2026, 1, 20)?.and_hms_opt(19, 0, 0)
}
