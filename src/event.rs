use chrono::{Datelike, NaiveDateTime, Timelike};

const ITALIAN_MONTHS: [&str; 12] = [
    "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno",
    "luglio", "agosto", "settembre", "ottobre", "novembre", "dicembre",
];

/// Date part of the live badge, e.g. "20 gennaio 2026".
pub fn italian_date(start: &NaiveDateTime) -> String {
    // month0() is always in 0..12
    let month = ITALIAN_MONTHS[start.month0() as usize];
    format!("{} {} {}", start.day(), month, start.year())
}

/// Time part of the live badge, e.g. "Ore 19:00".
pub fn italian_time(start: &NaiveDateTime) -> String {
    format!("Ore {:02}:{:02}", start.hour(), start.minute())
}
