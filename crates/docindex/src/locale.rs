//! Fixed Korean-locale date rendering
//!
//! Index pages always show times in Korea Standard Time, formatted the way the
//! `ko-KR` locale prints them, no matter where the build runs.

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

/// Korea Standard Time, UTC+9 (no daylight saving)
pub const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Annotation appended to localized timestamps
pub const KST_SUFFIX: &str = " (GMT+9)";

/// The fixed UTC+9 offset
#[must_use]
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Date and 12-hour time, e.g. `2024. 1. 5. 오후 3:04:05 (GMT+9)`
#[must_use]
pub fn localized_datetime(at: DateTime<Utc>) -> String {
    let local = at.with_timezone(&kst());
    let (is_pm, hour) = local.hour12();
    format!(
        "{} {} {}:{:02}:{:02}{}",
        date_part(local),
        if is_pm { "오후" } else { "오전" },
        hour,
        local.minute(),
        local.second(),
        KST_SUFFIX
    )
}

/// Date only, e.g. `2024. 1. 5.`
#[must_use]
pub fn localized_date(at: DateTime<Utc>) -> String {
    date_part(at.with_timezone(&kst()))
}

fn date_part(local: DateTime<FixedOffset>) -> String {
    format!("{}. {}. {}.", local.year(), local.month(), local.day())
}
