use chrono::{Datelike, NaiveDate, Weekday};

/// Today's local date, from the browser clock
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn today_weekday() -> Weekday {
    today().weekday()
}

/// Planner header date, e.g. "Saturday, October 18"
pub fn format_plan_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// Short duration label, e.g. "45 min" or "1h 30m"
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Daily budget label, e.g. "2.5 hours"
pub fn format_hours(hours: f64) -> String {
    if hours == 1.0 {
        "1 hour".to_string()
    } else {
        format!("{} hours", hours)
    }
}
