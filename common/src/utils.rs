use chrono::{Local, NaiveDateTime};

pub const COLLECTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn get_current_time() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_collected_at(time: &NaiveDateTime) -> String {
    time.format(COLLECTED_AT_FORMAT).to_string()
}
