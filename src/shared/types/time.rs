use chrono::{Local, NaiveDate};

/// Current calendar date in the server's local time zone.
///
/// Registration stamps `start_date` / `last_date` with this value, which
/// serializes as `YYYY-MM-DD`.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_iso_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-03-07\"");
    }

    #[test]
    fn today_matches_local_clock() {
        assert_eq!(today_local(), Local::now().date_naive());
    }
}
