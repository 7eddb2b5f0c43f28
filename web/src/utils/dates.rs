//! Helpers for the plain `yyyy-mm-dd` date strings the reservation pages
//! pass around. Zero-padded strings compare correctly lexicographically, so
//! ordering checks stay plain `str` comparisons.

/// Checks that `date` is a real calendar date written as `yyyy-mm-dd`.
pub fn is_valid_ymd(date: &str) -> bool {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return false;
    }
    let (y, m, d) = (parts[0], parts[1], parts[2]);
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return false;
    }
    if !date.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return false;
    }

    let year = match y.parse::<i32>() {
        Ok(year) => year,
        Err(_) => return false,
    };
    let month = match m.parse::<u32>() {
        Ok(month) => month,
        Err(_) => return false,
    };
    let day = match d.parse::<u32>() {
        Ok(day) => day,
        Err(_) => return false,
    };

    (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month)
}

/// Whether `date` may be picked given an optional earliest selectable date.
pub fn date_allowed(date: &str, min: Option<&str>) -> bool {
    if !is_valid_ymd(date) {
        return false;
    }
    match min {
        Some(min) => date >= min,
        None => true,
    }
}

/// A range is ordered while either end is still unset or check-in is not
/// after check-out.
pub fn range_is_ordered(start: &str, end: &str) -> bool {
    start.is_empty() || end.is_empty() || start <= end
}

/// Today's date on the hydrated client; `None` server-side, where the
/// browser clock is out of reach.
pub fn today_ymd() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = now.get_full_year() as i32;
        let month = now.get_month() as u32 + 1;
        let day = now.get_date() as u32;
        Some(format!("{year:04}-{month:02}-{day:02}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_dates() {
        assert!(is_valid_ymd("2026-01-31"));
        assert!(is_valid_ymd("2024-02-29"));
        assert!(is_valid_ymd("2000-02-29"));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(!is_valid_ymd(""));
        assert!(!is_valid_ymd("2026/01/31"));
        assert!(!is_valid_ymd("26-01-31"));
        assert!(!is_valid_ymd("2026-1-31"));
        assert!(!is_valid_ymd("2026-01-31T00:00"));
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(!is_valid_ymd("2026-13-01"));
        assert!(!is_valid_ymd("2026-00-10"));
        assert!(!is_valid_ymd("2026-04-31"));
        assert!(!is_valid_ymd("2026-02-29"));
        assert!(!is_valid_ymd("1900-02-29"));
    }

    #[test]
    fn floor_is_inclusive() {
        assert!(date_allowed("2026-08-08", Some("2026-08-08")));
        assert!(date_allowed("2026-08-09", Some("2026-08-08")));
        assert!(!date_allowed("2026-08-07", Some("2026-08-08")));
    }

    #[test]
    fn no_floor_allows_any_valid_date() {
        assert!(date_allowed("1999-12-31", None));
        assert!(!date_allowed("not-a-date", None));
    }

    #[test]
    fn range_ordering() {
        assert!(range_is_ordered("", ""));
        assert!(range_is_ordered("2026-08-08", ""));
        assert!(range_is_ordered("", "2026-08-10"));
        assert!(range_is_ordered("2026-08-08", "2026-08-08"));
        assert!(range_is_ordered("2026-08-08", "2026-08-10"));
        assert!(!range_is_ordered("2026-08-10", "2026-08-08"));
    }
}
