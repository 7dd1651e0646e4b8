use chrono::NaiveDate;

use crate::Season;

/// The year every arrival in an intake file is admitted.
pub const ARRIVAL_YEAR: i32 = 2024;

/// Arrival date stamped on every admitted record, rendered as "YYYY-MM-DD".
pub const ARRIVAL_DATE: &str = "2024-03-05";

/// Synthesizes a birth date from a stated age and season of birth.
///
/// The birth year is the fixed arrival year minus the age; the month and day
/// come from the season lookup. Always succeeds.
pub fn derive_birth_date(age: u32, season: Season) -> NaiveDate {
    let year = i64::from(ARRIVAL_YEAR) - i64::from(age);
    let (month, day) = season.month_day();
    i32::try_from(year)
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_each_season() {
        assert_eq!(
            derive_birth_date(4, Season::Spring).to_string(),
            "2020-03-15"
        );
        assert_eq!(
            derive_birth_date(0, Season::Summer).to_string(),
            "2024-06-15"
        );
        assert_eq!(derive_birth_date(10, Season::Fall).to_string(), "2014-09-15");
        assert_eq!(
            derive_birth_date(1, Season::Winter).to_string(),
            "2023-12-15"
        );
    }

    #[test]
    fn birth_dates_match_iso_shape() {
        let rendered = derive_birth_date(7, Season::Winter).to_string();
        let parts: Vec<&str> = rendered.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 2);
    }
}
