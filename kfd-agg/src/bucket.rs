use chrono::Datelike;
use kfd_obs::observation::DailyObservation;
use kfd_obs::region::{self, RegionError};
use kfd_obs::season::Season;
use serde::Serialize;

/// A year × season bucket key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct YearSeason {
    pub year: i32,
    pub season: Season,
}

/// Calendar year of the observation.
pub fn year_of(obs: &DailyObservation) -> i32 {
    obs.date.year()
}

/// Year × season key using the month-range season partition.
pub fn year_season_by_month(obs: &DailyObservation) -> YearSeason {
    YearSeason {
        year: obs.date.year(),
        season: Season::from_month(obs.date.month()),
    }
}

/// Year × season key using the day-precise season partition.
pub fn year_season_precise(obs: &DailyObservation) -> YearSeason {
    YearSeason {
        year: obs.date.year(),
        season: Season::from_date_precise(&obs.date),
    }
}

/// Long-form province name for the observation's region cell.
/// Unresolvable abbreviations are an error; callers drop the row.
pub fn province_of(obs: &DailyObservation) -> Result<&'static str, RegionError> {
    region::long_province_name(obs.abbreviation())
}

/// Month key "YYYY-MM" for monthly series.
pub fn year_month_of(obs: &DailyObservation) -> String {
    obs.date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(date: &str, region: &str) -> DailyObservation {
        DailyObservation {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            region: region.to_string(),
            pm10: None,
            temperature: None,
            rainfall: None,
            wind_speed: None,
            wind_direction: None,
            vehicles: None,
            plant: None,
        }
    }

    #[test]
    fn test_year_season_keys() {
        let row = obs("2022-05-31", "서울 중구");
        // month partition calls May spring; the day-precise one calls
        // May 31 summer
        assert_eq!(
            year_season_by_month(&row),
            YearSeason {
                year: 2022,
                season: Season::Spring
            }
        );
        assert_eq!(
            year_season_precise(&row),
            YearSeason {
                year: 2022,
                season: Season::Summer
            }
        );
    }

    #[test]
    fn test_province_of() {
        assert_eq!(province_of(&obs("2021-01-01", "충북 청주시")), Ok("충청북도"));
        assert!(province_of(&obs("2021-01-01", "외계 어딘가")).is_err());
    }

    #[test]
    fn test_year_month_of() {
        assert_eq!(year_month_of(&obs("2023-07-04", "서울 중구")), "2023-07");
    }
}
