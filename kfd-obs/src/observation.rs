use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Date format used in the preprocessed observation CSV: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the "YYYY-MM-DD" prefix kept when a cell carries a full datetime.
pub const DATE_PREFIX_LEN: usize = 10;

/// Candidate header names per target field, tried in order; the first header
/// present in the file wins. Lookups are case-insensitive for ASCII headers.
pub const DATE_KEYS: &[&str] = &["일시", "date"];
pub const REGION_KEYS: &[&str] = &["지역", "region"];
pub const PM10_KEYS: &[&str] = &["PM10", "pm10"];
pub const TEMPERATURE_KEYS: &[&str] = &["평균기온(°C)", "temperature"];
pub const RAINFALL_KEYS: &[&str] = &["일강수량(mm)", "rainfall"];
pub const WIND_SPEED_KEYS: &[&str] = &["최대 풍속(m/s)", "wind_speed"];
pub const WIND_DIR_KEYS: &[&str] = &["최대 풍속 풍향(16방위)", "wind_direction"];
pub const VEHICLE_KEYS: &[&str] = &["일별등록대수", "vehicles"];
pub const PLANT_KEYS: &[&str] = &["발전소", "plant"];

/// One normalized daily observation for a single district.
///
/// The date and region are required; every measurement is optional and stays
/// `None` when the source cell was absent or non-numeric. Charts filter on
/// the measurement they need, so a row bad in one column still contributes
/// to charts that read another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    /// Trimmed region cell, e.g. "서울 중구" (abbreviation + district).
    pub region: String,
    pub pm10: Option<f64>,
    pub temperature: Option<f64>,
    pub rainfall: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees, 0..360.
    pub wind_direction: Option<f64>,
    pub vehicles: Option<f64>,
    /// Power-plant presence flag for the district (1 = plant present).
    pub plant: Option<u8>,
}

/// Header-resolution table built from the CSV header row.
///
/// Stores the trimmed header text per column and answers "which column holds
/// field X" by walking the candidate key list for X.
#[derive(Debug, Clone)]
pub struct FieldMap {
    headers: Vec<String>,
}

impl FieldMap {
    pub fn from_headers(headers: &StringRecord) -> FieldMap {
        FieldMap {
            headers: headers.iter().map(|h| h.trim().to_string()).collect(),
        }
    }

    /// Column index for the first candidate key present in the header row.
    pub fn resolve(&self, candidates: &[&str]) -> Option<usize> {
        for key in candidates {
            let found = self
                .headers
                .iter()
                .position(|h| h == key || h.eq_ignore_ascii_case(key));
            if found.is_some() {
                return found;
            }
        }
        None
    }

    fn cell<'r>(&self, record: &'r StringRecord, candidates: &[&str]) -> Option<&'r str> {
        self.resolve(candidates)
            .and_then(|idx| record.get(idx))
            .map(str::trim)
    }
}

/// Parse a date cell: either plain "YYYY-MM-DD" or a longer datetime string
/// whose first ten characters are that prefix. Anything else is a rejection.
pub fn parse_observation_date(cell: &str) -> Option<NaiveDate> {
    let trimmed = cell.trim();
    let prefix = if trimmed.len() > DATE_PREFIX_LEN {
        trimmed.get(..DATE_PREFIX_LEN)?
    } else {
        trimmed
    };
    NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok()
}

/// Coerce a measurement cell to a number. Empty or non-numeric cells become
/// `None` (missing), never zero.
pub fn parse_measurement(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl DailyObservation {
    /// Parse the full observation CSV into normalized rows.
    ///
    /// Rows without a parseable date or a region cell are dropped; the drop
    /// count is logged but never surfaced as an error.
    pub fn csv_to_observations(csv_data: &str) -> anyhow::Result<Vec<DailyObservation>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());
        let fields = FieldMap::from_headers(rdr.headers()?);

        let mut observations = Vec::new();
        let mut dropped = 0u32;
        for result in rdr.records() {
            let record = result?;
            match DailyObservation::from_record(&record, &fields) {
                Some(obs) => observations.push(obs),
                None => dropped += 1,
            }
        }
        log::info!(
            "normalized {} observations, dropped {} malformed rows",
            observations.len(),
            dropped
        );
        Ok(observations)
    }

    /// Normalize one raw record, or reject it with `None`.
    pub fn from_record(record: &StringRecord, fields: &FieldMap) -> Option<DailyObservation> {
        let date = parse_observation_date(fields.cell(record, DATE_KEYS)?)?;
        let region = fields.cell(record, REGION_KEYS)?;
        if region.is_empty() {
            return None;
        }
        let plant = fields
            .cell(record, PLANT_KEYS)
            .and_then(parse_measurement)
            .map(|v| if v > 0.0 { 1 } else { 0 });
        Some(DailyObservation {
            date,
            region: region.to_string(),
            pm10: fields.cell(record, PM10_KEYS).and_then(parse_measurement),
            temperature: fields
                .cell(record, TEMPERATURE_KEYS)
                .and_then(parse_measurement),
            rainfall: fields
                .cell(record, RAINFALL_KEYS)
                .and_then(parse_measurement),
            wind_speed: fields
                .cell(record, WIND_SPEED_KEYS)
                .and_then(parse_measurement),
            wind_direction: fields
                .cell(record, WIND_DIR_KEYS)
                .and_then(parse_measurement),
            vehicles: fields
                .cell(record, VEHICLE_KEYS)
                .and_then(parse_measurement),
            plant,
        })
    }

    /// The province abbreviation: first whitespace-separated token of the
    /// region cell ("서울 중구" → "서울").
    pub fn abbreviation(&self) -> &str {
        self.region.split_whitespace().next().unwrap_or("")
    }

    /// The district part of the region cell, when present ("서울 중구" → "중구").
    pub fn district(&self) -> Option<&str> {
        self.region.split_whitespace().nth(1)
    }
}

impl PartialEq for DailyObservation {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.region == other.region
    }
}

impl Eq for DailyObservation {}

impl Ord for DailyObservation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.region.cmp(&other.region))
    }
}

impl PartialOrd for DailyObservation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const STR_RESULT: &str = "\
일시,지역,PM10,평균기온(°C),일강수량(mm),최대 풍속(m/s),최대 풍속 풍향(16방위),일별등록대수,발전소
2021-03-15,서울 중구,40,12.1,0.0,3.4,270,151220,0
2021-03-20,서울 중구,60,13.9,1.2,2.8,180,151302,0
2021-07-02,부산 기장군,22,24.5,8.0,6.1,90,98211,1
bad-date,서울 중구,55,14.0,0.0,1.0,45,151400,0
2021-08-01,인천 중구,,25.0,,4.2,135,77010,0
";

    #[test]
    fn test_csv_to_observations() {
        let observations = DailyObservation::csv_to_observations(STR_RESULT).unwrap();
        // the bad-date row is dropped
        assert_eq!(observations.len(), 4);
        assert_eq!(observations[0].pm10, Some(40.0));
        assert_eq!(
            observations[0].date,
            NaiveDate::from_ymd_opt(2021, 3, 15).unwrap()
        );
        assert_eq!(observations[2].plant, Some(1));
        // empty PM10 cell stays missing, not zero
        assert_eq!(observations[3].pm10, None);
        assert_eq!(observations[3].rainfall, None);
    }

    #[test]
    fn test_field_map_priority_and_case() {
        let headers = StringRecord::from(vec!["Date", "Region", "pm10"]);
        let fields = FieldMap::from_headers(&headers);
        assert_eq!(fields.resolve(DATE_KEYS), Some(0));
        assert_eq!(fields.resolve(REGION_KEYS), Some(1));
        assert_eq!(fields.resolve(PM10_KEYS), Some(2));
        assert_eq!(fields.resolve(RAINFALL_KEYS), None);
    }

    #[test]
    fn test_parse_observation_date_prefix() {
        let expected = NaiveDate::from_ymd_opt(2022, 1, 31).unwrap();
        assert_eq!(parse_observation_date("2022-01-31"), Some(expected));
        assert_eq!(parse_observation_date("2022-01-31 09:00"), Some(expected));
        assert_eq!(parse_observation_date("20220131"), None);
        assert_eq!(parse_observation_date(""), None);
    }

    #[test]
    fn test_parse_measurement_rejects_non_numeric() {
        assert_eq!(parse_measurement("41.5"), Some(41.5));
        assert_eq!(parse_measurement("  7 "), Some(7.0));
        assert_eq!(parse_measurement(""), None);
        assert_eq!(parse_measurement("---"), None);
        assert_eq!(parse_measurement("NaN"), None);
    }

    #[test]
    fn test_abbreviation_and_district() {
        let observations = DailyObservation::csv_to_observations(STR_RESULT).unwrap();
        assert_eq!(observations[0].abbreviation(), "서울");
        assert_eq!(observations[0].district(), Some("중구"));
        assert_eq!(observations[2].abbreviation(), "부산");
    }
}
