use crate::bucket::YearSeason;
use kfd_obs::observation::DailyObservation;
use kfd_obs::season::Season;
use serde::Serialize;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::hash::Hash;

/// The reduction applied to each bucket's contributing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Mean,
    Sum,
    Max,
    Count,
}

impl Aggregation {
    /// Reduce a bucket's values to a scalar. Empty buckets reduce to `None`,
    /// never to a fabricated zero.
    pub fn reduce(&self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        match self {
            Aggregation::Mean => Some(values.iter().sum::<f64>() / values.len() as f64),
            Aggregation::Sum => Some(values.iter().sum()),
            Aggregation::Max => values.iter().copied().max_by(|a, b| a.total_cmp(b)),
            Aggregation::Count => Some(values.len() as f64),
        }
    }
}

/// Group rows by a bucket key and reduce each group.
///
/// Rows for which the bucket function or the value accessor yields `None`
/// are excluded silently; they never reach a bucket.
pub fn aggregate<K, B, V>(
    rows: &[DailyObservation],
    bucket: B,
    value: V,
    kind: Aggregation,
) -> HashMap<K, f64>
where
    K: Eq + Hash,
    B: Fn(&DailyObservation) -> Option<K>,
    V: Fn(&DailyObservation) -> Option<f64>,
{
    let mut groups: HashMap<K, Vec<f64>> = HashMap::new();
    for row in rows {
        let (Some(key), Some(v)) = (bucket(row), value(row)) else {
            continue;
        };
        groups.entry(key).or_default().push(v);
    }
    groups
        .into_iter()
        .filter_map(|(key, values)| kind.reduce(&values).map(|agg| (key, agg)))
        .collect()
}

/// A year × season aggregation with the full season cross-product retained.
///
/// `years` holds every observed year in ascending order; `cells` holds only
/// buckets that had contributing rows. Flattening enumerates all
/// `|years| × 4` combinations so chart grids keep a fixed size, with absent
/// combinations explicitly marked missing.
#[derive(Debug, Clone)]
pub struct SeasonGrid {
    pub years: Vec<i32>,
    pub cells: HashMap<YearSeason, f64>,
}

/// One flattened grid cell. `value` is `None` for seasons with no
/// contributing rows — the cell is emitted anyway.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonCell {
    pub year: i32,
    pub season: &'static str,
    pub value: Option<f64>,
}

impl SeasonGrid {
    /// Aggregate rows into a year × season grid.
    pub fn build<B, V>(rows: &[DailyObservation], bucket: B, value: V, kind: Aggregation) -> SeasonGrid
    where
        B: Fn(&DailyObservation) -> YearSeason,
        V: Fn(&DailyObservation) -> Option<f64>,
    {
        let cells = aggregate(rows, |r| Some(bucket(r)), value, kind);
        let mut years: Vec<i32> = cells.keys().map(|k| k.year).collect();
        years.sort_unstable();
        years.dedup();
        log::debug!("season grid: {} cells over {} years", cells.len(), years.len());
        SeasonGrid { years, cells }
    }

    /// Full cross-product of observed years and the four seasons.
    pub fn flatten(&self) -> Vec<SeasonCell> {
        let mut out = Vec::with_capacity(self.years.len() * Season::ALL.len());
        for &year in &self.years {
            for season in Season::ALL {
                out.push(SeasonCell {
                    year,
                    season: season.label(),
                    value: self.cells.get(&YearSeason { year, season }).copied(),
                });
            }
        }
        out
    }

    /// Mean of the present season values per year, in year order.
    /// Years whose four cells are all missing yield `None`.
    pub fn year_means(&self) -> Vec<(i32, Option<f64>)> {
        self.years
            .iter()
            .map(|&year| {
                let values: Vec<f64> = Season::ALL
                    .iter()
                    .filter_map(|&season| self.cells.get(&YearSeason { year, season }).copied())
                    .collect();
                (year, Aggregation::Mean.reduce(&values))
            })
            .collect()
    }
}

/// Combined wind statistics for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindAggregate {
    /// Arithmetic mean of the speed samples, m/s.
    pub mean_speed: f64,
    /// Speed-weighted circular mean direction, degrees in [0, 360).
    pub mean_direction: f64,
}

/// Speed-weighted circular mean of `(speed, direction°)` samples.
///
/// Directions are combined as vectors — `Σ speed·cos(dir)` and
/// `Σ speed·sin(dir)` divided by the total speed weight (floored at 1.0),
/// reconstructed with `atan2` and normalized to [0, 360). Arithmetic
/// averaging of the angles would be wrong at the 0°/360° wraparound.
pub fn wind_vector_mean(samples: &[(f64, f64)]) -> Option<WindAggregate> {
    if samples.is_empty() {
        return None;
    }
    let mean_speed = samples.iter().map(|(s, _)| s).sum::<f64>() / samples.len() as f64;
    let weight = samples.iter().map(|(s, _)| s).sum::<f64>().max(1.0);
    let cos_mean = samples
        .iter()
        .map(|(s, d)| (d * PI / 180.0).cos() * s)
        .sum::<f64>()
        / weight;
    let sin_mean = samples
        .iter()
        .map(|(s, d)| (d * PI / 180.0).sin() * s)
        .sum::<f64>()
        / weight;
    let mut direction = sin_mean.atan2(cos_mean) * 180.0 / PI;
    if direction < 0.0 {
        direction += 360.0;
    }
    Some(WindAggregate {
        mean_speed,
        mean_direction: direction,
    })
}

/// Group rows by bucket and combine each group's wind samples.
/// Rows missing speed or direction never reach a bucket.
pub fn wind_by_bucket<K, B>(rows: &[DailyObservation], bucket: B) -> HashMap<K, WindAggregate>
where
    K: Eq + Hash,
    B: Fn(&DailyObservation) -> Option<K>,
{
    let mut groups: HashMap<K, Vec<(f64, f64)>> = HashMap::new();
    for row in rows {
        let (Some(key), Some(speed), Some(dir)) = (bucket(row), row.wind_speed, row.wind_direction)
        else {
            continue;
        };
        groups.entry(key).or_default().push((speed, dir));
    }
    groups
        .into_iter()
        .filter_map(|(key, samples)| wind_vector_mean(&samples).map(|w| (key, w)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::{year_season_by_month, YearSeason};
    use chrono::NaiveDate;
    use kfd_obs::observation::DailyObservation;
    use kfd_obs::season::Season;

    fn obs(date: &str, pm10: Option<f64>) -> DailyObservation {
        DailyObservation {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            region: "서울 중구".to_string(),
            pm10,
            temperature: None,
            rainfall: None,
            wind_speed: None,
            wind_direction: None,
            vehicles: None,
            plant: None,
        }
    }

    #[test]
    fn test_reduce_kinds() {
        let values = [40.0, 60.0, 20.0];
        assert_eq!(Aggregation::Mean.reduce(&values), Some(40.0));
        assert_eq!(Aggregation::Sum.reduce(&values), Some(120.0));
        assert_eq!(Aggregation::Max.reduce(&values), Some(60.0));
        assert_eq!(Aggregation::Count.reduce(&values), Some(3.0));
        assert_eq!(Aggregation::Mean.reduce(&[]), None);
    }

    #[test]
    fn test_duplication_keeps_mean_doubles_sum() {
        let rows = vec![obs("2021-03-15", Some(40.0)), obs("2021-03-20", Some(60.0))];
        let mut doubled = rows.clone();
        doubled.extend(rows.clone());

        let mean =
            |rs: &[DailyObservation]| aggregate(rs, |_| Some(()), |r| r.pm10, Aggregation::Mean);
        let sum =
            |rs: &[DailyObservation]| aggregate(rs, |_| Some(()), |r| r.pm10, Aggregation::Sum);

        assert_eq!(mean(&rows)[&()], mean(&doubled)[&()]);
        assert_eq!(sum(&rows)[&()] * 2.0, sum(&doubled)[&()]);
    }

    #[test]
    fn test_season_grid_cross_product() {
        // Two years of data, only one season populated each.
        let rows = vec![
            obs("2021-03-15", Some(40.0)),
            obs("2021-03-20", Some(60.0)),
            obs("2022-07-01", Some(30.0)),
        ];
        let grid = SeasonGrid::build(&rows, year_season_by_month, |r| r.pm10, Aggregation::Mean);
        let flat = grid.flatten();
        assert_eq!(flat.len(), 2 * 4);

        let spring_2021 = flat
            .iter()
            .find(|c| c.year == 2021 && c.season == "봄")
            .unwrap();
        assert_eq!(spring_2021.value, Some(50.0));

        // All other 2021 seasons are present but explicitly missing.
        for cell in flat.iter().filter(|c| c.year == 2021 && c.season != "봄") {
            assert_eq!(cell.value, None);
        }
    }

    #[test]
    fn test_unparsable_dates_never_bucketed() {
        // The normalizer rejects these before bucketing; simulate the full
        // path through csv parsing.
        let csv = "일시,지역,PM10\nnot-a-date,서울 중구,44\n2021-03-15,서울 중구,40\n";
        let rows = DailyObservation::csv_to_observations(csv).unwrap();
        let grid = SeasonGrid::build(&rows, year_season_by_month, |r| r.pm10, Aggregation::Mean);
        assert_eq!(grid.years, vec![2021]);
        assert_eq!(
            grid.cells[&YearSeason {
                year: 2021,
                season: Season::Spring
            }],
            40.0
        );
    }

    #[test]
    fn test_csv_to_spring_mean_end_to_end() {
        let csv = "일시,지역,PM10\n2021-03-15,서울 중구,40\n2021-03-20,서울 중구,60\n";
        let rows = DailyObservation::csv_to_observations(csv).unwrap();
        let grid = SeasonGrid::build(&rows, year_season_by_month, |r| r.pm10, Aggregation::Mean);
        let flat = grid.flatten();
        assert_eq!(flat.len(), 4);
        for cell in &flat {
            assert_eq!(cell.year, 2021);
            if cell.season == "봄" {
                assert_eq!(cell.value, Some(50.0));
            } else {
                assert_eq!(cell.value, None);
            }
        }
    }

    #[test]
    fn test_wind_vector_mean_wraparound() {
        // Equal speeds, symmetric around north: the naive arithmetic mean
        // would report 180°; the vector mean must report 0°.
        let samples = [(5.0, 350.0), (5.0, 10.0)];
        let wind = wind_vector_mean(&samples).unwrap();
        assert!(wind.mean_direction.abs() < 1e-9 || (wind.mean_direction - 360.0).abs() < 1e-9);
        assert!((wind.mean_speed - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_wind_vector_mean_weighting() {
        // A strong easterly should dominate a weak westerly.
        let samples = [(9.0, 90.0), (1.0, 270.0)];
        let wind = wind_vector_mean(&samples).unwrap();
        assert!((wind.mean_direction - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_wind_zero_speed_bucket() {
        let wind = wind_vector_mean(&[(0.0, 45.0), (0.0, 135.0)]).unwrap();
        assert_eq!(wind.mean_speed, 0.0);
        assert_eq!(wind.mean_direction, 0.0);
    }
}
