use crate::aggregate::{aggregate, Aggregation, SeasonGrid, WindAggregate};
use crate::bucket;
use chrono::Datelike;
use kfd_obs::observation::DailyObservation;
use kfd_obs::region;
use kfd_obs::season::Season;
use kfd_geo::feature::{feature_collection, DistrictFeature, ProvinceFeature};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A single (date, value) pair used for line chart data points.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateValue {
    pub date: String,
    pub value: f64,
}

/// Daily mean of a measurement across all regions, sorted by date.
pub fn daily_mean_series<V>(rows: &[DailyObservation], value: V) -> Vec<DateValue>
where
    V: Fn(&DailyObservation) -> Option<f64>,
{
    let by_date = aggregate(rows, |r| Some(r.date), value, Aggregation::Mean);
    let mut series: Vec<DateValue> = by_date
        .into_iter()
        .map(|(date, value)| DateValue {
            date: date.format("%Y-%m-%d").to_string(),
            value,
        })
        .collect();
    series.sort_by(|a, b| a.date.cmp(&b.date));
    series
}

/// Mean of a measurement per province. Rows whose abbreviation does not
/// resolve are excluded from the join.
pub fn province_mean<V>(rows: &[DailyObservation], value: V) -> HashMap<&'static str, f64>
where
    V: Fn(&DailyObservation) -> Option<f64>,
{
    aggregate(
        rows,
        |r| bucket::province_of(r).ok(),
        value,
        Aggregation::Mean,
    )
}

/// Merge per-province values into the province features for choropleth
/// rendering. Provinces without a value get `value: null` and render with
/// the neutral "no data" fill.
pub fn province_choropleth(
    provinces: &[ProvinceFeature],
    values: &HashMap<&'static str, f64>,
) -> Value {
    let features = provinces
        .iter()
        .map(|p| {
            let value = values.get(p.province.as_str());
            p.to_feature(json!({ "value": value }))
        })
        .collect();
    feature_collection(features)
}

/// Merge per-province wind aggregates into the province features.
pub fn wind_choropleth(
    provinces: &[ProvinceFeature],
    winds: &HashMap<&'static str, WindAggregate>,
) -> Value {
    let features = provinces
        .iter()
        .map(|p| match winds.get(p.province.as_str()) {
            Some(w) => p.to_feature(json!({
                "meanSpeed": w.mean_speed,
                "meanDirection": w.mean_direction,
            })),
            None => p.to_feature(json!({ "meanSpeed": null, "meanDirection": null })),
        })
        .collect();
    feature_collection(features)
}

/// A node of the hierarchy trees fed to the sunburst and hierarchical-bar
/// charts. Leaves carry their aggregate in `value`; internal nodes carry
/// either a sum of their leaves (sum tree) or a mean used for color only
/// (mean tree).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(name: String, value: f64) -> TreeNode {
        TreeNode {
            name,
            value: Some(value),
            children: Vec::new(),
        }
    }
}

/// Year → season tree with mean values, for the sunburst.
///
/// Each year node's value is the rounded mean over the year's rows; it is
/// used for color encoding only and must never be summed into ancestor
/// totals — the sunburst sums leaf (season) values exclusively. Seasons use
/// the day-precise calendar, as the Seoul panel always has.
pub fn mean_tree<V>(root_name: &str, rows: &[DailyObservation], value: V) -> TreeNode
where
    V: Fn(&DailyObservation) -> Option<f64> + Copy,
{
    let season_means = aggregate(
        rows,
        |r| Some(bucket::year_season_precise(r)),
        value,
        Aggregation::Mean,
    );
    let year_means = aggregate(rows, |r| Some(r.date.year()), value, Aggregation::Mean);

    let mut years: Vec<i32> = year_means.keys().copied().collect();
    years.sort_unstable();

    let children = years
        .into_iter()
        .map(|year| {
            let seasons = Season::ALL
                .iter()
                .filter_map(|&season| {
                    season_means
                        .get(&bucket::YearSeason { year, season })
                        .map(|mean| TreeNode::leaf(season.label().to_string(), mean.round()))
                })
                .collect();
            TreeNode {
                name: year.to_string(),
                value: year_means.get(&year).map(|m| m.round()),
                children: seasons,
            }
        })
        .collect();

    TreeNode {
        name: root_name.to_string(),
        value: None,
        children,
    }
}

/// Year → season → month tree where every node is the sum of its leaves,
/// for the drill-down hierarchical bar. Seasons use the month-range
/// calendar.
pub fn sum_tree<V>(root_name: &str, rows: &[DailyObservation], value: V) -> TreeNode
where
    V: Fn(&DailyObservation) -> Option<f64>,
{
    let month_sums = aggregate(
        rows,
        |r| Some((r.date.year(), r.date.month())),
        value,
        Aggregation::Sum,
    );

    let mut by_year: BTreeMap<i32, BTreeMap<u32, f64>> = BTreeMap::new();
    for ((year, month), sum) in month_sums {
        by_year.entry(year).or_default().insert(month, sum);
    }

    let children: Vec<TreeNode> = by_year
        .into_iter()
        .map(|(year, months)| {
            let mut seasons: Vec<TreeNode> = Season::ALL
                .iter()
                .filter_map(|&season| {
                    let leaves: Vec<TreeNode> = months
                        .iter()
                        .filter(|(&month, _)| Season::from_month(month) == season)
                        .map(|(&month, &sum)| TreeNode::leaf(format!("{month}월"), sum))
                        .collect();
                    if leaves.is_empty() {
                        return None;
                    }
                    let total = leaves.iter().filter_map(|l| l.value).sum();
                    Some(TreeNode {
                        name: season.label().to_string(),
                        value: Some(total),
                        children: leaves,
                    })
                })
                .collect();
            seasons.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
            let total = seasons.iter().filter_map(|s| s.value).sum();
            TreeNode {
                name: format!("{year}년"),
                value: Some(total),
                children: seasons,
            }
        })
        .collect();

    let total = children.iter().filter_map(|c| c.value).sum();
    TreeNode {
        name: root_name.to_string(),
        value: Some(total),
        children,
    }
}

/// Color domain shared by the heatmap and sunburst: min/max over all
/// present grid cells plus the per-year means. `None` for an empty grid.
pub fn color_domain(grid: &SeasonGrid) -> Option<(f64, f64)> {
    let values: Vec<f64> = grid
        .cells
        .values()
        .copied()
        .chain(grid.year_means().into_iter().filter_map(|(_, m)| m))
        .collect();
    let min = values.iter().copied().min_by(|a, b| a.total_cmp(b))?;
    let max = values.iter().copied().max_by(|a, b| a.total_cmp(b))?;
    Some((min, max))
}

/// Monthly PM10 means split into plant / non-plant district groups.
/// A month with rows on only one side keeps 0 on the other — the bar race
/// stacks the two series and needs both bars every month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantMonthRow {
    pub month: String,
    pub plant: f64,
    pub nplant: f64,
}

pub fn plant_month_rows<V>(rows: &[DailyObservation], value: V) -> Vec<PlantMonthRow>
where
    V: Fn(&DailyObservation) -> Option<f64>,
{
    let grouped = aggregate(
        rows,
        |r| r.plant.map(|flag| (bucket::year_month_of(r), flag)),
        value,
        Aggregation::Mean,
    );
    let mut months: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for ((month, flag), mean) in grouped {
        let entry = months.entry(month).or_insert((0.0, 0.0));
        if flag == 1 {
            entry.0 = mean;
        } else {
            entry.1 = mean;
        }
    }
    months
        .into_iter()
        .map(|(month, (plant, nplant))| PlantMonthRow {
            month,
            plant,
            nplant,
        })
        .collect()
}

/// Full region names ("서울특별시 중구") of districts that had a power
/// plant in the given year. Unresolvable regions are excluded.
pub fn plant_districts(rows: &[DailyObservation], year: i32) -> HashSet<String> {
    let presence = aggregate(
        rows,
        |r| {
            if r.date.year() != year {
                return None;
            }
            region::full_region_name(&r.region).ok()
        },
        |r| r.plant.map(f64::from),
        Aggregation::Max,
    );
    presence
        .into_iter()
        .filter(|(_, max)| *max > 0.0)
        .map(|(name, _)| name)
        .collect()
}

/// District features annotated with plant presence for the bubble map.
pub fn power_plant_features(districts: &[DistrictFeature], plants: &HashSet<String>) -> Value {
    let features = districts
        .iter()
        .map(|d| {
            let has_plant = d
                .full_name()
                .map(|full| plants.contains(&full))
                .unwrap_or(false);
            d.to_feature(json!({ "hasPlant": has_plant }))
        })
        .collect();
    feature_collection(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::SeasonGrid;
    use crate::bucket::year_season_precise;
    use chrono::NaiveDate;

    fn obs(date: &str, region: &str, pm10: Option<f64>, plant: Option<u8>) -> DailyObservation {
        DailyObservation {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            region: region.to_string(),
            pm10,
            temperature: None,
            rainfall: None,
            wind_speed: None,
            wind_direction: None,
            vehicles: None,
            plant,
        }
    }

    fn seoul_square() -> ProvinceFeature {
        ProvinceFeature {
            code_prefix: "11".to_string(),
            province: "서울특별시".to_string(),
            polygons: vec![vec![vec![
                [126.9, 37.4],
                [127.1, 37.4],
                [127.1, 37.6],
                [126.9, 37.6],
                [126.9, 37.4],
            ]]],
        }
    }

    #[test]
    fn test_daily_mean_series_sorted() {
        let rows = vec![
            obs("2021-03-20", "서울 중구", Some(60.0), None),
            obs("2021-03-15", "서울 중구", Some(40.0), None),
            obs("2021-03-15", "부산 기장군", Some(20.0), None),
        ];
        let series = daily_mean_series(&rows, |r| r.pm10);
        assert_eq!(
            series,
            vec![
                DateValue {
                    date: "2021-03-15".to_string(),
                    value: 30.0
                },
                DateValue {
                    date: "2021-03-20".to_string(),
                    value: 60.0
                },
            ]
        );
    }

    #[test]
    fn test_province_mean_joins_both_abbreviations() {
        // Distinct region cells under one province must land in one bucket.
        let rows = vec![
            obs("2021-03-15", "서울 중구", Some(40.0), None),
            obs("2021-03-16", "서울 종로구", Some(60.0), None),
            obs("2021-03-17", "괴지역 어딘가", Some(99.0), None),
        ];
        let means = province_mean(&rows, |r| r.pm10);
        assert_eq!(means.len(), 1);
        assert_eq!(means["서울특별시"], 50.0);
    }

    #[test]
    fn test_province_choropleth_missing_value_is_null() {
        let provinces = vec![seoul_square()];
        let collection = province_choropleth(&provinces, &HashMap::new());
        let feature = &collection["features"][0];
        assert_eq!(feature["properties"]["province"], "서울특별시");
        assert!(feature["properties"]["value"].is_null());
    }

    #[test]
    fn test_mean_tree_values() {
        let rows = vec![
            obs("2021-03-15", "서울 중구", Some(40.0), None),
            obs("2021-03-20", "서울 중구", Some(60.0), None),
            obs("2021-07-02", "서울 중구", Some(30.0), None),
        ];
        let tree = mean_tree("서울 중구", &rows, |r| r.pm10);
        assert_eq!(tree.children.len(), 1);
        let year = &tree.children[0];
        assert_eq!(year.name, "2021");
        // year mean over rows: (40+60+30)/3 rounded
        assert_eq!(year.value, Some(43.0));
        // spring mean 50, summer 30; absent seasons have no node
        assert_eq!(year.children.len(), 2);
        assert_eq!(year.children[0].name, "봄");
        assert_eq!(year.children[0].value, Some(50.0));
        assert_eq!(year.children[1].name, "여름");
        assert_eq!(year.children[1].value, Some(30.0));
    }

    #[test]
    fn test_sum_tree_totals() {
        let rows = vec![
            obs("2021-03-15", "서울 중구", Some(40.0), None),
            obs("2021-03-20", "서울 중구", Some(60.0), None),
            obs("2021-12-01", "서울 중구", Some(10.0), None),
        ];
        let tree = sum_tree("미세먼지 합계", &rows, |r| r.pm10);
        assert_eq!(tree.value, Some(110.0));
        let year = &tree.children[0];
        assert_eq!(year.name, "2021년");
        assert_eq!(year.value, Some(110.0));
        // seasons sorted by value descending: spring 100, winter 10
        assert_eq!(year.children[0].name, "봄");
        assert_eq!(year.children[0].value, Some(100.0));
        assert_eq!(year.children[0].children[0].name, "3월");
        assert_eq!(year.children[1].name, "겨울");
        assert_eq!(year.children[1].value, Some(10.0));
    }

    #[test]
    fn test_color_domain_covers_year_means() {
        let rows = vec![
            obs("2021-03-15", "서울 중구", Some(40.0), None),
            obs("2021-07-02", "서울 중구", Some(80.0), None),
        ];
        let grid = SeasonGrid::build(&rows, year_season_precise, |r| r.pm10, Aggregation::Mean);
        // cells are 40 and 80, year mean 60 sits inside the domain
        assert_eq!(color_domain(&grid), Some((40.0, 80.0)));
    }

    #[test]
    fn test_plant_month_rows_default_zero() {
        let rows = vec![
            obs("2021-03-15", "부산 기장군", Some(30.0), Some(1)),
            obs("2021-04-02", "서울 중구", Some(50.0), Some(0)),
        ];
        let months = plant_month_rows(&rows, |r| r.pm10);
        assert_eq!(
            months,
            vec![
                PlantMonthRow {
                    month: "2021-03".to_string(),
                    plant: 30.0,
                    nplant: 0.0
                },
                PlantMonthRow {
                    month: "2021-04".to_string(),
                    plant: 0.0,
                    nplant: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_plant_districts_filters_year() {
        let rows = vec![
            obs("2021-03-15", "부산 기장군", Some(30.0), Some(1)),
            obs("2022-03-15", "울산 울주군", Some(30.0), Some(1)),
            obs("2021-03-15", "서울 중구", Some(50.0), Some(0)),
        ];
        let plants = plant_districts(&rows, 2021);
        assert!(plants.contains("부산광역시 기장군"));
        assert!(!plants.contains("울산광역시 울주군"));
        assert!(!plants.contains("서울특별시 중구"));
    }
}
