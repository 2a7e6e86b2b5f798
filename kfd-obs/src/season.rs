use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One of the four Korean seasons used to bucket observations.
///
/// Two calendar partitions coexist in the charts and both are kept:
/// [`Season::from_month`] is the plain month-range partition used by the
/// seasonal maps and grouped bars, while [`Season::from_date_precise`]
/// shifts the boundaries by day-of-month and is used by the Seoul
/// heatmap/sunburst pair. They disagree for boundary dates on purpose; do
/// not merge them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Display order: 봄, 여름, 가을, 겨울.
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Month-range partition: 3-5 spring, 6-8 summer, 9-11 autumn, 12/1/2 winter.
    pub fn from_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// Day-precise partition: spring 3/1-5/30, summer 5/31-9/25,
    /// autumn 9/26-12/3, winter otherwise.
    pub fn from_date_precise(date: &NaiveDate) -> Season {
        let m = date.month();
        let d = date.day();
        if (m == 3) || (m == 4) || (m == 5 && d <= 30) {
            Season::Spring
        } else if (m == 5 && d >= 31) || (m > 5 && m < 9) || (m == 9 && d <= 25) {
            Season::Summer
        } else if (m == 9 && d >= 26) || (m == 10) || (m == 11) || (m == 12 && d <= 3) {
            Season::Autumn
        } else {
            Season::Winter
        }
    }

    /// Korean label used on filter buttons and axes.
    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "봄",
            Season::Summer => "여름",
            Season::Autumn => "가을",
            Season::Winter => "겨울",
        }
    }

    /// Reverse lookup from a Korean label, for query-string round trips.
    pub fn from_label(label: &str) -> Option<Season> {
        Season::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::Season;
    use chrono::NaiveDate;

    #[test]
    fn test_from_month() {
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(11), Season::Autumn);
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
    }

    #[test]
    fn test_variants_disagree_on_boundary_dates() {
        // May 31 is summer in the day-precise calendar but spring by month.
        let may31 = NaiveDate::from_ymd_opt(2022, 5, 31).unwrap();
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_date_precise(&may31), Season::Summer);

        // September 20 is summer day-precise, autumn by month.
        let sep20 = NaiveDate::from_ymd_opt(2022, 9, 20).unwrap();
        assert_eq!(Season::from_month(9), Season::Autumn);
        assert_eq!(Season::from_date_precise(&sep20), Season::Summer);

        // December 2 is still autumn day-precise, winter by month.
        let dec2 = NaiveDate::from_ymd_opt(2022, 12, 2).unwrap();
        assert_eq!(Season::from_date_precise(&dec2), Season::Autumn);
        let dec4 = NaiveDate::from_ymd_opt(2022, 12, 4).unwrap();
        assert_eq!(Season::from_date_precise(&dec4), Season::Winter);
    }

    #[test]
    fn test_labels_round_trip() {
        for season in Season::ALL {
            assert_eq!(Season::from_label(season.label()), Some(season));
        }
        assert_eq!(Season::from_label("사계절"), None);
    }
}
