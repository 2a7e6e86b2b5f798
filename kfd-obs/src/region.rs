use std::fmt;

/// Number of first-level administrative divisions (시·도).
pub const PROVINCE_COUNT: usize = 17;

/// CSV abbreviation → official long-form province name.
pub const SHORT_TO_LONG: [(&str, &str); PROVINCE_COUNT] = [
    ("서울", "서울특별시"),
    ("부산", "부산광역시"),
    ("대구", "대구광역시"),
    ("인천", "인천광역시"),
    ("광주", "광주광역시"),
    ("대전", "대전광역시"),
    ("울산", "울산광역시"),
    ("세종", "세종특별자치시"),
    ("경기", "경기도"),
    ("강원", "강원특별자치도"),
    ("충북", "충청북도"),
    ("충남", "충청남도"),
    ("전북", "전라북도"),
    ("전남", "전라남도"),
    ("경북", "경상북도"),
    ("경남", "경상남도"),
    ("제주", "제주특별자치도"),
];

/// Two-digit administrative code prefix → official long-form province name.
/// Keys match the leading digits of the topology feature codes.
pub const CODE_PREFIX_TO_PROVINCE: [(&str, &str); PROVINCE_COUNT] = [
    ("11", "서울특별시"),
    ("21", "부산광역시"),
    ("22", "대구광역시"),
    ("23", "인천광역시"),
    ("24", "광주광역시"),
    ("25", "대전광역시"),
    ("26", "울산광역시"),
    ("29", "세종특별자치시"),
    ("31", "경기도"),
    ("32", "강원특별자치도"),
    ("33", "충청북도"),
    ("34", "충청남도"),
    ("35", "전라북도"),
    ("36", "전라남도"),
    ("37", "경상북도"),
    ("38", "경상남도"),
    ("39", "제주특별자치도"),
];

/// Region resolution failures. Unmapped inputs are errors, never guesses;
/// pipeline callers drop the offending row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    EmptyRegion,
    UnknownAbbreviation(String),
    UnknownCodePrefix(String),
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::EmptyRegion => write!(f, "empty region cell"),
            RegionError::UnknownAbbreviation(abbr) => {
                write!(f, "unknown province abbreviation: {abbr}")
            }
            RegionError::UnknownCodePrefix(prefix) => {
                write!(f, "unknown administrative code prefix: {prefix}")
            }
        }
    }
}

impl std::error::Error for RegionError {}

/// Resolve a CSV abbreviation ("서울") to the official name ("서울특별시").
pub fn long_province_name(abbr: &str) -> Result<&'static str, RegionError> {
    let trimmed = abbr.trim();
    if trimmed.is_empty() {
        return Err(RegionError::EmptyRegion);
    }
    SHORT_TO_LONG
        .iter()
        .find(|(short, _)| *short == trimmed)
        .map(|(_, long)| *long)
        .ok_or_else(|| RegionError::UnknownAbbreviation(trimmed.to_string()))
}

/// Resolve a 2-digit code prefix ("11") to the official province name.
pub fn province_for_code_prefix(prefix: &str) -> Result<&'static str, RegionError> {
    CODE_PREFIX_TO_PROVINCE
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, long)| *long)
        .ok_or_else(|| RegionError::UnknownCodePrefix(prefix.to_string()))
}

/// Expand a raw region cell ("서울 중구") to its official full form
/// ("서울특별시 중구"). Used for district-granularity joins.
pub fn full_region_name(region: &str) -> Result<String, RegionError> {
    let mut parts = region.split_whitespace();
    let abbr = parts.next().ok_or(RegionError::EmptyRegion)?;
    let long = long_province_name(abbr)?;
    match parts.next() {
        Some(district) => Ok(format!("{long} {district}")),
        None => Ok(long.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_province_name() {
        assert_eq!(long_province_name("서울"), Ok("서울특별시"));
        assert_eq!(long_province_name(" 제주 "), Ok("제주특별자치도"));
        assert_eq!(
            long_province_name("한양"),
            Err(RegionError::UnknownAbbreviation("한양".to_string()))
        );
        assert_eq!(long_province_name(""), Err(RegionError::EmptyRegion));
    }

    #[test]
    fn test_province_for_code_prefix() {
        assert_eq!(province_for_code_prefix("11"), Ok("서울특별시"));
        assert_eq!(province_for_code_prefix("39"), Ok("제주특별자치도"));
        assert_eq!(
            province_for_code_prefix("99"),
            Err(RegionError::UnknownCodePrefix("99".to_string()))
        );
    }

    #[test]
    fn test_tables_agree_on_long_names() {
        // Every long-form name reachable through an abbreviation must also be
        // reachable through a code prefix, so CSV rows and topology features
        // join on identical keys.
        for (_, long) in SHORT_TO_LONG {
            assert!(
                CODE_PREFIX_TO_PROVINCE.iter().any(|(_, l)| *l == long),
                "no code prefix for {long}"
            );
        }
    }

    #[test]
    fn test_full_region_name() {
        assert_eq!(
            full_region_name("서울 중구"),
            Ok("서울특별시 중구".to_string())
        );
        assert_eq!(full_region_name("세종"), Ok("세종특별자치시".to_string()));
        assert!(full_region_name("달나라 월구").is_err());
    }
}
