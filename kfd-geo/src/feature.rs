use crate::topology::{KoreaTopology, MultiPolygon};
use kfd_obs::region;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// One district (시·군·구) boundary with its administrative code.
#[derive(Debug, Clone, Serialize)]
pub struct DistrictFeature {
    pub code: String,
    pub name: String,
    pub polygons: MultiPolygon,
}

impl DistrictFeature {
    /// The 2-digit province prefix of the administrative code.
    pub fn code_prefix(&self) -> &str {
        self.code.get(..2).unwrap_or("")
    }

    /// Official full name, "서울특별시 중구". `None` when the code prefix is
    /// not in the province table.
    pub fn full_name(&self) -> Option<String> {
        let province = region::province_for_code_prefix(self.code_prefix()).ok()?;
        Some(format!("{province} {}", self.name))
    }

    /// GeoJSON Feature with the given extra properties merged in.
    pub fn to_feature(&self, extra: Value) -> Value {
        let mut properties = json!({
            "code": self.code,
            "name": self.name,
            "fullName": self.full_name(),
        });
        merge_properties(&mut properties, extra);
        json!({
            "type": "Feature",
            "properties": properties,
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": self.polygons,
            },
        })
    }
}

/// All districts of one province merged into a single multipolygon,
/// joined to observations by the long-form province name.
#[derive(Debug, Clone, Serialize)]
pub struct ProvinceFeature {
    pub code_prefix: String,
    pub province: String,
    pub polygons: MultiPolygon,
}

impl ProvinceFeature {
    /// GeoJSON Feature with the given extra properties merged in.
    pub fn to_feature(&self, extra: Value) -> Value {
        let mut properties = json!({
            "codePrefix": self.code_prefix,
            "province": self.province,
        });
        merge_properties(&mut properties, extra);
        json!({
            "type": "Feature",
            "properties": properties,
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": self.polygons,
            },
        })
    }
}

impl KoreaTopology {
    /// Merge district features into one feature per province, keyed by the
    /// 2-digit code prefix. Districts with an unmapped prefix are dropped.
    pub fn provinces(&self) -> Vec<ProvinceFeature> {
        let mut merged: BTreeMap<&str, MultiPolygon> = BTreeMap::new();
        let mut dropped = 0u32;
        for district in &self.districts {
            let prefix = district.code_prefix();
            if region::province_for_code_prefix(prefix).is_err() {
                dropped += 1;
                continue;
            }
            merged
                .entry(prefix)
                .or_default()
                .extend(district.polygons.iter().cloned());
        }
        if dropped > 0 {
            log::warn!("dropped {dropped} districts with unmapped code prefixes");
        }
        merged
            .into_iter()
            .map(|(prefix, polygons)| ProvinceFeature {
                code_prefix: prefix.to_string(),
                province: region::province_for_code_prefix(prefix)
                    .expect("prefix checked above")
                    .to_string(),
                polygons,
            })
            .collect()
    }
}

/// Wrap features into a GeoJSON FeatureCollection.
pub fn feature_collection(features: Vec<Value>) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn merge_properties(properties: &mut Value, extra: Value) {
    if let (Some(base), Some(more)) = (properties.as_object_mut(), extra.as_object()) {
        for (key, value) in more {
            base.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::KoreaTopology;

    fn square(x: f64) -> MultiPolygon {
        vec![vec![vec![
            [x, 37.0],
            [x + 1.0, 37.0],
            [x + 1.0, 38.0],
            [x, 38.0],
            [x, 37.0],
        ]]]
    }

    fn topo() -> KoreaTopology {
        KoreaTopology {
            districts: vec![
                DistrictFeature {
                    code: "11010".to_string(),
                    name: "중구".to_string(),
                    polygons: square(126.0),
                },
                DistrictFeature {
                    code: "11020".to_string(),
                    name: "종로구".to_string(),
                    polygons: square(127.0),
                },
                DistrictFeature {
                    code: "99999".to_string(),
                    name: "무소속".to_string(),
                    polygons: square(128.0),
                },
            ],
        }
    }

    #[test]
    fn test_provinces_merges_by_prefix() {
        let provinces = topo().provinces();
        // the unmapped 99 prefix is dropped, both 11* districts merge
        assert_eq!(provinces.len(), 1);
        assert_eq!(provinces[0].province, "서울특별시");
        assert_eq!(provinces[0].polygons.len(), 2);
    }

    #[test]
    fn test_full_name() {
        let topo = topo();
        assert_eq!(
            topo.districts[0].full_name(),
            Some("서울특별시 중구".to_string())
        );
        assert_eq!(topo.districts[2].full_name(), None);
    }

    #[test]
    fn test_feature_serialization() {
        let provinces = topo().provinces();
        let feature = provinces[0].to_feature(serde_json::json!({"value": 41.5}));
        assert_eq!(feature["properties"]["province"], "서울특별시");
        assert_eq!(feature["properties"]["value"], 41.5);
        assert_eq!(feature["geometry"]["type"], "MultiPolygon");

        let collection = feature_collection(vec![feature]);
        assert_eq!(collection["features"].as_array().unwrap().len(), 1);
    }
}
