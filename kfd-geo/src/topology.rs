use crate::feature::DistrictFeature;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A decoded point: [longitude, latitude].
pub type Point = [f64; 2];
/// A closed ring of points.
pub type Ring = Vec<Point>;
/// Outer ring plus holes.
pub type Polygon = Vec<Ring>;
/// A set of polygons forming one feature.
pub type MultiPolygon = Vec<Polygon>;

#[derive(Debug, Deserialize)]
struct RawTopology {
    transform: Option<Transform>,
    objects: BTreeMap<String, RawObject>,
    arcs: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct RawObject {
    geometries: Vec<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    arcs: Value,
    #[serde(default)]
    properties: RawProperties,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(default)]
    code: String,
    #[serde(default)]
    name: String,
}

/// The decoded district topology.
#[derive(Debug, Clone)]
pub struct KoreaTopology {
    pub districts: Vec<DistrictFeature>,
}

impl KoreaTopology {
    /// Parse and decode the topology JSON. Like the page's map components,
    /// this reads the first geometry collection in the file.
    pub fn from_json(json: &str) -> anyhow::Result<KoreaTopology> {
        let raw: RawTopology = serde_json::from_str(json).context("topology parse failed")?;
        let arcs = decode_arcs(&raw.arcs, raw.transform);
        let object = raw
            .objects
            .values()
            .next()
            .ok_or_else(|| anyhow!("topology has no geometry objects"))?;

        let mut districts = Vec::with_capacity(object.geometries.len());
        let mut skipped = 0u32;
        for geometry in &object.geometries {
            match decode_geometry(geometry, &arcs) {
                Some(polygons) => districts.push(DistrictFeature {
                    code: geometry.properties.code.clone(),
                    name: geometry.properties.name.clone(),
                    polygons,
                }),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            log::warn!("skipped {skipped} non-polygon geometries in topology");
        }
        log::info!("decoded {} district features", districts.len());
        Ok(KoreaTopology { districts })
    }
}

/// Decode delta-encoded quantized arcs to absolute coordinates. Files
/// without a transform already store absolute positions.
fn decode_arcs(raw_arcs: &[Vec<[f64; 2]>], transform: Option<Transform>) -> Vec<Ring> {
    raw_arcs
        .iter()
        .map(|arc| match transform {
            Some(t) => {
                let mut x = 0.0;
                let mut y = 0.0;
                arc.iter()
                    .map(|[dx, dy]| {
                        x += dx;
                        y += dy;
                        [
                            x * t.scale[0] + t.translate[0],
                            y * t.scale[1] + t.translate[1],
                        ]
                    })
                    .collect()
            }
            None => arc.clone(),
        })
        .collect()
}

/// Stitch one ring from its arc indices. A negative index `~i` means arc `i`
/// traversed backwards. The first point of every arc after the first
/// duplicates the junction and is dropped.
fn assemble_ring(indices: &[i64], arcs: &[Ring]) -> Option<Ring> {
    let mut ring: Ring = Vec::new();
    for &index in indices {
        let (arc_index, reversed) = if index < 0 {
            ((!index) as usize, true)
        } else {
            (index as usize, false)
        };
        let arc = arcs.get(arc_index)?;
        let mut points: Ring = if reversed {
            arc.iter().rev().copied().collect()
        } else {
            arc.clone()
        };
        if !ring.is_empty() && !points.is_empty() {
            points.remove(0);
        }
        ring.extend(points);
    }
    Some(ring)
}

fn ring_indices(value: &Value) -> Option<Vec<i64>> {
    value.as_array()?.iter().map(Value::as_i64).collect()
}

fn decode_polygon(arcs_value: &Value, arcs: &[Ring]) -> Option<Polygon> {
    arcs_value
        .as_array()?
        .iter()
        .map(|ring| assemble_ring(&ring_indices(ring)?, arcs))
        .collect()
}

fn decode_geometry(geometry: &RawGeometry, arcs: &[Ring]) -> Option<MultiPolygon> {
    match geometry.kind.as_str() {
        "Polygon" => Some(vec![decode_polygon(&geometry.arcs, arcs)?]),
        "MultiPolygon" => geometry
            .arcs
            .as_array()?
            .iter()
            .map(|polygon| decode_polygon(polygon, arcs))
            .collect(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two adjacent unit squares sharing one quantized edge.
    const TOPO: &str = r#"{
        "type": "Topology",
        "transform": {"scale": [0.001, 0.001], "translate": [126.0, 37.0]},
        "objects": {
            "districts": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "arcs": [[0, 1]],
                     "properties": {"code": "11010", "name": "중구"}},
                    {"type": "Polygon", "arcs": [[-1, 2]],
                     "properties": {"code": "31011", "name": "수원시"}}
                ]
            }
        },
        "arcs": [
            [[1000, 0], [0, 1000]],
            [[1000, 1000], [-1000, 0], [0, -1000], [1000, 0]],
            [[1000, 0], [1000, 0], [0, 1000], [-1000, 0]]
        ]
    }"#;

    #[test]
    fn test_from_json_decodes_districts() {
        let topo = KoreaTopology::from_json(TOPO).unwrap();
        assert_eq!(topo.districts.len(), 2);
        assert_eq!(topo.districts[0].code, "11010");
        assert_eq!(topo.districts[0].name, "중구");

        // first arc: (1000,0) then delta (0,1000) -> transformed
        let ring = &topo.districts[0].polygons[0][0];
        assert_eq!(ring[0], [127.0, 37.0]);
        assert_eq!(ring[1], [127.0, 38.0]);
    }

    #[test]
    fn test_reversed_arc_stitching() {
        let topo = KoreaTopology::from_json(TOPO).unwrap();
        // second district's ring starts with arc 0 reversed
        let ring = &topo.districts[1].polygons[0][0];
        assert_eq!(ring[0], [127.0, 38.0]);
        assert_eq!(ring[1], [127.0, 37.0]);
        // junction points are not duplicated
        let mut deduped = ring.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), ring.len());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(KoreaTopology::from_json("{\"type\":\"Topology\"").is_err());
        assert!(KoreaTopology::from_json("{\"type\":\"Topology\",\"objects\":{},\"arcs\":[]}").is_err());
    }
}
