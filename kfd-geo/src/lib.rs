//! Decoding of the administrative-boundary topology file.
//!
//! The boundary file is a quantized topology: shared borders are stored once
//! as delta-encoded arcs, and each district geometry references arcs by
//! index (negative index = reversed arc). This crate decodes arcs to
//! absolute lon/lat, assembles district polygons, and merges districts into
//! one multipolygon per province keyed by the 2-digit administrative code
//! prefix.

pub mod feature;
pub mod topology;

pub use feature::{DistrictFeature, ProvinceFeature};
pub use topology::KoreaTopology;
