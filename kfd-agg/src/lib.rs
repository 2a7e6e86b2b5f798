//! Bucketing, aggregation, and chart-shape emitters.
//!
//! Every chart on the page runs the same pipeline: normalized rows are
//! assigned to buckets (year, season, province), each bucket is reduced to a
//! scalar, and the bucket map is reshaped into whatever structure the
//! consuming D3 chart expects. The pipeline is stateless and recomputed in
//! full whenever the dataset or a filter changes.

pub mod aggregate;
pub mod bucket;
pub mod shape;
