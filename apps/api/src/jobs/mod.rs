// Job search: provider boundary, normalization, per-title aggregation.

pub mod aggregator;
pub mod handlers;
pub mod normalize;
pub mod provider;
