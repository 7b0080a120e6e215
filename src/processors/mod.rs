pub mod feature_deriver;
pub mod filter_engine;

pub use feature_deriver::FeatureDeriver;
pub use filter_engine::FilterEngine;
