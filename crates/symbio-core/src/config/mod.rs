mod bootstrap_config;
mod weights;

pub use bootstrap_config::BootstrapConfig;
pub use weights::DimensionWeights;
