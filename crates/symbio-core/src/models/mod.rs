mod combined_prediction;
mod compatibility_result;
mod interaction_result;
mod regime;

pub use combined_prediction::{CombinedPrediction, ConfidenceLevel, Outlook};
pub use compatibility_result::CompatibilityResult;
pub use interaction_result::{ConfidenceInterval, EstimationMethod, InteractionResult};
pub use regime::Regime;
