/// Client for the external inference service: wire types, response
/// normalization, and the HTTP transport.
pub mod backend;
pub mod normalize;
pub mod types;

pub use backend::{submit_comparison, HttpBackend, InferenceBackend};
pub use types::{
    ComparisonRequest, ComparisonResult, ImagePart, PredictionRequest, PredictionResult,
};
