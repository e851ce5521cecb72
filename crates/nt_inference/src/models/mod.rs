use std::sync::Arc;

use nt_core::{InferenceModel, Result};

use crate::Config;

pub mod groq;

pub use groq::GroqModel;

pub fn create_model(config: Config) -> Result<Arc<dyn InferenceModel>> {
    Ok(Arc::new(GroqModel::new(config)?))
}
