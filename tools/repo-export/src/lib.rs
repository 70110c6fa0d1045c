//! One-shot exporter of GitHub repository metadata

pub mod export;
pub mod gh;
pub mod types;
