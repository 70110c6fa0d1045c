//! gh CLI integration
//!
//! Everything GitHub-facing goes through the gh CLI; authentication is its
//! problem, not ours.

pub mod error;
pub mod executor;

pub use error::{GhError, GhResult};
pub use executor::{check_gh_available, gh_api_json};
