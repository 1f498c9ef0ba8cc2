// Utility functions
// Helper functions for common operations

pub mod format;
pub mod time;
pub mod validation;

pub use format::{format_clicks, truncate_url};
pub use validation::SubmissionInput;
