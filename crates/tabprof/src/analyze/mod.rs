//! Read-only analysis views over a table: numeric correlation and
//! top-category breakdowns.

pub mod categories;
pub mod correlation;
pub mod stats;

pub use categories::{CategoryCount, TopCategories, top_categories};
pub use correlation::{CorrelationMatrix, correlation_matrix};
