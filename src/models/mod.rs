pub mod product;
pub mod source;

pub use product::*;
pub use source::*;

/// Upper bound on records returned for a single search.
pub const MAX_RESULTS: usize = 12;

/// Link value used by records that have nowhere to click through to.
pub const PLACEHOLDER_URL: &str = "#";
