// Types representing quiz questions and the errors around loading them

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
