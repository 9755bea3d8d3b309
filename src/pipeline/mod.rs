//! Pipeline module - the cleaning and screening steps

pub mod classify;
pub mod correlation;
pub mod counts;
pub mod error;
pub mod loader;
pub mod quality;
pub mod reduce;

pub use classify::*;
pub use correlation::*;
pub use counts::*;
pub use error::SiftError;
pub use loader::*;
pub use quality::*;
pub use reduce::*;
