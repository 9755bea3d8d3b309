//! Report module - terminal rendering and JSON export

pub mod charts;
pub mod cleaning;
pub mod json_export;
pub mod summary;

pub use charts::*;
pub use cleaning::*;
pub use json_export::*;
pub use summary::*;
