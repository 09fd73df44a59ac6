// Business logic services
// Framework-agnostic, 100% testable

pub mod directory;
pub use directory::*;
