//! Command implementations for the nomina CLI.

pub mod analyze;
pub mod extract;

pub use analyze::AnalyzeArgs;
pub use extract::ExtractArgs;
