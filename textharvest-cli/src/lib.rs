// All extraction functionality is in textharvest-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod entries;
pub mod logging;

// Re-export core types for convenience
pub use textharvest_core::*;

// Re-export CLI utilities
pub use entries::{build_config, parse_entry, Overrides};
