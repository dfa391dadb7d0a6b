//! CLI command implementations.
//!
//! Available commands:
//! - **generate**: Render the comparison report
//! - **init**: Write a default `.framework-matrix.toml`

pub mod generate;
pub mod init;

pub use generate::{handle_generate, GenerateConfig};
pub use init::init_config;
