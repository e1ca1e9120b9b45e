//! Settings are read from a TOML file; `--settings` overrides the default path.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
