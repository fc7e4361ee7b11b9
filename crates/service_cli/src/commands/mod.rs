//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod run;
pub mod sample;

use crate::{CliError, Result};
use std::path::Path;

fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.display().to_string()))
    }
}
