//! Configuration management for daqcsv commands.
//!
//! Provides the reader configuration shared by the CLI commands: strictness,
//! warning display limits, and overwrite policy for written files.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_DISPLAYED_WARNINGS;

/// Configuration for parse reporting and file output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Treat any recorded warning as a failure (non-zero exit)
    pub strict: bool,

    /// Maximum number of warnings printed in human-readable reports
    pub max_displayed_warnings: usize,

    /// Overwrite existing files when writing converted output
    pub force_overwrite: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_displayed_warnings: DEFAULT_MAX_DISPLAYED_WARNINGS,
            force_overwrite: false,
        }
    }
}

impl ReaderConfig {
    /// Enable strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the warning display cap
    pub fn with_max_displayed_warnings(mut self, max: usize) -> Self {
        self.max_displayed_warnings = max;
        self
    }

    /// Enable overwriting of existing output files
    pub fn with_force_overwrite(mut self, force: bool) -> Self {
        self.force_overwrite = force;
        self
    }
}
