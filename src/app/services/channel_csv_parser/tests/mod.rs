//! Test fixtures and helpers for channel CSV parser testing
//!
//! This module provides shared export fixtures and helper functions used
//! across the component test modules.

use std::io::Write;

use tempfile::NamedTempFile;


/// A complete well-formed export: two channels, metadata, three rows
pub fn create_sample_export() -> String {
    "Force,Position\n\
     N,mm\n\
     \\SAMPLE RATE = 1000\n\
     \\TITLE = Tensile test 04\n\
     \\FILENAME = run04.csv\n\
     \\OPERATOR = JH\n\
     1.5,0.02\n\
     2.5,0.04\n\
     3.5,0.06\n"
        .to_string()
}

/// An export exercising the recoverable paths: short units line, a bad
/// sample rate, an arity-mismatched row, a non-numeric row, blank lines
pub fn create_messy_export() -> String {
    "Force,Position,Temp\n\
     N,mm\n\
     \\SAMPLE RATE = fast\n\
     \\TITLE = Noisy run\n\
     \n\
     1.0,2.0,3.0\n\
     4.0,5.0\n\
     \n\
     6.0,oops,8.0\n\
     9.0,,11.0\n"
        .to_string()
}

/// Helper to create a temporary file with the given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
