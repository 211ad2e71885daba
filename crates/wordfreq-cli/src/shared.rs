use std::fs;
use std::io::{self, Read};

use crate::error::{CliError, CliResult};

/// Read the whole input text, from stdin when `input` is `-` or `stdin` is set.
pub fn read_input(input: &str, stdin: bool) -> CliResult<String> {
    if stdin || input == "-" {
        let mut text = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut text)
            .map_err(|e| CliError::runtime(format!("Failed to read stdin: {}", e)))?;
        Ok(text)
    } else {
        fs::read_to_string(input)
            .map_err(|e| CliError::runtime(format!("Failed to open file '{}': {}", input, e)))
    }
}
