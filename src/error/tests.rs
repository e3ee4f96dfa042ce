// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::*;
use serial_test::serial;
use std::io;

#[test]
fn test_error_messages() {
    assert_eq!(
        TaglogError::InvalidLevel("loud".to_string()).to_string(),
        "Invalid log level: 'loud'"
    );
    assert_eq!(
        TaglogError::InvalidSurface("syslog".to_string()).to_string(),
        "Unknown print surface: 'syslog'"
    );
    assert_eq!(
        TaglogError::ConfigError("bad toml".to_string()).to_string(),
        "Configuration error: bad toml"
    );
}

#[test]
fn test_exit_codes() {
    assert_eq!(get_exit_code(&TaglogError::InvalidLevel("x".to_string())), 2);
    assert_eq!(get_exit_code(&TaglogError::InvalidSurface("x".to_string())), 2);
    assert_eq!(get_exit_code(&TaglogError::ConfigError("x".to_string())), 3);
    assert_eq!(
        get_exit_code(&TaglogError::Io(io::Error::other("disk"))),
        1
    );
}

#[test]
fn test_io_conversion() {
    fn read() -> Result<()> {
        let outcome: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        outcome?;
        Ok(())
    }
    assert!(matches!(read(), Err(TaglogError::Io(_))));
}

#[test]
fn test_format_error_chain_includes_suggestion() {
    let formatted = format_error_chain(&TaglogError::InvalidLevel("loud".to_string()));
    assert!(formatted.starts_with("Error: Invalid log level: 'loud'"));
    assert!(formatted.contains("Suggestion:"));
    assert!(formatted.contains("0 to 5"));
}

#[test]
fn test_format_error_chain_includes_details() {
    let formatted = format_error_chain(&TaglogError::ConfigError("line 3".to_string()));
    assert!(formatted.contains("Details: line 3"));
}

#[test]
#[serial]
fn test_format_error_without_color() {
    colored::control::set_override(true);
    let plain = format_error_with_color(&TaglogError::InvalidSurface("syslog".to_string()), false);
    colored::control::unset_override();

    assert!(!plain.contains("\x1b["));
    assert!(plain.starts_with("Error: Unknown print surface: 'syslog'\n"));
    assert!(plain.contains("Suggestion: Valid surfaces are 'console', 'log' and 'silent'."));
}

#[test]
#[serial]
fn test_format_error_with_color() {
    colored::control::set_override(true);
    let output = format_error_with_color(&TaglogError::ConfigError("line 3".to_string()), true);
    colored::control::unset_override();

    assert!(output.starts_with("\x1b["));
    assert!(output.contains("Configuration error: line 3"));
    assert!(output.contains("\nline 3\n"));
    assert!(output.contains("Suggestion:\x1b[0m"));
}
