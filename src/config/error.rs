// ABOUTME: Error type for engine configuration loading and validation
// ABOUTME: Covers malformed environment overrides and out-of-range energy factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env::VarError;

use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] VarError),

    /// Environment variable could not be parsed into the target type
    #[error("Parse error: {0}")]
    Parse(String),

    /// A single value is outside its allowed range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
