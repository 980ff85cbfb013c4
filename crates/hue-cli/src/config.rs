//! hue Configuration Module
//!
//! Provides serde-based TOML configuration parsing for the `hue` binary.
//!
//! # Example TOML
//! ```toml
//! [coloring]
//! order = "largest-degree-first"
//!
//! [output]
//! format = "json"
//! path = "coloring.json"
//!
//! [limits]
//! max_vertices = 100000
//! ```

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use hue_core::VertexOrder;
use serde::{Deserialize, Serialize};

/// Root configuration for the CLI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HueConfig {
    #[serde(default)]
    pub coloring: ColoringConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

impl HueConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_vertices == 0 {
            bail!("limits.max_vertices must be at least 1");
        }
        if let Some(path) = &self.output.path {
            if path.trim().is_empty() {
                bail!("output.path must not be empty when set");
            }
        }
        Ok(())
    }
}

// =============================================================================
// Coloring Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColoringConfig {
    #[serde(default)]
    pub order: VertexOrder,
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Diagnostic graph rendering plus a summary
    #[default]
    Text,
    /// Colored graph, stats and report as JSON
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[serde(default)]
    pub path: Option<String>,
}

// =============================================================================
// Limits Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_vertices: default_max_vertices(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_max_vertices() -> usize { 1_000_000 }
