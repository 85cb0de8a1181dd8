// File: src/config.rs
// Purpose: Route chart configuration from chart.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::adapter::RenderAdapter;
use crate::direction::Direction;
use crate::flatten::RenderDescriptor;
use crate::node::RouteNode;
use crate::shape::RouteShape;

/// Route chart configuration
///
/// ```toml
/// base_path = "/app"
///
/// [root]
/// name = "base"
///
/// [[root.nest.routes]]
/// name = "home"
/// props = { path = "/home", component = "Home" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Prefix for every resolved path (e.g. "/app")
    #[serde(default)]
    pub base_path: String,

    /// Shape of the root route
    #[serde(default)]
    pub root: RouteShape,
}

impl ChartConfig {
    /// Load configuration from a chart TOML file
    ///
    /// A missing or empty file yields the default (empty) chart.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read chart file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse chart file: {:?}", path))
    }

    /// Load configuration from default path (./chart.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("chart.toml")
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Materialize the configured route tree
    pub fn build(&self) -> RouteNode {
        RouteNode::from_shape(self.root.clone())
    }

    pub fn flatten(&self) -> Vec<RenderDescriptor> {
        self.build().flatten(&self.base_path)
    }

    pub fn describe(&self) -> Direction {
        self.build().describe(&self.base_path)
    }

    pub fn render<A: RenderAdapter>(&self, adapter: &mut A) -> Vec<A::Element> {
        self.build().render(&self.base_path, adapter)
    }
}
