//! # RHTMX Chart
//!
//! Declarative nested route charts for single-page applications:
//! - Describe a tree of routes (path, suffix variants, children, renderer)
//! - **Flatten** it into a list of render descriptors for a rendering adapter
//! - **Describe** it as named directions: resolved paths reachable by name,
//!   for building links without hard-coding paths
//!
//! ## Functional Approach
//!
//! - **Immutable builder API**: every `with_*` method consumes and returns the node
//! - **Pure traversals**: flattening and describing never touch the tree
//! - **Tagged renderer**: a route renders as a component, a render function
//!   or children, never an ambiguous mix
//!
//! ## Suffixes
//!
//! A route with suffixes fans out into one route per suffix, and each variant
//! carries the whole subtree:
//!
//! ```text
//! /twin + { first: "-one", second: "-two" } + child /a
//!     → /twin-one, /twin-one/a, /twin-two, /twin-two/a
//! ```
//!
//! ## Example
//!
//! ```
//! use rhtmx_chart::{Chart, RouteNode, RouteProps};
//!
//! let root = RouteNode::new()
//!     .with_path("/app")
//!     .with_nested_props(RouteProps::default().with_exact(true))
//!     .with_nested_routes(vec![
//!         RouteNode::new().with_name("home").with_path("/home").with_component("Home"),
//!         RouteNode::new()
//!             .with_name("sign")
//!             .with_path("/sign")
//!             .with_component("Sign")
//!             .with_suffix("in", "/in")
//!             .with_suffix("up", "/up"),
//!     ]);
//!
//! let paths: Vec<String> = Chart::flatten(&root).into_iter().map(|d| d.path).collect();
//! assert_eq!(paths, vec!["/app/home", "/app/sign/in", "/app/sign/up"]);
//!
//! let directions = Chart::describe(&root);
//! assert_eq!(directions.path_of("sign.in"), Some("/app/sign/in"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod adapter;
pub mod config;
mod describe;
pub mod direction;
mod error;
mod flatten;
mod node;
pub mod params;
mod renderer;
pub mod shape;
mod suffix;

pub use adapter::{render, RenderAdapter, RenderMode, RouteElement};
pub use config::ChartConfig;
pub use describe::describe;
pub use direction::Direction;
pub use error::ShapeError;
pub use flatten::{flatten, RenderDescriptor};
pub use node::RouteNode;
pub use params::{NestedDefaults, Params, RouteParams, RouteProps};
pub use renderer::Renderer;
pub use shape::{NestShape, PropsShape, RouteShape};
pub use suffix::{Suffix, Suffixes};

// ============================================================================
// Chart Facade
// ============================================================================

/// Entry points gluing shapes, the flattener and the rendering adapter
///
/// Every call is a pure function of its arguments; the same tree may be
/// flattened or described any number of times, from any thread, as long as
/// nobody is rebuilding it meanwhile.
pub struct Chart;

impl Chart {
    /// Creates a route tree of the given shape
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_chart::{Chart, RouteShape};
    ///
    /// let shape = RouteShape::from_json(r#"{
    ///     "nest": { "routes": [ { "name": "home", "props": { "path": "/home" } } ] }
    /// }"#).unwrap();
    ///
    /// let route = Chart::route(shape);
    /// assert_eq!(route.children()[0].name(), Some("home"));
    /// ```
    pub fn route(shape: RouteShape) -> RouteNode {
        RouteNode::from_shape(shape)
    }

    /// Creates the route tree described by a chart config
    pub fn from_config(config: &ChartConfig) -> RouteNode {
        config.build()
    }

    /// Render descriptors of `route`, from the empty base
    pub fn flatten(route: &RouteNode) -> Vec<RenderDescriptor> {
        flatten::flatten(route, "")
    }

    /// Framework elements for every renderable route of `route`
    pub fn render<A: RenderAdapter>(route: &RouteNode, adapter: &mut A) -> Vec<A::Element> {
        Self::render_at(route, "", adapter)
    }

    /// Like [`Chart::render`], with every path prefixed by `base`
    pub fn render_at<A: RenderAdapter>(
        route: &RouteNode,
        base: &str,
        adapter: &mut A,
    ) -> Vec<A::Element> {
        route.render(base, adapter)
    }

    /// Named directions of `route`, from the empty base
    pub fn describe(route: &RouteNode) -> Direction {
        describe::describe(route, "")
    }

    /// Like [`Chart::describe`], with every path prefixed by `base`
    pub fn describe_at(route: &RouteNode, base: &str) -> Direction {
        describe::describe(route, base)
    }
}
