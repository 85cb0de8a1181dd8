//! Flattening a route tree into render descriptors
//!
//! ```text
//! RouteNode tree
//!     → path variants per node (one per suffix, or the node's own path)
//!     → per variant: emit a descriptor if renderable, then recurse into
//!       every child with the nested defaults merged beneath its own props
//!     → Vec<RenderDescriptor> in depth-first, declaration order
//! ```
//!
//! Flattening is a pure traversal: the same tree always yields the same
//! descriptors.

use serde::Serialize;
use tracing::{debug, trace};

use crate::node::RouteNode;
use crate::params::{merge_params, Params, RouteParams, RouteProps};
use crate::renderer::Renderer;

/// One concrete renderable route, ready for the rendering adapter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Absolute path (base + every ancestor segment + own variant)
    pub path: String,
    #[serde(flatten)]
    pub renderer: Renderer,
    #[serde(flatten)]
    pub params: RouteParams,
    #[serde(skip_serializing_if = "Params::is_empty")]
    pub render_params: Params,
}

impl RenderDescriptor {
    /// Stable element key: the explicit `key` param, else the path
    pub fn key(&self) -> &str {
        self.params.key.as_deref().unwrap_or(&self.path)
    }

    /// Whether the adapter has to render through a synthesized function
    pub fn has_render_params(&self) -> bool {
        !self.render_params.is_empty()
    }
}

/// Flattens `node` and its subtree under `base`
///
/// # Examples
///
/// ```
/// use rhtmx_chart::{RouteNode, RouteProps};
///
/// let root = RouteNode::new()
///     .with_path("/app")
///     .with_nested_props(RouteProps::default().with_exact(true))
///     .with_nested_routes(vec![
///         RouteNode::new().with_path("/home").with_component("Home"),
///         RouteNode::new().with_path("/about").with_component("About").with_exact(false),
///     ]);
///
/// let routes = rhtmx_chart::flatten(&root, "");
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes[0].path, "/app/home");
/// assert_eq!(routes[0].params.exact, Some(true));
/// assert_eq!(routes[1].params.exact, Some(false));
/// ```
pub fn flatten(node: &RouteNode, base: &str) -> Vec<RenderDescriptor> {
    let mut routes = Vec::new();
    flatten_into(node, node.props(), node.render_params(), base, &mut routes);
    debug!(base = %base, routes = routes.len(), "flattened route tree");
    routes
}

/// Local path of every variant of a node
///
/// With suffixes: `own + suffix` for each suffix, in order. Without: the
/// node's own path, possibly absent.
fn path_variants(own: Option<&str>, node: &RouteNode) -> Vec<String> {
    if node.suffixes().is_empty() {
        return vec![own.unwrap_or_default().to_string()];
    }

    node.suffixes()
        .iter()
        .map(|suffix| format!("{}{}", own.unwrap_or_default(), suffix.path))
        .collect()
}

/// `props` and `render_params` are the node's own values already merged
/// over its parent's nested defaults.
fn flatten_into(
    node: &RouteNode,
    props: &RouteProps,
    render_params: &Params,
    base: &str,
    out: &mut Vec<RenderDescriptor>,
) {
    let nested = node.nested();

    for local in path_variants(props.path.as_deref(), node) {
        let full_path = format!("{base}{local}");

        // Renderable only with a local path and a renderer
        if let Some(renderer) = props.renderer().filter(|_| !local.is_empty()) {
            let descriptor = RenderDescriptor {
                name: node.name().map(str::to_string),
                path: full_path.clone(),
                renderer,
                params: props.params.clone(),
                render_params: render_params.clone(),
            };
            trace!(path = %descriptor.path, renderer = %descriptor.renderer, "route descriptor");
            out.push(descriptor);
        }

        for child in node.children() {
            let child_props = child.props().clone().over(&nested.props);
            let child_params = merge_params(&nested.render_params, child.render_params());
            flatten_into(child, &child_props, &child_params, &full_path, out);
        }
    }
}
