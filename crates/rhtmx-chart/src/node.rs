//! Route nodes
//!
//! A [`RouteNode`] is one route definition and the subtree it owns. Nodes
//! are plain values: every builder method consumes the node and returns the
//! updated one, so trees are assembled by chaining and never mutated behind
//! a shared reference.

use serde_json::Value;
use tracing::warn;

use crate::adapter::{self, RenderAdapter};
use crate::describe;
use crate::direction::{is_reserved_name, Direction};
use crate::flatten::{self, RenderDescriptor};
use crate::params::{NestedDefaults, Params, RouteProps};
use crate::shape::RouteShape;
use crate::suffix::{Suffix, Suffixes};

/// One route and its subtree
///
/// # Examples
///
/// ```
/// use rhtmx_chart::RouteNode;
///
/// let sign = RouteNode::new()
///     .with_name("sign")
///     .with_path("/sign")
///     .with_component("SignPage")
///     .with_suffix("in", "/in")
///     .with_suffix("up", "/up");
///
/// let paths: Vec<String> = sign.flatten("").into_iter().map(|d| d.path).collect();
/// assert_eq!(paths, vec!["/sign/in", "/sign/up"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteNode {
    name: Option<String>,
    props: RouteProps,
    render_params: Params,
    suffixes: Suffixes,
    index: bool,
    nested: NestedDefaults,
    children: Vec<RouteNode>,
}

impl RouteNode {
    /// Creates an empty node (no path, no renderer: a pure grouping node)
    pub fn new() -> Self {
        Self::default()
    }

    /// Materializes a node tree from a shape
    ///
    /// Missing `nest` means no defaults and no children; every nested route
    /// shape becomes a child node.
    pub fn from_shape(shape: RouteShape) -> Self {
        let RouteShape {
            name,
            path_props,
            render_time_params,
            suffixes,
            index,
            nest,
        } = shape;
        let mut nest = nest.unwrap_or_default();
        let children = std::mem::take(&mut nest.routes)
            .into_iter()
            .map(RouteNode::from_shape)
            .collect();

        let node = RouteNode {
            name: None,
            props: path_props.into(),
            render_params: render_time_params,
            suffixes,
            index,
            nested: nest.into(),
            children,
        };

        match name {
            Some(name) => node.with_name(name),
            None => node,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Path segment this node contributes
    pub fn path(&self) -> Option<&str> {
        self.props.path.as_deref()
    }

    pub fn props(&self) -> &RouteProps {
        &self.props
    }

    pub fn render_params(&self) -> &Params {
        &self.render_params
    }

    pub fn suffixes(&self) -> &Suffixes {
        &self.suffixes
    }

    /// Whether this node is the default child of its parent
    pub fn is_index(&self) -> bool {
        self.index
    }

    pub fn nested(&self) -> &NestedDefaults {
        &self.nested
    }

    pub fn children(&self) -> &[RouteNode] {
        &self.children
    }

    // ========================================================================
    // Name & Props Builder Methods
    // ========================================================================

    /// Sets the symbolic name used in directions and for removal
    ///
    /// An empty name clears the name, leaving the node anonymous. `$` and
    /// `$$` are reserved for direction paths; they are rejected with a
    /// warning and the node keeps its previous name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            self.name = None;
            return self;
        }
        if is_reserved_name(&name) {
            warn!(name = %name, "route name is reserved for directions, ignoring it");
            return self;
        }
        self.name = Some(name);
        self
    }

    /// Replaces all route-element props
    pub fn with_props(mut self, props: RouteProps) -> Self {
        self.props = props;
        self
    }

    /// Merges props into the existing ones (the given props win)
    pub fn add_props(mut self, props: RouteProps) -> Self {
        let current = std::mem::take(&mut self.props);
        self.props = props.over(&current);
        self
    }

    pub fn with_path(self, path: impl Into<String>) -> Self {
        self.add_props(RouteProps::default().with_path(path))
    }

    pub fn with_exact(self, exact: bool) -> Self {
        self.add_props(RouteProps::default().with_exact(exact))
    }

    pub fn with_strict(self, strict: bool) -> Self {
        self.add_props(RouteProps::default().with_strict(strict))
    }

    pub fn with_sensitive(self, sensitive: bool) -> Self {
        self.add_props(RouteProps::default().with_sensitive(sensitive))
    }

    pub fn with_location(self, location: impl Into<String>) -> Self {
        self.add_props(RouteProps::default().with_location(location))
    }

    pub fn with_key(self, key: impl Into<String>) -> Self {
        self.add_props(RouteProps::default().with_key(key))
    }

    pub fn with_component(self, component: impl Into<String>) -> Self {
        self.add_props(RouteProps::default().with_component(component))
    }

    pub fn with_render_fn(self, render: impl Into<String>) -> Self {
        self.add_props(RouteProps::default().with_render_fn(render))
    }

    pub fn with_children_renderer(self, children: impl Into<String>) -> Self {
        self.add_props(RouteProps::default().with_children_renderer(children))
    }

    pub fn with_param(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_props(RouteProps::default().with_param(key, value))
    }

    /// Replaces the render-time params
    ///
    /// Non-empty render params make the adapter render through a
    /// synthesized function, even when a component is set.
    pub fn with_render_params(mut self, params: Params) -> Self {
        self.render_params = params;
        self
    }

    pub fn with_render_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.render_params.insert(key.into(), value.into());
        self
    }

    /// Marks this node as the default child of its parent
    pub fn with_index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    // ========================================================================
    // Suffix Builder Methods
    // ========================================================================

    pub fn with_suffixes(mut self, suffixes: Suffixes) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Merges suffixes into the existing ones (the given ones win)
    pub fn add_suffixes(mut self, suffixes: Suffixes) -> Self {
        self.suffixes = std::mem::take(&mut self.suffixes).merge(suffixes);
        self
    }

    pub fn with_suffix(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.suffixes.insert(Suffix::new(name, path));
        self
    }

    /// Adds a suffix whose variant is the default one of this node
    pub fn with_index_suffix(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.suffixes.insert(Suffix::index(name, path));
        self
    }

    pub fn remove_suffixes(mut self, names: &[&str]) -> Self {
        self.suffixes = std::mem::take(&mut self.suffixes).without(names);
        self
    }

    // ========================================================================
    // Nested Route Builder Methods
    // ========================================================================

    pub fn with_nested_defaults(mut self, nested: NestedDefaults) -> Self {
        self.nested = nested;
        self
    }

    /// Props every direct child merges its own over
    pub fn with_nested_props(mut self, props: RouteProps) -> Self {
        self.nested.props = props;
        self
    }

    /// Render params every direct child merges its own over
    pub fn with_nested_render_params(mut self, params: Params) -> Self {
        self.nested.render_params = params;
        self
    }

    pub fn with_nested_routes(mut self, routes: Vec<RouteNode>) -> Self {
        self.children = routes;
        self
    }

    pub fn add_nested_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = RouteNode>,
    {
        self.children.extend(routes);
        self
    }

    /// Removes children by name; unnamed children are never removed
    pub fn remove_nested_routes(mut self, names: &[&str]) -> Self {
        self.children
            .retain(|child| child.name().map_or(true, |name| !names.contains(&name)));
        self
    }

    // ========================================================================
    // Traversals
    // ========================================================================

    /// See [`flatten::flatten`]
    pub fn flatten(&self, base: &str) -> Vec<RenderDescriptor> {
        flatten::flatten(self, base)
    }

    /// See [`describe::describe`]
    pub fn describe(&self, base: &str) -> Direction {
        describe::describe(self, base)
    }

    /// Flattens this tree and hands every descriptor to `adapter`
    pub fn render<A: RenderAdapter>(&self, base: &str, adapter: &mut A) -> Vec<A::Element> {
        adapter::render(&self.flatten(base), adapter)
    }
}

impl From<RouteShape> for RouteNode {
    fn from(shape: RouteShape) -> Self {
        RouteNode::from_shape(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Renderer;
    use crate::shape::NestShape;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_new_is_grouping_node() {
        let node = RouteNode::new();
        assert_eq!(node.name(), None);
        assert_eq!(node.path(), None);
        assert!(node.props().renderer().is_none());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_from_shape_deep_copies_children() {
        let shape = RouteShape {
            name: Some("root".into()),
            nest: Some(NestShape {
                routes: vec![
                    RouteShape {
                        name: Some("a".into()),
                        ..Default::default()
                    },
                    RouteShape {
                        nest: Some(NestShape {
                            routes: vec![RouteShape::default()],
                            ..Default::default()
                        }),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }),
            ..Default::default()
        };

        let node = RouteNode::from_shape(shape);
        assert_eq!(node.name(), Some("root"));
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[0].name(), Some("a"));
        assert_eq!(node.children()[1].children().len(), 1);
    }

    #[test]
    fn test_from_shape_rejects_reserved_name() {
        let node = RouteNode::from_shape(RouteShape {
            name: Some("$".into()),
            ..Default::default()
        });
        assert_eq!(node.name(), None);
    }

    #[test]
    fn test_empty_name_is_anonymous() {
        let node = RouteNode::new().with_name("home").with_name("");
        assert_eq!(node.name(), None);

        let root = RouteNode::new().with_nested_routes(vec![RouteNode::new()
            .with_name("")
            .with_path("/g")
            .with_nested_routes(vec![RouteNode::new().with_name("x").with_path("/x")])]);
        assert_eq!(
            serde_json::to_value(root.describe("")).unwrap(),
            json!({"$": "", "x": {"$": "/g/x"}})
        );
    }

    #[test]
    fn test_reserved_name_keeps_previous() {
        let node = RouteNode::new().with_name("home").with_name("$$");
        assert_eq!(node.name(), Some("home"));
    }

    #[test]
    fn test_setters_merge_props() {
        let node = RouteNode::new()
            .with_path("/users")
            .with_exact(true)
            .with_strict(false)
            .with_sensitive(true)
            .with_location("/elsewhere")
            .with_key("users")
            .with_param("replace", true)
            .with_component("Users");

        let props = node.props();
        assert_eq!(props.path.as_deref(), Some("/users"));
        assert_eq!(props.params.exact, Some(true));
        assert_eq!(props.params.strict, Some(false));
        assert_eq!(props.params.sensitive, Some(true));
        assert_eq!(props.params.location.as_deref(), Some("/elsewhere"));
        assert_eq!(props.params.key.as_deref(), Some("users"));
        assert_eq!(props.params.extra.get("replace"), Some(&json!(true)));
        assert_eq!(props.renderer(), Some(Renderer::Component("Users".into())));
    }

    #[test]
    fn test_component_outranks_later_render_fn() {
        let node = RouteNode::new()
            .with_component("Users")
            .with_render_fn("renderUsers");
        assert_eq!(node.props().render.as_deref(), Some("renderUsers"));
        assert_eq!(node.props().renderer(), Some(Renderer::Component("Users".into())));
    }

    #[test]
    fn test_with_props_replaces() {
        let node = RouteNode::new()
            .with_path("/old")
            .with_exact(true)
            .with_props(RouteProps::default().with_path("/new"));
        assert_eq!(node.path(), Some("/new"));
        assert_eq!(node.props().params.exact, None);
    }

    #[test]
    fn test_suffix_methods() {
        let node = RouteNode::new()
            .with_suffixes(Suffixes::new().with("a", "/a"))
            .add_suffixes(Suffixes::new().with("b", "/b"))
            .with_suffix("c", "/c")
            .with_index_suffix("d", "/d")
            .remove_suffixes(&["a", "c"]);

        let names: Vec<&str> = node.suffixes().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d"]);
        assert_eq!(node.suffixes().index().map(|s| s.name.as_str()), Some("d"));
    }

    #[test]
    fn test_remove_nested_routes_ignores_unnamed() {
        let node = RouteNode::new()
            .with_nested_routes(vec![RouteNode::new().with_name("keep")])
            .add_nested_routes(vec![
                RouteNode::new().with_name("drop"),
                RouteNode::new().with_path("/anonymous"),
            ])
            .remove_nested_routes(&["drop", "missing"]);

        let children: Vec<(Option<&str>, Option<&str>)> = node
            .children()
            .iter()
            .map(|c| (c.name(), c.path()))
            .collect();
        assert_eq!(children, vec![(Some("keep"), None), (None, Some("/anonymous"))]);
    }

    #[test]
    fn test_nested_defaults_setters() {
        let node = RouteNode::new()
            .with_nested_props(RouteProps::default().with_exact(true))
            .with_nested_render_params(json!({"theme": "dark"}).as_object().cloned().unwrap());
        assert_eq!(node.nested().props.params.exact, Some(true));
        assert_eq!(node.nested().render_params.get("theme"), Some(&json!("dark")));

        let reset = node.with_nested_defaults(NestedDefaults::default());
        assert_eq!(reset.nested(), &NestedDefaults::default());
    }

    #[test]
    fn test_render_params() {
        let node = RouteNode::new()
            .with_render_param("mode", "edit")
            .with_render_param("page", 2);
        assert_eq!(node.render_params().get("page"), Some(&json!(2)));

        let cleared = node.with_render_params(Params::new());
        assert!(cleared.render_params().is_empty());
    }
}
