//! Rendering adapter boundary
//!
//! The crate never builds UI elements. It hands each [`RenderDescriptor`] to
//! a [`RenderAdapter`] as a [`RouteElement`], already reduced to one of two
//! modes:
//!
//! - [`RenderMode::Direct`]: no render-time params, pass the renderer to the
//!   framework as given (component, render function or children)
//! - [`RenderMode::Synthesized`]: render-time params present, the adapter
//!   renders through a function that merges those params beneath the props
//!   the framework passes at render time, then calls the target renderer
//!   (a component target is mounted with the merged props, never handed to
//!   the framework as a component)

use crate::flatten::RenderDescriptor;
use crate::params::{merge_params, Params, RouteParams};
use crate::renderer::Renderer;

/// How the adapter must render a route element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderMode<'a> {
    /// Use the renderer as given
    Direct(&'a Renderer),
    /// Render through a synthesized function
    Synthesized {
        target: &'a Renderer,
        params: &'a Params,
    },
}

impl<'a> RenderMode<'a> {
    /// The renderer eventually invoked
    pub fn renderer(&self) -> &'a Renderer {
        match *self {
            RenderMode::Direct(renderer) => renderer,
            RenderMode::Synthesized { target, .. } => target,
        }
    }

    /// Component handle to give the framework as a component, if any
    ///
    /// Only direct components qualify: a synthesized function replaces the
    /// component prop.
    pub fn component(&self) -> Option<&'a str> {
        match *self {
            RenderMode::Direct(Renderer::Component(handle)) => Some(handle.as_str()),
            _ => None,
        }
    }

    /// Props for the invoked renderer: render-time params overlaid by the
    /// props the framework supplies at render time
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_chart::{RenderMode, Renderer, Params};
    /// use serde_json::json;
    ///
    /// let target = Renderer::Component("User".into());
    /// let params: Params = json!({ "tab": "info", "id": "0" }).as_object().unwrap().clone();
    /// let mode = RenderMode::Synthesized { target: &target, params: &params };
    ///
    /// let caller: Params = json!({ "id": "42" }).as_object().unwrap().clone();
    /// let props = mode.merge_props(&caller);
    /// assert_eq!(props["tab"], "info");
    /// assert_eq!(props["id"], "42");
    /// ```
    pub fn merge_props(&self, caller: &Params) -> Params {
        match self {
            RenderMode::Direct(_) => caller.clone(),
            RenderMode::Synthesized { params, .. } => merge_params(params, caller),
        }
    }
}

/// One route, as the rendering adapter sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteElement<'a> {
    pub name: Option<&'a str>,
    /// Stable key: explicit `key` param, else the path
    pub key: &'a str,
    pub path: &'a str,
    /// Flags and extras to pass through to the framework
    pub params: &'a RouteParams,
    pub mode: RenderMode<'a>,
}

impl<'a> From<&'a RenderDescriptor> for RouteElement<'a> {
    fn from(descriptor: &'a RenderDescriptor) -> Self {
        let mode = if descriptor.has_render_params() {
            RenderMode::Synthesized {
                target: &descriptor.renderer,
                params: &descriptor.render_params,
            }
        } else {
            RenderMode::Direct(&descriptor.renderer)
        };

        RouteElement {
            name: descriptor.name.as_deref(),
            key: descriptor.key(),
            path: &descriptor.path,
            params: &descriptor.params,
            mode,
        }
    }
}

/// Turns route elements into framework elements
pub trait RenderAdapter {
    type Element;

    fn element(&mut self, route: RouteElement<'_>) -> Self::Element;
}

/// Adapter backed by a closure, see [`from_fn`]
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Builds an adapter from a closure
///
/// # Examples
///
/// ```
/// use rhtmx_chart::{adapter, RouteNode};
///
/// let route = RouteNode::new().with_path("/home").with_component("Home");
/// let keys = route.render("", &mut adapter::from_fn(|el| el.key.to_string()));
/// assert_eq!(keys, vec!["/home"]);
/// ```
pub fn from_fn<E, F>(f: F) -> FromFn<F>
where
    F: FnMut(RouteElement<'_>) -> E,
{
    FromFn { f }
}

impl<E, F> RenderAdapter for FromFn<F>
where
    F: FnMut(RouteElement<'_>) -> E,
{
    type Element = E;

    fn element(&mut self, route: RouteElement<'_>) -> E {
        (self.f)(route)
    }
}

/// Converts every descriptor, in order
pub fn render<A: RenderAdapter>(descriptors: &[RenderDescriptor], adapter: &mut A) -> Vec<A::Element> {
    descriptors
        .iter()
        .map(|descriptor| adapter.element(RouteElement::from(descriptor)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RouteNode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_direct_mode_without_render_params() {
        let descriptors = RouteNode::new()
            .with_path("/home")
            .with_component("Home")
            .with_key("home")
            .flatten("");
        let element = RouteElement::from(&descriptors[0]);

        assert_eq!(element.key, "home");
        assert_eq!(element.path, "/home");
        assert_eq!(element.mode.component(), Some("Home"));
        assert_eq!(element.mode, RenderMode::Direct(&Renderer::Component("Home".into())));
    }

    #[test]
    fn test_synthesized_mode_strips_component() {
        let descriptors = RouteNode::new()
            .with_path("/user")
            .with_component("User")
            .with_render_param("tab", "info")
            .flatten("");
        let element = RouteElement::from(&descriptors[0]);

        assert!(matches!(element.mode, RenderMode::Synthesized { .. }));
        assert_eq!(element.mode.component(), None);
        assert_eq!(element.mode.renderer(), &Renderer::Component("User".into()));

        let caller = json!({"tab": "posts", "match": "/user"}).as_object().cloned().unwrap();
        assert_eq!(
            serde_json::Value::Object(element.mode.merge_props(&caller)),
            json!({"tab": "posts", "match": "/user"})
        );
    }

    #[test]
    fn test_direct_merge_props_is_caller_props() {
        let renderer = Renderer::Render("renderHome".into());
        let caller = json!({"a": 1}).as_object().cloned().unwrap();
        assert_eq!(RenderMode::Direct(&renderer).merge_props(&caller), caller);
    }

    struct Recorder(Vec<String>);

    impl RenderAdapter for Recorder {
        type Element = usize;

        fn element(&mut self, route: RouteElement<'_>) -> usize {
            self.0.push(route.path.to_string());
            self.0.len()
        }
    }

    #[test]
    fn test_render_keeps_order() {
        let root = RouteNode::new().with_nested_routes(vec![
            RouteNode::new().with_path("/a").with_component("A"),
            RouteNode::new().with_path("/b").with_render_fn("b"),
        ]);

        let mut recorder = Recorder(Vec::new());
        let elements = render(&root.flatten(""), &mut recorder);
        assert_eq!(elements, vec![1, 2]);
        assert_eq!(recorder.0, vec!["/a", "/b"]);
    }
}
