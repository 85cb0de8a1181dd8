//! Route parameters and the rules for merging them
//!
//! Two kinds of parameters travel with a route:
//!
//! - [`RouteProps`]: what the rendering framework's route element receives
//!   (path, renderer handles, exact/strict/sensitive flags, location, key, extras)
//! - [`Params`]: render-time parameters merged into the props handed to the
//!   resolved component or render function
//!
//! Merging is always "own over defaults": a field set on the route itself
//! wins, a missing field falls back to the inherited default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::renderer::Renderer;

/// Free-form parameter map passed through to the rendering adapter verbatim
pub type Params = Map<String, Value>;

/// Merges `own` over `defaults` key by key (own wins)
///
/// # Examples
///
/// ```
/// use rhtmx_chart::params::{merge_params, Params};
/// use serde_json::json;
///
/// let defaults: Params = json!({ "theme": "dark", "lang": "en" }).as_object().unwrap().clone();
/// let own: Params = json!({ "lang": "fr" }).as_object().unwrap().clone();
///
/// let merged = merge_params(&defaults, &own);
/// assert_eq!(merged["theme"], "dark");
/// assert_eq!(merged["lang"], "fr");
/// ```
pub fn merge_params(defaults: &Params, own: &Params) -> Params {
    let mut merged = defaults.clone();
    merged.extend(own.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

// ============================================================================
// Route Params
// ============================================================================

/// Auxiliary route-element parameters, passed through opaquely
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteParams {
    /// Match the path exactly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
    /// Treat trailing slashes strictly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    /// Case-sensitive matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    /// Location override handed to the framework
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Stable element key (falls back to the resolved path)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Anything else, untouched
    #[serde(flatten)]
    pub extra: Params,
}

impl RouteParams {
    /// Merges these params over `defaults` (fields set here win)
    pub fn over(self, defaults: &RouteParams) -> RouteParams {
        RouteParams {
            exact: self.exact.or(defaults.exact),
            strict: self.strict.or(defaults.strict),
            sensitive: self.sensitive.or(defaults.sensitive),
            location: self.location.or_else(|| defaults.location.clone()),
            key: self.key.or_else(|| defaults.key.clone()),
            extra: merge_params(&defaults.extra, &self.extra),
        }
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.exact.is_none()
            && self.strict.is_none()
            && self.sensitive.is_none()
            && self.location.is_none()
            && self.key.is_none()
            && self.extra.is_empty()
    }
}

// ============================================================================
// Route Props
// ============================================================================

/// Everything a route contributes to its own route element
///
/// The three renderer handles are kept apart and merged one by one; the
/// single [`Renderer`] a route ends up with is picked from whatever survives
/// the merge (component, then render function, then children).
///
/// # Examples
///
/// ```
/// use rhtmx_chart::{RouteProps, Renderer};
///
/// let defaults = RouteProps::default().with_exact(true).with_component("Layout");
/// let own = RouteProps::default().with_path("/home").with_render_fn("renderHome");
///
/// let merged = own.over(&defaults);
/// assert_eq!(merged.path.as_deref(), Some("/home"));
/// assert_eq!(merged.params.exact, Some(true));
/// // The inherited component outranks the route's own render function
/// assert_eq!(merged.renderer(), Some(Renderer::Component("Layout".into())));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteProps {
    /// Path segment contributed by this route (placeholders are opaque)
    pub path: Option<String>,
    /// Component handle
    pub component: Option<String>,
    /// Render function handle
    pub render: Option<String>,
    /// Children function handle
    pub children: Option<String>,
    /// Flags, key, location and extras
    pub params: RouteParams,
}

impl RouteProps {
    /// Merges these props over `defaults` field by field (fields set here win)
    pub fn over(self, defaults: &RouteProps) -> RouteProps {
        RouteProps {
            path: self.path.or_else(|| defaults.path.clone()),
            component: self.component.or_else(|| defaults.component.clone()),
            render: self.render.or_else(|| defaults.render.clone()),
            children: self.children.or_else(|| defaults.children.clone()),
            params: self.params.over(&defaults.params),
        }
    }

    /// The renderer the route element uses, if any handle is set
    pub fn renderer(&self) -> Option<Renderer> {
        Renderer::resolve(
            self.component.clone(),
            self.render.clone(),
            self.children.clone(),
        )
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the handle slot matching `renderer`; other slots are untouched
    pub fn with_renderer(self, renderer: Renderer) -> Self {
        match renderer {
            Renderer::Component(handle) => self.with_component(handle),
            Renderer::Render(handle) => self.with_render_fn(handle),
            Renderer::Children(handle) => self.with_children_renderer(handle),
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_render_fn(mut self, render: impl Into<String>) -> Self {
        self.render = Some(render.into());
        self
    }

    pub fn with_children_renderer(mut self, children: impl Into<String>) -> Self {
        self.children = Some(children.into());
        self
    }

    pub fn with_exact(mut self, exact: bool) -> Self {
        self.params.exact = Some(exact);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.params.strict = Some(strict);
        self
    }

    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.params.sensitive = Some(sensitive);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.params.location = Some(location.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.params.key = Some(key.into());
        self
    }

    /// Sets a pass-through parameter the framework understands but this crate does not
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.extra.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Nested Defaults
// ============================================================================

/// Values a route hands down to its direct children during flattening
///
/// Children merge their own props and render params over these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedDefaults {
    pub props: RouteProps,
    pub render_params: Params,
}
