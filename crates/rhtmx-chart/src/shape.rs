//! Route shapes
//!
//! A shape is the plain-data description of a route tree, as an application
//! writes it in JSON or TOML (or builds it in code). Every field is optional;
//! [`RouteNode::from_shape`](crate::RouteNode::from_shape) turns a shape into
//! a node tree once, applying the defaulting rules here.
//!
//! ```text
//! {
//!   "name": "base",
//!   "props": { "path": "", "component": "Layout", "strict": true },
//!   "nest": {
//!     "props": { "exact": true },
//!     "routes": [
//!       { "name": "twin", "props": { "path": "/twin", "component": "Twin" },
//!         "suffixes": { "first": "-one", "second": "-two" } }
//!     ]
//!   }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::ShapeError;
use crate::params::{NestedDefaults, Params, RouteParams, RouteProps};
use crate::suffix::Suffixes;

/// Shape of one route and its subtree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteShape {
    /// Symbolic name; non-string scalars are stringified with a warning
    #[serde(
        deserialize_with = "deserialize_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(alias = "props")]
    pub path_props: PropsShape,

    #[serde(alias = "renderProps", skip_serializing_if = "Params::is_empty")]
    pub render_time_params: Params,

    #[serde(skip_serializing_if = "Suffixes::is_empty")]
    pub suffixes: Suffixes,

    /// Marks this route as the default child of its parent
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub index: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nest: Option<NestShape>,
}

/// Defaults and children handed down by a route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NestShape {
    #[serde(alias = "props")]
    pub path_props: PropsShape,

    #[serde(alias = "renderProps", skip_serializing_if = "Params::is_empty")]
    pub render_time_params: Params,

    pub routes: Vec<RouteShape>,
}

/// Route-element props as written in a shape
///
/// Any of `component`, `render` and `children` may be given; the route
/// renders with the highest-precedence one (see [`Renderer::resolve`](crate::Renderer::resolve)).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropsShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
    #[serde(flatten)]
    pub params: RouteParams,
}

impl RouteShape {
    /// Parses a shape from JSON
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_chart::RouteShape;
    ///
    /// let shape = RouteShape::from_json(r#"{ "name": "home", "props": { "path": "/home" } }"#).unwrap();
    /// assert_eq!(shape.name.as_deref(), Some("home"));
    /// assert_eq!(shape.path_props.path.as_deref(), Some("/home"));
    /// ```
    pub fn from_json(source: &str) -> Result<Self, ShapeError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a shape from TOML
    pub fn from_toml(source: &str) -> Result<Self, ShapeError> {
        Ok(toml::from_str(source)?)
    }
}

impl From<PropsShape> for RouteProps {
    fn from(shape: PropsShape) -> Self {
        RouteProps {
            path: shape.path,
            component: shape.component,
            render: shape.render,
            children: shape.children,
            params: shape.params,
        }
    }
}

impl From<NestShape> for NestedDefaults {
    fn from(shape: NestShape) -> Self {
        NestedDefaults {
            props: shape.path_props.into(),
            render_params: shape.render_time_params,
        }
    }
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(coerce_name))
}

/// Stringifies a raw name value
///
/// Strings pass through, empty strings and null mean "no name", anything
/// else is stringified and flagged.
pub(crate) fn coerce_name(raw: Value) -> Option<String> {
    match raw {
        Value::Null => None,
        Value::String(name) if name.is_empty() => None,
        Value::String(name) => Some(name),
        other => {
            let coerced = other.to_string();
            warn!(name = %coerced, "route name is not a string, using its string form");
            Some(coerced)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Renderer;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_shape_defaults() {
        let shape = RouteShape::from_json("{}").unwrap();
        assert_eq!(shape, RouteShape::default());
    }

    #[test]
    fn test_nest_without_routes() {
        let shape = RouteShape::from_json(r#"{ "nest": { "props": { "exact": true } } }"#).unwrap();
        let nest = shape.nest.unwrap();
        assert!(nest.routes.is_empty());
        assert_eq!(nest.path_props.params.exact, Some(true));
    }

    #[test]
    fn test_name_coercion() {
        assert_eq!(coerce_name(json!("home")), Some("home".to_string()));
        assert_eq!(coerce_name(json!(42)), Some("42".to_string()));
        assert_eq!(coerce_name(json!(1.5)), Some("1.5".to_string()));
        assert_eq!(coerce_name(json!(true)), Some("true".to_string()));
        assert_eq!(coerce_name(json!("")), None);
        assert_eq!(coerce_name(Value::Null), None);

        let shape = RouteShape::from_json(r#"{ "name": 7 }"#).unwrap();
        assert_eq!(shape.name.as_deref(), Some("7"));
    }

    #[test]
    fn test_field_names_and_aliases() {
        let long = RouteShape::from_json(
            r#"{ "pathProps": { "path": "/a" }, "renderTimeParams": { "mode": "edit" } }"#,
        )
        .unwrap();
        let short = RouteShape::from_json(
            r#"{ "props": { "path": "/a" }, "renderProps": { "mode": "edit" } }"#,
        )
        .unwrap();
        assert_eq!(long, short);
        assert_eq!(long.render_time_params.get("mode"), Some(&json!("edit")));
    }

    #[test]
    fn test_props_shape_extras_and_renderer() {
        let shape: PropsShape = serde_json::from_value(json!({
            "path": "/users/:id",
            "component": "User",
            "render": "renderUser",
            "sensitive": true,
            "replace": true
        }))
        .unwrap();

        let props = RouteProps::from(shape);
        assert_eq!(props.renderer(), Some(Renderer::Component("User".into())));
        assert_eq!(props.render.as_deref(), Some("renderUser"));
        assert_eq!(props.params.sensitive, Some(true));
        assert_eq!(props.params.extra.get("replace"), Some(&json!(true)));
        assert!(!props.params.extra.contains_key("path"));
        assert!(!props.params.extra.contains_key("component"));
    }

    #[test]
    fn test_from_toml() {
        let shape = RouteShape::from_toml(
            r#"
            name = "sign"
            suffixes = { in = "/in", up = "/up" }

            [props]
            path = "/sign"
            component = "Sign"
            "#,
        )
        .unwrap();
        assert_eq!(shape.name.as_deref(), Some("sign"));
        assert_eq!(shape.suffixes.len(), 2);
        assert_eq!(shape.path_props.component.as_deref(), Some("Sign"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = RouteShape::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ShapeError::Json(_)));
        assert!(err.to_string().starts_with("invalid route shape JSON"));
    }
}
