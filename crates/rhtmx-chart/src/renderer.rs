//! How a route renders
//!
//! A route renders in exactly one way. The handles carried by each variant
//! are opaque names the rendering adapter resolves (a component registry
//! key, a render function id, ...); this crate never calls them.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Rendering strategy of a route
///
/// # Examples
///
/// ```
/// use rhtmx_chart::Renderer;
///
/// // Precedence: component > render > children
/// let renderer = Renderer::resolve(None, Some("renderUser".into()), Some("kids".into()));
/// assert_eq!(renderer, Some(Renderer::Render("renderUser".into())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    /// Mount a component
    Component(String),
    /// Call a render function
    Render(String),
    /// Call the children function / render children as given
    Children(String),
}

impl Renderer {
    /// Picks one renderer out of the three optional handles
    ///
    /// Precedence is fixed: component, then render function, then children.
    /// Losing candidates are dropped (logged at debug level).
    pub fn resolve(
        component: Option<String>,
        render: Option<String>,
        children: Option<String>,
    ) -> Option<Renderer> {
        let mut candidates = [
            component.map(Renderer::Component),
            render.map(Renderer::Render),
            children.map(Renderer::Children),
        ]
        .into_iter()
        .flatten();

        let chosen = candidates.next()?;
        for dropped in candidates {
            debug!(
                kept = %chosen,
                dropped = %dropped,
                "route declares several renderers, keeping the highest precedence one"
            );
        }
        Some(chosen)
    }

    /// Short name of the strategy: `component`, `render` or `children`
    pub fn kind(&self) -> &'static str {
        match self {
            Renderer::Component(_) => "component",
            Renderer::Render(_) => "render",
            Renderer::Children(_) => "children",
        }
    }

    /// The opaque handle the adapter resolves
    pub fn handle(&self) -> &str {
        match self {
            Renderer::Component(handle) | Renderer::Render(handle) | Renderer::Children(handle) => {
                handle
            }
        }
    }
}

impl fmt::Display for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.handle())
    }
}
