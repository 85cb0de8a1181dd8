//! Named directions
//!
//! A [`Direction`] is one level of the resolved-path tree produced by
//! [`describe`](fn@crate::describe): the absolute path of the level,
//! the path of its default (index) route if any, and named sub-directions.
//!
//! The serialized form is the object shape link helpers on the client side
//! expect:
//!
//! ```text
//! { "$": "/sign", "$$": "/sign/in", "in": { "$": "/sign/in" }, "up": { "$": "/sign/up" } }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Serialized key holding a level's own path
pub const PATH_KEY: &str = "$";
/// Serialized key holding a level's index path
pub const INDEX_KEY: &str = "$$";

/// Names that would collide with [`PATH_KEY`] / [`INDEX_KEY`] once serialized
pub fn is_reserved_name(name: &str) -> bool {
    name == PATH_KEY || name == INDEX_KEY
}

/// Resolved paths for one route level and everything named beneath it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Direction {
    path: String,
    index: Option<String>,
    routes: BTreeMap<String, Direction>,
}

impl Direction {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Absolute path of this level
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute path of the default route of this level, if one was marked
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Named sub-direction
    pub fn get(&self, name: &str) -> Option<&Direction> {
        self.routes.get(name)
    }

    /// Named sub-directions, ordered by name
    pub fn routes(&self) -> impl Iterator<Item = (&str, &Direction)> {
        self.routes.iter().map(|(name, direction)| (name.as_str(), direction))
    }

    /// Walks a dotted name chain (`"sign.in"`); the empty chain is this level
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_chart::{Chart, RouteNode};
    ///
    /// let root = RouteNode::new().with_nested_routes(vec![
    ///     RouteNode::new()
    ///         .with_name("sign")
    ///         .with_path("/sign")
    ///         .with_suffix("in", "/in")
    ///         .with_suffix("up", "/up"),
    /// ]);
    ///
    /// let directions = Chart::describe(&root);
    /// assert_eq!(directions.path_of("sign.up"), Some("/sign/up"));
    /// assert_eq!(directions.path_of("sign.out"), None);
    /// ```
    pub fn lookup(&self, chain: &str) -> Option<&Direction> {
        chain
            .split('.')
            .filter(|name| !name.is_empty())
            .try_fold(self, |direction, name| direction.get(name))
    }

    /// Path at the end of a dotted name chain
    pub fn path_of(&self, chain: &str) -> Option<&str> {
        self.lookup(chain).map(Direction::path)
    }

    /// Builds a link by substituting path placeholders
    ///
    /// - `:name` must be provided, otherwise `None`
    /// - `:name?` is dropped when not provided
    /// - `*name` must be provided
    ///
    /// Values are inserted as given; nothing is validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_chart::Direction;
    /// use std::collections::HashMap;
    ///
    /// let direction = Direction::new("/users/:id/posts/:page?");
    ///
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "42".to_string());
    /// assert_eq!(direction.link(&params), Some("/users/42/posts".to_string()));
    ///
    /// assert_eq!(direction.link(&HashMap::new()), None);
    /// ```
    pub fn link(&self, params: &HashMap<String, String>) -> Option<String> {
        let segments: Option<Vec<Option<String>>> = self
            .path
            .split('/')
            .map(|segment| match segment.chars().next() {
                // Optional parameter: keep if provided, drop otherwise
                Some(':') if segment.ends_with('?') => {
                    Some(params.get(&segment[1..segment.len() - 1]).cloned())
                }
                // Required parameter or catch-all
                Some(':') | Some('*') => params.get(&segment[1..]).cloned().map(Some),
                _ => Some(Some(segment.to_string())),
            })
            .collect();

        segments.map(|segments| segments.into_iter().flatten().collect::<Vec<_>>().join("/"))
    }

    /// [`Direction::link`] with parameter tuples
    pub fn link_with(&self, params: &[(&str, &str)]) -> Option<String> {
        let params: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.link(&params)
    }

    // ========================================================================
    // Assembly (used while describing)
    // ========================================================================

    pub(crate) fn set_path(&mut self, path: String) {
        self.path = path;
    }

    /// Sets the index path unless one is already set
    pub(crate) fn claim_index(&mut self, path: &str) {
        if self.index.is_none() {
            self.index = Some(path.to_string());
        }
    }

    pub(crate) fn insert(&mut self, name: String, direction: Direction) {
        self.routes.insert(name, direction);
    }

    /// Merges an anonymous child's entries into this level
    ///
    /// Entries overwrite same-named ones already here. The child's own path
    /// is discarded (this level's path is written last); its index only
    /// fills an empty slot.
    pub(crate) fn hoist(&mut self, anonymous: Direction) {
        let Direction { index, routes, .. } = anonymous;
        self.routes.extend(routes);
        if let Some(index) = index {
            self.claim_index(&index);
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.index.is_some()) + self.routes.len();
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(PATH_KEY, &self.path)?;
        if let Some(index) = &self.index {
            map.serialize_entry(INDEX_KEY, index)?;
        }
        for (name, direction) in &self.routes {
            map.serialize_entry(name, direction)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Direction {
        let mut sign = Direction::new("/sign");
        sign.insert("in".into(), Direction::new("/sign/in"));
        sign.insert("up".into(), Direction::new("/sign/up"));
        sign.claim_index("/sign/in");

        let mut root = Direction::new("");
        root.insert("sign".into(), sign);
        root
    }

    #[test]
    fn test_lookup() {
        let root = sample();
        assert_eq!(root.lookup("").map(Direction::path), Some(""));
        assert_eq!(root.path_of("sign"), Some("/sign"));
        assert_eq!(root.path_of("sign.in"), Some("/sign/in"));
        assert_eq!(root.lookup("sign.in.deeper"), None);
        assert_eq!(root.get("sign").and_then(Direction::index), Some("/sign/in"));
    }

    #[test]
    fn test_claim_index_is_set_once() {
        let mut direction = Direction::new("/a");
        direction.claim_index("/a/first");
        direction.claim_index("/a/second");
        assert_eq!(direction.index(), Some("/a/first"));
    }

    #[test]
    fn test_hoist_overwrites_entries_not_index() {
        let mut parent = Direction::new("/p");
        parent.insert("shared".into(), Direction::new("/p/old"));
        parent.claim_index("/p/kept");

        let mut anonymous = Direction::new("/p/anon");
        anonymous.insert("shared".into(), Direction::new("/p/new"));
        anonymous.insert("extra".into(), Direction::new("/p/extra"));
        anonymous.claim_index("/p/ignored");

        parent.hoist(anonymous);
        assert_eq!(parent.path(), "/p");
        assert_eq!(parent.index(), Some("/p/kept"));
        assert_eq!(parent.path_of("shared"), Some("/p/new"));
        assert_eq!(parent.path_of("extra"), Some("/p/extra"));
    }

    #[test]
    fn test_hoist_fills_empty_index() {
        let mut parent = Direction::new("/p");
        let mut anonymous = Direction::new("/p");
        anonymous.claim_index("/p/home");
        parent.hoist(anonymous);
        assert_eq!(parent.index(), Some("/p/home"));
    }

    #[test]
    fn test_serialize_reserved_keys() {
        assert_eq!(
            serde_json::to_value(sample()).unwrap(),
            json!({
                "$": "",
                "sign": {
                    "$": "/sign",
                    "$$": "/sign/in",
                    "in": { "$": "/sign/in" },
                    "up": { "$": "/sign/up" }
                }
            })
        );
    }

    #[test]
    fn test_link_substitution() {
        let direction = Direction::new("/docs/*slug");
        assert_eq!(
            direction.link_with(&[("slug", "guide/intro")]),
            Some("/docs/guide/intro".to_string())
        );
        assert_eq!(direction.link_with(&[]), None);

        let plain = Direction::new("/about");
        assert_eq!(plain.link_with(&[("unused", "x")]), Some("/about".to_string()));

        let root = Direction::new("");
        assert_eq!(root.link_with(&[]), Some(String::new()));
    }

    #[test]
    fn test_reserved_names() {
        assert!(is_reserved_name("$"));
        assert!(is_reserved_name("$$"));
        assert!(!is_reserved_name("$home"));
    }
}
