use serde::{Deserialize, Serialize};

/// Default number of levels that start expanded.
pub const DEFAULT_EXPAND_DEPTH: usize = 1;
/// Default cap on children rendered per container.
pub const DEFAULT_MAX_CHILDREN: usize = 100;
/// Default cap on characters shown per string.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 2000;

/// An upper bound that may be switched off.
///
/// Serialized as an integer or `null`; negative integers read as
/// [`Limit::Unlimited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum Limit {
    #[default]
    Unlimited,
    AtMost(usize),
}

impl Limit {
    /// Negative values mean "no limit".
    pub fn from_signed(n: i64) -> Self {
        usize::try_from(n).map_or(Limit::Unlimited, Limit::AtMost)
    }

    /// How many of `len` items fit under the limit.
    pub fn clamp(self, len: usize) -> usize {
        match self {
            Limit::Unlimited => len,
            Limit::AtMost(max) => len.min(max),
        }
    }

    pub fn is_exceeded_by(self, n: usize) -> bool {
        matches!(self, Limit::AtMost(max) if n > max)
    }

    pub fn is_unlimited(self) -> bool {
        matches!(self, Limit::Unlimited)
    }
}

impl From<i64> for Limit {
    fn from(n: i64) -> Self {
        Limit::from_signed(n)
    }
}

impl From<i32> for Limit {
    fn from(n: i32) -> Self {
        Limit::from_signed(i64::from(n))
    }
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Limit::AtMost(n)
    }
}

impl From<Option<i64>> for Limit {
    fn from(n: Option<i64>) -> Self {
        n.map_or(Limit::Unlimited, Limit::from_signed)
    }
}

impl From<Limit> for Option<i64> {
    fn from(limit: Limit) -> Self {
        match limit {
            Limit::Unlimited => None,
            Limit::AtMost(max) => Some(i64::try_from(max).unwrap_or(i64::MAX)),
        }
    }
}

/// Options for one render call.
///
/// Every field has a default, so a partial JSON object is a valid
/// configuration:
///
/// ```
/// use jsontree::{Limit, RenderOptions};
///
/// let options: RenderOptions = serde_json::from_str(r#"{"max_children": -1}"#).unwrap();
/// assert_eq!(options.max_children, Limit::Unlimited);
/// assert_eq!(options.expand_depth, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Levels, counting the root as level 0, that start expanded.
    pub expand_depth: usize,
    /// Children shown per container before a "more items" summary.
    pub max_children: Limit,
    /// Characters shown per string before the truncation marker.
    pub max_string_length: Limit,
    /// Deepest container level rendered as a section. Deeper containers
    /// are replaced by a marker.
    pub max_depth: Limit,
    /// Display key for the root value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            expand_depth: DEFAULT_EXPAND_DEPTH,
            max_children: Limit::AtMost(DEFAULT_MAX_CHILDREN),
            max_string_length: Limit::AtMost(DEFAULT_MAX_STRING_LENGTH),
            max_depth: Limit::Unlimited,
            key: None,
        }
    }
}

impl RenderOptions {
    /// Options without any truncation.
    pub fn minimal() -> Self {
        Self {
            max_children: Limit::Unlimited,
            max_string_length: Limit::Unlimited,
            ..Self::default()
        }
    }

    pub fn with_expand_depth(mut self, depth: usize) -> Self {
        self.expand_depth = depth;
        self
    }

    pub fn with_max_children(mut self, limit: impl Into<Limit>) -> Self {
        self.max_children = limit.into();
        self
    }

    pub fn with_max_string_length(mut self, limit: impl Into<Limit>) -> Self {
        self.max_string_length = limit.into();
        self
    }

    pub fn with_max_depth(mut self, limit: impl Into<Limit>) -> Self {
        self.max_depth = limit.into();
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_limit_is_unlimited() {
        assert_eq!(Limit::from_signed(-1), Limit::Unlimited);
        assert_eq!(Limit::from_signed(i64::MIN), Limit::Unlimited);
        assert_eq!(Limit::from_signed(0), Limit::AtMost(0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Limit::AtMost(3).clamp(10), 3);
        assert_eq!(Limit::AtMost(30).clamp(10), 10);
        assert_eq!(Limit::Unlimited.clamp(10), 10);
        assert_eq!(Limit::AtMost(0).clamp(10), 0);
    }

    #[test]
    fn test_is_exceeded_by() {
        assert!(Limit::AtMost(10).is_exceeded_by(11));
        assert!(!Limit::AtMost(10).is_exceeded_by(10));
        assert!(!Limit::Unlimited.is_exceeded_by(usize::MAX));
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.expand_depth, 1);
        assert_eq!(options.max_children, Limit::AtMost(100));
        assert_eq!(options.max_string_length, Limit::AtMost(2000));
        assert!(options.max_depth.is_unlimited());
        assert!(options.key.is_none());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"expand_depth": 3, "max_string_length": null}"#).unwrap();
        assert_eq!(options.expand_depth, 3);
        assert_eq!(options.max_string_length, Limit::Unlimited);
        assert_eq!(options.max_children, Limit::AtMost(100));
    }

    #[test]
    fn test_serialize_unlimited_as_null() {
        let json = serde_json::to_value(RenderOptions::minimal()).unwrap();
        assert!(json["max_children"].is_null());
        assert_eq!(json["expand_depth"], 1);
        assert!(json.get("key").is_none());
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::default()
            .with_max_children(-5)
            .with_max_string_length(10)
            .with_key("root");
        assert_eq!(options.max_children, Limit::Unlimited);
        assert_eq!(options.max_string_length, Limit::AtMost(10));
        assert_eq!(options.key.as_deref(), Some("root"));
    }
}
