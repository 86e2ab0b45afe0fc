use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A session cookie record as reported by the cookie bridge.
///
/// Only `name`, `value`, `domain`, and `path` are interpreted by this crate.
/// Everything else the bridge attaches (expiry, flags, priorities) is kept
/// verbatim in `extra` and round-trips through serialization untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCookie {
    pub name: String,
    #[serde(default)]
    pub value: String,
    pub domain: String,
    #[serde(default = "default_path")]
    pub path: String,
    /// Opaque metadata preserved but not interpreted.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_path() -> String {
    "/".to_string()
}

impl SessionCookie {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: path.into(),
            extra: Map::new(),
        }
    }

    /// Compare two cookies by identity.
    ///
    /// Cookies are the same if `domain`, `path` and `name` match exactly.
    /// `value` and `extra` are ignored. The comparison is case-sensitive,
    /// as given by the bridge.
    pub fn same_identity(&self, other: &SessionCookie) -> bool {
        if self.domain != other.domain {
            return false;
        }
        if self.path != other.path {
            return false;
        }
        self.name == other.name
    }
}

/// Returns the index of `cookie` on `items` by identity, or `None` if the
/// list is empty or no record matches.
pub fn index_of(items: &[SessionCookie], cookie: &SessionCookie) -> Option<usize> {
    items.iter().position(|item| item.same_identity(cookie))
}
