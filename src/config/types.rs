use serde::{Deserialize, Serialize};

/// Settings for a single [`Store`](crate::store::Store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Name used in log fields and error messages (default: "store").
    #[serde(default = "default_name")]
    pub name: String,
    /// Upper bound on re-entrant dispatch nesting.
    ///
    /// `None` (the default) places no limit. A top-level dispatch has depth 1.
    #[serde(default)]
    pub max_dispatch_depth: Option<u32>,
}

fn default_name() -> String {
    "store".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            max_dispatch_depth: None,
        }
    }
}
