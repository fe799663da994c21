use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const FIRST_REL: &str = "first";
pub const LAST_REL: &str = "last";
pub const NEXT_REL: &str = "next";
pub const PREV_REL: &str = "prev";

/// One link-value of a `Link` header, as defined in RFC 5988.
///
/// `params` holds the extension link-params. Their order carries no meaning;
/// they are always rendered sorted by name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub uri: String,

    pub rel: String,

    #[serde(default)]
    pub params: HashMap<String, String>,
}

impl Link {
    pub fn new(uri: impl Into<String>, rel: impl Into<String>) -> Link {
        Link {
            uri: uri.into(),
            rel: rel.into(),
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Link {
        self.params.insert(key.into(), value.into());
        self
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.uri.trim().is_empty()
    }
}
