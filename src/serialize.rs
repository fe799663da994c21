use crate::{Error, Link};
use std::fmt::Write;

const HEADER_PREFIX: &str = "Link: ";

/// Generates an HTTP `Link` header line as defined in RFC 5988.
///
/// The relation type is always rendered first, next to the link-value. Other
/// link-params follow sorted by name. Links keep the order they were given in.
/// For example:
///
/// `Link: <https://api.example.com/scenarios?page=10>; rel="next"; title="Next scenarios"; total="1000"`
///
/// An empty slice yields an empty string. Values are emitted verbatim; quotes
/// inside them are not escaped.
pub fn serialize(links: &[Link]) -> Result<String, Error> {
    render(links, HEADER_PREFIX)
}

/// Like [`serialize`], without the leading `Link: ` header name.
pub fn serialize_value(links: &[Link]) -> Result<String, Error> {
    render(links, "")
}

fn render(links: &[Link], prefix: &str) -> Result<String, Error> {
    let mut b = String::new();

    for (i, link) in links.iter().enumerate() {
        if link.is_blank() {
            return Err(Error::BlankUri);
        }

        if i == 0 {
            b.push_str(prefix);
        } else {
            b.push_str(", ");
        }

        write_link(&mut b, link);
    }

    tracing::trace!(links = links.len(), "rendered link header");
    Ok(b)
}

fn write_link(b: &mut String, link: &Link) {
    // Writing into a String never fails.
    let _ = write!(b, r#"<{}>; rel="{}""#, link.uri, link.rel);

    let mut keys: Vec<&String> = link.params.keys().collect();
    keys.sort();
    for k in keys {
        let _ = write!(b, r#"; {}="{}""#, k, link.params[k]);
    }
}
