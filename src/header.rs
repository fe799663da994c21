use crate::{serialize_value, Error, Link};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, LINK};

/// Builds a `Link` header name/value pair ready to be set on a response.
///
/// An empty slice gives an empty value.
pub fn to_header(links: &[Link]) -> Result<(HeaderName, HeaderValue), Error> {
    let value = serialize_value(links)?;
    let value = match HeaderValue::from_str(&value) {
        Ok(v) => v,
        Err(err) => {
            return Err(Error::InvalidHeaderValue(format!(
                "Could not use \"{}\" as a header value ({}).",
                value, err
            )))
        }
    };

    Ok((LINK, value))
}

/// Appends a `Link` header to `headers`. Nothing is added when `links` is empty.
pub fn append_to(headers: &mut HeaderMap, links: &[Link]) -> Result<(), Error> {
    if links.is_empty() {
        return Ok(());
    }

    let (name, value) = to_header(links)?;
    headers.append(name, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NEXT_REL, PREV_REL};

    #[test]
    fn header_pair() {
        let (name, value) = to_header(&[
            Link::new("https://example.com/a", NEXT_REL),
            Link::new("https://example.com/b", PREV_REL).with_param("title", "Previous page"),
        ])
        .unwrap();

        assert_eq!(name, LINK);
        assert_eq!(
            value.to_str().unwrap(),
            r#"<https://example.com/a>; rel="next", <https://example.com/b>; rel="prev"; title="Previous page""#
        );
    }

    #[test]
    fn empty_links_give_empty_value() {
        let (_, value) = to_header(&[]).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn blank_uri_is_reported_before_conversion() {
        assert_eq!(to_header(&[Link::new(" ", NEXT_REL)]), Err(Error::BlankUri));
    }

    #[test]
    fn control_characters_are_rejected() {
        let link = Link::new("https://example.com/a", NEXT_REL).with_param("title", "a\nb");

        match to_header(&[link]) {
            Err(Error::InvalidHeaderValue(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn append_skips_empty_links() {
        let mut headers = HeaderMap::new();
        append_to(&mut headers, &[]).unwrap();
        assert!(headers.get(LINK).is_none());

        append_to(&mut headers, &[Link::new("https://example.com/a", NEXT_REL)]).unwrap();
        append_to(&mut headers, &[Link::new("https://example.com/b", PREV_REL)]).unwrap();

        let values: Vec<_> = headers
            .get_all(LINK)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(
            values,
            vec![
                r#"<https://example.com/a>; rel="next""#,
                r#"<https://example.com/b>; rel="prev""#,
            ]
        );
    }
}
