//! Shareable URLs carrying a chain snapshot in the `dh` query parameter.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use tracing::debug;

use dhviz_core::Chain;

use crate::error::ExportError;
use crate::snapshot::{from_json, to_json};

/// Query parameter holding the JSON snapshot.
pub const SHARE_PARAM: &str = "dh";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build `{base}?dh={json}` for `chain`.
///
/// If `base` already has a query string the parameter is appended with `&`.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if the chain cannot be serialized.
pub fn share_url(base: &str, chain: &Chain) -> Result<String, ExportError> {
    let json = to_json(chain)?;
    let sep = if base.contains('?') { '&' } else { '?' };
    let url = format!(
        "{base}{sep}{SHARE_PARAM}={}",
        utf8_percent_encode(&json, URI_COMPONENT)
    );
    debug!(joints = chain.len(), len = url.len(), "built share URL");
    Ok(url)
}

/// Recover the chain from a URL built by [`share_url`].
///
/// Any fragment is ignored. Other query parameters may appear before or
/// after `dh`.
///
/// # Errors
///
/// - [`ExportError::MissingParameter`] if there is no `dh` parameter.
/// - [`ExportError::InvalidUtf8`] if the decoded value is not UTF-8.
/// - Any error of [`from_json`].
pub fn chain_from_share_url(url: &str) -> Result<Chain, ExportError> {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    let value = without_fragment
        .split_once('?')
        .and_then(|(_, query)| {
            query.split('&').find_map(|pair| {
                pair.strip_prefix(SHARE_PARAM)
                    .and_then(|rest| rest.strip_prefix('='))
            })
        })
        .ok_or_else(|| ExportError::MissingParameter(SHARE_PARAM.to_string()))?;

    let json = percent_decode_str(value)
        .decode_utf8()
        .map_err(|_| ExportError::InvalidUtf8)?;
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dhviz_core::{JointParameter, Preset};

    #[test]
    fn encodes_like_encode_uri_component() {
        let chain = Chain::from(vec![JointParameter::default()]);
        let url = share_url("http://localhost/", &chain).unwrap();
        assert_eq!(
            url,
            "http://localhost/?dh=%5B%7B%22type%22%3A%22revolute%22%2C%22a%22%3A1.0%2C\
             %22alpha%22%3A0.0%2C%22d%22%3A0.0%2C%22theta%22%3A0.0%7D%5D"
        );
    }

    #[test]
    fn unreserved_marks_stay_literal() {
        let encoded = utf8_percent_encode("a-b_c.d!e~f*g'h(i)j k", URI_COMPONENT).to_string();
        assert_eq!(encoded, "a-b_c.d!e~f*g'h(i)j%20k");
    }

    #[test]
    fn reads_back_preset() {
        let chain = Preset::SixDof.chain().unwrap();
        let url = share_url("https://example.org/dh/index.html", &chain).unwrap();
        assert_eq!(chain_from_share_url(&url).unwrap(), chain);
    }

    #[test]
    fn appends_to_existing_query() {
        let chain = Chain::starter();
        let url = share_url("http://localhost/?lang=en", &chain).unwrap();
        assert!(url.starts_with("http://localhost/?lang=en&dh=%5B"));
        assert_eq!(chain_from_share_url(&url).unwrap(), chain);
    }

    #[test]
    fn ignores_fragment_and_other_params() {
        let chain = Chain::starter();
        let url = share_url("http://localhost/?dhx=1", &chain).unwrap();
        let url = format!("{url}&tab=theory#viewer");
        assert_eq!(chain_from_share_url(&url).unwrap(), chain);
    }

    #[test]
    fn missing_parameter() {
        for url in ["http://localhost/", "http://localhost/?tab=theory", "http://localhost/#dh=[]"] {
            let err = chain_from_share_url(url).unwrap_err();
            assert!(matches!(err, ExportError::MissingParameter(ref p) if p == "dh"));
        }
    }

    #[test]
    fn invalid_utf8() {
        let err = chain_from_share_url("http://localhost/?dh=%FF").unwrap_err();
        assert!(matches!(err, ExportError::InvalidUtf8));
    }

    #[test]
    fn corrupt_json() {
        let err = chain_from_share_url("http://localhost/?dh=%5B%7B").unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }
}
