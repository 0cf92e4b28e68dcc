// Image data-URL validation

use crate::error::{Result, ViewError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted shape of an inline image reference. Only `jpeg`, `jpg` and `png`
/// MIME subtypes are supported.
static DATA_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/(jpeg|jpg|png);base64,([A-Za-z0-9+/=]+)$")
        .expect("data URL pattern is valid")
});

/// Validate a `data:image/...;base64,` string.
///
/// Validation is purely syntactic: the base64 payload is not decoded and the
/// bytes are not checked for being a real image. When `max_image_bytes` is
/// set, the estimated decoded size of the payload is checked against it.
pub fn validate_image_data_url(image_data: &str, max_image_bytes: Option<usize>) -> Result<()> {
    let Some(captures) = DATA_URL_PATTERN.captures(image_data) else {
        return Err(ViewError::InvalidImage(
            "image must be a data:image/<fmt>;base64 string; only jpeg, jpg and png are supported"
                .to_string(),
        ));
    };

    if let Some(limit) = max_image_bytes {
        let payload = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
        let estimated = estimated_decoded_len(payload);
        if estimated > limit {
            return Err(ViewError::InvalidImage(format!(
                "image payload of about {} bytes exceeds the configured limit of {} bytes",
                estimated, limit
            )));
        }
    }

    Ok(())
}

/// Estimate the decoded byte length of a base64 payload without decoding it.
///
/// The payload is not required to be well-formed base64 (the regex admits
/// degenerate shapes like a lone `=`), so the arithmetic must not underflow.
fn estimated_decoded_len(payload: &str) -> usize {
    let padding = payload.bytes().rev().take_while(|&b| b == b'=').count();
    ((payload.len() / 4) * 3).saturating_sub(padding.min(2))
}
