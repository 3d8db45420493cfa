//! Text decoding of the registry body

use crate::RegistryError;
use encoding_rs::Encoding;
use tracing::warn;

/// Decode `bytes` from the encoding named by `label` into UTF-8
///
/// Malformed sequences become U+FFFD; the registry is still usable in that
/// case, so it is logged rather than treated as an error.
pub fn decode(bytes: &[u8], label: &str) -> Result<String, RegistryError> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| RegistryError::Encoding(label.to_string()))?;

    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(encoding = actual.name(), "Registry body contains malformed sequences");
    }
    Ok(text.into_owned())
}
