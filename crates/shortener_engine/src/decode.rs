use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}")]
    DecodeFailure { encoding: String },
}

/// Decode a response body into the display string.
///
/// Charset resolution: BOM -> Content-Type charset -> UTF-8. A body that is a
/// JSON string literal (`"https://..."`) is unwrapped; anything else, JSON or
/// not, is returned as the decoded text without further inspection.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> Result<String, DecodeError> {
    let text = decode_text(bytes, content_type)?;
    match serde_json::from_str::<String>(&text) {
        Ok(inner) => Ok(inner),
        Err(_) => Ok(text),
    }
}

fn decode_text(bytes: &[u8], content_type: Option<&str>) -> Result<String, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    decode_with(bytes, UTF_8)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("charset") {
                Some(value.trim().trim_matches(['"', '\'']).to_string())
            } else {
                None
            }
        })
        .next()
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<String, DecodeError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: enc.name().to_string(),
        });
    }
    Ok(text.into_owned())
}
