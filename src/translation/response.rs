//! Extracting translated text from the backend's raw response.
//!
//! The body is a nested JSON array. Its first element lists sentence
//! segments, each an array whose first item is the translated sentence:
//!
//! ```text
//! [[["Bonjour. ","Hello. ",null,null,10],["Monde","World",null,null,10]],null,"en",...]
//! ```

use serde_json::Value;

use super::transport::TransportError;

/// Concatenates the translated segments of a raw response body.
pub fn parse_translation(body: &str) -> Result<String, TransportError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| TransportError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TransportError::MalformedResponse(excerpt(body)))?;

    // Trailing segments such as transliterations carry null in the first slot
    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

fn excerpt(body: &str) -> String {
    const LIMIT: usize = 120;
    match body.char_indices().nth(LIMIT) {
        Some((end, _)) => format!("unexpected payload: {}...", &body[..end]),
        None => format!("unexpected payload: {body}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_segment() {
        let body = r#"[[["Bonjour","Hello",null,null,10]],null,"en"]"#;
        assert_eq!(parse_translation(body).unwrap(), "Bonjour");
    }

    #[test]
    fn test_parse_multiple_segments_preserves_newlines() {
        let body = r#"[[["Bonjour\n","Hello\n",null,null,10],["Monde","World",null,null,10]],null,"en"]"#;
        assert_eq!(parse_translation(body).unwrap(), "Bonjour\nMonde");
    }

    #[test]
    fn test_parse_skips_transliteration_segment() {
        let body = r#"[[["こんにちは","Hello",null,null,1],[null,null,"Kon'nichiwa"]],null,"en"]"#;
        assert_eq!(parse_translation(body).unwrap(), "こんにちは");
    }

    #[test]
    fn test_parse_null_segments_is_malformed() {
        let body = r#"[null,null,"en"]"#;
        assert!(matches!(
            parse_translation(body),
            Err(TransportError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_translation("<html>captcha</html>").unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_parse_object_is_malformed() {
        assert!(parse_translation(r#"{"error":"nope"}"#).is_err());
    }

    #[test]
    fn test_excerpt_truncates_long_bodies() {
        let long = "x".repeat(500);
        let text = excerpt(&long);
        assert!(text.ends_with("..."));
        assert!(text.len() < 200);
    }
}
