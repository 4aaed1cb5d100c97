//! Response body classification and rendering

/// A normalized response body.
///
/// Classification is a formatting concern: textual bodies pass through
/// verbatim, structured bodies re-render as pretty JSON for the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Raw textual body, emitted as-is
    Text(String),
    /// Structured body, rendered as 2-space-indented JSON
    Json(serde_json::Value),
}

impl ResponseBody {
    /// Classify a raw body by its content type.
    ///
    /// JSON content types that fail to parse fall back to text rather than
    /// erroring: classification never makes a successful call fail.
    pub fn classify(content_type: Option<&str>, raw: String) -> Self {
        let is_json = content_type
            .map(|ct| {
                let ct = ct.to_ascii_lowercase();
                ct.starts_with("application/json") || ct.split(';').next().is_some_and(|m| m.ends_with("+json"))
            })
            .unwrap_or(false);

        if is_json {
            match serde_json::from_str(&raw) {
                Ok(value) => ResponseBody::Json(value),
                Err(_) => ResponseBody::Text(raw),
            }
        } else {
            ResponseBody::Text(raw)
        }
    }

    /// Render for the shell's output stream.
    pub fn render(&self) -> String {
        match self {
            ResponseBody::Text(s) => s.clone(),
            ResponseBody::Json(v) => {
                serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
            }
        }
    }
}
