//! Per-invocation request options and streamed payloads

use std::path::PathBuf;

use tokio_util::io::ReaderStream;

/// A deferred byte-source opener.
///
/// The transport invokes the factory only when it is ready to stream the
/// request body, so the file descriptor is acquired around the exact span of
/// the network write. The factory may be invoked more than once.
pub type StreamFactory = Box<dyn Fn() -> std::io::Result<reqwest::Body> + Send + Sync>;

/// The payload of a single REST call. At most one representation by
/// construction.
pub enum Payload {
    /// No request body
    Empty,
    /// Structured JSON body
    Json(serde_json::Value),
    /// Lazily-opened byte stream
    Stream(StreamFactory),
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Empty => write!(f, "Empty"),
            Payload::Json(v) => f.debug_tuple("Json").field(v).finish(),
            Payload::Stream(_) => write!(f, "Stream(..)"),
        }
    }
}

/// Options describing one REST call
#[derive(Debug)]
pub struct RequestOptions {
    /// Overrides the context's base tenant for this call only
    pub tenant: Option<String>,
    /// Request payload
    pub payload: Payload,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            tenant: None,
            payload: Payload::Empty,
        }
    }
}

/// Build a stream factory over the named file.
///
/// The file is not touched here: open errors surface when the transport
/// invokes the factory.
pub fn file_stream_factory(path: PathBuf) -> StreamFactory {
    Box::new(move || {
        let file = std::fs::File::open(&path)?;
        let stream = ReaderStream::new(tokio::fs::File::from_std(file));
        Ok(reqwest::Body::wrap_stream(stream))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_options_are_empty() {
        let opts = RequestOptions::default();
        assert!(opts.tenant.is_none());
        assert!(matches!(opts.payload, Payload::Empty));
    }

    #[tokio::test]
    async fn test_factory_defers_open_until_invoked() {
        // Construction must succeed even for a path that doesn't exist
        let factory = file_stream_factory(PathBuf::from("/no/such/file"));
        let result = factory();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_factory_is_reinvocable() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"payload bytes").unwrap();

        let factory = file_stream_factory(tmp.path().to_path_buf());
        assert!(factory().is_ok());
        assert!(factory().is_ok());
    }

    #[test]
    fn test_payload_debug_hides_stream() {
        let factory = file_stream_factory(PathBuf::from("x"));
        let payload = Payload::Stream(factory);
        assert_eq!(format!("{:?}", payload), "Stream(..)");
    }
}
