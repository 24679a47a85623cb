#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// Connection refused, reset, DNS, TLS...
    Transport,
    /// The backend answered with a non-2xx status.
    Status(u16),
    /// The response body could not be decoded.
    Decode,
}

/// Error type for backend calls.
#[derive(Debug)]
pub struct BackendError {
    pub kind: BackendErrorKind,
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            BackendErrorKind::Status(code) => write!(f, "backend returned {code}: {}", self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        kind: BackendErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn status(code: u16, body: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Status(code), body)
    }

    pub fn is_transport(&self) -> bool {
        self.kind == BackendErrorKind::Transport
    }
}
