/// Core error type for the ticker system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("symbol must not be blank")]
    InvalidSymbol,

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("upstream rate limit reached: {0}")]
    RateLimited(String),

    #[error("upstream rejected the request: {0}")]
    Rejected(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Stable machine-readable code reported to tool callers.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSymbol => "invalid_symbol",
            Self::UpstreamUnavailable(_) | Self::UpstreamStatus(_) => "upstream_unavailable",
            Self::MalformedResponse(_) => "upstream_malformed",
            Self::RateLimited(_) => "rate_limited",
            Self::Rejected(_) => "upstream_rejected",
            Self::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_transport_share_a_code() {
        assert_eq!(Error::UpstreamStatus(500).code(), "upstream_unavailable");
        assert_eq!(
            Error::UpstreamUnavailable("connection refused".into()).code(),
            "upstream_unavailable"
        );
    }

    #[test]
    fn throttling_is_distinct_from_rejection() {
        assert_eq!(Error::RateLimited("slow down".into()).code(), "rate_limited");
        assert_eq!(Error::Rejected("bad key".into()).code(), "upstream_rejected");
    }

    #[test]
    fn display_includes_status() {
        assert_eq!(Error::UpstreamStatus(503).to_string(), "upstream returned HTTP 503");
    }
}
