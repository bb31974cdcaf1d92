//! Playlist download.
//!
//! One blocking GET per source via the curl crate (libcurl), with a bounded
//! timeout and no retries. Transport failures are classified into an
//! enumerated error so the orchestrator can log the failure kind.

use std::time::Duration;

/// Connect phase gets its own, shorter bound so an unreachable peer fails
/// fast even with a generous total timeout.
const CONNECT_TIMEOUT_CAP: Duration = Duration::from_secs(15);

/// Why a playlist fetch failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Peer unreachable: connect, resolve, or send/recv failure.
    #[error("connection failed: {0}")]
    ConnectionFailed(#[source] curl::Error),
    /// The transfer exceeded the configured timeout.
    #[error("timed out after {0}s")]
    TimedOut(u64),
    /// Response completed with a non-2xx status.
    #[error("HTTP {0}")]
    HttpStatus(u32),
    /// Any other transport-level failure.
    #[error("transfer failed: {0}")]
    Transport(#[source] curl::Error),
}

impl FetchError {
    /// Short label for logs and the run summary.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::ConnectionFailed(_) => "connection failed",
            FetchError::TimedOut(_) => "timed out",
            FetchError::HttpStatus(_) => "http status",
            FetchError::Transport(_) => "transport",
        }
    }
}

fn classify_curl_error(e: curl::Error, timeout: Duration) -> FetchError {
    if e.is_operation_timedout() {
        return FetchError::TimedOut(timeout.as_secs());
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FetchError::ConnectionFailed(e);
    }
    FetchError::Transport(e)
}

/// Fetches the playlist body from `url` with a single GET.
///
/// Follows redirects. Returns the body decoded as UTF-8 (lossily, so a stray
/// byte in a title never fails the whole source).
pub fn fetch_playlist(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(FetchError::Transport)?;
    easy.follow_location(true).map_err(FetchError::Transport)?;
    easy.max_redirections(10).map_err(FetchError::Transport)?;
    easy.connect_timeout(timeout.min(CONNECT_TIMEOUT_CAP))
        .map_err(FetchError::Transport)?;
    easy.timeout(timeout).map_err(FetchError::Transport)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(FetchError::Transport)?;
        transfer
            .perform()
            .map_err(|e| classify_curl_error(e, timeout))?;
    }

    let code = easy.response_code().map_err(FetchError::Transport)?;
    if !(200..300).contains(&code) {
        return Err(FetchError::HttpStatus(code));
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_kind() {
        assert_eq!(FetchError::HttpStatus(404).to_string(), "HTTP 404");
        assert_eq!(FetchError::TimedOut(30).to_string(), "timed out after 30s");
        assert_eq!(FetchError::HttpStatus(503).kind(), "http status");
        assert_eq!(FetchError::TimedOut(5).kind(), "timed out");
    }
}
