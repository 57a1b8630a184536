use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Ways a check can fail.
///
/// `ConnectionFailure` and `TimeoutExpired` are expected outcomes of an uptime check and end up
/// as a result without a status code. `Other` covers everything else (bad URL, unsupported
/// scheme, redirect loops, broken response bodies, client setup) and must abort the run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("connection could not be established")]
    ConnectionFailure {
        #[source]
        source: reqwest::Error,
    },

    #[error("request did not complete before the timeout expired")]
    TimeoutExpired {
        #[source]
        source: reqwest::Error,
    },

    #[error("request failed unexpectedly")]
    Other {
        #[source]
        source: reqwest::Error,
    },
}

impl From<reqwest::Error> for CheckError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            CheckError::TimeoutExpired { source }
        } else if source.is_connect() || is_connection_drop(&source) {
            CheckError::ConnectionFailure { source }
        } else {
            CheckError::Other { source }
        }
    }
}

/// Detects a peer that went away or did not speak HTTP before a response head arrived, e.g. a
/// reset, a close without reply, or a banner from another protocol on the port.
fn is_connection_drop(err: &reqwest::Error) -> bool {
    if !err.is_request() {
        return false;
    }

    let mut cause = err.source();
    while let Some(src) = cause {
        if let Some(io_err) = src.downcast_ref::<io::Error>() {
            return matches!(
                io_err.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::UnexpectedEof
                    | io::ErrorKind::NotConnected
            );
        }
        if let Some(hyper_err) = src.downcast_ref::<hyper::Error>() {
            if hyper_err.is_incomplete_message()
                || hyper_err.is_closed()
                || hyper_err.is_parse()
                || hyper_err.is_parse_status()
            {
                return true;
            }
        }
        cause = src.source();
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_malformed_url_is_other() {
        let err = reqwest::Client::new()
            .get("not a url")
            .send()
            .await
            .expect_err("request to a malformed URL must fail");

        assert!(matches!(CheckError::from(err), CheckError::Other { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_other() {
        let err = reqwest::Client::new()
            .get("ftp://example.com/file.txt")
            .send()
            .await
            .expect_err("ftp is not supported");

        assert!(matches!(CheckError::from(err), CheckError::Other { .. }));
    }

    #[tokio::test]
    async fn test_refused_connection_is_connection_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("client");
        let err = client
            .get(format!("http://{addr}/"))
            .send()
            .await
            .expect_err("nothing listens on a released port");

        assert!(matches!(
            CheckError::from(err),
            CheckError::ConnectionFailure { .. }
        ));
    }

    #[tokio::test]
    async fn test_underlying_error_is_kept_as_source() {
        let err = reqwest::Client::new()
            .get("not a url")
            .send()
            .await
            .expect_err("request to a malformed URL must fail");

        let err = CheckError::from(err);
        assert!(err.source().is_some());
    }
}
