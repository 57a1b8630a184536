/// Outcome of a single check against one URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestResult {
    /// The URL exactly as it was given on the command line.
    pub url: String,

    /// HTTP status of the response.
    /// `None` when no response arrived because the connection failed or the timeout expired.
    pub response_code: Option<u16>,

    /// Wall-clock time spent on the request, in milliseconds.
    pub response_time_ms: f64,
}

impl RequestResult {
    /// Only a plain `200` counts as a successful check, other 2xx codes do not.
    pub fn is_ok(&self) -> bool {
        self.response_code == Some(200)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn result_with(code: Option<u16>) -> RequestResult {
        RequestResult {
            url: "https://example.com".to_string(),
            response_code: code,
            response_time_ms: 12.5,
        }
    }

    #[test]
    fn test_is_ok_only_for_200() {
        assert!(result_with(Some(200)).is_ok());
        assert!(!result_with(Some(201)).is_ok());
        assert!(!result_with(Some(204)).is_ok());
        assert!(!result_with(Some(301)).is_ok());
        assert!(!result_with(Some(404)).is_ok());
        assert!(!result_with(Some(500)).is_ok());
    }

    #[test]
    fn test_missing_code_is_not_ok() {
        assert!(!result_with(None).is_ok());
    }
}
