use super::types::ScoutError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl ScoutError {
    /// Classify this error to determine its type name and the process exit code it maps to.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            ScoutError::Config(_) => ErrorClassification {
                error_type: "ConfigurationError",
                exit_code: 2,
            },
            ScoutError::Authentication(_) => ErrorClassification {
                error_type: "AuthenticationError",
                exit_code: 4,
            },
            ScoutError::Request { .. } => ErrorClassification {
                error_type: "RequestError",
                exit_code: 5,
            },
            ScoutError::NoData(_) => ErrorClassification {
                error_type: "NoDataError",
                exit_code: 6,
            },

            ScoutError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                exit_code: 1,
            },
            ScoutError::Response(_) => ErrorClassification {
                error_type: "ResponseError",
                exit_code: 1,
            },
            ScoutError::Query(_) => ErrorClassification {
                error_type: "QueryError",
                exit_code: 1,
            },
            ScoutError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            ScoutError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
            ScoutError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_exit_code() {
        let err = ScoutError::Config("DOCKER_TOKEN environment variable not set.".into());
        let class = err.classify();
        assert_eq!(class.error_type, "ConfigurationError");
        assert_eq!(class.exit_code, 2);
    }

    #[test]
    fn test_auth_error_distinct_from_request_error() {
        let auth = ScoutError::Authentication("expired".into()).classify();
        let req = ScoutError::Request { status_code: 500 }.classify();
        assert_ne!(auth.exit_code, req.exit_code);
        assert_eq!(auth.error_type, "AuthenticationError");
        assert_eq!(req.error_type, "RequestError");
    }

    #[test]
    fn test_no_data_exit_code() {
        let err = ScoutError::NoData("No images found for org/stream.".into());
        assert_eq!(err.classify().exit_code, 6);
    }

    #[test]
    fn test_request_error_message_carries_status() {
        let err = ScoutError::Request { status_code: 503 };
        assert!(err.to_string().contains("[503]"));
    }

    #[test]
    fn test_network_error_generic_exit_code() {
        let err = ScoutError::Network("connection refused".into());
        assert_eq!(err.classify().exit_code, 1);
    }
}
