use anyhow::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

/// Classify a catalog error from its message chain
pub fn classify_error(error: &Error) -> ErrorType {
    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("401") || error_msg.contains("unauthorized") {
        return ErrorType::Unauthorized;
    }
    if error_msg.contains("404") || error_msg.contains("not found") || error_msg.contains("no such") {
        return ErrorType::NotFound;
    }
    if error_msg.contains("500") || error_msg.contains("server error") {
        return ErrorType::ServerError;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Error message shown to the user - the deepest cause in the chain
pub fn format_error_message(error: &Error) -> String {
    error.root_cause().to_string()
}
