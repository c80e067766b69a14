use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login rejected: invalid username or password")]
    Rejected,

    #[error("Login forbidden: the client banned this address after too many failed attempts")]
    Banned,

    #[error("Login accepted but no SID cookie was returned")]
    MissingSid,

    #[error("Login returned unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("Login transport error: {0}")]
    Transport(String),

    #[error("Login timed out after {0} seconds")]
    Timeout(u64),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Session error: {0}")]
    Auth(#[from] AuthError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Unauthorized: the session is missing or expired")]
    Unauthorized,

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ClientError::Decode(error.to_string())
        } else {
            ClientError::Transport(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        assert_eq!(format!("{}", AuthError::Rejected), "Login rejected: invalid username or password");
        assert_eq!(format!("{}", AuthError::UnexpectedStatus(502)), "Login returned unexpected status 502");
        assert_eq!(format!("{}", AuthError::Timeout(10)), "Login timed out after 10 seconds");
        assert_eq!(format!("{}", AuthError::MissingSid), "Login accepted but no SID cookie was returned");
    }

    #[test]
    fn test_client_error_display() {
        let error = ClientError::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "Transport error: connection refused");
        let error = ClientError::UnexpectedStatus { status: 409, body: "Conflict".to_string() };
        assert_eq!(format!("{}", error), "Unexpected status 409: Conflict");
        assert_eq!(format!("{}", ClientError::Timeout(5)), "Request timed out after 5 seconds");
    }

    #[test]
    fn test_client_error_from_auth_error() {
        let error: ClientError = AuthError::Banned.into();
        assert!(matches!(error, ClientError::Auth(AuthError::Banned)));
        assert!(format!("{}", error).starts_with("Session error: Login forbidden"));
    }

    #[test]
    fn test_error_debug() {
        let error = ClientError::Decode("expected value".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("Decode"));
        assert!(debug_str.contains("expected value"));
    }
}
