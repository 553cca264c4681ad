use thiserror::Error;

/// Failure of a single fetch-and-decode call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("server returned HTTP {0}")]
    HttpStatus(u16),

    #[error("network error: {0}")]
    Transport(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// A selection that does not name an item of the current collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Invalid item number '{input}' (choose 1-{count})")]
    OutOfRange { input: String, count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),
}

#[derive(Error, Debug)]
pub enum RookError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_converts_and_keeps_message() {
        fn setup() -> Result<()> {
            let built: std::result::Result<(), FetchError> =
                Err(FetchError::Transport("tls backend unavailable".into()));
            built?;
            Ok(())
        }
        let err = setup().unwrap_err();
        assert!(matches!(err, RookError::Fetch(FetchError::Transport(_))));
        assert_eq!(err.to_string(), "network error: tls backend unavailable");
    }
}
