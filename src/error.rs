/// Application error with a process exit code.
///
/// One variant per user-visible failure class:
///
/// - `Config` — API base URL unset; nothing can run until it is configured
/// - `Unavailable` — the service answered but the type catalog is empty or
///   malformed (distinct from a connectivity failure)
/// - `Transport` — network/connectivity failure on any endpoint
/// - `Api` — non-success scoring response with an optional server-supplied
///   detail string
/// - `Terminal` — terminal setup/draw failures in the TUI
#[derive(Clone)]
pub enum AppError {
    Config(String),
    Unavailable(String),
    Transport(String),
    Api { detail: Option<String> },
    Terminal(String),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(message.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Terminal(_) => 1,
            Self::Config(_) => 2,
            Self::Unavailable(_) => 3,
            Self::Transport(_) => 4,
            Self::Api { .. } => 5,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::Unavailable(_) => "Unavailable",
            Self::Transport(_) => "Transport",
            Self::Api { .. } => "Api",
            Self::Terminal(_) => "Terminal",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg)
            | Self::Unavailable(msg)
            | Self::Transport(msg)
            | Self::Terminal(msg) => write!(f, "{msg}"),
            Self::Api { detail } => {
                write!(f, "Error: {}", detail.as_deref().unwrap_or("unknown"))
            }
        }
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind())
            .field("exit_code", &self.exit_code())
            .field("message", &format!("{self}"))
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_surfaces_detail_verbatim() {
        let err = AppError::Api {
            detail: Some("type 'X' not found".to_string()),
        };
        assert_eq!(format!("{err}"), "Error: type 'X' not found");
    }

    #[test]
    fn api_error_without_detail_says_unknown() {
        let err = AppError::Api { detail: None };
        assert_eq!(format!("{err}"), "Error: unknown");
    }

    #[test]
    fn exit_codes_distinguish_failure_classes() {
        assert_eq!(AppError::config("x").exit_code(), 2);
        assert_eq!(AppError::unavailable("x").exit_code(), 3);
        assert_eq!(AppError::transport("x").exit_code(), 4);
        assert_eq!(AppError::Api { detail: None }.exit_code(), 5);
    }
}
