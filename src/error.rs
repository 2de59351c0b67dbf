use thiserror::Error;

#[derive(Error, Debug)]
pub enum DdpError {
    #[error("No input file argument supplied")]
    MissingInput,

    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid extraction pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid options: {message}")]
    Options { message: String },

    #[error("{message}")]
    Cli { message: String },
}

impl DdpError {
    pub fn io<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        DdpError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
}

impl UserFriendlyError for DdpError {
    fn user_message(&self) -> String {
        match self {
            DdpError::Io { path, source } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied accessing: {}", path)
                }
                _ => format!("Failed to access {}: {}", path, source),
            },
            DdpError::Cli { message } => message.trim_end().to_string(),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DdpError>;
