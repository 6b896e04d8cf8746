//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A sink destination could not be opened
    #[error("Failed to open sink '{destination}': {source}")]
    SinkOpen {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    /// A write to a sink failed
    #[error("Write to sink '{sink}' failed: {message}")]
    SinkWrite { sink: String, message: String },

    /// Encoder error with encoder name
    #[error("Encoder error ({encoder}): {message}")]
    EncoderError { encoder: String, message: String },

    /// Caller location could not be resolved
    #[error("failed to get caller")]
    CallerUnavailable,

    /// The process-wide logger was already installed
    #[error("Global logger already initialized")]
    AlreadyInitialized,

}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a sink open error
    pub fn sink_open(destination: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            destination: destination.into(),
            source,
        }
    }

    /// Create a sink write error
    pub fn sink_write(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkWrite {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create an encoder error
    pub fn encoder(encoder: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::EncoderError {
            encoder: encoder.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::sink_write("stderr", "broken pipe");
        assert!(matches!(err, LoggerError::SinkWrite { .. }));

        let err = LoggerError::encoder("json", "non-finite float");
        assert!(matches!(err, LoggerError::EncoderError { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = LoggerError::sink_open("/var/log/app.log", io_err);
        assert!(matches!(err, LoggerError::SinkOpen { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::sink_write("app.log", "disk full");
        assert_eq!(err.to_string(), "Write to sink 'app.log' failed: disk full");

        let err = LoggerError::encoder("console", "bad field");
        assert_eq!(err.to_string(), "Encoder error (console): bad field");

        assert_eq!(
            LoggerError::CallerUnavailable.to_string(),
            "failed to get caller"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("syncing sink", "cannot flush file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("syncing sink"));
        assert!(err.to_string().contains("cannot flush file"));
    }
}
