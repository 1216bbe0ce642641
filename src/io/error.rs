use std::io;
use thiserror::Error;

/// IO-level errors for writing comparison reports
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let wrapped = IoError::from(io_err);

        match wrapped {
            IoError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn error_display_includes_cause() {
        let wrapped = IoError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(wrapped.to_string(), "IO error: pipe closed");
    }
}
