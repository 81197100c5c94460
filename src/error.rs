//! Error type for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a render.
///
/// Permission-denied directory listings are not represented here: they are
/// rendered as a placeholder line and the walk carries on.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot access '{}': not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot stat '{}': {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create output file '{}': {source}", path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = RenderError::Metadata {
            path: PathBuf::from("/tmp/gone.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/gone.txt"), "{}", msg);
        assert!(msg.contains("No such file"), "{}", msg);

        let err = RenderError::NotADirectory(PathBuf::from("missing"));
        assert_eq!(err.to_string(), "cannot access 'missing': not a directory");
    }

    #[test]
    fn test_io_errors_convert_to_output() {
        let err: RenderError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, RenderError::Output(_)));
    }
}
