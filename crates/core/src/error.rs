use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("FAILED: {}", .command)]
    SubProcessExit { command: String },

    #[error("Error with sub process `{}`: {}", .command, .original)]
    SubProcess {
        command: String,
        original: std::io::Error,
    },

    #[error("Invocation has an empty program name.")]
    EmptyProgram,

    #[error("{} not found: {}", .description, .path)]
    MissingFile { description: String, path: String },

    #[error("Couldn't find {} up the directory tree from `{}`.", .marker, .start)]
    ProjectNotFound { marker: String, start: String },

    #[error("{}", .0)]
    MissingValue(String),

    #[error("{}", .0)]
    Verification(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} at path `{}`: {}", .description, .path, .original)]
    Io {
        description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Input closed while waiting for an answer.")]
    InputClosed,
}

impl Error {
    pub fn missing_file(description: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MissingFile {
            description: description.into(),
            path: path.into(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            description,
            path,
            original,
        }
    }
}
