use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("one of package or package file is required")]
    MissingPackageName,

    #[error("package and package file are mutually exclusive")]
    ConflictingPackageName,

    #[error("failed to read package name from {}", path.display())]
    ReadPackageName {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package name in {} is empty", path.display())]
    EmptyPackageName { path: PathBuf },

    #[error("unknown density {0}")]
    UnknownDensity(String),

    #[error("failed to delete: {}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create folder: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to dimensions file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error("rendered resource is not valid utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Returns `true` for errors raised while validating the request, before any
    /// filesystem changes were made.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingPackageName
                | Self::ConflictingPackageName
                | Self::ReadPackageName { .. }
                | Self::EmptyPackageName { .. }
                | Self::UnknownDensity(_)
        )
    }
}
