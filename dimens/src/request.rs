use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Package name the generated resources belong to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PackageName {
    Literal(String),
    /// Text file containing the package name.
    Resource(PathBuf),
}

impl PackageName {
    /// Accepts exactly one of the two forms.
    pub fn from_parts(literal: Option<String>, resource: Option<PathBuf>) -> Result<Self> {
        match (literal, resource) {
            (Some(literal), None) => Ok(Self::Literal(literal)),
            (None, Some(path)) => Ok(Self::Resource(path)),
            (None, None) => Err(Error::MissingPackageName),
            (Some(_), Some(_)) => Err(Error::ConflictingPackageName),
        }
    }

    pub fn resolve(&self) -> Result<String> {
        match self {
            Self::Literal(name) => Ok(name.clone()),
            Self::Resource(path) => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| Error::ReadPackageName {
                        path: path.clone(),
                        source,
                    })?;
                let name = contents.trim();
                if name.is_empty() {
                    return Err(Error::EmptyPackageName { path: path.clone() });
                }
                Ok(name.to_string())
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct GenerationRequest {
    out_dir: PathBuf,
    package: PackageName,
    dpis: Vec<String>,
}

impl GenerationRequest {
    pub fn new(out_dir: impl Into<PathBuf>, package: PackageName) -> Self {
        Self {
            out_dir: out_dir.into(),
            package,
            dpis: vec![],
        }
    }

    /// Extra densities to generate qualified buckets for.
    pub fn with_dpis<I, S>(mut self, dpis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dpis.extend(dpis.into_iter().map(Into::into));
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn package(&self) -> &PackageName {
        &self.package
    }

    pub fn dpis(&self) -> &[String] {
        &self.dpis
    }
}
