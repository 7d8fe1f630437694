use crate::Error;
use std::collections::BTreeSet;

/// Android generalized screen density.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Density {
    Ldpi,
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 6] = [
        Self::Ldpi,
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    /// Resource qualifier used in `values-<qualifier>` directory names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ldpi => "ldpi",
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Dots per inch as stored in `ResTable_config::density`.
    pub fn dpi(self) -> u16 {
        match self {
            Self::Ldpi => 120,
            Self::Mdpi => 160,
            Self::Hdpi => 240,
            Self::Xhdpi => 320,
            Self::Xxhdpi => 480,
            Self::Xxxhdpi => 640,
        }
    }

    /// Ratio to the mdpi baseline.
    pub fn scale(self) -> f32 {
        match self {
            Self::Ldpi => 0.75,
            Self::Mdpi => 1.0,
            Self::Hdpi => 1.5,
            Self::Xhdpi => 2.0,
            Self::Xxhdpi => 3.0,
            Self::Xxxhdpi => 4.0,
        }
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Density {
    type Err = Error;

    fn from_str(density: &str) -> Result<Self, Self::Err> {
        Ok(match density {
            "ldpi" => Self::Ldpi,
            "mdpi" => Self::Mdpi,
            "hdpi" => Self::Hdpi,
            "xhdpi" => Self::Xhdpi,
            "xxhdpi" => Self::Xxhdpi,
            "xxxhdpi" => Self::Xxxhdpi,
            _ => return Err(Error::UnknownDensity(density.to_string())),
        })
    }
}

/// A density together with the label its output directory is named after.
///
/// Buckets requested by the caller are qualified: their label carries a leading `-`,
/// so `-ldpi` and `ldpi` are distinct buckets sharing a scale and end up in
/// `values--ldpi` and `values-ldpi` respectively.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DensityBucket {
    density: Density,
    qualified: bool,
}

impl DensityBucket {
    pub fn canonical(density: Density) -> Self {
        Self {
            density,
            qualified: false,
        }
    }

    pub fn qualified(density: Density) -> Self {
        Self {
            density,
            qualified: true,
        }
    }

    pub fn density(self) -> Density {
        self.density
    }

    pub fn is_qualified(self) -> bool {
        self.qualified
    }

    pub fn label(self) -> String {
        if self.qualified {
            format!("-{}", self.density)
        } else {
            self.density.to_string()
        }
    }

    pub fn scale(self) -> f32 {
        self.density.scale()
    }

    pub fn dir_name(self) -> String {
        format!("values-{}", self.label())
    }
}

impl std::fmt::Display for DensityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Immutable outcome of [`resolve_buckets`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Resolution {
    buckets: BTreeSet<DensityBucket>,
    ignored: Vec<String>,
}

impl Resolution {
    /// Every bucket to generate, canonical ones included.
    pub fn buckets(&self) -> impl Iterator<Item = DensityBucket> + '_ {
        self.buckets.iter().copied()
    }

    /// Buckets added on behalf of caller supplied names.
    pub fn accepted(&self) -> impl Iterator<Item = DensityBucket> + '_ {
        self.buckets().filter(|bucket| bucket.is_qualified())
    }

    /// Caller supplied names that matched no known density.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn contains(&self, bucket: DensityBucket) -> bool {
        self.buckets.contains(&bucket)
    }
}

/// Builds the bucket set from caller supplied density names.
///
/// Names that don't match a known density are skipped and reported through
/// [`Resolution::ignored`]. The six canonical buckets are always included.
pub fn resolve_buckets<I, S>(extras: I) -> Resolution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut resolution = Resolution::default();
    for name in extras {
        let name = name.as_ref();
        match name.parse::<Density>() {
            Ok(density) => {
                resolution.buckets.insert(DensityBucket::qualified(density));
            }
            Err(_) => resolution.ignored.push(name.to_string()),
        }
    }
    resolution
        .buckets
        .extend(Density::ALL.into_iter().map(DensityBucket::canonical));
    resolution
}
