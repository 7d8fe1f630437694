use std::path::{Path, PathBuf};

mod density;
mod dimen;
mod error;
mod request;
mod xml;

pub use crate::density::{resolve_buckets, Density, DensityBucket, Resolution};
pub use crate::dimen::{generate_dimens, Dimen, DimenMap, DEFAULT_RANGE};
pub use crate::error::{Error, Result};
pub use crate::request::{GenerationRequest, PackageName};
pub use crate::xml::render_dimens;

pub const DIMENS_XML: &str = "dimens.xml";

/// Writes `values-<label>/dimens.xml` files below a root directory it owns.
pub struct Generator {
    root: PathBuf,
}

impl Generator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bucket_dir(&self, bucket: DensityBucket) -> PathBuf {
        self.root.join(bucket.dir_name())
    }

    /// Deletes everything below the root and recreates it empty.
    pub fn reset_root(&self) -> Result<()> {
        if self.root.exists() {
            std::fs::remove_dir_all(&self.root).map_err(|source| Error::Delete {
                path: self.root.clone(),
                source,
            })?;
        }
        std::fs::create_dir_all(&self.root).map_err(|source| Error::CreateDir {
            path: self.root.clone(),
            source,
        })?;
        Ok(())
    }

    /// Generates and writes the dimensions of a single bucket.
    pub fn write_bucket(&self, bucket: DensityBucket) -> Result<PathBuf> {
        let dir = self.bucket_dir(bucket);
        std::fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
            path: dir.clone(),
            source,
        })?;
        let dimens = generate_dimens(
            *DEFAULT_RANGE.start(),
            *DEFAULT_RANGE.end(),
            bucket.scale(),
        );
        let xml = render_dimens(&dimens)?;
        tracing::trace!("{}:\n{}", bucket, xml);
        let path = dir.join(DIMENS_XML);
        std::fs::write(&path, xml).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("wrote {} dimens to {}", dimens.len(), path.display());
        Ok(path)
    }

    /// Resets the root and writes every resolved bucket, stopping at the first error.
    pub fn generate(&self, resolution: &Resolution) -> Result<Vec<PathBuf>> {
        self.generate_with(resolution, &mut ())
    }

    /// Like [`Generator::generate`], reporting every step to `progress`.
    pub fn generate_with<P: Progress + ?Sized>(
        &self,
        resolution: &Resolution,
        progress: &mut P,
    ) -> Result<Vec<PathBuf>> {
        for name in resolution.ignored() {
            tracing::warn!("ignoring unknown density {}", name);
        }
        progress.plan(resolution);

        progress.start(Step::Reset);
        self.reset_root()?;
        progress.finish(Step::Reset, &self.root);

        let mut written = Vec::with_capacity(resolution.len());
        for bucket in resolution.buckets() {
            progress.start(Step::Bucket(bucket));
            let path = self.write_bucket(bucket)?;
            progress.finish(Step::Bucket(bucket), &path);
            written.push(path);
        }
        Ok(written)
    }
}

/// A unit of work performed by [`Generator::generate_with`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    Reset,
    Bucket(DensityBucket),
}

/// Observer for a generation run. All methods default to doing nothing.
pub trait Progress {
    /// Called once with the buckets about to be written.
    fn plan(&mut self, _resolution: &Resolution) {}

    fn start(&mut self, _step: Step) {}

    /// `path` is the reset root or the written `dimens.xml`.
    fn finish(&mut self, _step: Step, _path: &Path) {}
}

impl Progress for () {}

/// Runs a complete generation for `request`.
///
/// The package name is validated before the output directory is touched.
pub fn generate(request: &GenerationRequest) -> Result<Vec<PathBuf>> {
    generate_with(request, &mut ())
}

pub fn generate_with<P: Progress + ?Sized>(
    request: &GenerationRequest,
    progress: &mut P,
) -> Result<Vec<PathBuf>> {
    let package = request.package().resolve()?;
    let span = tracing::info_span!(
        "generate",
        package = %package,
        root = %request.out_dir().display()
    );
    let _enter = span.enter();
    let resolution = resolve_buckets(request.dpis());
    Generator::new(request.out_dir()).generate_with(&resolution, progress)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::Result;
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

    pub fn init_logger() {
        tracing_log::LogTracer::init().ok();
        let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "info".to_owned());
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
            .with_env_filter(EnvFilter::new(env))
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    #[test]
    fn test_reset_root_removes_contents() -> Result<()> {
        init_logger();
        let dir = tempfile::tempdir()?;
        let root = dir.path().join("res");
        std::fs::create_dir_all(root.join("values-foo"))?;
        std::fs::write(root.join("stale.txt"), "stale")?;
        std::fs::write(root.join("values-foo").join(DIMENS_XML), "stale")?;
        let generator = Generator::new(&root);
        generator.reset_root()?;
        assert!(root.is_dir());
        assert_eq!(std::fs::read_dir(&root)?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_reset_root_creates_missing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let root = dir.path().join("a").join("b");
        Generator::new(&root).reset_root()?;
        assert!(root.is_dir());
        Ok(())
    }

    #[test]
    fn test_reset_root_over_file_fails() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let root = dir.path().join("res");
        std::fs::write(&root, "not a directory")?;
        let err = Generator::new(&root).reset_root().unwrap_err();
        assert!(!err.is_config());
        assert!(err.to_string().contains("res"));
        Ok(())
    }

    #[test]
    fn test_write_bucket() -> Result<()> {
        init_logger();
        let dir = tempfile::tempdir()?;
        let generator = Generator::new(dir.path());
        let path = generator.write_bucket(DensityBucket::qualified(Density::Hdpi))?;
        assert_eq!(path, dir.path().join("values--hdpi").join(DIMENS_XML));
        let xml = std::fs::read_to_string(&path)?;
        assert!(xml.contains("<dimen name=\"3dp\" translatable=\"false\">4.5dp</dimen>"));
        Ok(())
    }

    #[test]
    fn test_write_bucket_over_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let collision = dir.path().join("values-mdpi");
        std::fs::write(&collision, "not a directory")?;
        let err = Generator::new(dir.path())
            .write_bucket(DensityBucket::canonical(Density::Mdpi))
            .unwrap_err();
        match &err {
            Error::CreateDir { path, .. } => assert_eq!(path, &collision),
            _ => panic!("unexpected error {err:?}"),
        }
        assert!(err.to_string().contains("values-mdpi"));
        Ok(())
    }

    /// Records steps and plants a file where `values-hdpi` goes once the root is reset.
    #[derive(Default)]
    struct Recorder {
        planned: usize,
        events: Vec<String>,
    }

    impl Progress for Recorder {
        fn plan(&mut self, resolution: &Resolution) {
            assert!(!resolution.is_empty());
            self.planned = resolution.len();
        }

        fn start(&mut self, step: Step) {
            self.events.push(format!("start {step:?}"));
        }

        fn finish(&mut self, step: Step, path: &Path) {
            if step == Step::Reset {
                std::fs::write(path.join("values-hdpi"), "not a directory").unwrap();
            }
            self.events.push(format!("finish {step:?}"));
        }
    }

    #[test]
    fn test_generate_stops_at_first_failure() -> Result<()> {
        init_logger();
        let dir = tempfile::tempdir()?;
        let root = dir.path().join("res");
        let generator = Generator::new(&root);
        let mut recorder = Recorder::default();
        let err = generator
            .generate_with(&resolve_buckets(["xhdpi"]), &mut recorder)
            .unwrap_err();
        assert!(matches!(
            &err,
            Error::CreateDir { path, .. } if path.ends_with("values-hdpi")
        ));

        assert_eq!(recorder.planned, 7);
        let ldpi = DensityBucket::canonical(Density::Ldpi);
        let mdpi = DensityBucket::canonical(Density::Mdpi);
        let hdpi = DensityBucket::canonical(Density::Hdpi);
        assert_eq!(
            recorder.events,
            [
                format!("start {:?}", Step::Reset),
                format!("finish {:?}", Step::Reset),
                format!("start {:?}", Step::Bucket(ldpi)),
                format!("finish {:?}", Step::Bucket(ldpi)),
                format!("start {:?}", Step::Bucket(mdpi)),
                format!("finish {:?}", Step::Bucket(mdpi)),
                format!("start {:?}", Step::Bucket(hdpi)),
            ]
        );
        assert!(root.join("values-ldpi").join(DIMENS_XML).exists());
        assert!(root.join("values-mdpi").join(DIMENS_XML).exists());
        assert!(!root.join("values-xhdpi").exists());
        assert!(!root.join("values--xhdpi").exists());
        Ok(())
    }

    #[test]
    fn test_generate_returns_paths_in_bucket_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let resolution = resolve_buckets(["ldpi"]);
        let written = Generator::new(dir.path()).generate(&resolution)?;
        let expected: Vec<_> = resolution
            .buckets()
            .map(|bucket| dir.path().join(bucket.dir_name()).join(DIMENS_XML))
            .collect();
        assert_eq!(written, expected);
        assert_eq!(
            resolution.buckets().map(DensityBucket::density).collect::<Vec<_>>(),
            [
                Density::Ldpi,
                Density::Ldpi,
                Density::Mdpi,
                Density::Hdpi,
                Density::Xhdpi,
                Density::Xxhdpi,
                Density::Xxxhdpi,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_missing_package_touches_nothing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let root = dir.path().join("res");
        std::fs::create_dir_all(&root)?;
        std::fs::write(root.join("keep.txt"), "keep")?;
        let request = GenerationRequest::new(
            &root,
            PackageName::Resource(dir.path().join("missing.txt")),
        );
        let err = generate(&request).unwrap_err();
        assert!(err.is_config());
        assert!(root.join("keep.txt").exists());
        Ok(())
    }
}
