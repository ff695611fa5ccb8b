#[macro_use]
extern crate tracing;

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

pub mod config;
pub mod icon;
pub mod kotlin;
pub mod pipe;
pub mod ser;

pub use config::Config;

use crate::{
    kotlin::{ExtractError, IconReader},
    pipe::Pipe,
    ser::{RenderedIcon, SvgRenderer},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("source directory `{}` does not exist", .0.display())]
    MissingSourceDir(PathBuf),
    #[error("failed to create output directory `{}`: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Outcome of a [`convert_dir`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub success: usize,
    pub failed: usize,
    /// Failed sources that carry no icon property at all, already part of
    /// `failed`.
    pub skipped: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Done. Success: {}, Failed: {}", self.success, self.failed)
    }
}

/// Converts every icon source below `source` into `<output>/<Name>.svg`.
///
/// Only a missing source directory or an output directory that cannot be
/// created are errors, a file that fails to convert is logged and counted.
/// Every matching file that is not converted counts as failed, including
/// sources that declare no icon at all.
pub fn convert_dir(
    source: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
) -> Result<Summary, Error> {
    let (source, output) = (source.as_ref(), output.as_ref());

    if !source.exists() {
        return Err(Error::MissingSourceDir(source.to_path_buf()));
    }
    fs::create_dir_all(output).map_err(|source| Error::CreateOutputDir {
        path: output.to_path_buf(),
        source,
    })?;

    let mut pipes = IconReader::new(config.namespace.as_str()).pipe(SvgRenderer);
    let mut summary = Summary::default();

    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let path = match entry {
            Ok(entry) if config.matches(entry.file_name()) => entry.into_path(),
            Ok(_) => continue,
            Err(err) => {
                warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        match convert_file(&path, output, &mut pipes) {
            Ok(Some(written)) => {
                info!("Generated: {}", written.display());
                summary.success += 1;
            }
            Ok(None) => {
                warn!("Could not find an icon property in {}", path.display());
                summary.failed += 1;
                summary.skipped += 1;
            }
            Err(Error::Extract(err)) => {
                warn!("Could not extract path data from {}: {err}", path.display());
                summary.failed += 1;
            }
            Err(err) => {
                error!("Error processing {}: {err}", path.display());
                summary.failed += 1;
            }
        }
    }

    info!(
        success = summary.success,
        failed = summary.failed,
        skipped = summary.skipped,
        "conversion finished"
    );
    Ok(summary)
}

/// Runs one source file through `pipes`, returns the written file if any.
fn convert_file<P>(path: &Path, output: &Path, pipes: &mut P) -> Result<Option<PathBuf>, Error>
where
    P: Pipe<Input = String, Output = RenderedIcon, Error = Error>,
{
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(RenderedIcon { file_name, markup }) = pipes.process(source)? else {
        return Ok(None);
    };

    let target = output.join(file_name);
    fs::write(&target, markup).map_err(|source| Error::Write {
        path: target.clone(),
        source,
    })?;
    Ok(Some(target))
}
