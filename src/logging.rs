//! Diagnostic logging setup.
//!
//! Log verbosity comes from `RUST_LOG` (default `warn`). The dashboard owns
//! the terminal, so in that mode logs go to a file or nowhere at all.

use std::io;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File, OpenOptions};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::catalogue::CatalogueError;

const DEFAULT_FILTER: &str = "warn";

/// Where diagnostic logs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Standard error; used by the one-shot CLI modes.
    Stderr,
    /// Appended to the given file; parent directories are created.
    File(Utf8PathBuf),
    /// Logging is switched off.
    Disabled,
}

/// Installs the global tracing subscriber.
///
/// Calling this more than once keeps the first subscriber.
///
/// # Errors
///
/// Returns [`CatalogueError::Io`] when the log file cannot be opened.
pub fn init(destination: &LogDestination) -> Result<(), CatalogueError> {
    match destination {
        LogDestination::Stderr => install(io::stderr, true),
        LogDestination::File(path) => install(Mutex::new(open_log_file(path)?), false),
        LogDestination::Disabled => {}
    }
    Ok(())
}

fn install<W>(writer: W, ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed (tests, repeated init).
    let _already_installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .try_init();
}

/// Opens `path` for appending, creating it and its parent directories.
///
/// # Errors
///
/// Returns [`CatalogueError::Io`] when a directory or the file cannot be
/// created.
pub fn open_log_file(path: &Utf8Path) -> Result<File, CatalogueError> {
    let file_name = path.file_name().ok_or_else(|| CatalogueError::Io {
        message: format!("invalid log file path '{path}': no file name"),
    })?;
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new(""));

    let (root, relative_parent) = if parent.is_absolute() {
        let relative = parent.strip_prefix("/").map_err(|_| CatalogueError::Io {
            message: format!("failed to normalise log directory '{parent}'"),
        })?;
        (open_ambient("/")?, relative)
    } else {
        (open_ambient(".")?, parent)
    };

    let directory = if relative_parent.as_str().is_empty() || relative_parent.as_str() == "." {
        root
    } else {
        root.create_dir_all(relative_parent)
            .map_err(|error| CatalogueError::Io {
                message: format!("failed to create log directory '{parent}': {error}"),
            })?;
        root.open_dir(relative_parent)
            .map_err(|error| CatalogueError::Io {
                message: format!("failed to open log directory '{parent}': {error}"),
            })?
    };

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    directory
        .open_with(file_name, &options)
        .map_err(|error| CatalogueError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })
}

fn open_ambient(path: &str) -> Result<Dir, CatalogueError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|error| CatalogueError::Io {
        message: format!("failed to open directory '{path}': {error}"),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::open_log_file;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn utf8_root(temp: &TempDir) -> Result<Utf8PathBuf, Box<dyn std::error::Error>> {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|path| format!("non UTF-8 temp dir: {}", path.display()).into())
    }

    #[rstest]
    fn open_log_file_creates_parents_and_appends() -> TestResult {
        let temp = TempDir::new()?;
        let path = utf8_root(&temp)?.join("logs/nested/curator.log");

        writeln!(open_log_file(&path)?, "first")?;
        writeln!(open_log_file(&path)?, "second")?;

        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(contents, "first\nsecond\n");
        Ok(())
    }

    #[rstest]
    fn open_log_file_rejects_directory_paths() {
        let error = open_log_file(camino::Utf8Path::new("/")).expect_err("root has no file name");

        assert!(
            error.to_string().contains("no file name"),
            "unexpected error: {error}"
        );
    }
}
