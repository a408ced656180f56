//! Idempotent directory creation

use std::fs::DirBuilder;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

/// Permission bits for created directories (owner and group rwx)
#[cfg(unix)]
const DIR_MODE: u32 = 0o770;

/// Create the directory at `path`
///
/// Returns `true` if the directory was created or the OS reports that the
/// path already exists, `false` on any other failure. Parents are not
/// created.
///
/// # Example
/// ```
/// use progen_rng_core_rs::platform::create_directory;
///
/// let root = std::env::temp_dir().join("progen-doc-create-directory");
/// assert!(create_directory(&root));
/// assert!(create_directory(&root));
/// # std::fs::remove_dir(&root).unwrap();
/// ```
pub fn create_directory(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();

    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    match builder.create(path) {
        Ok(()) => true,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => true,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "directory creation failed");
            false
        }
    }
}
