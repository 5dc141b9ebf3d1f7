use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::{env, fs};
use uuid::Uuid;

/// A request-scoped scratch directory holding a cloned repository tree.
/// Owned exclusively by the request that acquired it; the `Drop` impl
/// removes it on every exit path, including early returns and panics.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    pub fn acquire() -> io::Result<Self> {
        let path = env::temp_dir().join(format!("repoguard-{}", Uuid::new_v4()));
        fs::create_dir_all(&path)?;
        debug!("Acquired workspace {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("Failed to remove workspace {}: {}", self.path.display(), e);
            }
        } else {
            debug!("Released workspace {}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_creates_a_fresh_empty_directory() {
        let workspace = Workspace::acquire().unwrap();
        assert!(workspace.path().is_dir());
        assert_eq!(fs::read_dir(workspace.path()).unwrap().count(), 0);
    }

    #[test]
    fn drop_removes_the_directory_and_its_contents() {
        let workspace = Workspace::acquire().unwrap();
        let path = workspace.path().to_path_buf();
        fs::create_dir(path.join("repo")).unwrap();
        fs::write(path.join("repo/README.md"), "hello").unwrap();

        drop(workspace);
        assert!(!path.exists());
    }

    #[test]
    fn workspaces_do_not_collide() {
        let a = Workspace::acquire().unwrap();
        let b = Workspace::acquire().unwrap();
        assert_ne!(a.path(), b.path());
    }
}
