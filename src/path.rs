use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use nix::unistd::{access, AccessFlags};

/// Ordered list of directories consulted when looking up a command.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Snapshot of `PATH` as it is right now. Callers re-read it for every
    /// lookup so `PATH` changes apply immediately.
    pub fn from_env() -> Self {
        match env::var_os("PATH") {
            Some(paths) => Self::new(env::split_paths(&paths)),
            None => Self::default(),
        }
    }

    fn usable_dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs
            .iter()
            .map(PathBuf::as_path)
            .filter(|dir| !dir.as_os_str().is_empty() && dir.is_dir())
    }

    /// First `dir/name` that exists as a regular file. Existence only; the
    /// execute bit is not checked here. An absolute `name` replaces the
    /// directory, so it resolves to itself whenever any directory is usable.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let found = self
            .usable_dirs()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file());
        if found.is_none() {
            log::trace!("{name}: no match in search path");
        }
        found
    }

    /// Names of executable regular files across every directory. Used for
    /// completion, so unreadable directories are skipped without complaint.
    pub fn executables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for dir in self.usable_dirs() {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file() && access(&path, AccessFlags::X_OK).is_ok() {
                    names.insert(entry.file_name().to_string_lossy().into_owned());
                }
            }
        }
        names
    }
}
