// Typed errors for the load and save paths. A load failure is fatal to the
// conversion; a save failure is advisory and the caller may still exit clean.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub struct LoadError {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "could not load schema description from {}: {}",
            self.path.display(),
            self.reason
        )
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug)]
pub struct SaveError {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "could not save RDFS graph to {}: {}",
            self.path.display(),
            self.reason
        )
    }
}

impl std::error::Error for SaveError {}
