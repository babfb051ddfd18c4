//! Typeface loading and caching
//!
//! Card text renders with the DejaVu Sans faces shipped under
//! `assets/fonts/`. Faces are read from disk on first use and cached
//! behind a read lock so concurrent exports share one parsed copy.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use rusttype::Font;
use thiserror::Error;
use tracing::info;

const REGULAR_FACE: &str = "DejaVuSans.ttf";
const BOLD_FACE: &str = "DejaVuSans-Bold.ttf";

/// Font-related errors
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font file {0} is not a valid TrueType face")]
    Parse(PathBuf),
}

/// Regular and bold faces used by the card renderer
pub struct Typeface {
    pub regular: Font<'static>,
    pub bold: Font<'static>,
}

impl Typeface {
    /// Load both faces from a font directory
    pub fn load(dir: &Path) -> Result<Self, FontError> {
        let typeface = Typeface {
            regular: load_face(&dir.join(REGULAR_FACE))?,
            bold: load_face(&dir.join(BOLD_FACE))?,
        };
        info!(dir = %dir.display(), "Loaded card typeface");
        Ok(typeface)
    }
}

fn load_face(path: &Path) -> Result<Font<'static>, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(data).ok_or_else(|| FontError::Parse(path.to_path_buf()))
}

/// Lazily-loaded, shared typeface cache
pub struct FontLibrary {
    dir: PathBuf,
    cached: RwLock<Option<Arc<Typeface>>>,
}

impl FontLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FontLibrary {
            dir: dir.into(),
            cached: RwLock::new(None),
        }
    }

    /// Get the shared typeface, loading it on first call
    pub fn get(&self) -> Result<Arc<Typeface>, FontError> {
        if let Some(typeface) = self.cached.read().as_ref() {
            return Ok(Arc::clone(typeface));
        }
        let mut guard = self.cached.write();
        // Re-check under the write lock: a concurrent export may have
        // loaded the faces while we waited.
        if let Some(typeface) = guard.as_ref() {
            return Ok(Arc::clone(typeface));
        }
        let loaded = Arc::new(Typeface::load(&self.dir)?);
        *guard = Some(Arc::clone(&loaded));
        Ok(loaded)
    }
}
