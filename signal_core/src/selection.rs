//! # Image Selection
//!
//! The Input Collector side of the workflow: an ordered set of user-selected
//! image files, one per intersection approach. Selection order is preserved
//! (it determines which approach each image describes) and a new selection
//! always replaces the previous one.
//!
//! The four-image count invariant is checked at submission time via
//! [`ImageSelection::validate`], not at collection time, so a user can build
//! up a selection incrementally in the GUI before submitting.

use std::path::{Path, PathBuf};

use crate::errors::{SubmitError, SubmitResult};

/// Number of images a submission must contain, one per approach
pub const REQUIRED_IMAGE_COUNT: usize = 4;

/// A single user-selected image: an opaque blob plus the metadata the
/// multipart encoder needs
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Create an image file with an explicit MIME type
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        ImageFile {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Create an image file, inferring the MIME type from the file name
    /// extension (used by the GUI file picker, which only hands back names
    /// and bytes)
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for_name(&file_name).to_string();
        ImageFile {
            file_name,
            mime_type,
            bytes,
        }
    }

    /// Load an image file from disk
    pub fn load(path: &Path) -> SubmitResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            SubmitError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(ImageFile::from_bytes(file_name, bytes))
    }
}

/// MIME type for a file name, by extension
fn mime_for_name(name: &str) -> &'static str {
    let extension = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Ordered sequence of selected images, in user selection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSelection {
    files: Vec<ImageFile>,
}

impl ImageSelection {
    /// Build a selection from already-loaded files, preserving their order.
    /// Constructing a new selection is how a prior one gets replaced.
    pub fn from_files(files: Vec<ImageFile>) -> Self {
        ImageSelection { files }
    }

    /// Load a selection from disk paths, preserving argument order
    pub fn load_from_paths(paths: &[PathBuf]) -> SubmitResult<Self> {
        let files = paths
            .iter()
            .map(|p| ImageFile::load(p))
            .collect::<SubmitResult<Vec<_>>>()?;
        Ok(ImageSelection::from_files(files))
    }

    pub fn files(&self) -> &[ImageFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Enforce the four-image invariant. Called by the Submission Controller
    /// before any network I/O.
    pub fn validate(&self) -> SubmitResult<()> {
        if self.files.len() != REQUIRED_IMAGE_COUNT {
            return Err(SubmitError::InvalidSelection {
                actual: self.files.len(),
            });
        }
        Ok(())
    }
}
