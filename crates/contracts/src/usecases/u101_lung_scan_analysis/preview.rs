//! Preview handles for a chosen file.
//!
//! A handle is an owned resource: it is created by a [`PreviewSource`] and
//! released in its `Drop`. [`UploadSession`](super::UploadSession) is the only
//! owner, so replacing or clearing the selection releases the handle exactly once.

use super::error::PreviewError;

/// File picked by the user together with its display name
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub content: F,
}

impl<F> SelectedFile<F> {
    pub fn new(name: impl Into<String>, content: F) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Revocable reference used to render a thumbnail. Released on drop.
pub trait PreviewHandle {
    /// Value for `<img src=...>`
    fn src(&self) -> &str;
}

/// Creates preview handles for files of one platform type.
pub trait PreviewSource {
    type File: Clone;
    type Handle: PreviewHandle;

    fn acquire(&self, file: &Self::File) -> Result<Self::Handle, PreviewError>;
}
