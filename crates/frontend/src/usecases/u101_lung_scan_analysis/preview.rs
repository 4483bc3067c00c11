use contracts::usecases::u101_lung_scan_analysis::{PreviewError, PreviewHandle, PreviewSource};
use web_sys::{File, Url};

/// Creates `blob:` object URLs for files from the picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectUrlSource;

/// An object URL that is revoked when dropped.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl PreviewHandle for ObjectUrl {
    fn src(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        match Url::revoke_object_url(&self.url) {
            Ok(()) => log::debug!("Revoked preview {}", self.url),
            Err(e) => log::warn!("Failed to revoke preview {}: {:?}", self.url, e),
        }
    }
}

impl PreviewSource for ObjectUrlSource {
    type File = File;
    type Handle = ObjectUrl;

    fn acquire(&self, file: &File) -> Result<ObjectUrl, PreviewError> {
        let url = Url::create_object_url_with_blob(file)
            .map_err(|e| PreviewError(format!("{:?}", e)))?;
        log::debug!("Created preview {} for {}", url, file.name());
        Ok(ObjectUrl { url })
    }
}
