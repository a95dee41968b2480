//! Upload-flow state: staged file, preview, in-flight flags, and result.
//!
//! DESIGN
//! ======
//! The browser file handle itself stays inside the hidden file input (its
//! natural single owner); this model mirrors only the declared name and MIME
//! type, which is all that validation and control enablement need. Every
//! transition here is a pure method so the flow is testable on the host.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::types::UploadResult;

/// Shown when the selected file's declared type is not an image subtype.
pub const NOT_IMAGE_MESSAGE: &str = "Please select an image file (PNG, JPG, JPEG).";
/// Shown when the form is submitted with no staged file.
pub const NO_FILE_MESSAGE: &str = "Please select an image to upload.";
/// Shown when the selected file cannot be decoded for preview.
pub const PREVIEW_FAILED_MESSAGE: &str = "Could not read the selected image.";

/// Declared metadata of the staged file; replaced wholesale per selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub mime: String,
}

/// The accepted-format check: declared type only, no content sniffing.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// State for the upload page: selection, preview, request lifecycle, result.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    /// Metadata of the currently staged file, if any.
    pub staged: Option<StagedFile>,
    /// Data URI for the preview slot, set once decoding completes.
    pub preview: Option<String>,
    /// The most recent successful classification; at most one at a time.
    pub result: Option<UploadResult>,
    /// Message for the error panel; `None` hides it.
    pub error: Option<String>,
    /// True while the upload request is in flight.
    pub uploading: bool,
    /// True while a drag hovers the drop target.
    pub drag_active: bool,
}

impl UploadState {
    /// Stage an accepted image file. Clears any prior error; the preview is
    /// swapped separately once decoding finishes.
    pub fn accept_file(&mut self, name: &str, mime: &str) {
        self.staged = Some(StagedFile {
            name: name.to_owned(),
            mime: mime.to_owned(),
        });
        self.error = None;
    }

    /// Reject a non-image selection: nothing stays staged, no preview is
    /// shown, and the submit control returns to disabled.
    pub fn reject_file(&mut self) {
        self.staged = None;
        self.preview = None;
        self.error = Some(NOT_IMAGE_MESSAGE.to_owned());
    }

    /// Swap the decoded data URI into the preview slot.
    pub fn set_preview(&mut self, data_url: String) {
        self.preview = Some(data_url);
    }

    /// The staged file could not be decoded: unstage it and surface the
    /// failure, so an unreadable file never remains submittable.
    pub fn preview_failed(&mut self) {
        self.staged = None;
        self.preview = None;
        self.error = Some(PREVIEW_FAILED_MESSAGE.to_owned());
    }

    /// Fail-fast validation for a submit with nothing staged.
    pub fn missing_file(&mut self) {
        self.error = Some(NO_FILE_MESSAGE.to_owned());
    }

    /// Enter the in-flight phase: loader on, previous result and error
    /// discarded, submit disabled via [`Self::can_submit`].
    pub fn start_upload(&mut self) {
        self.uploading = true;
        self.error = None;
        self.result = None;
    }

    /// Settle a successful upload.
    pub fn upload_succeeded(&mut self, result: UploadResult) {
        self.uploading = false;
        self.result = Some(result);
    }

    /// Settle a failed upload; the result panel stays suppressed.
    pub fn upload_failed(&mut self, message: String) {
        self.uploading = false;
        self.error = Some(message);
    }

    /// The submit control is enabled only with a staged file and no request
    /// in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.staged.is_some() && !self.uploading
    }
}
