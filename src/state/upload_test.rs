use super::*;

fn accepted_state() -> UploadState {
    let mut state = UploadState::default();
    state.accept_file("leaf.png", "image/png");
    state
}

fn sample_result() -> UploadResult {
    UploadResult {
        prediction: "Tomato_Late_Blight".to_owned(),
        confidence: 0.93,
        id: "abc".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_has_nothing_staged() {
    let state = UploadState::default();
    assert!(state.staged.is_none());
    assert!(state.preview.is_none());
    assert!(state.result.is_none());
    assert!(state.error.is_none());
    assert!(!state.uploading);
    assert!(!state.drag_active);
    assert!(!state.can_submit());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn is_image_mime_accepts_image_subtypes_only() {
    assert!(is_image_mime("image/png"));
    assert!(is_image_mime("image/jpeg"));
    assert!(!is_image_mime("application/pdf"));
    assert!(!is_image_mime("text/image-ish"));
    assert!(!is_image_mime(""));
}

#[test]
fn accept_file_stages_and_enables_submit() {
    let state = accepted_state();
    assert_eq!(
        state.staged,
        Some(StagedFile {
            name: "leaf.png".to_owned(),
            mime: "image/png".to_owned(),
        })
    );
    assert!(state.error.is_none());
    assert!(state.can_submit());
}

#[test]
fn accept_file_clears_previous_error() {
    let mut state = UploadState::default();
    state.reject_file();
    state.accept_file("leaf.png", "image/png");
    assert!(state.error.is_none());
}

#[test]
fn accept_file_replaces_staged_file_wholesale() {
    let mut state = accepted_state();
    state.accept_file("other.jpg", "image/jpeg");
    assert_eq!(state.staged.as_ref().map(|f| f.name.as_str()), Some("other.jpg"));
}

#[test]
fn reject_file_never_enables_submit_or_preview() {
    let mut state = UploadState::default();
    state.reject_file();
    assert!(state.staged.is_none());
    assert!(state.preview.is_none());
    assert_eq!(state.error.as_deref(), Some(NOT_IMAGE_MESSAGE));
    assert!(!state.can_submit());
}

#[test]
fn reject_file_after_accept_returns_submit_to_disabled() {
    let mut state = accepted_state();
    state.set_preview("data:image/png;base64,AAAA".to_owned());
    state.reject_file();
    assert!(state.staged.is_none());
    assert!(state.preview.is_none());
    assert!(!state.can_submit());
}

// =============================================================
// Preview
// =============================================================

#[test]
fn set_preview_stores_data_uri() {
    let mut state = accepted_state();
    state.set_preview("data:image/png;base64,AAAA".to_owned());
    assert_eq!(state.preview.as_deref(), Some("data:image/png;base64,AAAA"));
    assert!(state.can_submit());
}

#[test]
fn preview_failure_unstages_and_surfaces_error() {
    let mut state = accepted_state();
    state.preview_failed();
    assert!(state.staged.is_none());
    assert!(state.preview.is_none());
    assert_eq!(state.error.as_deref(), Some(PREVIEW_FAILED_MESSAGE));
    assert!(!state.can_submit());
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn missing_file_sets_validation_error() {
    let mut state = UploadState::default();
    state.missing_file();
    assert_eq!(state.error.as_deref(), Some(NO_FILE_MESSAGE));
}

#[test]
fn start_upload_disables_submit_and_hides_panels() {
    let mut state = accepted_state();
    state.upload_succeeded(sample_result());
    state.start_upload();
    assert!(state.uploading);
    assert!(state.result.is_none());
    assert!(state.error.is_none());
    assert!(!state.can_submit());
}

#[test]
fn upload_success_reveals_result_and_reenables_submit() {
    let mut state = accepted_state();
    state.start_upload();
    state.upload_succeeded(sample_result());
    assert!(!state.uploading);
    assert_eq!(state.result.as_ref().map(|r| r.id.as_str()), Some("abc"));
    assert!(state.can_submit());
}

#[test]
fn upload_failure_suppresses_result_and_reenables_submit() {
    let mut state = accepted_state();
    state.start_upload();
    state.upload_failed("No file part".to_owned());
    assert!(!state.uploading);
    assert!(state.result.is_none());
    assert_eq!(state.error.as_deref(), Some("No file part"));
    assert!(state.can_submit());
}

#[test]
fn new_upload_discards_previous_result() {
    let mut state = accepted_state();
    state.start_upload();
    state.upload_succeeded(sample_result());
    state.start_upload();
    assert!(state.result.is_none());
}
