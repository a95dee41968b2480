//! Upload panel: drop zone, hidden file chooser, preview, and submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the file-selection surface for the detection flow. The hidden file
//! input is the single owner of the selected `File` handle; shared state
//! mirrors only its name and MIME type plus the derived preview data URI.
//! Drop and chooser selection converge on the same staging path, so the
//! submit handler always reads the file back from the input element.

use leptos::prelude::*;

use crate::state::upload::UploadState;

/// Validate a chosen file, stage it, and start the preview read.
///
/// Rejection clears the input element so the stale handle can never be
/// submitted and re-choosing the same file still fires a change event.
#[cfg(feature = "hydrate")]
fn stage_selection(
    upload: RwSignal<UploadState>,
    input_ref: NodeRef<leptos::html::Input>,
    file: &web_sys::File,
) {
    let name = file.name();
    let mime = file.type_();
    if !crate::state::upload::is_image_mime(&mime) {
        upload.update(UploadState::reject_file);
        if let Some(input_el) = input_ref.get() {
            input_el.set_value("");
        }
        return;
    }

    upload.update(|u| u.accept_file(&name, &mime));

    let selected = gloo_file::File::from(file.clone());
    leptos::task::spawn_local(async move {
        match gloo_file::futures::read_as_data_url(&selected).await {
            Ok(data_url) => upload.update(|u| u.set_preview(data_url)),
            Err(e) => {
                log::warn!("preview read failed: {e}");
                upload.update(UploadState::preview_failed);
                if let Some(input_el) = input_ref.get() {
                    input_el.set_value("");
                }
            }
        }
    });
}

/// Drop zone, preview, and submit control for the detection flow.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_zone_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input_el) = input_ref.get() {
                input_el.click();
            }
        }
    };

    // preventDefault on dragover is what makes the zone a valid drop target.
    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.drag_active = true);
    };

    let on_dragleave = move |_| {
        upload.update(|u| u.drag_active = false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.drag_active = false);

        #[cfg(feature = "hydrate")]
        {
            let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };
            // Mirror the drop into the input so submission reads one place.
            if let Some(input_el) = input_ref.get() {
                input_el.set_files(Some(&files));
            }
            stage_selection(upload, input_ref, &file);
        }
    };

    let on_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = input_ref
                .get()
                .and_then(|el| el.files())
                .and_then(|list| list.get(0))
            else {
                return;
            };
            stage_selection(upload, input_ref, &file);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if upload.get().uploading {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = input_ref
                .get()
                .and_then(|el| el.files())
                .and_then(|list| list.get(0))
            else {
                upload.update(UploadState::missing_file);
                return;
            };

            upload.update(UploadState::start_upload);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_image(&file).await {
                    Ok(result) => upload.update(|u| u.upload_succeeded(result)),
                    Err(e) => {
                        log::warn!("upload failed: {e}");
                        upload.update(|u| u.upload_failed(e));
                    }
                }
            });
        }
    };

    view! {
        <form class="upload-panel" on:submit=on_submit>
            <div
                class="upload-area"
                class:upload-area--dragover=move || upload.get().drag_active
                on:click=on_zone_click
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <p class="upload-area__hint">"Drag and drop a plant photo here, or click to browse"</p>
                {move || {
                    upload.get().staged.map(|staged| {
                        view! { <p class="upload-area__file-name">{staged.name}</p> }
                    })
                }}
            </div>

            <input
                class="upload-panel__file-input"
                type="file"
                accept="image/*"
                style="display: none"
                node_ref=input_ref
                on:change=on_change
            />

            {move || {
                upload.get().preview.map(|data_url| {
                    view! {
                        <div class="upload-panel__preview">
                            <img class="upload-panel__preview-image" src=data_url alt="Selected plant photo" />
                        </div>
                    }
                })
            }}

            {move || {
                upload.get().error.map(|message| {
                    view! { <div class="upload-panel__error">{message}</div> }
                })
            }}

            {move || {
                upload
                    .get()
                    .uploading
                    .then(|| view! { <div class="upload-panel__loader">"Analyzing photo..."</div> })
            }}

            <button
                class="btn btn--primary upload-panel__submit"
                type="submit"
                disabled=move || !upload.get().can_submit()
            >
                "Detect Disease"
            </button>
        </form>
    }
}
