use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use folio_core::profile::OWNER_PROFILE;

use crate::{about, contact_form, gallery_view, nav};

const ERROR_STYLE_ID: &str = "inline-error-style";

pub(crate) fn run() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_event| {
            spawn_local(boot());
        })
        .forget();
    } else {
        spawn_local(boot());
    }
}

// Each section skips independently when its render targets are missing.
async fn boot() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    ensure_error_style(&document);
    update_header_name(&document, OWNER_PROFILE.name);
    about::populate_about_section(&document).await;
    if let Some(gallery) = gallery_view::build_gallery(&document).await {
        nav::install_navigation(&document, gallery.list_element().clone());
    }
    let _ = contact_form::install_contact_form(&document);
}

fn ensure_error_style(document: &Document) {
    if document.get_element_by_id(ERROR_STYLE_ID).is_some() {
        return;
    }
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(ERROR_STYLE_ID);
    style.set_text_content(Some(".error { color: var(--error); }"));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

fn update_header_name(document: &Document, name: &str) {
    let Ok(Some(title)) = document.query_selector("header h1") else {
        return;
    };
    title.set_text_content(Some(name));
}
