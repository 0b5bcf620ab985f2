use gloo::console;
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

use folio_core::asset_path::resolve_asset_path;
use folio_core::profile::{compose_about_text, HEADSHOT_FALLBACK, OWNER_PROFILE};

use crate::net;

pub(crate) async fn populate_about_section(document: &Document) {
    let Some(container) = document.get_element_by_id("aboutMe") else {
        return;
    };

    let about_data = match net::fetch_text(&net::data_url("aboutMeData.json")).await {
        Ok(text) => serde_json::from_str::<Value>(&text).unwrap_or(Value::Null),
        Err(error) => {
            console::warn!("about data unavailable, using defaults:", net::js_err(error));
            Value::Null
        }
    };
    let about_text = about_data.get("aboutMe").and_then(Value::as_str);
    let headshot = about_data.get("headshot").and_then(Value::as_str);

    let fragment = document.create_document_fragment();
    let Ok(paragraph) = document.create_element("p") else {
        return;
    };
    paragraph.set_text_content(Some(&compose_about_text(about_text)));
    let _ = fragment.append_child(&paragraph);

    let Ok(wrapper) = document.create_element("div") else {
        return;
    };
    wrapper.set_class_name("headshotContainer");
    let Ok(image) = document
        .create_element("img")
        .and_then(|element| element.dyn_into::<HtmlImageElement>().map_err(Into::into))
    else {
        return;
    };
    image.set_alt(&format!("{} headshot", OWNER_PROFILE.name));
    image.set_decoding("async");
    let _ = image.set_attribute("loading", "lazy");
    image.set_src(&resolve_asset_path(headshot, HEADSHOT_FALLBACK));
    let _ = wrapper.append_child(&image);
    let _ = fragment.append_child(&wrapper);
    let _ = container.append_child(&fragment);
}
