use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

pub(crate) fn data_url(file: &str) -> String {
    format!("{}/{file}", data_base_url())
}

fn data_base_url() -> String {
    if let Some(raw) = option_env!("FOLIO_DATA_BASE").or(option_env!("TRUNK_PUBLIC_FOLIO_DATA_BASE"))
    {
        let trimmed = raw.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    "./data".to_string()
}

pub(crate) async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("missing window"))?;
    let response = JsFuture::from(window.fetch_with_str(url)).await?;
    let response: Response = response.dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "fetch {url} failed with status {}",
            response.status()
        )));
    }
    let body = JsFuture::from(response.text()?).await?;
    body.as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
