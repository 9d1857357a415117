use crate::core::{decode_model, LoadError, ModelAsset};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> LoadError {
    LoadError::Fetch(format!("{:?}", e))
}

pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    let window = web::window().ok_or_else(|| LoadError::Fetch("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        return Err(LoadError::Http {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode the model; bounds are computed before this returns.
pub async fn load(url: &str) -> Result<ModelAsset, LoadError> {
    let bytes = fetch_bytes(url).await?;
    log::info!("[asset] fetched {} ({} bytes)", url, bytes.len());
    let asset = decode_model(&bytes)?;
    log::info!(
        "[asset] {} parts, {} triangles, size=({:.2},{:.2},{:.2})",
        asset.parts.len(),
        asset.triangle_count(),
        asset.bounds.size().x,
        asset.bounds.size().y,
        asset.bounds.size().z
    );
    Ok(asset)
}
