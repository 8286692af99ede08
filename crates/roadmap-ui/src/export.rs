//! PNG export of the rendered guide.
//!
//! Rasterisation is delegated to `html2canvas`, which the page loads as a
//! global script. The canvas it returns is encoded as a PNG data URL and
//! handed to a synthetic download link.

use leptos::{html, prelude::*, task::spawn_local};
use roadmap_core::config::ExportConfig;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue, prelude::wasm_bindgen};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement, HtmlElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = html2canvas)]
    fn html2canvas(
        element: &HtmlElement,
        options: &JsValue,
    ) -> std::result::Result<js_sys::Promise, JsValue>;
}

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The capture region has not been mounted.
    #[error("capture region is not mounted")]
    MissingRegion,

    /// Options could not be converted for the capture service.
    #[error("invalid capture options: {0}")]
    Options(String),

    /// The capture service rejected or failed.
    #[error("capture failed: {0}")]
    Capture(String),

    /// The canvas could not be encoded as PNG.
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// The download link could not be created.
    #[error("download failed: {0}")]
    Download(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Options passed to the capture service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    /// Device pixel ratio of the output.
    pub scale: f64,

    /// Load cross-origin images with CORS.
    #[serde(rename = "useCORS")]
    pub use_cors: bool,

    /// Verbose console output from the capture service.
    pub logging: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            use_cors: true,
            logging: false,
        }
    }
}

/// A single export: what to capture with and the file name to offer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub filename: String,
    pub options: CaptureOptions,
}

impl ExportRequest {
    #[must_use]
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            filename: config.filename.clone(),
            options: CaptureOptions {
                scale: config.scale,
                ..CaptureOptions::default()
            },
        }
    }
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Rasterise `element` and return it as a PNG data URL.
pub async fn capture(element: &HtmlElement, options: &CaptureOptions) -> Result<String> {
    let options =
        serde_wasm_bindgen::to_value(options).map_err(|e| ExportError::Options(e.to_string()))?;

    let promise = html2canvas(element, &options).map_err(|e| ExportError::Capture(js_error(e)))?;
    let canvas = JsFuture::from(promise)
        .await
        .map_err(|e| ExportError::Capture(js_error(e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ExportError::Capture("result is not a canvas".to_string()))?;

    canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| ExportError::Encode(js_error(e)))
}

/// Offer `data_url` as a download named `filename`.
pub fn trigger_download(data_url: &str, filename: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document".to_string()))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Download(js_error(e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("not an anchor element".to_string()))?;

    anchor.set_href(data_url);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

/// Capture `element` and download it as the file named in `request`.
///
/// Nothing is downloaded when any step fails.
pub async fn export_region(element: HtmlElement, request: ExportRequest) -> Result<()> {
    log::info!("exporting {} at scale {}", request.filename, request.options.scale);
    let data_url = capture(&element, &request.options).await?;
    trigger_download(&data_url, &request.filename)?;
    log::info!("exported {}", request.filename);
    Ok(())
}

/// Label for the export button given the number of exports in flight.
fn export_label(in_flight: usize) -> &'static str {
    if in_flight > 0 { "Exporting…" } else { "Export PNG" }
}

fn begin_export(in_flight: RwSignal<usize>) {
    in_flight.update(|n| *n += 1);
}

fn end_export(in_flight: RwSignal<usize>) {
    in_flight.update(|n| *n = n.saturating_sub(1));
}

/// Button that exports the `region` element.
///
/// While any export runs the label reads "Exporting…"; the page stays usable.
#[component]
pub fn ExportButton(region: NodeRef<html::Main>, request: ExportRequest) -> impl IntoView {
    let in_flight = RwSignal::new(0_usize);

    let on_click = move |_| {
        let Some(element) = region.get_untracked() else {
            log::error!("{}", ExportError::MissingRegion);
            return;
        };
        let request = request.clone();

        begin_export(in_flight);
        spawn_local(async move {
            if let Err(err) = export_region(element, request).await {
                log::error!("export failed: {err}");
            }
            end_export(in_flight);
        });
    };

    view! {
      <button class="roadmap-button" on:click=on_click>
        {move || export_label(in_flight.get())}
      </button>
    }
}
