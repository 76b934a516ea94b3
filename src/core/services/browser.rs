use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::core::models::ProjectFile;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("popup was blocked")]
    PopupBlocked,
    #[error("{0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for BrowserError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        BrowserError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

/// Coarse file category used for the icon in the files tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
    Other,
}

impl FileKind {
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            FileKind::Image
        } else if mime_type.contains("pdf") {
            FileKind::Pdf
        } else {
            FileKind::Other
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileKind::Image => "🖼",
            FileKind::Pdf => "📄",
            FileKind::Other => "📎",
        }
    }
}

/// Turn the picker's selection into file records backed by object URLs.
/// The URLs only live as long as the page session.
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Result<Vec<ProjectFile>, BrowserError> {
    let Some(list) = input.files() else {
        return Ok(Vec::new());
    };

    let mut files = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(file) = list.get(i) {
            let url = web_sys::Url::create_object_url_with_blob(&file)?;
            files.push(ProjectFile::new(file.name(), file.type_(), url));
        }
    }

    // Reset so picking the same file again still fires a change
    input.set_value("");
    Ok(files)
}

pub fn preview_file(file: &ProjectFile) -> Result<(), BrowserError> {
    window()?.open_with_url_and_target(&file.url, "_blank")?;
    Ok(())
}

/// Force a save-as of the file under its declared name.
pub fn download_file(file: &ProjectFile) -> Result<(), BrowserError> {
    let document = window()?.document().ok_or(BrowserError::NoDocument)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| BrowserError::Js("anchor element expected".to_string()))?;
    anchor.set_href(&file.url);
    anchor.set_download(&file.name);
    anchor.click();
    Ok(())
}

/// Write a standalone document into a new window and open the print dialog.
pub fn print_document(html: &str) -> Result<(), BrowserError> {
    let print_window = window()?
        .open_with_url_and_target("", "_blank")?
        .ok_or(BrowserError::PopupBlocked)?;
    let document = print_window
        .document()
        .ok_or(BrowserError::NoDocument)?
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| BrowserError::NoDocument)?;

    document.write(&js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(html)))?;
    document.close()?;
    print_window.print()?;
    Ok(())
}
