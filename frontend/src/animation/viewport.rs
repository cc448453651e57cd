use thiserror::Error;
use web_sys::window;

#[derive(Debug, Error, PartialEq)]
pub enum ViewportError {
    #[error("no global window")]
    NoWindow,
    #[error("browser refused the query: {0}")]
    Query(String),
    #[error("viewport height is not a number")]
    NotANumber,
}

/// `window.innerHeight` in px.
pub fn viewport_height() -> Result<f64, ViewportError> {
    let window = window().ok_or(ViewportError::NoWindow)?;
    let height = window
        .inner_height()
        .map_err(|e| ViewportError::Query(format!("{:?}", e)))?;
    height.as_f64().ok_or(ViewportError::NotANumber)
}

/// Viewport height, or `fallback` when the browser can't say.
pub fn viewport_height_or(fallback: f64) -> f64 {
    match viewport_height() {
        Ok(height) => height,
        Err(e) => {
            log::warn!("Failed to read viewport height ({}), using {}px", e, fallback);
            fallback
        }
    }
}

/// `window.scrollY` in px.
pub fn scroll_offset() -> Result<f64, ViewportError> {
    let window = window().ok_or(ViewportError::NoWindow)?;
    window
        .scroll_y()
        .map_err(|e| ViewportError::Query(format!("{:?}", e)))
}
