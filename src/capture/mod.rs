//! Avatar capture — hand a layout to a rasterising backend and collect a PNG.
//!
//! A [`CaptureBackend`] turns a [`CaptureRequest`] into encoded PNG bytes;
//! [`capture_avatar`] wraps the call, logs failures, and never retries.
//! [`RasterBackend`] is the built-in backend used by the CLI.

mod raster;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::AvatarLayout;

pub use raster::{render, RasterBackend, CANVAS_SIZE, MAX_SCALE};

/// Suggested download name.
pub const DEFAULT_FILE_NAME: &str = "avatar.png";

/// Errors reported by a capture backend.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The backend refused or failed to render.
    #[error("Capture rejected: {0}")]
    Rejected(String),

    /// The backend returned no image data.
    #[error("Capture produced an empty image")]
    EmptyImage,
}

/// What to capture and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureRequest {
    pub layout: AvatarLayout,
    /// Pixel density multiplier.
    pub scale: f32,
    /// Allow cross-origin assets while rendering.
    pub use_cors: bool,
}

impl CaptureRequest {
    pub fn new(layout: AvatarLayout) -> Self {
        Self {
            layout,
            scale: 2.0,
            use_cors: true,
        }
    }
}

/// Renders a capture request to PNG bytes.
#[async_trait]
pub trait CaptureBackend: Send + Sync {
    async fn render_png(&self, request: &CaptureRequest) -> Result<Vec<u8>, CaptureError>;
}

/// A rendered avatar ready to be saved or embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub png: Vec<u8>,
    pub file_name: String,
}

impl CapturedImage {
    /// `data:image/png;base64,...` URL of the image.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }

    /// Write the PNG into `dir` under its file name and return the path.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.png)?;
        Ok(path)
    }
}

/// Run a capture through `backend`.
///
/// Failures are logged and yield `None`; the caller's state is untouched.
pub async fn capture_avatar(
    backend: &dyn CaptureBackend,
    request: &CaptureRequest,
    file_name: &str,
) -> Option<CapturedImage> {
    let result = match backend.render_png(request).await {
        Ok(png) if png.is_empty() => Err(CaptureError::EmptyImage),
        other => other,
    };

    match result {
        Ok(png) => {
            tracing::info!(bytes = png.len(), file_name, "avatar captured");
            Some(CapturedImage {
                png,
                file_name: file_name.to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Error capturing avatar: {}", e);
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
