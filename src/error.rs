use thiserror::Error;

/// Failures of the render pipeline, tagged by stage.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload could not be encoded at any supported QR version.
    #[error("qr encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// The configured font file could not be read or parsed.
    #[error("cannot load font {path}: {reason}")]
    Font { path: String, reason: String },

    /// The final image could not be written.
    #[error("cannot save image: {0}")]
    Save(#[from] image::ImageError),
}
