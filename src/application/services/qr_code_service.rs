//! QR code rendering for short links.

use base64::Engine as _;
use qrcode::QrCode;
use qrcode::render::{svg, unicode};
use qrcode::types::QrError;

/// Smallest edge of the rendered SVG, in pixels.
const MIN_DIMENSION: u32 = 200;

#[derive(Debug, thiserror::Error)]
pub enum QrCodeError {
    #[error("Failed to encode QR code: {0}")]
    Encode(#[from] QrError),
}

/// Renders text (normally a short link) as a QR code.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrCodeService;

impl QrCodeService {
    pub fn new() -> Self {
        Self
    }

    /// Encodes `text` as an SVG QR code wrapped in a `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns [`QrCodeError::Encode`] if the text does not fit in a QR code.
    pub fn new_qr_code(&self, text: &str) -> Result<String, QrCodeError> {
        let code = QrCode::new(text.as_bytes())?;
        let image = code
            .render::<svg::Color>()
            .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
            .build();

        Ok(format!(
            "data:image/svg+xml;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(image)
        ))
    }

    /// Encodes `text` as a QR code drawn with Unicode half blocks.
    ///
    /// # Errors
    ///
    /// Returns [`QrCodeError::Encode`] if the text does not fit in a QR code.
    pub fn render_terminal(&self, text: &str) -> Result<String, QrCodeError> {
        let code = QrCode::new(text.as_bytes())?;

        Ok(code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build())
    }
}
