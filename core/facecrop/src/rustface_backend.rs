use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::error::FaceCropError;
use crate::face_detector::{FaceBox, FaceDetector};

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model is loaded once at construction; each `detect` call builds a
/// fresh engine from it, so the detector stays `&self` and `Sync`.
pub struct RustfaceDetector {
    model: rustface::Model,
}

impl RustfaceDetector {
    /// Load a SeetaFace model from a file on disk.
    pub fn from_model_file(path: &Path) -> Result<Self, FaceCropError> {
        let bytes = fs::read(path)
            .map_err(|e| FaceCropError::ModelUnavailable(format!("{}: {e}", path.display())))?;
        Self::from_model_bytes(&bytes)
    }

    /// Load a SeetaFace model from raw bytes.
    pub fn from_model_bytes(bytes: &[u8]) -> Result<Self, FaceCropError> {
        let model = rustface::read_model(Cursor::new(bytes))
            .map_err(|e| FaceCropError::ModelUnavailable(e.to_string()))?;
        Ok(Self { model })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, gray: &[u8], width: u32, height: u32, min_face_side: u32) -> Vec<FaceBox> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        // SeetaFace refuses detection windows below 20px, so the "no minimum"
        // hint (0) and anything smaller are clamped to the engine floor.
        detector.set_min_face_size(min_face_side.max(20));
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray, width, height));

        faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBox {
                    x: bbox.x(),
                    y: bbox.y(),
                    width: bbox.width() as i32,
                    height: bbox.height() as i32,
                }
            })
            .collect()
    }
}
