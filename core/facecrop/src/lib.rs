//! Face cropping: turn one photo plus a set of detected faces into a
//! sequence of individually numbered crop files.
//!
//! # Example
//!
//! ```no_run
//! use facecrop::{FaceCropper, RustfaceDetector};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let detector = RustfaceDetector::from_model_file("seeta_fd.bin".as_ref()).unwrap();
//! let summary = FaceCropper::new(bytes)
//!     .unwrap()
//!     .zoom(2.0)
//!     .detector(Box::new(detector))
//!     .crop_to_dir("out".as_ref())
//!     .unwrap();
//! println!("wrote {} crop(s), rejected {}", summary.written, summary.rejected);
//! ```
#![warn(missing_docs)]

use std::path::Path;

use tracing::{debug, warn};

mod crop;
mod error;
/// Face detection traits and data types.
pub mod face_detector;
#[cfg(feature = "rustface")]
/// Built-in SeetaFace-based face detector backend.
pub mod rustface_backend;
mod sequencer;

/// Zoom transform, crop window type, and the bounds predicate.
pub use crop::{fits_within, zoom_crop, CropRect, ZoomMode};
/// Error type returned by facecrop operations.
pub use error::FaceCropError;
/// Face detection trait, face bounding-box type, and the minimum-size rule.
pub use face_detector::{min_face_side, FaceBox, FaceDetector};
#[cfg(feature = "rustface")]
/// Built-in detector that loads a SeetaFace model.
pub use rustface_backend::RustfaceDetector;
/// Per-detection crop planning.
pub use sequencer::{plan_crops, CropOutcome};

/// Default zoom factor (double the detected box).
pub const DEFAULT_ZOOM: f32 = 2.0;

/// Default minimum face size as a fraction of the larger image side.
pub const DEFAULT_MIN_SIZE_RATIO: f32 = 0.05;

/// Counts returned by a completed [`FaceCropper::crop_to_dir`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropSummary {
    /// Number of crops written, equal to the highest id assigned.
    pub written: u32,
    /// Number of detections skipped because their crop left the image.
    pub rejected: u32,
}

/// Builder for cropping every detected face out of one image.
///
/// Decodes the input on construction, then runs detect → zoom → validate →
/// write for each face. Faces whose crop would read pixels outside the image
/// are skipped with a warning; they never abort the run and never consume an
/// output number.
pub struct FaceCropper {
    input: Vec<u8>,
    zoom: f32,
    min_size_ratio: f32,
    zoom_mode: ZoomMode,
    detector: Option<Box<dyn FaceDetector>>,
}

impl FaceCropper {
    /// Create a new cropper from raw image bytes (JPEG or PNG).
    pub fn new(input: Vec<u8>) -> Result<Self, FaceCropError> {
        // Validate that the input can be decoded
        image::guess_format(&input).map_err(|e| FaceCropError::DecodeError(e.to_string()))?;

        Ok(Self {
            input,
            zoom: DEFAULT_ZOOM,
            min_size_ratio: DEFAULT_MIN_SIZE_RATIO,
            zoom_mode: ZoomMode::default(),
            detector: None,
        })
    }

    /// Set the zoom factor (default: 2.0). `0.5` halves the detected box,
    /// `2.0` doubles it.
    pub fn zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the minimum face size as a fraction of the larger image side
    /// (default: 0.05). Passed to the detector as a filtering hint.
    pub fn min_size_ratio(mut self, ratio: f32) -> Self {
        self.min_size_ratio = ratio;
        self
    }

    /// Set how crops are positioned around the face
    /// (default: [`ZoomMode::Legacy`]).
    pub fn zoom_mode(mut self, mode: ZoomMode) -> Self {
        self.zoom_mode = mode;
        self
    }

    /// Provide the face detector implementation to run.
    ///
    /// ```no_run
    /// use facecrop::{FaceCropper, FaceDetector, FaceBox};
    ///
    /// struct MyDetector;
    /// impl FaceDetector for MyDetector {
    ///     fn detect(&self, gray: &[u8], width: u32, height: u32, min_side: u32) -> Vec<FaceBox> {
    ///         // Your detection logic here
    ///         vec![]
    ///     }
    /// }
    ///
    /// let bytes = std::fs::read("photo.jpg").unwrap();
    /// let summary = FaceCropper::new(bytes).unwrap()
    ///     .detector(Box::new(MyDetector))
    ///     .crop_to_dir("out".as_ref()).unwrap();
    /// ```
    pub fn detector(mut self, detector: Box<dyn FaceDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Run the pipeline and write each accepted crop as `{id}.jpg` into
    /// `dir` (1-based, in detector order). Existing numbered files are
    /// overwritten.
    ///
    /// Decode failures, zero-sized images, a missing detector, and write
    /// errors are fatal. Out-of-bounds crops are not: they are logged and
    /// skipped, and the run still succeeds.
    pub fn crop_to_dir(self, dir: &Path) -> Result<CropSummary, FaceCropError> {
        if self.zoom <= 0.0 {
            return Err(FaceCropError::InvalidZoom(self.zoom));
        }
        let detector = self.detector.ok_or(FaceCropError::NoDetector)?;

        let image = image::load_from_memory(&self.input)
            .map_err(|e| FaceCropError::DecodeError(e.to_string()))?;
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(FaceCropError::ZeroDimensions);
        }

        let gray = image::imageops::grayscale(&image);
        let min_side = min_face_side(width, height, self.min_size_ratio);
        let faces = detector.detect(gray.as_raw(), width, height, min_side);
        debug!(faces = faces.len(), min_side, "detection complete");

        let mut written = 0u32;
        let mut rejected = 0u32;

        for outcome in plan_crops(&faces, self.zoom, self.zoom_mode, width, height) {
            match outcome {
                CropOutcome::Accepted { id, crop } => {
                    // Validated: non-negative origin, fits inside the image
                    let sub = image.crop_imm(
                        crop.x as u32,
                        crop.y as u32,
                        crop.width as u32,
                        crop.height as u32,
                    );
                    let path = dir.join(format!("{id}.jpg"));
                    sub.to_rgb8().save(&path).map_err(|e| {
                        FaceCropError::WriteError {
                            id,
                            message: e.to_string(),
                        }
                    })?;
                    debug!(id, ?crop, "wrote crop");
                    written += 1;
                }
                CropOutcome::Rejected { face } => {
                    warn!(?face, "face could not be saved (zoom too small)");
                    rejected += 1;
                }
            }
        }

        Ok(CropSummary { written, rejected })
    }
}
