/// Bounding box of a detected face, in source-image pixel coordinates
/// with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceBox {
    /// X coordinate of the top-left corner (pixels).
    pub x: i32,
    /// Y coordinate of the top-left corner (pixels).
    pub y: i32,
    /// Width of the bounding box (pixels).
    pub width: i32,
    /// Height of the bounding box (pixels).
    pub height: i32,
}

/// Pluggable face detection backend.
///
/// Implement this trait to provide a custom face detector (ONNX, dlib, etc.)
/// and pass it to [`crate::FaceCropper::detector`].
pub trait FaceDetector: Send + Sync {
    /// Detect faces in a row-major grayscale buffer of `width` × `height` bytes.
    ///
    /// `min_face_side` is a filtering hint: detections smaller than a square
    /// of that side should be suppressed; `0` means no minimum. The returned
    /// order must be stable across runs on the same input — it determines
    /// the numbering of the output files.
    fn detect(&self, gray: &[u8], width: u32, height: u32, min_face_side: u32) -> Vec<FaceBox>;
}

/// Smallest face side worth detecting, derived from the image extent.
///
/// Computes `max(width, height) * ratio` in `f32` and truncates toward zero.
/// `ratio` is expected to lie in `(0, 1]`; values outside that range are the
/// caller's responsibility and are not clamped here. The result may be `0`
/// for small images or degenerate ratios, which detectors treat as
/// "no minimum".
pub fn min_face_side(width: u32, height: u32, ratio: f32) -> u32 {
    let longest = width.max(height);
    (longest as f32 * ratio) as u32
}
