use crate::face_detector::FaceBox;

/// How the zoom transform positions the crop window around the face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZoomMode {
    /// Historical placement: the origin shifts by `face side / zoom`. This is
    /// not centered in general — at zoom 1 the crop lands a full box-width
    /// and box-height to the upper-left of the face rather than on top of
    /// it. Kept as the default so output matches earlier versions of the
    /// tool pixel for pixel.
    #[default]
    Legacy,

    /// Center the crop on the face at every zoom factor; zoom 1 reproduces
    /// the detected box exactly.
    Centered,
}

/// Crop window derived from one detected face.
///
/// Not guaranteed to lie inside the source image: [`fits_within`] decides
/// validity, never the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    /// X coordinate of the top-left corner (pixels, may be negative).
    pub x: i32,
    /// Y coordinate of the top-left corner (pixels, may be negative).
    pub y: i32,
    /// Width of the crop window (pixels).
    pub width: i32,
    /// Height of the crop window (pixels).
    pub height: i32,
}

/// Map a detected face to its crop window for the given zoom factor.
///
/// All arithmetic is done in `f32` and truncated toward zero, so
/// `crop.width == trunc(face.width * zoom)` and likewise for the height.
/// Pure function of its inputs; `zoom` must be positive.
pub fn zoom_crop(face: FaceBox, zoom: f32, mode: ZoomMode) -> CropRect {
    let width = (face.width as f32 * zoom) as i32;
    let height = (face.height as f32 * zoom) as i32;

    let (shift_x, shift_y) = match mode {
        ZoomMode::Legacy => (face.width as f32 / zoom, face.height as f32 / zoom),
        ZoomMode::Centered => (
            (width - face.width) as f32 / 2.0,
            (height - face.height) as f32 / 2.0,
        ),
    };

    CropRect {
        x: (face.x as f32 - shift_x) as i32,
        y: (face.y as f32 - shift_y) as i32,
        width,
        height,
    }
}

/// Whether the crop window lies fully inside a `width` × `height` image.
///
/// Pure predicate: never panics, never mutates.
pub fn fits_within(crop: &CropRect, width: u32, height: u32) -> bool {
    crop.x >= 0
        && crop.y >= 0
        && crop.x as i64 + crop.width as i64 <= width as i64
        && crop.y as i64 + crop.height as i64 <= height as i64
}
