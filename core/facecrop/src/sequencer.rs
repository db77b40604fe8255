use crate::crop::{fits_within, zoom_crop, CropRect, ZoomMode};
use crate::face_detector::FaceBox;

/// Outcome of one detection in the crop plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropOutcome {
    /// The transformed crop lies inside the image and was assigned the next
    /// sequential output id.
    Accepted {
        /// 1-based output number; contiguous over accepted crops.
        id: u32,
        /// The validated crop window.
        crop: CropRect,
    },

    /// The transformed crop would read pixels outside the image; the face is
    /// skipped and consumes no id.
    Rejected {
        /// The original detection, for diagnostics.
        face: FaceBox,
    },
}

/// Plan the crop for every detection, in detector order.
///
/// Each face is zoom-transformed and bounds-checked against the
/// `width` × `height` image. Ids start at 1 and increment only on
/// acceptance, so over the accepted subsequence they are exactly `1..=k`
/// no matter how many rejections are interspersed. Detector order is
/// preserved — detections are never reordered by area or confidence.
pub fn plan_crops(
    faces: &[FaceBox],
    zoom: f32,
    mode: ZoomMode,
    width: u32,
    height: u32,
) -> Vec<CropOutcome> {
    let mut next_id = 1u32;

    faces
        .iter()
        .map(|&face| {
            let crop = zoom_crop(face, zoom, mode);
            if fits_within(&crop, width, height) {
                let id = next_id;
                next_id += 1;
                CropOutcome::Accepted { id, crop }
            } else {
                CropOutcome::Rejected { face }
            }
        })
        .collect()
}
