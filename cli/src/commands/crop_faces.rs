//! Crop every detected face in an image into a numbered file.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use facecrop::{FaceCropper, RustfaceDetector, ZoomMode};

pub fn run(
    input: PathBuf,
    output: PathBuf,
    model: String,
    zoom: f32,
    min_size: f32,
    centered: bool,
) -> anyhow::Result<()> {
    // Whole-run preconditions, checked before any detection happens.
    if !input.is_file() {
        bail!("{} is not a file", input.display());
    }
    if !output.is_dir() {
        bail!("{} is not a directory", output.display());
    }

    let detector = if model == "internal" {
        // No detection model ships with this build. Rejecting here keeps the
        // failure in the fatal, pre-detection class.
        bail!(
            "no face detection model is bundled with this build; \
             pass --model <path> with a SeetaFace model file"
        );
    } else {
        let model_path = PathBuf::from(&model);
        if !model_path.is_file() {
            bail!("{} does not exist", model_path.display());
        }
        RustfaceDetector::from_model_file(&model_path)?
    };

    let bytes = fs::read(&input)
        .with_context(|| format!("{} couldn't be read", input.display()))?;

    let mode = if centered {
        ZoomMode::Centered
    } else {
        ZoomMode::Legacy
    };

    let summary = FaceCropper::new(bytes)?
        .zoom(zoom)
        .min_size_ratio(min_size)
        .zoom_mode(mode)
        .detector(Box::new(detector))
        .crop_to_dir(&output)?;

    println!(
        "{} face(s) written to {} ({} rejected)",
        summary.written,
        output.display(),
        summary.rejected
    );

    Ok(())
}
