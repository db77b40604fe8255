use facecrop::{FaceBox, FaceCropper, FaceDetector, ZoomMode};

/// Detector stub that returns a fixed list of boxes, ignoring the image.
struct FixedDetector {
    boxes: Vec<FaceBox>,
}

impl FaceDetector for FixedDetector {
    fn detect(&self, _gray: &[u8], _width: u32, _height: u32, _min_face_side: u32) -> Vec<FaceBox> {
        self.boxes.clone()
    }
}

fn make_test_png(width: u32, height: u32) -> Vec<u8> {
    use image::codecs::png::PngEncoder;
    use image::ImageEncoder;
    use image::RgbImage;

    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ]);
    }
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

fn face(x: i32, y: i32, side: i32) -> FaceBox {
    FaceBox {
        x,
        y,
        width: side,
        height: side,
    }
}

#[test]
fn single_face_written_as_1_jpg() {
    let png = make_test_png(400, 400);
    let dir = tempfile::tempdir().unwrap();

    let summary = FaceCropper::new(png)
        .unwrap()
        .zoom(2.0)
        .detector(Box::new(FixedDetector {
            boxes: vec![face(100, 100, 50)],
        }))
        .crop_to_dir(dir.path())
        .unwrap();

    assert_eq!(summary.written, 1);
    assert_eq!(summary.rejected, 0);

    let out = dir.path().join("1.jpg");
    let img = image::open(&out).unwrap_or_else(|e| panic!("missing {}: {e}", out.display()));
    // zoom 2 on a 50px face → 100x100 crop at (75, 75)
    assert_eq!(img.width(), 100);
    assert_eq!(img.height(), 100);
}

#[test]
fn oversized_zoom_rejects_without_writing() {
    let png = make_test_png(400, 400);
    let dir = tempfile::tempdir().unwrap();

    let summary = FaceCropper::new(png)
        .unwrap()
        .zoom(8.0)
        .detector(Box::new(FixedDetector {
            boxes: vec![face(100, 100, 50)],
        }))
        .crop_to_dir(dir.path())
        .unwrap();

    assert_eq!(summary.written, 0);
    assert_eq!(summary.rejected, 1);
    assert!(!dir.path().join("1.jpg").exists());
}

#[test]
fn rejected_face_does_not_shift_numbering() {
    let png = make_test_png(400, 400);
    let dir = tempfile::tempdir().unwrap();

    // First box hugs the corner and fails validation at zoom 2;
    // the second is the one that lands on disk — as 1.jpg, not 2.jpg.
    let summary = FaceCropper::new(png)
        .unwrap()
        .zoom(2.0)
        .detector(Box::new(FixedDetector {
            boxes: vec![face(10, 10, 50), face(100, 100, 50)],
        }))
        .crop_to_dir(dir.path())
        .unwrap();

    assert_eq!(summary.written, 1);
    assert_eq!(summary.rejected, 1);
    assert!(dir.path().join("1.jpg").exists());
    assert!(!dir.path().join("2.jpg").exists());
}

#[test]
fn multiple_faces_numbered_in_detector_order() {
    let png = make_test_png(400, 400);
    let dir = tempfile::tempdir().unwrap();

    let summary = FaceCropper::new(png)
        .unwrap()
        .zoom(2.0)
        .detector(Box::new(FixedDetector {
            boxes: vec![face(100, 100, 50), face(200, 200, 40), face(150, 120, 60)],
        }))
        .crop_to_dir(dir.path())
        .unwrap();

    assert_eq!(summary.written, 3);
    for id in 1..=3 {
        assert!(dir.path().join(format!("{id}.jpg")).exists(), "missing {id}.jpg");
    }

    // 40px face, zoom 2 → 80x80 output for id 2
    let second = image::open(dir.path().join("2.jpg")).unwrap();
    assert_eq!(second.width(), 80);
    assert_eq!(second.height(), 80);
}

#[test]
fn centered_mode_identity_at_zoom_one() {
    let png = make_test_png(400, 400);
    let dir = tempfile::tempdir().unwrap();

    let summary = FaceCropper::new(png)
        .unwrap()
        .zoom(1.0)
        .zoom_mode(ZoomMode::Centered)
        .detector(Box::new(FixedDetector {
            boxes: vec![face(100, 100, 50)],
        }))
        .crop_to_dir(dir.path())
        .unwrap();

    assert_eq!(summary.written, 1);
    let img = image::open(dir.path().join("1.jpg")).unwrap();
    assert_eq!(img.width(), 50);
    assert_eq!(img.height(), 50);
}

#[test]
fn no_detections_writes_nothing() {
    let png = make_test_png(64, 64);
    let dir = tempfile::tempdir().unwrap();

    let summary = FaceCropper::new(png)
        .unwrap()
        .detector(Box::new(FixedDetector { boxes: vec![] }))
        .crop_to_dir(dir.path())
        .unwrap();

    assert_eq!(summary.written, 0);
    assert_eq!(summary.rejected, 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn detector_receives_min_size_hint() {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct Recorder {
        seen: Arc<AtomicU32>,
    }
    impl FaceDetector for Recorder {
        fn detect(&self, _: &[u8], _: u32, _: u32, min_face_side: u32) -> Vec<FaceBox> {
            self.seen.store(min_face_side, Ordering::SeqCst);
            vec![]
        }
    }

    let seen = Arc::new(AtomicU32::new(u32::MAX));
    let png = make_test_png(200, 400);
    let dir = tempfile::tempdir().unwrap();

    FaceCropper::new(png)
        .unwrap()
        .min_size_ratio(0.1)
        .detector(Box::new(Recorder { seen: seen.clone() }))
        .crop_to_dir(dir.path())
        .unwrap();

    // larger side 400 at ratio 0.1 → 40
    assert_eq!(seen.load(Ordering::SeqCst), 40);
}
