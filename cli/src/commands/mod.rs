pub mod crop_faces;
