//! Extractores de metadata por formato.
//!
//! Cada extractor delega en una libreria externa y nunca falla: los errores
//! se registran y el resultado es un mapa vacio.

mod audio;
mod image;
mod office;
mod pdf;

pub use audio::extract_audio_metadata;
pub use image::extract_image_metadata;
pub use office::extract_doc_metadata;
pub use pdf::extract_pdf_metadata;
