pub mod analysis;
pub mod decoder;

pub use analysis::{Analysis, AnalysisService, ImageSource};
pub use decoder::{decode_data_url, decode_image, DecodedImage};
