use std::path::Path;

use color_histogram::{AnalysisConfig, ColorAnalyzer, ExportView, HistogramResult};

use crate::error::{AppError, DecodeError};
use crate::export::{format_selection, CopyFormat};
use crate::models::JsonReport;
use crate::services::decoder::{self, DecodedImage};

/// Where the image bytes come from
#[derive(Debug, Clone)]
pub enum ImageSource<'a> {
    /// Encoded image bytes (PNG, JPEG, GIF, ...), e.g. an uploaded file
    Bytes { name: &'a str, bytes: &'a [u8] },
    /// Pasted clipboard content as a data URL or bare base64
    DataUrl(&'a str),
}

impl ImageSource<'_> {
    pub fn name(&self) -> &str {
        match self {
            ImageSource::Bytes { name, .. } => name,
            ImageSource::DataUrl(_) => "pasted image",
        }
    }

    fn decode(&self) -> Result<DecodedImage, DecodeError> {
        match self {
            ImageSource::Bytes { bytes, .. } => decoder::decode_image(bytes),
            ImageSource::DataUrl(content) => decoder::decode_data_url(content),
        }
    }
}

/// Outcome of analyzing one image
#[derive(Debug, Clone)]
pub struct Analysis {
    pub source: String,
    pub width: usize,
    pub height: usize,
    pub config: AnalysisConfig,
    pub result: HistogramResult,
    pub view: ExportView,
}

impl Analysis {
    pub fn report(&self) -> JsonReport {
        JsonReport::from_result(self.source.clone(), &self.config, &self.result, &self.view)
    }

    /// Serialize the selected table rows
    pub fn copy(&self, selected: &[usize], format: CopyFormat) -> Result<String, AppError> {
        Ok(format_selection(self.view.table(), selected, format)?)
    }
}

/// Decodes images and runs them through the color histogram engine
pub struct AnalysisService {
    analyzer: ColorAnalyzer,
}

impl AnalysisService {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            analyzer: ColorAnalyzer::with_config(config),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        self.analyzer.config()
    }

    /// Decode and analyze an image
    ///
    /// Decoding failures are returned before the engine runs. An image where
    /// nothing qualifies is a successful analysis with an empty view.
    pub fn analyze(&self, source: &ImageSource<'_>) -> Result<Analysis, DecodeError> {
        let image = source.decode()?;
        let grid = image.grid()?;
        let result = self.analyzer.analyze(&grid);
        let view = result.view();

        tracing::info!(
            source = source.name(),
            width = image.width,
            height = image.height,
            distinct_colors = result.distinct_colors(),
            suppressed_pixels = result.suppressed_total(),
            colors = result.len(),
            "Analyzed image"
        );

        if view.is_empty() {
            tracing::debug!(source = source.name(), "No colors matched the threshold");
        }

        Ok(Analysis {
            source: source.name().to_string(),
            width: image.width,
            height: image.height,
            config: *self.config(),
            result,
            view,
        })
    }

    /// Read an image file and analyze it
    pub fn analyze_file(&self, path: &Path) -> Result<Analysis, AppError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(self.analyze(&ImageSource::Bytes {
            name: &name,
            bytes: &bytes,
        })?)
    }
}
