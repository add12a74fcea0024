use std::path::Path;

use image::RgbaImage;

use crate::error::TemplateError;

/// The uploaded base image onto which guest names are drawn.
///
/// Decoded once per batch and shared read-only across all concurrent
/// render tasks; render invocations copy the pixels into their own
/// surface and never mutate the template itself.
#[derive(Debug, Clone)]
pub struct Template {
    image: RgbaImage,
}

impl Template {
    /// Load and decode a template image from disk.
    ///
    /// Fails if the file is missing, unreadable, or not a decodable raster
    /// image. There is no caching: a new batch reloads the template even
    /// if the file is unchanged.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let image = image::load_from_memory(&bytes)?.to_rgba8();
        Ok(Self { image })
    }

    /// Wrap an already decoded image (used by tests).
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub(crate) fn pixels(&self) -> &RgbaImage {
        &self.image
    }
}
