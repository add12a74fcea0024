use std::path::PathBuf;

/// Template loading failures. These abort the whole batch before any
/// rendering starts.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Cannot read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode template image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Per-invocation render failures.
///
/// Isolated by the batch scheduler: one failing name never affects the
/// other names in the same batch.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Cannot load font {path}: {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font file {path} contains no usable font family")]
    EmptyFontFamily { path: PathBuf },

    #[error("Cannot build text overlay: {0}")]
    Svg(#[from] usvg::Error),

    #[error("Cannot allocate a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },

    #[error("Cannot encode or write poster: {0}")]
    Encode(#[from] image::ImageError),
}
