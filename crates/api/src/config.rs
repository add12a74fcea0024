use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Single-slot staging directory for the most recent upload.
    pub upload_dir: PathBuf,
    /// Directory all generated posters are written to and served from.
    pub output_dir: PathBuf,
    /// Font file used for the guest name.
    pub font_path: PathBuf,
    /// Font size in pixels.
    pub font_size: f32,
    /// Vertical anchor the name is centered on.
    pub text_anchor_y: f32,
    /// Fixed prefix of every derived poster filename.
    pub poster_prefix: String,
    /// Base address prefixed onto poster access URLs.
    pub public_base_url: String,
    /// Concurrency ceiling for render tasks.
    pub render_workers: usize,
    /// Maximum accepted multipart upload body size in bytes.
    pub max_upload_bytes: usize,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                 |
    /// |------------------------|-----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                               |
    /// | `PORT`                 | `8080`                                  |
    /// | `UPLOAD_DIR`           | `uploads`                               |
    /// | `OUTPUT_DIR`           | `guest_posters`                         |
    /// | `FONT_PATH`            | `Ananda.ttf`                            |
    /// | `FONT_SIZE`            | `70`                                    |
    /// | `TEXT_ANCHOR_Y`        | `640`                                   |
    /// | `POSTER_PREFIX`        | `Virginia & Alfred wedding invitation`  |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:8080`                 |
    /// | `RENDER_WORKERS`       | `4`                                     |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()));

        let output_dir =
            PathBuf::from(std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "guest_posters".into()));

        let font_path =
            PathBuf::from(std::env::var("FONT_PATH").unwrap_or_else(|_| "Ananda.ttf".into()));

        let font_size: f32 = std::env::var("FONT_SIZE")
            .unwrap_or_else(|_| "70".into())
            .parse()
            .expect("FONT_SIZE must be a valid f32");

        let text_anchor_y: f32 = std::env::var("TEXT_ANCHOR_Y")
            .unwrap_or_else(|_| "640".into())
            .parse()
            .expect("TEXT_ANCHOR_Y must be a valid f32");

        let poster_prefix = std::env::var("POSTER_PREFIX")
            .unwrap_or_else(|_| "Virginia & Alfred wedding invitation".into());

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".into());

        let render_workers: usize = std::env::var("RENDER_WORKERS")
            .unwrap_or_else(|_| posterly_pipeline::DEFAULT_RENDER_WORKERS.to_string())
            .parse()
            .expect("RENDER_WORKERS must be a valid usize");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            upload_dir,
            output_dir,
            font_path,
            font_size,
            text_anchor_y,
            poster_prefix,
            public_base_url,
            render_workers,
            max_upload_bytes,
            request_timeout_secs,
        }
    }
}
