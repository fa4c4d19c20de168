use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use swatch_engine::PixelBuffer;

use crate::error::ImageError;
use crate::models::AppConfig;
use crate::rendering::decode_png;

/// Which image a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// Cropped swatch used for mosaic tiles and atlas sprites
    Tile,
    /// Bordered swatch shown on hover
    Preview,
    /// Sample image to be turned into a mosaic
    Sample,
}

/// Source of decoded images
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Load and decode one image.
    async fn load(&self, kind: ImageKind, name: &str) -> Result<PixelBuffer, ImageError>;
}

/// Reads PNG files from the tile and preview directories.
///
/// Sample names are used as paths as given.
pub struct FsImageSource {
    tiles_dir: PathBuf,
    previews_dir: PathBuf,
}

impl FsImageSource {
    pub fn new(tiles_dir: impl AsRef<Path>, previews_dir: impl AsRef<Path>) -> Self {
        Self {
            tiles_dir: tiles_dir.as_ref().to_path_buf(),
            previews_dir: previews_dir.as_ref().to_path_buf(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.paths.tiles, &config.paths.previews)
    }

    fn path_for(&self, kind: ImageKind, name: &str) -> PathBuf {
        match kind {
            ImageKind::Tile => self.tiles_dir.join(name),
            ImageKind::Preview => self.previews_dir.join(name),
            ImageKind::Sample => PathBuf::from(name),
        }
    }
}

#[async_trait]
impl ImageSource for FsImageSource {
    async fn load(&self, kind: ImageKind, name: &str) -> Result<PixelBuffer, ImageError> {
        let path = self.path_for(kind, name);
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "Failed to read image");
            if e.kind() == std::io::ErrorKind::NotFound {
                ImageError::NotFound(name.to_string())
            } else {
                ImageError::Io {
                    filename: name.to_string(),
                    source: e,
                }
            }
        })?;

        // Decoding is CPU-bound; keep it off the async workers
        let filename = name.to_string();
        tokio::task::spawn_blocking(move || decode_png(&filename, &bytes))
            .await
            .map_err(|e| ImageError::Task(e.to_string()))?
    }
}

/// Pre-decoded images held in memory
#[derive(Default)]
pub struct InMemoryImageSource {
    images: HashMap<(ImageKind, String), PixelBuffer>,
}

impl InMemoryImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ImageKind, name: impl Into<String>, image: PixelBuffer) {
        self.images.insert((kind, name.into()), image);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, kind: ImageKind, name: impl Into<String>, image: PixelBuffer) -> Self {
        self.insert(kind, name, image);
        self
    }
}

#[async_trait]
impl ImageSource for InMemoryImageSource {
    async fn load(&self, kind: ImageKind, name: &str) -> Result<PixelBuffer, ImageError> {
        self.images
            .get(&(kind, name.to_string()))
            .cloned()
            .ok_or_else(|| ImageError::NotFound(name.to_string()))
    }
}
