//! Temporary on-disk catalogue for integration tests.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use swatch_engine::PixelBuffer;
use tempfile::TempDir;

use dyeatlas::models::AppConfig;
use dyeatlas::rendering::{decode_png, encode_png, pixmap_from_buffer};
use dyeatlas::services::{AtlasSession, SwatchLibrary};

use super::fixtures::{SwatchFixture, SWATCHES};

/// Tile and preview edge length of fixture images
pub const TILE_SIDE: u32 = 8;

/// Lookup table, tile and preview directories in a temp dir
pub struct TestWorkspace {
    dir: TempDir,
    pub config: AppConfig,
}

impl TestWorkspace {
    /// Workspace holding every fixture swatch
    pub fn new() -> Self {
        Self::with_swatches(&SWATCHES, Vec::new())
    }

    /// Workspace holding `swatches`, plus `extra_rows` appended verbatim to
    /// the lookup table
    pub fn with_swatches(swatches: &[SwatchFixture], extra_rows: Vec<Value>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tiles = dir.path().join("imagesSuperCrop");
        let previews = dir.path().join("imagesBordered");
        std::fs::create_dir_all(&tiles).unwrap();
        std::fs::create_dir_all(&previews).unwrap();

        let mut rows = Vec::new();
        for swatch in swatches {
            let hsb = swatch.hsb();
            // Saturation as a string exercises numeric coercion
            rows.push(json!({
                "filename": swatch.filename,
                "h": hsb.h,
                "s": hsb.s.to_string(),
                "b": hsb.b,
                "dyestuff": swatch.dyestuff,
                "pH": swatch.ph,
                "mordant": swatch.mordant,
                "additive": swatch.additive,
                "time": swatch.time,
            }));

            let tile = PixelBuffer::solid(TILE_SIDE, TILE_SIDE, swatch.rgb).unwrap();
            std::fs::write(tiles.join(swatch.filename), png_bytes(&tile)).unwrap();
            if swatch.preview {
                // Previews are inverted so tests can tell them apart
                let [r, g, b] = swatch.rgb;
                let preview =
                    PixelBuffer::solid(TILE_SIDE * 2, TILE_SIDE, [255 - r, 255 - g, 255 - b])
                        .unwrap();
                std::fs::write(previews.join(swatch.filename), png_bytes(&preview)).unwrap();
            }
        }
        rows.extend(extra_rows);

        let lookup = dir.path().join("swatch_lookup.json");
        std::fs::write(&lookup, serde_json::to_string_pretty(&Value::Array(rows)).unwrap())
            .unwrap();

        let config = AppConfig::default().with_path_overrides(
            Some(lookup),
            Some(tiles),
            Some(previews),
        );
        Self { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a sample image and return its path as a sample name
    pub fn write_sample(&self, name: &str, image: &PixelBuffer) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, png_bytes(image)).unwrap();
        path.to_string_lossy().into_owned()
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub async fn library(&self) -> Arc<SwatchLibrary> {
        Arc::new(
            SwatchLibrary::open(&self.config)
                .await
                .expect("Failed to open library"),
        )
    }

    pub async fn session(&self) -> AtlasSession {
        AtlasSession::new(self.library().await, &self.config)
    }
}

pub fn png_bytes(image: &PixelBuffer) -> Vec<u8> {
    encode_png(&pixmap_from_buffer(image).unwrap()).unwrap()
}

pub fn decode(bytes: &[u8]) -> PixelBuffer {
    decode_png("output.png", bytes).expect("Failed to decode PNG")
}

/// Image whose left half is `left` and right half is `right`
pub fn split_image(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _y in 0..height {
        for x in 0..width {
            let [r, g, b] = if x < width / 2 { left } else { right };
            data.extend_from_slice(&[r, g, b, 255]);
        }
    }
    PixelBuffer::new(width, height, data).unwrap()
}
