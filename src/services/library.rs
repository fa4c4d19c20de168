use futures_util::future::{join, join_all};
use std::collections::HashMap;
use swatch_engine::{Catalogue, LoadReport, PixelBuffer, RawSwatchRow, SwatchRecord};

use super::image_source::{FsImageSource, ImageKind, ImageSource};
use crate::error::LoadError;
use crate::models::{read_lookup, AppConfig};

/// Decoded images of one swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchImages {
    pub tile: PixelBuffer,
    /// `None` when the preview image could not be loaded
    pub preview: Option<PixelBuffer>,
}

impl SwatchImages {
    /// The hover preview, or the tile image when there is none.
    pub fn preview_or_tile(&self) -> &PixelBuffer {
        self.preview.as_ref().unwrap_or(&self.tile)
    }
}

/// What a library load kept and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LibraryReport {
    /// Row-level outcome of building the catalogue
    pub rows: LoadReport,
    /// Records dropped because their tile image was unavailable
    pub images_dropped: usize,
    /// Records shown with their tile image in place of a missing preview
    pub previews_missing: usize,
}

/// The usable catalogue: every record here has a decoded tile image.
#[derive(Debug, Clone)]
pub struct SwatchLibrary {
    catalogue: Catalogue,
    images: HashMap<String, SwatchImages>,
    report: LibraryReport,
}

impl SwatchLibrary {
    /// Build the catalogue from `rows` and decode every record's images.
    ///
    /// All image loads run concurrently and are awaited together. A record
    /// whose tile image fails is dropped and the field indexes are rebuilt
    /// over the survivors; a failed preview only falls back to the tile.
    pub async fn load<S>(rows: Vec<RawSwatchRow>, source: &S) -> Self
    where
        S: ImageSource + ?Sized,
    {
        let mut catalogue = Catalogue::load(rows);
        let row_report = catalogue.report();
        if row_report.malformed > 0 || row_report.duplicates > 0 {
            tracing::warn!(
                malformed = row_report.malformed,
                duplicates = row_report.duplicates,
                "Dropped lookup rows"
            );
        }

        let loads = catalogue.records().iter().map(|record| async move {
            let name = record.filename.as_str();
            let (tile, preview) = join(
                source.load(ImageKind::Tile, name),
                source.load(ImageKind::Preview, name),
            )
            .await;
            (record.filename.clone(), tile, preview)
        });
        let results = join_all(loads).await;

        let mut images = HashMap::with_capacity(results.len());
        let mut previews_missing = 0;
        for (filename, tile, preview) in results {
            let tile = match tile {
                Ok(tile) => tile,
                Err(e) => {
                    tracing::warn!(%e, filename = %filename, "Dropping swatch, image unavailable");
                    continue;
                }
            };
            let preview = match preview {
                Ok(preview) => Some(preview),
                Err(e) => {
                    tracing::debug!(%e, filename = %filename, "No preview, using tile image");
                    previews_missing += 1;
                    None
                }
            };
            images.insert(filename, SwatchImages { tile, preview });
        }

        let images_dropped = catalogue.retain(|r| images.contains_key(&r.filename));

        tracing::info!(
            swatches = catalogue.len(),
            images_dropped,
            previews_missing,
            "Loaded swatch library"
        );

        Self {
            catalogue,
            images,
            report: LibraryReport {
                rows: row_report,
                images_dropped,
                previews_missing,
            },
        }
    }

    /// Read the lookup table and image directories named by `config`.
    ///
    /// Only an unreadable lookup table fails the load. Missing images drop
    /// their records.
    pub async fn open(config: &AppConfig) -> Result<Self, LoadError> {
        let rows = read_lookup(&config.paths.lookup).await?;
        let source = FsImageSource::from_config(config);
        Ok(Self::load(rows, &source).await)
    }

    /// Assemble a library from an existing catalogue and image map,
    /// dropping records that have no images.
    pub fn from_parts(mut catalogue: Catalogue, images: HashMap<String, SwatchImages>) -> Self {
        let rows = catalogue.report();
        let images_dropped = catalogue.retain(|r| images.contains_key(&r.filename));
        let previews_missing = images.values().filter(|i| i.preview.is_none()).count();
        Self {
            catalogue,
            images,
            report: LibraryReport {
                rows,
                images_dropped,
                previews_missing,
            },
        }
    }

    #[inline]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    #[inline]
    pub fn records(&self) -> &[SwatchRecord] {
        self.catalogue.records()
    }

    /// Images of a record, by filename.
    pub fn images(&self, filename: &str) -> Option<&SwatchImages> {
        self.images.get(filename)
    }

    #[inline]
    pub fn report(&self) -> LibraryReport {
        self.report
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.catalogue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.catalogue.is_empty()
    }
}
