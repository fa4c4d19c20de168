use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use swatch_engine::{
    AtlasLayout, AtlasMode, Field, FieldIndex, FilterEngine, GridAxes, LayoutStrategy,
    MatchWeights, Mosaic, MosaicComposer, NestedGridLayout, SwatchRecord,
};
use tokio::sync::RwLock;

use super::image_source::{ImageKind, ImageSource};
use super::library::SwatchLibrary;
use crate::error::ComposeError;
use crate::models::AppConfig;

/// Mutable selection state of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub filter: FilterEngine,
    pub mode: AtlasMode,
    pub composer: MosaicComposer,
}

/// Identifies one recompute request. Higher tickets are newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Application state for one loaded library: filter selections, the active
/// atlas strategy and mosaic settings.
///
/// Every state change and every mosaic request advances a generation
/// counter. A mosaic request that finishes loading its sample after a newer
/// request or state change was issued is discarded with
/// [`ComposeError::StaleRequest`], so the newest request always wins.
pub struct AtlasSession {
    library: Arc<SwatchLibrary>,
    state: RwLock<SessionState>,
    generation: AtomicU64,
}

impl AtlasSession {
    pub fn new(library: Arc<SwatchLibrary>, config: &AppConfig) -> Self {
        Self::with_state(
            library,
            SessionState {
                filter: FilterEngine::new(),
                mode: AtlasMode::Polar(config.polar_layout()),
                composer: config.composer(),
            },
        )
    }

    pub fn with_state(library: Arc<SwatchLibrary>, state: SessionState) -> Self {
        Self {
            library,
            state: RwLock::new(state),
            generation: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn library(&self) -> &SwatchLibrary {
        &self.library
    }

    /// Ordered distinct values of a field over the whole library.
    pub fn unique_values(&self, field: Field) -> &FieldIndex {
        self.library.catalogue().unique_values(field)
    }

    /// Issue a new ticket, superseding every earlier one.
    pub fn begin_request(&self) -> RequestTicket {
        RequestTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Fail with `StaleRequest` if a newer ticket has been issued.
    pub fn ensure_current(&self, ticket: RequestTicket) -> Result<(), ComposeError> {
        let latest = self.generation.load(Ordering::SeqCst);
        if ticket.0 == latest {
            Ok(())
        } else {
            tracing::debug!(ticket = ticket.0, latest, "Discarding stale request");
            Err(ComposeError::StaleRequest {
                ticket: ticket.0,
                latest,
            })
        }
    }

    /// Copy of the current state.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Apply a state change and supersede in-flight requests.
    pub async fn update<F>(&self, change: F) -> RequestTicket
    where
        F: FnOnce(&mut SessionState),
    {
        let mut state = self.state.write().await;
        change(&mut state);
        self.begin_request()
    }

    /// Set one field's selection. `None` makes the field unrestricted.
    pub async fn set_selection(&self, field: Field, values: Option<Vec<String>>) -> RequestTicket {
        self.update(|s| s.filter.set_selection(field, values)).await
    }

    pub async fn select_all(&self) -> RequestTicket {
        self.update(|s| s.filter.select_all()).await
    }

    pub async fn clear_all(&self) -> RequestTicket {
        self.update(|s| s.filter.clear_all()).await
    }

    pub async fn set_mode(&self, mode: AtlasMode) -> RequestTicket {
        self.update(|s| s.mode = mode).await
    }

    /// Change grid axes, switching to grid mode if needed.
    pub async fn set_grid_axes(&self, axes: GridAxes) -> RequestTicket {
        self.update(|s| {
            let grid = match &s.mode {
                AtlasMode::Grid(grid) => grid.clone(),
                AtlasMode::Polar(_) => NestedGridLayout::default(),
            };
            s.mode = AtlasMode::Grid(grid.axes(axes));
        })
        .await
    }

    pub async fn set_tile_size(&self, size: u32) -> RequestTicket {
        self.update(|s| s.composer = s.composer.clone().tile_size(size))
            .await
    }

    pub async fn set_weights(&self, weights: MatchWeights) -> RequestTicket {
        self.update(|s| s.composer = s.composer.clone().weights(weights))
            .await
    }

    /// Records passing the current filter, in catalogue order.
    pub async fn filtered(&self) -> Vec<&SwatchRecord> {
        let state = self.state.read().await;
        state.filter.apply(self.library.records())
    }

    /// Lay out the filtered records with the active strategy.
    ///
    /// An empty library is an error; a filter that matches nothing yields an
    /// empty layout.
    pub async fn layout(&self) -> Result<AtlasLayout<'_>, ComposeError> {
        if self.library.is_empty() {
            return Err(ComposeError::NoSwatchesAvailable);
        }
        let state = self.state.read().await;
        let records = state.filter.apply(self.library.records());
        let layout = state.mode.layout(&records);
        tracing::debug!(
            mode = state.mode.name(),
            entries = layout.len(),
            "Computed atlas layout"
        );
        Ok(layout)
    }

    /// Load a sample image and compose a mosaic from the filtered records.
    ///
    /// The sample load is the only suspension point. If anything newer was
    /// requested meanwhile, the result is discarded as stale.
    pub async fn compose_mosaic<S>(
        &self,
        source: &S,
        sample: &str,
    ) -> Result<Mosaic<'_>, ComposeError>
    where
        S: ImageSource + ?Sized,
    {
        let ticket = self.begin_request();
        let image = source.load(ImageKind::Sample, sample).await;

        // Checked under the read guard so no state change can slip in between
        let state = self.state.read().await;
        self.ensure_current(ticket)?;
        let image = image?;

        if self.library.is_empty() {
            return Err(ComposeError::NoSwatchesAvailable);
        }

        let candidates = state.filter.apply(self.library.records());
        if candidates.is_empty() {
            tracing::info!("Filter matches no swatches, mosaic is empty");
            return Ok(Mosaic::empty(state.composer.current_tile_size()));
        }

        let mosaic = state.composer.compose(&image, &candidates)?;
        let (columns, rows) = mosaic.dimensions();
        tracing::info!(
            ticket = ticket.value(),
            columns,
            rows,
            candidates = candidates.len(),
            "Composed mosaic"
        );
        Ok(mosaic)
    }
}
