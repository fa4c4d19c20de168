use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use swatch_engine::{
    Field, GridAxes, GridParams, MatchWeights, MosaicComposer, NestedGridLayout, PolarLayout,
    PolarParams, VisualEncoding,
};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Where the lookup table and swatch images live
    #[serde(default)]
    pub paths: PathsConfig,

    /// Mosaic composer settings
    #[serde(default)]
    pub mosaic: MosaicConfig,

    /// Color wheel layout
    #[serde(default)]
    pub polar: PolarConfig,

    /// Categorical grid layout
    #[serde(default)]
    pub grid: GridConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PathsConfig {
    /// JSON metadata table
    #[serde(default = "default_lookup")]
    pub lookup: PathBuf,

    /// Square-cropped swatch images used for tiles and sprites
    #[serde(default = "default_tiles")]
    pub tiles: PathBuf,

    /// Bordered swatch images used for hover previews
    #[serde(default = "default_previews")]
    pub previews: PathBuf,
}

fn default_lookup() -> PathBuf {
    PathBuf::from("swatch_lookup.json")
}

fn default_tiles() -> PathBuf {
    PathBuf::from("imagesSuperCrop")
}

fn default_previews() -> PathBuf {
    PathBuf::from("imagesBordered")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            lookup: default_lookup(),
            tiles: default_tiles(),
            previews: default_previews(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MosaicConfig {
    /// Tile edge in pixels, clamped to 4..=200
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    #[serde(default)]
    pub weights: WeightsConfig,
}

fn default_tile_size() -> u32 {
    swatch_engine::DEFAULT_TILE_SIZE
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
            weights: WeightsConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct WeightsConfig {
    #[serde(default = "default_hue_weight")]
    pub hue: f64,
    #[serde(default = "default_brightness_weight")]
    pub brightness: f64,
    #[serde(default = "default_saturation_weight")]
    pub saturation: f64,
}

fn default_hue_weight() -> f64 {
    1.0
}

fn default_brightness_weight() -> f64 {
    0.6
}

fn default_saturation_weight() -> f64 {
    0.2
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            hue: default_hue_weight(),
            brightness: default_brightness_weight(),
            saturation: default_saturation_weight(),
        }
    }
}

/// Inclusive `[min, max]` interpolation range
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct RangeConfig {
    pub min: f64,
    pub max: f64,
}

fn default_size_range() -> RangeConfig {
    RangeConfig {
        min: 10.0,
        max: 26.0,
    }
}

fn default_alpha_range() -> RangeConfig {
    RangeConfig {
        min: 0.45,
        max: 1.0,
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PolarConfig {
    #[serde(default = "default_diameter")]
    pub diameter: f64,
    #[serde(default = "default_inner_radius")]
    pub inner_radius: f64,
    /// Outer radius as a fraction of the diameter
    #[serde(default = "default_outer_ratio")]
    pub outer_ratio: f64,
    #[serde(default = "default_size_range")]
    pub size: RangeConfig,
    #[serde(default = "default_alpha_range")]
    pub alpha: RangeConfig,
}

fn default_diameter() -> f64 {
    800.0
}

fn default_inner_radius() -> f64 {
    30.0
}

fn default_outer_ratio() -> f64 {
    0.45
}

impl Default for PolarConfig {
    fn default() -> Self {
        Self {
            diameter: default_diameter(),
            inner_radius: default_inner_radius(),
            outer_ratio: default_outer_ratio(),
            size: default_size_range(),
            alpha: default_alpha_range(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridConfig {
    #[serde(default = "default_grid_width")]
    pub width: f64,
    #[serde(default = "default_grid_height")]
    pub height: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default = "default_inner_margin_ratio")]
    pub inner_margin_ratio: f64,
    #[serde(default = "default_jitter_ratio")]
    pub jitter_ratio: f64,
    #[serde(default)]
    pub seed: u32,
    #[serde(default = "default_outer_x", deserialize_with = "de_field")]
    pub outer_x: Field,
    #[serde(default = "default_outer_y", deserialize_with = "de_field")]
    pub outer_y: Field,
    #[serde(default, deserialize_with = "de_opt_field")]
    pub inner_x: Option<Field>,
    #[serde(default, deserialize_with = "de_opt_field")]
    pub inner_y: Option<Field>,
    #[serde(default, deserialize_with = "de_opt_field")]
    pub colour_by: Option<Field>,
    #[serde(default = "default_size_range")]
    pub size: RangeConfig,
    #[serde(default = "default_alpha_range")]
    pub alpha: RangeConfig,
}

fn default_grid_width() -> f64 {
    1000.0
}

fn default_grid_height() -> f64 {
    800.0
}

fn default_margin() -> f64 {
    40.0
}

fn default_inner_margin_ratio() -> f64 {
    0.1
}

fn default_jitter_ratio() -> f64 {
    0.15
}

fn default_outer_x() -> Field {
    Field::Dyestuff
}

fn default_outer_y() -> Field {
    Field::Ph
}

fn de_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Field, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

fn de_opt_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Field>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() || raw.eq_ignore_ascii_case("none") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_grid_width(),
            height: default_grid_height(),
            margin: default_margin(),
            inner_margin_ratio: default_inner_margin_ratio(),
            jitter_ratio: default_jitter_ratio(),
            seed: 0,
            outer_x: default_outer_x(),
            outer_y: default_outer_y(),
            inner_x: None,
            inner_y: None,
            colour_by: None,
            size: default_size_range(),
            alpha: default_alpha_range(),
        }
    }
}

fn encoding(size: RangeConfig, alpha: RangeConfig) -> VisualEncoding {
    VisualEncoding {
        min_size: size.min,
        max_size: size.max,
        min_alpha: alpha.min,
        max_alpha: alpha.max,
    }
}

impl AppConfig {
    /// Parse a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from a YAML file, falling back to defaults when
    /// no path is given or the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        tile_size = config.mosaic.tile_size,
                        outer_x = %config.grid.outer_x,
                        outer_y = %config.grid.outer_y,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Replace paths with explicit overrides where given.
    pub fn with_path_overrides(
        mut self,
        lookup: Option<PathBuf>,
        tiles: Option<PathBuf>,
        previews: Option<PathBuf>,
    ) -> Self {
        if let Some(lookup) = lookup {
            self.paths.lookup = lookup;
        }
        if let Some(tiles) = tiles {
            self.paths.tiles = tiles;
        }
        if let Some(previews) = previews {
            self.paths.previews = previews;
        }
        self
    }

    /// Apply `LOOKUP_FILE`, `TILES_DIR` and `PREVIEWS_DIR` from the environment.
    pub fn with_env_overrides(self) -> Self {
        let var = |name: &str| std::env::var(name).ok().map(PathBuf::from);
        self.with_path_overrides(var("LOOKUP_FILE"), var("TILES_DIR"), var("PREVIEWS_DIR"))
    }

    pub fn match_weights(&self) -> MatchWeights {
        let w = self.mosaic.weights;
        MatchWeights::new(w.hue, w.brightness, w.saturation)
    }

    /// Composer with the configured (clamped) tile size and weights.
    pub fn composer(&self) -> MosaicComposer {
        MosaicComposer::new(self.match_weights()).tile_size(self.mosaic.tile_size)
    }

    pub fn polar_layout(&self) -> PolarLayout {
        let p = &self.polar;
        PolarLayout::new(PolarParams {
            diameter: p.diameter,
            inner_radius: p.inner_radius,
            outer_ratio: p.outer_ratio,
            encoding: encoding(p.size, p.alpha),
        })
    }

    pub fn grid_axes(&self) -> GridAxes {
        GridAxes::outer(self.grid.outer_x, self.grid.outer_y)
            .with_inner(self.grid.inner_x, self.grid.inner_y)
    }

    pub fn grid_layout(&self) -> NestedGridLayout {
        let g = &self.grid;
        NestedGridLayout::new(GridParams {
            width: g.width,
            height: g.height,
            margin: g.margin,
            inner_margin_ratio: g.inner_margin_ratio,
            jitter_ratio: g.jitter_ratio,
            seed: g.seed,
            axes: self.grid_axes(),
            colour_by: g.colour_by,
            encoding: encoding(g.size, g.alpha),
        })
    }
}
