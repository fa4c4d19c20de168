pub mod config;
pub mod lookup;
pub mod selection;

pub use config::{
    AppConfig, GridConfig, MosaicConfig, PathsConfig, PolarConfig, RangeConfig, WeightsConfig,
};
pub use lookup::{coerce_number, parse_lookup, read_lookup};
pub use selection::{SelectionArg, SelectionParseError};
