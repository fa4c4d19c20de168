//! Pixel output: PNG codec plus mosaic, atlas and hover preview painters.

pub mod atlas;
pub mod canvas;
pub mod codec;
pub mod mosaic;
pub mod preview;

pub use atlas::{render_atlas, AtlasCanvas};
pub use codec::{decode_png, encode_png, pixmap_from_buffer};
pub use mosaic::render_mosaic;
pub use preview::{hover_lines, render_preview, tile_hover_lines, PREVIEW_SIDE};
