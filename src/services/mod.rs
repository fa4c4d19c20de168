pub mod image_source;
pub mod library;
pub mod session;

pub use image_source::{FsImageSource, ImageKind, ImageSource, InMemoryImageSource};
pub use library::{LibraryReport, SwatchImages, SwatchLibrary};
pub use session::{AtlasSession, RequestTicket, SessionState};
