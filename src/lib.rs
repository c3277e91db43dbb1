pub mod binary;
pub mod color;
pub mod digest;
pub mod format;
pub mod loader;
pub mod palette;
pub mod text;

pub use color::ColorValue;
pub use digest::{ContentDigest, ContentHasher, Md5Hasher};
pub use format::{detect, PaletteFormat};
pub use loader::PaletteError;
pub use palette::{Palette, PaletteEntry};
