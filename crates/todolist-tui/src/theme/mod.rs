pub mod colors;
pub mod palette;

pub use palette::Palette;
