//! Terminal rendering and text layouts for [`nxncube_core::Cube`].

mod layout;
mod net;
mod palette;

pub use layout::{LayoutText, LoadError, infer_size, read_layout, read_layout_from};
pub use net::CubeNet;
pub use palette::{Palette, PaletteColor};
