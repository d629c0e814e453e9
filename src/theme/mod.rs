//! Visual theme: global stylesheet with dark and light palettes.

mod styles;

pub use styles::GLOBAL_STYLES;
