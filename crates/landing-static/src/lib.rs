//! Landing page assembly.
//!
//! Combines fields extracted from the markdown sources with a verbatim
//! stylesheet and script into one self-contained HTML document.

pub mod assets;
pub mod builder;
pub mod fields;
pub mod render;
pub mod templates;

pub use assets::{AssetError, AssetPipeline};
pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use fields::PageFields;
pub use render::{assemble, RenderContext};
pub use templates::PageTemplate;
