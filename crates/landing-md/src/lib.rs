//! Markdown field extraction for landing page sources.
//!
//! Both source documents use the bold+colon convention (`**Key**: value`) for
//! machine-readable fields. The configuration document is flat; the content
//! document groups fields under `## ` section headings.

pub mod config;
pub mod content;
pub mod line;

pub use config::{extract_config, ConfigMap};
pub use content::{extract_content, ContentMap, SECTION_MARKER};
pub use line::{normalize_key, parse_key_value_line};
