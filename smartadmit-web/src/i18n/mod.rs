mod bundle;
mod format;
mod render;

pub use bundle::{DEFAULT_LANG, apply_document_lang, current_lang};
pub use format::{fmt_number, fmt_pct};
pub use render::{t, tr};
