//! Word counter engine: text extraction, counting and effect execution.
mod badge;
mod driver;
mod host;
mod html;
mod visible;
mod words;

pub use badge::BadgeController;
pub use driver::OverlayDriver;
pub use host::{ClipboardError, PageHost};
pub use html::{HtmlPage, PageError};
pub use visible::{count_in_document, visible_text, NodeKind, Visibility, VisibilityTree};
pub use words::{normalize_whitespace, word_count, UnicodeWordCounter, WordCounter};
