pub mod aggregate;

pub use aggregate::{Document, DocumentId, DOCUMENT_TYPES};
