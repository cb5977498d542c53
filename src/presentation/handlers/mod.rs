mod convert;
mod health;

pub use convert::{DOCX_MIME, convert_handler};
pub use health::health_handler;
