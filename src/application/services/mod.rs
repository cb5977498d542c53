mod assembler;
mod conversion_service;
mod output_namer;

pub use assembler::{assemble, document_title};
pub use conversion_service::{ConversionError, ConversionOutput, ConversionService};
pub use output_namer::OutputNamer;
