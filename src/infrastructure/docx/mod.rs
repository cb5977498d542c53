mod docx_writer;

pub use docx_writer::DocxWriter;
