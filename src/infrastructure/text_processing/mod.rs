mod html_sanitizer;

pub use html_sanitizer::strip_markup;
