mod moodle_adapter;

pub use moodle_adapter::MoodleXmlAdapter;
