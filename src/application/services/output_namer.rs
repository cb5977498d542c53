use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::domain::ExamKind;

/// Issues collision-free output filenames of the form
/// `{subject}-{kind}-{timestamp}.docx`.
///
/// The timestamp is milliseconds since epoch, bumped past the last issued
/// value so that concurrent requests landing in the same millisecond still
/// get distinct names.
pub struct OutputNamer {
    last_issued_ms: AtomicI64,
}

impl OutputNamer {
    pub fn new() -> Self {
        Self {
            last_issued_ms: AtomicI64::new(0),
        }
    }

    pub fn next(&self, subject: &str, kind: ExamKind) -> String {
        let stamp = self.next_stamp(Utc::now().timestamp_millis());
        format!("{}-{}-{}.docx", slug(subject), kind, stamp)
    }

    fn next_stamp(&self, now_ms: i64) -> i64 {
        let mut last = self.last_issued_ms.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(last + 1);
            match self.last_issued_ms.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }
}

impl Default for OutputNamer {
    fn default() -> Self {
        Self::new()
    }
}

/// Subjects come straight from a form field; keep only characters that are
/// safe in a filename.
fn slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            out.push(ch);
        } else if ch.is_whitespace() {
            out.push('-');
        }
    }
    if out.is_empty() {
        out.push_str("exam");
    }
    out
}
