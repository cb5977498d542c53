/// A parsed question bank, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub name: String,
    pub text: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

impl Answer {
    pub fn from_fraction(text: String, fraction: Option<&str>) -> Self {
        Self {
            is_correct: fraction_marks_correct(fraction),
            text,
        }
    }
}

/// An answer is correct exactly when its `fraction` attribute carries the
/// value 100, in either string or numeric spelling ("100", "100.0", "1e2").
/// Absent or unparseable fractions are incorrect; partial credit is not
/// modelled.
pub fn fraction_marks_correct(fraction: Option<&str>) -> bool {
    fraction
        .and_then(|f| f.trim().parse::<f64>().ok())
        .is_some_and(|value| value == 100.0)
}
