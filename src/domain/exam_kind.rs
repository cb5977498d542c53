use std::fmt;

/// The kind of exam sheet being generated. Closed set; anything else is
/// rejected at the upload boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamKind {
    Final,
    Classroom,
}

impl ExamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamKind::Final => "final",
            ExamKind::Classroom => "classroom",
        }
    }
}

impl TryFrom<String> for ExamKind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "final" => Ok(Self::Final),
            "classroom" => Ok(Self::Classroom),
            other => Err(format!(
                "Invalid exam kind: {}. Expected: final or classroom",
                other
            )),
        }
    }
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
