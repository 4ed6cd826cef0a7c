//! Fixed option lists for the generator slots.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const TOPICS: &[&str] = &[
    "Variables",
    "Loops",
    "Conditionals",
    "Functions",
    "Data Structures",
    "Object-Oriented Programming",
    "Recursion",
    "Algorithms",
    "AI & Machine Learning",
    "Cybersecurity",
    "Binary & Number Systems",
    "Web Development",
    "Databases",
];

pub const FORMATS: &[&str] = &[
    "Debug the Code",
    "Predict the Output",
    "Vocabulary Match",
    "Code Tracing",
    "Short Answer",
    "Pseudocode Challenge",
    "Fill in the Blanks",
    "Multiple Choice",
    "Code Completion",
    "Real-World Application",
];

pub const CONSTRAINTS: &[&str] = &[
    "5-Minute Timer",
    "Partner Discussion",
    "No Computers",
    "Analogy Time",
    "Introductory Level",
    "Intermediate Level",
    "AP-Level Review",
    "Think-Pair-Share",
    "Visual Diagram",
    "Quiz Prep",
];

/// One of the three generator slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Topic,
    Format,
    Constraint,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Topic, Slot::Format, Slot::Constraint];

    /// Options a spin may pick for this slot.
    pub const fn options(self) -> &'static [&'static str] {
        match self {
            Self::Topic => TOPICS,
            Self::Format => FORMATS,
            Self::Constraint => CONSTRAINTS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Topic => "Topic",
            Self::Format => "Format",
            Self::Constraint => "Constraint",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
