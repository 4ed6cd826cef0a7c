//! Generation prompt template.
//!
//! The rendered text is handed unchanged to the external text generation
//! service; the response is expected to follow the Instructions / Problem /
//! Answer Key layout requested at the end of the prompt.

use serde::{Deserialize, Serialize};
use tracing::warn;

use bell_standards::{NONE_CODE, StandardsCatalog};

use crate::error::{PromptError, Result};
use crate::options::Slot;
use crate::spin::Selection;

/// A standard code with its resolved description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRef {
    pub code: String,
    pub description: String,
}

/// Inputs of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub topic: String,
    pub format: String,
    pub constraint: String,
    pub standard: Option<StandardRef>,
}

impl PromptRequest {
    pub fn new(
        topic: impl Into<String>,
        format: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            format: format.into(),
            constraint: constraint.into(),
            standard: None,
        }
    }

    pub fn from_selection(selection: &Selection) -> Self {
        Self::new(
            selection.topic.clone(),
            selection.format.clone(),
            selection.constraint.clone(),
        )
    }

    /// Attach the standard `code`, resolving its description through
    /// `catalog`. The `None` code (or a blank one) clears the standard.
    ///
    /// Unknown codes are kept with the catalog's "no description" text.
    #[must_use]
    pub fn with_standard(mut self, catalog: &StandardsCatalog, code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() || code == NONE_CODE {
            self.standard = None;
            return self;
        }
        if !catalog.contains(code) {
            warn!(code, source = %catalog.source(), "standard code not in catalog");
        }
        self.standard = Some(StandardRef {
            code: code.to_string(),
            description: catalog.description_for(code).to_string(),
        });
        self
    }

    fn field(&self, slot: Slot) -> Result<&str> {
        let value = match slot {
            Slot::Topic => &self.topic,
            Slot::Format => &self.format,
            Slot::Constraint => &self.constraint,
        };
        let value = value.trim();
        if value.is_empty() {
            return Err(PromptError::EmptyField { slot });
        }
        Ok(value)
    }
}

const REQUIREMENTS: &[&str] = &[
    "The activity should be completable within 5-10 minutes",
    "Include clear instructions for students",
    "For code-based questions, use Python unless otherwise appropriate",
    "Make it engaging and appropriate for the constraint level",
    "Include an answer key or expected output at the end",
];

/// Render the generation prompt.
///
/// # Errors
///
/// Returns [`PromptError::EmptyField`] when the topic, format or constraint
/// is blank.
pub fn render(request: &PromptRequest) -> Result<String> {
    let topic = request.field(Slot::Topic)?;
    let format = request.field(Slot::Format)?;
    let constraint = request.field(Slot::Constraint)?;

    let mut prompt = String::from(
        "You are an expert Computer Science teacher creating a high-quality bell ringer \
         (warm-up exercise) for a CS class.\n\n",
    );
    prompt.push_str("Generate a bell ringer with these specifications:\n");
    prompt.push_str(&format!("- **Topic**: {topic}\n"));
    prompt.push_str(&format!("- **Format**: {format}\n"));
    prompt.push_str(&format!("- **Constraint**: {constraint}\n"));
    if let Some(standard) = &request.standard {
        prompt.push_str(&format!(
            "- **Standard**: {} - {}\n",
            standard.code, standard.description
        ));
    }

    prompt.push_str("\nRequirements:\n");
    let mut requirements: Vec<&str> = REQUIREMENTS.to_vec();
    if request.standard.is_some() {
        requirements.push("Align the activity with the listed standard");
    }
    for (index, requirement) in requirements.iter().enumerate() {
        prompt.push_str(&format!("{}. {requirement}\n", index + 1));
    }

    prompt.push_str(&format!(
        "\nFormat your response as:\n\
         # Bell Ringer: {topic}\n\n\
         ## Instructions\n\
         [Clear student-facing instructions]\n\n\
         ## Problem\n\
         [The actual problem/exercise]\n\n\
         ## Answer Key\n\
         [Solution or expected output]\n\n\
         Make this pedagogically sound and immediately printable."
    ));
    Ok(prompt)
}
