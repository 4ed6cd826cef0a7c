use bell_prompt::{PromptRequest, render};
use bell_standards::StandardsCatalog;

const DOCUMENT: &str = "\
## Domain 2 - Algorithms and Programming
### Standard 2.3 - Develop and debug programs
* **2.3.7** Debug errors to ensure functionality
";

#[test]
fn renders_without_standard() {
    let request = PromptRequest::new("Loops", "Predict the Output", "5-Minute Timer");
    let prompt = render(&request).expect("render prompt");
    insta::assert_snapshot!(prompt, @r###"
    You are an expert Computer Science teacher creating a high-quality bell ringer (warm-up exercise) for a CS class.

    Generate a bell ringer with these specifications:
    - **Topic**: Loops
    - **Format**: Predict the Output
    - **Constraint**: 5-Minute Timer

    Requirements:
    1. The activity should be completable within 5-10 minutes
    2. Include clear instructions for students
    3. For code-based questions, use Python unless otherwise appropriate
    4. Make it engaging and appropriate for the constraint level
    5. Include an answer key or expected output at the end

    Format your response as:
    # Bell Ringer: Loops

    ## Instructions
    [Clear student-facing instructions]

    ## Problem
    [The actual problem/exercise]

    ## Answer Key
    [Solution or expected output]

    Make this pedagogically sound and immediately printable.
    "###);
}

#[test]
fn standard_description_is_resolved_from_catalog() {
    let catalog = StandardsCatalog::from_document(DOCUMENT);
    let request = PromptRequest::new(" Functions ", "Debug the Code", "No Computers")
        .with_standard(&catalog, "2.3.7");
    let prompt = render(&request).expect("render prompt");

    assert!(prompt.contains("- **Topic**: Functions\n"));
    assert!(prompt.contains("- **Standard**: 2.3.7 - Debug errors to ensure functionality\n"));
    assert!(prompt.contains("6. Align the activity with the listed standard\n"));
    assert!(prompt.contains("# Bell Ringer: Functions\n"));
}
