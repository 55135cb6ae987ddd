use crate::language::Language;
use crate::llm::prompts;

/// Render the instructional prompt for a diff.
///
/// The diff is embedded verbatim between the instruction and task blocks; no
/// escaping or sanitization is applied, so delimiter-like text inside the
/// diff passes through unchanged.
pub fn build_commit_prompt(diff: &str, language: Language) -> String {
    let (instructions, task) = match language {
        Language::En => (prompts::COMMIT_INSTRUCTIONS_EN, prompts::COMMIT_TASK_EN),
        Language::Zh => (prompts::COMMIT_INSTRUCTIONS_ZH, prompts::COMMIT_TASK_ZH),
    };

    format!("{instructions}\n\n{diff}\n\n{task}")
}
