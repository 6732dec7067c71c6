//! Local drafter used when the processing backend is disabled or unavailable.
//!
//! Classification, fact extraction and reply text are all derived from the
//! letter body with fixed rules, so the service always has an answer.

mod answer;
mod classify;
mod extract;

pub use answer::{build_answer, SIGNATURE_PLACEHOLDER};
pub use classify::{classify, LetterCategory};
pub use extract::{
    extract_facts, LABEL_CONTRACT, LABEL_DEADLINE, LABEL_ORGANIZATION, LABEL_SUMMARY,
    SUMMARY_MAX_CHARS,
};

use crate::protocol::{GenerateRequest, GenerateResponse};

/// Produces a complete response for an already validated request.
pub fn draft_locally(request: &GenerateRequest) -> GenerateResponse {
    let text = request.incoming_text.trim();
    let category = classify(text);
    GenerateResponse {
        classification: Some(category.label().to_string()),
        extracted_info: Some(extract_facts(text)),
        answer_text: Some(build_answer(
            category,
            request.email_style,
            request.email_length,
        )),
    }
}
