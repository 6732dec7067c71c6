//! Pattern-based fact extraction from the letter body.

use std::sync::OnceLock;

use regex::Regex;

use crate::protocol::ExtractedFact;

/// Summaries longer than this many characters are cut and suffixed with `…`.
pub const SUMMARY_MAX_CHARS: usize = 180;

pub const LABEL_CONTRACT: &str = "Номер договора";
pub const LABEL_DEADLINE: &str = "Дедлайн / срок";
pub const LABEL_ORGANIZATION: &str = "Организация отправителя";
pub const LABEL_SUMMARY: &str = "Краткая суть обращения";

fn contract_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)договор[а-я]* №?\s*([\w/\-]+)").expect("contract pattern is valid")
    })
}

fn deadline_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:до|в срок до)\s+(\d{1,2}\.\d{1,2}\.\d{2,4}|\d{1,2}\s+[а-я]+\s+\d{4})",
        )
        .expect("deadline pattern is valid")
    })
}

fn organization_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\b(?:ООО|АО|ПАО|ЗАО)\s+(?:«[^»]+»|"[^"]+"|[\p{L}\d\-]+)"#)
            .expect("organization pattern is valid")
    })
}

/// Extracts facts in a fixed order: contract, deadline, organization, summary.
///
/// The summary is always present for non-blank text.
pub fn extract_facts(text: &str) -> Vec<ExtractedFact> {
    let mut facts = Vec::new();

    if let Some(number) = contract_re().captures(text).and_then(|c| c.get(1)) {
        facts.push(ExtractedFact::new(LABEL_CONTRACT, number.as_str()));
    }

    if let Some(deadline) = deadline_re().captures(text).and_then(|c| c.get(1)) {
        facts.push(ExtractedFact::new(LABEL_DEADLINE, deadline.as_str()));
    }

    if let Some(organization) = organization_re().find(text) {
        facts.push(ExtractedFact::new(LABEL_ORGANIZATION, organization.as_str()));
    }

    let trimmed = text.trim();
    if !trimmed.is_empty() {
        facts.push(ExtractedFact::new(LABEL_SUMMARY, summarize(trimmed)));
    }

    facts
}

fn summarize(trimmed: &str) -> String {
    if trimmed.chars().count() <= SUMMARY_MAX_CHARS {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(SUMMARY_MAX_CHARS).collect();
    format!("{}…", head.trim_end())
}
