//! Keyword-based letter classification.

/// Category assigned to an incoming letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCategory {
    Complaint,
    RegulatorRequest,
    PartnershipOffer,
    BillingRequest,
    General,
}

impl LetterCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Complaint => "Официальная жалоба",
            Self::RegulatorRequest => "Регуляторный запрос",
            Self::PartnershipOffer => "Партнёрское предложение",
            Self::BillingRequest => "Запрос по оплате/счету",
            Self::General => "Общее деловое обращение",
        }
    }
}

/// Ordered rules; the first rule with a matching stem wins.
const RULES: &[(LetterCategory, &[&str])] = &[
    (LetterCategory::Complaint, &["жалоб"]),
    (LetterCategory::RegulatorRequest, &["регулятор", "надзор"]),
    (LetterCategory::PartnershipOffer, &["партнер", "партнёр"]),
    (LetterCategory::BillingRequest, &["счет", "счёт", "оплат"]),
];

pub fn classify(text: &str) -> LetterCategory {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|(_, stems)| stems.iter().any(|stem| lower.contains(stem)))
        .map(|(category, _)| *category)
        .unwrap_or(LetterCategory::General)
}
