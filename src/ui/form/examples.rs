//! Canned example letters for quick testing of the form.

/// Identifier of a canned letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleLetter {
    Complaint,
    Regulator,
    Partner,
}

const COMPLAINT: &str = "ООО «Пример-Банк»\n\n\
Настоящим направляем официальную жалобу по факту некорректного списания средств по договору № 123/45 от 15.09.2025. \
Просим в срок до 30.11.2025 предоставить письменный ответ с результатами проверки.";

const REGULATOR: &str = "Банк «Пример»\n\n\
Направляем регуляторный запрос в рамках проверки соблюдения требований законодательства. \
Просим до 10.12.2025 предоставить пояснения и копии документов по операциям клиента ООО «Альфа».";

const PARTNER: &str = "АО «Партнёр»\n\n\
Предлагаем рассмотреть возможность запуска совместного проекта по кобрендинговой карте. \
Готовы направить детальную презентацию и обсудить условия сотрудничества.";

impl ExampleLetter {
    pub const ALL: [ExampleLetter; 3] = [Self::Complaint, Self::Regulator, Self::Partner];

    /// Parses `complaint`, `regulator` or `partner`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "complaint" => Some(Self::Complaint),
            "regulator" => Some(Self::Regulator),
            "partner" => Some(Self::Partner),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Complaint => "complaint",
            Self::Regulator => "regulator",
            Self::Partner => "partner",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::Complaint => COMPLAINT,
            Self::Regulator => REGULATOR,
            Self::Partner => PARTNER,
        }
    }
}
