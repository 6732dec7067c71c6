//! Template-based reply drafting.

use crate::draft::classify::LetterCategory;
use crate::protocol::{EmailLength, EmailStyle};

/// Placeholder the user replaces with the real signature.
pub const SIGNATURE_PLACEHOLDER: &str = "[Название компании]";

fn greeting(style: EmailStyle) -> &'static str {
    match style {
        EmailStyle::Formal => "Уважаемый(ая) господин(жа),",
        EmailStyle::Business => "Добрый день,",
        EmailStyle::Client => "Здравствуйте,",
    }
}

fn sign_off(style: EmailStyle) -> &'static str {
    match style {
        EmailStyle::Formal => "С уважением,",
        EmailStyle::Business => "С наилучшими пожеланиями,",
        EmailStyle::Client => "Спасибо, что обратились к нам,",
    }
}

fn body(category: LetterCategory) -> &'static str {
    match category {
        LetterCategory::Complaint => {
            "благодарим вас за предоставленную информацию. Мы внимательно рассмотрели \
             изложенные замечания и уже инициировали внутреннюю проверку по описанной ситуации."
        }
        LetterCategory::RegulatorRequest => {
            "подтверждаем получение вашего запроса. В настоящее время мы собираем и проверяем \
             необходимую информацию для подготовки полного ответа."
        }
        LetterCategory::PartnershipOffer => {
            "благодарим вас за интерес к сотрудничеству. Мы внимательно изучили ваше предложение \
             и видим потенциал для дальнейшего взаимодействия."
        }
        LetterCategory::BillingRequest | LetterCategory::General => {
            "благодарим вас за обращение. Мы внимательно ознакомились с вашим запросом и уже \
             приступили к его обработке."
        }
    }
}

fn closing(length: EmailLength) -> &'static str {
    match length {
        EmailLength::Full => {
            " В ближайшее время мы предоставим вам развёрнутый ответ с необходимыми пояснениями \
             и, при необходимости, дополнительными документами."
        }
        EmailLength::Short => " В кратчайшие сроки мы вернёмся к вам с ответом.",
    }
}

/// Builds `greeting`, body and closing, then sign-off and signature placeholder.
pub fn build_answer(category: LetterCategory, style: EmailStyle, length: EmailLength) -> String {
    format!(
        "{}\n\n{}{}\n\n{}\n{}",
        greeting(style),
        body(category),
        closing(length),
        sign_off(style),
        SIGNATURE_PLACEHOLDER
    )
}
