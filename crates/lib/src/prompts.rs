//! # System Instructions
//!
//! The system-instruction strings sent alongside the user's topic. Providers
//! that can follow output-format instructions get the structured variants,
//! which demand a JSON object; plain-text providers get a shorter variant
//! with the topic interpolated directly.

use crate::types::{Language, ProviderKind, ResponseFormat};

pub const STRUCTURED_ARTICLE_PROMPT_FA: &str = r#"شما یک نویسنده حرفه‌ای مقاله هستید. یک مقاله کامل و جامع در موضوع داده شده بنویسید. مقاله باید شامل موارد زیر باشد:
1. عنوان جذاب و خلاقانه
2. خلاصه کوتاه (150-200 کلمه)
3. محتوای اصلی مقاله (حداقل 1500 کلمه)
4. استفاده از سرفصل‌ها و زیرعنوان‌ها
5. استفاده از فرمت مارک‌داون
6. محتوا باید علمی، دقیق و قابل اعتماد باشد
7. زبان باید رسمی و ادبی باشد

لطفاً پاسخ را در قالب JSON با کلیدهای title, excerpt, content ارائه دهید."#;

pub const STRUCTURED_ARTICLE_PROMPT_EN: &str = r#"You are a professional article writer. Write a complete and comprehensive article on the given topic. The article should include:
1. An attractive and creative title
2. Brief summary (150-200 words)
3. Main article content (minimum 1500 words)
4. Use of headings and subheadings
5. Use of markdown format
6. Content should be scientific, accurate and reliable
7. Language should be formal and literary

Please provide the response in JSON format with keys: title, excerpt, content."#;

pub const PLAIN_ARTICLE_PROMPT_FA: &str = "شما یک نویسنده حرفه‌ای مقاله هستید. یک مقاله کامل و جامع در موضوع «{topic}» بنویسید. مقاله باید شامل عنوان جذاب، خلاصه کوتاه و محتوای اصلی باشد. از فرمت مارک‌داون استفاده کنید.";

pub const PLAIN_ARTICLE_PROMPT_EN: &str = "You are a professional article writer. Write a complete and comprehensive article on the topic \"{topic}\". The article should include an attractive title, brief summary, and main content. Use markdown format.";

/// Selects the system instruction for a provider and language.
///
/// The plain-text variants carry the topic inline since those providers take
/// a single block of text rather than separate system and user roles.
pub fn system_instruction(kind: ProviderKind, language: Language, topic: &str) -> String {
    match kind.response_format() {
        ResponseFormat::StructuredJson => match language {
            Language::Fa => STRUCTURED_ARTICLE_PROMPT_FA.to_string(),
            Language::En => STRUCTURED_ARTICLE_PROMPT_EN.to_string(),
        },
        ResponseFormat::PlainText => match language {
            Language::Fa => PLAIN_ARTICLE_PROMPT_FA.replace("{topic}", topic),
            Language::En => PLAIN_ARTICLE_PROMPT_EN.replace("{topic}", topic),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_prompt_demands_json_keys() {
        let instruction = system_instruction(ProviderKind::GapGpt, Language::Fa, "هوش مصنوعی");
        assert!(instruction.contains("title, excerpt, content"));
        // The topic travels as the user prompt, not inside the instruction.
        assert!(!instruction.contains("هوش مصنوعی"));
    }

    #[test]
    fn plain_prompt_interpolates_topic() {
        let instruction = system_instruction(ProviderKind::Gemini, Language::En, "Rust web servers");
        assert!(instruction.contains("\"Rust web servers\""));
        assert!(!instruction.contains("{topic}"));
    }

    #[test]
    fn language_selects_persian_by_default() {
        let instruction = system_instruction(ProviderKind::Gemini, Language::default(), "کتابخوانی");
        assert!(instruction.contains("«کتابخوانی»"));
        assert!(instruction.contains("مارک‌داون"));
    }
}
