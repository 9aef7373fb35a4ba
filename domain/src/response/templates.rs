//! Canned response copy

use crate::core::text::excerpt;
use crate::lexicon::area::AreaLabel;

/// Label and pre-filled message for a call-to-action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub label: String,
    pub message: String,
}

impl CallToAction {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }
}

const AREA_MENU: &str =
    "⚖️ Família | 💼 Trabalho | 🛡️ Consumidor | 🏥 Previdência | ⚖️ Penal | 🏠 Imobiliário";

/// Characters of the user's question quoted in the fallback button.
pub const FALLBACK_EXCERPT_CHARS: usize = 100;

/// Templates for every canned reply
pub struct ResponseTemplate;

impl ResponseTemplate {
    pub fn intro_menu_body() -> String {
        format!(
            "Olá! Aqui é o <b>Dr. Legal</b> 🌟<br><br>\
             Seu direito é importante — e eu estou aqui para te ajudar.<br><br>\
             Posso te orientar sobre:<br>{}",
            AREA_MENU
        )
    }

    pub fn intro_menu_action() -> CallToAction {
        CallToAction::new(
            "💬 Falar com um advogado agora",
            "Tenho uma dúvida jurídica urgente.",
        )
    }

    pub fn greeting_body() -> &'static str {
        "Olá! Aqui é o <b>Dr. Legal</b>, seu assistente jurídico. 😊<br><br>\
         Estou aqui para te ajudar com:<br>\
         🔹 Divórcio, guarda, pensão<br>\
         🔹 Demissão, FGTS, horas extras<br>\
         🔹 Golpes no PIX, cobranças indevidas<br>\
         🔹 Aposentadoria, auxílio-doença, BPC<br>\
         🔹 Acidentes, erros médicos, indenizações<br><br>\
         Me conta o que você precisa?"
    }

    pub fn greeting_action() -> CallToAction {
        CallToAction::new(
            "📞 Falar com especialista agora",
            "Quero falar com um advogado agora.",
        )
    }

    pub fn farewell_body() -> &'static str {
        "Fico feliz em ter ajudado! Conte com o Dr. Legal sempre que precisar. Até breve! 👋"
    }

    pub fn hot_topic_action(topic: &str, area: &AreaLabel) -> CallToAction {
        CallToAction::new(
            format!("📞 Falar com {}", area),
            format!("Quero falar sobre {}.", topic),
        )
    }

    pub fn generated_action(area: &AreaLabel) -> CallToAction {
        CallToAction::new(
            format!("📩 Falar com especialista em {}", area),
            format!("Preciso de ajuda com um caso de {}.", area),
        )
    }

    /// Body used when an on-topic question could not be answered by the generator.
    pub fn fallback_body(area: &AreaLabel) -> String {
        format!(
            "Isso é sério, e você não precisa enfrentar sozinho.<br><br>\
             Vamos te encaminhar para um <b>especialista em {}</b>.",
            area
        )
    }

    pub fn fallback_action(question: &str) -> CallToAction {
        CallToAction::new(
            "📩 Falar com um advogado agora",
            format!(
                "Preciso de ajuda com: {}...",
                excerpt(question, FALLBACK_EXCERPT_CHARS)
            ),
        )
    }

    pub fn off_topic_body() -> String {
        format!(
            "Isso é importante para a vida, mas meu foco é te ajudar com direitos.<br><br>\
             Como:<br>{}",
            AREA_MENU
        )
    }

    pub fn off_topic_action() -> CallToAction {
        CallToAction::new(
            "✅ Falar sobre meu caso",
            "Quero falar sobre um problema jurídico.",
        )
    }
}
