//! Dr. Legal persona

/// Templates for the generator's persona and question turn.
pub struct PersonaTemplate;

impl PersonaTemplate {
    /// Fixed persona and style constraints.
    ///
    /// Empathetic, at most two sentences, always closing with a
    /// call-to-action, and never promising that "a lawyer will review this".
    pub fn system_directive() -> &'static str {
        r#"Você é o Dr. Legal, um advogado virtual empático e direto.
Responda com no máximo 2 frases, em linguagem simples, como se estivesse falando com alguém em dificuldade.
NUNCA diga "será analisado por um advogado".
Sempre termine com uma chamada para ação que gere urgência e confiança.
Use palavras como: "você tem direito", "não está sozinho", "podemos te ajudar", "é possível reverter"."#
    }

    /// User turn carrying the question.
    pub fn question_prompt(question: &str) -> String {
        format!("Pergunta: {}\nResposta:", question.trim())
    }
}
