//! Built-in Portuguese lexicon.

use super::entities::Lexicon;
use std::sync::LazyLock;

/// Area → keyword table, in tie-break order.
pub const STANDARD_AREAS: &[(&str, &[&str])] = &[
    (
        "Direito de Família",
        &[
            "divórcio",
            "guarda",
            "alimentos",
            "casamento",
            "união estável",
            "pensão",
            "pensão alimentícia",
            "filho",
            "criança",
            "separação",
            "herança familiar",
        ],
    ),
    (
        "Direito Trabalhista",
        &[
            "demitido",
            "justa causa",
            "horas extras",
            "fgts",
            "reclamação",
            "trabalho",
            "emprego",
            "salário",
            "verbas rescisórias",
            "acordo",
            "empregador",
        ],
    ),
    (
        "Direito Previdenciário",
        &[
            "aposentadoria",
            "inss",
            "auxílio-doença",
            "bpc",
            "loas",
            "seguro desemprego",
            "auxílio reclusão",
            "auxílio-acidente",
            "revisão",
            "benefício",
        ],
    ),
    (
        "Direito do Consumidor",
        &[
            "golpe",
            "pix",
            "cobrança",
            "procon",
            "juros abusivos",
            "fraude",
            "compra",
            "estorno",
            "cancelamento",
            "devolução",
            "dívida",
        ],
    ),
    (
        "Indenização",
        &[
            "acidente",
            "danos",
            "moral",
            "erro médico",
            "indenização",
            "compensação",
            "responsabilidade civil",
            "acidente de carro",
            "dano material",
        ],
    ),
    (
        "Direito Penal",
        &[
            "boletim de ocorrência",
            "prisão",
            "flagrante",
            "advogado criminal",
            "delito",
            "crime",
            "penal",
            "liberdade",
            "habeas corpus",
        ],
    ),
    (
        "Direito Imobiliário",
        &[
            "aluguel",
            "despejo",
            "fiador",
            "contrato",
            "imóvel",
            "inadimplência",
            "locatário",
            "proprietário",
        ],
    ),
    (
        "Direito Empresarial",
        &[
            "empresa",
            "mei",
            "faturamento",
            "abrir empresa",
            "encerrar",
            "contrato social",
            "sócios",
            "dissolução",
            "sociedade",
        ],
    ),
    (
        "Direito Tributário",
        &[
            "imposto",
            "ir",
            "irpf",
            "isenção",
            "declaração",
            "receita federal",
            "multa",
            "taxa",
        ],
    ),
    (
        "Direito Digital",
        &[
            "deepfake",
            "cyberbullying",
            "vazamento",
            "dados",
            "internet",
            "rede social",
            "fake news",
            "crimes digitais",
        ],
    ),
    (
        "Geral",
        &[
            "lei", "direito", "advogado", "justiça", "direitos", "processo", "ação", "juiz",
        ],
    ),
];

static STANDARD: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::new(STANDARD_AREAS.iter().map(|(area, kws)| (*area, kws.to_vec())))
        .expect("built-in lexicon is valid")
});

impl Lexicon {
    /// The process-wide built-in lexicon.
    pub fn standard() -> &'static Lexicon {
        &STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lexicon_keeps_declaration_order() {
        let labels: Vec<_> = Lexicon::standard().labels().map(|l| l.as_str()).collect();
        assert_eq!(labels.len(), STANDARD_AREAS.len());
        assert_eq!(labels[0], "Direito de Família");
        assert_eq!(labels[1], "Direito Trabalhista");
        assert_eq!(labels.last(), Some(&"Geral"));
    }

    #[test]
    fn test_standard_lexicon_is_shared() {
        assert!(std::ptr::eq(Lexicon::standard(), Lexicon::standard()));
    }
}
