//! The built-in sheet-music quiz: instrument, genre, level.

use crate::domain::foundation::ValidationError;

use super::{ChoiceOption, OptionKey, Step, StepCatalog, StepId};

/// Instrument labels; their slugs name the combo pages.
pub const INSTRUMENTS: [&str; 12] = [
    "Flauta",
    "Trompete",
    "Trombone",
    "Viola",
    "Violino",
    "Violoncelo",
    "Sax Alto",
    "Sax Tenor",
    "Sax Soprano",
    "Teclado",
    "Piano",
    "Clarinete",
];

const GENRES: [(&str, &str); 6] = [
    ("sertanejo", "Sertanejo"),
    ("classico", "Clássico"),
    ("pop", "Pop"),
    ("jazz", "Jazz"),
    ("gospel", "Gospel"),
    ("outros", "Outros"),
];

const LEVELS: [(&str, &str); 3] = [
    ("iniciante", "Iniciante"),
    ("intermediario", "Intermediário"),
    ("avancado", "Avançado"),
];

fn keyed_options(pairs: &[(&str, &str)]) -> Result<Vec<ChoiceOption>, ValidationError> {
    pairs
        .iter()
        .map(|(key, label)| ChoiceOption::with_key(OptionKey::new(*key)?, *label))
        .collect()
}

/// Builds the three-step music catalog.
pub fn music_catalog() -> Result<StepCatalog, ValidationError> {
    let instruments = INSTRUMENTS
        .iter()
        .map(|label| ChoiceOption::from_label(*label))
        .collect::<Result<Vec<_>, _>>()?;

    StepCatalog::new(vec![
        Step::new(
            StepId::new("instrument")?,
            "Qual instrumento você toca?",
            "Escolha o instrumento principal — isso definirá o seu combo.",
            instruments,
        )?,
        Step::new(
            StepId::new("genre")?,
            "Qual estilo você prefere tocar?",
            "Isso ajuda a personalizar a descrição do seu combo.",
            keyed_options(&GENRES)?,
        )?,
        Step::new(
            StepId::new("level")?,
            "Nível de domínio",
            "Qual seu nível atual no instrumento?",
            keyed_options(&LEVELS)?,
        )?,
    ])
}
