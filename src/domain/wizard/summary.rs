//! CompletionSummary - What the confirmation screen shows.

use serde::Serialize;

use crate::domain::catalog::{OptionKey, StepCatalog, StepId};

use super::AnswerSet;

/// Label shown when the instrument answer cannot be resolved.
pub const FALLBACK_INSTRUMENT_LABEL: &str = "seu instrumento";

/// One answered step, resolved to its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub step_id: StepId,
    pub option_key: Option<OptionKey>,
    pub label: String,
}

/// Display text for a completed run.
///
/// Every answer personalizes the text even though only the first one
/// picks the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    lines: Vec<SummaryLine>,
}

impl CompletionSummary {
    /// Resolves each catalog step's answer to its label.
    ///
    /// Unanswered or unknown keys get an empty label, except the first step
    /// which falls back to [`FALLBACK_INSTRUMENT_LABEL`].
    pub fn from_answers(catalog: &StepCatalog, answers: &AnswerSet) -> Self {
        let lines = catalog
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let key = answers.get(step.id()).cloned();
                let label = key
                    .as_ref()
                    .and_then(|k| step.option(k))
                    .map(|o| o.label().to_string())
                    .unwrap_or_else(|| {
                        if i == 0 {
                            FALLBACK_INSTRUMENT_LABEL.to_string()
                        } else {
                            String::new()
                        }
                    });
                SummaryLine {
                    step_id: step.id().clone(),
                    option_key: key,
                    label,
                }
            })
            .collect();

        Self { lines }
    }

    pub fn lines(&self) -> &[SummaryLine] {
        &self.lines
    }

    /// Label chosen for a given step, if any.
    pub fn label_for(&self, step_id: &StepId) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| &l.step_id == step_id)
            .map(|l| l.label.as_str())
    }

    /// Label of the first step's answer.
    pub fn headline_label(&self) -> &str {
        self.lines
            .first()
            .map(|l| l.label.as_str())
            .unwrap_or(FALLBACK_INSTRUMENT_LABEL)
    }

    /// Headline of the confirmation screen.
    pub fn headline(&self) -> String {
        format!("Você é o músico: {}", self.headline_label())
    }

    /// One-line description, e.g. `Combo montado para Piano • Estilo: Jazz • Nível: Avançado`.
    ///
    /// Assumes the music catalog layout (instrument, genre, level); extra
    /// steps are appended with ` • ` and no prefix.
    pub fn description(&self) -> String {
        let mut parts = vec![format!("Combo montado para {}", self.headline_label())];
        let prefixes = ["Estilo: ", "Nível: "];
        for (i, line) in self.lines.iter().skip(1).enumerate() {
            let prefix = prefixes.get(i).copied().unwrap_or("");
            parts.push(format!("{}{}", prefix, line.label));
        }
        parts.join(" • ")
    }
}
