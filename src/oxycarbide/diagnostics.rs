use thiserror::Error;

/// Severity of a diagnostic raised during validation or evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error("{axis} dimension {requested} is below 1, clamped to 1")]
    DimensionClamped { axis: char, requested: i64 },

    #[error(
        "{boundary_layers} boundary plus {transition_layers} transition layers exceed the {max_layers} total layers"
    )]
    LayerBudgetExceeded {
        boundary_layers: i64,
        transition_layers: i64,
        max_layers: i64,
    },

    #[error("layer {layer} lies above the {max_layers}-layer material")]
    LayerAboveMaterial { layer: i64, max_layers: i64 },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::LayerBudgetExceeded { .. } => Severity::Error,
            Diagnostic::DimensionClamped { .. } => Severity::Warning,
            Diagnostic::LayerAboveMaterial { .. } => Severity::Warning,
        }
    }

    /// Emits the diagnostic through the log facade at its severity level.
    pub fn report(&self) {
        match self.severity() {
            Severity::Error => log::error!("{}", self),
            Severity::Warning => log::warn!("{}", self),
        }
    }
}

/// A computed value together with the diagnostics raised while producing it.
///
/// Validation problems do not abort the computation that raised them; the
/// value is still produced from the supplied inputs and the caller decides
/// which diagnostics to treat as fatal. An error-severity diagnostic means
/// the value cannot be trusted.
#[derive(Debug, Clone)]
pub struct Validated<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Validated<T> {
    pub fn clean(value: T) -> Self {
        Validated {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Validated { value, diagnostics }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }
}
