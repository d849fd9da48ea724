/*!
Configuration for the argumentation engine.

Kept intentionally small: the core labellers take no configuration at all
(they are pure functions of a theory), so this only covers the choices an
external caller makes about *which* labeller to run and how hard bounded
search procedures may try before giving up.
*/

/// Which labeller an [`ArgumentationEngine`](crate::engine::ArgumentationEngine)
/// should run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabellerKind {
    /// The four-boolean stability labeller (§4.D). The main result.
    FourBool,

    /// The FQAS-2019 precursor labeller, strictly less precise than
    /// [`LabellerKind::FourBool`].
    Fqas,

    /// The justification (acceptability) labeller (§4.E): status under the
    /// current theory only, no future observations considered.
    Justification,

    /// The satisfiability pre-labeller (§4.C) alone.
    Satisfiability,
}

/// The primary configuration structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Which labeller [`ArgumentationEngine::update`](crate::engine::ArgumentationEngine::update)
    /// runs by default.
    pub default_labeller: LabellerKind,

    /// Retry budget for bounded generation procedures before raising
    /// [`GeneratorExhausted`](crate::types::err::ErrorKind::GeneratorExhausted).
    pub generator_retry_budget: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { default_labeller: LabellerKind::FourBool, generator_retry_budget: 25 }
    }
}
