/*!
[`ArgumentationEngine`]: the external-facing entry point. Wraps a fixed
[`ArgumentationSystem`] and a choice of labeller, and turns a list of
observed identifiers into a [`Labels`] table, filtering out any observation
that is inconsistent with an earlier one in the same call.
*/

use log::warn;

use crate::config::LabellerKind;
use crate::misc::log::targets;
use crate::structures::atom::Atom;
use crate::structures::label::Labels;
use crate::structures::system::ArgumentationSystem;
use crate::structures::theory::ArgumentationTheory;
use crate::types::err::ErrorKind;

use crate::procedures::{fourbool, fqas, justification, satisfiability};

/// A fixed argumentation system paired with a labeller choice, ready to
/// answer `update` calls with freshly observed literals.
pub struct ArgumentationEngine<'a> {
    system: &'a ArgumentationSystem,
    labeller: LabellerKind,
}

impl<'a> ArgumentationEngine<'a> {
    pub fn new(system: &'a ArgumentationSystem, labeller: LabellerKind) -> Self {
        ArgumentationEngine { system, labeller }
    }

    /// Labels the theory formed by `self.system` and the consistent prefix of
    /// `observations` (identifiers looked up in the system's language).
    ///
    /// Observations that are contrary to an earlier observation in the same
    /// call are silently dropped, mirroring the Python engine's behaviour —
    /// use [`ArgumentationTheory::try_new`] directly if you need the
    /// inconsistency surfaced as an error instead.
    pub fn update(&self, observations: &[&str]) -> Result<Labels, ErrorKind> {
        let atoms = self.system.atoms_by_identifier(observations)?;
        let consistent = self.consistent_observations(&atoms);
        let theory = ArgumentationTheory::new_unchecked(self.system, consistent);
        Ok(self.label(&theory))
    }

    fn label(&self, theory: &ArgumentationTheory<'_>) -> Labels {
        match self.labeller {
            LabellerKind::FourBool => fourbool::label(theory),
            LabellerKind::Fqas => fqas::label(theory),
            LabellerKind::Justification => justification::label(theory),
            LabellerKind::Satisfiability => satisfiability::label(theory),
        }
    }

    /// Keeps each observation that is not contrary to any observation that
    /// precedes it in `observations`, dropping (and logging) the rest.
    fn consistent_observations(&self, observations: &[Atom]) -> Vec<Atom> {
        let mut kept: Vec<Atom> = Vec::with_capacity(observations.len());
        for &observation in observations {
            let contrary_to_earlier =
                kept.iter().any(|&earlier| self.system.language().contraries(observation).contains(&earlier));
            if contrary_to_earlier {
                warn!(target: targets::ENGINE, "dropping observation {observation} contrary to an earlier one");
            } else {
                kept.push(observation);
            }
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::system::ArgumentationSystemBuilder;

    #[test]
    fn update_rejects_unknown_identifiers() {
        let mut builder = ArgumentationSystemBuilder::new();
        builder.add_literal("a", "a", "not a").unwrap();
        let system = builder.finish().unwrap();
        let engine = ArgumentationEngine::new(&system, LabellerKind::FourBool);

        let err = engine.update(&["nonexistent"]).unwrap_err();
        assert!(matches!(err, ErrorKind::UnknownIdentifier(_)));
    }

    #[test]
    fn update_drops_the_second_of_two_contrary_observations() {
        let mut builder = ArgumentationSystemBuilder::new();
        let (a, not_a) = builder.add_literal("a", "a", "not a").unwrap();
        builder.mark_observable(a, "a?", "a?", 0);
        builder.mark_observable(not_a, "a?", "a?", 0);
        let system = builder.finish().unwrap();
        let engine = ArgumentationEngine::new(&system, LabellerKind::Justification);

        let labels = engine.update(&["a", "~a"]).unwrap();
        assert!(labels.literal(a).defended());
        assert!(!labels.literal(not_a).defended());
    }
}
