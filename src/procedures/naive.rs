/*!
The naive exact oracle: generates every future theory reachable by adding a
consistent subset of [`ArgumentationTheory::future_knowledge_base_candidates`]
to the current knowledge base, runs [`justification::label`](super::justification::label)
on each, and bitwise-ORs the results together. Exponential; exists as ground
truth for testing the propagating labellers against, not for production use.
*/

use log::debug;

use crate::misc::log::targets;
use crate::structures::atom::Atom;
use crate::structures::label::{Labels, StabilityLabel};
use crate::structures::theory::{observations_are_consistent, ArgumentationTheory};

use super::justification;

/// Runs the naive exact oracle over `theory`.
pub fn label(theory: &ArgumentationTheory<'_>) -> Labels {
    let system = theory.system();
    let language = system.language();

    let mut accumulator =
        Labels::seeded(language.atom_count(), system.rules().len(), StabilityLabel::BOTTOM);

    let mut count = 0usize;
    for future in future_theories(theory) {
        let labels = justification::label(&future);
        accumulator.or_assign(&labels);
        count += 1;
    }
    debug!(target: targets::NAIVE, "accumulated over {count} future theories");

    accumulator
}

/// Every theory reachable from `theory` by adding a (possibly empty)
/// consistent subset of its future knowledge base candidates.
///
/// # Panics
/// This walks every subset of the candidates, so it requires fewer than 64
/// of them (a future knowledge base with 64 or more unobserved queryables is
/// outside what this oracle is for — it exists to check the propagating
/// labellers on the small test systems in this crate, not for production
/// use on arbitrarily large ones).
fn future_theories<'a>(theory: &'a ArgumentationTheory<'a>) -> Vec<ArgumentationTheory<'a>> {
    let system = theory.system();
    let mut candidates = theory.future_knowledge_base_candidates();
    candidates.sort();

    assert!(
        candidates.len() < 64,
        "naive::label walks every subset of the future knowledge base candidates \
         and only supports up to 63 of them, got {}",
        candidates.len()
    );

    let mut out = Vec::with_capacity(1 << candidates.len().min(20));
    let total_subsets: u64 = 1u64 << candidates.len();

    for mask in 0..total_subsets {
        let addition: Vec<Atom> =
            candidates.iter().enumerate().filter(|(i, _)| mask & (1 << i) != 0).map(|(_, &a)| a).collect();
        if !observations_are_consistent(system, &addition) {
            continue;
        }
        let mut knowledge_base = theory.knowledge_base().to_vec();
        knowledge_base.extend(addition);
        out.push(ArgumentationTheory::new_unchecked(system, knowledge_base));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::system::ArgumentationSystemBuilder;

    #[test]
    fn observed_literal_is_exactly_defended() {
        let mut builder = ArgumentationSystemBuilder::new();
        let (a, _) = builder.add_literal("a", "a", "not a").unwrap();
        builder.mark_observable(a, "a?", "a?", 0);
        let system = builder.finish().unwrap();
        let theory = ArgumentationTheory::new_unchecked(&system, vec![a]);

        let labels = label(&theory);
        assert_eq!(labels.literal(a), StabilityLabel::new(false, true, false, false));
    }

    #[test]
    fn unobservable_leaf_never_derived_is_always_out_or_unsatisfiable() {
        let mut builder = ArgumentationSystemBuilder::new();
        let (a, not_a) = builder.add_literal("a", "present", "absent").unwrap();
        builder.mark_observable(a, "a?", "a?", 0);
        builder.mark_observable(not_a, "a?", "a?", 0);
        let system = builder.finish().unwrap();
        let theory = ArgumentationTheory::new_unchecked(&system, vec![]);

        let labels = label(&theory);
        // Across every future (a observed, not_a observed, or neither), a is
        // either defended or unsatisfiable, never out or blocked (it is
        // observable and has no rules).
        let label = labels.literal(a);
        assert!(!label.out());
        assert!(!label.blocked());
    }
}
