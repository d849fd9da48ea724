/*!
The justification labeller: status under the *current* knowledge base only
(no future observations considered), as opposed to
[`fourbool`](super::fourbool)'s "stable against every future extension"
reading. Seeded by a satisfiable pre-pass private to this module (distinct
from [`satisfiability::label`](super::satisfiability::label), which seeds
[`fourbool`](super::fourbool) instead).
*/

use crate::structures::atom::Atom;
use crate::structures::label::{Labels, StabilityLabel};
use crate::structures::rule::RuleId;
use crate::structures::theory::ArgumentationTheory;

/// Runs the justification labeller over `theory`.
pub fn label(theory: &ArgumentationTheory<'_>) -> Labels {
    let system = theory.system();
    let language = system.language();

    let mut labels = satisfiable_seed(theory);
    let mut rules_visited = vec![false; system.rules().len()];

    let mut rules_to_reconsider: std::collections::BTreeSet<RuleId> = std::collections::BTreeSet::new();
    for atom in language.atoms() {
        if language.is_leaf(atom) || language.is_observable(atom) {
            color_literal(theory, atom, &mut labels);
            rules_to_reconsider.extend(language.parents(atom).iter().copied());
        }
    }

    while let Some(rule_id) = rules_to_reconsider.pop_first() {
        let old_rule_label = labels.rule(rule_id);
        color_rule(theory, rule_id, &mut labels);

        if !rules_visited[rule_id as usize] || labels.rule(rule_id) != old_rule_label {
            let consequent = system.rule(rule_id).consequent();

            let old_literal_label = labels.literal(consequent);
            color_literal(theory, consequent, &mut labels);
            if labels.literal(consequent) != old_literal_label {
                rules_to_reconsider.extend(language.parents(consequent).iter().copied());
            }

            for &contrary in language.contraries(consequent) {
                let old_contrary_label = labels.literal(contrary);
                color_literal(theory, contrary, &mut labels);
                if labels.literal(contrary) != old_contrary_label {
                    rules_to_reconsider.extend(language.parents(contrary).iter().copied());
                }
            }

            rules_visited[rule_id as usize] = true;
        }
    }

    labels
}

/// The pre-processing pass: seeds every literal already in the knowledge
/// base as `(U:False, D:True, O:True, B:True)` and everything else as
/// `(U:True, D:False, O:False, B:False)`, then upgrades a rule (and its
/// consequent) to fully uncertain as soon as none of its antecedents is
/// unsatisfiable.
fn satisfiable_seed(theory: &ArgumentationTheory<'_>) -> Labels {
    let system = theory.system();
    let language = system.language();

    let mut labels = Labels::seeded(language.atom_count(), system.rules().len(), StabilityLabel::BOTTOM);
    for atom in language.atoms() {
        let seed = if theory.is_observed(atom) {
            StabilityLabel::new(false, true, true, true)
        } else {
            StabilityLabel::new(true, false, false, false)
        };
        labels.set_literal(atom, seed);
    }
    for rule in system.rules() {
        labels.set_rule(rule.id(), StabilityLabel::new(true, false, false, false));
    }

    let mut changed = true;
    while changed {
        changed = false;
        for rule in system.rules() {
            if !labels.rule(rule.id()).unsatisfiable() {
                continue;
            }
            let not_unsatisfiable = rule.antecedents().iter().all(|&a| !labels.literal(a).unsatisfiable());
            if not_unsatisfiable {
                labels.set_rule(rule.id(), StabilityLabel::new(false, true, true, true));
                labels.set_literal(rule.consequent(), StabilityLabel::new(false, true, true, true));
                changed = true;
            }
        }
    }

    labels
}

fn color_literal(theory: &ArgumentationTheory<'_>, atom: Atom, labels: &mut Labels) {
    let language = theory.system().language();
    let observable = language.is_observable(atom);
    let observed = theory.is_observed(atom);
    let children = language.children(atom);
    let contraries = language.contraries(atom);
    let in_kb = observed;

    if observable {
        if in_kb {
            labels.literal_mut(atom).clear_blocked(); // L-B-a
            labels.literal_mut(atom).clear_out(); // L-O-a
        } else if contraries.iter().any(|&c| theory.is_observed(c)) {
            labels.literal_mut(atom).clear_blocked(); // L-B-b
            labels.literal_mut(atom).clear_defended(); // L-D-a
        }
    }

    if !in_kb {
        if children.iter().all(|&r| !labels.rule(r).defended()) {
            labels.literal_mut(atom).clear_defended(); // L-D-b
        }
        if contraries
            .iter()
            .flat_map(|&c| language.children(c).iter().copied())
            .any(|r| !labels.rule(r).unsatisfiable() && !labels.rule(r).out())
        {
            labels.literal_mut(atom).clear_defended(); // L-D-c
        }
    }

    if contraries.iter().all(|&c| !theory.is_observed(c)) {
        if children.iter().all(|&r| !labels.rule(r).out()) {
            labels.literal_mut(atom).clear_out(); // L-O-b
        }
        if children.iter().any(|&r| !labels.rule(r).unsatisfiable() && !labels.rule(r).out()) {
            labels.literal_mut(atom).clear_out(); // L-O-c
        }
    }

    if children.iter().all(|&r| !labels.rule(r).defended() && !labels.rule(r).blocked()) {
        labels.literal_mut(atom).clear_blocked(); // L-B-c
    }
    let contrary_rules_never_strong = contraries
        .iter()
        .flat_map(|&c| language.children(c).iter().copied())
        .all(|r| !labels.rule(r).blocked() && !labels.rule(r).defended());
    if children.iter().all(|&r| !labels.rule(r).blocked()) && contrary_rules_never_strong {
        labels.literal_mut(atom).clear_blocked(); // L-B-d
    }
    if children.iter().any(|&r| !labels.rule(r).unsatisfiable() && !labels.rule(r).out() && !labels.rule(r).blocked())
        && contrary_rules_never_strong
    {
        labels.literal_mut(atom).clear_blocked(); // L-B-e
    }
}

fn color_rule(theory: &ArgumentationTheory<'_>, rule_id: RuleId, labels: &mut Labels) {
    let antecedents = theory.system().rule(rule_id).antecedents();

    if antecedents.iter().any(|&a| !labels.literal(a).defended()) {
        labels.rule_mut(rule_id).clear_defended(); // R-D-a
    }
    if antecedents.iter().all(|&a| !labels.literal(a).out()) {
        labels.rule_mut(rule_id).clear_out(); // R-O-a
    }
    if antecedents.iter().all(|&a| !labels.literal(a).blocked()) {
        labels.rule_mut(rule_id).clear_blocked(); // R-B-a
    }
    if antecedents.iter().any(|&a| !labels.literal(a).blocked() && !labels.literal(a).defended()) {
        labels.rule_mut(rule_id).clear_blocked(); // R-B-b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::system::ArgumentationSystemBuilder;

    #[test]
    fn observed_literal_is_defended_not_out_not_blocked() {
        let mut builder = ArgumentationSystemBuilder::new();
        let (a, _) = builder.add_literal("a", "a", "not a").unwrap();
        builder.mark_observable(a, "a?", "a?", 0);
        let system = builder.finish().unwrap();
        let theory = ArgumentationTheory::new_unchecked(&system, vec![a]);

        let labels = label(&theory);
        assert!(labels.literal(a).defended());
        assert!(!labels.literal(a).out());
        assert!(!labels.literal(a).blocked());
    }

    #[test]
    fn unobserved_leaf_with_no_rule_cannot_be_defended() {
        let mut builder = ArgumentationSystemBuilder::new();
        let (a, _) = builder.add_literal("a", "a", "not a").unwrap();
        builder.mark_observable(a, "a?", "a?", 0);
        let system = builder.finish().unwrap();
        let theory = ArgumentationTheory::new_unchecked(&system, vec![]);

        let labels = label(&theory);
        assert!(!labels.literal(a).defended());
    }

    #[test]
    fn u_bit_is_never_cleared_by_this_labeller() {
        let mut builder = ArgumentationSystemBuilder::new();
        let (sent, _) = builder.add_literal("sent", "sent", "not sent").unwrap();
        let (paid, _) = builder.add_literal("paid", "paid", "not paid").unwrap();
        builder.mark_observable(sent, "sent?", "sent?", 0);
        builder.add_rule(vec![sent], paid, "sending implies paying").unwrap();
        let system = builder.finish().unwrap();
        // sent is left unobserved, so the rule's only antecedent stays
        // unsatisfiable in the seed and the rule is never upgraded; since
        // color_literal/color_rule never touch the U bit in this labeller,
        // paid's U can only have been cleared by the seed, which it wasn't.
        let theory = ArgumentationTheory::new_unchecked(&system, vec![]);

        let labels = label(&theory);
        assert!(labels.literal(paid).unsatisfiable());
    }
}
