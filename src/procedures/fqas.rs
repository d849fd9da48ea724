/*!
The FQAS-2019 labeller: the precursor to [`fourbool`](super::fourbool).
Rather than independently clearing four bits, it assigns one of five
*exact* label values (`⊤`, or one of the four singleton labels) per literal
and rule, recognising strictly fewer stable situations than the four-boolean
labeller. Kept as an internal witness: several concrete scenarios are
interesting precisely because FQAS calls them unstable while
[`fourbool`](super::fourbool) does not.
*/

use std::collections::BTreeSet;

use crate::structures::atom::Atom;
use crate::structures::label::{Labels, StabilityLabel};
use crate::structures::rule::RuleId;
use crate::structures::theory::ArgumentationTheory;

const TOP: StabilityLabel = StabilityLabel::TOP;
const U: StabilityLabel = StabilityLabel::new(true, false, false, false);
const D: StabilityLabel = StabilityLabel::new(false, true, false, false);
const O: StabilityLabel = StabilityLabel::new(false, false, true, false);
const B: StabilityLabel = StabilityLabel::new(false, false, false, true);

/// Runs the FQAS labeller over `theory`.
pub fn label(theory: &ArgumentationTheory<'_>) -> Labels {
    let system = theory.system();
    let language = system.language();

    let mut labels = Labels::seeded(language.atom_count(), system.rules().len(), TOP);
    let mut rules_visited = vec![false; system.rules().len()];

    let mut rules_to_reconsider: BTreeSet<RuleId> = BTreeSet::new();
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

fn color_literal(theory: &ArgumentationTheory<'_>, atom: Atom, labels: &mut Labels) {
    let language = theory.system().language();
    let observable = language.is_observable(atom);
    let observed = theory.is_observed(atom);
    let children = language.children(atom);
    let contraries = language.contraries(atom);

    let contrary_rules = || contraries.iter().flat_map(|&c| language.children(c).iter().copied());

    if observable {
        if observed {
            labels.set_literal(atom, D);
        } else if contraries.iter().any(|&c| theory.is_observed(c)) {
            if children.iter().all(|&r| labels.rule(r) == U) {
                labels.set_literal(atom, U);
            } else if children.iter().any(|&r| [D, O, B].contains(&labels.rule(r))) {
                labels.set_literal(atom, O);
            }
        }
        return;
    }

    if children.iter().all(|&r| labels.rule(r) == U) {
        labels.set_literal(atom, U);
    } else if children.iter().any(|&r| labels.rule(r) == D)
        && contrary_rules().all(|r| labels.rule(r) == U || labels.rule(r) == O)
    {
        labels.set_literal(atom, D);
    } else if children.iter().any(|&r| labels.rule(r) == O)
        && children.iter().all(|&r| labels.rule(r) == U || labels.rule(r) == O)
    {
        labels.set_literal(atom, O);
    } else if children.iter().any(|&r| labels.rule(r) == D || labels.rule(r) == B)
        && contrary_rules().any(|r| labels.rule(r) == D || labels.rule(r) == B)
    {
        labels.set_literal(atom, B);
    } else if children.iter().any(|&r| labels.rule(r) == B)
        && children.iter().all(|&r| labels.rule(r) == U || labels.rule(r) == O || labels.rule(r) == B)
    {
        labels.set_literal(atom, B);
    }
}

fn color_rule(theory: &ArgumentationTheory<'_>, rule_id: RuleId, labels: &mut Labels) {
    let antecedents = theory.system().rule(rule_id).antecedents();

    if antecedents.iter().any(|&a| labels.literal(a) == U) {
        labels.set_rule(rule_id, U);
    } else if antecedents.iter().all(|&a| labels.literal(a) == D) {
        labels.set_rule(rule_id, D);
    } else if antecedents.iter().any(|&a| labels.literal(a) == O)
        && antecedents.iter().all(|&a| [D, O, B].contains(&labels.literal(a)))
    {
        labels.set_rule(rule_id, O);
    } else if antecedents.iter().any(|&a| labels.literal(a) == B)
        && antecedents.iter().all(|&a| labels.literal(a) == D || labels.literal(a) == B)
    {
        labels.set_rule(rule_id, B);
    }
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
        assert_eq!(labels.literal(a), D);
    }

    #[test]
    fn unreachable_observable_stays_top() {
        let mut builder = ArgumentationSystemBuilder::new();
        let (a, not_a) = builder.add_literal("a", "a", "not a").unwrap();
        builder.mark_observable(a, "a?", "a?", 0);
        builder.mark_observable(not_a, "a?", "a?", 0);
        let system = builder.finish().unwrap();
        let theory = ArgumentationTheory::new_unchecked(&system, vec![]);

        let labels = label(&theory);
        assert_eq!(labels.literal(a), TOP);
    }
}
