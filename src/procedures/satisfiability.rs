/*!
The satisfiability pre-labeller: a cheap worklist pass that decides, for
each literal and rule, whether *any* argument for it could possibly exist at
all. Used standalone (via [`label`]) and as the seed for
[`fourbool`](super::fourbool)'s main propagation.
*/

use log::trace;

use crate::misc::log::targets;
use crate::structures::label::{Labels, StabilityLabel};
use crate::structures::rule::RuleId;
use crate::structures::theory::ArgumentationTheory;

/// Runs the satisfiability pre-labeller over `theory`.
pub fn label(theory: &ArgumentationTheory<'_>) -> Labels {
    let system = theory.system();
    let language = system.language();

    let mut labels = Labels::seeded(language.atom_count(), system.rules().len(), StabilityLabel::BOTTOM);

    for atom in language.atoms() {
        let unreachable = language.is_observable(atom)
            && language.contraries(atom).iter().all(|&c| !theory.is_observed(c));
        let seed = if unreachable { StabilityLabel::TOP } else { StabilityLabel::new(true, false, false, false) };
        labels.set_literal(atom, seed);
    }
    for rule in system.rules() {
        labels.set_rule(rule.id(), StabilityLabel::new(true, false, false, false));
    }

    let mut changed = true;
    while changed {
        changed = false;
        for rule in system.rules() {
            changed = visit(theory, rule.id(), &mut labels) || changed;
        }
    }

    labels
}

fn visit(theory: &ArgumentationTheory<'_>, rule_id: RuleId, labels: &mut Labels) -> bool {
    if labels.rule(rule_id).defended() {
        return false;
    }
    let rule = theory.system().rule(rule_id);
    let all_antecedents_defended = rule.antecedents().iter().all(|&a| labels.literal(a).defended());
    if all_antecedents_defended {
        trace!(target: targets::SATISFIABILITY, "rule {rule_id} and its consequent become satisfiable");
        labels.set_rule(rule_id, StabilityLabel::TOP);
        labels.set_literal(rule.consequent(), StabilityLabel::TOP);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::system::ArgumentationSystemBuilder;

    #[test]
    fn leaf_with_no_argument_stays_unsatisfiable() {
        let mut builder = ArgumentationSystemBuilder::new();
        let (a, _) = builder.add_literal("a", "a", "not a").unwrap();
        builder.mark_observable(a, "is a?", "is a?", 0);
        let system = builder.finish().unwrap();
        let theory = ArgumentationTheory::new_unchecked(&system, vec![]);

        let labels = label(&theory);
        assert!(labels.literal(a).unsatisfiable());
        assert!(!labels.literal(a).defended());
    }

    #[test]
    fn rule_derived_consequent_becomes_satisfiable() {
        let mut builder = ArgumentationSystemBuilder::new();
        let (sent, _) = builder.add_literal("sent", "sent", "not sent").unwrap();
        let (paid, _) = builder.add_literal("paid", "paid", "not paid").unwrap();
        builder.mark_observable(sent, "sent?", "sent?", 0);
        builder.add_rule(vec![sent], paid, "sending implies paying").unwrap();
        let system = builder.finish().unwrap();
        let theory = ArgumentationTheory::new_unchecked(&system, vec![sent]);

        let labels = label(&theory);
        assert_eq!(labels.literal(paid), StabilityLabel::TOP);
    }
}
