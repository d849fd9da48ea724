/*!
The four-boolean stability labeller: the crate's main result. Starting from
the [`satisfiability`](super::satisfiability) pre-labelling, repeatedly
clears bits that can no longer be achieved by any future, consistent
extension of the knowledge base, until a fixed point is reached.

Every clause below is transcribed in the same if/elif order as the source
algorithm; the order matters; see [`color_literal`]'s doc comment.
*/

use std::collections::BTreeSet;

use log::trace;

use crate::misc::log::targets;
use crate::structures::atom::Atom;
use crate::structures::label::Labels;
use crate::structures::rule::RuleId;
use crate::structures::theory::ArgumentationTheory;

use super::satisfiability;

/// Runs the four-boolean stability labeller over `theory`.
pub fn label(theory: &ArgumentationTheory<'_>) -> Labels {
    let system = theory.system();
    let language = system.language();

    let mut labels = satisfiability::label(theory);
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
                trace!(target: targets::FOURBOOL, "consequent of rule {rule_id} changed, requeuing its parents");
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

/// Clears bits of `atom`'s label that can no longer be achieved. Clause
/// order is U, D, O, B, each mutating `labels` in place immediately, so
/// later clauses within this call observe earlier clears from *this* call
/// (this sequencing is load-bearing, not cosmetic).
fn color_literal(theory: &ArgumentationTheory<'_>, atom: Atom, labels: &mut Labels) {
    let language = theory.system().language();
    let observable = language.is_observable(atom);
    let observed = theory.is_observed(atom);
    let children = language.children(atom);
    let contraries = language.contraries(atom);

    // L-U
    if observable && observed {
        labels.literal_mut(atom).clear_unsatisfiable(); // L-U-a
    } else if children.iter().any(|&r| !labels.rule(r).unsatisfiable()) {
        labels.literal_mut(atom).clear_unsatisfiable(); // L-U-b
    }

    // L-D
    if observable {
        if contraries.iter().any(|&c| theory.is_observed(c)) {
            labels.literal_mut(atom).clear_defended(); // L-D-a
        }
    } else if children.iter().all(|&r| !labels.rule(r).defended()) {
        labels.literal_mut(atom).clear_defended(); // L-D-b
    } else if contraries
        .iter()
        .flat_map(|&c| language.children(c).iter().copied())
        .any(|r| !labels.rule(r).unsatisfiable() && !labels.rule(r).out())
    {
        labels.literal_mut(atom).clear_defended(); // L-D-c
    }

    // L-O
    if observable {
        if observed {
            labels.literal_mut(atom).clear_out(); // L-O-a
        } else if contraries
            .iter()
            .all(|&c| language.contraries(c).iter().any(|&cc| theory.is_observed(cc)))
        {
            if children.iter().all(|&r| !labels.rule(r).out()) {
                labels.literal_mut(atom).clear_out(); // L-O-b
            } else if children.iter().any(|&r| !labels.rule(r).unsatisfiable() && !labels.rule(r).out()) {
                labels.literal_mut(atom).clear_out(); // L-O-c
            }
        }
    } else if children.iter().all(|&r| !labels.rule(r).out()) {
        labels.literal_mut(atom).clear_out(); // L-O-d
    } else if children.iter().any(|&r| !labels.rule(r).unsatisfiable() && !labels.rule(r).out()) {
        labels.literal_mut(atom).clear_out(); // L-O-e
    }
    if children.iter().all(|&r| !labels.rule(r).defended() && !labels.rule(r).out() && !labels.rule(r).blocked()) {
        labels.literal_mut(atom).clear_out(); // L-O-f
    }

    // L-B
    if observable {
        labels.literal_mut(atom).clear_blocked(); // L-B-a
    } else if children.iter().all(|&r| !labels.rule(r).defended() && !labels.rule(r).blocked()) {
        labels.literal_mut(atom).clear_blocked(); // L-B-b
    } else if contraries
        .iter()
        .flat_map(|&c| language.children(c).iter().copied())
        .all(|r| !labels.rule(r).blocked() && !labels.rule(r).defended())
    {
        if children.iter().all(|&r| !labels.rule(r).blocked()) {
            labels.literal_mut(atom).clear_blocked(); // L-B-c
        } else if children
            .iter()
            .any(|&r| !labels.rule(r).unsatisfiable() && !labels.rule(r).out() && !labels.rule(r).blocked())
        {
            labels.literal_mut(atom).clear_blocked(); // L-B-d
        }
    }
}

/// Clears bits of `rule_id`'s label that can no longer be achieved, based on
/// its antecedents' current labels.
fn color_rule(theory: &ArgumentationTheory<'_>, rule_id: RuleId, labels: &mut Labels) {
    let antecedents = theory.system().rule(rule_id).antecedents();

    if antecedents.iter().all(|&a| !labels.literal(a).unsatisfiable()) {
        labels.rule_mut(rule_id).clear_unsatisfiable(); // R-U-a
    }
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
    use crate::structures::label::StabilityLabel;
    use crate::structures::system::ArgumentationSystemBuilder;

    /// The mini-fraud scenario: a shipment is fraudulent unless either the
    /// wrong product was delivered or the counter-party never delivered.
    fn mini_fraud() -> (crate::structures::system::ArgumentationSystem, Atom, Atom, Atom, Atom, Atom) {
        let mut builder = ArgumentationSystemBuilder::new();
        let (fraud, not_fraud) = builder.add_literal("fraud", "fraud occurred", "no fraud").unwrap();
        let (wrong_product, _) =
            builder.add_literal("wrong_product", "wrong product delivered", "correct product delivered").unwrap();
        let (counter_party_delivered, not_counter_party_delivered) = builder
            .add_literal("counter_party_delivered", "counter-party delivered", "counter-party did not deliver")
            .unwrap();
        let (paid, _) = builder.add_literal("paid", "paid", "not paid").unwrap();
        let (sent, _) = builder.add_literal("sent", "sent", "not sent").unwrap();

        builder.mark_observable(wrong_product, "was the wrong product delivered?", "was the wrong product delivered?", 0);
        builder.mark_observable(counter_party_delivered, "did the counter-party deliver?", "did the counter-party deliver?", 0);
        builder.mark_observable(not_counter_party_delivered, "did the counter-party deliver?", "did the counter-party deliver?", 0);
        builder.mark_observable(paid, "was it paid?", "was it paid?", 0);
        builder.mark_observable(sent, "was it sent?", "was it sent?", 0);

        builder.add_rule(vec![sent, not_counter_party_delivered], fraud, "non-delivery implies fraud").unwrap();
        builder.add_rule(vec![paid, wrong_product], fraud, "wrong product implies fraud").unwrap();
        builder.add_rule(vec![sent, paid], not_fraud, "a completed trade implies no fraud").unwrap();

        let system = builder.finish().unwrap();
        (system, fraud, wrong_product, counter_party_delivered, paid, sent)
    }

    #[test]
    fn empty_knowledge_base_is_fully_uncertain_on_fraud() {
        let (system, fraud, ..) = mini_fraud();
        let theory = ArgumentationTheory::new_unchecked(&system, vec![]);
        let labels = label(&theory);
        assert_eq!(labels.literal(fraud), StabilityLabel::TOP);
    }

    #[test]
    fn sent_and_paid_defend_not_fraud() {
        let (system, fraud, _, _, paid, sent) = mini_fraud();
        let theory = ArgumentationTheory::new_unchecked(&system, vec![sent, paid]);
        let labels = label(&theory);
        let not_fraud = system.language().negation(fraud);
        assert!(labels.literal(not_fraud).defended());
        assert!(!labels.literal(not_fraud).unsatisfiable());
    }

    #[test]
    fn four_bool_is_at_least_as_precise_as_satisfiability() {
        let (system, fraud, ..) = mini_fraud();
        let theory = ArgumentationTheory::new_unchecked(&system, vec![]);
        let sat_labels = satisfiability::label(&theory);
        let fb_labels = label(&theory);
        // Four-bool only ever clears bits relative to the satisfiability seed.
        assert!(!fb_labels.literal(fraud).unsatisfiable() || sat_labels.literal(fraud).unsatisfiable());
    }
}
