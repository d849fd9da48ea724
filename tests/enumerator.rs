//! Integration tests for the smallest-stable-set enumerator against a
//! system slightly richer than the unit-level singleton example in
//! `procedures::enumerator`.

use stability_label::procedures::enumerator::smallest_stable_sets;
use stability_label::procedures::fourbool;
use stability_label::structures::label::StabilityLabel;
use stability_label::structures::system::ArgumentationSystemBuilder;

/// A topic literal `t` supported by a single rule that needs *both* of two
/// observables — neither one alone stabilises it, but the pair does.
#[test]
fn both_observables_are_required_to_stabilise_a_conjunctive_rule() {
    let mut builder = ArgumentationSystemBuilder::new();
    let (o1, _) = builder.add_literal("o1", "o1 holds", "o1 does not hold").unwrap();
    let (o2, _) = builder.add_literal("o2", "o2 holds", "o2 does not hold").unwrap();
    let (t, _) = builder.add_literal("t", "t holds", "t does not hold").unwrap();
    builder.mark_observable(o1, "o1?", "o1?", 0);
    builder.mark_observable(o2, "o2?", "o2?", 0);
    builder.add_rule(vec![o1, o2], t, "both observations support t").unwrap();
    let system = builder.finish().unwrap();

    let sets = smallest_stable_sets(&system, &[t], fourbool::label, StabilityLabel::is_stable);
    assert_eq!(sets, vec![vec![o1, o2]]);
}

/// A topic literal that is already stable with an empty knowledge base
/// (unsatisfiable from the start, a pure support cycle) has the empty
/// observation set as its unique smallest stable set.
#[test]
fn already_stable_topic_needs_no_observations() {
    let mut builder = ArgumentationSystemBuilder::new();
    let (t, _) = builder.add_literal("t", "t holds", "t does not hold").unwrap();
    builder.add_rule(vec![t], t, "t supports itself").unwrap();
    let system = builder.finish().unwrap();

    let sets = smallest_stable_sets(&system, &[t], fourbool::label, StabilityLabel::is_stable);
    assert_eq!(sets, vec![Vec::new()]);
}
