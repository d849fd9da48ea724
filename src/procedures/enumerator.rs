/*!
The smallest-stable-set enumerator: finds every minimum-size set of
observations that makes a given set of topic literals stable, searching
level by level with an a-priori-style join/prune (Agrawal et al., 1994)
over sorted tuples of candidate observations.
*/

use log::debug;

use crate::misc::log::targets;
use crate::structures::atom::Atom;
use crate::structures::label::StabilityLabel;
use crate::structures::system::ArgumentationSystem;
use crate::structures::theory::{observations_are_consistent, ArgumentationTheory};

/// A labeller function, as accepted by [`smallest_stable_sets`].
pub type Labeller = fn(&ArgumentationTheory<'_>) -> crate::structures::label::Labels;

/// Joins sorted `k`-tuples sharing their first `k - 1` elements into sorted
/// `k + 1`-tuples, per the 1994 Agrawal et al. apriori join.
pub fn join_step(item_sets: &[Vec<Atom>]) -> Vec<Vec<Atom>> {
    let mut result = Vec::new();
    let mut i = 0;
    while i < item_sets.len() {
        let (first, last) = item_sets[i].split_at(item_sets[i].len() - 1);
        let last = last[0];

        let mut tail_items = vec![last];
        let mut skip = 1;
        for j in (i + 1)..item_sets.len() {
            let (other_first, other_last) = item_sets[j].split_at(item_sets[j].len() - 1);
            if other_first == first {
                tail_items.push(other_last[0]);
                skip += 1;
            } else {
                break;
            }
        }

        let mut pairs = Vec::new();
        for a in 0..tail_items.len() {
            for b in (a + 1)..tail_items.len() {
                pairs.push((tail_items[a], tail_items[b]));
            }
        }

        for (a, b) in pairs {
            let mut joined = first.to_vec();
            joined.push(a);
            joined.push(b);
            result.push(joined);
        }

        i += skip;
    }
    result
}

/// Drops `(k + 1)`-tuples from `possible_item_sets` whose every `k`-subset
/// (formed by removing one of its first `k - 1` elements) is not present in
/// `item_sets` — the downward-closure property of the support function.
pub fn prune_step(item_sets: &[Vec<Atom>], possible_item_sets: &[Vec<Atom>]) -> Vec<Vec<Atom>> {
    use std::collections::HashSet;
    let known: HashSet<&[Atom]> = item_sets.iter().map(|v| v.as_slice()).collect();

    let mut result = Vec::new();
    'outer: for candidate in possible_item_sets {
        if candidate.len() < 2 {
            result.push(candidate.clone());
            continue;
        }
        for i in 0..(candidate.len() - 2) {
            let mut removed = candidate[..i].to_vec();
            removed.extend_from_slice(&candidate[i + 1..]);
            if !known.contains(removed.as_slice()) {
                continue 'outer;
            }
        }
        result.push(candidate.clone());
    }
    result
}

/// `prune_step(item_sets, join_step(item_sets))`.
pub fn apriori_gen(item_sets: &[Vec<Atom>]) -> Vec<Vec<Atom>> {
    prune_step(item_sets, &join_step(item_sets))
}

/// Finds every smallest set of observations under which every literal in
/// `topics` satisfies `stability_function` when labelled with `labeller`.
pub fn smallest_stable_sets(
    system: &ArgumentationSystem,
    topics: &[Atom],
    labeller: Labeller,
    stability_function: impl Fn(StabilityLabel) -> bool,
) -> Vec<Vec<Atom>> {
    let empty_theory = ArgumentationTheory::new_unchecked(system, Vec::new());
    let initial_labels = labeller(&empty_theory);
    if topics.iter().all(|&t| stability_function(initial_labels.literal(t))) {
        debug!(target: targets::ENUMERATOR, "empty knowledge base already stabilises every topic");
        return vec![Vec::new()];
    }

    let mut smallest_stable_set_list: Vec<Vec<Atom>> = Vec::new();

    let observables: Vec<Atom> = system.queryables();
    let candidates_k_min_1: Vec<Vec<Atom>> = observables.iter().map(|&o| vec![o]).collect();
    let mut unstable_k_min_1: Vec<Vec<Atom>> = Vec::new();

    for obs_set in &candidates_k_min_1 {
        let theory = ArgumentationTheory::new_unchecked(system, obs_set.clone());
        let labels = labeller(&theory);
        if topics.iter().all(|&t| stability_function(labels.literal(t))) {
            smallest_stable_set_list.push(obs_set.clone());
        } else {
            unstable_k_min_1.push(obs_set.clone());
        }
    }

    while !unstable_k_min_1.is_empty() {
        let candidates_k = apriori_gen(&unstable_k_min_1);
        let mut unstable_k = Vec::new();

        for candidate in &candidates_k {
            if !observations_are_consistent(system, candidate) {
                continue;
            }
            let theory = ArgumentationTheory::new_unchecked(system, candidate.clone());
            let labels = labeller(&theory);
            if topics.iter().all(|&t| stability_function(labels.literal(t))) {
                smallest_stable_set_list.push(candidate.clone());
                debug!(target: targets::ENUMERATOR, "found stable set of size {}", candidate.len());
            } else {
                unstable_k.push(candidate.clone());
            }
        }

        unstable_k_min_1 = unstable_k;
    }

    smallest_stable_set_list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_step_matches_the_1994_agrawal_example() {
        let item_sets: Vec<Vec<Atom>> =
            vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4], vec![1, 3, 5], vec![2, 3, 4]];
        let joined = join_step(&item_sets);
        assert_eq!(joined, vec![vec![1, 2, 3, 4], vec![1, 3, 4, 5]]);
    }

    #[test]
    fn prune_step_drops_sets_with_a_missing_subset() {
        let item_sets: Vec<Vec<Atom>> =
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![1, 2, 3], vec![0, 2, 3]];
        let possible = join_step(&item_sets);
        let pruned = prune_step(&item_sets, &possible);
        assert_eq!(pruned, vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn smallest_stable_sets_finds_the_singleton_observation() {
        use crate::structures::system::ArgumentationSystemBuilder;

        let mut builder = ArgumentationSystemBuilder::new();
        let (a, _) = builder.add_literal("a", "a", "not a").unwrap();
        builder.mark_observable(a, "a?", "a?", 0);
        let system = builder.finish().unwrap();

        let labeller: Labeller = super::super::fourbool::label;
        let sets = smallest_stable_sets(&system, &[a], labeller, StabilityLabel::is_contested_stable);
        assert_eq!(sets, vec![vec![a]]);
    }
}
