/*!
Rules: the inference steps of an argumentation system.

A rule is a stable numeric identifier paired with a set of antecedent atoms
and a single consequent atom. Rules are compared and hashed by identifier
alone (spec: "Rules are compared by identifier"), never by structure, so two
distinct rules with identical antecedents/consequent remain distinct.
*/

use crate::structures::atom::Atom;

/// A stable identifier for a [`Rule`], unique within a single
/// [`Language`](crate::structures::language::Language).
pub type RuleId = u32;

/// A single inference step: if every antecedent is accepted, the consequent
/// may be derived.
///
/// Antecedents are stored deduplicated (the spec treats them as a set, not a
/// list with repeats) but the caller's original ordering is not otherwise
/// preserved beyond first occurrence.
#[derive(Clone, Debug)]
pub struct Rule {
    id: RuleId,
    antecedents: Vec<Atom>,
    consequent: Atom,
    description: String,
}

impl Rule {
    /// Builds a rule, deduplicating antecedents while preserving first-seen
    /// order (this keeps iteration deterministic, which §4.D's reproducible
    /// worklist discipline depends on).
    pub fn new(id: RuleId, antecedents: Vec<Atom>, consequent: Atom, description: impl Into<String>) -> Self {
        let mut seen = Vec::with_capacity(antecedents.len());
        for atom in antecedents {
            if !seen.contains(&atom) {
                seen.push(atom);
            }
        }
        Rule { id, antecedents: seen, consequent, description: description.into() }
    }

    /// The rule's stable identifier.
    #[inline]
    pub fn id(&self) -> RuleId {
        self.id
    }

    /// The rule's antecedent atoms, deduplicated.
    #[inline]
    pub fn antecedents(&self) -> &[Atom] {
        &self.antecedents
    }

    /// The rule's consequent atom.
    #[inline]
    pub fn consequent(&self) -> Atom {
        self.consequent
    }

    /// The rule's human-readable description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Rule {}

impl PartialOrd for Rule {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Rule {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Rule {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
