/*!
[`Language`]: the arena of literals shared by an [`ArgumentationSystem`](crate::structures::system::ArgumentationSystem).

Literals are allocated in negation-linked pairs (see [`atom`](super::atom)) so
that every literal's negation is also present in the language, per the
system invariant "every literal has an entry and its negation also has an
entry". Cross-references between literals and rules (`parents`, `children`,
`contraries`) are indices into this same arena, following the spec's design
note to use an arena plus integer indices for the inherently cyclic literal/
rule graph.
*/

use std::collections::HashMap;

use crate::structures::atom::{negation_of, Atom};
use crate::structures::rule::RuleId;

/// One literal's record in the [`Language`] arena.
#[derive(Clone, Debug)]
struct LiteralRecord {
    identifier: String,
    negated: bool,
    negation: Atom,
    contraries: Vec<Atom>,
    parents: Vec<RuleId>,
    children: Vec<RuleId>,
    description_if_present: String,
    description_if_not_present: String,
}

/// Metadata attached only to literals marked observable.
#[derive(Clone, Debug)]
pub struct QueryableInfo {
    pub natural_language_query: String,
    pub long_natural_language_query: String,
    pub priority: i64,
}

/// The arena of literals (both polarities of every atom) shared by an
/// argumentation system.
#[derive(Clone, Debug, Default)]
pub struct Language {
    literals: Vec<LiteralRecord>,
    by_identifier: HashMap<String, Atom>,
    queryables: HashMap<Atom, QueryableInfo>,
}

impl Language {
    pub(crate) fn new() -> Self {
        Language::default()
    }

    /// Allocates a negation-linked pair of literals `identifier` / `not
    /// identifier`, returning (positive atom, negative atom). Panics if
    /// `identifier` is already registered; callers go through
    /// [`ArgumentationSystemBuilder`](crate::structures::system::ArgumentationSystemBuilder),
    /// which turns that into a recoverable error.
    pub(crate) fn alloc_pair(
        &mut self,
        identifier: &str,
        description_if_present: &str,
        description_if_not_present: &str,
    ) -> (Atom, Atom) {
        let pos = self.literals.len() as Atom;
        let neg = pos + 1;

        self.literals.push(LiteralRecord {
            identifier: identifier.to_string(),
            negated: false,
            negation: neg,
            contraries: vec![neg],
            parents: Vec::new(),
            children: Vec::new(),
            description_if_present: description_if_present.to_string(),
            description_if_not_present: description_if_not_present.to_string(),
        });
        self.literals.push(LiteralRecord {
            identifier: format!("~{identifier}"),
            negated: true,
            negation: pos,
            contraries: vec![pos],
            parents: Vec::new(),
            children: Vec::new(),
            description_if_present: description_if_not_present.to_string(),
            description_if_not_present: description_if_present.to_string(),
        });

        self.by_identifier.insert(self.literals[pos as usize].identifier.clone(), pos);
        self.by_identifier.insert(self.literals[neg as usize].identifier.clone(), neg);

        debug_assert_eq!(negation_of(pos), neg);
        (pos, neg)
    }

    pub(crate) fn add_contrary_pair(&mut self, a: Atom, b: Atom) {
        if !self.literals[a as usize].contraries.contains(&b) {
            self.literals[a as usize].contraries.push(b);
        }
        if !self.literals[b as usize].contraries.contains(&a) {
            self.literals[b as usize].contraries.push(a);
        }
    }

    pub(crate) fn mark_observable(
        &mut self,
        atom: Atom,
        natural_language_query: impl Into<String>,
        long_natural_language_query: impl Into<String>,
        priority: i64,
    ) {
        self.queryables.insert(
            atom,
            QueryableInfo {
                natural_language_query: natural_language_query.into(),
                long_natural_language_query: long_natural_language_query.into(),
                priority,
            },
        );
    }

    pub(crate) fn link_rule(&mut self, rule_id: RuleId, antecedents: &[Atom], consequent: Atom) {
        for &a in antecedents {
            self.literals[a as usize].parents.push(rule_id);
        }
        self.literals[consequent as usize].children.push(rule_id);
    }

    /// The number of atoms (both polarities counted) in the language.
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.literals.len()
    }

    /// An iterator over every atom, in allocation order (reproducible:
    /// matches construction order, per spec §5's ordering guarantee).
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        0..self.literals.len() as Atom
    }

    /// Looks up an atom by its identifier string (e.g. `"foo"` or `"~foo"`).
    pub fn atom_by_identifier(&self, identifier: &str) -> Option<Atom> {
        self.by_identifier.get(identifier).copied()
    }

    #[inline]
    pub fn identifier(&self, atom: Atom) -> &str {
        &self.literals[atom as usize].identifier
    }

    #[inline]
    pub fn negated(&self, atom: Atom) -> bool {
        self.literals[atom as usize].negated
    }

    #[inline]
    pub fn negation(&self, atom: Atom) -> Atom {
        self.literals[atom as usize].negation
    }

    #[inline]
    pub fn contraries(&self, atom: Atom) -> &[Atom] {
        &self.literals[atom as usize].contraries
    }

    #[inline]
    pub fn parents(&self, atom: Atom) -> &[RuleId] {
        &self.literals[atom as usize].parents
    }

    #[inline]
    pub fn children(&self, atom: Atom) -> &[RuleId] {
        &self.literals[atom as usize].children
    }

    #[inline]
    pub fn is_leaf(&self, atom: Atom) -> bool {
        self.literals[atom as usize].children.is_empty()
    }

    #[inline]
    pub fn is_observable(&self, atom: Atom) -> bool {
        self.queryables.contains_key(&atom)
    }

    #[inline]
    pub fn queryable_info(&self, atom: Atom) -> Option<&QueryableInfo> {
        self.queryables.get(&atom)
    }

    #[inline]
    pub fn description_if_present(&self, atom: Atom) -> &str {
        &self.literals[atom as usize].description_if_present
    }

    #[inline]
    pub fn description_if_not_present(&self, atom: Atom) -> &str {
        &self.literals[atom as usize].description_if_not_present
    }

    /// All observable atoms, in ascending (identifier-lexicographic, since
    /// atom order is allocation order which follows construction) order.
    pub fn queryables(&self) -> Vec<Atom> {
        let mut out: Vec<Atom> = self.queryables.keys().copied().collect();
        out.sort_by_key(|&a| self.identifier(a).to_string());
        out
    }

    /// The non-negated subset of [`Language::queryables`].
    pub fn positive_queryables(&self) -> Vec<Atom> {
        self.queryables().into_iter().filter(|&a| !self.negated(a)).collect()
    }
}
