/*!
[`ArgumentationSystem`]: a [`Language`] plus its [`Rule`]s, built (and
validated) through [`ArgumentationSystemBuilder`].

The builder mirrors the teacher's `otter_sat::builder` pattern: construction
is mutable and fallible-only-at-the-end, so intermediate states never leak
out as a half-valid `ArgumentationSystem`.
*/

use crate::structures::atom::Atom;
use crate::structures::language::Language;
use crate::structures::rule::{Rule, RuleId};
use crate::types::err::{ErrorKind, MalformedSystem};

/// A language of literals and the rules that connect them; the static part
/// of an [`ArgumentationTheory`](crate::structures::theory::ArgumentationTheory).
#[derive(Clone, Debug)]
pub struct ArgumentationSystem {
    language: Language,
    rules: Vec<Rule>,
    topic_literals: Vec<Atom>,
}

impl ArgumentationSystem {
    #[inline]
    pub fn language(&self) -> &Language {
        &self.language
    }

    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id as usize]
    }

    #[inline]
    pub fn topic_literals(&self) -> &[Atom] {
        &self.topic_literals
    }

    /// All observable atoms in the language, in identifier order.
    pub fn queryables(&self) -> Vec<Atom> {
        self.language.queryables()
    }

    /// The positive subset of [`ArgumentationSystem::queryables`].
    pub fn positive_queryables(&self) -> Vec<Atom> {
        self.language.positive_queryables()
    }

    /// Looks up several identifiers at once, for use by
    /// [`ArgumentationEngine::update`](crate::engine::ArgumentationEngine::update).
    pub fn atoms_by_identifier(&self, identifiers: &[&str]) -> Result<Vec<Atom>, ErrorKind> {
        identifiers
            .iter()
            .map(|id| {
                self.language.atom_by_identifier(id).ok_or_else(|| ErrorKind::UnknownIdentifier((*id).to_string()))
            })
            .collect()
    }
}

/// Builds an [`ArgumentationSystem`], validating its invariants on
/// [`ArgumentationSystemBuilder::finish`].
#[derive(Clone, Debug, Default)]
pub struct ArgumentationSystemBuilder {
    language: Language,
    rules: Vec<Rule>,
    topic_literals: Vec<Atom>,
}

impl ArgumentationSystemBuilder {
    pub fn new() -> Self {
        ArgumentationSystemBuilder { language: Language::new(), rules: Vec::new(), topic_literals: Vec::new() }
    }

    /// Registers a literal and its negation, returning `(positive, negative)`
    /// atoms. `identifier` must not already be registered (positively or
    /// negatively).
    pub fn add_literal(
        &mut self,
        identifier: &str,
        description_if_present: &str,
        description_if_not_present: &str,
    ) -> Result<(Atom, Atom), MalformedSystem> {
        if self.language.atom_by_identifier(identifier).is_some() {
            return Err(MalformedSystem::DuplicateIdentifier(identifier.to_string()));
        }
        Ok(self.language.alloc_pair(identifier, description_if_present, description_if_not_present))
    }

    /// Marks an already-registered atom observable, attaching the short and
    /// long question text shown when it is asked about and a relative
    /// priority (higher asked first).
    pub fn mark_observable(
        &mut self,
        atom: Atom,
        natural_language_query: impl Into<String>,
        long_natural_language_query: impl Into<String>,
        priority: i64,
    ) {
        self.language.mark_observable(atom, natural_language_query, long_natural_language_query, priority);
    }

    /// Marks an already-registered atom as a topic of interest (used by the
    /// smallest-stable-set enumerator).
    pub fn mark_topic(&mut self, atom: Atom) {
        if !self.topic_literals.contains(&atom) {
            self.topic_literals.push(atom);
        }
    }

    /// Declares `a` and `b` contrary to one another, in addition to each
    /// already being contrary to its own negation.
    pub fn add_contrary_pair(&mut self, a: Atom, b: Atom) {
        self.language.add_contrary_pair(a, b);
    }

    /// Adds a rule with the given antecedents and consequent, returning its
    /// stable identifier.
    pub fn add_rule(
        &mut self,
        antecedents: Vec<Atom>,
        consequent: Atom,
        description: impl Into<String>,
    ) -> Result<RuleId, MalformedSystem> {
        for &a in &antecedents {
            if a as usize >= self.language.atom_count() {
                return Err(MalformedSystem::UnknownAntecedent(a.to_string()));
            }
        }
        if consequent as usize >= self.language.atom_count() {
            return Err(MalformedSystem::UnknownConsequent(consequent.to_string()));
        }

        let id = self.rules.len() as RuleId;
        let rule = Rule::new(id, antecedents.clone(), consequent, description);
        self.language.link_rule(id, rule.antecedents(), consequent);
        self.rules.push(rule);
        Ok(id)
    }

    /// Validates the system's invariants and finishes construction:
    /// - every literal's negation is itself a registered literal (holds by
    ///   construction via [`Language::alloc_pair`], checked defensively here),
    /// - every rule's antecedents and consequent are registered atoms (checked
    ///   eagerly in [`ArgumentationSystemBuilder::add_rule`]).
    pub fn finish(self) -> Result<ArgumentationSystem, MalformedSystem> {
        for atom in self.language.atoms() {
            let negation = self.language.negation(atom);
            if negation as usize >= self.language.atom_count() {
                return Err(MalformedSystem::MissingNegation(self.language.identifier(atom).to_string()));
            }
        }

        Ok(ArgumentationSystem { language: self.language, rules: self.rules, topic_literals: self.topic_literals })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_system() -> ArgumentationSystem {
        let mut builder = ArgumentationSystemBuilder::new();
        let (sent, _) = builder.add_literal("sent", "sent", "not sent").unwrap();
        let (paid, _) = builder.add_literal("paid", "paid", "not paid").unwrap();
        builder.mark_observable(sent, "was it sent?", "was it sent?", 0);
        builder.mark_observable(paid, "was it paid?", "was it paid?", 0);
        builder.add_rule(vec![sent], paid, "sending implies paying").unwrap();
        builder.finish().unwrap()
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let mut builder = ArgumentationSystemBuilder::new();
        builder.add_literal("sent", "a", "b").unwrap();
        let err = builder.add_literal("sent", "a", "b").unwrap_err();
        assert_eq!(err, MalformedSystem::DuplicateIdentifier("sent".to_string()));
    }

    #[test]
    fn rule_with_unknown_antecedent_is_rejected() {
        let mut builder = ArgumentationSystemBuilder::new();
        let (paid, _) = builder.add_literal("paid", "a", "b").unwrap();
        let err = builder.add_rule(vec![99], paid, "bogus").unwrap_err();
        assert!(matches!(err, MalformedSystem::UnknownAntecedent(_)));
    }

    #[test]
    fn finished_system_exposes_queryables_and_rules() {
        let system = tiny_system();
        assert_eq!(system.rules().len(), 1);
        assert_eq!(system.queryables().len(), 2);
        assert_eq!(system.positive_queryables().len(), 2);
    }
}
