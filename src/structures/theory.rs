/*!
[`ArgumentationTheory`]: an [`ArgumentationSystem`] paired with an observed
knowledge base.
*/

use crate::structures::atom::Atom;
use crate::structures::system::ArgumentationSystem;
use crate::types::err::InconsistentKnowledgeBase;

/// A system plus an ordered, observed knowledge base. Insertion order is
/// preserved so iteration over the knowledge base is reproducible.
#[derive(Clone, Debug)]
pub struct ArgumentationTheory<'a> {
    system: &'a ArgumentationSystem,
    knowledge_base: Vec<Atom>,
}

impl<'a> ArgumentationTheory<'a> {
    /// Builds a theory without checking consistency; used internally by
    /// labellers and the enumerator, which only ever construct theories from
    /// knowledge bases they have already screened.
    pub fn new_unchecked(system: &'a ArgumentationSystem, knowledge_base: Vec<Atom>) -> Self {
        ArgumentationTheory { system, knowledge_base }
    }

    /// Builds a theory, failing if two atoms in `knowledge_base` are contrary
    /// to one another.
    pub fn try_new(
        system: &'a ArgumentationSystem,
        knowledge_base: Vec<Atom>,
    ) -> Result<Self, InconsistentKnowledgeBase> {
        if let Some((first, second)) = first_inconsistent_pair(system, &knowledge_base) {
            return Err(InconsistentKnowledgeBase { first, second });
        }
        Ok(ArgumentationTheory { system, knowledge_base })
    }

    #[inline]
    pub fn system(&self) -> &ArgumentationSystem {
        self.system
    }

    #[inline]
    pub fn knowledge_base(&self) -> &[Atom] {
        &self.knowledge_base
    }

    #[inline]
    pub fn is_observed(&self, atom: Atom) -> bool {
        self.knowledge_base.contains(&atom)
    }

    /// Every queryable atom that is not already observed, and whose
    /// contraries are all also unobserved, i.e. every atom that could enter
    /// the knowledge base of some future, consistent extension of this
    /// theory.
    pub fn future_knowledge_base_candidates(&self) -> Vec<Atom> {
        self.system
            .queryables()
            .into_iter()
            .filter(|&q| {
                !self.is_observed(q)
                    && self.system.language().contraries(q).iter().all(|c| !self.is_observed(*c))
            })
            .collect()
    }
}

/// True iff no two atoms in `observations` are contrary to one another.
pub fn observations_are_consistent(system: &ArgumentationSystem, observations: &[Atom]) -> bool {
    first_inconsistent_pair(system, observations).is_none()
}

fn first_inconsistent_pair(system: &ArgumentationSystem, observations: &[Atom]) -> Option<(Atom, Atom)> {
    for i in 0..observations.len() {
        for j in (i + 1)..observations.len() {
            let (a, b) = (observations[i], observations[j]);
            if system.language().contraries(a).contains(&b) {
                return Some((a, b));
            }
        }
    }
    None
}
