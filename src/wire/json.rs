/*!
Persisted JSON (de)serialisation for an [`ArgumentationSystem`].

Shape mirrors `argumentation_system_json_writer.py` /
`argumentation_system_json_reader.py`: `{literals: {id: {...}}, rules: [...],
topic_literals: [...]}`, string identifiers used as cross-references instead
of the in-process atom indices (which are only stable within one process).

Reconstruction relies on this crate's own identifier convention — every
literal's negation is its identifier prefixed with `~` — rather than
treating the two polarities of a literal as fully independent records the
way the original's `Literal`/`Queryable` classes do. A round trip through
this module is therefore exact for systems built by this crate, but will
reject a hand-written JSON file whose `~`-negation doesn't match its
`negation_str`.
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::structures::atom::Atom;
use crate::structures::system::{ArgumentationSystem, ArgumentationSystemBuilder};
use crate::types::err::{ErrorKind, ParseError};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedLiteral {
    is_observable: bool,
    literal_str: String,
    description_if_present: String,
    description_if_not_present: String,
    contraries_str: Vec<String>,
    negation_str: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    natural_language_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    long_natural_language_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    priority: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedRule {
    id: u32,
    antecedents_str: Vec<String>,
    consequent_str: String,
    rule_description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedSystem {
    literals: BTreeMap<String, PersistedLiteral>,
    rules: Vec<PersistedRule>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    topic_literals: Option<Vec<String>>,
}

/// Serialises `system` to the persisted JSON shape.
pub fn to_json(system: &ArgumentationSystem) -> String {
    let language = system.language();

    let mut literals = BTreeMap::new();
    for atom in language.atoms() {
        let identifier = language.identifier(atom).to_string();
        let contraries_str =
            language.contraries(atom).iter().map(|&c| language.identifier(c).to_string()).collect();
        let negation_str = language.identifier(language.negation(atom)).to_string();

        let queryable = language.queryable_info(atom);
        literals.insert(
            identifier.clone(),
            PersistedLiteral {
                is_observable: queryable.is_some(),
                literal_str: identifier,
                description_if_present: language.description_if_present(atom).to_string(),
                description_if_not_present: language.description_if_not_present(atom).to_string(),
                contraries_str,
                negation_str,
                natural_language_query: queryable.map(|q| q.natural_language_query.clone()),
                long_natural_language_query: queryable.map(|q| q.long_natural_language_query.clone()),
                priority: queryable.map(|q| q.priority),
            },
        );
    }

    let rules = system
        .rules()
        .iter()
        .map(|rule| PersistedRule {
            id: rule.id(),
            antecedents_str: rule.antecedents().iter().map(|&a| language.identifier(a).to_string()).collect(),
            consequent_str: language.identifier(rule.consequent()).to_string(),
            rule_description: rule.description().to_string(),
        })
        .collect();

    let topic_literals = if system.topic_literals().is_empty() {
        None
    } else {
        Some(system.topic_literals().iter().map(|&a| language.identifier(a).to_string()).collect())
    };

    let persisted = PersistedSystem { literals, rules, topic_literals };
    serde_json::to_string(&persisted).expect("PersistedSystem always serialises")
}

/// Parses the persisted JSON shape back into an [`ArgumentationSystem`].
pub fn from_json(text: &str) -> Result<ArgumentationSystem, ErrorKind> {
    let persisted: PersistedSystem =
        serde_json::from_str(text).map_err(|_| ErrorKind::Parse(ParseError::Malformed))?;

    let mut builder = ArgumentationSystemBuilder::new();
    let mut atoms_by_identifier: BTreeMap<String, Atom> = BTreeMap::new();

    for (identifier, literal) in &persisted.literals {
        if identifier.starts_with('~') {
            continue;
        }
        let (positive, negative) = builder
            .add_literal(identifier, &literal.description_if_present, &literal.description_if_not_present)
            .map_err(ErrorKind::from)?;
        atoms_by_identifier.insert(identifier.clone(), positive);
        atoms_by_identifier.insert(literal.negation_str.clone(), negative);

        if literal.is_observable {
            mark_observable_from_persisted(&mut builder, positive, literal)?;
        }
        if let Some(negated) = persisted.literals.get(&literal.negation_str) {
            if negated.is_observable {
                mark_observable_from_persisted(&mut builder, negative, negated)?;
            }
        }
    }

    for (identifier, literal) in &persisted.literals {
        let &atom = atoms_by_identifier
            .get(identifier)
            .ok_or_else(|| ErrorKind::UnknownIdentifier(identifier.clone()))?;
        for contrary_str in &literal.contraries_str {
            if *contrary_str == literal.negation_str {
                continue;
            }
            let &contrary = atoms_by_identifier
                .get(contrary_str)
                .ok_or_else(|| ErrorKind::UnknownIdentifier(contrary_str.clone()))?;
            builder.add_contrary_pair(atom, contrary);
        }
    }

    for rule in &persisted.rules {
        let antecedents = rule
            .antecedents_str
            .iter()
            .map(|id| atoms_by_identifier.get(id).copied().ok_or_else(|| ErrorKind::UnknownIdentifier(id.clone())))
            .collect::<Result<Vec<Atom>, ErrorKind>>()?;
        let consequent = atoms_by_identifier
            .get(&rule.consequent_str)
            .copied()
            .ok_or_else(|| ErrorKind::UnknownIdentifier(rule.consequent_str.clone()))?;
        builder.add_rule(antecedents, consequent, rule.rule_description.clone()).map_err(ErrorKind::from)?;
    }

    if let Some(topics) = &persisted.topic_literals {
        for topic in topics {
            let &atom =
                atoms_by_identifier.get(topic).ok_or_else(|| ErrorKind::UnknownIdentifier(topic.clone()))?;
            builder.mark_topic(atom);
        }
    }

    builder.finish().map_err(ErrorKind::from)
}

fn mark_observable_from_persisted(
    builder: &mut ArgumentationSystemBuilder,
    atom: Atom,
    literal: &PersistedLiteral,
) -> Result<(), ErrorKind> {
    let nlq = literal.natural_language_query.clone().ok_or(ErrorKind::Parse(ParseError::Malformed))?;
    let long_nlq =
        literal.long_natural_language_query.clone().ok_or(ErrorKind::Parse(ParseError::Malformed))?;
    let priority = literal.priority.ok_or(ErrorKind::Parse(ParseError::Malformed))?;
    builder.mark_observable(atom, nlq, long_nlq, priority);
    Ok(())
}
