/*!
Sound approximate stability labelling for structured-argumentation
knowledge bases under incremental observation.

A [`structures::system::ArgumentationSystem`] is a fixed language of
literals and inference rules; pairing it with an observed knowledge base
gives an [`structures::theory::ArgumentationTheory`]. The
[`procedures`] module labels a theory: for every literal and rule it
decides which of four statuses — Unsatisfiable, Defended, Out, Blocked —
remain achievable under *some* future, consistent extension of the
knowledge base. A label with exactly one bit set is stable: no future
observation can change that literal's status again.

[`procedures::fourbool`] is the main result (sound and, outside a small
documented gap, complete). [`procedures::satisfiability`] is its cheap
pre-pass. [`procedures::justification`] and [`procedures::fqas`] answer
related but distinct questions (current-theory-only status, and the
coarser 2019 FQAS precursor, respectively). [`procedures::naive`] is an
exponential exact oracle used to check the others against.
[`procedures::enumerator`] searches for the smallest observation sets that
stabilise a set of topic literals.

[`engine`] wraps a system and a labeller choice into the external-facing
`update(observations) -> Labels` surface; [`wire`] (de)serialises systems
and dataset samples to and from text.
*/

pub mod config;
pub mod engine;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
pub mod wire;

pub use config::{Config, LabellerKind};
pub use engine::ArgumentationEngine;
pub use structures::label::{Labels, StabilityLabel};
pub use structures::system::{ArgumentationSystem, ArgumentationSystemBuilder};
pub use structures::theory::ArgumentationTheory;
pub use types::err::ErrorKind;
