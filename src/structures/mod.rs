/*!
The domain model: atoms, rules, the language arena, the system/theory pair,
and stability labels.
*/

pub mod atom;
pub mod label;
pub mod language;
pub mod rule;
pub mod system;
pub mod theory;
