/*!
The labelling algorithms and the smallest-stable-set search. Each labeller is
a pure function `&ArgumentationTheory -> Labels`; none retain state between
calls.
*/

pub mod enumerator;
pub mod fourbool;
pub mod fqas;
pub mod justification;
pub mod naive;
pub mod satisfiability;
