/*!
(The internal representation of) an atom, i.e. a literal of the argumentation
language.

Unlike a SAT solver's atom/literal split, a literal here already carries its
own polarity (literal `p` and its negation `not p` are *different* literals,
each with their own rules, contraries, and presentation strings), so there is
no separate "variable" layer to index through.

Atoms are allocated in negation-linked pairs: constructing a literal `p`
always also allocates `not p` at the neighbouring index, so that

```text
negation(a) = a ^ 1
```

holds for every atom `a` produced by [`Language`](super::language::Language).
This mirrors the even/odd literal-packing idiom common to DIMACS-oriented SAT
tooling, adapted here to index literals directly rather than atom/polarity
pairs.
*/

/// An atom, i.e. the index of a literal in a [`Language`](super::language::Language).
pub type Atom = u32;

/// The negation of an atom, obtained by flipping its parity bit.
///
/// # Panics
/// Never; this is a pure bit operation. Whether `negation_of(a)` is a valid
/// index in some [`Language`](super::language::Language) is the caller's
/// responsibility.
#[inline]
pub fn negation_of(atom: Atom) -> Atom {
    atom ^ 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_is_involutive() {
        for a in 0..10u32 {
            assert_eq!(negation_of(negation_of(a)), a);
        }
    }

    #[test]
    fn negation_pairs_are_adjacent() {
        assert_eq!(negation_of(0), 1);
        assert_eq!(negation_of(1), 0);
        assert_eq!(negation_of(4), 5);
        assert_eq!(negation_of(5), 4);
    }
}
