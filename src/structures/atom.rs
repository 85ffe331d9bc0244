/*!
(The representation of) an atom, aka. a 'variable'.

Each atom names a single fact of the form 'entity *e* holds card *c*'.

Atoms are positive, starting from 1, so that an atom paired with a polarity may be written as a signed integer (the sign indicating polarity) with no ambiguity about 0.

```rust
# use clue_sat::structures::atom::Atom;
let atoms = (1..=147).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 7 * 21);
```

# Notes
- Which fact an atom names is fixed by the [encoder](crate::db::encoder).
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;
