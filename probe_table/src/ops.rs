use std::collections::HashMap;

use crate::{Error, ProbingHashTable};

// one call against the table's public contract
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Debug)]
pub enum Op<V> {
    Set(String, V),
    Get(String),
    Remove(String),
}

// what a caller observed from an op
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<V> {
    Set(Option<V>),
    Get(Result<V, Error>),
    Remove(Result<V, Error>),
}

impl<V: Clone> Op<V> {
    pub fn apply(&self, table: &mut ProbingHashTable<V>) -> Outcome<V> {
        match self {
            Op::Set(k, v) => Outcome::Set(table.set(k.as_str(), v.clone())),
            Op::Get(k) => Outcome::Get(table.get(k).cloned()),
            Op::Remove(k) => Outcome::Remove(table.remove(k)),
        }
    }

    // the same op against std's map, which the table must agree with
    pub fn apply_model(&self, model: &mut HashMap<String, V>) -> Outcome<V> {
        let not_found = |k: &str| Error::KeyNotFound(k.to_owned());
        match self {
            Op::Set(k, v) => Outcome::Set(model.insert(k.clone(), v.clone())),
            Op::Get(k) => Outcome::Get(
                model
                    .get(k)
                    .cloned()
                    .ok_or_else(|| not_found(k.as_str())),
            ),
            Op::Remove(k) => {
                Outcome::Remove(model.remove(k).ok_or_else(|| not_found(k.as_str())))
            }
        }
    }
}

/// Replays `ops` against both `table` and a fresh model and returns the index
/// of the first op after which they disagree or the table's invariants fail.
pub fn first_divergence<V: Clone + PartialEq>(
    table: &mut ProbingHashTable<V>,
    ops: &[Op<V>],
) -> Option<usize> {
    let mut model = HashMap::new();
    ops.iter().position(|op| {
        op.apply(table) != op.apply_model(&mut model)
            || table.len() != model.len()
            || !table.invariants()
    })
}
