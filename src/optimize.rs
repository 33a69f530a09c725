//! Simplification of clause sets by unit clauses.
//!
//! A unit clause forces its literal. Read as a CNF, `{p}` means `p` must hold, so every other
//! clause containing `p` is satisfied and can go, and `¬p` can be struck from the rest. Read as a
//! DNF the same rewrite is sound by duality: `p ∨ (p ∧ q) = p` and `p ∨ (¬p ∧ q) = p ∨ q`.
//!
//! When the rewrite shows that the set is degenerate, the caller-provided default is returned
//! instead. That is `0` for a CNF and `1` for a DNF.

use std::collections::BTreeSet;
use std::fmt;

use contracts::*;
use tracing::{debug, trace};

use crate::{BoolConst, Clause, ClauseSet, Literal};

enum Collapse {
    /// There are no clauses left.
    Empty,
    /// Both a literal and its negation are unit clauses.
    Contradiction(Literal),
    /// Every literal of some clause was struck out.
    EmptiedClause,
}

impl fmt::Display for Collapse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Collapse::Empty => write!(f, "no clauses"),
            Collapse::Contradiction(lit) => write!(f, "both {} and {} are forced", lit, lit.negate()),
            Collapse::EmptiedClause => write!(f, "emptied a clause"),
        }
    }
}

/// Absorbs unit clauses into the rest of `set`.
///
/// Returns `default` if `set` turns out to be degenerate. With `recursive`, the rewrite is
/// repeated until nothing changes, since striking literals may create new unit clauses.
#[debug_ensures(ret.clauses().map_or(true, |c| !c.is_empty()))]
pub fn optimize(set: &ClauseSet, default: BoolConst, recursive: bool) -> ClauseSet {
    match set {
        ClauseSet::Const(c) => ClauseSet::Const(*c),
        ClauseSet::Clauses(clauses) => optimize_clauses(clauses, default, recursive),
    }
}

fn optimize_clauses(clauses: &BTreeSet<Clause>, default: BoolConst, recursive: bool) -> ClauseSet {
    let mut current = clauses.clone();
    let mut round = 0usize;

    loop {
        let reduced = match absorb_units(&current) {
            Ok(reduced) => reduced,
            Err(reason) => {
                debug!(round, %reason, %default, "clause set collapsed");
                return ClauseSet::Const(default);
            }
        };

        trace!(round, before = current.len(), after = reduced.len(), "absorbed unit clauses");

        if !recursive || reduced == current {
            return ClauseSet::Clauses(reduced);
        }

        current = reduced;
        round += 1;
    }
}

fn absorb_units(clauses: &BTreeSet<Clause>) -> Result<BTreeSet<Clause>, Collapse> {
    if clauses.is_empty() {
        return Err(Collapse::Empty);
    }

    let units: BTreeSet<Literal> = clauses
        .iter()
        .filter(|clause| clause.len() == 1)
        .flatten()
        .cloned()
        .collect();

    if units.is_empty() {
        return Ok(clauses.clone());
    }

    let negated: BTreeSet<Literal> = units.iter().map(Literal::negate).collect();
    if let Some(lit) = units.intersection(&negated).next() {
        return Err(Collapse::Contradiction(lit.clone()));
    }

    let mut result: BTreeSet<Clause> = units.iter().map(|lit| Clause::from([lit.clone()])).collect();

    // Clauses that share a literal with a unit clause are subsumed by it.
    for clause in clauses.iter().filter(|clause| clause.is_disjoint(&units)) {
        let rest: Clause = clause.difference(&negated).cloned().collect();
        if rest.is_empty() {
            return Err(Collapse::EmptiedClause);
        }

        result.insert(rest);
    }

    if result.is_empty() {
        return Err(Collapse::Empty);
    }

    Ok(result)
}
