//! Conversion to conjunctive and disjunctive normal form by Shannon expansion.
//!
//! For a pivot variable `x`:
//!
//! - CNF: `A(x, y) = (x ∨ A(0, y)) ∧ (¬x ∨ A(1, y))`
//! - DNF: `A(x, y) = (x ∧ A(1, y)) ∨ (¬x ∧ A(0, y))`
//!
//! Both are the same recursion, differing only in which constant is the identity of the outer
//! connective.

use std::collections::BTreeSet;

use contracts::*;
use tracing::{debug, instrument, trace};

use crate::{optimize, Clause, ClauseSet, Formula, Literal, NormalForm};

impl Formula {
    pub fn conjunctive_normal_form(&self) -> ClauseSet {
        to_cnf(self)
    }

    pub fn disjunctive_normal_form(&self) -> ClauseSet {
        to_dnf(self)
    }

    pub fn normal_form(&self, nf: NormalForm) -> ClauseSet {
        let ret = expand(&self.canonicalize(), nf, 0);
        debug!(?nf, clauses = ret.clauses().map_or(0, |c| c.len()), "converted");
        ret
    }
}

#[instrument(level = "debug", skip_all, fields(form = %form))]
pub fn to_cnf(form: &Formula) -> ClauseSet {
    form.normal_form(NormalForm::Conjunctive)
}

#[instrument(level = "debug", skip_all, fields(form = %form))]
pub fn to_dnf(form: &Formula) -> ClauseSet {
    form.normal_form(NormalForm::Disjunctive)
}

/// CNF with unit clauses propagated to a fixed point.
pub fn minimal_cnf(form: &Formula) -> ClauseSet {
    optimize(&to_cnf(form), NormalForm::Conjunctive.absorbing(), true)
}

/// DNF with unit clauses propagated to a fixed point.
pub fn minimal_dnf(form: &Formula) -> ClauseSet {
    optimize(&to_dnf(form), NormalForm::Disjunctive.absorbing(), true)
}

#[debug_ensures(ret.is_canonical())]
fn expand(form: &Formula, nf: NormalForm, depth: usize) -> ClauseSet {
    expand_(form, nf, depth)
}

fn expand_(form: &Formula, nf: NormalForm, depth: usize) -> ClauseSet {
    let var = match form.pivot() {
        Some(var) => var,
        // No variables, so `lookup` is never called.
        None => return ClauseSet::Const(form.eval_with(&|_| nf.identity())),
    };

    trace!(%var, depth, "pivot");

    let positive = Literal::pos(var.clone());
    let negative = Literal::neg(var.clone());

    // `x ∨ A(0, y)` for a CNF, `x ∧ A(1, y)` for a DNF: the positive literal goes with the
    // absorbing value.
    let branches = [(nf.absorbing(), &positive), (nf.identity(), &negative)];

    let mut result = BTreeSet::new();
    for (value, lit) in branches {
        match expand(&form.substitute(&var, value), nf, depth + 1) {
            ClauseSet::Const(c) if c == nf.identity() => {}
            ClauseSet::Const(_) => {
                result.insert(Clause::from([lit.clone()]));
            }
            ClauseSet::Clauses(clauses) => {
                result.extend(clauses.into_iter().map(|mut clause| {
                    clause.insert(lit.clone());
                    clause
                }));
            }
        }
    }

    if result.is_empty() {
        return ClauseSet::Const(nf.identity());
    }

    if is_excluded_middle(&result, &positive, &negative) {
        return ClauseSet::Const(nf.absorbing());
    }

    ClauseSet::Clauses(result)
}

/// `{ {v}, {¬v} }`
fn is_excluded_middle(clauses: &BTreeSet<Clause>, pos: &Literal, neg: &Literal) -> bool {
    clauses.len() == 2
        && clauses.contains(&Clause::from([pos.clone()]))
        && clauses.contains(&Clause::from([neg.clone()]))
}
