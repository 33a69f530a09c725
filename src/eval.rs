use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::{BoolConst, ClauseSet, Formula, Literal, NormalForm, Var};

/// Values for some set of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment(BTreeMap<Var, BoolConst>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, var: Var, value: BoolConst) -> &mut Self {
        self.0.insert(var, value);
        self
    }

    pub fn get(&self, var: &Var) -> Option<BoolConst> {
        self.0.get(var).copied()
    }

    /// Every total assignment to `vars`, `2^n` of them.
    pub fn all(vars: &BTreeSet<Var>) -> impl Iterator<Item = Assignment> + '_ {
        let values = [BoolConst::False, BoolConst::True];

        // `multi_cartesian_product` of no iterators is empty, but there is one assignment to no
        // variables.
        let products: Box<dyn Iterator<Item = Vec<BoolConst>> + '_> = if vars.is_empty() {
            Box::new(std::iter::once(vec![]))
        } else {
            Box::new(vars.iter().map(move |_| values).multi_cartesian_product())
        };

        products.map(move |row| vars.iter().cloned().zip(row).collect())
    }
}

impl FromIterator<(Var, BoolConst)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, BoolConst)>>(iter: I) -> Self {
        Assignment(iter.into_iter().collect())
    }
}

impl Literal {
    pub fn eval(&self, env: &Assignment) -> Option<BoolConst> {
        let value = env.get(&self.var)?;
        Some(if self.negated { !value } else { value })
    }
}

impl Formula {
    /// Evaluates this formula. Returns `None` if `env` is missing one of its variables.
    pub fn eval(&self, env: &Assignment) -> Option<BoolConst> {
        match self {
            Formula::Const(c) => Some(*c),
            Formula::Var(var) => env.get(var),
            Formula::Not(form) => form.eval(env).map(BoolConst::negate),
            Formula::Binary(conn, left, right) => Some(conn.eval(left.eval(env)?, right.eval(env)?)),
        }
    }

    /// Evaluates this formula, looking every variable up with `lookup`.
    pub fn eval_with(&self, lookup: &impl Fn(&Var) -> BoolConst) -> BoolConst {
        match self {
            Formula::Const(c) => *c,
            Formula::Var(var) => lookup(var),
            Formula::Not(form) => !form.eval_with(lookup),
            Formula::Binary(conn, left, right) => {
                conn.eval(left.eval_with(lookup), right.eval_with(lookup))
            }
        }
    }
}

impl ClauseSet {
    /// Evaluates these clauses read as `form`. A CNF holds if every clause has a true literal; a
    /// DNF holds if some clause has only true literals.
    pub fn eval(&self, form: NormalForm, env: &Assignment) -> Option<BoolConst> {
        let clauses = match self {
            ClauseSet::Const(c) => return Some(*c),
            ClauseSet::Clauses(clauses) => clauses,
        };

        let (outer, inner) = (form.outer_connective(), form.inner_connective());

        clauses.iter().try_fold(form.identity(), |acc, clause| {
            let value = clause
                .iter()
                .try_fold(form.absorbing(), |acc, lit| Some(inner.eval(acc, lit.eval(env)?)))?;
            Some(outer.eval(acc, value))
        })
    }
}
