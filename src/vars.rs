use std::collections::BTreeSet;
use std::ops::ControlFlow::{self as Flow, Break, Continue};

use contracts::*;

use crate::visit::Visit;
use crate::{Formula, Var};

impl Formula {
    /// Every variable that occurs in this formula.
    pub fn variables(&self) -> BTreeSet<Var> {
        let mut collect = CollectVars(BTreeSet::new());
        let _ = collect.visit_formula(self);
        collect.0
    }

    /// The variable to expand on next: the one reached by always descending into the operand of
    /// a negation or the left operand of a connective.
    ///
    /// Returns `None` exactly when there are no variables, which for a canonical formula means it
    /// is a constant.
    #[debug_ensures(ret.is_none() == self.variables().is_empty())]
    pub fn pivot(&self) -> Option<Var> {
        match LeftmostVar.visit_formula(self) {
            Break(var) => Some(var),
            Continue(()) => None,
        }
    }
}

struct CollectVars(BTreeSet<Var>);

impl Visit for CollectVars {
    type Break = ();

    fn visit_var(&mut self, var: &Var) -> Flow<Self::Break> {
        self.0.insert(var.clone());
        Continue(())
    }
}

struct LeftmostVar;

impl Visit for LeftmostVar {
    type Break = Var;

    fn visit_var(&mut self, var: &Var) -> Flow<Self::Break> {
        Break(var.clone())
    }
}

/// See [`Formula::variables`].
pub fn collect_variables(form: &Formula) -> BTreeSet<Var> {
    form.variables()
}

/// See [`Formula::pivot`].
pub fn pick_pivot(form: &Formula) -> Option<Var> {
    form.pivot()
}
