//! Recursive iteration over `Formula`s using the visitor pattern.

use std::ops::ControlFlow::{self as Flow, Continue};

use crate::{Formula, Var};

pub trait Visit {
    type Break;

    fn visit_formula(&mut self, form: &Formula) -> Flow<Self::Break> {
        self.super_formula(form)
    }

    fn visit_var(&mut self, _var: &Var) -> Flow<Self::Break> {
        Continue(())
    }

    /// Visits the children of `form`, left operand first.
    fn super_formula(&mut self, form: &Formula) -> Flow<Self::Break> {
        match form {
            Formula::Const(_) => Continue(()),
            Formula::Var(var) => self.visit_var(var),
            Formula::Not(form) => self.visit_formula(form),
            Formula::Binary(_, left, right) => {
                self.visit_formula(left)?;
                self.visit_formula(right)
            }
        }
    }
}

type Cont<R> = fn(&Formula) -> Flow<R>;
fn cont<R>(_: &Formula) -> Flow<R> {
    Continue(())
}

/// An anonymous `Formula` visitor.
pub struct AnonFormVisitor<A, B> {
    pub pre: A,
    pub post: B,
}

impl<F, R> AnonFormVisitor<F, Cont<R>>
where
    F: FnMut(&Formula) -> Flow<R>,
{
    pub fn pre(pre: F) -> Self {
        Self { pre, post: cont }
    }
}

impl<F, R> AnonFormVisitor<Cont<R>, F>
where
    F: FnMut(&Formula) -> Flow<R>,
{
    pub fn post(post: F) -> Self {
        Self { pre: cont, post }
    }
}

impl<R, A, B> Visit for AnonFormVisitor<A, B>
where
    A: FnMut(&Formula) -> Flow<R>,
    B: FnMut(&Formula) -> Flow<R>,
{
    type Break = R;

    fn visit_formula(&mut self, form: &Formula) -> Flow<Self::Break> {
        (self.pre)(form)?;
        self.super_formula(form)?;
        (self.post)(form)
    }
}
