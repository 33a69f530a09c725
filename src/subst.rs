use contracts::*;

use crate::{short::*, BoolConst, Formula, Var};

impl Formula {
    /// Replaces every occurrence of `var` with `value` and simplifies the result.
    ///
    /// Children are rewritten first and each parent is rebuilt through the smart constructors,
    /// so the result is canonical at every level. Subtrees that do not mention `var` are shared
    /// with `self`.
    pub fn substitute(&self, var: &Var, value: BoolConst) -> Formula {
        self.substitute_(var, value).unwrap_or_else(|| self.clone())
    }

    /// `None` if `var` does not occur in `self`.
    fn substitute_(&self, var: &Var, value: BoolConst) -> Option<Formula> {
        match self {
            Formula::Const(_) => None,
            Formula::Var(v) if v == var => Some(konst(value)),
            Formula::Var(_) => None,
            Formula::Not(inner) => inner.substitute_(var, value).map(not),
            Formula::Binary(conn, left, right) => {
                match (left.substitute_(var, value), right.substitute_(var, value)) {
                    (None, None) => None,
                    (l, r) => Some(binary(
                        *conn,
                        l.unwrap_or_else(|| (**left).clone()),
                        r.unwrap_or_else(|| (**right).clone()),
                    )),
                }
            }
        }
    }

    /// Rebuilds every reducible node through the smart constructors.
    ///
    /// Formulas built with the constructors in [`short`](crate::short) are returned unchanged. A
    /// formula assembled from the bare variants may not be: `¬1` becomes `0`, and a formula
    /// without variables always becomes a constant.
    #[debug_ensures(ret.is_canonical_tree())]
    pub fn canonicalize(&self) -> Formula {
        self.canonicalize_().unwrap_or_else(|| self.clone())
    }

    /// `None` if `self` is already canonical.
    fn canonicalize_(&self) -> Option<Formula> {
        match self {
            Formula::Const(_) | Formula::Var(_) => None,
            Formula::Not(inner) => match inner.canonicalize_() {
                Some(inner) => Some(not(inner)),
                None if self.is_canonical() => None,
                None => Some(not((**inner).clone())),
            },
            Formula::Binary(conn, left, right) => {
                match (left.canonicalize_(), right.canonicalize_()) {
                    (None, None) if self.is_canonical() => None,
                    (l, r) => Some(binary(
                        *conn,
                        l.unwrap_or_else(|| (**left).clone()),
                        r.unwrap_or_else(|| (**right).clone()),
                    )),
                }
            }
        }
    }
}

/// See [`Formula::substitute`].
pub fn substitute(form: &Formula, var: &Var, value: BoolConst) -> Formula {
    form.substitute(var, value)
}
