//! Terse constructors for various `Formula`s.
//!
//! These are the only way to build compound formulas. Each one simplifies as it goes, so the
//! result may be a different kind of node than the one asked for: `and(true.into(), p)` is `p`.

use contracts::*;

use crate::{BoolConst, Connective, Formula, Var, P};

pub const fn konst(c: BoolConst) -> Formula {
    Formula::Const(c)
}

pub fn var(var: &Var) -> Formula {
    Formula::Var(var.clone())
}

#[debug_ensures(ret.is_canonical() || !old(form.is_canonical_tree()))]
pub fn not(form: Formula) -> Formula {
    match form {
        Formula::Const(c) => Formula::Const(!c),
        Formula::Not(inner) => P::try_unwrap(inner).unwrap_or_else(|shared| (*shared).clone()),
        form => Formula::Not(P::new(form)),
    }
}

/// Builds `left <conn> right`, evaluating as much of it as the truth table allows.
#[debug_ensures(ret.is_canonical() || !old(left.is_canonical_tree() && right.is_canonical_tree()))]
pub fn binary(conn: Connective, left: Formula, right: Formula) -> Formula {
    reduce_binary(conn, left, right)
}

fn reduce_binary(conn: Connective, left: Formula, right: Formula) -> Formula {
    let table = conn.truth_table();

    match (left.as_const(), right.as_const()) {
        (Some(l), Some(r)) => return Formula::Const(conn.eval(l, r)),
        (Some(l), None) => {
            let row = 2 * l.index();
            return collapse(table[row], table[row + 1], right);
        }
        (None, Some(r)) => {
            let row = r.index();
            return collapse(table[row], table[row + 2], left);
        }
        (None, None) => {}
    }

    // Only rows (F, F) and (T, T) are reachable.
    if left == right {
        return collapse(table[0], table[3], left);
    }

    // Only rows (F, T) and (T, F) are reachable.
    if left.is_complement_of(&right) {
        return collapse(table[1], table[2], left);
    }

    Formula::Binary(conn, P::new(left), P::new(right))
}

/// The formula that evaluates to `if_false` when `operand` is false and to `if_true` otherwise.
fn collapse(if_false: BoolConst, if_true: BoolConst, operand: Formula) -> Formula {
    if if_false == if_true {
        Formula::Const(if_false)
    } else if if_false.is_true() {
        not(operand)
    } else {
        operand
    }
}

pub fn and(a: Formula, b: Formula) -> Formula {
    binary(Connective::And, a, b)
}

pub fn or(a: Formula, b: Formula) -> Formula {
    binary(Connective::Or, a, b)
}

pub fn implies(antecedent: Formula, consequent: Formula) -> Formula {
    binary(Connective::Implies, antecedent, consequent)
}

/// Left-nested conjunction. The empty conjunction is `1`.
pub fn and_(forms: impl IntoIterator<Item = Formula>) -> Formula {
    forms.into_iter().fold(BoolConst::True.into(), and)
}

/// Left-nested disjunction. The empty disjunction is `0`.
pub fn or_(forms: impl IntoIterator<Item = Formula>) -> Formula {
    forms.into_iter().fold(BoolConst::False.into(), or)
}
