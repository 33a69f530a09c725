use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::{short::*, BoolConst, Connective, Formula, Var};

/// A variable or its negation.
///
/// Literals order by variable first, so `p` and `¬p` sit next to each other.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    pub var: Var,
    pub negated: bool,
}

impl Literal {
    pub fn pos(var: Var) -> Self {
        Literal {
            var,
            negated: false,
        }
    }

    pub fn neg(var: Var) -> Self {
        Literal { var, negated: true }
    }

    pub fn negate(&self) -> Self {
        Literal {
            var: self.var.clone(),
            negated: !self.negated,
        }
    }

    pub fn to_formula(&self) -> Formula {
        if self.negated {
            not(var(&self.var))
        } else {
            var(&self.var)
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negated {
            write!(f, "¬{}", self.var)
        } else {
            write!(f, "{}", self.var)
        }
    }
}

pub type Clause = BTreeSet<Literal>;

/// Which way a [`ClauseSet`] is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalForm {
    /// A conjunction of disjunctions.
    Conjunctive,
    /// A disjunction of conjunctions.
    Disjunctive,
}

impl NormalForm {
    /// The value of an empty clause set.
    pub const fn identity(self) -> BoolConst {
        match self {
            Self::Conjunctive => BoolConst::True,
            Self::Disjunctive => BoolConst::False,
        }
    }

    /// The constant that absorbs a clause set during optimization. This is the opposite of
    /// [`NormalForm::identity`].
    pub const fn absorbing(self) -> BoolConst {
        self.identity().negate()
    }

    pub const fn dual(self) -> Self {
        match self {
            Self::Conjunctive => Self::Disjunctive,
            Self::Disjunctive => Self::Conjunctive,
        }
    }

    /// The connective joining the clauses of a set.
    pub const fn outer_connective(self) -> Connective {
        match self {
            Self::Conjunctive => Connective::And,
            Self::Disjunctive => Connective::Or,
        }
    }

    /// The connective joining the literals of a clause.
    pub const fn inner_connective(self) -> Connective {
        self.dual().outer_connective()
    }
}

/// The result of normal form conversion: either a constant or a non-degenerate set of clauses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClauseSet {
    Const(BoolConst),
    Clauses(BTreeSet<Clause>),
}

impl From<BoolConst> for ClauseSet {
    fn from(x: BoolConst) -> Self {
        ClauseSet::Const(x)
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        ClauseSet::Clauses(iter.into_iter().collect())
    }
}

impl ClauseSet {
    pub fn as_const(&self) -> Option<BoolConst> {
        match self {
            ClauseSet::Const(c) => Some(*c),
            ClauseSet::Clauses(_) => None,
        }
    }

    pub fn clauses(&self) -> Option<&BTreeSet<Clause>> {
        match self {
            ClauseSet::Const(_) => None,
            ClauseSet::Clauses(clauses) => Some(clauses),
        }
    }

    /// Returns `false` for the degenerate shapes that should have collapsed to a constant: no
    /// clauses at all, or an empty clause.
    pub fn is_canonical(&self) -> bool {
        match self {
            ClauseSet::Const(_) => true,
            ClauseSet::Clauses(clauses) => {
                !clauses.is_empty() && clauses.iter().all(|clause| !clause.is_empty())
            }
        }
    }

    /// Rebuilds a formula from these clauses, read as `form`.
    pub fn to_formula(&self, form: NormalForm) -> Formula {
        let clauses = match self {
            ClauseSet::Const(c) => return konst(*c),
            ClauseSet::Clauses(clauses) => clauses,
        };

        let literals = |clause: &Clause| clause.iter().map(Literal::to_formula).collect_vec();
        match form {
            NormalForm::Conjunctive => and_(clauses.iter().map(|clause| or_(literals(clause)))),
            NormalForm::Disjunctive => or_(clauses.iter().map(|clause| and_(literals(clause)))),
        }
    }

    /// Displays these clauses read as `form`, e.g. `(p ∨ ¬q) ∧ (r)` for a CNF.
    pub fn display(&self, form: NormalForm) -> impl fmt::Display + '_ {
        DisplayClauses { set: self, form }
    }
}

struct DisplayClauses<'a> {
    set: &'a ClauseSet,
    form: NormalForm,
}

impl fmt::Display for DisplayClauses<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let clauses = match self.set {
            ClauseSet::Const(c) => return write!(f, "{}", c),
            ClauseSet::Clauses(clauses) => clauses,
        };

        let inner = format!(" {} ", self.form.inner_connective());
        let outer = format!(" {} ", self.form.outer_connective());
        let s = clauses
            .iter()
            .map(|clause| format!("({})", clause.iter().join(&inner)))
            .join(&outer);

        write!(f, "{}", s)
    }
}
