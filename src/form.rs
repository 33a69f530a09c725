use std::ops::ControlFlow::{self as Flow, Break, Continue};
use std::{fmt, ops};

use paste::paste;

use crate::visit::{AnonFormVisitor, Visit};
use crate::{short, BoolConst, Var, P};

/// Declares the binary connectives.
///
/// A connective is nothing but its truth table and the symbol it is displayed with. All
/// simplification is driven by the table, so adding a connective is a single line here.
macro_rules! connectives {
    ($(
        $(#[$meta:meta])*
        $Name:ident = [$ff:ident, $ft:ident, $tf:ident, $tt:ident], $sym:literal;
    )*) => {
        paste! {
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub enum Connective {
                $( $(#[$meta])* $Name, )*
            }

            impl Connective {
                pub const ALL: &'static [Connective] = &[$( Connective::$Name, )*];

                /// The rows are ordered `(F, F)`, `(F, T)`, `(T, F)`, `(T, T)`.
                pub const fn truth_table(self) -> [BoolConst; 4] {
                    match self {
                        $(
                            Connective::$Name => [
                                BoolConst::$ff,
                                BoolConst::$ft,
                                BoolConst::$tf,
                                BoolConst::$tt,
                            ],
                        )*
                    }
                }

                pub const fn symbol(self) -> &'static str {
                    match self {
                        $( Connective::$Name => $sym, )*
                    }
                }
            }

            impl Formula {
                $(
                    pub fn [<is_ $Name:snake>](&self) -> bool {
                        matches!(self, Formula::Binary(Connective::$Name, ..))
                    }
                )*
            }
        }
    };
}

connectives! {
    /// Conjunction.
    And = [False, False, False, True], "∧";
    /// Disjunction.
    Or = [False, True, True, True], "∨";
    /// Material implication.
    Implies = [True, True, False, True], "→";
}

impl Connective {
    pub fn eval(self, left: BoolConst, right: BoolConst) -> BoolConst {
        self.truth_table()[2 * left.index() + right.index()]
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A propositional formula.
///
/// Values are only ever built through the constructors in [`short`], which keep every node in
/// canonical form (see [`Formula::is_canonical`]). Children are reference counted, so cloning
/// is cheap and subtrees are shared between the formulas derived from one another.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Formula {
    Const(BoolConst),
    Var(Var),
    Not(P<Formula>),
    Binary(Connective, P<Formula>, P<Formula>),
}

impl From<BoolConst> for Formula {
    fn from(x: BoolConst) -> Self {
        Formula::Const(x)
    }
}

impl From<bool> for Formula {
    fn from(x: bool) -> Self {
        Formula::Const(x.into())
    }
}

impl From<Var> for Formula {
    fn from(var: Var) -> Self {
        Formula::Var(var)
    }
}

impl ops::Not for Formula {
    type Output = Self;

    fn not(self) -> Self::Output {
        short::not(self)
    }
}

impl ops::BitAnd for Formula {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        short::and(self, rhs)
    }
}

impl ops::BitOr for Formula {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        short::or(self, rhs)
    }
}

/// `a >> b` is `a → b`.
impl ops::Shr for Formula {
    type Output = Self;

    fn shr(self, rhs: Self) -> Self::Output {
        short::implies(self, rhs)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Formula::Const(c) => write!(f, "{}", c),
            Formula::Var(var) => write!(f, "{}", var),

            Formula::Not(inner) if inner.is_binary() => write!(f, "¬({})", inner),
            Formula::Not(inner) => write!(f, "¬{}", inner),

            Formula::Binary(conn, left, right) => {
                for (i, form) in [left, right].into_iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", conn)?;
                    }

                    if form.is_binary() {
                        write!(f, "({})", form)?;
                    } else {
                        write!(f, "{}", form)?;
                    }
                }

                Ok(())
            }
        }
    }
}

impl Formula {
    pub fn is_const(&self) -> bool {
        matches!(self, Formula::Const(_))
    }

    pub fn as_const(&self) -> Option<BoolConst> {
        match self {
            Formula::Const(c) => Some(*c),
            _ => None,
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Formula::Var(_))
    }

    pub fn is_not(&self) -> bool {
        matches!(self, Formula::Not(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Formula::Binary(..))
    }

    /// A variable or the negation of one.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Var(_) => true,
            Formula::Not(inner) => inner.is_var(),
            _ => false,
        }
    }

    /// Returns `true` if one of `self` and `other` is the negation of the other.
    pub fn is_complement_of(&self, other: &Formula) -> bool {
        match (self, other) {
            (Formula::Not(inner), _) if **inner == *other => true,
            (_, Formula::Not(inner)) if **inner == *self => true,
            _ => false,
        }
    }

    /// Returns `true` if the outermost node is irreducible.
    ///
    /// Children are not inspected. See [`Formula::is_canonical_tree`].
    pub fn is_canonical(&self) -> bool {
        match self {
            Formula::Const(_) | Formula::Var(_) => true,
            Formula::Not(inner) => !inner.is_const() && !inner.is_not(),
            Formula::Binary(_, left, right) => {
                !left.is_const() && !right.is_const() && left != right && !left.is_complement_of(right)
            }
        }
    }

    /// Returns `true` if every node is irreducible. This holds for anything built with the smart
    /// constructors, but not necessarily for a formula assembled from the bare variants.
    pub fn is_canonical_tree(&self) -> bool {
        self.visit_with_pre(|form| {
            if form.is_canonical() {
                Continue(())
            } else {
                Break(())
            }
        })
        .is_continue()
    }

    pub fn visit_with_pre<R>(&self, mut f: impl FnMut(&Self) -> Flow<R>) -> Flow<R> {
        AnonFormVisitor::pre(|x: &Self| f(x)).visit_formula(self)
    }

    pub fn visit_with_post<R>(&self, mut f: impl FnMut(&Self) -> Flow<R>) -> Flow<R> {
        AnonFormVisitor::post(|x: &Self| f(x)).visit_formula(self)
    }

    /// True if any part of this formula mentions the given variable.
    pub fn has_var(&self, var: &Var) -> bool {
        matches!(HasVar(var).visit_formula(self), Break(FoundVar))
    }

    /// Number of nodes in this formula.
    pub fn size(&self) -> usize {
        let mut n = 0;
        let _: Flow<()> = self.visit_with_post(|_| {
            n += 1;
            Continue(())
        });

        n
    }
}

struct FoundVar;
struct HasVar<'a>(&'a Var);

impl Visit for HasVar<'_> {
    type Break = FoundVar;

    fn visit_var(&mut self, var: &Var) -> Flow<Self::Break> {
        if var == self.0 {
            Break(FoundVar)
        } else {
            Continue(())
        }
    }
}
