use std::{fmt, ops};

/// A boolean constant.
///
/// This is deliberately not `bool`: the only negation it has is logical negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoolConst {
    False,
    True,
}

impl BoolConst {
    pub const fn negate(self) -> Self {
        match self {
            Self::False => Self::True,
            Self::True => Self::False,
        }
    }

    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::True, Self::True) => Self::True,
            _ => Self::False,
        }
    }

    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::False, Self::False) => Self::False,
            _ => Self::True,
        }
    }

    pub const fn implies(self, other: Self) -> Self {
        self.negate().or(other)
    }

    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Row index of this value in a truth table.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::False => 0,
            Self::True => 1,
        }
    }
}

impl From<bool> for BoolConst {
    fn from(x: bool) -> Self {
        if x {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<BoolConst> for bool {
    fn from(x: BoolConst) -> Self {
        x.is_true()
    }
}

impl ops::Not for BoolConst {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl ops::BitAnd for BoolConst {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl ops::BitOr for BoolConst {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl fmt::Display for BoolConst {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::True => "1",
            Self::False => "0",
        };

        write!(f, "{}", s)
    }
}
