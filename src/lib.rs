//! Propositional formulas that simplify as they are built, and their conversion to conjunctive
//! and disjunctive normal form by Shannon expansion.

mod clause;
mod constant;
pub mod error;
mod eval;
mod expand;
mod form;
mod optimize;
pub mod short;
mod subst;
mod var;
mod vars;
pub mod visit;

pub use clause::{Clause, ClauseSet, Literal, NormalForm};
pub use constant::BoolConst;
pub use error::Error;
pub use eval::Assignment;
pub use expand::{minimal_cnf, minimal_dnf, to_cnf, to_dnf};
pub use form::{Connective, Formula};
pub use optimize::optimize;
pub use subst::substitute;
pub use var::Var;
pub use vars::{collect_variables, pick_pivot};

type P<T> = std::sync::Arc<T>;
