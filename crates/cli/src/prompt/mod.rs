//! Interactive operator input.
//!
//! Single values, yes/no confirmations and numbered multi-select menus, all
//! read through a [`Terminal`] so they can be driven from a script in tests.
//!
//! Multi-select answers are lenient: bad tokens are warned about and
//! dropped, never re-prompted.

pub mod input;
pub mod selection;
pub mod terminal;

pub use input::{ask, ask_bool, choose_many};
pub use selection::{parse_selection, split_list, Rejection, Selection};
pub use terminal::{StdTerminal, Terminal};
