//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from board storage so the scorer and the driver share one definition
//! of a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, check_winner, completes_line, has_won};
