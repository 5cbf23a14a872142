//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from the
//! state machine so they can be tested on hand-built positions.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{has_won, in_winning_line, winner};
