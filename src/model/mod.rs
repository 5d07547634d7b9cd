//! Pure data structures: the menu, the conversation and the orders it produces.

pub mod conversation;
pub mod menu;
pub mod money;
pub mod order;

pub use conversation::*;
pub use menu::*;
pub use money::*;
pub use order::*;
