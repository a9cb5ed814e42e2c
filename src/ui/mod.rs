//! Terminal UI: the game view, keyboard and pointer input, and the event loop
//! that drives [`Game`](crate::game::Game).

mod app;
pub mod board_widget;
pub mod game_view;

pub use app::App;
