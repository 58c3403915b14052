mod game_state;
mod layout;
mod scheduler;

pub use game_state::GameState;
pub use layout::CanvasLayout;
pub use scheduler::{MAX_CATCH_UP, MAX_TICKS_PER_SECOND, MIN_TICKS_PER_SECOND, Scheduler};
