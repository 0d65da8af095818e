//! Background tasks for watch mode

mod board;
mod refresh;
mod webcam;

pub use board::Dashboard;
pub use refresh::{render_board, run_cycle, spawn_refresh_task};
pub use webcam::spawn_webcam_task;
