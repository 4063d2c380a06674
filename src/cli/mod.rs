mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_build, handle_intro, handle_leaderboard, handle_search, handle_show, Context,
};
