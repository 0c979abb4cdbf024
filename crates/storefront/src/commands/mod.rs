//! Command dispatch: bridges CLI args -> core actions -> output formatting.

pub mod products;
pub mod profile;
pub mod users;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::context::AppContext;
use crate::error::CliError;

/// Dispatch an upstream-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &AppContext, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Users(args) => users::handle(ctx, args, global).await,
        Command::Products(args) => products::handle(ctx, args, global).await,
        Command::Profile => profile::handle(ctx, global).await,
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
