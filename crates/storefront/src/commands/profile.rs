//! Profile command handler: shows the fixed "current user" record.

use crate::cli::GlobalOpts;
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::users;

pub async fn handle(ctx: &AppContext, global: &GlobalOpts) -> Result<(), CliError> {
    let envelope = ctx.directory.get_profile().await?;
    let Some(user) = envelope.into_data() else {
        return Err(CliError::BadResponse {
            message: "Profile response carried no user".into(),
        });
    };
    let out = output::render_single(&global.output, &user, users::detail, |u| u.id.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}
