//! User command handlers.

use tabled::Tabled;

use storefront_core::access::UserFilters;
use storefront_core::model::{FilterPatch, UpdateUserInput, User};
use storefront_core::query::{self, ListQuery};
use storefront_core::CreateUserInput;

use crate::cli::{GlobalOpts, UserListArgs, UsersArgs, UsersCommand};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl UserRow {
    fn new(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            name: u.display_name(),
            email: u.email.clone(),
            role: u.role.to_string(),
            status: u.status.to_string(),
        }
    }
}

pub(super) fn detail(u: &User) -> String {
    let mut lines = vec![
        format!("ID:        {}", u.id),
        format!("Name:      {}", u.display_name()),
        format!("Email:     {}", u.email),
        format!("Username:  {}", u.username.as_deref().unwrap_or("-")),
        format!("Role:      {}", u.role),
        format!("Status:    {}", u.status),
        format!("Phone:     {}", u.phone.as_deref().unwrap_or("-")),
        format!("Website:   {}", u.website.as_deref().unwrap_or("-")),
    ];
    if let Some(a) = &u.address {
        lines.push(format!("Address:   {}, {} {}, {}", a.street, a.suite, a.city, a.zipcode));
    }
    if let Some(c) = &u.company {
        lines.push(format!("Company:   {}", c.name));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &AppContext, args: UsersArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        UsersCommand::List(list_args) => list(ctx, list_args, global).await,

        UsersCommand::Get { id } => {
            let user = ctx.users.fetch_user(&id).await?;
            let out = output::render_single(&global.output, &user, detail, |u| u.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Create {
            email,
            first_name,
            last_name,
            role,
        } => {
            let input = CreateUserInput {
                email,
                first_name,
                last_name,
                role: role.into(),
                password: None,
            };
            let user = ctx.users.create_user(&input).await?;
            let out = output::render_single(&global.output, &user, detail, |u| u.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Update {
            id,
            email,
            first_name,
            last_name,
            role,
            status,
        } => {
            let input = UpdateUserInput {
                email,
                first_name,
                last_name,
                role: role.map(Into::into),
                status: status.map(Into::into),
            };
            let user = ctx.users.update_user(&id, &input).await?;
            let out = output::render_single(&global.output, &user, detail, |u| u.id.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete user '{id}'?"), global.yes)? {
                return Ok(());
            }
            ctx.users.delete_user(&id).await?;
            Ok(())
        }
    }
}

/// Fetch the collection, install filters, and render one derived page.
async fn list(ctx: &AppContext, args: UserListArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let saved = &ctx.config.saved_filters.users;
    let search = args.list.search.clone().or_else(|| saved.search.clone());
    let facet = args
        .role
        .map(|r| storefront_core::UserRole::from(r).as_str().to_owned())
        .or_else(|| saved.facet.clone());

    if args.list.save_filters {
        let spec = storefront_config::FilterSpec {
            search: search.clone(),
            facet: facet.clone(),
        };
        storefront_config::save_filters("users", &spec)?;
    }

    let patch = FilterPatch {
        search: Some(search.unwrap_or_default()),
        facet: Some(facet),
    };
    ctx.users.set_filters(&patch);
    ctx.users.fetch_users(&UserFilters::default()).await?;

    let limit = args.list.limit.unwrap_or(ctx.config.defaults.limit);
    let state = ctx.store.users.snapshot();
    let view = query::derive_view(&state, ListQuery::new(args.list.page, limit));

    let out = output::render_list(&global.output, &view.items, UserRow::new, |u| u.id.clone());
    output::print_output(&out, global.quiet);
    output::print_page_footer(&view.meta, &global.output, global.quiet);
    Ok(())
}
