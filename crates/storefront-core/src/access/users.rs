// User directory operations: fetch, filter, and mutate users against
// the upstream directory, returning enveloped canonical users.

use tracing::debug;

use storefront_api::DirectoryClient;
use storefront_api::directory::types::UserWriteBody;

use super::paginate_vec;
use crate::envelope::ApiResponse;
use crate::error::CoreError;
use crate::model::{CreateUserInput, UpdateUserInput, User, UserRole};

/// Server-agnostic list filters. Search and role narrow the fetched
/// collection locally; page/limit slice it and attach meta.
#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Envelope-producing facade over [`DirectoryClient`].
#[derive(Debug, Clone)]
pub struct UserDirectory {
    client: DirectoryClient,
}

impl UserDirectory {
    #[must_use]
    pub fn new(client: DirectoryClient) -> Self {
        Self { client }
    }

    /// Fetch all users, apply filters, and optionally paginate.
    pub async fn get_all(
        &self,
        filters: &UserFilters,
    ) -> Result<ApiResponse<Vec<User>>, CoreError> {
        debug!(?filters, "fetching users");
        let raw = self.client.list_users().await?;
        let mut users: Vec<User> = raw.into_iter().map(User::from).collect();

        if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            // Match the joined display name, not each half, so a term
            // spanning the space ("nne gra") still hits.
            users.retain(|u| {
                u.display_name().to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
                    || u.username
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&needle))
            });
        }
        if let Some(role) = filters.role {
            users.retain(|u| u.role == role);
        }

        let envelope = match (filters.page, filters.limit) {
            (None, None) => ApiResponse::ok(users, "Users fetched successfully"),
            (page, limit) => {
                let (paged, meta) =
                    paginate_vec(users, page.unwrap_or(1), limit.unwrap_or(10));
                ApiResponse::ok(paged, "Users fetched successfully").with_meta(meta)
            }
        };
        Ok(envelope)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<ApiResponse<User>, CoreError> {
        debug!(id, "fetching user");
        let raw = self
            .client
            .get_user(id)
            .await
            .map_err(|e| CoreError::for_entity("User", id, e))?;
        Ok(ApiResponse::ok(User::from(raw), "User fetched successfully"))
    }

    /// Fetch the fixed demo profile.
    pub async fn get_profile(&self) -> Result<ApiResponse<User>, CoreError> {
        debug!("fetching profile");
        let raw = self.client.get_profile().await?;
        Ok(ApiResponse::ok(
            User::from(raw),
            "Profile fetched successfully",
        ))
    }

    pub async fn create(&self, input: &CreateUserInput) -> Result<ApiResponse<User>, CoreError> {
        validate_create(input)?;
        debug!(email = %input.email, "creating user");
        let body = UserWriteBody::from(input);
        let raw = self.client.create_user(&body).await?;
        let mut user = User::from(raw);
        // The echo from the fake upstream loses our role choice.
        user.role = input.role;
        if user.email.is_empty() {
            user.email.clone_from(&input.email);
        }
        if user.first_name.is_empty() && user.last_name.is_empty() {
            user.first_name.clone_from(&input.first_name);
            user.last_name.clone_from(&input.last_name);
        }
        Ok(ApiResponse::ok(user, "User created successfully"))
    }

    pub async fn update(
        &self,
        id: &str,
        input: &UpdateUserInput,
    ) -> Result<ApiResponse<User>, CoreError> {
        if input.is_empty() {
            return Err(CoreError::validation("No fields to update"));
        }
        debug!(id, "updating user");
        let body = UserWriteBody::from(input);
        let raw = self
            .client
            .update_user(id, &body)
            .await
            .map_err(|e| CoreError::for_entity("User", id, e))?;
        let mut user = User::from(raw);
        user.id = id.to_owned();
        if let Some(role) = input.role {
            user.role = role;
        }
        if let Some(status) = input.status {
            user.status = status;
        }
        Ok(ApiResponse::ok(user, "User updated successfully"))
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse<()>, CoreError> {
        debug!(id, "deleting user");
        self.client
            .delete_user(id)
            .await
            .map_err(|e| CoreError::for_entity("User", id, e))?;
        Ok(ApiResponse::ok_empty("User deleted successfully"))
    }
}

fn validate_create(input: &CreateUserInput) -> Result<(), CoreError> {
    if input.email.is_empty() || !input.email.contains('@') {
        return Err(CoreError::validation("A valid email address is required"));
    }
    if input.first_name.is_empty() {
        return Err(CoreError::validation("First name is required"));
    }
    Ok(())
}
