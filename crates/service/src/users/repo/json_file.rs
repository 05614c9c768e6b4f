use std::sync::Arc;

use async_trait::async_trait;
use models::{Role, User};
use tracing::{debug, info, instrument, warn};

use crate::errors::ServiceError;
use crate::storage::JsonDocumentStore;
use crate::users::{
    domain::{CreateUserInput, LoginInput, UserSummary},
    repository::UserRepository,
};

/// Users stored in the `users` array of the JSON document.
#[derive(Clone)]
pub struct JsonUserRepository {
    store: Arc<JsonDocumentStore>,
}

impl JsonUserRepository {
    pub fn new(store: Arc<JsonDocumentStore>) -> Self { Self { store } }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        self.store.read("users.list", |doc| doc.users.clone()).await
    }

    #[instrument(skip(self, input), fields(username = ?input.username))]
    async fn create_user(&self, input: CreateUserInput) -> Result<UserSummary, ServiceError> {
        let user = input.into_user()?;
        let summary = self
            .store
            .transact("users.create", |doc| {
                if doc.user_index(&user.username).is_some() {
                    debug!("user exists: {}", user.username);
                    return Err(ServiceError::Conflict(format!("user '{}' already exists", user.username)));
                }
                let summary = UserSummary::from(&user);
                doc.users.push(user);
                Ok(summary)
            })
            .await?;
        info!(username = %summary.username, role = %summary.role, "user_created");
        Ok(summary)
    }

    #[instrument(skip(self))]
    async fn update_user_role(&self, username: &str, role: Role) -> Result<UserSummary, ServiceError> {
        let summary = self
            .store
            .transact("users.update_role", |doc| {
                let idx = doc.user_index(username).ok_or_else(|| ServiceError::not_found("User"))?;
                let user = &mut doc.users[idx];
                user.role = role;
                Ok(UserSummary::from(&*user))
            })
            .await?;
        info!(username = %summary.username, role = %summary.role, "user_role_updated");
        Ok(summary)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, username: &str) -> Result<(), ServiceError> {
        self.store
            .transact("users.delete", |doc| {
                let idx = doc.user_index(username).ok_or_else(|| ServiceError::not_found("User"))?;
                doc.users.remove(idx);
                Ok(())
            })
            .await?;
        info!(%username, "user_deleted");
        Ok(())
    }

    #[instrument(skip(self, input), fields(username = %input.username))]
    async fn authenticate(&self, input: LoginInput) -> Result<UserSummary, ServiceError> {
        let found = self
            .store
            .read("users.authenticate", |doc| {
                doc.users
                    .iter()
                    .find(|u| u.username == input.username && u.password == input.password)
                    .map(UserSummary::from)
            })
            .await?;
        match found {
            Some(summary) => {
                info!(role = %summary.role, "user_logged_in");
                Ok(summary)
            }
            None => {
                warn!("login rejected");
                Err(ServiceError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cleanup, seeded_store, temp_store};

    fn new_user(u: &str, p: &str, r: &str) -> CreateUserInput {
        CreateUserInput { username: Some(u.into()), password: Some(p.into()), role: Some(r.into()) }
    }

    fn login(u: &str, p: &str) -> LoginInput {
        LoginInput { username: u.into(), password: p.into() }
    }

    #[tokio::test]
    async fn duplicate_create_conflicts_until_deleted() -> anyhow::Result<()> {
        let (store, path) = temp_store("users_dup").await?;
        let repo = JsonUserRepository::new(store);

        repo.create_user(new_user("a", "p", "user")).await?;
        let second = repo.create_user(new_user("a", "p", "user")).await;
        assert!(matches!(second, Err(ServiceError::Conflict(_))));

        repo.delete_user("a").await?;
        let third = repo.create_user(new_user("a", "p", "user")).await?;
        assert_eq!(third, UserSummary { username: "a".into(), role: Role::User });
        assert_eq!(repo.list_users().await?.len(), 1);
        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_create_leaves_collection_untouched() -> anyhow::Result<()> {
        let (store, path) = temp_store("users_invalid").await?;
        let repo = JsonUserRepository::new(store);
        let res = repo
            .create_user(CreateUserInput { username: Some("x".into()), ..Default::default() })
            .await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert!(repo.list_users().await?.is_empty());
        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn seeded_admin_authenticates() -> anyhow::Result<()> {
        let (store, path) = seeded_store("users_auth").await?;
        let repo = JsonUserRepository::new(store);

        let ok = repo.authenticate(login("vipin", "admin123")).await?;
        assert_eq!(ok.role, Role::Admin);

        let bad = repo.authenticate(login("vipin", "wrong")).await;
        assert!(matches!(bad, Err(ServiceError::Unauthorized)));

        let unknown = repo.authenticate(login("ghost", "admin123")).await;
        assert!(matches!(unknown, Err(ServiceError::Unauthorized)));

        let empty = repo.authenticate(LoginInput::default()).await;
        assert!(matches!(empty, Err(ServiceError::Unauthorized)));
        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn role_update_keeps_password() -> anyhow::Result<()> {
        let (store, path) = seeded_store("users_role").await?;
        let repo = JsonUserRepository::new(store);

        let updated = repo.update_user_role("rahul", Role::Admin).await?;
        assert_eq!(updated.role, Role::Admin);
        let rahul = repo
            .list_users()
            .await?
            .into_iter()
            .find(|u| u.username == "rahul")
            .ok_or_else(|| anyhow::anyhow!("rahul missing"))?;
        assert_eq!(rahul.password, "user123");
        assert_eq!(rahul.role, Role::Admin);

        let missing = repo.update_user_role("ghost", Role::User).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        cleanup(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_user_is_not_found() -> anyhow::Result<()> {
        let (store, path) = temp_store("users_delete").await?;
        let repo = JsonUserRepository::new(store);
        assert!(matches!(repo.delete_user("ghost").await, Err(ServiceError::NotFound(_))));
        cleanup(&path).await;
        Ok(())
    }
}
