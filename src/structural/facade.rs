// Pattern: Facade
// User sign-up touches a repository, an e-mail service and file storage.
// The facade hides that sequence behind one call.

use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

// ============================================================================
// Subsystems
// ============================================================================

struct StoredUser {
    user: RegisteredUser,
    password: String,
}

#[derive(Default)]
pub struct UserRepository {
    users: Mutex<HashMap<String, StoredUser>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new user keyed by e-mail; a second sign-up with the same
    /// address is rejected.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, CatalogError> {
        let mut users = self.users.lock().await;
        if users.contains_key(email) {
            return Err(CatalogError::EmailTaken {
                email: email.to_string(),
            });
        }

        let user = RegisteredUser {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
        };
        users.insert(
            email.to_string(),
            StoredUser {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Option<RegisteredUser> {
        self.users
            .lock()
            .await
            .get(email)
            .map(|stored| stored.user.clone())
    }

    /// `false` for unknown e-mails as well as wrong passwords.
    pub async fn verify_password(&self, email: &str, password: &str) -> bool {
        self.users
            .lock()
            .await
            .get(email)
            .is_some_and(|stored| stored.password == password)
    }

    pub async fn count(&self) -> usize {
        self.users.lock().await.len()
    }
}

#[derive(Default)]
pub struct EmailService {
    outbox: Mutex<Vec<String>>,
}

impl EmailService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn send_welcome_email(&self, email: &str) {
        tokio::task::yield_now().await;
        self.outbox.lock().await.push(email.to_string());
    }

    pub async fn sent(&self) -> Vec<String> {
        self.outbox.lock().await.clone()
    }
}

#[derive(Default)]
pub struct StorageService {
    folders: Mutex<Vec<String>>,
}

impl StorageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_user_folder(&self, user_id: Uuid) -> String {
        tokio::task::yield_now().await;
        let path = format!("users/{}", user_id);
        self.folders.lock().await.push(path.clone());
        path
    }

    pub async fn folders(&self) -> Vec<String> {
        self.folders.lock().await.clone()
    }
}

// ============================================================================
// With the pattern
// ============================================================================

#[derive(Default)]
pub struct UserFacade {
    repository: UserRepository,
    email: EmailService,
    storage: StorageService,
}

impl UserFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, CatalogError> {
        let user = self.repository.create_user(name, email, password).await?;
        self.email.send_welcome_email(email).await;
        let folder = self.storage.create_user_folder(user.id).await;

        info!(user_id = %user.id, %folder, "user registered");
        Ok(user)
    }

    pub fn repository(&self) -> &UserRepository {
        &self.repository
    }

    pub fn email_service(&self) -> &EmailService {
        &self.email
    }

    pub fn storage_service(&self) -> &StorageService {
        &self.storage
    }
}

#[derive(Default)]
pub struct UserController {
    facade: UserFacade,
}

impl UserController {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, CatalogError> {
        self.facade.register_user(name, email, password).await
    }

    pub fn facade(&self) -> &UserFacade {
        &self.facade
    }
}

// ============================================================================
// Without the pattern: the controller wires every subsystem itself
// ============================================================================

#[derive(Debug, Default)]
pub struct ControllerWithoutFacade;

impl ControllerWithoutFacade {
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, CatalogError> {
        let repository = UserRepository::new();
        let email_service = EmailService::new();
        let storage = StorageService::new();

        let user = repository.create_user(name, email, password).await?;
        email_service.send_welcome_email(email).await;
        storage.create_user_folder(user.id).await;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_facade_runs_every_step() {
        let facade = UserFacade::new();
        let user = facade
            .register_user("John Doe", "john@example.com", "securepassword")
            .await
            .unwrap();

        assert_eq!(user.name, "John Doe");
        assert_eq!(
            facade.repository().find_by_email("john@example.com").await,
            Some(user.clone())
        );
        assert!(
            facade
                .repository()
                .verify_password("john@example.com", "securepassword")
                .await
        );
        assert!(!facade.repository().verify_password("john@example.com", "guess").await);
        assert!(!facade.repository().verify_password("jane@example.com", "securepassword").await);
        assert_eq!(facade.email_service().sent().await, vec!["john@example.com"]);
        assert_eq!(
            facade.storage_service().folders().await,
            vec![format!("users/{}", user.id)]
        );
    }

    #[tokio::test]
    async fn test_facade_rejects_duplicate_email() {
        let controller = UserController::new();
        controller
            .register_user("John Doe", "john@example.com", "pw")
            .await
            .unwrap();

        let err = controller
            .register_user("Johnny", "john@example.com", "pw")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmailTaken { .. }));

        // nothing else happened for the rejected sign-up
        assert_eq!(controller.facade().repository().count().await, 1);
        assert_eq!(controller.facade().email_service().sent().await.len(), 1);
        assert_eq!(controller.facade().storage_service().folders().await.len(), 1);
    }

    #[tokio::test]
    async fn test_without_facade_forgets_state() {
        let controller = ControllerWithoutFacade;
        let first = controller
            .register_user("John Doe", "john@example.com", "pw")
            .await
            .unwrap();
        // fresh subsystems per call: the duplicate goes unnoticed
        let second = controller
            .register_user("John Doe", "john@example.com", "pw")
            .await
            .unwrap();
        assert_ne!(first.id, second.id);
    }
}
