//! Account repository for database operations.
//!
//! All access to the `users` collection goes through this module; commands
//! never touch the driver directly.

use mongodb::{
    Collection, Database,
    bson::{DateTime, doc},
};

use marlin_core::{AccountRole, AccountStatus, Email};

use super::RepositoryError;
use crate::models::account::Account;

/// Name of the collection holding account documents.
pub const ACCOUNTS_COLLECTION: &str = "users";

/// Repository for account database operations.
pub struct AccountRepository {
    collection: Collection<Account>,
}

impl AccountRepository {
    /// Create a new account repository over `database`.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ACCOUNTS_COLLECTION),
        }
    }

    /// Look up an account by its email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the lookup fails.
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError> {
        let account = self
            .collection
            .find_one(doc! { "email": email.as_str() })
            .await?;
        Ok(account)
    }

    /// Insert a new account document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    pub async fn insert(&self, account: &Account) -> Result<(), RepositoryError> {
        self.collection.insert_one(account).await?;
        Ok(())
    }

    /// Overwrite the stored credential hash and force the account back to an
    /// active admin. The display name is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    pub async fn reset_credentials(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        self.collection
            .update_one(
                doc! { "email": email.as_str() },
                doc! { "$set": {
                    "passwordHash": password_hash,
                    "role": AccountRole::Admin.as_str(),
                    "status": AccountStatus::Active.as_str(),
                    "updatedAt": DateTime::now(),
                }},
            )
            .await?;
        Ok(())
    }
}
