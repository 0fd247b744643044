//! User account generation.

use serde::{Deserialize, Serialize};

/// User status options matching the `users.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Disabled,
}

impl UserStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Disabled => "disabled",
        }
    }
}

/// User role options matching the `users.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Member,
    Admin,
}

impl UserRole {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => "MEMBER",
            UserRole::Admin => "ADMIN",
        }
    }
}

/// Generated user data ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUser {
    /// 1-based identifier; matches the row's position in the insert.
    pub id: u32,
    pub username: String,
    pub password_hash: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub status: UserStatus,
    pub role: UserRole,
}

/// Configuration for user generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGenConfig {
    /// Stored verbatim in `password_hash`.
    pub password_placeholder: String,
    /// Phone numbers are this prefix followed by the zero-padded user id.
    pub phone_prefix: String,
    pub email_domain: String,
    /// Every n-th user is disabled; 0 disables none.
    pub disabled_every: u32,
    /// The last `admin_count` users are admins.
    pub admin_count: u32,
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            password_placeholder: "password".to_string(),
            phone_prefix: "1380000".to_string(),
            email_domain: "example.com".to_string(),
            disabled_every: 10,
            admin_count: 2,
        }
    }
}

/// Generates user accounts. Output depends only on the configuration and
/// the user count, so no random source is needed.
#[derive(Debug, Clone)]
pub struct UserGenerator {
    config: UserGenConfig,
}

impl UserGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: UserGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        Self { config }
    }

    /// Generates user `id` out of `total`.
    pub fn generate(&self, id: u32, total: u32) -> GeneratedUser {
        let disabled = self.config.disabled_every != 0 && id % self.config.disabled_every == 0;
        let admin = id > total.saturating_sub(self.config.admin_count);

        GeneratedUser {
            id,
            username: format!("user_{id}"),
            password_hash: self.config.password_placeholder.clone(),
            contact_phone: format!("{}{id:04}", self.config.phone_prefix),
            contact_email: format!("user{id}@{}", self.config.email_domain),
            status: if disabled {
                UserStatus::Disabled
            } else {
                UserStatus::Active
            },
            role: if admin { UserRole::Admin } else { UserRole::Member },
        }
    }

    /// Generates users `1..=count`.
    pub fn generate_batch(&self, count: u32) -> Vec<GeneratedUser> {
        (1..=count).map(|id| self.generate(id, count)).collect()
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}
