use contentdesk_core::ordering::GapPolicy;

use crate::auth::jwt::JwtConfig;

/// Default SQLite database, created next to the binary on first start.
const DEFAULT_DATABASE_URL: &str = "sqlite://contentdesk.db?mode=rwc";

/// Server configuration loaded from environment variables.
///
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection string.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// What happens to surviving positions when an ordered item is deleted.
    pub gap_policy: GapPolicy,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Operator credentials and e-mail allow-list.
    pub admin: AdminConfig,
}

/// Credentials for the single configured operator account.
#[derive(Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    /// Lower-cased e-mail addresses allowed to act as operators.
    pub emails: Vec<String>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("emails", &self.emails)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                             |
    /// |------------------------|-------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                           |
    /// | `PORT`                 | `3000`                              |
    /// | `DATABASE_URL`         | `sqlite://contentdesk.db?mode=rwc`  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                |
    /// | `POSITION_GAP_POLICY`  | `keep`                              |
    /// | `ADMIN_USERNAME`       | **required**                        |
    /// | `ADMIN_PASSWORD`       | **required**                        |
    /// | `ADMIN_EMAILS`         | empty                               |
    ///
    /// JWT settings are documented on [`JwtConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics on malformed values or missing admin credentials.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        let cors_origins = split_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let gap_policy: GapPolicy = std::env::var("POSITION_GAP_POLICY")
            .unwrap_or_else(|_| "keep".into())
            .parse()
            .unwrap_or_else(|e| panic!("POSITION_GAP_POLICY: {e}"));

        let username =
            std::env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME must be set in the environment");
        let password =
            std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set in the environment");
        assert!(!username.is_empty(), "ADMIN_USERNAME must not be empty");
        assert!(!password.is_empty(), "ADMIN_PASSWORD must not be empty");

        let emails = split_list(&std::env::var("ADMIN_EMAILS").unwrap_or_default())
            .into_iter()
            .map(|e| e.to_lowercase())
            .collect();

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            gap_policy,
            jwt: JwtConfig::from_env(),
            admin: AdminConfig {
                username,
                password,
                emails,
            },
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
