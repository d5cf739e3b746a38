use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | HTTP_PORT | 5000 | HTTP service port |
/// | ENVIRONMENT | development | Runtime environment |
/// | ADMIN_USERNAME | admin | Dashboard login name |
/// | ADMIN_PASSWORD | changeme | Dashboard login password |
/// | ASSISTANT_API_KEY | (unset) | Generative-text relay key |
/// | ASSISTANT_MODEL | gemini-2.0-flash | Generative-text model id |
/// | EMAILJS_SERVICE_ID | (unset) | Contact relay service id |
/// | EMAILJS_TEMPLATE_ID | (unset) | Contact relay template id |
/// | EMAILJS_USER_ID | (unset) | Contact relay public key |
/// | COMPANY_NAME | Amman Roofing | Shown to the assistant |
/// | COMPANY_PHONE / COMPANY_EMAIL / COMPANY_ADDRESS | (unset) | Assistant contact lines |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/catalog HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Dashboard login name (single credential)
    pub admin_username: String,
    /// Dashboard login password, argon2-hashed at startup
    pub admin_password: String,
    /// JWT session configuration
    pub jwt: JwtConfig,
    /// Generative-text relay configuration
    pub assistant: AssistantConfig,
    /// Transactional-email relay configuration
    pub mailer: MailerConfig,
    /// Company details fed into the assistant prompt
    pub company: CompanyInfo,
}

/// Generative-text relay settings
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
}

/// Transactional-email relay settings (EmailJS REST API)
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub user_id: Option<String>,
}

impl MailerConfig {
    /// All three identifiers are needed before a send can be attempted
    pub fn credentials(&self) -> Option<(&str, &str, &str)> {
        match (&self.service_id, &self.template_id, &self.user_id) {
            (Some(s), Some(t), Some(u)) => Some((s, t, u)),
            _ => None,
        }
    }
}

/// Company details surfaced through the assistant
#[derive(Debug, Clone)]
pub struct CompanyInfo {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
                tracing::warn!("ADMIN_PASSWORD not set, using the default dashboard password");
                "changeme".into()
            }),
            jwt: JwtConfig::default(),
            assistant: AssistantConfig {
                api_key: std::env::var("ASSISTANT_API_KEY").ok(),
                model: std::env::var("ASSISTANT_MODEL")
                    .unwrap_or_else(|_| "gemini-2.0-flash".into()),
            },
            mailer: MailerConfig {
                service_id: std::env::var("EMAILJS_SERVICE_ID").ok(),
                template_id: std::env::var("EMAILJS_TEMPLATE_ID").ok(),
                user_id: std::env::var("EMAILJS_USER_ID").ok(),
            },
            company: CompanyInfo {
                name: std::env::var("COMPANY_NAME").unwrap_or_else(|_| "Amman Roofing".into()),
                phone: std::env::var("COMPANY_PHONE").ok(),
                email: std::env::var("COMPANY_EMAIL").ok(),
                address: std::env::var("COMPANY_ADDRESS").ok(),
            },
        }
    }

    /// Directory holding the embedded database files
    pub fn database_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("database")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
