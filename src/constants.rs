//! Common constants used throughout the jangular application.

/// Template directory names under the templates root
pub const BACKEND_TEMPLATE: &str = "backend";
pub const FRONTEND_TEMPLATE: &str = "frontend";

/// Generated project layout
pub const BACKEND_DIR: &str = "backend";
pub const FRONTEND_DIR: &str = "frontend";
pub const JAVA_SOURCE_ROOT: [&str; 3] = ["src", "main", "java"];
pub const RESOURCES_ROOT: [&str; 3] = ["src", "main", "resources"];
pub const MIGRATION_ROOT: [&str; 2] = ["db", "migration"];

pub const BUILD_MANIFEST: &str = "pom.xml";
pub const ROOT_MANIFEST: &str = "package.json";
pub const BASE_PROPERTIES: &str = "application.properties";

pub const ENTRY_POINT_TEMPLATE: &str = "MainApplication.java.template";
pub const APPLICATION_CLASS_SUFFIX: &str = "Application";
pub const JAVA_EXTENSION: &str = "java";

pub const DEFAULT_GROUP_ID: &str = "com.example";
pub const DEFAULT_ARTIFACT_ID: &str = "backend";
pub const DEFAULT_DB_USERNAME: &str = "devuser";
pub const DEFAULT_DB_PASSWORD: &str = "devpassword";

/// Token lifetimes in milliseconds
pub const JWT_EXPIRATION_MS: u64 = 3_600_000;
pub const JWT_REFRESH_EXPIRATION_MS: u64 = 86_400_000;

/// Account lockout policy
pub const MAX_FAILED_ATTEMPTS: u32 = 5;
pub const LOCK_TIME_DURATION: u32 = 30;

/// Bytes of randomness behind a generated signing secret
pub const SECRET_BYTES: usize = 64;

pub const ROOT_MANIFEST_VERSION: &str = "0.1.0";

/// Environment variable that overrides the templates root
pub const TEMPLATES_ENV: &str = "JANGULAR_TEMPLATES";
