//! Spring properties generation.
//! Writes the engine-agnostic `application.properties` and exactly one
//! `application-<engine>.properties`, removing the files of the other
//! engines.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::cleanup::CleanupReport;
use crate::config::{DatabaseType, ProjectConfig};
use crate::constants::{
    BASE_PROPERTIES, JWT_EXPIRATION_MS, JWT_REFRESH_EXPIRATION_MS, LOCK_TIME_DURATION,
    MAX_FAILED_ATTEMPTS,
};
use crate::error::Result;
use crate::layout::resources_root;
use crate::processor::write_file;
use crate::renderer::TemplateRenderer;

const BASE_TEMPLATE: &str = r#"spring.application.name={{ projectName }}

# Shared Hibernate Properties
spring.jpa.hibernate.ddl-auto=update
spring.jpa.show-sql=true

# Flyway Configuration
spring.flyway.baseline-on-migrate=true
spring.flyway.enabled=true

# JWT Configuration
app.jwt.secret={{ jwtSecret }}
app.jwt.expiration={{ jwtExpiration }}
app.jwt.refreshExpiration={{ jwtRefreshExpiration }}

# Auth Configuration
auth.failed-attempts-cache=failed-attempts
auth.max-failed-attempts={{ maxFailedAttempts }}
auth.lock-time-duration={{ lockTimeDuration }}

# Database Profile Activation
spring.profiles.active={{ databaseType }}
"#;

const MYSQL_TEMPLATE: &str = r#"# MySQL Database Connection
spring.datasource.url=jdbc:mysql://localhost:{{ dbPort }}/{{ dbName }}?allowPublicKeyRetrieval=true&useSSL=false
spring.datasource.username={{ dbUsername }}
spring.datasource.password={{ dbPassword }}
spring.datasource.driver-class-name={{ driverClass }}

# MySQL-specific Hibernate properties
spring.jpa.database-platform={{ dialect }}

# MySQL-specific Flyway configuration
spring.flyway.locations=classpath:db/migration/{{ databaseType }}
"#;

const POSTGRESQL_TEMPLATE: &str = r#"# PostgreSQL Database Connection
spring.datasource.url=jdbc:postgresql://localhost:{{ dbPort }}/{{ dbName }}
spring.datasource.username={{ dbUsername }}
spring.datasource.password={{ dbPassword }}
spring.datasource.driver-class-name={{ driverClass }}

# PostgreSQL-specific Hibernate properties
spring.jpa.database-platform={{ dialect }}

# PostgreSQL-specific Flyway configuration
spring.flyway.locations=classpath:db/migration/{{ databaseType }}
"#;

const MSSQL_TEMPLATE: &str = r#"# SQL Server Database Connection
spring.datasource.url=jdbc:sqlserver://localhost:{{ dbPort }};databaseName={{ dbName }};encrypt=true;trustServerCertificate=true;
spring.datasource.username={{ dbUsername }}
spring.datasource.password={{ dbPassword }}
spring.datasource.driver-class-name={{ driverClass }}

# SQL Server-specific Hibernate properties
spring.jpa.database-platform={{ dialect }}

# SQL Server-specific Flyway configuration
spring.flyway.locations=classpath:db/migration/{{ databaseType }}
"#;

fn engine_template(engine: DatabaseType) -> &'static str {
    match engine {
        DatabaseType::Mysql => MYSQL_TEMPLATE,
        DatabaseType::Postgresql => POSTGRESQL_TEMPLATE,
        DatabaseType::Mssql => MSSQL_TEMPLATE,
    }
}

/// Context shared by the base and engine templates.
pub fn properties_context(config: &ProjectConfig, jwt_secret: &str) -> serde_json::Value {
    let engine = config.database_type();
    serde_json::json!({
        "projectName": config.project_name(),
        "jwtSecret": jwt_secret,
        "jwtExpiration": JWT_EXPIRATION_MS,
        "jwtRefreshExpiration": JWT_REFRESH_EXPIRATION_MS,
        "maxFailedAttempts": MAX_FAILED_ATTEMPTS,
        "lockTimeDuration": LOCK_TIME_DURATION,
        "databaseType": engine.id(),
        "dbPort": engine.default_port(),
        "dbName": config.db_name(),
        "dbUsername": config.db_username(),
        "dbPassword": config.db_password(),
        "driverClass": engine.driver_class(),
        "dialect": engine.dialect(),
    })
}

/// Paths of the files written by [`generate_config`].
#[derive(Debug)]
pub struct GeneratedConfig {
    pub base: PathBuf,
    pub engine: PathBuf,
    pub cleanup: CleanupReport,
}

/// Generates the properties files for the selected engine.
///
/// # Arguments
/// * `backend` - Root of the generated backend
/// * `config` - Validated project configuration
/// * `jwt_secret` - Secret written into the base file
/// * `renderer` - Renderer for the embedded properties templates
///
/// # Errors
/// Writing either file is fatal; removing the other engines' files is not
/// and is reported through [`GeneratedConfig::cleanup`].
pub fn generate_config<P: AsRef<Path>>(
    backend: P,
    config: &ProjectConfig,
    jwt_secret: &str,
    renderer: &dyn TemplateRenderer,
) -> Result<GeneratedConfig> {
    let resources = resources_root(backend);
    fs::create_dir_all(&resources)?;

    let context = properties_context(config, jwt_secret);
    let engine = config.database_type();

    let base = resources.join(BASE_PROPERTIES);
    write_file(&base, &renderer.render(BASE_TEMPLATE, &context)?)?;
    debug!("{} generated", base.display());

    let engine_file = resources.join(engine.properties_file());
    write_file(&engine_file, &renderer.render(engine_template(engine), &context)?)?;
    debug!("{} generated", engine_file.display());

    let mut cleanup = CleanupReport::default();
    for other in DatabaseType::ALL.into_iter().filter(|other| *other != engine) {
        cleanup.remove_file(&resources.join(other.properties_file()));
    }

    Ok(GeneratedConfig { base, engine: engine_file, cleanup })
}
