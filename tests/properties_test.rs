mod common;

use common::{read, write};
use jangular::config::{Answers, DatabaseType, ProjectConfig};
use jangular::properties::generate_config;
use jangular::renderer::MiniJinjaRenderer;
use tempfile::TempDir;

fn config(engine: DatabaseType) -> ProjectConfig {
    let answers = Answers {
        database_type: Some(engine.id().to_string()),
        db_name: Some("shop".to_string()),
        db_username: Some("admin".to_string()),
        db_password: Some("p@ss".to_string()),
        ..Answers::default()
    };
    ProjectConfig::new("acme-shop", answers).unwrap()
}

#[test]
fn test_base_properties() {
    let backend = TempDir::new().unwrap();
    let generated = generate_config(
        backend.path(),
        &config(DatabaseType::Postgresql),
        "c2VjcmV0",
        &MiniJinjaRenderer::new(),
    )
    .unwrap();

    assert_eq!(generated.base, backend.path().join("src/main/resources/application.properties"));
    let base = read(&generated.base);
    assert!(base.contains("spring.application.name=acme-shop"));
    assert!(base.contains("app.jwt.secret=c2VjcmV0"));
    assert!(base.contains("app.jwt.expiration=3600000"));
    assert!(base.contains("app.jwt.refreshExpiration=86400000"));
    assert!(base.contains("auth.max-failed-attempts=5"));
    assert!(base.contains("auth.lock-time-duration=30"));
    assert!(base.contains("spring.profiles.active=postgresql"));
    assert!(!base.contains("datasource"));
}

#[test]
fn test_engine_properties() {
    let expected = [
        (
            DatabaseType::Mysql,
            "spring.datasource.url=jdbc:mysql://localhost:3306/shop?allowPublicKeyRetrieval=true&useSSL=false",
        ),
        (DatabaseType::Postgresql, "spring.datasource.url=jdbc:postgresql://localhost:5432/shop"),
        (
            DatabaseType::Mssql,
            "spring.datasource.url=jdbc:sqlserver://localhost:1433;databaseName=shop;encrypt=true;trustServerCertificate=true;",
        ),
    ];

    for (engine, url) in expected {
        let backend = TempDir::new().unwrap();
        let generated =
            generate_config(backend.path(), &config(engine), "x", &MiniJinjaRenderer::new())
                .unwrap();

        let content = read(&generated.engine);
        assert!(content.contains(url), "{engine}: {content}");
        assert!(content.contains("spring.datasource.username=admin"));
        assert!(content.contains("spring.datasource.password=p@ss"));
        assert!(content.contains(engine.driver_class()));
        assert!(content.contains(engine.dialect()));
        assert!(content.contains(&format!("spring.flyway.locations=classpath:db/migration/{engine}")));
    }
}

#[test]
fn test_other_engine_files_are_removed() {
    let backend = TempDir::new().unwrap();
    let resources = backend.path().join("src/main/resources");
    write(&resources.join("application-mysql.properties"), "stale");
    write(&resources.join("application-postgresql.properties"), "stale");

    let generated = generate_config(
        backend.path(),
        &config(DatabaseType::Mssql),
        "x",
        &MiniJinjaRenderer::new(),
    )
    .unwrap();

    assert!(generated.cleanup.is_clean());
    assert_eq!(generated.cleanup.removed.len(), 2);
    assert!(!resources.join("application-mysql.properties").exists());
    assert!(!resources.join("application-postgresql.properties").exists());
    assert!(resources.join("application-mssql.properties").is_file());
}
