//! Interactive docker-compose menu for generated projects.

use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::external::ExternalCommand;
use crate::prompt::Prompter;

const COMPOSE: &str = "docker-compose";
const PRODUCTION_FILE: &str = "docker-compose.prod.yml";

/// Actions offered by the menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockerAction {
    StartAll,
    StartDatabases,
    StartBackend,
    StartFrontend,
    StartProduction,
    StopProduction,
    ShowContainers,
    ShowLogs,
    CheckHealth,
    StopAll,
    ResetVolumes,
    Exit,
}

impl DockerAction {
    pub const ALL: [DockerAction; 12] = [
        DockerAction::StartAll,
        DockerAction::StartDatabases,
        DockerAction::StartBackend,
        DockerAction::StartFrontend,
        DockerAction::StartProduction,
        DockerAction::StopProduction,
        DockerAction::ShowContainers,
        DockerAction::ShowLogs,
        DockerAction::CheckHealth,
        DockerAction::StopAll,
        DockerAction::ResetVolumes,
        DockerAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DockerAction::StartAll => "Start all services",
            DockerAction::StartDatabases => "Start only databases",
            DockerAction::StartBackend => "Start backend only",
            DockerAction::StartFrontend => "Start frontend only",
            DockerAction::StartProduction => "Start in production mode",
            DockerAction::StopProduction => "Stop production services",
            DockerAction::ShowContainers => "Show running containers",
            DockerAction::ShowLogs => "Show service logs",
            DockerAction::CheckHealth => "Check DB health",
            DockerAction::StopAll => "Stop all services",
            DockerAction::ResetVolumes => "Delete volumes (reset DBs)",
            DockerAction::Exit => "Exit",
        }
    }

    /// The compose invocation for actions that map to a single command.
    /// Interactive actions (logs, health, reset) and `Exit` return `None`.
    pub fn command(&self) -> Option<ExternalCommand> {
        let command = match self {
            DockerAction::StartAll => ExternalCommand::new(COMPOSE, &["up", "-d"]),
            DockerAction::StartDatabases => ExternalCommand::new(
                COMPOSE,
                &["up", "-d", "mysql", "postgres", "phpmyadmin", "pgadmin"],
            ),
            DockerAction::StartBackend => ExternalCommand::new(COMPOSE, &["up", "-d", "backend"]),
            DockerAction::StartFrontend => {
                ExternalCommand::new(COMPOSE, &["up", "-d", "frontend"])
            }
            DockerAction::StartProduction => {
                ExternalCommand::new(COMPOSE, &["-f", PRODUCTION_FILE, "up", "-d"])
            }
            DockerAction::StopProduction => {
                ExternalCommand::new(COMPOSE, &["-f", PRODUCTION_FILE, "down"])
            }
            DockerAction::ShowContainers => ExternalCommand::new(COMPOSE, &["ps"]),
            DockerAction::StopAll => ExternalCommand::new(COMPOSE, &["down"]),
            DockerAction::ShowLogs
            | DockerAction::CheckHealth
            | DockerAction::ResetVolumes
            | DockerAction::Exit => return None,
        };
        Some(command)
    }

    fn shows_access_info(&self) -> bool {
        matches!(self, DockerAction::StartAll | DockerAction::StartDatabases)
    }
}

impl fmt::Display for DockerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Services whose logs can be viewed; `None` means all services.
pub const LOG_SERVICES: [(&str, Option<&str>); 5] = [
    ("All services", None),
    ("Backend", Some("backend")),
    ("Frontend", Some("frontend")),
    ("MySQL", Some("mysql")),
    ("PostgreSQL", Some("postgres")),
];

pub fn logs_command(service: Option<&str>) -> ExternalCommand {
    match service {
        Some(service) => ExternalCommand::new(COMPOSE, &["logs", service]),
        None => ExternalCommand::new(COMPOSE, &["logs"]),
    }
}

/// Health probes run inside the database containers.
pub fn health_checks() -> Vec<(&'static str, ExternalCommand)> {
    vec![
        (
            "MySQL",
            ExternalCommand::new(
                COMPOSE,
                &["exec", "mysql", "mysqladmin", "ping", "-h", "localhost", "-u", "root", "-prootpassword"],
            ),
        ),
        (
            "PostgreSQL",
            ExternalCommand::new(COMPOSE, &["exec", "postgres", "pg_isready", "-U", "postgres"]),
        ),
    ]
}

fn show_access_info() {
    println!("\n===== Services Access Information =====");
    println!("Backend:       http://localhost:8080");
    println!("Frontend:      http://localhost:4200");
    println!("phpMyAdmin:    http://localhost:8081 (MySQL GUI)");
    println!("pgAdmin:       http://localhost:8082 (PostgreSQL GUI)");
    println!("\n===== Database Connection Info =====");
    println!("MySQL:         localhost:3306 (root / rootpassword)");
    println!("PostgreSQL:    localhost:5432 (postgres / postgres)");
    println!();
}

/// Verifies docker and docker-compose are installed and the daemon runs.
pub fn ensure_ready() -> Result<()> {
    for program in ["docker", COMPOSE] {
        if !ExternalCommand::new(program, &["--version"]).succeeds() {
            return Err(Error::ExternalCommandError {
                command: program.to_string(),
                reason: "not installed".to_string(),
            });
        }
    }
    if !ExternalCommand::new("docker", &["info"]).succeeds() {
        return Err(Error::ExternalCommandError {
            command: "docker info".to_string(),
            reason: "Docker daemon is not running".to_string(),
        });
    }
    Ok(())
}

/// Runs one menu action.
pub fn run_action(prompt: &dyn Prompter, action: DockerAction) -> Result<()> {
    debug!("Docker action: {action}");
    match action {
        DockerAction::ShowLogs => {
            let labels: Vec<&str> = LOG_SERVICES.iter().map(|(label, _)| *label).collect();
            let selected = prompt.select("Choose a service to view logs", &labels, 0)?;
            let service = LOG_SERVICES.get(selected).and_then(|(_, service)| *service);
            logs_command(service).run()
        }
        DockerAction::CheckHealth => {
            println!("Checking database health...");
            for (name, check) in health_checks() {
                if check.succeeds() {
                    println!("{name}: Running and healthy");
                } else {
                    println!("{name}: Not healthy or not running");
                }
            }
            Ok(())
        }
        DockerAction::ResetVolumes => {
            let confirmed = prompt.confirm(
                false,
                "This will delete all database data. Are you sure?".to_string(),
            )?;
            if confirmed {
                ExternalCommand::new(COMPOSE, &["down", "-v"]).run()?;
                println!("All volumes removed.");
            }
            Ok(())
        }
        DockerAction::Exit => {
            println!("Exiting Docker menu.");
            Ok(())
        }
        other => {
            if let Some(command) = other.command() {
                println!("{}...", other.label());
                command.run()?;
            }
            if other.shows_access_info() {
                show_access_info();
            }
            Ok(())
        }
    }
}

/// Shows the menu and runs the selected action.
pub fn handle_docker_menu(prompt: &dyn Prompter) -> Result<()> {
    ensure_ready()?;
    let labels: Vec<&str> = DockerAction::ALL.iter().map(DockerAction::label).collect();
    let selected = prompt.select("Select a Docker action", &labels, 0)?;
    let action = DockerAction::ALL.get(selected).copied().unwrap_or(DockerAction::Exit);
    run_action(prompt, action)
}
