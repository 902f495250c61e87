//! jangular's main application entry point.
//! Handles command-line argument parsing and dispatches to the commands.

use jangular::{
    cli::{get_args, print_help, Args, Command},
    commands::{handle_build, handle_test},
    config::AppInfo,
    docker::handle_docker_menu,
    error::{default_error_handler, Error, Result},
    generator::GenerationReport,
    init::handle_init,
    loader::load_templates,
    logger::init_logger,
    prompt::DialoguerPrompter,
    requirements::{check_requirements, default_requirements},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args, &AppInfo::current()) {
        default_error_handler(err);
    }
}

fn print_success(report: &GenerationReport, project_name: &str) {
    // The warnings themselves were already logged as they happened.
    if !report.warnings.is_empty() {
        println!("\nCompleted with {} warning(s).", report.warnings.len());
    }
    println!("\nProject created successfully in {}!", report.project_dir.display());
    println!("\nTo get started:\n");
    println!("  cd {project_name}");
    println!("  npm run start:backend   # Start Java backend");
    println!("  npm run start:frontend  # In another terminal, start Angular frontend\n");
}

/// Main application logic execution.
///
/// # Flow
/// 1. `--test` runs the requirements check and stops
/// 2. `init` resolves the templates root, collects answers and generates
/// 3. `docker`, `test` and `build` delegate to external tools
fn run(args: Args, app: &AppInfo) -> Result<()> {
    log::debug!("{} {}: {}", app.name, app.version, app.description);

    if args.check_requirements {
        return check_requirements(&default_requirements());
    }

    let prompt = DialoguerPrompter::new();
    let current_dir = std::env::current_dir()?;

    match args.command {
        Some(Command::Init(init_args)) => {
            println!("Creating new {} project: {}", app.name, init_args.project_name);
            let templates_root =
                load_templates(&prompt, args.templates.as_deref(), init_args.yes)?;
            let report = handle_init(&prompt, &init_args, &templates_root, &current_dir)?;
            print_success(&report, &init_args.project_name);
            Ok(())
        }
        Some(Command::Docker) => handle_docker_menu(&prompt),
        Some(Command::Test(target)) => handle_test(&current_dir, target.target()),
        Some(Command::Build(build)) => {
            handle_build(&current_dir, build.target.target(), build.production)
        }
        None => {
            print_help();
            Err(Error::ValidationError("no command given".to_string()))
        }
    }
}
