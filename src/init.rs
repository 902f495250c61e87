//! The `init` command: collect answers, validate them, materialize.

use std::path::Path;

use crate::cli::InitArgs;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::generator::{ensure_output_dir, GenerationReport, Generator};
use crate::parser::{get_answers, get_answers_from, AnswerSource, InitOptions};
use crate::prompt::Prompter;
use crate::renderer::MiniJinjaRenderer;

/// Runs `init` for `args`, generating into `output_root/<project name>`.
///
/// All prompting happens before the first filesystem change. Answers read
/// from stdin make the run non-interactive, as does `--yes`.
pub fn handle_init(
    prompt: &dyn Prompter,
    args: &InitArgs,
    templates_root: &Path,
    output_root: &Path,
) -> Result<GenerationReport> {
    ensure_output_dir(output_root.join(&args.project_name), args.force)?;

    let source = match (&args.answers, args.stdin) {
        (_, true) => AnswerSource::Stdin,
        (Some(path), false) => AnswerSource::File(path),
        (None, false) => AnswerSource::None,
    };
    let preloaded = get_answers_from(source)?;

    let options = InitOptions {
        group_id: args.group_id.clone(),
        artifact_id: args.artifact_id.clone(),
        database: args.database,
    };
    let interactive = !args.yes && !args.stdin;
    let answers = get_answers(prompt, &args.project_name, &options, preloaded, interactive)?;
    let config = ProjectConfig::new(&args.project_name, answers)?;

    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&renderer, templates_root, output_root, args.force);
    generator.materialize(&config)
}
