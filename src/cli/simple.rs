//! Simple CLI commands: generate, analyze

use super::util::{
    parse_config_arg, parse_flag_value, parse_output_arg, positional_args, write_output,
};
use reqgen::*;
use std::path::Path;

const VALUE_FLAGS: &[&str] = &[
    "--output", "-o", "--config", "-c", "--id", "--priority",
];

/// Load the config named by --config, or `.reqgen.yaml` in the working directory
fn load_config(args: &[String]) -> Result<GeneratorConfig> {
    match parse_config_arg(args) {
        Some(path) => GeneratorConfig::load(&path),
        None => {
            let current_dir = std::env::current_dir().map_err(Error::Io)?;
            GeneratorConfig::load_from_dir(&current_dir)
        }
    }
}

pub fn cmd_generate(args: &[String]) -> Result<()> {
    let files = positional_args(args, VALUE_FLAGS);
    if files.is_empty() {
        return Err("Usage: reqgen generate <file>... [--json] [--output <file>]".into());
    }

    let config = load_config(args)?;
    let json_output =
        args.contains(&"--json".to_string()) || config.output.format == OutputFormat::Json;
    let output = parse_output_arg(args);

    let paths: Vec<&Path> = files.iter().map(Path::new).collect();
    let suite = Pipeline::new(config).run_files(&paths);

    if suite.analyses.is_empty() {
        return Err("No requirements found in the input".into());
    }

    let content = if json_output {
        export::suite_to_json(&suite)?
    } else {
        report::render_full(&suite)?
    };
    write_output(&output, &content)
}

pub fn cmd_analyze(args: &[String]) -> Result<()> {
    let text = positional_args(args, VALUE_FLAGS).join(" ");
    if text.trim().is_empty() {
        return Err(
            "Usage: reqgen analyze \"<requirement text>\" [--id <id>] [--priority <p>]".into(),
        );
    }

    let id = parse_flag_value(args, &["--id"]).unwrap_or("REQ001");
    let mut requirement = Requirement::new(id, text)?;
    if let Some(priority) = parse_flag_value(args, &["--priority"]) {
        requirement = requirement.with_priority(priority.parse()?);
    }

    let suite = Pipeline::default().run(std::slice::from_ref(&requirement));
    let analysis = suite
        .analyses
        .get(&requirement.id)
        .ok_or_else(|| Error::Other("analysis missing".into()))?;

    let mut out = serde_json::to_string_pretty(analysis)?;
    out.push_str("\n\n");
    out.push_str(&report::render_full(&suite)?);
    write_output(&parse_output_arg(args), &out)
}
