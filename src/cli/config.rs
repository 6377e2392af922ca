//! Config and schema CLI commands

use reqgen::*;
use std::fs;

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: config, test-case, requirement, analysis");
            Ok(())
        }
        "config" => print_schema::<GeneratorConfig>(),
        "test-case" | "testcase" => print_schema::<TestCase>(),
        "requirement" => print_schema::<Requirement>(),
        "analysis" => print_schema::<RequirementAnalysis>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

pub fn cmd_init(_args: &[String]) -> Result<()> {
    let current_dir = std::env::current_dir().map_err(Error::Io)?;
    let path = current_dir.join(CONFIG_FILE);

    if path.exists() {
        return Err(format!("{} already exists", path.display()).into());
    }

    let content = format!(
        "# reqgen configuration - v1\n{}",
        GeneratorConfig::default().to_yaml()?
    );
    fs::write(&path, content).map_err(Error::Io)?;
    println!("✓ Created {}", path.display());
    Ok(())
}
