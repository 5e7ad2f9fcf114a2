//! Command line front end for the envsettings env file generator

use anyhow::Context;
use clap::{Parser, Subcommand};
use envsettings::{Config, ConfigOptions, GeneratorOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Env file tooling
#[derive(Debug, Parser)]
#[command(name = "envsettings-gen", version = env!("CARGO_PKG_VERSION"), about = "Env file tooling")]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate an env file template from settings files
    Generate(GenerateArgs),
    /// Print the effective configuration as JSON
    ShowConfig(ShowConfigArgs),
}

#[derive(Debug, clap::Args)]
struct ShowConfigArgs {
    /// Pattern locating parameter declarations
    #[arg(long, env = "ENVSETTINGS_PATTERN")]
    pattern: Option<String>,
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Env file to write (overwritten)
    #[arg(short, long, default_value = ".env.example")]
    output: PathBuf,

    /// Name of the settings file to look for in each directory
    #[arg(short, long, default_value = "settings.py")]
    settings_file: String,

    /// Root directory to search
    #[arg(short, long, default_value = ".")]
    modules_path: PathBuf,

    /// Directory below the root holding sub-modules
    #[arg(long)]
    sub_modules_path: Option<PathBuf>,

    /// Sub-module to include (repeatable); all directories when omitted
    #[arg(long = "include")]
    include_sub_modules: Vec<String>,

    /// Parameter to leave out (repeatable)
    #[arg(long = "exclude")]
    exclude_params: Vec<String>,

    /// Pattern locating parameter declarations
    #[arg(long, env = "ENVSETTINGS_PATTERN")]
    pattern: Option<String>,
}

impl GenerateArgs {
    fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            sub_modules_path: self.sub_modules_path.clone(),
            include_sub_modules: (!self.include_sub_modules.is_empty())
                .then(|| self.include_sub_modules.clone()),
            exclude_params: self.exclude_params.clone(),
        }
    }

    fn config(&self) -> Config {
        build_config(self.pattern.as_deref())
    }
}

fn build_config(pattern: Option<&str>) -> Config {
    let mut options = ConfigOptions::new();
    if let Some(pattern) = pattern {
        options = options.env_generator_pattern(pattern);
    }
    Config::default().configure(options)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    args.config()
        .generate_env_file(
            &args.output,
            &args.settings_file,
            &args.modules_path,
            &args.generator_options(),
        )
        .with_context(|| format!("failed to generate {}", args.output.display()))?;
    tracing::info!(output = %args.output.display(), "env file template written");
    Ok(())
}

fn render_config(args: &ShowConfigArgs) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&build_config(args.pattern.as_deref()))
        .context("failed to serialize configuration")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::ShowConfig(args) => {
            println!("{}", render_config(args)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::try_parse_from([
            "envsettings-gen",
            "generate",
            "--output",
            "out.env",
            "--sub-modules-path",
            "modules",
            "--include",
            "auth",
            "--include",
            "payment",
            "--exclude",
            "DB_HOST",
        ])
        .unwrap();

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.output, PathBuf::from("out.env"));
        assert_eq!(args.settings_file, "settings.py");
        let options = args.generator_options();
        assert_eq!(options.sub_modules_path, Some(PathBuf::from("modules")));
        assert_eq!(
            options.include_sub_modules,
            Some(vec!["auth".to_string(), "payment".to_string()])
        );
        assert_eq!(options.exclude_params, vec!["DB_HOST".to_string()]);
    }

    #[test]
    fn test_no_include_visits_everything() {
        let cli = Cli::try_parse_from(["envsettings-gen", "generate"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.generator_options().include_sub_modules, None);
    }

    #[test]
    fn test_run_generate() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("settings.py"),
            "# Port\nPORT = get_int_env_param('PORT', default=80)\n",
        )
        .unwrap();
        let output = dir.path().join("out.env");

        let cli = Cli::try_parse_from([
            "envsettings-gen",
            "generate",
            "--output",
            output.to_str().unwrap(),
            "--modules-path",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        run_generate(&args).unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "# Port\nPORT=\n");
    }

    #[test]
    fn test_show_config_round_trips() {
        let cli = Cli::try_parse_from(["envsettings-gen", "show-config", "--pattern", "^X$"]).unwrap();
        let Commands::ShowConfig(args) = cli.command else {
            panic!("expected show-config");
        };

        let rendered = render_config(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["error_handling"], "raise");
        assert_eq!(value["env_generator_pattern"], "^X$");

        let options = ConfigOptions::from_json(&value).unwrap();
        assert_eq!(Config::default().configure(options), build_config(Some("^X$")));
    }
}
