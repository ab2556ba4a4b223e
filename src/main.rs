use std::fs;
use std::path::Path;

use clap::Parser;

use doc_guard::checker::Checker;
use doc_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, ConfigAction, ConfigArgs, InitArgs};
use doc_guard::config::{Config, ConfigLoader, FileConfigLoader};
use doc_guard::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use doc_guard::report::{ColorMode, ConsoleReporter, MemoryReporter, Reporter};
use doc_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> doc_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Reject a blank repository path
    if args.path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(doc_guard::DocGuardError::Config(
            "Repository path must not be blank".to_string(),
        ));
    }

    // 4. Run the checks; JSON and file output buffer violations, the text
    //    console path streams them as they are found
    let found = if args.format == OutputFormat::Json || args.output.is_some() {
        run_check_buffered(args, cli, &config)?
    } else {
        run_check_streaming(args, cli, &config)?
    };

    // 5. Determine exit code
    if found > 0 {
        Ok(EXIT_VIOLATIONS_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn run_check_streaming(args: &CheckArgs, cli: &Cli, config: &Config) -> doc_guard::Result<usize> {
    let mut reporter = ConsoleReporter::new(color_choice_to_mode(cli.color));
    let mut checker = Checker::new(args.path.clone(), config, &mut reporter)?;
    checker.run(args.mode)?;

    let found = reporter.found_issues();
    if found > 0 && !cli.quiet {
        println!("Found {found} issues, please check the output");
    }
    Ok(found)
}

fn run_check_buffered(args: &CheckArgs, cli: &Cli, config: &Config) -> doc_guard::Result<usize> {
    let mut reporter = MemoryReporter::new();
    let mut checker = Checker::new(args.path.clone(), config, &mut reporter)?;
    checker.run(args.mode)?;

    let report = match args.format {
        OutputFormat::Text => TextFormatter.format(reporter.violations())?,
        OutputFormat::Json => JsonFormatter.format(reporter.violations())?,
    };
    write_output(args.output.as_deref(), &report, cli.quiet)?;

    Ok(reporter.found_issues())
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> doc_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(marker) = &args.marker {
        config.docs.comment_marker = marker.clone();
    }

    if let Some(ext) = &args.ext {
        config.docs.source_extension = ext.clone();
    }

    config.scanner.exclude.extend(args.exclude.iter().cloned());
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> doc_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> doc_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(doc_guard::DocGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn generate_config_template() -> String {
    r#"# doc-guard configuration file

# Config format version
version = "1"

[docs]
# README filename checked in the repository root and app subfolders
readme_file = "README.md"

# Package documentation filename required in package subdirectories.
# This file is exempt from the leading-comment check.
package_doc_file = "doc.go"

# Extension of source files that must start with a leading comment
source_extension = "go"

# Line-comment marker expected on the first two lines of each source file
comment_marker = "//"

[layout.monorepo]
# Folders whose subdirectories must each carry a README
readme_dirs = ["apps"]

# Folders whose subdirectories must each carry a package doc file;
# their file trees are checked for leading comments
package_dirs = ["pkg", "services"]

[layout.app]
package_dirs = ["app"]

[scanner]
# Glob patterns excluded from the recursive source walk
exclude = [
    # "**/vendor/**",
    # "**/testdata/**",
]
"#
    .to_string()
}

fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match run_config_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_impl(args: &ConfigArgs, cli: &Cli) -> doc_guard::Result<()> {
    match &args.action {
        ConfigAction::Validate { config } => {
            FileConfigLoader::new().load_from_path(config)?;
            println!("Configuration file is valid: {}", config.display());
            Ok(())
        }
        ConfigAction::Show { config, format } => {
            let loaded = load_config(config.as_deref(), cli.no_config)?;
            let rendered = match format.as_str() {
                "json" => serde_json::to_string_pretty(&loaded)?,
                _ => toml::to_string_pretty(&loaded)?,
            };
            print!("{rendered}");
            Ok(())
        }
    }
}
