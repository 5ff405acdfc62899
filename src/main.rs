use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use tasa_version::cli::orchestration::{self, LocateArgs, ResolveArgs};
use tasa_version::config::{self, Config};
use tasa_version::git::{Git2Repository, Repository};
use tasa_version::logging;
use tasa_version::naming::Platform;
use tasa_version::output::{self, OutputFormat};
use tasa_version::ui;
use tasa_version::ReleaseError;

#[derive(Parser)]
#[command(
    name = "tasa-version",
    version,
    about = "Resolve TASA release versions and artifact names from branch, commit and build number"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the version string, build type and artifact names
    Resolve {
        #[arg(short, long, env = "GITHUB_REF_NAME", help = "Branch name")]
        branch: Option<String>,

        #[arg(long, env = "TASA_COMMIT_HASH", help = "Short commit hash")]
        commit: Option<String>,

        #[arg(long, env = "GITHUB_RUN_NUMBER", help = "Monotonic build counter")]
        build_id: Option<u64>,

        #[arg(long, help = "Build date (YYYY-MM-DD), defaults to today")]
        date: Option<NaiveDate>,

        #[arg(long, help = "Target platform: windows or linux (default: host)")]
        platform: Option<Platform>,

        #[arg(long, help = "Postfix appended to the version in artifact names")]
        postfix: Option<String>,

        #[arg(short, long, default_value = "text", help = "Output format: text, env or json")]
        format: OutputFormat,

        #[arg(long, env = "GITHUB_OUTPUT", help = "Append key=value outputs to this file")]
        github_output: Option<PathBuf>,
    },

    /// Break a version string or tag into its components
    Parse {
        #[arg(value_name = "VERSION")]
        input: String,

        #[arg(short, long, default_value = "text", help = "Output format: text or json")]
        format: OutputFormat,
    },

    /// Find the executable for a version in a build output directory
    Locate {
        #[arg(short, long, help = "Directory holding build artifacts")]
        dir: PathBuf,

        #[arg(value_name = "VERSION", help = "Resolved version string")]
        input: String,

        #[arg(long, help = "Target platform: windows or linux (default: host)")]
        platform: Option<Platform>,

        #[arg(long, help = "Postfix appended to the version")]
        postfix: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args.command, &config) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Resolve {
            branch,
            commit,
            build_id,
            date,
            platform,
            postfix,
            format,
            github_output,
        } => {
            let resolve_args = ResolveArgs {
                branch,
                commit,
                build_id,
                date,
                platform,
                postfix,
            };

            let repo = if resolve_args.needs_repository() {
                match Git2Repository::open(".") {
                    Ok(repo) => {
                        ui::display_status("Reading missing branch/commit from the local repository");
                        Some(repo)
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "no git repository available");
                        None
                    }
                }
            } else {
                None
            };

            let mut warnings = Vec::new();
            let result = orchestration::run_resolve(
                &resolve_args,
                config,
                repo.as_ref().map(|r| r as &dyn Repository),
                Local::now().date_naive(),
                &mut warnings,
            );
            for warning in &warnings {
                ui::display_boundary_warning(warning);
            }
            let report = result?;

            match format {
                OutputFormat::Text => {
                    ui::display_resolution(&report);
                    println!("{}", report.version);
                }
                _ => print!("{}", output::render(&report, format)?),
            }

            if let Some(path) = github_output {
                output::append_github_output(&path, &report)?;
                ui::display_success(&format!("Wrote step outputs to {}", path.display()));
            }
        }

        Command::Parse { input, format } => {
            let parsed = orchestration::run_parse(&input)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
                OutputFormat::Text => {
                    ui::display_parsed(&input, &parsed);
                    println!("{}", parsed.build_type);
                }
                OutputFormat::Env => {
                    return Err(ReleaseError::input("parse supports --format text or json").into())
                }
            }
        }

        Command::Locate {
            dir,
            input,
            platform,
            postfix,
        } => {
            let locate_args = LocateArgs {
                dir,
                version: input,
                platform,
                postfix,
            };
            let path = orchestration::run_locate(&locate_args, config)?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
