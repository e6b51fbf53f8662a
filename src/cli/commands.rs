//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{IoResultExt, Session, SessionOptions};
use crate::cli::args::{Cli, Commands, ConfigCommands, RootArg};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{
    evaluate, integer_root, DomainError, RootMethod, SearchConfig, MIN_BASE, MIN_BOUND,
    MIN_EXPONENT,
};
use crate::infrastructure::LineConsole;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => _search(None, None, None, false),
        Some(Commands::Search {
            n,
            k,
            root,
            no_pause,
        }) => _search(*n, *k, *root, *no_pause),
        Some(Commands::Evaluate { x, y, n, root }) => _evaluate(*x, *y, *n, *root),
        Some(Commands::Config { command }) => _config(command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn resolve_method(root: Option<RootArg>, settings: &Settings) -> RootMethod {
    root.map(RootMethod::from).unwrap_or(settings.root_method)
}

/// Reject preset values before any output is produced.
fn validate_presets(n: Option<i64>, k: Option<i64>) -> Result<(), DomainError> {
    SearchConfig::new(
        n.unwrap_or(i64::from(MIN_EXPONENT)),
        k.unwrap_or(MIN_BOUND as i64),
    )
    .map(|_| ())
}

#[instrument]
fn _search(
    n: Option<i64>,
    k: Option<i64>,
    root: Option<RootArg>,
    no_pause: bool,
) -> CliResult<()> {
    validate_presets(n, k)?;
    let settings = Settings::load()?;
    debug!("settings: {:?}", settings);

    let options = SessionOptions {
        exponent: n,
        bound: k,
        method: resolve_method(root, &settings),
        format: settings.report_format(true),
        pause_on_exit: settings.pause_on_exit && !no_pause,
    };
    let mut console = LineConsole::stdio();
    Session::new(&mut console, options).run()?;
    Ok(())
}

#[instrument]
fn _evaluate(x: i64, y: i64, n: i64, root: Option<RootArg>) -> CliResult<()> {
    let exponent = SearchConfig::new(n, MIN_BOUND as i64)?.exponent();
    let base = |value: i64| {
        u64::try_from(value)
            .ok()
            .filter(|v| *v >= MIN_BASE)
            .ok_or(DomainError::BaseOutOfRange {
                value,
                min: MIN_BASE,
            })
    };
    let (x, y) = (base(x)?, base(y)?);

    let settings = Settings::load()?;
    let method = resolve_method(root, &settings);
    let candidate = evaluate(x, y, exponent, method);
    output::candidate(
        &format!("Near miss for x={x}, y={y} ({method} root):"),
        &candidate,
        &settings.report_format(true),
    );

    let exact = integer_root(&candidate.sum, exponent, RootMethod::Exact);
    if candidate.z == exact {
        output::success("root estimate agrees with the exact integer root");
    } else {
        output::warning(&format!(
            "root estimate z={} differs from the exact integer root {}",
            candidate.z, exact
        ));
    }
    Ok(())
}

#[instrument]
fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("no config directory available on this platform".into())
            })?;
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).io_context(&format!("create {}", dir.display()))?;
            }
            std::fs::write(&path, Settings::template())
                .io_context(&format!("write {}", path.display()))?;
            output::success(&format!("Created {}", path.display()));
        }
    }
    Ok(())
}
