use crate::models::args::Cli;
use anyhow::Result;
use cram_launcher::{
    INTERACTIVE_ENV, Launcher, LauncherConfig, Plan, Platform, RunOptions, interactive_from_env,
};
use cram_logger::{LevelFilter, Logger};
use tracing::debug;

/// Provisions the venv and runs the selected cram tests.
///
/// # Result
/// Returns the process exit code: `0` when the suite passed (or on a dry run),
/// `1` when the runner reported failures.
///
/// # Errors
/// Returns an error if logging, configuration, provisioning or spawning the runner fails.
pub fn run_suite(cli: &Cli) -> Result<u8> {
    let _logger = init_logger(cli)?;

    let interactive = interactive_from_env(std::env::var(INTERACTIVE_ENV).ok().as_deref());
    let config = LauncherConfig::load(&cli.root, cli.config.as_deref())?;
    debug!(?config, interactive, "Launcher configured");

    let launcher = Launcher::new(&cli.root, config, Platform::current());
    let plan = launcher.plan(&RunOptions { selector: cli.tests.clone(), interactive })?;

    if cli.dry_run {
        print_plan(&plan, cli.skip_setup);
        return Ok(0);
    }

    if cli.skip_setup {
        println!("♻️  Reusing venv at {}", plan.venv.path().display());
    } else {
        println!(
            "🐍 Provisioning venv at {} ({})...",
            plan.venv.path().display(),
            plan.provisioner.requirement()
        );
    }
    launcher.prepare(&plan, cli.skip_setup)?;

    println!("Running {}", plan.command);
    Ok(launcher.run(&plan)?)
}

fn init_logger(cli: &Cli) -> Result<Logger> {
    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let mut builder = Logger::builder(env!("CARGO_PKG_NAME")).level(level);
    if let Some(filter) = &cli.log_filter {
        builder = builder.env_filter(filter);
    }
    if let Some(dir) = &cli.log_dir {
        builder = builder.path(dir).json(cli.json_logs);
    }
    Ok(builder.init()?)
}

fn print_plan(plan: &Plan, skip_setup: bool) {
    if skip_setup {
        println!("♻️  Reusing venv at {}", plan.venv.path().display());
    } else {
        for (step, invocation) in plan.setup_steps() {
            println!("🛠️  {step}: {invocation}");
        }
    }
    println!("Running {}", plan.command);
}
