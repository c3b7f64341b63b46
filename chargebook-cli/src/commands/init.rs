//! `init`: create the data directory, the booking database and optionally
//! a commented configuration file.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use chargebook::operations::init::{init_database, InitOptions, InitResult};
use clap::Args;

/// Initialize the chargebook data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Replace an existing database, dropping every booking in it
    #[arg(long)]
    pub overwrite: bool,

    /// Also write a commented config.yaml
    #[arg(long)]
    pub with_config: bool,

    /// Print the steps without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

impl InitCommand {
    /// Runs against the global data directory. Auto-init settings do not
    /// apply: creating the database is the whole point.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = InitOptions::new(resolve_data_dir(global)?)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);

        if self.dry_run {
            // A preview is always printed; it is the only output of a dry run.
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize chargebook in: {}", options.data_dir.display());
            for step in planned_steps(&options) {
                println!("  - {step}");
            }
            return Ok(());
        }

        let result = init_database(&options)?;
        if !global.quiet {
            println!("Initialized chargebook in: {}", result.data_dir.display());
            for step in completed_steps(&result, &self) {
                println!("  - {step}");
            }
        }
        Ok(())
    }
}

fn completed_steps(result: &InitResult, command: &InitCommand) -> Vec<&'static str> {
    let mut steps = Vec::new();
    if result.data_dir_created {
        steps.push("Created data directory");
    }
    if result.database_created {
        steps.push(if command.overwrite {
            "Recreated database"
        } else {
            "Created database"
        });
    }
    if result.config_created {
        steps.push("Created default configuration file");
    } else if command.with_config {
        steps.push("Configuration file already exists (not overwritten)");
    }
    steps
}

fn planned_steps(options: &InitOptions) -> Vec<String> {
    let dir = options.data_dir.display();
    let db = options.database_path();
    let mut steps = vec![if options.data_dir.exists() {
        format!("Data directory already exists: {dir}")
    } else {
        format!("Create data directory: {dir}")
    }];

    match (db.exists(), options.overwrite) {
        (false, _) => steps.push(format!("Create database: {}", db.display())),
        (true, true) => {
            steps.push(format!("Remove existing database: {}", db.display()));
            steps.push(format!("Create database: {}", db.display()));
        }
        (true, false) => steps.push(format!(
            "ERROR: Database already exists (use --overwrite to replace): {}",
            db.display()
        )),
    }

    if options.create_config {
        let config = options.config_path();
        steps.push(if config.exists() {
            format!("Configuration file already exists (will not overwrite): {}", config.display())
        } else {
            format!("Create configuration file: {}", config.display())
        });
    }
    steps
}
