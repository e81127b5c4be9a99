use std::env;
use std::io;
use std::path::{self, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use libdeps_patch::commands::patch_apply::ApplyOutcome;
use libdeps_patch::commands::patch_status::PatchStatus;
use libdeps_patch::commands::{patch_apply, patch_revert, patch_status};
use libdeps_patch::patch::{Drift, PatchLayout, DEFAULT_ENV, PATCH_NAME};

#[derive(Parser)]
#[command(name = "libdeps-patch")]
#[command(about = "Patch the vendored NimBLE-Arduino sources in PlatformIO libdeps")]
#[command(version)]
struct Cli {
    /// Project root containing .pio/ and patches/ (defaults to the current directory)
    #[arg(long, global = true)]
    project_root: Option<PathBuf>,

    /// PlatformIO environment whose libdeps contain the target file
    #[arg(long, global = true, default_value = DEFAULT_ENV)]
    env: String,

    /// Defaults to `apply`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Back up the target file and copy the replacement over it (once)
    Apply,
    /// Report whether the patch is applied and whether the target has drifted
    Status,
    /// Restore the target file from its backup and remove the backup
    Revert,
}

fn resolve_project_root(arg: Option<PathBuf>) -> io::Result<PathBuf> {
    match arg {
        Some(root) => path::absolute(root),
        None => env::current_dir(),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(2);
}

fn main() {
    let cli = Cli::parse();

    let project_root = match resolve_project_root(cli.project_root) {
        Ok(root) => root,
        Err(e) => fail(format!("cannot resolve project root: {}", e)),
    };
    let layout = PatchLayout::for_env(&project_root, &cli.env);

    match cli.command.unwrap_or(Commands::Apply) {
        Commands::Apply => match patch_apply::run(&layout) {
            Ok(ApplyOutcome::AlreadyPatched) => println!("✓ Already patched"),
            Ok(ApplyOutcome::Applied) => println!("[Patch] {} applied!", PATCH_NAME),
            Err(e) => fail(e),
        },
        Commands::Status => match patch_status::run(&layout) {
            Ok(PatchStatus::Unpatched) => {
                println!("Not patched: {}", layout.target().display());
            }
            Ok(PatchStatus::Patched { drift }) => {
                println!("Patched: {}", layout.target().display());
                match drift {
                    Drift::InSync => println!("Target matches replacement"),
                    Drift::Diverged {
                        target_hash,
                        replacement_hash,
                    } => {
                        println!("Target differs from replacement");
                        println!("Target hash: {}", target_hash);
                        println!("Replacement hash: {}", replacement_hash);
                        process::exit(1);
                    }
                    Drift::TargetMissing => {
                        println!("Target file is missing");
                        process::exit(1);
                    }
                }
            }
            Err(e) => fail(e),
        },
        Commands::Revert => match patch_revert::run(&layout) {
            Ok(()) => println!("[Patch] {} reverted", PATCH_NAME),
            Err(e) => fail(e),
        },
    }
}
