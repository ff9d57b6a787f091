//! CLI definitions for konfigure
//!
//! This module contains the CLI argument parsing structure using clap.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "konfigure",
    version,
    about = "konfigures K8s workloads",
    long_about = "konfigure helps you manage workloads deployed onto K8s,\n\
                  both application configuration and auxiliary resources.\n\n\
                  Reads konfig.json from the current directory and prints a summary."
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also list every deployment and external resource
    #[arg(short, long)]
    pub details: bool,
}
