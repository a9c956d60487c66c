//! CLI module for Lesion Assist
//!
//! - `serve`: run the HTTP API
//! - `records`: print the filtered patient list

pub mod records;
pub mod serve;

use clap::{Parser, Subcommand};

/// Lesion Assist - simulated skin-lesion diagnostic backend
#[derive(Parser)]
#[command(name = "lesion-assist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),

    /// Print patient records matching a search and status filter
    Records(records::RecordsArgs),
}
