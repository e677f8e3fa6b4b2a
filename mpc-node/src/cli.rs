use std::net::Ipv4Addr;

use clap::Parser;
use rocket::figment::Figment;

/// Runtime configuration, sourced from CLI flags with `MPC_LOOKUP_*`
/// environment fallbacks.
#[derive(Parser)]
pub struct CliArgs {
    /// HTTP server bind address
    #[arg(long, default_value = "0.0.0.0", value_name = "ADDR")]
    pub bind: Ipv4Addr,
    /// HTTP server listening port
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,
    /// Application name reported by the metadata document
    #[arg(long, env = "MPC_LOOKUP_NAME", default_value = "mpc-lookup")]
    pub name: String,
    /// URL prefix the application is mounted under
    #[arg(long, env = "MPC_LOOKUP_PATH_PREFIX", default_value = "/")]
    pub path_prefix: String,
    /// Log level filter applied when RUST_LOG is not set
    #[arg(long, env = "MPC_LOOKUP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl CliArgs {
    pub fn rocket_config(&self) -> Figment {
        rocket::Config::figment()
            .merge(("address", self.bind.to_string()))
            .merge(("port", self.port))
    }
}
