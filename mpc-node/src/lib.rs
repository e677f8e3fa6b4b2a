#![allow(non_snake_case)]

use app::service::LookupService;
use clap::Parser;
use cli::CliArgs;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

use crate::http::routes;

mod app;
mod cli;
mod http;

pub fn build_rocket() -> Rocket<Build> {
    let cli = CliArgs::parse();
    init_logger(&cli);
    build_rocket_with(cli)
}

/// Builds from explicit arguments and leaves the global logger untouched.
fn build_rocket_with(cli: CliArgs) -> Rocket<Build> {
    rocket::custom(cli.rocket_config())
        .manage(cli)
        .attach(init_services())
        .attach(init_endpoints())
}

fn init_logger(cli: &CliArgs) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str())).init();
}

fn init_services() -> AdHoc {
    AdHoc::on_ignite("Inject services", |rocket| async move {
        let cli = rocket.state::<CliArgs>().expect("No CLI arguments provided");
        let lookup_service = LookupService::new(cli);
        rocket.manage(lookup_service)
    })
}

fn init_endpoints() -> AdHoc {
    AdHoc::on_ignite("Inject endpoints", |rocket| async move {
        let cli = rocket.state::<CliArgs>().expect("No CLI arguments provided");
        let base = cli.path_prefix.clone();
        rocket.mount(
            base.as_str(),
            rocket::routes!(routes::index, routes::search, routes::synthetic_object),
        )
    })
}
