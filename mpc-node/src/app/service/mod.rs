use mpc_core::designation::Designation;
use mpc_core::resolver::{DesignationResolver, RedirectDecision};

use crate::cli::CliArgs;

/// Application-facing lookup operations, managed by rocket and shared
/// across request handlers.
pub struct LookupService {
    app_name: String,
    resolver: DesignationResolver,
}

impl LookupService {
    pub fn new(cli: &CliArgs) -> Self {
        Self {
            app_name: cli.name.clone(),
            resolver: DesignationResolver::new(&cli.path_prefix),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn resolve(&self, designation: &str) -> RedirectDecision {
        self.resolver.resolve(&Designation::from(designation))
    }
}
