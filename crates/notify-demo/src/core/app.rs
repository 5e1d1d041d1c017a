use std::sync::Arc;

use notify_core::{ChannelFactory, Registry, User};
use tracing::info;

use crate::{
    core::Scenario,
    infra::{Config, LogGuard, roster},
};

pub struct App {
    _log_guard: LogGuard,
    scenario: Scenario,
    factory: ChannelFactory,
    registry: Registry,
    users: Vec<Arc<User>>,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let log_guard = LogGuard::init()?;

        let users = roster::load(config)?.into_iter().map(Arc::new).collect();

        Ok(Self {
            _log_guard: log_guard,
            scenario: Scenario::from_config(config),
            factory: ChannelFactory::default(),
            registry: Registry::new(),
            users,
        })
    }

    pub fn run(self) -> anyhow::Result<()> {
        info!("app running...");

        let Self {
            scenario,
            factory,
            registry,
            users,
            ..
        } = self;

        let outcome = scenario.run(&factory, &registry, &users)?;

        info!(
            sent = outcome.sent.len(),
            rejected = outcome.rejected.len(),
            remaining = registry.len(),
            "demo complete"
        );

        Ok(())
    }
}
