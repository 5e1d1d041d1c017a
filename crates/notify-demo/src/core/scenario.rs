use std::sync::Arc;

use notify_core::{ChannelFactory, ChannelKind, Registry, User};
use tracing::{error, info, warn};

use crate::infra::config::{CHANNELS, Config, FINAL_MESSAGE, UNSUBSCRIBE};

const DEFAULT_UNSUBSCRIBE: &str = "Carlos";
const DEFAULT_FINAL_MESSAGE: &str = "Critical update: scheduled maintenance";

/// The scripted run: announce an update on every configured channel, drop one
/// subscriber, then send a final email to whoever is left.
#[derive(Debug, Clone)]
pub struct Scenario {
    channels: Vec<String>,
    unsubscribe: String,
    final_message: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    /// Keys of the channels that sent, in order.
    pub sent: Vec<String>,
    pub rejected: Vec<String>,
    pub unsubscribed: Option<String>,
}

impl Scenario {
    pub fn from_config(config: &Config) -> Self {
        let channels = config.list(CHANNELS).unwrap_or_else(|| {
            ChannelKind::ALL
                .iter()
                .map(|k| k.as_str().to_string())
                .collect()
        });

        Self {
            channels,
            unsubscribe: config.optional_or(UNSUBSCRIBE, DEFAULT_UNSUBSCRIBE).to_string(),
            final_message: config
                .optional_or(FINAL_MESSAGE, DEFAULT_FINAL_MESSAGE)
                .to_string(),
        }
    }

    pub fn run(
        &self,
        factory: &ChannelFactory,
        registry: &Registry,
        users: &[Arc<User>],
    ) -> anyhow::Result<Outcome> {
        let mut outcome = Outcome::default();

        for user in users {
            registry.add(user.clone());
        }
        info!(subscribers = registry.len(), "subscribers registered");

        for key in &self.channels {
            let label = key.trim().to_uppercase();
            println!("\n=== Channel: {label} ===");

            let channel = match factory.create(key) {
                Ok(channel) => channel,
                Err(e) => {
                    error!("skipping channel: {}", e);
                    outcome.rejected.push(key.clone());
                    continue;
                }
            };

            let message = update_message(&label);
            channel.send(&message);
            registry.broadcast(&message);
            outcome.sent.push(channel.key().to_string());
        }

        match users.iter().find(|u| u.name == self.unsubscribe) {
            Some(user) => {
                registry.remove(user);
                println!("\n--- {} unsubscribed ---\n", user.name);
                outcome.unsubscribed = Some(user.name.clone());
            }
            None => warn!(name = %self.unsubscribe, "no such subscriber to remove"),
        }

        let channel = factory.create(ChannelKind::Email.as_str())?;
        channel.send(&self.final_message);
        registry.broadcast(&self.final_message);
        outcome.sent.push(channel.key().to_string());

        Ok(outcome)
    }
}

fn update_message(label: &str) -> String {
    format!("New update available ({label})")
}
