use std::{collections::HashMap, fmt, sync::Arc};

use tracing::debug;

use crate::{
    channel::{Channel, ChannelKind, normalize},
    error::{NotifyError, Result},
};

pub type Constructor = Arc<dyn Fn() -> Box<dyn Channel> + Send + Sync>;

/// Creates a new channel for `type_key` (trimmed, case-insensitive).
///
/// ```
/// use notify_core::{Channel, NotifyError, create};
///
/// assert_eq!(create(" EMAIL ").unwrap().key(), "email");
/// assert_eq!(
///     create("fax").unwrap_err(),
///     NotifyError::InvalidChannelType("fax".into()),
/// );
/// ```
pub fn create(type_key: &str) -> Result<Box<dyn Channel>> {
    let kind: ChannelKind = type_key.parse()?;
    Ok(kind.build())
}

/// Key to constructor table. `Default` registers the built-in kinds; further
/// channels are added with [`ChannelFactory::register`].
#[derive(Clone)]
pub struct ChannelFactory {
    constructors: HashMap<String, Constructor>,
}

impl ChannelFactory {
    /// A factory that knows no channels.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registers `constructor` under the normalized `key`, replacing any
    /// previous entry.
    #[must_use]
    pub fn register<F>(mut self, key: &str, constructor: F) -> Self
    where
        F: Fn() -> Box<dyn Channel> + Send + Sync + 'static,
    {
        let key = normalize(key);
        debug!(key = %key, "channel registered");
        self.constructors.insert(key, Arc::new(constructor));
        self
    }

    pub fn create(&self, type_key: &str) -> Result<Box<dyn Channel>> {
        match self.constructors.get(&normalize(type_key)) {
            Some(constructor) => Ok(constructor()),
            None => Err(NotifyError::InvalidChannelType(type_key.to_string())),
        }
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn supports(&self, type_key: &str) -> bool {
        self.constructors.contains_key(&normalize(type_key))
    }
}

impl Default for ChannelFactory {
    fn default() -> Self {
        ChannelKind::ALL
            .into_iter()
            .fold(Self::empty(), |factory, kind| {
                factory.register(kind.as_str(), move || kind.build())
            })
    }
}

impl fmt::Debug for ChannelFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelFactory")
            .field("keys", &self.keys())
            .finish()
    }
}
