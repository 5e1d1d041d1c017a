pub mod channel;
pub mod error;
pub mod factory;
pub mod listener;
pub mod registry;
pub mod user;

pub use channel::{Channel, ChannelKind, EmailChannel, PushChannel, SmsChannel};
pub use error::{NotifyError, Result};
pub use factory::{ChannelFactory, create};
pub use listener::Listener;
pub use registry::Registry;
pub use user::User;
