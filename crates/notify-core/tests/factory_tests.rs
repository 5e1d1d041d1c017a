use std::sync::{Arc, Mutex};

use notify_core::{Channel, ChannelFactory, Listener, NotifyError, Registry, create};

#[test]
fn test_email_key_variants_all_yield_email() {
    for key in ["EMAIL", " email ", "email"] {
        let channel = create(key).unwrap();
        assert_eq!(channel.key(), "email", "key {key:?}");
        assert_eq!(channel.label(), "Email", "key {key:?}");
    }
}

#[test]
fn test_unknown_key_is_rejected_with_input() {
    let err = create("carrier-pigeon").unwrap_err();
    assert_eq!(err, NotifyError::InvalidChannelType("carrier-pigeon".into()));
    assert!(err.to_string().contains("carrier-pigeon"));
}

#[test]
fn test_free_function_and_table_agree() {
    let factory = ChannelFactory::default();
    for key in ["email", "Sms", " PUSH", "", "pager"] {
        let direct = create(key).map(|c| c.key().to_string());
        let table = factory.create(key).map(|c| c.key().to_string());
        assert_eq!(direct, table, "key {key:?}");
    }
}

#[derive(Debug)]
struct PagerChannel;

impl Channel for PagerChannel {
    fn key(&self) -> &str {
        "pager"
    }

    fn label(&self) -> &str {
        "Pager"
    }

    fn render(&self, message: &str) -> String {
        format!("📟 [{}] Paging: {message}", self.label())
    }
}

#[test]
fn test_custom_channel_can_be_registered() {
    let factory = ChannelFactory::default().register("pager", || Box::new(PagerChannel));

    let pager = factory.create(" Pager ").unwrap();

    assert_eq!(pager.key(), "pager");
    assert_eq!(pager.label(), "Pager");
    assert_eq!(pager.render("beep"), "📟 [Pager] Paging: beep");
    assert_eq!(factory.keys(), vec!["email", "pager", "push", "sms"]);
    assert!(create("pager").is_err());
}

struct Counter(Mutex<usize>);

impl Listener for Counter {
    fn receive(&self, _message: &str) {
        *self.0.lock().unwrap() += 1;
    }
}

#[test]
fn test_failed_creation_leaves_registry_and_channels_intact() {
    // Arrange
    let registry = Registry::new();
    let counter = Arc::new(Counter(Mutex::new(0)));
    registry.add(counter.clone());
    let email = create("email").unwrap();

    // Act
    let failed = create("smoke-signal");

    // Assert
    assert!(failed.is_err());
    assert_eq!(registry.len(), 1);
    assert_eq!(email.key(), "email");
    registry.broadcast(&email.render("still fine"));
    assert_eq!(*counter.0.lock().unwrap(), 1);
}
