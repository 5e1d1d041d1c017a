use std::{fmt, str::FromStr};

use tracing::trace;

use crate::error::NotifyError;

/// A medium a message can be sent through. Sending is simulated by printing a
/// labelled line to stdout.
///
/// Channels registered through [`ChannelFactory`](crate::ChannelFactory) are
/// not limited to [`ChannelKind`]; they report their own key and label.
pub trait Channel: fmt::Debug + Send + Sync {
    /// Lowercase factory key, e.g. `"sms"`.
    fn key(&self) -> &str;

    /// Human readable tag shown in brackets on every rendered line.
    fn label(&self) -> &str;

    fn render(&self, message: &str) -> String;

    fn send(&self, message: &str) {
        trace!(channel = self.key(), "sending");
        println!("{}", self.render(message));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Email,
    Sms,
    Push,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 3] = [ChannelKind::Email, ChannelKind::Sms, ChannelKind::Push];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Email => "email",
            ChannelKind::Sms => "sms",
            ChannelKind::Push => "push",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Email => "Email",
            ChannelKind::Sms => "SMS",
            ChannelKind::Push => "Push",
        }
    }

    /// Constructs a fresh channel of this kind.
    #[must_use]
    pub fn build(self) -> Box<dyn Channel> {
        match self {
            ChannelKind::Email => Box::new(EmailChannel),
            ChannelKind::Sms => Box::new(SmsChannel),
            ChannelKind::Push => Box::new(PushChannel),
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trims and case-folds the input. Errors carry the input untouched.
impl FromStr for ChannelKind {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "email" => Ok(ChannelKind::Email),
            "sms" => Ok(ChannelKind::Sms),
            "push" => Ok(ChannelKind::Push),
            _ => Err(NotifyError::InvalidChannelType(s.to_string())),
        }
    }
}

pub(crate) fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct EmailChannel;

impl Channel for EmailChannel {
    fn key(&self) -> &str {
        ChannelKind::Email.as_str()
    }

    fn label(&self) -> &str {
        ChannelKind::Email.label()
    }

    fn render(&self, message: &str) -> String {
        format!("📧 [{}] Sending email: {message}", self.label())
    }
}

#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct SmsChannel;

impl Channel for SmsChannel {
    fn key(&self) -> &str {
        ChannelKind::Sms.as_str()
    }

    fn label(&self) -> &str {
        ChannelKind::Sms.label()
    }

    fn render(&self, message: &str) -> String {
        format!("📱 [{}] Sending SMS: {message}", self.label())
    }
}

#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct PushChannel;

impl Channel for PushChannel {
    fn key(&self) -> &str {
        ChannelKind::Push.as_str()
    }

    fn label(&self) -> &str {
        ChannelKind::Push.label()
    }

    fn render(&self, message: &str) -> String {
        format!("🔔 [{}] Sending push notification: {message}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        for raw in ["email", "EMAIL", " email ", "\tEmAiL\n"] {
            assert_eq!(raw.parse::<ChannelKind>(), Ok(ChannelKind::Email), "{raw:?}");
        }
        assert_eq!(" SMS".parse::<ChannelKind>(), Ok(ChannelKind::Sms));
        assert_eq!("Push  ".parse::<ChannelKind>(), Ok(ChannelKind::Push));
    }

    #[test]
    fn test_parse_rejects_unknown_with_raw_input() {
        let err = " Carrier-Pigeon ".parse::<ChannelKind>().unwrap_err();
        assert_eq!(
            err,
            NotifyError::InvalidChannelType(" Carrier-Pigeon ".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_empty_and_blank() {
        assert!("".parse::<ChannelKind>().is_err());
        assert!("   ".parse::<ChannelKind>().is_err());
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for kind in ChannelKind::ALL {
            assert_eq!(kind.as_str().parse::<ChannelKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_build_reports_kind_key_and_label() {
        for kind in ChannelKind::ALL {
            let channel = kind.build();
            assert_eq!(channel.key(), kind.as_str());
            assert_eq!(channel.label(), kind.label());
        }
    }

    #[test]
    fn test_rendered_lines_carry_distinct_labels() {
        let lines: Vec<String> = ChannelKind::ALL
            .iter()
            .map(|k| k.build().render("ping"))
            .collect();

        assert_eq!(lines[0], "📧 [Email] Sending email: ping");
        assert_eq!(lines[1], "📱 [SMS] Sending SMS: ping");
        assert_eq!(lines[2], "🔔 [Push] Sending push notification: ping");
        for (line, kind) in lines.iter().zip(ChannelKind::ALL) {
            assert!(line.contains(&format!("[{}]", kind.label())));
        }
    }
}
