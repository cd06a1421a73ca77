use crate::error::NotifierError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

// Deliberately loose: this is a boundary-layer plausibility check, not an
// RFC 5321 validator.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w\-]+(\.[\w\-]+)*@([\w\-]+\.)+[A-Za-z]{2,7}$")
        .expect("email pattern is a valid regex")
});

/// Loose format check for a recipient address, applied before any send is
/// attempted.
pub fn is_plausible_email(address: &str) -> bool {
    EMAIL_PATTERN.is_match(address)
}

/// The report mailer, stubbed on purpose.
///
/// There is no real delivery path in this system: "sending" a report means
/// the document has already been generated and the outcome is reported to the
/// user. This type makes that simplification explicit instead of hiding it
/// behind a transport that silently drops mail. A real transport would
/// replace this struct behind the same method signature.
#[derive(Debug, Clone)]
pub struct StubMailer {
    from: String,
}

impl StubMailer {
    pub fn new(settings: &configuration::Notifier) -> Self {
        let from = if settings.mail_from.is_empty() {
            "reports@salescope.local".to_string()
        } else {
            settings.mail_from.clone()
        };
        Self { from }
    }

    /// "Sends" the exported report document to the recipient.
    ///
    /// Rejects implausible addresses; otherwise logs the handoff and reports
    /// success without performing any delivery.
    pub fn send_report(&self, recipient: &str, document: &Path) -> Result<(), NotifierError> {
        if !is_plausible_email(recipient) {
            return Err(NotifierError::InvalidRecipient(recipient.to_string()));
        }

        tracing::info!(
            from = %self.from,
            to = %recipient,
            document = %document.display(),
            "Stub mailer: report handed off (no real delivery)."
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_plausible_email("sales@example.com"));
        assert!(is_plausible_email("first.last@sub.example.co"));
        assert!(is_plausible_email("a_b-c@example.io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("plainaddress"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@"));
        assert!(!is_plausible_email("user@nodot"));
        assert!(!is_plausible_email("user@example."));
        assert!(!is_plausible_email("two words@example.com"));
    }

    #[test]
    fn stub_mailer_rejects_bad_recipients_and_accepts_good_ones() {
        let mailer = StubMailer::new(&configuration::Notifier::default());
        let doc = PathBuf::from("reports/win_rate_report_20260826_103000.txt");

        assert!(matches!(
            mailer.send_report("not-an-address", &doc),
            Err(NotifierError::InvalidRecipient(_))
        ));
        assert!(mailer.send_report("lead@example.com", &doc).is_ok());
    }
}
