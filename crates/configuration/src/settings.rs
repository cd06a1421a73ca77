use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub report: Report,
    pub notifier: Notifier,
}

/// Bind parameters for the HTTP API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    /// The interface the API listens on.
    pub host: String,
    /// The TCP port the API listens on.
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Parameters for the exported report document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Report {
    /// Directory where exported report documents are written.
    pub output_dir: PathBuf,
    /// Title printed at the head of every exported document.
    pub title: String,
    /// ISO currency code printed alongside monetary values.
    pub currency_code: String,
    /// Currency symbol used when formatting monetary values for display.
    pub currency_symbol: String,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            title: "B2B Sales Win Rate Report".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
        }
    }
}

/// Parameters for the notification collaborators.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Notifier {
    /// Optional URL to which warning/error notifications are forwarded as
    /// JSON. Forwarding is disabled when empty.
    pub webhook_url: String,
    /// Sender address the (stubbed) report mailer announces itself as.
    pub mail_from: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.report.output_dir, PathBuf::from("reports"));
        assert!(config.notifier.webhook_url.is_empty());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults_per_field() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 9000\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.report.currency_code, "INR");
    }
}
