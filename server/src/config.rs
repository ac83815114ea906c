//! Command-line and environment configuration.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(about = "Serve the htmx todo list")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Start with the sample todos instead of an empty list.
    #[arg(long, env = "TODO_SEED")]
    pub seed: bool,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config =
            Config::try_parse_from(["todo-server", "--host", "0.0.0.0", "--port", "8080", "--seed"])
                .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert!(config.seed);
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Config::try_parse_from(["todo-server", "--port", "http"]).is_err());
    }
}
