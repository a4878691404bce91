use clap::Parser;

/// Winter — terminal uplink to the portfolio assistant.
#[derive(Parser, Debug)]
#[command(name = "winter", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. debug, winter=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model identifier override.
    #[arg(long)]
    pub model: Option<String>,

    /// Send a single message, print the transcript, and exit.
    #[arg(long, value_name = "TEXT")]
    pub once: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::parse_from([
            "winter",
            "--config",
            "/tmp/winter.toml",
            "--log-level",
            "debug",
            "--model",
            "gemini-2.0-flash",
            "--once",
            "hello",
        ]);
        assert_eq!(args.config.as_deref(), Some("/tmp/winter.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(args.once.as_deref(), Some("hello"));
    }

    #[test]
    fn no_flags_means_interactive() {
        let args = Args::parse_from(["winter"]);
        assert!(args.once.is_none());
        assert!(args.config.is_none());
    }
}
