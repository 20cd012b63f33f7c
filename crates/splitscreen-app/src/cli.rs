use clap::Parser;

/// Splitscreen: up to four live streams tiled on one screen.
#[derive(Parser, Debug)]
#[command(name = "splitscreen", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log directive override (e.g. `splitscreen=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start/reset URL override.
    #[arg(long)]
    pub url: Option<String>,

    /// Number of panes shown at startup (1-4).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=4))]
    pub panes: Option<u32>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_overrides() {
        let args = Args::try_parse_from([
            "splitscreen",
            "--config",
            "/tmp/s.toml",
            "--log-level",
            "splitscreen=debug",
            "--url",
            "https://example.com",
            "--panes",
            "3",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/s.toml"));
        assert_eq!(args.log_level.as_deref(), Some("splitscreen=debug"));
        assert_eq!(args.url.as_deref(), Some("https://example.com"));
        assert_eq!(args.panes, Some(3));
    }

    #[test]
    fn no_args_is_valid() {
        let args = Args::try_parse_from(["splitscreen"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.panes.is_none());
    }

    #[test]
    fn rejects_pane_count_out_of_range() {
        assert!(Args::try_parse_from(["splitscreen", "--panes", "0"]).is_err());
        assert!(Args::try_parse_from(["splitscreen", "--panes", "5"]).is_err());
    }
}
