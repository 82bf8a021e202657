use clap::Parser;

use chatpanel_config::PanelConfig;

/// chatpanel: drive an embedded assistant panel over JSON lines on stdin.
#[derive(Parser, Debug)]
#[command(name = "chatpanel", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. chatpanel=debug).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Workflow id override.
    #[arg(long)]
    pub workflow_id: Option<String>,

    /// Session endpoint override.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Log session and render diagnostics.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the widget options for the configured scheme and exit.
    #[arg(long)]
    pub print_options: bool,
}

impl Args {
    /// Fold command-line overrides into a loaded config. Flags win over
    /// both the file and the environment.
    pub fn apply_to(&self, config: &mut PanelConfig) {
        if let Some(ref id) = self.workflow_id {
            config.session.workflow_id = id.clone();
        }
        if let Some(ref endpoint) = self.endpoint {
            config.session.endpoint = endpoint.clone();
        }
        if self.verbose {
            config.logging.verbose = true;
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from([
            "chatpanel",
            "--workflow-id",
            "wf_cli",
            "--endpoint",
            "http://localhost:9000/session",
            "--verbose",
        ])
        .unwrap();

        let mut config = PanelConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.session.workflow_id, "wf_cli");
        assert_eq!(config.session.endpoint, "http://localhost:9000/session");
        assert!(config.logging.verbose);
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let args = Args::try_parse_from(["chatpanel"]).unwrap();
        let mut config = PanelConfig::default();
        config.session.workflow_id = "wf_file".into();
        args.apply_to(&mut config);
        assert_eq!(config.session.workflow_id, "wf_file");
        assert!(!config.logging.verbose);
        assert!(!args.print_options);
    }
}
