use crate::error::{AgentError, AgentResult};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Server {
        Server {
            host: "127.0.0.1".to_owned(),
            port: 6000,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    pub local_ports: Vec<u16>,
    pub goalie_ports: Vec<u16>,
    pub protocol_version: u32,
    pub cycle_delay_ms: u64,
    pub message_max_size: usize,
    pub receive_timeout_ms: u64,
}

impl Default for AgentSettings {
    fn default() -> AgentSettings {
        AgentSettings {
            local_ports: vec![7001],
            goalie_ports: vec![7001, 8001],
            protocol_version: 19,
            cycle_delay_ms: 50,
            message_max_size: 4096,
            receive_timeout_ms: 5000,
        }
    }
}

impl AgentSettings {
    pub fn is_goalie_port(&self, port: u16) -> bool {
        self.goalie_ports.contains(&port)
    }

    pub fn cycle_delay(&self) -> Duration {
        Duration::from_millis(self.cycle_delay_ms)
    }

    pub fn receive_timeout(&self) -> Duration {
        Duration::from_millis(self.receive_timeout_ms)
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub team: String,
    pub server: Server,
    pub agent: AgentSettings,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            team: "rustics".to_owned(),
            server: Server::default(),
            agent: AgentSettings::default(),
        }
    }
}

impl Config {
    pub fn server_addr(&self) -> AgentResult<SocketAddr> {
        (self.server.host.as_str(), self.server.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                AgentError::InvalidConfig(format!("cannot resolve server host {}", self.server.host))
            })
    }

    pub fn validate(&self) -> AgentResult<()> {
        if self.team.is_empty() {
            return Err(AgentError::InvalidConfig("team name is empty".to_owned()));
        }
        if self
            .team
            .chars()
            .any(|c| c.is_whitespace() || c == '(' || c == ')')
        {
            return Err(AgentError::InvalidConfig(format!(
                "team name {:?} contains whitespace or parentheses",
                self.team
            )));
        }
        if self.agent.local_ports.is_empty() {
            return Err(AgentError::InvalidConfig("no local ports configured".to_owned()));
        }
        if self.agent.message_max_size == 0 {
            return Err(AgentError::InvalidConfig("message_max_size must be positive".to_owned()));
        }
        self.server_addr()?;
        Ok(())
    }
}

#[derive(Parser, Debug, Default)]
#[command(about = "Chase-and-kick client for the RoboCup soccer server")]
pub struct Args {
    /// YAML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub team: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub server_port: Option<u16>,

    /// Local UDP port; repeat to start one agent per port
    #[arg(long = "port")]
    pub ports: Vec<u16>,

    #[arg(long)]
    pub cycle_delay_ms: Option<u64>,
}

pub fn read_from_disk() -> AgentResult<Config> {
    load(Args::parse())
}

pub fn load(args: Args) -> AgentResult<Config> {
    let mut config: Config = match &args.config {
        Some(path) => serde_yaml::from_str(&fs::read_to_string(path)?)?,
        None => match fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(string) => serde_yaml::from_str(&string)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                Config::default()
            }
            Err(err) => return Err(err.into()),
        },
    };

    // Command line wins over the file
    if let Some(team) = args.team {
        config.team = team;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.server_port {
        config.server.port = port;
    }
    if !args.ports.is_empty() {
        config.agent.local_ports = args.ports;
    }
    if let Some(delay) = args.cycle_delay_ms {
        config.agent.cycle_delay_ms = delay;
    }

    config.validate()?;
    info!(
        "Team {} connecting to {}:{} from ports {:?}",
        config.team, config.server.host, config.server.port, config.agent.local_ports
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args_for(file: &tempfile::NamedTempFile) -> Args {
        Args {
            config: Some(file.path().to_string_lossy().into_owned()),
            ..Args::default()
        }
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "team: blues\nagent:\n  local_ports: [7002, 7003]").unwrap();

        let config = load(args_for(&file)).unwrap();
        assert_eq!(config.team, "blues");
        assert_eq!(config.agent.local_ports, vec![7002, 7003]);
        assert_eq!(config.agent.goalie_ports, vec![7001, 8001]);
        assert_eq!(config.agent.cycle_delay_ms, 50);
        assert_eq!(config.server, Server::default());
    }

    #[test]
    fn command_line_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "team: blues\nserver:\n  port: 6001").unwrap();

        let args = Args {
            team: Some("reds".to_owned()),
            ports: vec![8001],
            cycle_delay_ms: Some(10),
            ..args_for(&file)
        };
        let config = load(args).unwrap();
        assert_eq!(config.team, "reds");
        assert_eq!(config.server.port, 6001);
        assert_eq!(config.agent.local_ports, vec![8001]);
        assert_eq!(config.agent.cycle_delay(), Duration::from_millis(10));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let args = Args {
            config: Some("/nonexistent/rcssbot.yaml".to_owned()),
            ..Args::default()
        };
        assert!(matches!(load(args), Err(AgentError::Io(_))));
    }

    #[test]
    fn rejects_bad_team_names() {
        let mut config = Config::default();
        config.team = "two words".to_owned();
        assert!(matches!(config.validate(), Err(AgentError::InvalidConfig(_))));

        config.team = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn goalie_ports() {
        let settings = AgentSettings::default();
        assert!(settings.is_goalie_port(7001));
        assert!(settings.is_goalie_port(8001));
        assert!(!settings.is_goalie_port(7002));
    }
}
