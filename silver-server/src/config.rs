//! Server configuration from the environment and command line.

use crate::error::ServerError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 5000;

pub const USAGE: &str = "\
silver-server

USAGE:
  silver-server [--bind HOST:PORT] [--port PORT]

ENV:
  BIND  full HOST:PORT, overrides PORT
  PORT  default 5000, served on 127.0.0.1
";

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve(ServerConfig),
    Help,
}

impl ServerConfig {
    /// Read `BIND`/`PORT` from the process environment, then apply flags.
    pub fn from_env_and_args() -> Result<Command, ServerError> {
        Self::parse(|key| std::env::var(key).ok(), std::env::args().skip(1))
    }

    /// Build a config from an explicit environment lookup and argument list.
    ///
    /// Flags win over `BIND`, and `BIND` wins over `PORT`.
    pub fn parse<F, I>(env: F, args: I) -> Result<Command, ServerError>
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let mut config = ServerConfig::default();

        if let Some(port) = env("PORT") {
            config.bind.set_port(parse_port(&port)?);
        }
        if let Some(bind) = env("BIND") {
            config.bind = parse_bind(&bind)?;
        }

        let mut it = args.into_iter();
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--bind" => {
                    let v = it.next().ok_or_else(|| missing_value("--bind"))?;
                    config.bind = parse_bind(&v)?;
                }
                "--port" => {
                    let v = it.next().ok_or_else(|| missing_value("--port"))?;
                    config.bind.set_port(parse_port(&v)?);
                }
                "-h" | "--help" => return Ok(Command::Help),
                other => {
                    return Err(ServerError::Config(format!("unknown argument {other:?}")));
                }
            }
        }

        Ok(Command::Serve(config))
    }
}

fn parse_port(s: &str) -> Result<u16, ServerError> {
    s.trim()
        .parse()
        .map_err(|_| ServerError::Config(format!("invalid port {s:?}")))
}

fn parse_bind(s: &str) -> Result<SocketAddr, ServerError> {
    s.trim()
        .parse()
        .map_err(|_| ServerError::Config(format!("invalid bind address {s:?}")))
}

fn missing_value(flag: &str) -> ServerError {
    ServerError::Config(format!("{flag} requires a value"))
}
