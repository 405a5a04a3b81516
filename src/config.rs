use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "http-server")]
#[command(
    about = "Minimal HTTP/1.1 server with echo, user-agent and file routes",
    long_about = None
)]
pub struct Cli {
    /// Directory that /files reads from and writes to
    #[arg(long, default_value = ".")]
    pub directory: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:4221")]
    pub address: SocketAddr,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub directory: PathBuf,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        ServerConfig {
            bind_addr: cli.address,
            directory: cli.directory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: ServerConfig = Cli::parse_from(["http-server"]).into();

        let expected: SocketAddr = "0.0.0.0:4221".parse().unwrap();
        assert_eq!(config.bind_addr, expected);
        assert_eq!(config.directory, PathBuf::from("."));
    }

    #[test]
    fn directory_flag() {
        let config: ServerConfig =
            Cli::parse_from(["http-server", "--directory", "/tmp/data"]).into();

        assert_eq!(config.directory, PathBuf::from("/tmp/data"));
    }
}
