use rcssbot::config;
use rcssbot::node::{execute_nodes, Node};
use rcssbot::transport::UdpTransport;
use rcssbot::{Agent, AgentResult};
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn custom_ctrlc_handler(ctrlc_tx: broadcast::Sender<()>) -> AgentResult<()> {
    let mut ctrlc_sent = false;
    ctrlc::set_handler(move || {
        if !ctrlc_sent {
            info!("CTRL-C received, stopping agents... press again to terminate forcefully");
            // No receivers left means every agent has already stopped
            let _ = ctrlc_tx.send(());
            ctrlc_sent = true;
        } else {
            info!("Terminating forcefully");
            std::process::exit(1);
        }
    })
    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    Ok(())
}

async fn run() -> AgentResult<bool> {
    // Read configuration file
    let config = config::read_from_disk()?;

    // Create channel for CTRL-C
    let (ctrlc_tx, _) = broadcast::channel(1);

    let mut agents: Vec<Box<dyn Node>> = Vec::new();
    for &port in &config.agent.local_ports {
        let transport = UdpTransport::bind(port, config.agent.receive_timeout()).await?;
        let local_port = transport.local_port()?;
        agents.push(Box::new(Agent::new(
            transport,
            &config,
            local_port,
            ctrlc_tx.subscribe(),
        )?));
    }

    custom_ctrlc_handler(ctrlc_tx)?;

    let names: Vec<String> = agents.iter().map(|agent| agent.name()).collect();
    let results = execute_nodes(agents).await;

    let mut all_ok = true;
    for (name, result) in names.iter().zip(results) {
        if let Err(err) = result {
            error!("Agent {} failed: {}", name, err);
            all_ok = false;
        }
    }
    Ok(all_ok)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
