use crate::behavior::decide_action;
use crate::config::{AgentSettings, Config};
use crate::error::{AgentError, AgentResult};
use crate::node::Node;
use crate::perception::PlayerInfo;
use crate::protocol::message::{decode, error_reason};
use crate::protocol::{parse_init, parse_see, parse_sense, Command, MessageKind};
use crate::transport::Transport;
use async_trait::async_trait;
use std::net::SocketAddr;
use tokio::sync::broadcast::Receiver;
use tracing::{debug, info, trace, warn, Level};

/// One player connection. Owns the player's state; nothing is shared between
/// agents.
pub struct Agent<T: Transport> {
    transport: T,
    settings: AgentSettings,
    local_port: u16,
    server: SocketAddr,
    player: PlayerInfo,
    drop_rx: Receiver<()>,
    stopped: bool,
}

impl<T: Transport> Agent<T> {
    pub fn new(
        transport: T,
        config: &Config,
        local_port: u16,
        drop_rx: Receiver<()>,
    ) -> AgentResult<Agent<T>> {
        Ok(Agent {
            transport,
            settings: config.agent.clone(),
            local_port,
            server: config.server_addr()?,
            player: PlayerInfo::new(config.team.clone()),
            drop_rx,
            stopped: false,
        })
    }

    pub fn player(&self) -> &PlayerInfo {
        &self.player
    }

    /// Address commands are sent to. Switches to the server's per-client
    /// port once the init reply arrives.
    pub fn server(&self) -> SocketAddr {
        self.server
    }

    async fn send(&mut self, command: &Command) -> AgentResult<()> {
        self.transport.send_to(&command.encode(), self.server).await
    }

    async fn receive(&mut self) -> AgentResult<(String, SocketAddr)> {
        let (bytes, sender) = self.transport.receive(self.settings.message_max_size).await?;
        let msg = decode(&bytes);
        trace!("Received {}", msg);
        Ok((msg, sender))
    }

    /// Registers with the server and moves to the kick-off slot.
    pub async fn handshake(&mut self) -> AgentResult<()> {
        let init = Command::Init {
            team: self.player.team.clone(),
            version: self.settings.protocol_version,
            goalie: self.settings.is_goalie_port(self.local_port),
        };
        info!("Sending {}", init);
        self.send(&init).await?;

        let (msg, sender) = self.receive().await?;
        match MessageKind::classify(&msg) {
            MessageKind::Init => {}
            MessageKind::Error => {
                return Err(AgentError::Rejected {
                    reason: error_reason(&msg),
                })
            }
            _ => return Err(AgentError::UnexpectedReply { message: msg }),
        }

        parse_init(&msg, &mut self.player)?;
        self.server = sender;
        info!(
            "Player created (side: {:?}, number: {}, playmode: {}, position: ({}, {}))",
            self.player.side,
            self.player.number,
            self.player.play_mode,
            self.player.initial_position.x,
            self.player.initial_position.y
        );

        let move_cmd = Command::Move(self.player.initial_position);
        info!("Sending {}", move_cmd);
        self.send(&move_cmd).await
    }

    /// Runs exactly one receive-parse-decide-send cycle and returns the
    /// command that was sent, if any. Only `see` messages trigger a decision.
    pub async fn step(&mut self) -> AgentResult<Option<Command>> {
        let (msg, _) = self.receive().await?;

        let should_act = match MessageKind::classify(&msg) {
            MessageKind::See => {
                if let Err(err) = parse_see(&msg, &mut self.player) {
                    warn!("Partial see message: {}", err);
                }
                if tracing::enabled!(Level::DEBUG) {
                    debug!(
                        "See {}",
                        serde_json::to_string(&self.player.see).unwrap_or_default()
                    );
                }
                true
            }
            MessageKind::SenseBody => {
                if let Err(err) = parse_sense(&msg, &mut self.player) {
                    warn!("Partial sense_body message: {}", err);
                }
                false
            }
            MessageKind::Error => {
                warn!("Server reported error: {}", error_reason(&msg));
                false
            }
            MessageKind::Init => {
                debug!("Ignoring repeated init message");
                false
            }
            MessageKind::Other(tag) => {
                trace!("Ignoring {} message", tag);
                false
            }
        };

        if !should_act {
            return Ok(None);
        }

        let command = decide_action(&self.player);
        if let Some(cmd) = &command {
            debug!("Sending {}", cmd);
            self.send(cmd).await?;
        }
        Ok(command)
    }

    async fn cycle(&mut self) -> AgentResult<Option<Command>> {
        let result = self.step().await;
        tokio::time::sleep(self.settings.cycle_delay()).await;
        result
    }

    /// Takes the stored shutdown receiver so a signal already queued on it
    /// is seen; a resubscribed receiver only sees later signals.
    fn take_drop_rx(&mut self) -> Receiver<()> {
        let fresh = self.drop_rx.resubscribe();
        std::mem::replace(&mut self.drop_rx, fresh)
    }

    /// True once shutdown was signalled, during the handshake or the loop.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Handshake that gives up when shutdown is signalled first.
    pub async fn handshake_until_shutdown(&mut self) -> AgentResult<()> {
        let mut drop_rx = self.take_drop_rx();
        let outcome = tokio::select! {
            _ = drop_rx.recv() => None,
            result = self.handshake() => Some(result),
        };
        self.drop_rx = drop_rx;

        match outcome {
            Some(result) => result,
            None => {
                info!("Agent stopping before the handshake completed");
                self.stopped = true;
                Ok(())
            }
        }
    }

    /// Repeats cycles until shutdown is signalled. Timeouts and transport
    /// errors skip the cycle; anything else ends the loop.
    pub async fn run_cycles(&mut self) -> AgentResult<()> {
        if self.stopped {
            return Ok(());
        }
        let mut drop_rx = self.take_drop_rx();

        loop {
            let outcome = tokio::select! {
                _ = drop_rx.recv() => None,
                result = self.cycle() => Some(result),
            };

            match outcome {
                None => break,
                Some(Ok(_)) => {}
                Some(Err(err)) if !err.is_fatal() => warn!("Skipping cycle: {}", err),
                Some(Err(err)) => {
                    self.drop_rx = drop_rx;
                    return Err(err);
                }
            }
        }

        info!("Agent stopping");
        self.drop_rx = drop_rx;
        self.stopped = true;
        Ok(())
    }
}

#[async_trait]
impl<T: Transport> Node for Agent<T> {
    fn name(&self) -> String {
        format!("{}:{}", self.player.team, self.local_port)
    }

    async fn init(&mut self) -> AgentResult<()> {
        self.handshake_until_shutdown().await
    }

    async fn run(&mut self) -> AgentResult<()> {
        self.run_cycles().await
    }
}
