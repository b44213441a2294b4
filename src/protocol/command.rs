use crate::math::Point;
use std::fmt;

/// Outbound protocol command. `Display` renders the wire text.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Init {
        team: String,
        version: u32,
        goalie: bool,
    },
    Move(Point),
    Turn(f64),
    Dash(f64),
    Kick { power: f64, direction: f64 },
}

impl Command {
    /// Wire bytes: the rendered command followed by a NUL terminator.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = self.to_string().into_bytes();
        bytes.push(0);
        bytes
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Init {
                team,
                version,
                goalie,
            } => {
                write!(f, "(init {} (version {})", team, version)?;
                if *goalie {
                    write!(f, " (goalie)")?;
                }
                write!(f, ")")
            }
            Command::Move(p) => write!(f, "(move {} {})", p.x, p.y),
            Command::Turn(moment) => write!(f, "(turn {})", moment),
            Command::Dash(power) => write!(f, "(dash {})", power),
            Command::Kick { power, direction } => write!(f, "(kick {} {})", power, direction),
        }
    }
}
