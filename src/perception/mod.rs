use crate::math::Point;
use serde::{Deserialize, Serialize};

pub mod formation;

pub use self::formation::kick_off_position;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    #[default]
    Unknown,
}

impl Side {
    pub fn from_token(token: &str) -> Side {
        match token {
            "l" => Side::Left,
            "r" => Side::Right,
            _ => Side::Unknown,
        }
    }
}

/// One observed field object. `dist` and `dir` are stale (or zero) whenever
/// `visible` is false.
#[derive(Debug, PartialEq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub dist: f64,
    pub dir: f64,
    pub visible: bool,
}

impl ObjectInfo {
    pub fn seen(dist: f64, dir: f64) -> ObjectInfo {
        ObjectInfo {
            dist,
            dir,
            visible: true,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct SeeInfo {
    pub time: i32,
    pub ball: ObjectInfo,
    pub own_goal: ObjectInfo,
    pub opp_goal: ObjectInfo,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct SenseInfo {
    pub time: i32,
    pub speed: f64,
    pub stamina: f64,
    pub head_angle: f64,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub team: String,
    pub side: Side,
    pub number: i32,
    pub play_mode: String,
    pub see: SeeInfo,
    pub sense: SenseInfo,
    pub initial_position: Point,
}

impl PlayerInfo {
    pub fn new(team: impl Into<String>) -> PlayerInfo {
        PlayerInfo {
            team: team.into(),
            ..PlayerInfo::default()
        }
    }
}

impl Default for PlayerInfo {
    fn default() -> PlayerInfo {
        PlayerInfo {
            team: String::new(),
            side: Side::Unknown,
            number: -1,
            play_mode: String::new(),
            see: SeeInfo::default(),
            sense: SenseInfo::default(),
            initial_position: Point::ORIGIN,
        }
    }
}
