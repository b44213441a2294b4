use crate::error::ParseError;
use crate::perception::{kick_off_position, ObjectInfo, PlayerInfo, Side};
use crate::protocol::object::{parse_object_info, BALL_TAG, LEFT_GOAL_TAG, RIGHT_GOAL_TAG};
use crate::protocol::tokenizer::Tokenizer;
use tracing::warn;

/// `(init <side> <unum> <playmode>)`
///
/// Sets side, jersey number, play mode and the derived kick-off slot. A
/// missing or non-numeric jersey number is an error; an unknown side is not.
pub fn parse_init(msg: &str, player: &mut PlayerInfo) -> Result<(), ParseError> {
    let mut tokens = Tokenizer::new(msg);
    let _tag = tokens.next_token();

    let side = tokens.next_token().unwrap_or_default();
    let number_tok = tokens
        .next_token()
        .ok_or(ParseError::MissingToken { field: "number" })?;
    let number = number_tok
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidNumber {
            field: "number",
            token: number_tok.to_owned(),
        })?;

    player.side = Side::from_token(side);
    player.number = number;
    player.play_mode = tokens.next_token().unwrap_or_default().to_owned();
    player.initial_position = kick_off_position(number);

    Ok(())
}

/// `(see <time> ... ((b) d a) ... ((g l) d a) ... ((g r) d a) ...)`
///
/// Only `player.see` is touched. All three object lookups are attempted even
/// if one of them fails; a malformed object is logged and left invisible. A
/// malformed time keeps the previous time and is returned after the lookups.
pub fn parse_see(msg: &str, player: &mut PlayerInfo) -> Result<(), ParseError> {
    let mut tokens = Tokenizer::new(msg);
    let _tag = tokens.next_token();

    let time = match tokens.next_token() {
        Some(tok) => tok.parse::<i32>().map_err(|_| ParseError::InvalidNumber {
            field: "time",
            token: tok.to_owned(),
        }),
        None => Err(ParseError::MissingToken { field: "time" }),
    };
    if let Ok(time) = time {
        player.see.time = time;
    }

    let see = &mut player.see;
    extract(msg, BALL_TAG, &mut see.ball);

    match player.side {
        Side::Left => {
            extract(msg, LEFT_GOAL_TAG, &mut see.own_goal);
            extract(msg, RIGHT_GOAL_TAG, &mut see.opp_goal);
        }
        Side::Right => {
            extract(msg, RIGHT_GOAL_TAG, &mut see.own_goal);
            extract(msg, LEFT_GOAL_TAG, &mut see.opp_goal);
        }
        Side::Unknown => {
            // No own-goal slot before the side is assigned: both goals land in
            // the opponent slot and the right goal overwrites the left one.
            extract(msg, LEFT_GOAL_TAG, &mut see.opp_goal);
            extract(msg, RIGHT_GOAL_TAG, &mut see.opp_goal);
        }
    }

    time.map(|_| ())
}

/// `(sense_body <time> ... (stamina ...) (speed ...) (head_angle ...) ...)`
///
/// Not implemented yet: the body sense snapshot is left exactly as it was.
pub fn parse_sense(_msg: &str, _player: &mut PlayerInfo) -> Result<(), ParseError> {
    Ok(())
}

fn extract(msg: &str, tag: &str, out: &mut ObjectInfo) {
    if let Err(err) = parse_object_info(msg, tag, out) {
        warn!("Ignoring {} in see message: {}", tag, err);
    }
}
