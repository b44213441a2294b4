use crate::error::ParseError;
use crate::perception::ObjectInfo;
use crate::protocol::tokenizer::Tokenizer;

pub const BALL_TAG: &str = "(b)";
pub const LEFT_GOAL_TAG: &str = "(g l)";
pub const RIGHT_GOAL_TAG: &str = "(g r)";

/// Finds `tag` in `msg` and returns the two tokens that follow it.
///
/// The lookup is a literal substring search over the flat message, so the
/// first occurrence wins regardless of nesting. Returns `None` when the tag is
/// absent or fewer than two tokens follow it.
pub fn find_tagged_pair<'a>(msg: &'a str, tag: &str) -> Option<(&'a str, &'a str)> {
    let pos = msg.find(tag)?;
    let mut tokens = Tokenizer::new(&msg[pos + tag.len()..]);
    let first = tokens.next_token()?;
    let second = tokens.next_token()?;
    Some((first, second))
}

/// Parses a finite number; `nan` and `inf` are rejected like any other junk.
pub fn parse_number(token: &str, field: &'static str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            field,
            token: token.to_owned(),
        })
}

/// Fills `out` with the distance and direction following `tag`.
///
/// * tag absent: `out` is reset to the invisible default, `Ok(false)`.
/// * fewer than two tokens: `out` keeps its values but is invisible, `Ok(false)`.
/// * a token that is not a number: `out` is invisible, `Err`.
pub fn parse_object_info(msg: &str, tag: &str, out: &mut ObjectInfo) -> Result<bool, ParseError> {
    if !msg.contains(tag) {
        *out = ObjectInfo::default();
        return Ok(false);
    }

    let (dist_tok, dir_tok) = match find_tagged_pair(msg, tag) {
        Some(pair) => pair,
        None => {
            out.visible = false;
            return Ok(false);
        }
    };

    let parsed = parse_number(dist_tok, "distance")
        .and_then(|dist| parse_number(dir_tok, "direction").map(|dir| (dist, dir)));

    match parsed {
        Ok((dist, dir)) => {
            *out = ObjectInfo::seen(dist, dir);
            Ok(true)
        }
        Err(err) => {
            out.visible = false;
            Err(err)
        }
    }
}
