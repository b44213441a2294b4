use crate::perception::PlayerInfo;
use crate::protocol::Command;

const SEARCH_TURN: f64 = 30.0;
const MAX_TURN: f64 = 60.0;
const FACING_TOLERANCE: f64 = 10.0;
const KICKABLE_DISTANCE: f64 = 1.0;
const DASH_POWER: f64 = 90.0;
const KICK_POWER: f64 = 90.0;

/// Chase-and-kick policy. Memoryless: the command depends only on the
/// current perception snapshot.
///
/// 1. ball not in view: turn to search
/// 2. ball far: turn towards it (clamped to +-60) or dash once roughly facing it
/// 3. ball near: kick at the opponent goal, or turn to search for the goal
///
/// `None` means no command this cycle; the current ladder always produces one.
pub fn decide_action(player: &PlayerInfo) -> Option<Command> {
    let ball = &player.see.ball;
    if !ball.visible {
        return Some(Command::Turn(SEARCH_TURN));
    }

    if ball.dist > KICKABLE_DISTANCE {
        if ball.dir.abs() > FACING_TOLERANCE {
            Some(Command::Turn(ball.dir.clamp(-MAX_TURN, MAX_TURN)))
        } else {
            Some(Command::Dash(DASH_POWER))
        }
    } else if player.see.opp_goal.visible {
        Some(Command::Kick {
            power: KICK_POWER,
            direction: player.see.opp_goal.dir,
        })
    } else {
        Some(Command::Turn(SEARCH_TURN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::{ObjectInfo, Side};

    fn player_with(ball: ObjectInfo, opp_goal: ObjectInfo) -> PlayerInfo {
        let mut player = PlayerInfo::new("rustics");
        player.side = Side::Left;
        player.see.ball = ball;
        player.see.opp_goal = opp_goal;
        player
    }

    fn decide(ball: ObjectInfo, opp_goal: ObjectInfo) -> String {
        decide_action(&player_with(ball, opp_goal))
            .map(|cmd| cmd.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn searches_when_ball_is_not_visible() {
        // stale values behind an invisible flag are ignored
        let stale = ObjectInfo {
            dist: 0.5,
            dir: 0.0,
            visible: false,
        };
        assert_eq!(decide(stale, ObjectInfo::seen(10.0, 0.0)), "(turn 30)");
    }

    #[test]
    fn turns_towards_a_far_ball() {
        assert_eq!(decide(ObjectInfo::seen(5.0, 45.0), ObjectInfo::default()), "(turn 45)");
        assert_eq!(decide(ObjectInfo::seen(5.0, -25.5), ObjectInfo::default()), "(turn -25.5)");
    }

    #[test]
    fn clamps_large_turns() {
        assert_eq!(decide(ObjectInfo::seen(5.0, 90.0), ObjectInfo::default()), "(turn 60)");
        assert_eq!(decide(ObjectInfo::seen(5.0, -170.0), ObjectInfo::default()), "(turn -60)");
    }

    #[test]
    fn dashes_when_facing_a_far_ball() {
        assert_eq!(decide(ObjectInfo::seen(5.0, 10.0), ObjectInfo::default()), "(dash 90)");
        assert_eq!(decide(ObjectInfo::seen(1.01, -3.0), ObjectInfo::default()), "(dash 90)");
    }

    #[test]
    fn kicks_at_the_visible_goal() {
        assert_eq!(
            decide(ObjectInfo::seen(0.5, 2.0), ObjectInfo::seen(40.0, -10.0)),
            "(kick 90 -10)"
        );
        assert_eq!(
            decide(ObjectInfo::seen(1.0, 80.0), ObjectInfo::seen(40.0, 3.0)),
            "(kick 90 3)"
        );
    }

    #[test]
    fn searches_for_the_goal_when_ball_is_near() {
        assert_eq!(decide(ObjectInfo::seen(0.5, 2.0), ObjectInfo::default()), "(turn 30)");
    }

    #[test]
    fn same_input_same_command() {
        let player = player_with(ObjectInfo::seen(7.0, -33.0), ObjectInfo::seen(20.0, 1.0));
        let first = decide_action(&player);
        for _ in 0..10 {
            assert_eq!(decide_action(&player), first);
        }
    }
}
