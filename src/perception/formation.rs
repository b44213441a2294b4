use crate::math::Point;

const KICK_OFF_POSITIONS: [Point; 11] = [
    // goalkeeper
    Point::new(-50.0, 0.0),
    // defenders
    Point::new(-40.0, -15.0),
    Point::new(-42.0, -5.0),
    Point::new(-42.0, 5.0),
    Point::new(-40.0, 15.0),
    // midfielders
    Point::new(-28.0, -10.0),
    Point::new(-22.0, 0.0),
    Point::new(-28.0, 10.0),
    // forwards
    Point::new(-15.0, -15.0),
    Point::new(-12.0, 0.0),
    Point::new(-15.0, 15.0),
];

/// Formation slot for a jersey number. Anything outside 1..=11 (coach or
/// spectator connections) falls back to the origin.
pub fn kick_off_position(unum: i32) -> Point {
    match unum {
        1..=11 => KICK_OFF_POSITIONS[(unum - 1) as usize],
        _ => Point::ORIGIN,
    }
}
