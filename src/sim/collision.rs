//! Paddle collision and scoring rules
//!
//! Pure functions over entity positions. They decide what happened; applying
//! the consequences is up to `tick`.

use super::state::{Ball, Paddle, Playfield, Side};

/// Which paddle, if any, the ball overlaps this tick.
///
/// This is level-triggered: a ball that stays inside a paddle for several
/// ticks reports a hit on every one of them. The left paddle is checked first.
pub fn paddle_hit(ball: &Ball, left: &Paddle, right: &Paddle) -> Option<Side> {
    if ball.rect.intersects(&left.rect) {
        Some(Side::Left)
    } else if ball.rect.intersects(&right.rect) {
        Some(Side::Right)
    } else {
        None
    }
}

/// Which side earns a point, if the ball has reached a horizontal edge.
///
/// Leaving past the left edge scores for the right player and vice versa.
/// At most one side can score per check.
pub fn scoring_side(ball: &Ball, field: &Playfield) -> Option<Side> {
    if ball.rect.left() <= 0 {
        Some(Side::Right)
    } else if ball.rect.right() >= field.width {
        Some(Side::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn paddles() -> (Paddle, Paddle) {
        (
            Paddle::new(10, 250, 10, 100, 5),
            Paddle::new(780, 250, 10, 100, 5),
        )
    }

    #[test]
    fn test_no_hit_in_open_field() {
        let (left, right) = paddles();
        let ball = Ball::new(IVec2::new(400, 300), 10, IVec2::new(4, 4));
        assert_eq!(paddle_hit(&ball, &left, &right), None);
    }

    #[test]
    fn test_hit_left_paddle() {
        let (left, right) = paddles();
        let ball = Ball::new(IVec2::new(22, 300), 10, IVec2::new(-4, 4));
        assert_eq!(paddle_hit(&ball, &left, &right), Some(Side::Left));
    }

    #[test]
    fn test_hit_right_paddle() {
        let (left, right) = paddles();
        let ball = Ball::new(IVec2::new(778, 260), 10, IVec2::new(4, 4));
        assert_eq!(paddle_hit(&ball, &left, &right), Some(Side::Right));
    }

    #[test]
    fn test_touching_paddle_face_is_not_a_hit() {
        let (left, right) = paddles();
        let mut ball = Ball::new(IVec2::new(400, 300), 10, IVec2::new(4, 4));
        ball.rect.pos.x = right.rect.left() - ball.rect.width();
        assert_eq!(paddle_hit(&ball, &left, &right), None);
    }

    #[test]
    fn test_ball_beside_paddle_vertically_misses() {
        let (left, right) = paddles();
        let ball = Ball::new(IVec2::new(785, 100), 10, IVec2::new(4, 4));
        assert_eq!(paddle_hit(&ball, &left, &right), None);
    }

    #[test]
    fn test_left_edge_scores_for_right() {
        let field = Playfield::new(800, 600);
        let mut ball = Ball::new(IVec2::new(400, 300), 10, IVec2::new(-4, 4));
        ball.rect.pos.x = 0;
        assert_eq!(scoring_side(&ball, &field), Some(Side::Right));
    }

    #[test]
    fn test_right_edge_scores_for_left() {
        let field = Playfield::new(800, 600);
        let mut ball = Ball::new(IVec2::new(400, 300), 10, IVec2::new(4, 4));
        ball.rect.pos.x = 790;
        assert_eq!(scoring_side(&ball, &field), Some(Side::Left));
    }

    #[test]
    fn test_inside_field_does_not_score() {
        let field = Playfield::new(800, 600);
        let mut ball = Ball::new(IVec2::new(400, 300), 10, IVec2::new(4, 4));
        ball.rect.pos.x = 1;
        assert_eq!(scoring_side(&ball, &field), None);
        ball.rect.pos.x = 789;
        assert_eq!(scoring_side(&ball, &field), None);
    }
}
