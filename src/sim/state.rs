//! Game state and core simulation types

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::settings::Settings;

/// Which player a paddle or point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Fixed bounds all motion and clamping is relative to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Geometric center (integer division)
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
    /// Pixels moved per tick while a key is held
    pub speed: i32,
}

impl Paddle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, speed: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            speed,
        }
    }

    /// Move vertically by `dy` (positive is down), then clamp into `0..=field.height`.
    ///
    /// The clamp is a hard stop: the paddle never bounces or reports an error.
    pub fn move_by(&mut self, dy: i32, field: &Playfield) {
        self.rect.pos.y = self.rect.pos.y.saturating_add(dy);
        if self.rect.top() < 0 {
            self.rect.set_top(0);
        }
        if self.rect.bottom() > field.height {
            self.rect.set_bottom(field.height);
        }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Bounding square; the ball is drawn as the ellipse inscribed in it
    pub rect: Rect,
    /// Velocity in pixels per tick
    pub vel: IVec2,
    /// Magnitude assigned to each velocity component on reset
    pub speed: i32,
}

impl Ball {
    pub fn new(center: IVec2, size: i32, vel: IVec2) -> Self {
        Self {
            rect: Rect::from_center(center, IVec2::splat(size)),
            vel,
            speed: vel.x.abs().max(vel.y.abs()),
        }
    }

    /// Move by one tick of velocity and bounce off the top or bottom edge.
    ///
    /// Returns true when the vertical velocity was inverted. Position is not
    /// corrected; the reversed velocity pulls the ball back next tick.
    pub fn advance(&mut self, field: &Playfield) -> bool {
        self.rect.pos += self.vel;
        if self.rect.top() <= 0 || self.rect.bottom() >= field.height {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    /// Recenter and serve in a random diagonal direction
    pub fn reset<R: Rng + ?Sized>(&mut self, field: &Playfield, rng: &mut R) {
        self.rect.set_center(field.center());
        let vx = if rng.random_bool(0.5) { self.speed } else { -self.speed };
        let vy = if rng.random_bool(0.5) { self.speed } else { -self.speed };
        self.vel = IVec2::new(vx, vy);
    }

    /// Invert horizontal velocity (paddle hit)
    pub fn bounce_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }
}

/// Points scored by each player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    /// Award one point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball touched the top or bottom edge
    WallBounce,
    /// Ball overlapped a paddle and its horizontal velocity flipped
    PaddleBounce { side: Side },
    /// Ball left the field; `side` earned the point
    Scored { side: Side, score: Score },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the serve RNG was created from
    pub seed: u64,
    pub field: Playfield,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Serve direction source
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(&Settings::default(), seed)
    }

    /// Create a new game laid out from `settings`
    pub fn with_settings(settings: &Settings, seed: u64) -> Self {
        let field = Playfield::new(settings.screen_width, settings.screen_height);
        let paddle_y = (field.height - settings.paddle_height) / 2;

        let left_paddle = Paddle::new(
            settings.paddle_margin,
            paddle_y,
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
        );
        let right_paddle = Paddle::new(
            field.width - settings.paddle_margin - settings.paddle_width,
            paddle_y,
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
        );

        // First serve always heads down and to the right
        let ball = Ball::new(
            field.center(),
            settings.ball_size,
            IVec2::splat(settings.ball_speed),
        );

        Self {
            seed,
            field,
            left_paddle,
            right_paddle,
            ball,
            score: Score::default(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Move one paddle, clamped to the field
    pub fn move_paddle(&mut self, side: Side, dy: i32) {
        let field = self.field;
        match side {
            Side::Left => self.left_paddle.move_by(dy, &field),
            Side::Right => self.right_paddle.move_by(dy, &field),
        }
    }

    /// Recenter the ball using the game's own RNG
    pub fn reset_ball(&mut self) {
        self.ball.reset(&self.field, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(800, 600)
    }

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(1);
        assert_eq!(state.left_paddle.rect, Rect::new(10, 250, 10, 100));
        assert_eq!(state.right_paddle.rect, Rect::new(780, 250, 10, 100));
        assert_eq!(state.ball.rect.center(), IVec2::new(400, 300));
        assert_eq!(state.ball.vel, IVec2::new(4, 4));
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_paddle_clamps_at_top() {
        let mut paddle = Paddle::new(10, 0, 10, 100, 5);
        paddle.move_by(-5, &field());
        assert_eq!(paddle.rect.top(), 0);
    }

    #[test]
    fn test_paddle_clamps_at_bottom() {
        let mut paddle = Paddle::new(10, 498, 10, 100, 5);
        paddle.move_by(5, &field());
        assert_eq!(paddle.rect.bottom(), 600);
        assert_eq!(paddle.rect.top(), 500);
    }

    #[test]
    fn test_paddle_moves_freely_inside() {
        let mut paddle = Paddle::new(10, 250, 10, 100, 5);
        paddle.move_by(-5, &field());
        assert_eq!(paddle.rect.top(), 245);
        paddle.move_by(5, &field());
        assert_eq!(paddle.rect.top(), 250);
    }

    #[test]
    fn test_ball_advance_without_contact() {
        let mut ball = Ball::new(IVec2::new(400, 300), 10, IVec2::new(4, 4));
        let bounced = ball.advance(&field());
        assert!(!bounced);
        assert_eq!(ball.rect.center(), IVec2::new(404, 304));
        assert_eq!(ball.vel, IVec2::new(4, 4));
    }

    #[test]
    fn test_ball_bounces_at_bottom() {
        let mut ball = Ball::new(IVec2::new(400, 300), 10, IVec2::new(4, 4));
        ball.rect.set_bottom(600);
        assert!(ball.advance(&field()));
        assert_eq!(ball.vel.y, -4);
        // No position correction
        assert_eq!(ball.rect.bottom(), 604);
    }

    #[test]
    fn test_ball_bounces_at_top() {
        let mut ball = Ball::new(IVec2::new(400, 300), 10, IVec2::new(-4, -4));
        ball.rect.set_top(3);
        assert!(ball.advance(&field()));
        assert_eq!(ball.vel, IVec2::new(-4, 4));
        assert_eq!(ball.rect.top(), -1);
    }

    #[test]
    fn test_reset_is_reproducible_with_seed() {
        let mut a = Ball::new(IVec2::new(10, 10), 10, IVec2::new(4, 4));
        let mut b = a.clone();
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);
        for _ in 0..16 {
            a.reset(&field(), &mut rng_a);
            b.reset(&field(), &mut rng_b);
            assert_eq!(a.vel, b.vel);
        }
    }

    #[test]
    fn test_reset_reaches_all_four_directions() {
        let mut ball = Ball::new(IVec2::new(10, 10), 10, IVec2::new(4, 4));
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            ball.reset(&field(), &mut rng);
            seen.insert((ball.vel.x, ball.vel.y));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Right);
        score.award(Side::Right);
        score.award(Side::Left);
        assert_eq!(score, Score { left: 1, right: 2 });
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(y in -1000i32..1600, dy in -2000i32..2000) {
            let mut paddle = Paddle::new(10, y, 10, 100, 5);
            paddle.move_by(dy, &field());
            prop_assert!(paddle.rect.top() >= 0);
            prop_assert!(paddle.rect.bottom() <= 600);
        }

        #[test]
        fn prop_zero_move_is_idle(y in 0i32..=500, repeats in 1usize..20) {
            let mut paddle = Paddle::new(10, y, 10, 100, 5);
            for _ in 0..repeats {
                paddle.move_by(0, &field());
            }
            prop_assert_eq!(paddle.rect.top(), y);
        }

        #[test]
        fn prop_advance_flips_vy_only_on_edge_contact(
            x in 0i32..800,
            y in -20i32..620,
            vx in prop::sample::select(vec![-4i32, 4]),
            vy in prop::sample::select(vec![-4i32, 4]),
        ) {
            let mut ball = Ball::new(IVec2::new(x, y), 10, IVec2::new(vx, vy));
            let moved_top = ball.rect.top() + vy;
            let moved_bottom = ball.rect.bottom() + vy;
            ball.advance(&field());
            let touched = moved_top <= 0 || moved_bottom >= 600;
            prop_assert_eq!(ball.vel.y, if touched { -vy } else { vy });
            prop_assert_eq!(ball.vel.x, vx);
        }

        #[test]
        fn prop_reset_centers_with_diagonal_speed(seed in any::<u64>(), x in -50i32..850, y in -50i32..650) {
            let mut ball = Ball::new(IVec2::new(x, y), 10, IVec2::new(-4, 4));
            let mut rng = Pcg32::seed_from_u64(seed);
            ball.reset(&field(), &mut rng);
            prop_assert_eq!(ball.rect.center(), IVec2::new(400, 300));
            prop_assert_eq!(ball.vel.x.abs(), 4);
            prop_assert_eq!(ball.vel.y.abs(), 4);
        }
    }
}
