//! Session state - one play-through from the first level until the last life is lost
//!
//! The session owns every entity plus score, lives and level, and advances them
//! one tick at a time. Per tick:
//!
//! 1. paddle and ball move
//! 2. ball vs paddle reverses the ball vertically
//! 3. the first brick hit (collection order) is removed, reverses the ball and scores
//! 4. a ball below the field costs a life and resets ball and paddle
//! 5. an empty brick collection advances the level
//!
//! Steps 2 and 3 are applied one after the other, so a tick that touches both
//! the paddle and a brick reverses twice and leaves the vertical velocity as it was.

use crate::ball::Ball;
use crate::brick::Brick;
use crate::collision::{detect, Contacts};
use crate::level::{ball_velocity, build_bricks_into};
use crate::paddle::Paddle;
use crate::snapshot::SessionSnapshot;
use crate::types::{
    Direction, DirectionEvent, SessionStatus, BALL_INITIAL_VELOCITY, BALL_START, PADDLE_START,
    POINTS_PER_BRICK, STARTING_LEVEL, STARTING_LIVES,
};

/// What happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The session had already ended; nothing moved.
    pub halted: bool,
    pub contacts: Contacts,
    pub points: u32,
    pub life_lost: bool,
    /// New level number when the last brick was cleared this tick.
    pub level_advanced: Option<u32>,
    /// The session ended during this tick.
    pub ended: bool,
}

impl TickOutcome {
    fn halted() -> Self {
        Self {
            halted: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    paddle: Paddle,
    ball: Ball,
    bricks: Vec<Brick>,
    score: u32,
    lives: u32,
    level: u32,
    status: SessionStatus,
}

impl Session {
    pub fn new() -> Self {
        let (ball_vx, ball_vy) = BALL_INITIAL_VELOCITY;
        let mut session = Self {
            paddle: Paddle::new(PADDLE_START.0, PADDLE_START.1),
            ball: Ball::new(BALL_START.0, BALL_START.1, ball_vx, ball_vy),
            bricks: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            level: STARTING_LEVEL,
            status: SessionStatus::Running,
        };
        session.load_level(STARTING_LEVEL);
        session
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn set_paddle_direction(&mut self, direction: Direction) {
        self.paddle.set_direction(direction);
    }

    pub fn steer(&mut self, event: DirectionEvent) {
        self.paddle.set_direction(event.direction());
    }

    /// Final banner once all lives are gone.
    ///
    /// Clearing a level always advances to the next one, so there is no win
    /// state and no win message.
    pub fn end_message(&self) -> Option<String> {
        match self.status {
            SessionStatus::Running => None,
            SessionStatus::Ended => Some(format!("Game Over! Final Score: {}", self.score)),
        }
    }

    /// Advance the session by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status == SessionStatus::Ended || self.lives == 0 {
            self.status = SessionStatus::Ended;
            return TickOutcome::halted();
        }

        self.paddle.update();
        self.ball.update();

        let mut outcome = TickOutcome {
            contacts: detect(&self.ball, &self.paddle, &self.bricks),
            ..TickOutcome::default()
        };

        if outcome.contacts.paddle {
            self.ball.reverse_y();
        }

        if let Some(index) = outcome.contacts.brick {
            self.bricks.remove(index);
            self.ball.reverse_y();
            self.score += POINTS_PER_BRICK;
            outcome.points = POINTS_PER_BRICK;
        }

        if outcome.contacts.ball_lost {
            self.lives = self.lives.saturating_sub(1);
            self.reset_ball_and_paddle();
            outcome.life_lost = true;
            if self.lives == 0 {
                self.status = SessionStatus::Ended;
                outcome.ended = true;
            }
        }

        if self.bricks.is_empty() {
            self.level += 1;
            self.load_level(self.level);
            self.reset_ball_and_paddle();
            outcome.level_advanced = Some(self.level);
        }

        outcome
    }

    fn load_level(&mut self, level: u32) {
        build_bricks_into(level, &mut self.bricks);
        let (vx, vy) = ball_velocity(level);
        self.ball.set_speed(vx, vy);
    }

    fn reset_ball_and_paddle(&mut self) {
        self.paddle.reset(PADDLE_START.0, PADDLE_START.1);
        self.ball.set_position(BALL_START.0, BALL_START.1);
        let (vx, vy) = ball_velocity(self.level);
        self.ball.set_speed(vx, vy);
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.paddle = self.paddle.bounds();
        out.ball = self.ball.bounds();
        out.ball_velocity = self.ball.velocity();
        out.bricks.clear();
        out.bricks.extend(self.bricks.iter().map(Brick::bounds));
        out.score = self.score;
        out.lives = self.lives;
        out.level = self.level;
        out.status = self.status;
        out.end_message = self.end_message();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::brick_count;
    use crate::types::FIELD_HEIGHT;

    /// Place the ball so that it overlaps the brick at `index` after its next update.
    fn aim_at_brick(session: &mut Session, index: usize) {
        let target = session.bricks[index];
        let (vx, vy) = session.ball.velocity();
        session.ball.set_position(target.x() - vx, target.y() - vy);
    }

    /// Move the ball so its next update drops it below the field.
    fn drop_ball(session: &mut Session) {
        session.ball.set_position(100, FIELD_HEIGHT);
        session.ball.set_speed(0, 5);
    }

    #[test]
    fn new_session_starts_on_level_one() {
        let s = Session::new();
        assert_eq!(s.level(), 1);
        assert_eq!(s.lives(), 3);
        assert_eq!(s.score(), 0);
        assert_eq!(s.bricks().len(), 56);
        assert_eq!(s.ball().velocity(), (-3, -4));
        assert_eq!((s.ball().x(), s.ball().y()), BALL_START);
        assert_eq!((s.paddle().x(), s.paddle().y()), PADDLE_START);
        assert!(s.is_running());
        assert_eq!(s.end_message(), None);
    }

    #[test]
    fn first_tick_moves_ball_up_left() {
        let mut s = Session::new();
        let outcome = s.tick();
        assert!(!outcome.halted);
        assert_eq!((s.ball().x(), s.ball().y()), (287, 426));
        assert_eq!(s.paddle().x(), PADDLE_START.0);
    }

    #[test]
    fn steering_moves_paddle_on_tick() {
        let mut s = Session::new();
        s.steer(DirectionEvent::RightPressed);
        s.tick();
        assert_eq!(s.paddle().x(), PADDLE_START.0 + 5);
        s.steer(DirectionEvent::Released);
        s.tick();
        assert_eq!(s.paddle().x(), PADDLE_START.0 + 5);
    }

    #[test]
    fn destroying_a_brick_scores_and_reverses() {
        let mut s = Session::new();
        aim_at_brick(&mut s, 20);
        let before = s.bricks().len();
        let (_, vy) = s.ball().velocity();

        let outcome = s.tick();

        assert_eq!(outcome.contacts.brick, Some(20));
        assert_eq!(outcome.points, 10);
        assert_eq!(s.bricks().len(), before - 1);
        assert_eq!(s.score(), 10);
        assert_eq!(s.ball().velocity().1, -vy);
    }

    #[test]
    fn at_most_one_brick_per_tick() {
        let mut s = Session::new();
        // Straddle bricks 0 and 1 in the top row.
        s.ball.set_speed(0, -1);
        s.ball.set_position(70, 41);
        let outcome = s.tick();
        assert_eq!(outcome.contacts.brick, Some(0));
        assert_eq!(s.bricks().len(), 55);
        assert_eq!(s.score(), 10);
        assert_eq!((s.bricks()[0].x(), s.bricks()[0].y()), (85, 30));
    }

    #[test]
    fn paddle_hit_reverses_ball() {
        let mut s = Session::new();
        s.ball.set_position(290, 436);
        s.ball.set_speed(0, 4);
        let outcome = s.tick();
        assert!(outcome.contacts.paddle);
        assert_eq!(s.ball().velocity(), (0, -4));
    }

    #[test]
    fn paddle_and_brick_in_same_tick_cancel_out() {
        let mut s = Session::new();
        // A brick sitting just above the paddle, as happens on deep levels.
        s.bricks.push(Brick::new(280, 422));
        let index = s.bricks.len() - 1;
        s.ball.set_position(290, 436);
        s.ball.set_speed(0, 4);

        let outcome = s.tick();

        assert!(outcome.contacts.paddle);
        assert_eq!(outcome.contacts.brick, Some(index));
        assert_eq!(outcome.contacts.reversals(), 2);
        assert_eq!(s.ball().velocity(), (0, 4));
        assert_eq!(s.score(), 10);
    }

    #[test]
    fn floor_contact_costs_a_life_and_resets() {
        let mut s = Session::new();
        s.steer(DirectionEvent::LeftPressed);
        s.tick();
        drop_ball(&mut s);

        let outcome = s.tick();

        assert!(outcome.life_lost);
        assert!(!outcome.ended);
        assert_eq!(s.lives(), 2);
        assert!(s.is_running());
        assert_eq!((s.ball().x(), s.ball().y()), (290, 430));
        assert_eq!((s.paddle().x(), s.paddle().y()), (250, 450));
        assert_eq!(s.ball().velocity(), (-3, -4));
        assert_eq!(s.paddle().direction(), Direction::Left);
    }

    #[test]
    fn losing_last_life_ends_session() {
        let mut s = Session::new();
        for expected in [2, 1, 0] {
            drop_ball(&mut s);
            s.tick();
            assert_eq!(s.lives(), expected);
        }
        assert_eq!(s.status(), SessionStatus::Ended);
        assert_eq!(
            s.end_message().as_deref(),
            Some("Game Over! Final Score: 0")
        );
    }

    #[test]
    fn ended_session_does_not_mutate() {
        let mut s = Session::new();
        s.lives = 1;
        drop_ball(&mut s);
        assert!(s.tick().ended);

        s.steer(DirectionEvent::RightPressed);
        let before = s.snapshot();
        for _ in 0..50 {
            assert!(s.tick().halted);
        }
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn clearing_all_bricks_advances_level() {
        let mut s = Session::new();
        let mut advanced = None;
        for i in 0..56 {
            assert_eq!(s.level(), 1, "advanced early at brick {i}");
            aim_at_brick(&mut s, 0);
            let outcome = s.tick();
            assert_eq!(outcome.points, 10);
            advanced = outcome.level_advanced;
        }

        assert_eq!(advanced, Some(2));
        assert_eq!(s.level(), 2);
        assert_eq!(s.score(), 560);
        assert_eq!(s.bricks().len(), 64);
        assert_eq!(s.bricks().len(), brick_count(2));
        assert_eq!(s.ball().velocity(), (-4, -5));
        assert_eq!((s.ball().x(), s.ball().y()), BALL_START);
        assert_eq!((s.paddle().x(), s.paddle().y()), PADDLE_START);
    }

    #[test]
    fn losing_life_after_level_two_uses_level_speed() {
        let mut s = Session::new();
        s.level = 2;
        drop_ball(&mut s);
        s.tick();
        assert_eq!(s.ball().velocity(), (-4, -5));
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut s = Session::new();
        aim_at_brick(&mut s, 3);
        s.tick();

        let snap = s.snapshot();
        assert_eq!(snap.paddle, s.paddle().bounds());
        assert_eq!(snap.ball, s.ball().bounds());
        assert_eq!(snap.ball_velocity, s.ball().velocity());
        assert_eq!(snap.bricks.len(), 55);
        assert_eq!(snap.score, 10);
        assert_eq!(snap.lives, 3);
        assert_eq!(snap.level, 1);
        assert!(snap.is_running());
        assert_eq!(snap.end_message, None);
    }

    #[test]
    fn snapshot_into_reuses_buffer() {
        let s = Session::new();
        let mut snap = SessionSnapshot::default();
        snap.bricks.reserve(128);
        let cap = snap.bricks.capacity();
        s.snapshot_into(&mut snap);
        assert_eq!(snap.bricks.capacity(), cap);
        assert_eq!(snap.fingerprint(), s.snapshot().fingerprint());
    }

    #[test]
    fn fingerprint_changes_with_state() {
        let mut s = Session::new();
        let a = s.snapshot().fingerprint();
        s.tick();
        assert_ne!(a, s.snapshot().fingerprint());
    }
}
