//! Wall and paddle collision checks
//!
//! The top and bottom walls are checked first, the left wall and the paddle
//! column second, so at a corner cell the second outcome replaces the first.

use rand::Rng;

use super::ball::Ball;
use super::court::Court;
use super::paddle::Paddle;

/// Outcome of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Ball is in open court
    None,
    /// Ball touched a wall or the paddle and was turned around
    Bounce,
    /// Ball reached the paddle column without touching the paddle
    Lose,
}

/// Check the ball against the walls and the paddle, turning it around on a
/// bounce. On [`Contact::Lose`] the ball is left untouched; the caller erases it.
pub fn evaluate<R: Rng>(ball: &mut Ball, paddle: &Paddle, court: &Court, rng: &mut R) -> Contact {
    let (x, y) = ball.position();
    let mut contact = Contact::None;

    if y == court.top() + 1 {
        ball.set_y_dir(1);
        contact = Contact::Bounce;
    } else if y == court.bottom() - 1 {
        ball.set_y_dir(-1);
        contact = Contact::Bounce;
    }

    if x == court.left() + 1 {
        ball.set_x_dir(1);
        contact = Contact::Bounce;
    } else if x == court.right() - 1 {
        if paddle.contact(y) {
            ball.redraw_delays(rng);
            ball.set_x_dir(-1);
            contact = Contact::Bounce;
        } else {
            contact = Contact::Lose;
        }
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Fixture {
        court: Court,
        paddle: Paddle,
        ball: Ball,
        rng: Pcg32,
    }

    fn fixture() -> Fixture {
        let court = Court::new(3, 76, 20, 3);
        Fixture {
            paddle: Paddle::new(&court, 24),
            court,
            ball: Ball::new(3),
            rng: Pcg32::seed_from_u64(2024),
        }
    }

    impl Fixture {
        fn evaluate(&mut self) -> Contact {
            evaluate(&mut self.ball, &self.paddle, &self.court, &mut self.rng)
        }
    }

    #[test]
    fn test_open_court() {
        let mut f = fixture();
        f.ball.set_motion((40, 10), (1, -1), (2, 3));
        let before = f.ball.clone();
        assert_eq!(f.evaluate(), Contact::None);
        assert_eq!(f.ball, before);
    }

    #[test]
    fn test_top_wall_bounce_regardless_of_direction() {
        for y_dir in [-1, 1] {
            let mut f = fixture();
            f.ball.set_motion((40, 4), (1, y_dir), (2, 3));
            assert_eq!(f.evaluate(), Contact::Bounce);
            assert_eq!(f.ball.y_dir(), 1);
            assert_eq!(f.ball.x_dir(), 1);
        }
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut f = fixture();
        f.ball.set_motion((40, 19), (-1, 1), (2, 3));
        assert_eq!(f.evaluate(), Contact::Bounce);
        assert_eq!(f.ball.y_dir(), -1);
        assert_eq!(f.ball.x_dir(), -1);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut f = fixture();
        f.ball.set_motion((4, 10), (-1, 1), (2, 3));
        assert_eq!(f.evaluate(), Contact::Bounce);
        assert_eq!(f.ball.x_dir(), 1);
        assert_eq!(f.ball.y_dir(), 1);
    }

    #[test]
    fn test_paddle_return_redraws_delays() {
        for seed in 0..200 {
            let mut f = fixture();
            f.rng = Pcg32::seed_from_u64(seed);
            f.ball.set_motion((75, 12), (1, -1), (9, 9));
            assert_eq!(f.evaluate(), Contact::Bounce);
            assert_eq!(f.ball.x_dir(), -1);
            assert!((1..5).contains(&f.ball.x_delay()));
            assert!((1..10).contains(&f.ball.y_delay()));
            assert!(f.ball.x_count() <= f.ball.x_delay());
            assert!(f.ball.y_count() <= f.ball.y_delay());
        }
    }

    #[test]
    fn test_paddle_edges_count_as_contact() {
        let mut f = fixture();
        f.ball.set_motion((75, 10), (1, 1), (2, 3));
        assert_eq!(f.evaluate(), Contact::Bounce);
        f.ball.set_motion((75, 14), (1, 1), (2, 3));
        assert_eq!(f.evaluate(), Contact::Bounce);
    }

    #[test]
    fn test_miss_is_lose_without_changes() {
        let mut f = fixture();
        f.ball.set_motion((75, 15), (1, 1), (2, 3));
        let before = f.ball.clone();
        assert_eq!(f.evaluate(), Contact::Lose);
        assert_eq!(f.ball, before);
    }

    // Corner cells: the horizontal outcome wins over the vertical one.
    #[test]
    fn test_corner_left_overrides_top() {
        let mut f = fixture();
        f.ball.set_motion((4, 4), (-1, -1), (2, 3));
        assert_eq!(f.evaluate(), Contact::Bounce);
        assert_eq!((f.ball.x_dir(), f.ball.y_dir()), (1, 1));
    }

    #[test]
    fn test_corner_lose_overrides_bottom_bounce() {
        let mut f = fixture();
        f.ball.set_motion((75, 19), (1, 1), (2, 3));
        assert_eq!(f.evaluate(), Contact::Lose);
        // The vertical wall still turned the ball before the miss was seen
        assert_eq!(f.ball.y_dir(), -1);
        assert_eq!(f.ball.x_dir(), 1);
    }

    #[test]
    fn test_court_walkthrough() {
        let mut f = fixture();
        assert_eq!((f.paddle.top(), f.paddle.bottom()), (10, 14));

        f.ball.set_motion((40, 4), (1, -1), (3, 3));
        assert_eq!(f.evaluate(), Contact::Bounce);
        assert_eq!(f.ball.y_dir(), 1);

        f.ball.set_motion((75, 12), (1, 1), (3, 3));
        assert_eq!(f.evaluate(), Contact::Bounce);
        assert_eq!(f.ball.x_dir(), -1);
        assert!((1..=5).contains(&f.ball.x_delay()));
        assert!((1..=10).contains(&f.ball.y_delay()));

        // Row 20 is the bottom wall itself: outside the paddle and the court band
        f.ball.set_motion((75, 20), (1, 1), (3, 3));
        assert_eq!(f.evaluate(), Contact::Lose);
    }
}
