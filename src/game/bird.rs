use ratatui::{layout::Rect, Frame};

use crate::constants::game;
use crate::game::sprite::{blit, BirdSprites, Mask};

#[derive(Debug)]
pub struct Bird {
    x: f32,
    y: f32,
    vel: f32,
    /// Ticks since the last flap; drives the jump arc.
    tick_count: u32,
    /// Degrees, clamped to [MIN_ROTATION, MAX_ROTATION].
    tilt: f32,
    /// y recorded at the last flap; the nose stays up until the bird has
    /// fallen TILT_UP_WINDOW below it.
    height: f32,
    img_count: u32,
    frame: usize,
    sprites: BirdSprites,
}

impl Bird {
    pub fn new(sprites: BirdSprites, x: f32, y: f32) -> Self {
        Bird {
            x,
            y,
            vel: 0.0,
            tick_count: 0,
            tilt: 0.0,
            height: y,
            img_count: 0,
            frame: 0,
            sprites,
        }
    }

    pub fn reset(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.vel = 0.0;
        self.tick_count = 0;
        self.tilt = 0.0;
        self.height = y;
        self.img_count = 0;
        self.frame = 0;
    }

    pub fn jump(&mut self) {
        self.vel = game::JUMP_VELOCITY;
        self.tick_count = 0;
        self.height = self.y;
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
        let t = self.tick_count as f32;

        // Displacement along the jump arc this tick.
        let mut d = self.vel * t + 0.5 * game::ACCELERATION * t * t;
        if d >= game::TERMINAL_DISPLACEMENT {
            d = game::TERMINAL_DISPLACEMENT;
        }
        if d < 0.0 {
            d -= game::ASCENT_BOOST;
        }
        self.y += d;

        if d < 0.0 || self.y < self.height + game::TILT_UP_WINDOW {
            if self.tilt < game::MAX_ROTATION {
                self.tilt = game::MAX_ROTATION;
            }
        } else if self.tilt > game::MIN_ROTATION {
            self.tilt = (self.tilt - game::ROTATION_VELOCITY).max(game::MIN_ROTATION);
        }

        self.animate();
    }

    // Wing cycle 0-1-2-1-0, one step per ANIMATION_TIME ticks. While diving
    // the frame is forced mid-flap and the counter pinned so the wings hold
    // still.
    fn animate(&mut self) {
        self.img_count += 1;

        if self.tilt <= game::DIVE_TILT {
            self.img_count = game::ANIMATION_TIME * 2;
            self.frame = 1;
            return;
        }

        self.frame = match self.img_count {
            c if c < game::ANIMATION_TIME => 0,
            c if c < game::ANIMATION_TIME * 2 => 1,
            c if c < game::ANIMATION_TIME * 3 => 2,
            c if c < game::ANIMATION_TIME * 4 => 1,
            _ => {
                self.img_count = 0;
                0
            },
        };
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    /// Opacity mask of the current wing frame, for pipe collision tests.
    pub fn mask(&self) -> &Mask {
        self.sprites.mask(self.frame)
    }

    pub fn world_height(&self) -> f32 {
        self.sprites.world_height()
    }

    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let sprite = self.sprites.frame(self.tilt, self.frame);
        blit(f, area, sprite, (self.x, self.y));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game::sprite::Sprites;

    fn bird() -> Bird {
        Bird::new(Sprites::load().bird, game::BIRD_START_X, game::BIRD_START_Y)
    }

    #[test]
    fn test_jump_resets_arc_state() {
        let mut bird = bird();
        for _ in 0..3 {
            bird.tick();
        }

        bird.jump();
        assert_eq!(bird.vel, game::JUMP_VELOCITY);
        assert_eq!(bird.tick_count, 0);
        assert_eq!(bird.height, bird.y);
    }

    #[test]
    fn test_first_tick_after_jump_ascends() {
        let mut bird = bird();
        bird.jump();
        bird.tick();

        // d = -10.5 + 1.5 = -9, minus the ascent boost.
        assert_eq!(bird.y(), game::BIRD_START_Y - 11.0);
        assert!(bird.y() < game::BIRD_START_Y);
    }

    #[test]
    fn test_fall_reaches_terminal_displacement() {
        let mut bird = bird();
        bird.jump();

        let mut deltas = Vec::new();
        for _ in 0..30 {
            let before = bird.y();
            bird.tick();
            deltas.push(bird.y() - before);
        }

        // The tail of the arc falls at exactly the terminal displacement.
        for d in &deltas[10..] {
            assert_eq!(*d, game::TERMINAL_DISPLACEMENT);
        }
        assert!(deltas[0] < 0.0);
    }

    #[test]
    fn test_fall_from_rest_clamps_immediately() {
        let mut bird = bird();
        let mut deltas = Vec::new();
        for _ in 0..5 {
            let before = bird.y();
            bird.tick();
            deltas.push(bird.y() - before);
        }

        // 1.5 t^2, clamped from the fourth tick (24 -> 16).
        assert_eq!(deltas, vec![1.5, 6.0, 13.5, 16.0, 16.0]);
    }

    #[test]
    fn test_tilt_stays_in_bounds() {
        let mut bird = bird();
        for _ in 0..60 {
            bird.tick();
            assert!(bird.tilt() <= game::MAX_ROTATION);
            assert!(bird.tilt() >= game::MIN_ROTATION);
        }
        assert_eq!(bird.tilt(), game::MIN_ROTATION);
    }

    #[test]
    fn test_tilt_snaps_up_on_ascent() {
        let mut bird = bird();
        for _ in 0..20 {
            bird.tick();
        }
        assert!(bird.tilt() < 0.0);

        bird.jump();
        bird.tick();
        assert_eq!(bird.tilt(), game::MAX_ROTATION);
    }

    #[test]
    fn test_tilt_decreases_monotonically_past_window() {
        let mut bird = bird();
        let mut last = f32::MAX;
        let mut descending = false;
        for _ in 0..30 {
            bird.tick();
            if descending {
                assert!(bird.tilt() <= last);
            } else if bird.tilt() < game::MAX_ROTATION {
                descending = true;
            }
            last = bird.tilt();
        }
        assert!(descending);
    }

    #[test]
    fn test_animation_cycle() {
        let mut bird = bird();
        let mut frames = Vec::new();
        for _ in 0..20 {
            // Bang-bang flapping keeps the bird out of the dive pose.
            if bird.y() > game::BIRD_START_Y {
                bird.jump();
            }
            bird.tick();
            frames.push(bird.frame_index());
        }

        let expected: Vec<usize> = [
            vec![0; 4],
            vec![1; 5],
            vec![2; 5],
            vec![1; 5],
            vec![0; 1],
        ]
        .concat();
        assert_eq!(frames, expected);
    }

    #[test]
    fn test_dive_pins_mid_flap_frame() {
        let mut bird = bird();
        // Free fall: the tilt reaches the dive threshold on tick 10.
        for _ in 0..10 {
            bird.tick();
        }
        assert!(bird.tilt() <= game::DIVE_TILT);

        for _ in 0..15 {
            bird.tick();
            assert_eq!(bird.frame_index(), 1);
            assert_eq!(bird.img_count, game::ANIMATION_TIME * 2);
        }
    }
}
