mod base;
mod bird;
mod pipe;
pub mod sprite;

use std::collections::VecDeque;

use color_eyre::eyre::Result;
use ratatui::{layout::Rect, Frame};

pub use base::Base;
pub use bird::Bird;
pub use pipe::Pipe;
use sprite::Sprites;

use crate::constants::game;

/// The single play loop's world: one bird, a rolling window of pipes, and
/// the scrolling ground. Crashing into a pipe or the terrain resets the
/// world in place; only a quit action ends the loop.
pub struct Game {
    sprites: Sprites,
    bird: Bird,
    pipes: VecDeque<Pipe>,
    base: Base,
}

impl Game {
    pub fn new() -> Self {
        let sprites = Sprites::load();
        let bird = Bird::new(sprites.bird.clone(), game::BIRD_START_X, game::BIRD_START_Y);
        let base = Base::new(sprites.base.clone(), game::BASE_Y);
        let mut world = Game { sprites, bird, pipes: VecDeque::new(), base };
        world.spawn_pipe();
        world
    }

    pub fn flap(&mut self) {
        self.bird.jump();
    }

    fn spawn_pipe(&mut self) {
        self.pipes.push_back(Pipe::new(
            &self.sprites.pipe,
            game::PIPE_SPAWN_X,
            &mut rand::thread_rng(),
        ));
    }

    fn reset(&mut self) {
        self.bird.reset(game::BIRD_START_X, game::BIRD_START_Y);
        self.pipes.clear();
        self.base = Base::new(self.sprites.base.clone(), game::BASE_Y);
        self.spawn_pipe();
    }

    pub fn tick(&mut self) {
        self.bird.tick();
        for pipe in self.pipes.iter_mut() {
            pipe.tick();
        }
        self.base.tick();

        // Recycle pipes that scrolled out and keep the window topped up.
        if self.pipes.front().is_some_and(|pipe| pipe.off_screen()) {
            self.pipes.pop_front();
        }
        if self
            .pipes
            .back()
            .map_or(true, |pipe| pipe.x() <= game::PIPE_SPAWN_X - game::PIPE_SPACING)
        {
            self.spawn_pipe();
        }

        for pipe in self.pipes.iter_mut() {
            if !pipe.passed && pipe.x() < self.bird.x() {
                pipe.passed = true;
            }
        }

        let mut crashed = self.bird.y() < 0.0
            || self.bird.y() + self.bird.world_height() >= game::BASE_Y;
        if !crashed {
            crashed = self.pipes.iter().any(|pipe| pipe.collides_with(&self.bird));
        }
        if crashed {
            log::info!("Crashed; restarting");
            self.reset();
        }
    }

    pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        for pipe in &self.pipes {
            pipe.draw(f, area);
        }
        self.base.draw(f, area);
        self.bird.draw(f, area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_one_offscreen_pipe() {
        let world = Game::new();
        assert_eq!(world.pipes.len(), 1);
        assert!(world.pipes[0].x() >= game::WORLD_WIDTH);
    }

    #[test]
    fn test_flap_then_tick_ascends() {
        let mut world = Game::new();
        world.flap();
        world.tick();
        assert!(world.bird.y() < game::BIRD_START_Y);
    }

    #[test]
    fn test_pipe_window_spawns_with_spacing() {
        let mut world = Game::new();
        // Keep the bird airborne so the world never resets under us.
        for _ in 0..61 {
            if world.bird.y() > game::BIRD_START_Y {
                world.flap();
            }
            world.tick();
        }
        // 300 units at 5/tick: the second pipe appears after 60 ticks.
        assert_eq!(world.pipes.len(), 2);
        assert!(world.pipes[1].x() - world.pipes[0].x() >= game::PIPE_SPACING);
    }

    #[test]
    fn test_passed_flag_marks_cleared_pipes() {
        let mut world = Game::new();
        let mut rng = rand::thread_rng();
        world.pipes.push_front(Pipe::new(
            &world.sprites.pipe,
            world.bird.x() - 100.0,
            &mut rng,
        ));

        world.flap();
        world.tick();
        assert!(world.pipes[0].passed);
        assert!(!world.pipes[1].passed);
    }

    #[test]
    fn test_ground_crash_resets_world() {
        let mut world = Game::new();
        // Never flapping, the bird free-falls into the ground within 40
        // ticks and the world resets.
        let mut reset_seen = false;
        let mut last_y = world.bird.y();
        for _ in 0..40 {
            world.tick();
            if world.bird.y() < last_y && world.bird.y() == game::BIRD_START_Y {
                reset_seen = true;
            }
            // The reset fires the same tick the bird would touch down.
            assert!(world.bird.y() + world.bird.world_height() < game::BASE_Y);
            last_y = world.bird.y();
        }
        assert!(reset_seen);
        assert_eq!(world.pipes.len(), 1);
    }
}
