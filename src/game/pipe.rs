use rand::Rng;
use ratatui::{layout::Rect, Frame};

use crate::constants::game;
use crate::game::bird::Bird;
use crate::game::sprite::{blit, world_to_cells, PipeSprites, Sprite};

#[derive(Debug)]
pub struct Pipe {
    x: f32,
    /// Sampled top edge of the gap.
    gap: f32,
    /// y of the top pipe's upper-left corner (usually above the world).
    top: f32,
    /// y of the bottom pipe's upper-left corner.
    bottom: f32,
    top_sprite: Sprite,
    bottom_sprite: Sprite,
    /// The bird has cleared this pipe. Kept for scoring consumers.
    pub passed: bool,
}

impl Pipe {
    pub fn new<R: Rng>(sprites: &PipeSprites, x: f32, rng: &mut R) -> Self {
        let gap = rng.gen_range(game::PIPE_GAP_MIN..game::PIPE_GAP_MAX) as f32;
        Pipe {
            x,
            gap,
            top: gap - sprites.top.world_height(),
            bottom: gap + game::PIPE_GAP,
            top_sprite: sprites.top.clone(),
            bottom_sprite: sprites.bottom.clone(),
            passed: false,
        }
    }

    pub fn tick(&mut self) {
        self.x -= game::PIPE_VELOCITY;
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn off_screen(&self) -> bool {
        self.x + self.top_sprite.world_width() < 0.0
    }

    /// Cell-accurate overlap between the bird's mask and either pipe half.
    pub fn collides_with(&self, bird: &Bird) -> bool {
        let bird_mask = bird.mask();
        let bird_y = bird.y().round();

        let top_offset = world_to_cells(self.x - bird.x(), self.top - bird_y);
        let bottom_offset = world_to_cells(self.x - bird.x(), self.bottom - bird_y);

        bird_mask.overlap(self.top_sprite.mask(), top_offset).is_some()
            || bird_mask.overlap(self.bottom_sprite.mask(), bottom_offset).is_some()
    }

    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        blit(f, area, &self.top_sprite, (self.x, self.top));
        blit(f, area, &self.bottom_sprite, (self.x, self.bottom));
    }
}
