use ratatui::{layout::Rect, Frame};

use crate::constants::game;
use crate::game::sprite::{blit, Sprite};

/// The scrolling ground: two tiled copies of the same sprite, one always
/// covering the visible width while the other wraps around behind it.
#[derive(Debug)]
pub struct Base {
    x1: f32,
    x2: f32,
    y: f32,
    sprite: Sprite,
}

impl Base {
    pub fn new(sprite: Sprite, y: f32) -> Self {
        let x2 = sprite.world_width();
        Base { x1: 0.0, x2, y, sprite }
    }

    pub fn tick(&mut self) {
        self.x1 -= game::BASE_VELOCITY;
        self.x2 -= game::BASE_VELOCITY;

        let width = self.sprite.world_width();
        if self.x1 + width < 0.0 {
            self.x1 = self.x2 + width;
        }
        if self.x2 + width < 0.0 {
            self.x2 = self.x1 + width;
        }
    }

    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        blit(f, area, &self.sprite, (self.x1, self.y));
        blit(f, area, &self.sprite, (self.x2, self.y));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game::sprite::Sprites;

    #[test]
    fn test_segments_start_adjacent() {
        let base = Base::new(Sprites::load().base, game::BASE_Y);
        assert_eq!(base.x1, 0.0);
        assert_eq!(base.x2, base.sprite.world_width());
    }

    #[test]
    fn test_scroll_never_leaves_a_seam() {
        let mut base = Base::new(Sprites::load().base, game::BASE_Y);
        let width = base.sprite.world_width();

        for _ in 0..1000 {
            base.tick();

            // Segments stay exactly one width apart.
            assert_eq!((base.x1 - base.x2).abs(), width);

            // Together the segments cover the whole visible width: they are
            // adjacent, so the span runs from the leftmost edge for two
            // widths without a hole.
            let left = base.x1.min(base.x2);
            assert!(left <= 0.0);
            assert!(left + 2.0 * width >= game::WORLD_WIDTH);
            assert!(base.x1.max(base.x2) >= 0.0);
        }
    }
}
