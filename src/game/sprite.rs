use ratatui::{layout::Rect, style::Color, Frame};

use crate::constants::{game, sprites};

/// Per-cell opacity map of a sprite. Whitespace in the art is transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl Mask {
    fn from_lines(lines: &[String], width: u16) -> Self {
        let mut cells = Vec::with_capacity(lines.len() * width as usize);
        for line in lines {
            let mut row: Vec<bool> = line.chars().map(|c| !c.is_whitespace()).collect();
            row.resize(width as usize, false);
            cells.extend(row);
        }
        Mask { width, height: lines.len() as u16, cells }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn opaque(&self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && x < self.width as i32
            && y < self.height as i32
            && self.cells[y as usize * self.width as usize + x as usize]
    }

    /// First cell (in this mask's coordinates) where both masks are opaque,
    /// or `None`. `offset` is the other mask's origin relative to this one,
    /// in cells.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> Option<(u16, u16)> {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y as usize * self.width as usize + x as usize]
                    && other.opaque(x as i32 - offset.0, y as i32 - offset.1)
                {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct Sprite {
    lines: Vec<String>,
    color: Option<Color>,
    mask: Mask,
}

impl Sprite {
    pub fn new(text: &str, color: Option<Color>) -> Self {
        let lines: Vec<String> =
            text.lines().filter(|line| !line.is_empty()).map(|line| line.to_string()).collect();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as u16;
        let mask = Mask::from_lines(&lines, width);
        Sprite { lines, color, mask }
    }

    pub fn flipped_v(&self) -> Sprite {
        let lines: Vec<String> = self.lines.iter().rev().cloned().collect();
        let mask = Mask::from_lines(&lines, self.mask.width);
        Sprite { lines, color: self.color, mask }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.mask.width, self.mask.height)
    }

    pub fn world_width(&self) -> f32 {
        self.mask.width as f32 * game::CELL_WIDTH
    }

    pub fn world_height(&self) -> f32 {
        self.mask.height as f32 * game::CELL_HEIGHT
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Converts a world-unit offset to a cell offset for mask tests.
pub fn world_to_cells(dx: f32, dy: f32) -> (i32, i32) {
    ((dx / game::CELL_WIDTH).round() as i32, (dy / game::CELL_HEIGHT).round() as i32)
}

/// Draws a sprite at a world position, clipped to `area`. Transparent cells
/// leave whatever is already underneath.
pub fn blit(f: &mut Frame<'_>, area: Rect, sprite: &Sprite, world: (f32, f32)) {
    let origin_x = area.x as i32 + (world.0 / game::CELL_WIDTH).round() as i32;
    let origin_y = area.y as i32 + (world.1 / game::CELL_HEIGHT).round() as i32;

    let buf = f.buffer_mut();
    for (row, line) in sprite.lines().iter().enumerate() {
        let y = origin_y + row as i32;
        if y < area.top() as i32 || y >= area.bottom() as i32 {
            continue;
        }
        for (col, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x = origin_x + col as i32;
            if x < area.left() as i32 || x >= area.right() as i32 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                cell.set_char(ch);
                if let Some(color) = sprite.color() {
                    cell.set_fg(color);
                }
            }
        }
    }
}

/// Bird art indexed by tilt pose (climb/level/dive) and wing frame.
#[derive(Debug, Clone)]
pub struct BirdSprites {
    poses: [[Sprite; 3]; 3],
}

impl BirdSprites {
    fn new() -> Self {
        let load = |texts: [&str; 3]| texts.map(|text| Sprite::new(text, sprites::BIRD_COLOR));
        BirdSprites {
            poses: [load(sprites::BIRD_CLIMB), load(sprites::BIRD_LEVEL), load(sprites::BIRD_DIVE)],
        }
    }

    fn pose(tilt: f32) -> usize {
        if tilt >= game::CLIMB_TILT {
            0
        } else if tilt <= game::DIVE_TILT {
            2
        } else {
            1
        }
    }

    pub fn frame(&self, tilt: f32, frame: usize) -> &Sprite {
        &self.poses[Self::pose(tilt)][frame]
    }

    /// Collision mask for a wing frame. Always the level pose: masks come
    /// from the unrotated sprite, tilt is a draw-time effect only.
    pub fn mask(&self, frame: usize) -> &Mask {
        self.poses[1][frame].mask()
    }

    pub fn world_height(&self) -> f32 {
        self.poses[1][0].world_height()
    }
}

#[derive(Debug, Clone)]
pub struct PipeSprites {
    pub top: Sprite,
    pub bottom: Sprite,
}

/// Every sprite the game draws, built once at startup and handed to entity
/// constructors. Pipe and base art are generated rather than drawn by hand.
#[derive(Debug, Clone)]
pub struct Sprites {
    pub bird: BirdSprites,
    pub pipe: PipeSprites,
    pub base: Sprite,
}

impl Sprites {
    pub fn load() -> Self {
        let bottom = Sprite::new(&pipe_text(), sprites::PIPE_COLOR);
        let top = bottom.flipped_v();
        Sprites {
            bird: BirdSprites::new(),
            pipe: PipeSprites { top, bottom },
            base: Sprite::new(&base_text(), sprites::BASE_COLOR),
        }
    }
}

/// A bottom pipe: rim rows facing the gap, body below. The top pipe is this
/// flipped vertically.
fn pipe_text() -> String {
    let body_row = std::iter::repeat_n(sprites::PIPE_BODY, sprites::PIPE_WIDTH as usize)
        .collect::<String>();
    let rim_row = std::iter::repeat_n(sprites::PIPE_RIM, sprites::PIPE_WIDTH as usize)
        .collect::<String>();

    let rim_rows = std::iter::repeat_with(|| rim_row.clone()).take(sprites::PIPE_RIM_ROWS as usize);
    let body_rows = std::iter::repeat_with(|| body_row.clone())
        .take((sprites::PIPE_HEIGHT - sprites::PIPE_RIM_ROWS) as usize);

    rim_rows.chain(body_rows).collect::<Vec<String>>().join("\n")
}

fn base_text() -> String {
    let top_row = std::iter::repeat_n(sprites::BASE_TOP, sprites::BASE_WIDTH as usize)
        .collect::<String>();
    let fill_row = std::iter::repeat_n(sprites::BASE_FILL, sprites::BASE_WIDTH as usize)
        .collect::<String>();

    [top_row, fill_row].join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mask_transparency() {
        let sprite = Sprite::new(" a\nb \n", None);
        assert_eq!(sprite.size(), (2, 2));

        let mask = sprite.mask();
        assert!(!mask.opaque(0, 0));
        assert!(mask.opaque(1, 0));
        assert!(mask.opaque(0, 1));
        assert!(!mask.opaque(1, 1));
        assert!(!mask.opaque(-1, 0));
        assert!(!mask.opaque(0, 2));
    }

    #[test]
    fn test_mask_pads_short_lines() {
        let sprite = Sprite::new("###\n#\n", None);
        assert_eq!(sprite.size(), (3, 2));
        assert!(sprite.mask().opaque(2, 0));
        assert!(!sprite.mask().opaque(2, 1));
    }

    #[test]
    fn test_overlap_offset_semantics() {
        let wide = Sprite::new("##", None);
        let dot = Sprite::new("#", None);

        assert_eq!(wide.mask().overlap(dot.mask(), (0, 0)), Some((0, 0)));
        assert_eq!(wide.mask().overlap(dot.mask(), (1, 0)), Some((1, 0)));
        assert_eq!(wide.mask().overlap(dot.mask(), (2, 0)), None);
        assert_eq!(wide.mask().overlap(dot.mask(), (0, 1)), None);
    }

    #[test]
    fn test_overlap_ignores_transparent_cells() {
        let hollow = Sprite::new("# #", None);
        let dot = Sprite::new("#", None);

        assert_eq!(hollow.mask().overlap(dot.mask(), (1, 0)), None);
        assert_eq!(hollow.mask().overlap(dot.mask(), (2, 0)), Some((2, 0)));
    }

    #[test]
    fn test_flipped_v_reverses_rows() {
        let sprite = Sprite::new("##\n..\n", None);
        let flipped = sprite.flipped_v();
        assert_eq!(flipped.lines(), &["..".to_string(), "##".to_string()]);
    }

    #[test]
    fn test_world_to_cells_rounds() {
        assert_eq!(world_to_cells(0.0, 0.0), (0, 0));
        assert_eq!(world_to_cells(-105.0, 50.0), (-11, 3));
        assert_eq!(world_to_cells(14.0, -40.0), (1, -2));
    }

    #[test]
    fn test_load_pipe_geometry() {
        let sprites = Sprites::load();

        // Bottom pipe rims face up, top pipe rims face down.
        let bottom_first = sprites.pipe.bottom.lines().first().unwrap();
        let top_last = sprites.pipe.top.lines().last().unwrap();
        assert!(bottom_first.chars().all(|c| c == crate::constants::sprites::PIPE_RIM));
        assert!(top_last.chars().all(|c| c == crate::constants::sprites::PIPE_RIM));

        // Tall enough to reach past the top of the world from any gap height.
        assert!(sprites.pipe.top.world_height() >= game::PIPE_GAP_MAX as f32);

        // Fully opaque: no holes for the bird to slip through.
        let mask = sprites.pipe.bottom.mask();
        for y in 0..mask.height() as i32 {
            for x in 0..mask.width() as i32 {
                assert!(mask.opaque(x, y));
            }
        }
    }

    #[test]
    fn test_load_bird_frames() {
        let sprites = Sprites::load();
        for frame in 0..3 {
            let level = sprites.bird.frame(0.0, frame);
            assert_eq!(level.mask(), sprites.bird.mask(frame));
        }
        // Pose selection buckets the tilt angle.
        assert_eq!(
            sprites.bird.frame(game::MAX_ROTATION, 1).lines(),
            sprites.bird.frame(game::CLIMB_TILT, 1).lines()
        );
        assert_eq!(
            sprites.bird.frame(game::DIVE_TILT, 1).lines(),
            sprites.bird.frame(game::MIN_ROTATION, 1).lines()
        );
    }

    #[test]
    fn test_base_covers_world_width() {
        let sprites = Sprites::load();
        assert!(sprites.base.world_width() > game::WORLD_WIDTH);
    }
}
