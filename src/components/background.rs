use rand::prelude::*;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::constants::background;

/// Sky cells drifting right-to-left behind the playfield. Advances on game
/// ticks, not wall-clock time, so it pauses with the rest of the world.
#[derive(Debug)]
pub struct BackgroundState {
    step_ticks: u32,
    density: f32,
    pending: u32,
    /// [row][col]; `CLOUDS.len()` marks empty sky.
    sky: Vec<Vec<usize>>,
    width: usize,
    height: usize,
}

impl BackgroundState {
    pub fn new(step_ticks: u32, density: f32) -> Self {
        Self { step_ticks, density, pending: 0, sky: Vec::new(), width: 0, height: 0 }
    }

    pub fn tick(&mut self) {
        self.pending += 1;
    }

    fn sample(density: f32, rng: &mut ThreadRng) -> usize {
        let u: f32 = rng.gen();
        if u > density {
            background::CLOUDS.len()
        } else {
            rng.gen_range(0..background::CLOUDS.len())
        }
    }

    fn update(&mut self, area: Rect) -> Vec<String> {
        let width = area.width as usize;
        let height = area.height as usize;
        let density = self.density;

        let mut rng = thread_rng();

        // Adjust to the current area before scrolling.
        if width < self.width {
            for row in self.sky.iter_mut() {
                row.truncate(width);
            }
        } else if width > self.width {
            let extra = width - self.width;
            for row in self.sky.iter_mut() {
                row.extend(std::iter::repeat_with(|| Self::sample(density, &mut rng)).take(extra));
            }
        }
        if height < self.height {
            self.sky.truncate(height);
        } else {
            for _ in 0..(height - self.height) {
                self.sky.push(vec![background::CLOUDS.len(); width]);
            }
        }

        self.width = width;
        self.height = height;

        while self.step_ticks > 0 && self.pending >= self.step_ticks {
            self.pending -= self.step_ticks;
            for row in self.sky.iter_mut() {
                if !row.is_empty() {
                    row.remove(0);
                    row.push(Self::sample(density, &mut rng));
                }
            }
        }

        self.sky
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&index| {
                        if index == background::CLOUDS.len() {
                            ' '
                        } else {
                            background::CLOUDS[index]
                        }
                    })
                    .collect::<String>()
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct Background;

impl Background {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatefulWidget for Background {
    type State = BackgroundState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut BackgroundState)
    where
        Self: Sized,
    {
        let lines = state.update(area).into_iter().map(Line::from).collect::<Vec<_>>();
        Paragraph::new(lines).style(Style::default().fg(Color::White)).render(area, buf);
    }
}
