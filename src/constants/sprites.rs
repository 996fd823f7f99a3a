use ratatui::style::Color;

pub const BIRD_COLOR: Option<Color> = Some(Color::Yellow);

/// Wing frames per pose: 0 wings raised, 1 level, 2 tucked.
pub const BIRD_LEVEL: [&str; 3] = [
    r#"
 \\
(o )>
 ~~
"#,
    r#"
 __
(o )>
 ~~
"#,
    r#"
 __
(o )>
 //
"#,
];

pub const BIRD_CLIMB: [&str; 3] = [
    r#"
  />
(o )
 \~
"#,
    r#"
  />
(o )
 ~~
"#,
    r#"
  />
(o )
 //
"#,
];

pub const BIRD_DIVE: [&str; 3] = [
    r#"
 __
(o )
 ~\>
"#,
    r#"
 __
(o )
 ~\>
"#,
    r#"
 __
(o )
 ~\>
"#,
];

/// Pipe sprite geometry in cells. The sprite is taller than the playfield so
/// a pipe anchored anywhere in the gap range still reaches past the edge.
pub const PIPE_WIDTH: u16 = 6;
pub const PIPE_HEIGHT: u16 = 32;
pub const PIPE_RIM_ROWS: u16 = 2;
pub const PIPE_RIM: char = '█';
pub const PIPE_BODY: char = '|';
pub const PIPE_COLOR: Option<Color> = Some(Color::LightGreen);

/// Wider than the 50-cell playfield so one segment alone covers it and two
/// tile seamlessly while scrolling.
pub const BASE_WIDTH: u16 = 68;
pub const BASE_TOP: char = '█';
pub const BASE_FILL: char = '▒';
pub const BASE_COLOR: Option<Color> = Some(Color::Rgb(222, 216, 149));
