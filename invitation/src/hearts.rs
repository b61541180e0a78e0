//! Floating hearts drawn around the invitation card.
//!
//! Every heart moves along one of three lanes: up from below the screen, or down along the left or the right edge.
//! The motion repeats forever, so a heart's state can be computed for any moment with [`HeartSprite::frame_at`].

use crate::color::Color;
use rand::Rng;

/// Distance beyond the screen edge where the hearts appear and disappear.
const OFFSCREEN: f64 = 150.0;

/// Size of the area the hearts fly over, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a new viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Path of a heart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// From below the bottom edge up to above the top edge.
    Rising,
    /// Down along the left edge.
    LeftFalling,
    /// Down along the right edge.
    RightFalling,
}

impl Lane {
    /// Lane of the heart with the given index.
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => Lane::Rising,
            1 => Lane::LeftFalling,
            _ => Lane::RightFalling,
        }
    }
}

/// Timing function of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic acceleration in the first half, deceleration in the second.
    EaseInOut,
}

impl Easing {
    /// Maps the animation progress `k` in `[0, 1]` to the interpolation coefficient.
    pub fn apply(&self, k: f64) -> f64 {
        let k = k.clamp(0.0, 1.0);
        match self {
            Easing::Linear => k,
            Easing::EaseInOut => {
                if k < 0.5 {
                    4.0 * k * k * k
                } else {
                    1.0 - (-2.0 * k + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// State of a heart at some moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartFrame {
    /// Horizontal position in pixels.
    pub x: f64,
    /// Vertical position in pixels, growing downwards.
    pub y: f64,
    /// Scale of the glyph.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl HeartFrame {
    fn interpolate(&self, target: &HeartFrame, k: f64) -> Self {
        Self {
            x: self.x + (target.x - self.x) * k,
            y: self.y + (target.y - self.y) * k,
            scale: self.scale + (target.scale - self.scale) * k,
            opacity: self.opacity + (target.opacity - self.opacity) * k,
        }
    }
}

/// A single animated heart.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartSprite {
    lane: Lane,
    color: Color,
    from: HeartFrame,
    to: HeartFrame,
    duration: f64,
    delay: f64,
    easing: Easing,
}

impl HeartSprite {
    fn random(index: usize, color: Color, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let lane = Lane::for_index(index);
        let opacity = 0.4 + rng.random::<f64>() * 0.6;
        let scale = 0.6 + rng.random::<f64>() * 0.9;

        let (x, from_y, to_y, duration, delay, easing) = match lane {
            Lane::Rising => (
                rng.random::<f64>() * viewport.width,
                viewport.height + OFFSCREEN,
                -OFFSCREEN,
                8.0 + rng.random::<f64>() * 6.0,
                rng.random::<f64>() * 6.0,
                Easing::EaseInOut,
            ),
            Lane::LeftFalling => (
                40.0 + rng.random::<f64>() * 40.0,
                -OFFSCREEN,
                viewport.height + OFFSCREEN,
                12.0 + rng.random::<f64>() * 8.0,
                rng.random::<f64>() * 5.0,
                Easing::Linear,
            ),
            Lane::RightFalling => (
                viewport.width - 40.0 - rng.random::<f64>() * 40.0,
                -OFFSCREEN,
                viewport.height + OFFSCREEN,
                10.0 + rng.random::<f64>() * 8.0,
                rng.random::<f64>() * 4.0,
                Easing::Linear,
            ),
        };

        Self {
            lane,
            color,
            from: HeartFrame {
                x,
                y: from_y,
                scale,
                opacity,
            },
            to: HeartFrame {
                x,
                y: to_y,
                scale: scale + 0.1,
                opacity: opacity - 0.3,
            },
            duration,
            delay,
            easing,
        }
    }

    /// Lane the heart moves along.
    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// Color of the heart.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Duration of one pass in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Time before the first pass starts, in seconds.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Timing function of the pass.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Font size of the heart glyph in pixels.
    pub fn font_size(&self) -> f64 {
        36.0 + self.from.scale * 48.0
    }

    /// State of the heart `t` seconds after the animation started.
    ///
    /// Until the delay passes the heart waits at its starting point. After that every pass starts over from the
    /// start.
    pub fn frame_at(&self, t: f64) -> HeartFrame {
        if t <= self.delay || self.duration <= 0.0 {
            return self.from;
        }

        let elapsed = (t - self.delay).rem_euclid(self.duration);
        let k = self.easing.apply(elapsed / self.duration);
        self.from.interpolate(&self.to, k)
    }
}

/// The set of hearts flying over the invitation page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartField {
    viewport: Viewport,
    sprites: Vec<HeartSprite>,
}

impl HeartField {
    /// Number of hearts shown by default.
    pub const DEFAULT_COUNT: usize = 12;

    /// Creates `count` hearts with random parameters.
    ///
    /// Heart `i` gets the color `palette[i % palette.len()]` and the lane [`Lane::for_index(i)`](Lane::for_index).
    /// An empty palette is replaced with [`Color::HEART_PALETTE`]. The same `rng` state gives the same hearts.
    pub fn generate(
        count: usize,
        viewport: Viewport,
        palette: &[Color],
        rng: &mut impl Rng,
    ) -> Self {
        let palette = if palette.is_empty() {
            &Color::HEART_PALETTE[..]
        } else {
            palette
        };

        let sprites = (0..count)
            .map(|i| HeartSprite::random(i, palette[i % palette.len()], viewport, rng))
            .collect();

        Self { viewport, sprites }
    }

    /// Area the hearts fly over.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// All the hearts.
    pub fn sprites(&self) -> &[HeartSprite] {
        &self.sprites
    }

    /// States of all hearts at the moment `t` in seconds.
    pub fn frames_at(&self, t: f64) -> Vec<HeartFrame> {
        self.sprites.iter().map(|s| s.frame_at(t)).collect()
    }

    /// Draws the hearts visible at the moment `t` on a grid of `cols × rows` characters.
    ///
    /// With `ansi` set every heart is painted with its color blended over the `background` according to its
    /// opacity. Rows are separated with `\n`.
    pub fn render(&self, t: f64, cols: usize, rows: usize, background: Color, ansi: bool) -> String {
        let mut grid: Vec<Vec<Option<Color>>> = vec![vec![None; cols]; rows];

        for (sprite, frame) in self.sprites.iter().zip(self.frames_at(t)) {
            let Some((col, row)) = self.cell(&frame, cols, rows) else {
                continue;
            };

            grid[row][col] = Some(background.blend(sprite.color.with_opacity(frame.opacity)));
        }

        grid.into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        Some(color) if ansi => format!("{}♥\x1b[0m", color.ansi_fg()),
                        Some(_) => "♥".to_string(),
                        None => " ".to_string(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn cell(&self, frame: &HeartFrame, cols: usize, rows: usize) -> Option<(usize, usize)> {
        if !(0.0..self.viewport.width).contains(&frame.x)
            || !(0.0..self.viewport.height).contains(&frame.y)
        {
            return None;
        }

        let col = (frame.x / self.viewport.width * cols as f64) as usize;
        let row = (frame.y / self.viewport.height * rows as f64) as usize;

        (col < cols && row < rows).then_some((col, row))
    }
}
