use log::info;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::config::{GameConfig, Variant};
use crate::error::Result;
use crate::font::Font;
use crate::game::Game;
use crate::snake::Direction;
use crate::utils::Point;

pub type Rgb = (u8, u8, u8);

const BACKGROUND: Rgb = (0, 0, 0);
const FOOD: Rgb = (255, 0, 0);
const EYE: Rgb = (255, 255, 0);
const TEXT: Rgb = (255, 255, 255);

/// Owns the pixel surface and the font for one window.
///
/// Dropping it releases the GPU surface.
pub struct RenderContext {
    pixels: Pixels,
    font: Font,
    width: u32,
    height: u32,
    show_steps: bool,
}

impl RenderContext {
    pub fn new(window: &Window, config: &GameConfig) -> Result<Self> {
        let window_size = window.inner_size();
        let surface = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(config.width as u32, config.height as u32, surface)?;
        info!("render context ready: {}x{} buffer", config.width, config.height);
        Ok(Self {
            pixels,
            font: Font::new(2),
            width: config.width as u32,
            height: config.height as u32,
            show_steps: config.variant == Variant::Autopilot,
        })
    }

    /// Draws the current state and presents it.
    pub fn render(&mut self, game: &Game) -> Result<()> {
        let mut canvas = Canvas::new(self.pixels.frame_mut(), self.width, self.height);
        draw_game(&mut canvas, game, &self.font, self.show_steps);
        self.pixels.render()?;
        Ok(())
    }

    pub fn shutdown(self) {
        info!("render context closed");
    }
}

/// RGBA frame buffer view with clipped drawing.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self { frame, width, height }
    }

    pub fn clear(&mut self, (r, g, b): Rgb) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[r, g, b, 0xFF]);
        }
    }

    pub fn put(&mut self, x: u32, y: u32, (r, g, b): Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        if i + 4 <= self.frame.len() {
            self.frame[i..i + 4].copy_from_slice(&[r, g, b, 0xFF]);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.frame.get(i..i + 3).map(|p| (p[0], p[1], p[2]))
    }

    /// Filled rectangle; parts outside the frame are skipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px as u32, py as u32, color);
            }
        }
    }

    pub fn text(&mut self, font: &Font, text: &str, x: u32, y: u32, color: Rgb) {
        font.rasterize(text, x, y, |px, py| self.put(px, py, color));
    }
}

/// Color of segment `index` out of `len`: blue at the head fading to green.
pub fn segment_color(index: usize, len: usize) -> Rgb {
    let len = len.max(1);
    let ramp = ((index * 255).div_ceil(len)).min(255) as u8;
    (50, ramp, 255 - ramp)
}

/// Top-left corners of the two eyes on a head at `head`.
pub fn eye_positions(head: Point, direction: Direction, block: i32) -> [Point; 2] {
    let near = block / 4;
    let far = block * 3 / 4;
    let (a, b) = match direction {
        Direction::Right => ((far, near), (far, far)),
        Direction::Left => ((near, near), (near, far)),
        Direction::Up => ((near, near), (far, near)),
        Direction::Down => ((near, far), (far, far)),
    };
    [head.offset(a.0, a.1), head.offset(b.0, b.1)]
}

pub fn eye_size(block: i32) -> i32 {
    (block * 3 / 20).max(1)
}

pub fn draw_game(canvas: &mut Canvas<'_>, game: &Game, font: &Font, show_steps: bool) {
    let block = game.field().block;
    canvas.clear(BACKGROUND);

    let body = game.snake().body();
    for (i, seg) in body.iter().enumerate() {
        canvas.fill_rect(seg.x, seg.y, block, block, segment_color(i, body.len()));
    }

    let eye = eye_size(block);
    for p in eye_positions(game.snake().head(), game.direction(), block) {
        canvas.fill_rect(p.x, p.y, eye, eye, EYE);
    }

    let food = game.food();
    canvas.fill_rect(food.x, food.y, block, block, FOOD);

    canvas.text(font, &format!("Score: {}", game.score()), 0, 0, TEXT);
    if show_steps {
        canvas.text(font, &format!("Steps: {}", game.steps()), 0, block.max(0) as u32, TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_runs_blue_to_green() {
        assert_eq!(segment_color(0, 3), (50, 0, 255));
        assert_eq!(segment_color(1, 3), (50, 85, 170));
        assert_eq!(segment_color(2, 3), (50, 170, 85));
        // ramp rounds up
        assert_eq!(segment_color(1, 4), (50, 64, 191));
    }

    #[test]
    fn eyes_follow_direction() {
        let head = Point::new(100, 100);
        assert_eq!(
            eye_positions(head, Direction::Right, 20),
            [Point::new(115, 105), Point::new(115, 115)]
        );
        assert_eq!(
            eye_positions(head, Direction::Left, 20),
            [Point::new(105, 105), Point::new(105, 115)]
        );
        assert_eq!(
            eye_positions(head, Direction::Up, 20),
            [Point::new(105, 105), Point::new(115, 105)]
        );
        assert_eq!(
            eye_positions(head, Direction::Down, 20),
            [Point::new(105, 115), Point::new(115, 115)]
        );
        assert_eq!(eye_size(20), 3);
    }

    #[test]
    fn fill_rect_clips_at_edges() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.fill_rect(-2, 2, 4, 10, (1, 2, 3));
        assert_eq!(canvas.pixel(0, 3), Some((1, 2, 3)));
        assert_eq!(canvas.pixel(1, 2), Some((1, 2, 3)));
        assert_eq!(canvas.pixel(2, 2), Some((0, 0, 0)));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn frame_shows_snake_food_and_score() {
        let config = GameConfig::autopilot();
        let game = Game::with_seed(&config, 4).unwrap();
        let mut frame = vec![0u8; (config.width * config.height * 4) as usize];
        let mut canvas = Canvas::new(&mut frame, config.width as u32, config.height as u32);

        draw_game(&mut canvas, &game, &Font::new(2), true);

        let head = game.snake().head();
        assert_eq!(canvas.pixel(head.x as u32, head.y as u32), Some((50, 0, 255)));
        let [eye, _] = eye_positions(head, game.direction(), 20);
        assert_eq!(canvas.pixel(eye.x as u32, eye.y as u32), Some(EYE));
        let food = game.food();
        // bottom row of the food block is never under the text lines
        assert_eq!(canvas.pixel(food.x as u32 + 19, food.y as u32 + 19), Some(FOOD));
        // 'S' of "Score" starts with a lit pixel in its second column
        assert_eq!(canvas.pixel(2, 0), Some(TEXT));
        // "Steps" line
        assert_eq!(canvas.pixel(2, 20), Some(TEXT));
    }
}
