//! Drawing capability the game renders into

use glam::IVec2;

/// 24-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const GREY: Color = Color::new(40, 40, 40);
    pub const DARK_YELLOW: Color = Color::new(128, 128, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_black(&self) -> bool {
        *self == Self::BLACK
    }
}

/// Pixel drawing surface. Implementations clip anything off-screen.
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Clear to black
    fn reset(&mut self);

    fn draw_dot(&mut self, pos: IVec2, color: Color);

    /// Draw a straight line, both ends inclusive
    fn draw_line(&mut self, from: IVec2, to: IVec2, color: Color) {
        let delta = (to - from).abs();
        let step = IVec2::new((to.x - from.x).signum(), (to.y - from.y).signum());
        let mut err = delta.x - delta.y;
        let mut pos = from;

        loop {
            self.draw_dot(pos, color);
            if pos == to {
                break;
            }
            let e2 = 2 * err;
            if e2 > -delta.y {
                err -= delta.y;
                pos.x += step.x;
            }
            if e2 < delta.x {
                err += delta.x;
                pos.y += step.y;
            }
        }
    }

    /// Copy the lit pixels of `surface` with its top-left corner at `origin`
    fn blit(&mut self, surface: &Surface, origin: IVec2) {
        for (pos, color) in surface.lit_pixels() {
            self.draw_dot(origin + pos, color);
        }
    }
}

/// Row-major in-memory pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
        }
    }

    fn index(&self, pos: IVec2) -> Option<usize> {
        let in_bounds =
            pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height;
        in_bounds.then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn get(&self, pos: IVec2) -> Option<Color> {
        self.index(pos).map(|i| self.pixels[i])
    }

    /// All pixels, row by row
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Non-black pixels with their positions
    pub fn lit_pixels(&self) -> impl Iterator<Item = (IVec2, Color)> + '_ {
        let width = self.width.max(1) as i32;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, color)| !color.is_black())
            .map(move |(i, color)| (IVec2::new(i as i32 % width, i as i32 / width), *color))
    }
}

impl Canvas for Surface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn reset(&mut self) {
        self.pixels.fill(Color::BLACK);
    }

    fn draw_dot(&mut self, pos: IVec2, color: Color) {
        if let Some(i) = self.index(pos) {
            self.pixels[i] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_starts_black() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.pixels().len(), 12);
        assert!(surface.pixels().iter().all(Color::is_black));
    }

    #[test]
    fn test_draw_dot_clips() {
        let mut surface = Surface::new(4, 3);
        surface.draw_dot(IVec2::new(1, 2), Color::RED);
        surface.draw_dot(IVec2::new(-1, 0), Color::RED);
        surface.draw_dot(IVec2::new(4, 0), Color::RED);

        assert_eq!(surface.get(IVec2::new(1, 2)), Some(Color::RED));
        assert_eq!(surface.lit_pixels().count(), 1);
        assert_eq!(surface.get(IVec2::new(4, 0)), None);
    }

    #[test]
    fn test_draw_vertical_line() {
        let mut surface = Surface::new(3, 5);
        surface.draw_line(IVec2::new(0, 1), IVec2::new(0, 3), Color::RED);

        let lit: Vec<IVec2> = surface.lit_pixels().map(|(pos, _)| pos).collect();
        assert_eq!(lit, vec![IVec2::new(0, 1), IVec2::new(0, 2), IVec2::new(0, 3)]);
    }

    #[test]
    fn test_draw_diagonal_line() {
        let mut surface = Surface::new(4, 4);
        surface.draw_line(IVec2::new(3, 3), IVec2::new(0, 0), Color::GREEN);
        for i in 0..4 {
            assert_eq!(surface.get(IVec2::new(i, i)), Some(Color::GREEN));
        }
        assert_eq!(surface.lit_pixels().count(), 4);
    }

    #[test]
    fn test_blit_copies_lit_pixels() {
        let mut sprite = Surface::new(2, 2);
        sprite.draw_dot(IVec2::new(1, 1), Color::GREEN);

        let mut screen = Surface::new(5, 5);
        screen.draw_dot(IVec2::new(2, 2), Color::RED);
        screen.blit(&sprite, IVec2::new(2, 1));

        assert_eq!(screen.get(IVec2::new(3, 2)), Some(Color::GREEN));
        assert_eq!(
            screen.get(IVec2::new(2, 2)),
            Some(Color::RED),
            "Black sprite pixels are transparent"
        );
    }

    #[test]
    fn test_reset_clears() {
        let mut surface = Surface::new(2, 2);
        surface.draw_dot(IVec2::new(0, 0), Color::RED);
        surface.reset();
        assert_eq!(surface.lit_pixels().count(), 0);
    }
}
