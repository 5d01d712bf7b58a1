use ratatui::{buffer::Buffer, layout::Rect as Area, style::Color};

use crate::entities::Rect;
use crate::game::Game;
use crate::settings::{Rgb, Settings};

/// Drawing target for one frame, addressed in world pixels
pub trait Surface {
    fn fill(&mut self, color: Rgb);
    fn draw_rect(&mut self, rect: Rect, color: Rgb);
}

/// Scales the world onto a block of terminal cells, painting cell backgrounds
pub struct TerminalSurface<'a> {
    buffer: &'a mut Buffer,
    area: Area,
    world_width: i32,
    world_height: i32,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buffer: &'a mut Buffer, area: Area, settings: &Settings) -> Self {
        Self {
            buffer,
            area,
            world_width: settings.screen_width.max(1),
            world_height: settings.screen_height.max(1),
        }
    }

    /// Cell range covered by a world span, never empty unless fully clipped
    fn span(start: i32, len: i32, world: i32, cells: u16) -> Option<(u16, u16)> {
        let cells = i64::from(cells);
        let world = i64::from(world);
        let start = i64::from(start);
        let end = start + i64::from(len);

        let first = (start * cells).div_euclid(world);
        let mut last = (end * cells + world - 1).div_euclid(world);
        if last <= first {
            last = first + 1;
        }

        let first = first.clamp(0, cells);
        let last = last.clamp(0, cells);
        (first < last).then_some((first as u16, last as u16))
    }

    fn paint(&mut self, cols: (u16, u16), rows: (u16, u16), color: Rgb) {
        let color = to_color(color);
        for y in rows.0..rows.1 {
            for x in cols.0..cols.1 {
                if let Some(cell) = self.buffer.cell_mut((self.area.x + x, self.area.y + y)) {
                    cell.set_symbol(" ").set_bg(color);
                }
            }
        }
    }
}

impl Surface for TerminalSurface<'_> {
    fn fill(&mut self, color: Rgb) {
        self.paint((0, self.area.width), (0, self.area.height), color);
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        let cols = Self::span(rect.x, rect.width, self.world_width, self.area.width);
        let rows = Self::span(rect.y, rect.height, self.world_height, self.area.height);
        if let (Some(cols), Some(rows)) = (cols, rows) {
            self.paint(cols, rows, color);
        }
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Paints the whole scene exactly as the last update left it
pub fn draw_frame(game: &Game, surface: &mut impl Surface) {
    let settings = &game.settings;

    surface.fill(settings.bg_color);
    for bullet in &game.bullets {
        surface.draw_rect(bullet.rect, settings.bullet_color);
    }
    surface.draw_rect(game.ship.rect, settings.ship_color);
    for alien in &game.fleet.aliens {
        surface.draw_rect(alien.rect, settings.alien_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Bullet;

    #[derive(Default)]
    struct Recorder {
        fills: Vec<Rgb>,
        rects: Vec<(Rect, Rgb)>,
    }

    impl Surface for Recorder {
        fn fill(&mut self, color: Rgb) {
            self.fills.push(color);
        }

        fn draw_rect(&mut self, rect: Rect, color: Rgb) {
            self.rects.push((rect, color));
        }
    }

    fn bg_at(buffer: &Buffer, x: u16, y: u16) -> Option<Color> {
        buffer.cell((x, y)).map(|cell| cell.bg)
    }

    #[test]
    fn test_draw_frame_order() {
        let mut game = Game::new(Settings::default());
        game.fire();
        let mut recorder = Recorder::default();

        draw_frame(&game, &mut recorder);

        let settings = &game.settings;
        assert_eq!(recorder.fills, vec![settings.bg_color]);
        assert_eq!(recorder.rects.len(), 1 + 1 + 98);
        assert_eq!(recorder.rects[0].1, settings.bullet_color);
        assert_eq!(recorder.rects[1], (game.ship.rect, settings.ship_color));
        assert!(recorder.rects[2..].iter().all(|(_, c)| *c == settings.alien_color));
    }

    #[test]
    fn test_fill_paints_every_cell() {
        let settings = Settings::default();
        let area = Area::new(0, 0, 12, 8);
        let mut buffer = Buffer::empty(area);
        let mut surface = TerminalSurface::new(&mut buffer, area, &settings);

        surface.fill(Rgb(1, 2, 3));

        for y in 0..8 {
            for x in 0..12 {
                assert_eq!(bg_at(&buffer, x, y), Some(Color::Rgb(1, 2, 3)));
            }
        }
    }

    #[test]
    fn test_rect_is_scaled_to_cells() {
        // 1200x800 onto 120x40 cells: 10px per column, 20px per row
        let settings = Settings::default();
        let area = Area::new(0, 0, 120, 40);
        let mut buffer = Buffer::empty(area);
        let mut surface = TerminalSurface::new(&mut buffer, area, &settings);

        surface.draw_rect(Rect::new(40, 40, 40, 40), Rgb(9, 9, 9));

        let painted = Some(Color::Rgb(9, 9, 9));
        assert_eq!(bg_at(&buffer, 4, 2), painted);
        assert_eq!(bg_at(&buffer, 7, 3), painted);
        assert_ne!(bg_at(&buffer, 8, 2), painted);
        assert_ne!(bg_at(&buffer, 4, 4), painted);
        assert_ne!(bg_at(&buffer, 3, 2), painted);
    }

    #[test]
    fn test_thin_rect_still_covers_a_cell() {
        let settings = Settings::default();
        let area = Area::new(0, 0, 120, 40);
        let mut buffer = Buffer::empty(area);
        let mut surface = TerminalSurface::new(&mut buffer, area, &settings);

        let ship = crate::entities::Ship::new(&settings);
        let bullet = Bullet::new(&ship, &settings);
        surface.draw_rect(bullet.rect, Rgb(5, 5, 5));

        // Bullet spans x 599..602, y 752..767
        assert_eq!(bg_at(&buffer, 59, 37), Some(Color::Rgb(5, 5, 5)));
        assert_eq!(bg_at(&buffer, 60, 38), Some(Color::Rgb(5, 5, 5)));
    }

    #[test]
    fn test_offscreen_rect_is_clipped() {
        let settings = Settings::default();
        let area = Area::new(0, 0, 120, 40);
        let mut buffer = Buffer::empty(area);
        let mut surface = TerminalSurface::new(&mut buffer, area, &settings);

        surface.draw_rect(Rect::new(10, -30, 3, 15), Rgb(7, 7, 7));
        surface.draw_rect(Rect::new(1190, 790, 40, 40), Rgb(8, 8, 8));

        assert_ne!(bg_at(&buffer, 1, 0), Some(Color::Rgb(7, 7, 7)));
        assert_eq!(bg_at(&buffer, 119, 39), Some(Color::Rgb(8, 8, 8)));
    }

    #[test]
    fn test_surface_respects_area_offset() {
        let settings = Settings::default();
        let area = Area::new(5, 2, 120, 40);
        let mut buffer = Buffer::empty(Area::new(0, 0, 130, 45));
        let mut surface = TerminalSurface::new(&mut buffer, area, &settings);

        surface.draw_rect(Rect::new(0, 0, 10, 20), Rgb(4, 4, 4));

        assert_eq!(bg_at(&buffer, 5, 2), Some(Color::Rgb(4, 4, 4)));
        assert_ne!(bg_at(&buffer, 0, 0), Some(Color::Rgb(4, 4, 4)));
    }
}
