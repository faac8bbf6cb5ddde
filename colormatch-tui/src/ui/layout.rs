//! Screen geometry
//!
//! Shared by rendering and mouse hit-testing so a click lands on the tile
//! that was drawn under it.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the playing view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayingLayout {
    pub title: Rect,
    pub subtitle: Rect,
    pub target: Rect,
    pub timer: Rect,
    pub score: Rect,
    pub grid: Rect,
    pub hints: Rect,
}

/// Split the frame for the playing view
pub fn playing_layout(area: Rect) -> PlayingLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // "Match this color"
            Constraint::Length(4), // Target swatch
            Constraint::Length(1), // Timer
            Constraint::Length(1), // Score and tap feedback
            Constraint::Min(4),    // Grid
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    PlayingLayout {
        title: chunks[0],
        subtitle: chunks[1],
        target: chunks[2],
        timer: chunks[3],
        score: chunks[4],
        grid: chunks[5],
        hints: chunks[6],
    }
}

/// Tile rectangles for a `size` x `size` grid centered in `area`, row-major
///
/// Terminal cells are about twice as tall as wide, so tiles are twice as
/// wide as they are tall to look square.
pub fn grid_tiles(area: Rect, size: usize) -> Vec<Rect> {
    if size == 0 || area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let n = size as u16;

    let tile_height = (area.height / n).min(area.width / n / 2).max(1);
    let tile_width = (tile_height * 2).min(area.width / n).max(1);

    let left = area.x + area.width.saturating_sub(tile_width * n) / 2;
    let top = area.y + area.height.saturating_sub(tile_height * n) / 2;

    (0..n)
        .flat_map(|row| (0..n).map(move |col| (row, col)))
        .map(|(row, col)| {
            Rect::new(left + col * tile_width, top + row * tile_height, tile_width, tile_height)
                .intersection(area)
        })
        .collect()
}

/// Tile index under terminal cell (`column`, `row`) in the playing view
pub fn tile_at(viewport: Rect, size: usize, column: u16, row: u16) -> Option<usize> {
    let layout = playing_layout(viewport);
    grid_tiles(layout.grid, size).iter().position(|tile| {
        tile.width > 0
            && tile.height > 0
            && column >= tile.x
            && column < tile.x + tile.width
            && row >= tile.y
            && row < tile.y + tile.height
    })
}

/// Centered rectangle taking the given percentages of `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Rectangle of fixed size centered in `r`, clipped to it
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_tiles_count_and_order() {
        let tiles = grid_tiles(Rect::new(0, 0, 80, 20), 4);
        assert_eq!(tiles.len(), 16);
        // Row-major: second tile is to the right of the first
        assert_eq!(tiles[1].y, tiles[0].y);
        assert!(tiles[1].x > tiles[0].x);
        // Fifth tile starts the second row
        assert_eq!(tiles[4].x, tiles[0].x);
        assert!(tiles[4].y > tiles[0].y);
    }

    #[test]
    fn test_grid_tiles_are_wide_and_inside_area() {
        let area = Rect::new(2, 3, 80, 20);
        let tiles = grid_tiles(area, 4);
        for tile in &tiles {
            assert_eq!(tile.width, tile.height * 2);
            assert_eq!(tile.intersection(area), *tile);
        }
    }

    #[test]
    fn test_grid_tiles_empty_inputs() {
        assert!(grid_tiles(Rect::new(0, 0, 80, 20), 0).is_empty());
        assert!(grid_tiles(Rect::new(0, 0, 0, 0), 4).is_empty());
    }

    #[test]
    fn test_tile_at_hits_drawn_tile() {
        let viewport = Rect::new(0, 0, 100, 40);
        let tiles = grid_tiles(playing_layout(viewport).grid, 4);

        for (index, tile) in tiles.iter().enumerate() {
            let hit = tile_at(viewport, 4, tile.x + tile.width / 2, tile.y + tile.height / 2);
            assert_eq!(hit, Some(index));
        }
    }

    #[test]
    fn test_tile_at_misses_outside_grid() {
        let viewport = Rect::new(0, 0, 100, 40);
        assert_eq!(tile_at(viewport, 4, 0, 0), None);
        assert_eq!(tile_at(Rect::default(), 4, 0, 0), None);
    }

    #[test]
    fn test_centered_fixed_clips() {
        let r = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_fixed(4, 2, r), Rect::new(3, 1, 4, 2));
        assert_eq!(centered_fixed(40, 20, r), r);
    }
}
