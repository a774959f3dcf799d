//! Tile map loading, normalization and occupancy queries.

use std::path::Path;

use thiserror::Error;

/// Built-in fallback layout used when no map file is available.
const DEFAULT_LAYOUT: &str = "\
111111111111111
100000000000101
100001000000101
111100000010101
100000000010101
100000001111101
100000000000001
100000000000001
111111000111101
100000000000001
111111111111111";

/// Errors produced while loading a map file.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("could not read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("map has no rows")]
    Empty,
}

/// Static level geometry: a row-major grid of cells with a fixed tile edge
/// length. Cell value 0 is open floor, anything else is solid wall.
pub struct TileMap {
    grid: Vec<Vec<u8>>,
    tile_size: f32,
}

impl TileMap {
    /// Parses a map from text, one row per line. Digits become cell values,
    /// spaces are open floor and any other character is normalized to solid
    /// wall. Short rows are padded with wall so the grid stays rectangular.
    pub fn from_text(text: &str, tile_size: f32) -> Result<Self, MapError> {
        let mut grid: Vec<Vec<u8>> = Vec::new();
        for line in text.lines() {
            let row: Vec<u8> = line
                .chars()
                .map(|ch| match ch {
                    ' ' => 0,
                    _ => ch.to_digit(10).map(|d| d as u8).unwrap_or(1),
                })
                .collect();
            if !row.is_empty() {
                grid.push(row);
            }
        }
        if grid.is_empty() {
            return Err(MapError::Empty);
        }
        let widest = grid.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut grid {
            row.resize(widest, 1);
        }
        Ok(Self { grid, tile_size })
    }

    pub fn from_file<P: AsRef<Path>>(path: P, tile_size: f32) -> Result<Self, MapError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text, tile_size)
    }

    /// The built-in bordered layout. Always parses.
    pub fn embedded(tile_size: f32) -> Self {
        Self::from_text(DEFAULT_LAYOUT, tile_size).expect("built-in layout is valid")
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, |r| r.len())
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Grid extent in world pixels.
    pub fn width_px(&self) -> f32 {
        self.cols() as f32 * self.tile_size
    }

    pub fn height_px(&self) -> f32 {
        self.rows() as f32 * self.tile_size
    }

    /// Raw cell value, wall for anything out of range.
    pub fn cell(&self, col: usize, row: usize) -> u8 {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(1)
    }

    /// Occupancy query for a continuous world coordinate. Everything outside
    /// the grid's pixel bounds reads as wall, so callers never need their own
    /// range checks and ray traversal has a natural boundary.
    pub fn is_wall(&self, x: f32, y: f32) -> bool {
        if x < 0.0 || x > self.width_px() || y < 0.0 || y > self.height_px() {
            return true;
        }
        let col = (x / self.tile_size).floor() as isize;
        let row = (y / self.tile_size).floor() as isize;
        if col < 0 || row < 0 {
            return true;
        }
        match self.grid.get(row as usize).and_then(|r| r.get(col as usize)) {
            Some(&cell) => cell != 0,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_room() -> TileMap {
        TileMap::from_text("11111\n10001\n10001\n10001\n11111", 64.0).expect("valid map")
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let map = square_room();
        assert!(map.is_wall(-1.0, 100.0));
        assert!(map.is_wall(100.0, -0.5));
        assert!(map.is_wall(map.width_px() + 1.0, 100.0));
        assert!(map.is_wall(100.0, map.height_px() + 1.0));
        assert!(map.is_wall(-1000.0, -1000.0));
    }

    #[test]
    fn interior_cells_are_open_and_border_is_solid() {
        let map = square_room();
        assert!(!map.is_wall(96.0, 96.0));
        assert!(!map.is_wall(200.0, 200.0));
        assert!(map.is_wall(32.0, 32.0));
        assert!(map.is_wall(96.0, 300.0));
    }

    #[test]
    fn any_nonzero_cell_is_a_wall() {
        let map = TileMap::from_text("509", 64.0).expect("valid map");
        assert!(map.is_wall(32.0, 32.0));
        assert!(!map.is_wall(96.0, 32.0));
        assert!(map.is_wall(160.0, 32.0));
    }

    #[test]
    fn unknown_characters_normalize_to_wall() {
        let map = TileMap::from_text("0#0", 64.0).expect("valid map");
        assert!(map.is_wall(96.0, 32.0));
        assert!(!map.is_wall(32.0, 32.0));
    }

    #[test]
    fn short_rows_are_padded_with_wall() {
        let map = TileMap::from_text("000\n0", 64.0).expect("valid map");
        assert_eq!(map.cols(), 3);
        assert!(map.is_wall(96.0, 96.0));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(TileMap::from_text("", 64.0), Err(MapError::Empty)));
        assert!(matches!(
            TileMap::from_text("\n\n", 64.0),
            Err(MapError::Empty)
        ));
    }

    #[test]
    fn embedded_layout_is_bordered() {
        let map = TileMap::embedded(64.0);
        assert_eq!(map.cols(), 15);
        assert_eq!(map.rows(), 11);
        for col in 0..map.cols() {
            assert_ne!(map.cell(col, 0), 0);
            assert_ne!(map.cell(col, map.rows() - 1), 0);
        }
        for row in 0..map.rows() {
            assert_ne!(map.cell(0, row), 0);
            assert_ne!(map.cell(map.cols() - 1, row), 0);
        }
    }
}
