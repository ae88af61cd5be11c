//! Map module - the fixed wall/empty grid
//!
//! The map is a 16x16 grid where each cell is either a wall or empty space.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..15 (left to right), y ranges 0..15 (top to bottom).
//! World positions are floats in cell units; a position belongs to the cell of its
//! floored coordinates.

use std::fmt;

use crate::types::{MAP_HEIGHT, MAP_WIDTH};

/// Total number of cells on the map
const MAP_SIZE: usize = (MAP_WIDTH as usize) * (MAP_HEIGHT as usize);

/// The built-in arena. `#` is a wall, `.` is empty.
pub const ARENA_ROWS: [&str; MAP_HEIGHT as usize] = [
    "################",
    "#..............#",
    "#........#.....#",
    "#........#.....#",
    "#..............#",
    "#.......####...#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#......##......#",
    "#......##......#",
    "#..............#",
    "#..............#",
    "#..............#",
    "################",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall,
}

impl Tile {
    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Wall => '#',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    RowCount { found: usize },
    RowWidth { row: usize, found: usize },
    UnknownTile { row: usize, col: usize, ch: char },
}

impl MapError {
    pub fn code(self) -> &'static str {
        match self {
            MapError::RowCount { .. } => "row_count",
            MapError::RowWidth { .. } => "row_width",
            MapError::UnknownTile { .. } => "unknown_tile",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MapError::RowCount { .. } => "map must have exactly MAP_HEIGHT rows",
            MapError::RowWidth { .. } => "every map row must be MAP_WIDTH cells wide",
            MapError::UnknownTile { .. } => "map tiles must be '#' or '.'",
        }
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MapError::RowCount { found } => write!(f, "{} (found {found})", self.message()),
            MapError::RowWidth { row, found } => {
                write!(f, "{} (row {row} has {found})", self.message())
            }
            MapError::UnknownTile { row, col, ch } => {
                write!(f, "{} (found {ch:?} at {col},{row})", self.message())
            }
        }
    }
}

impl std::error::Error for MapError {}

/// The world grid - 16 columns x 16 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct WorldMap {
    /// Flat array of tiles, row-major order (y * WIDTH + x)
    cells: [Tile; MAP_SIZE],
}

impl WorldMap {
    /// The built-in arena.
    pub fn arena() -> Self {
        let mut cells = [Tile::Empty; MAP_SIZE];
        for (y, row) in ARENA_ROWS.iter().enumerate() {
            for (x, b) in row.bytes().enumerate().take(MAP_WIDTH as usize) {
                if b == b'#' {
                    cells[y * MAP_WIDTH as usize + x] = Tile::Wall;
                }
            }
        }
        Self { cells }
    }

    /// A map with no walls at all.
    pub fn open() -> Self {
        Self {
            cells: [Tile::Empty; MAP_SIZE],
        }
    }

    /// Parse a map from text rows.
    pub fn from_rows(rows: &[&str]) -> Result<Self, MapError> {
        if rows.len() != MAP_HEIGHT as usize {
            return Err(MapError::RowCount { found: rows.len() });
        }

        let mut cells = [Tile::Empty; MAP_SIZE];
        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != MAP_WIDTH as usize {
                return Err(MapError::RowWidth { row: y, found: width });
            }
            for (x, ch) in row.chars().enumerate() {
                cells[y * MAP_WIDTH as usize + x] = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Empty,
                    _ => return Err(MapError::UnknownTile { row: y, col: x, ch }),
                };
            }
        }
        Ok(Self { cells })
    }

    /// Calculate flat index from (x, y) cell coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= MAP_WIDTH as i32 || y < 0 || y >= MAP_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * (MAP_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        MAP_WIDTH
    }

    pub fn height(&self) -> u8 {
        MAP_HEIGHT
    }

    /// Tile at cell (x, y), `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether a world position lies inside the map rectangle
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x < MAP_WIDTH as f32 && y >= 0.0 && y < MAP_HEIGHT as f32
    }

    /// Tile under a world position, `None` outside the grid
    #[inline]
    pub fn tile_at(&self, x: f32, y: f32) -> Option<Tile> {
        if !self.contains(x, y) {
            return None;
        }
        self.get(x as i32, y as i32)
    }

    /// Occupancy test for movement. Positions off the map count as solid.
    #[inline]
    pub fn is_solid_at(&self, x: f32, y: f32) -> bool {
        !matches!(self.tile_at(x, y), Some(Tile::Empty))
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::arena()
    }
}
