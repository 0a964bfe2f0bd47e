use crate::{Bounds, Coord};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense row-major grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid<T> {
    bounds: Bounds,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(bounds: Bounds, value: T) -> Self {
        Self {
            bounds,
            cells: vec![value; bounds.area()],
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(bounds: Bounds) -> Self {
        Self::filled(bounds, T::default())
    }
}

impl<T> Grid<T> {
    /// Build from rows (`rows[y][x]`). Returns `None` for ragged or empty input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let bounds = Bounds::new(width as i32, height as i32);
        Some(Self {
            bounds,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn get(&self, c: Coord) -> Option<&T> {
        self.bounds.index(c).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, c: Coord) -> Option<&mut T> {
        self.bounds.index(c).map(|i| &mut self.cells[i])
    }

    /// Overwrites an in-bounds cell; out-of-bounds writes are ignored.
    pub fn set(&mut self, c: Coord, value: T) {
        if let Some(slot) = self.get_mut(c) {
            *slot = value;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, v)| (self.bounds.coord(i), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cells.iter_mut()
    }

    /// Rows in ascending `y`.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.bounds.width.max(1) as usize)
    }
}
