//! Color grid generation
//!
//! A grid is `size * size` colors in row-major order. One cell, chosen
//! uniformly at random, holds the target color; every other cell is a
//! random decoy.

use rand::Rng;

use crate::color::Rgb;

/// Square grid of tile colors, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    size: usize,
    cells: Vec<Rgb>,
}

impl ColorGrid {
    /// Generate a grid containing `target` at one random position.
    ///
    /// When `unique` is true, decoys that happen to equal the target are
    /// re-rolled, so the target appears exactly once. When false, decoys are
    /// left as drawn and the target may appear more than once.
    pub fn generate<R: Rng + ?Sized>(size: usize, target: Rgb, unique: bool, rng: &mut R) -> Self {
        let len = size * size;
        let mut cells: Vec<Rgb> = (0..len)
            .map(|_| {
                let mut color = Rgb::random(rng);
                while unique && color == target {
                    color = Rgb::random(rng);
                }
                color
            })
            .collect();

        if len > 0 {
            let index = rng.gen_range(0..len);
            cells[index] = target;
        }

        Self { size, cells }
    }

    /// Empty grid (shown before the first round starts)
    pub fn empty() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Rgb] {
        &self.cells
    }

    /// Color at tile `index` (row-major)
    pub fn color_at(&self, index: usize) -> Option<Rgb> {
        self.cells.get(index).copied()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.color_at(row * self.size + col)
    }

    /// First tile index holding `color`
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.cells.iter().position(|c| *c == color)
    }

    pub fn count_of(&self, color: Rgb) -> usize {
        self.cells.iter().filter(|c| **c == color).count()
    }

    /// Iterate rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        // chunks(0) panics, so an empty grid yields no rows
        self.cells.chunks(self.size.max(1))
    }
}

impl Default for ColorGrid {
    fn default() -> Self {
        Self::empty()
    }
}
