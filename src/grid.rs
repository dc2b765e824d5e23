use std::ops::{Index, IndexMut};

use crate::square::Square;

/// Plain 8×8 storage. Indexing requires an in-bounds square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid<T>(pub [[T; 8]; 8]);

impl<T> Grid<T> {
    pub fn rows(&self) -> impl Iterator<Item = &[T; 8]> {
        self.0.iter()
    }
    pub fn positioned_values(&self) -> impl Iterator<Item = (Square, &T)> {
        Square::all().map(|square| (square, &self[square]))
    }
    pub fn swap(&mut self, a: Square, b: Square)
    where
        T: Copy,
    {
        let value = self[a];
        self[a] = self[b];
        self[b] = value;
    }
}
impl<T> Index<Square> for Grid<T> {
    type Output = T;

    fn index(&self, index: Square) -> &Self::Output {
        let (row, col) = index.index();
        &self.0[row][col]
    }
}
impl<T> IndexMut<Square> for Grid<T> {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        let (row, col) = index.index();
        &mut self.0[row][col]
    }
}
