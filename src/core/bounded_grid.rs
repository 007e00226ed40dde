use crate::core::Vec2;
use crate::core::bounds::BoundsOriginRoot;

/// A fixed-size, row-major grid. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Flattens already width-checked rows into a grid.
    ///
    /// Returns `None` when the rows are not all `width` long.
    pub fn from_rows(width: usize, rows: Vec<Vec<T>>) -> Option<Self> {
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let bounds = BoundsOriginRoot::new(width as i32, rows.len() as i32);
        let cells: Vec<T> = rows.into_iter().flatten().collect();
        Some(BoundedGrid { bounds, cells })
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> {
        self.bounds.positions().zip(self.cells.iter())
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}
