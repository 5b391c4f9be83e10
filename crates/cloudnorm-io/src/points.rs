//! Point storage
//!
//! A [`PointSet`] keeps the loaded points alongside per-axis coordinate
//! columns. The columns are a scratch copy: taking them out leaves the
//! points untouched, and a later take rebuilds them from the points.

use nalgebra::Point3;

/// A single 3D coordinate triple
pub type Point = Point3<f64>;

/// Per-axis coordinate sequences, one entry per loaded point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisColumns {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl AxisColumns {
    /// Create empty columns with room for `n` values each
    pub fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
        }
    }

    /// Copy the coordinates of `points` into fresh columns
    pub fn from_points(points: &[Point]) -> Self {
        let mut columns = Self::with_capacity(points.len());
        for p in points {
            columns.x.push(p.x);
            columns.y.push(p.y);
            columns.z.push(p.z);
        }
        columns
    }

    /// Number of values per column
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Consume into `[x, y, z]`
    pub fn into_array(self) -> [Vec<f64>; 3] {
        [self.x, self.y, self.z]
    }
}

/// Loaded points plus their axis columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
    columns: AxisColumns,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            points: Vec::with_capacity(n),
            columns: AxisColumns::with_capacity(n),
        }
    }

    /// Append a point to both views
    pub fn push(&mut self, x: f64, y: f64, z: f64) {
        self.points.push(Point::new(x, y, z));
        self.columns.x.push(x);
        self.columns.y.push(y);
        self.columns.z.push(z);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in load order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn columns(&self) -> &AxisColumns {
        &self.columns
    }

    /// Move the axis columns out, leaving empty columns behind.
    ///
    /// Points are not affected. If the columns were already taken they are
    /// rebuilt from the points, so every call yields one value per point.
    pub fn take_columns(&mut self) -> AxisColumns {
        if self.columns.len() != self.points.len() {
            return AxisColumns::from_points(&self.points);
        }
        std::mem::take(&mut self.columns)
    }

    /// Split into points and columns
    pub fn into_parts(self) -> (Vec<Point>, AxisColumns) {
        (self.points, self.columns)
    }
}

impl FromIterator<[f64; 3]> for PointSet {
    fn from_iter<I: IntoIterator<Item = [f64; 3]>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = PointSet::with_capacity(iter.size_hint().0);
        for [x, y, z] in iter {
            set.push(x, y, z);
        }
        set
    }
}
