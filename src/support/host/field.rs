use uom::si::f64::Length;

use super::{RectilinearGrid, StateError};

/// Where a field's values live on a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Cell centres, where tracers live.
    Center,
    /// Faces normal to x, where `u` lives.
    XFace,
    /// Faces normal to y, where `v` lives.
    YFace,
    /// Faces normal to z, where `w` lives.
    ZFace,
}

/// A scalar field stored on a [`RectilinearGrid`].
///
/// Values are stored x-fastest, then y, then z.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    location: Location,
    size: [usize; 3],
    data: Vec<f64>,
}

impl Field {
    /// Creates a zero-filled field sized for `grid` at `location`.
    #[must_use]
    pub fn zeros(grid: &RectilinearGrid, location: Location) -> Self {
        Self::constant(grid, location, 0.0)
    }

    /// Creates a field holding `value` everywhere.
    #[must_use]
    pub fn constant(grid: &RectilinearGrid, location: Location, value: f64) -> Self {
        let size = grid.field_size(location);
        Self {
            location,
            size,
            data: vec![value; size.iter().product()],
        }
    }

    /// Creates a field by evaluating `f(x, y, z)` at every node.
    #[must_use]
    pub fn from_fn(
        grid: &RectilinearGrid,
        location: Location,
        f: impl Fn(Length, Length, Length) -> f64,
    ) -> Self {
        let mut field = Self::zeros(grid, location);
        let [nx, ny, nz] = field.size;
        for k in 0..nz {
            let z = grid.znode(k, location);
            for j in 0..ny {
                let y = grid.ynode(j);
                for i in 0..nx {
                    let index = field.index(i, j, k);
                    field.data[index] = f(grid.xnode(i), y, z);
                }
            }
        }
        field
    }

    /// Returns the location of this field's values.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Returns the storage shape.
    #[must_use]
    pub fn size(&self) -> [usize; 3] {
        self.size
    }

    /// Returns the raw values.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the value at `(i, j, k)`, or `None` outside the field.
    #[must_use]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        self.contains(i, j, k).then(|| self.data[self.index(i, j, k)])
    }

    /// Overwrites the value at `(i, j, k)`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OutOfBounds`] if the index lies outside the field.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: f64) -> Result<(), StateError> {
        if !self.contains(i, j, k) {
            return Err(StateError::OutOfBounds { i, j, k });
        }
        let index = self.index(i, j, k);
        self.data[index] = value;
        Ok(())
    }

    /// Checks that this field matches the shape `grid` implies for `location`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Shape`] naming the field on mismatch.
    pub fn check_shape(
        &self,
        name: &str,
        grid: &RectilinearGrid,
        location: Location,
    ) -> Result<(), StateError> {
        let expected = grid.field_size(location);
        if self.location != location || self.size != expected {
            return Err(StateError::Shape {
                name: name.to_owned(),
                location: self.location,
                expected,
                found: self.size,
            });
        }
        Ok(())
    }

    fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        let [nx, ny, nz] = self.size;
        i < nx && j < ny && k < nz
    }

    fn index(&self, i: usize, j: usize, k: usize) -> usize {
        let [nx, ny, _] = self.size;
        i + nx * (j + ny * k)
    }
}

/// Velocity components a host adds to a tracer's transport, in m/s.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityFields {
    /// Zonal component on x faces.
    pub u: Field,
    /// Meridional component on y faces.
    pub v: Field,
    /// Vertical component on z faces, negative downward.
    pub w: Field,
}

impl VelocityFields {
    /// Checks each component against the shape `grid` implies.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Shape`] for the first mismatched component.
    pub fn check_shape(&self, grid: &RectilinearGrid) -> Result<(), StateError> {
        self.u.check_shape("u", grid, Location::XFace)?;
        self.v.check_shape("v", grid, Location::YFace)?;
        self.w.check_shape("w", grid, Location::ZFace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::length::meter;

    #[test]
    fn from_fn_evaluates_at_nodes() {
        let grid = RectilinearGrid::column(4, Length::new::<meter>(40.0)).unwrap();
        let field = Field::from_fn(&grid, Location::ZFace, |_, _, z| z.get::<meter>());

        assert_eq!(field.size(), [1, 1, 5]);
        assert_eq!(field.get(0, 0, 0), Some(-40.0));
        assert_eq!(field.get(0, 0, 4), Some(0.0));
        assert_eq!(field.get(0, 0, 5), None);
    }

    #[test]
    fn set_rejects_out_of_bounds() {
        let grid = RectilinearGrid::column(2, Length::new::<meter>(10.0)).unwrap();
        let mut field = Field::zeros(&grid, Location::Center);

        field.set(0, 0, 1, 3.0).unwrap();
        assert_eq!(field.get(0, 0, 1), Some(3.0));
        assert_eq!(
            field.set(1, 0, 0, 1.0),
            Err(StateError::OutOfBounds { i: 1, j: 0, k: 0 })
        );
    }

    #[test]
    fn shape_check_names_the_field() {
        let grid = RectilinearGrid::column(2, Length::new::<meter>(10.0)).unwrap();
        let field = Field::zeros(&grid, Location::Center);

        assert!(field.check_shape("P", &grid, Location::Center).is_ok());
        assert!(matches!(
            field.check_shape("w", &grid, Location::ZFace),
            Err(StateError::Shape { name, .. }) if name == "w"
        ));
    }
}
