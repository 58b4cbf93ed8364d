use crate::support::constraint::StrictlyPositive;
use uom::si::{f64::Length, length::meter};

use super::{GridError, Location};

/// A regular rectilinear grid.
///
/// The domain spans `[0, Lx) × [0, Ly)` horizontally, periodic in both
/// directions, and `[-Lz, 0]` vertically with a bounded floor and surface.
/// Cell index `k = 0` is the bottom layer and `k = nz - 1` touches the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectilinearGrid {
    size: [usize; 3],
    extent: [Length; 3],
}

impl RectilinearGrid {
    /// Creates a grid with `size` cells spanning `extent`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if any dimension has no cells or any extent
    /// is not strictly positive.
    pub fn new(size: [usize; 3], extent: [Length; 3]) -> Result<Self, GridError> {
        for (axis, (&n, &length)) in ['x', 'y', 'z'].into_iter().zip(size.iter().zip(&extent)) {
            if n == 0 {
                return Err(GridError::EmptyDimension { axis });
            }
            StrictlyPositive::new(length).map_err(|source| GridError::Extent { axis, source })?;
        }
        Ok(Self { size, extent })
    }

    /// Creates a single water column of `nz` layers over `depth`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `nz` is zero or `depth` is not strictly positive.
    pub fn column(nz: usize, depth: Length) -> Result<Self, GridError> {
        let unit = Length::new::<meter>(1.0);
        Self::new([1, 1, nz], [unit, unit, depth])
    }

    /// Returns the number of cells along each axis.
    #[must_use]
    pub fn size(&self) -> [usize; 3] {
        self.size
    }

    /// Returns the domain extent along each axis.
    #[must_use]
    pub fn extent(&self) -> [Length; 3] {
        self.extent
    }

    /// Returns the uniform cell spacing along each axis.
    #[must_use]
    pub fn spacing(&self) -> [Length; 3] {
        let [nx, ny, nz] = self.size;
        let [lx, ly, lz] = self.extent;
        [lx / nx as f64, ly / ny as f64, lz / nz as f64]
    }

    /// Returns the vertical position of the domain floor.
    #[must_use]
    pub fn bottom(&self) -> Length {
        -self.extent[2]
    }

    /// Returns the x coordinate of cell centre `i`.
    #[must_use]
    pub fn xnode(&self, i: usize) -> Length {
        self.spacing()[0] * (i as f64 + 0.5)
    }

    /// Returns the y coordinate of cell centre `j`.
    #[must_use]
    pub fn ynode(&self, j: usize) -> Length {
        self.spacing()[1] * (j as f64 + 0.5)
    }

    /// Returns the z coordinate of index `k` at the given location.
    ///
    /// Z-face indices run from the floor (`k = 0`) to the surface (`k = nz`);
    /// every other location uses the cell centre.
    #[must_use]
    pub fn znode(&self, k: usize, location: Location) -> Length {
        let dz = self.spacing()[2];
        let offset = match location {
            Location::ZFace => 0.0,
            Location::Center | Location::XFace | Location::YFace => 0.5,
        };
        self.bottom() + dz * (k as f64 + offset)
    }

    /// Returns the storage shape of a field at `location`.
    #[must_use]
    pub fn field_size(&self, location: Location) -> [usize; 3] {
        let [nx, ny, nz] = self.size;
        match location {
            Location::ZFace => [nx, ny, nz + 1],
            Location::Center | Location::XFace | Location::YFace => [nx, ny, nz],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn grid() -> RectilinearGrid {
        RectilinearGrid::new(
            [2, 4, 10],
            [
                Length::new::<meter>(20.0),
                Length::new::<meter>(40.0),
                Length::new::<meter>(100.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn nodes_and_spacing() {
        let grid = grid();

        assert_relative_eq!(grid.spacing()[2].get::<meter>(), 10.0);
        assert_relative_eq!(grid.xnode(1).get::<meter>(), 15.0);
        assert_relative_eq!(grid.ynode(0).get::<meter>(), 5.0);
        assert_relative_eq!(grid.bottom().get::<meter>(), -100.0);
        assert_relative_eq!(grid.znode(0, Location::Center).get::<meter>(), -95.0);
        assert_relative_eq!(grid.znode(0, Location::ZFace).get::<meter>(), -100.0);
        assert_relative_eq!(grid.znode(10, Location::ZFace).get::<meter>(), 0.0);
    }

    #[test]
    fn face_fields_have_an_extra_level() {
        let grid = grid();
        assert_eq!(grid.field_size(Location::Center), [2, 4, 10]);
        assert_eq!(grid.field_size(Location::ZFace), [2, 4, 11]);
    }

    #[test]
    fn rejects_degenerate_grids() {
        let one = Length::new::<meter>(1.0);
        assert_eq!(
            RectilinearGrid::new([1, 0, 1], [one; 3]),
            Err(GridError::EmptyDimension { axis: 'y' })
        );
        assert!(matches!(
            RectilinearGrid::column(4, Length::new::<meter>(-5.0)),
            Err(GridError::Extent { axis: 'z', .. })
        ));
    }
}
