use crate::types::CastError;

/// Boolean occupancy table over integer cell coordinates.
///
/// Cell `(x, y)` covers `[x, x+1) x [y, y+1)` in the continuous frame the
/// raycast queries operate in. The grid is owned and populated by the caller;
/// the queries only read it, so sharing `&OccupancyGrid` across threads is
/// fine as long as nobody mutates it concurrently.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl OccupancyGrid {
    /// Build a grid from row-major occupancy data (`true` = solid).
    pub fn new(width: u32, height: u32, data: Vec<bool>) -> Result<Self, CastError> {
        let expected_len = (width as usize) * (height as usize);
        if data.len() != expected_len {
            return Err(CastError::InvalidMetadata(format!(
                "data length {} does not match grid size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid with every cell open.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![false; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the cell occupancy with bounds checking.
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Set the cell occupancy with bounds checking.
    pub fn set(&mut self, x: u32, y: u32, solid: bool) -> Result<(), CastError> {
        if x >= self.width || y >= self.height {
            return Err(CastError::OutOfBounds(format!(
                "cell ({}, {}) out of bounds for grid {}x{}",
                x, y, self.width, self.height
            )));
        }
        let idx = self.index(x, y);
        self.data[idx] = solid;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
