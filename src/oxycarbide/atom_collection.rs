use glam::f64::DVec3;
use serde::{Deserialize, Serialize};

/// Number of atoms of each species, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCounts {
    pub hafnium: usize,
    pub oxygen: usize,
    pub carbon: usize,
}

impl SpeciesCounts {
    pub fn total(&self) -> usize {
        self.hafnium + self.oxygen + self.carbon
    }
}

/// Generated atom coordinates, one ordered list per species.
///
/// Output order is hafnium, then oxygen, then carbon; within a species, atoms
/// keep the order in which the lattice walk emitted them.
#[derive(Debug, Clone, Default)]
pub struct AtomCollection {
    pub hafnium: Vec<DVec3>,
    pub oxygen: Vec<DVec3>,
    pub carbon: Vec<DVec3>,
}

impl AtomCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocates for the given unit-cell count: each cell carries 4
    /// hafnium sites and 4 variable sites, so 4 per cell bounds every list.
    pub fn with_cell_capacity(cells: usize) -> Self {
        AtomCollection {
            hafnium: Vec::with_capacity(4 * cells),
            oxygen: Vec::with_capacity(4 * cells),
            carbon: Vec::with_capacity(4 * cells),
        }
    }

    pub fn counts(&self) -> SpeciesCounts {
        SpeciesCounts {
            hafnium: self.hafnium.len(),
            oxygen: self.oxygen.len(),
            carbon: self.carbon.len(),
        }
    }

    pub fn total_atoms(&self) -> usize {
        self.hafnium.len() + self.oxygen.len() + self.carbon.len()
    }

    /// Scales every coordinate by the given factor, in place.
    pub fn scale(&mut self, factor: f64) {
        for position in self
            .hafnium
            .iter_mut()
            .chain(self.oxygen.iter_mut())
            .chain(self.carbon.iter_mut())
        {
            *position *= factor;
        }
    }

    /// All coordinates concatenated in species output order.
    pub fn concatenated(&self) -> Vec<DVec3> {
        let mut all = Vec::with_capacity(self.total_atoms());
        all.extend_from_slice(&self.hafnium);
        all.extend_from_slice(&self.oxygen);
        all.extend_from_slice(&self.carbon);
        all
    }
}
