pub const HFOC_LATTICE_CONSTANT_ANGSTROM: f64 = 2.305;  // Spacing between neighboring sub-lattice sites in Ångströms

pub const HAFNIUM_SYMBOL: &str = "Hf";
pub const OXYGEN_SYMBOL: &str = "O";
pub const CARBON_SYMBOL: &str = "C";

// Hafnium site offsets within a unit cell, in sub-lattice index units.
// The two z-sub-layers each carry two hafnium atoms on alternating corners.
pub const HAFNIUM_SITE_OFFSETS: [[i64; 3]; 4] = [
  [0, 0, 0],
  [1, 1, 0],
  [1, 0, 1],
  [0, 1, 1],
];
