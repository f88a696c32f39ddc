//! Synthetic hafnium oxycarbide structure generation.
//!
//! Hafnium occupies the fixed sites of a layered cubic lattice; oxygen and
//! carbon are assigned at the derived sub-lattice sites by independent random
//! trials against a per-layer carbon probability profile.

pub mod oxycarbide;
