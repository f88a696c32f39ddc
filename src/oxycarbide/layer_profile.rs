use serde::{Deserialize, Serialize};

use crate::oxycarbide::diagnostics::{Diagnostic, Validated};

fn default_boundary_fractions() -> [f64; 2] {
  [1.0, 0.0]
}

fn default_boundary_widths() -> [u32; 2] {
  [1, 1]
}

/// Parameters describing the vertical carbon-fraction profile of the material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerProfileParams {
  /// Total number of vertical sub-layers, twice the hafnium cell count per column.
  pub max_layers: u32,
  /// Expected carbon fraction in the interior layers.
  pub target_fraction: f64,
  /// Forced carbon fraction at the bottom and top faces.
  #[serde(default = "default_boundary_fractions")]
  pub boundary_fractions: [f64; 2],
  /// Number of layers held at each boundary fraction.
  #[serde(default = "default_boundary_widths")]
  pub boundary_widths: [u32; 2],
  /// Number of layers over which each face ramps linearly to the target
  /// fraction. When absent, widths are derived so the two layers nearest the
  /// geometric center sit exactly at the target fraction.
  #[serde(default)]
  pub transition_widths: Option<[u32; 2]>,
}

impl LayerProfileParams {
  pub fn new(max_layers: u32, target_fraction: f64) -> Self {
    LayerProfileParams {
      max_layers,
      target_fraction,
      boundary_fractions: default_boundary_fractions(),
      boundary_widths: default_boundary_widths(),
      transition_widths: None,
    }
  }
}

/// Piecewise-linear carbon probability as a function of the vertical layer
/// index: flat at each boundary fraction, ramping linearly toward the target
/// fraction, flat at the target fraction in the interior.
///
/// The mean fraction over all layers generally differs from the target
/// fraction because of the boundary plateaus.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerProfile {
  max_layers: i64,
  target_fraction: f64,
  boundary_fractions: [f64; 2],
  boundary_widths: [i64; 2],
  transition_widths: [i64; 2],
}

impl LayerProfile {
  /// Builds a profile from the given parameters.
  ///
  /// Derived transition widths are computed fresh on every call; caller
  /// parameters are never written back. When transition widths are supplied
  /// explicitly, the combined boundary and transition layer count must not
  /// exceed `max_layers`; a violation is reported as an error-severity
  /// diagnostic on the returned value, and the profile still evaluates with
  /// the supplied numbers.
  ///
  /// # Arguments
  /// * `params` - Profile parameters; see `LayerProfileParams`
  ///
  /// # Returns
  /// * `Validated<LayerProfile>` carrying the profile and any diagnostics
  pub fn new(params: &LayerProfileParams) -> Validated<LayerProfile> {
    let max_layers = params.max_layers as i64;
    let boundary_widths = [
      params.boundary_widths[0] as i64,
      params.boundary_widths[1] as i64,
    ];
    let mut diagnostics = Vec::new();

    let transition_widths = match params.transition_widths {
      Some(widths) => {
        let widths = [widths[0] as i64, widths[1] as i64];
        let boundary_layers = boundary_widths[0] + boundary_widths[1];
        let transition_layers = widths[0] + widths[1];
        if boundary_layers + transition_layers > max_layers {
          let diagnostic = Diagnostic::LayerBudgetExceeded {
            boundary_layers,
            transition_layers,
            max_layers,
          };
          diagnostic.report();
          diagnostics.push(diagnostic);
        }
        widths
      }
      None => {
        // Ramp each face toward the two layers nearest the geometric center,
        // which then return exactly the target fraction. A boundary wider
        // than the half-height leaves a non-positive width, disabling that ramp.
        let center = max_layers / 2 - 1;
        [center - boundary_widths[1], center - boundary_widths[0]]
      }
    };

    let profile = LayerProfile {
      max_layers,
      target_fraction: params.target_fraction,
      boundary_fractions: params.boundary_fractions,
      boundary_widths,
      transition_widths,
    };
    Validated::with_diagnostics(profile, diagnostics)
  }

  /// Expected carbon fraction at the 0-indexed layer `z`, counted from the
  /// bottom of the material.
  ///
  /// Querying a layer at or above `max_layers` reports a warning (the profile
  /// assumes fewer total layers than requested) and still returns the top
  /// plateau value.
  pub fn fraction_at(&self, z: i64) -> f64 {
    let [bottom_fraction, top_fraction] = self.boundary_fractions;
    let [bottom_width, top_width] = self.boundary_widths;
    let [bottom_ramp, top_ramp] = self.transition_widths;
    let target = self.target_fraction;

    if z < bottom_width {
      return bottom_fraction;
    }
    if z < bottom_width + bottom_ramp {
      return bottom_fraction
        - (bottom_fraction - target) / bottom_ramp as f64 * (z + 1 - bottom_width) as f64;
    }
    let layers_from_top = self.max_layers - z;
    if layers_from_top <= top_width {
      if layers_from_top < 1 {
        Diagnostic::LayerAboveMaterial {
          layer: z,
          max_layers: self.max_layers,
        }
        .report();
      }
      return top_fraction;
    }
    if layers_from_top <= top_width + top_ramp {
      return top_fraction
        + (target - top_fraction) / top_ramp as f64 * (layers_from_top - top_width) as f64;
    }
    target
  }

  pub fn max_layers(&self) -> u32 {
    self.max_layers as u32
  }

  /// Samples `(layer, fraction)` pairs across the whole material, for visual
  /// inspection of the profile shape.
  pub fn sample(&self) -> Vec<(u32, f64)> {
    (0..self.max_layers)
      .map(|z| (z as u32, self.fraction_at(z)))
      .collect()
  }
}
