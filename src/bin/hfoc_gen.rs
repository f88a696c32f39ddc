//! Command-line front end for the hafnium oxycarbide generator.
//!
//! Supplies grid dimensions and an optional layer profile to the generator
//! and writes the resulting structure file; can also dump profile samples
//! for plotting.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{Level, LevelFilter, Metadata, Record};
use rand::SeedableRng;
use rand::rngs::StdRng;

use hfoc_lattice::oxycarbide::io::save_structure;
use hfoc_lattice::oxycarbide::{
    GridDimensions, LatticeGenResult, LayerProfile, LayerProfileParams, generate_lattice,
    uniform_profile,
};

#[derive(Parser)]
#[command(name = "hfoc-gen")]
#[command(about = "Generate randomized hafnium oxycarbide structure files")]
struct Cli {
    /// Unit cell counts along x, y and z
    #[arg(long, num_args = 3, value_names = ["NX", "NY", "NZ"], allow_negative_numbers = true, required = true)]
    dims: Vec<i64>,

    /// Interior carbon fraction; omitted means a uniform 50/50 profile on every layer
    #[arg(long)]
    target_fraction: Option<f64>,

    /// JSON file with full layer profile parameters (overrides --target-fraction)
    #[arg(long)]
    profile_params: Option<PathBuf>,

    /// Seed for the random source; drawn from entropy when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Output structure file
    #[arg(short, long, default_value = "hfoc.xyz")]
    output: String,

    /// Also write layer,fraction samples of the profile to this CSV path
    #[arg(long)]
    profile_dump: Option<PathBuf>,
}

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn build_profile(cli: &Cli, dims: &GridDimensions) -> Result<Option<LayerProfile>> {
    let params = if let Some(path) = &cli.profile_params {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let params: LayerProfileParams =
            serde_json::from_str(&text).context("Failed to parse profile parameters")?;
        if params.max_layers != dims.sub_layer_count() {
            log::warn!(
                "profile covers {} layers but the grid has {}",
                params.max_layers,
                dims.sub_layer_count()
            );
        }
        params
    } else if let Some(target_fraction) = cli.target_fraction {
        LayerProfileParams::new(dims.sub_layer_count(), target_fraction)
    } else {
        return Ok(None);
    };

    let validated = LayerProfile::new(&params);
    if validated.has_errors() {
        bail!("invalid profile configuration: {:?}", validated.diagnostics);
    }
    Ok(Some(validated.value))
}

fn dump_profile_samples(
    path: &PathBuf,
    profile: Option<&LayerProfile>,
    dims: &GridDimensions,
) -> Result<()> {
    let samples: Vec<(u32, f64)> = match profile {
        Some(profile) => profile.sample(),
        None => (0..dims.sub_layer_count())
            .map(|z| (z, uniform_profile(z as i64)))
            .collect(),
    };

    let mut text = String::from("layer,fraction\n");
    for (layer, fraction) in samples {
        text.push_str(&format!("{},{}\n", layer, fraction));
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Info));
    let cli = Cli::parse();

    let dims = GridDimensions::from_slice(&cli.dims)?.value;
    let profile = build_profile(&cli, &dims)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result: LatticeGenResult = match &profile {
        Some(profile) => generate_lattice(&dims, |z| profile.fraction_at(z), &mut rng),
        None => generate_lattice(&dims, uniform_profile, &mut rng),
    };

    save_structure(&result.atoms, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output))?;
    log::info!("wrote {} atoms to {}", result.atoms.total_atoms(), cli.output);

    if let Some(path) = &cli.profile_dump {
        dump_profile_samples(path, profile.as_ref(), &dims)?;
        log::info!("wrote profile samples to {}", path.display());
    }

    Ok(())
}
