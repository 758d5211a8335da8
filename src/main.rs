use trailsim::{run, Scenario, VariantConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Variant file under scenarios/, e.g. "three_body.yaml".
    /// Omit to run the built-in three-body variant
    #[arg(short)]
    file_name: Option<String>,
}

// load here to keep main clean
fn load_variant_from_yaml(file_name: &str) -> Result<VariantConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let variant_cfg: VariantConfig = serde_yaml::from_reader(reader)?;

    Ok(variant_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let variant_cfg = match args.file_name {
        Some(name) => load_variant_from_yaml(&name)?,
        None => VariantConfig::default(),
    };

    run(Scenario::build(variant_cfg));

    Ok(())
}
