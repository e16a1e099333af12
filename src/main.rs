extern crate alchemical_reduction;
extern crate failure;

use alchemical_reduction::polymer::Polymer;
use failure::Error;

static INPUT_PATH: &'static str = "./alchemical-reduction.txt";

fn main() -> Result<(), Error> {
    let baseline = Polymer::load(INPUT_PATH)?;

    {
        let mut polymer = baseline.clone();
        println!("final size: {}", polymer.reduce());
    }

    let (best_unit, best_size) = baseline.best_deletion();
    println!(
        "best unit to delete: {} (final size: {})",
        best_unit as char, best_size
    );

    Ok(())
}
