use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_namegen_core::model::generator::Generator;
use rs_namegen_core::model::model_builder::ModelBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Route library debug output through RUST_LOG (e.g. RUST_LOG=debug)
    env_logger::init();

    // Collect the training samples
    // Case does not matter, every sample is folded to lowercase
    let mut builder = ModelBuilder::new();
    builder.add_sample("Lalala")?;
    builder.add_sample("Lala")?;
    builder.add_sample("Papa")?;

    // Samples can also be added in bulk from any string collection
    builder.add_samples(["Mama", "Papali", "Lapapa"])?;

    // Attempting to add an empty sample
    match builder.add_sample("") {
        Ok(_) => println!("Should not happen"),
        Err(error) => println!("Empty samples are rejected: {}", error),
    }

    // Attempting to build without any sample
    match ModelBuilder::new().build() {
        Ok(_) => println!("Should not happen"),
        Err(error) => println!("Building without samples is rejected: {}", error),
    }

    // Build the transition model
    // The builder stays usable and could collect more samples for a later build
    let generator = Generator::new(builder.build()?);
    println!("Model trained with {} states", generator.model().size());

    // Generate 10 names using a seeded random source
    let mut rng = StdRng::seed_from_u64(100);
    for i in 0..10 {
        println!("Generated name {}: {}", i + 1, generator.generate(&mut rng)?);
    }

    // The same seed always draws the same name
    let mut first = StdRng::seed_from_u64(42);
    let mut second = StdRng::seed_from_u64(42);
    println!(
        "Reproducible draw: {} == {}",
        generator.generate(&mut first)?,
        generator.generate(&mut second)?
    );

    Ok(())
}
