use rs_names_core::model::generator::Generator;
use rs_names_core::model::seed::SeedOutcome;
use rs_names_core::store::{NameStore, StoreConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A fixed seed gives the same names on every run
    let mut generator = Generator::seeded(2024);

    // No length and no first letter: the length is drawn between 3 and 8,
    // favouring 4 to 6 letters
    for i in 0..5 {
        println!("Random name {}: {}", i + 1, generator.generate(None, None));
    }

    // A first letter may be any single consonant, vowel or consonant blend
    for first_letter in ["t", "Bl", "o"] {
        println!("Starting with '{}': {}", first_letter, generator.generate(Some(6), Some(first_letter)));
    }

    // Unknown first letters are replaced by a random unit
    match generator.resolve_seed(Some("@")) {
        SeedOutcome::Fallback { rejected, unit } => println!("'{}' is not a valid start, using '{}'", rejected, unit),
        other => println!("Should not happen: {:?}", other),
    }
    println!("Starting with '@': {}", generator.generate(Some(5), Some("@")));

    // A blend seed longer than the requested length is kept whole
    println!("Length 1 starting with 'st': {}", generator.generate(Some(1), Some("st")));

    // Store a few names and read them back
    let path = std::env::temp_dir().join("rs-names-exemple.db");
    let _ = std::fs::remove_file(&path);
    let store = NameStore::open(StoreConfig::new(&path))?;
    for _ in 0..10 {
        store.insert(&generator.generate(None, None))?;
    }
    println!("Stored names: {}", store.count()?);

    if let Some(record) = store.get_by_index(1)? {
        println!("First stored name: {} (id {}, created at {})", record.name, record.id, record.created_at);
    }

    let mut rng = rand::rng();
    match store.get_random(&mut rng)? {
        Some(record) => println!("Random stored name: {}", record.name),
        None => println!("Should not happen"),
    }

    let letter = "k";
    match store.get_by_first_letter(letter, &mut rng)? {
        Some(record) => println!("Stored name starting with '{}': {}", letter, record.name),
        None => println!("No stored name starts with '{}'", letter),
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
