use chrono::{DateTime, Utc};
use randflake::Generator;

fn main() -> Result<(), randflake::RandflakeError> {
    // In production the secret comes from a shared secret store
    let secret = *b"super-secret-key";

    // Lease for node 42, granted by the coordinator for the next hour
    let now = Utc::now().timestamp();
    let mut generator = Generator::new(42, now, now + 3600, &secret)?;

    println!("Generated IDs (opaque to anyone without the secret):");
    for _ in 0..3 {
        let id = generator.generate()?;
        print_id(id, &generator)?;
    }

    let encoded = generator.generate_string()?;
    let (timestamp, node, sequence) = generator.inspect_string(&encoded)?;
    println!("\nString form: {encoded}");
    println!("  Timestamp: {timestamp}");
    println!("  Node ID: {node}");
    println!("  Sequence: {sequence}");

    Ok(())
}

fn print_id(id: i64, generator: &Generator) -> Result<(), randflake::RandflakeError> {
    let (timestamp, node, sequence) = generator.inspect(id)?;
    let human = DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|dt| dt.to_string())
        .unwrap_or_else(|| "out of range".to_string());

    println!("  ID: {id}, Timestamp: {timestamp}, Human date: {human}, Node ID: {node}, Sequence: {sequence}");
    Ok(())
}
