use chrono::{DateTime, Utc};
use randflake::{Generator, RandflakeError};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

fn main() {
    let secret = *b"fleet-wide-key!!";
    let now = Utc::now().timestamp();
    let lease_start = now;
    let lease_end = now + 5;

    // Issuers and the lease renewer share one generator through a mutex
    let generator = Arc::new(Mutex::new(
        Generator::new(7, lease_start, lease_end, &secret).unwrap(),
    ));

    let renewer = {
        let generator = Arc::clone(&generator);
        thread::spawn(move || {
            for extension in 1..=3 {
                thread::sleep(Duration::from_millis(200));
                let new_end = lease_end + extension * 60;
                let accepted = generator.lock().unwrap().update_lease(lease_start, new_end);
                println!("Renewal to {new_end}: accepted={accepted}");
            }
        })
    };

    let mut handles = vec![];
    for worker in 0..4 {
        let generator = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            for _ in 0..250 {
                let result = generator.lock().unwrap().generate();
                match result {
                    Ok(id) => {
                        assert!(ids.insert(id), "Duplicate ID generated!");
                    }
                    Err(RandflakeError::ResourceExhausted { .. }) => {
                        // Too much load for one node: back off instead of spinning
                        thread::sleep(Duration::from_millis(10));
                    }
                    Err(err) => panic!("worker {worker}: {err}"),
                }
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }
    renewer.join().unwrap();

    let g = generator.lock().unwrap();
    let end = DateTime::<Utc>::from_timestamp(g.lease_end(), 0).unwrap();
    println!("\nTotal unique IDs generated: {}", all_ids.len());
    println!("Lease now ends at {end}");
}
