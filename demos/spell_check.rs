//! Basic usage of the spellbloom filter and checker API.

use spellbloom::BloomFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Spellbloom Examples ===\n");

    // Example 1: filter sized for a target accuracy
    println!("1. Accuracy-target filter:");
    let mut filter: BloomFilter = BloomFilter::new(1000, 0.01)?;

    let dictionary = ["apple", "banana", "cherry", "date", "elderberry"];
    for word in dictionary {
        filter.insert(word);
    }

    for word in dictionary {
        println!("  {:?} in filter: {}", word, filter.might_contain(word));
    }
    for word in ["aple", "bananna", "zzz"] {
        println!("  {:?} in filter: {}", word, filter.might_contain(word));
    }
    println!("  {}\n", filter.stats());

    // Example 2: explicit bit budget
    println!("2. Bit-budget filter (3 expected words, 20 bits):");
    let mut tight: BloomFilter = BloomFilter::with_bits(3, 20)?;
    tight.insert("cat");
    tight.insert("dog");

    for word in ["cat", "dog", "zzz"] {
        println!("  {:?} in filter: {}", word, tight.might_contain(word));
    }
    println!("  {}\n", tight.stats());

    // Example 3: query throughput
    println!("3. Query timing:");
    let num_words = 10_000;
    let words = spellbloom::utils::random_words(num_words, 3, 6);

    let mut large: BloomFilter = BloomFilter::new(num_words, 0.01)?;
    let start = std::time::Instant::now();
    for word in &words {
        large.insert(word);
    }
    let insert_time = start.elapsed();

    let start = std::time::Instant::now();
    let found = words.iter().filter(|w| large.might_contain(w)).count();
    let query_time = start.elapsed();

    println!(
        "  Insert: {:?} ({:.2} M ops/sec)",
        insert_time,
        num_words as f64 / insert_time.as_secs_f64() / 1_000_000.0
    );
    println!(
        "  Query:  {:?} ({:.2} M ops/sec)",
        query_time,
        num_words as f64 / query_time.as_secs_f64() / 1_000_000.0
    );
    println!("  Found: {}/{}", found, num_words);

    Ok(())
}
