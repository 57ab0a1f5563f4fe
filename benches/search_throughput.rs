//! Search throughput over a randomly generated corpus.
//!
//! Compares the sequential query loop against the parallel batch executors.
//!
//! Usage: cargo bench --bench search_throughput

use memsearch::{process_queries, process_queries_joined, DocumentStatus, SearchIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

const DICTIONARY_SIZE: usize = 2_000;
const DOCUMENT_COUNT: usize = 20_000;
const QUERY_COUNT: usize = 2_000;

fn random_word(rng: &mut StdRng, max_length: usize) -> String {
    let length = rng.gen_range(1..=max_length);
    (0..length).map(|_| rng.gen_range('a'..='z')).collect()
}

fn random_dictionary(rng: &mut StdRng, word_count: usize, max_length: usize) -> Vec<String> {
    let mut words: Vec<String> = (0..word_count).map(|_| random_word(rng, max_length)).collect();
    words.sort();
    words.dedup();
    words
}

fn random_text(rng: &mut StdRng, dictionary: &[String], word_count: usize, minus_prob: f64) -> String {
    let mut text = String::new();
    for _ in 0..word_count {
        if !text.is_empty() {
            text.push(' ');
        }
        if rng.gen_bool(minus_prob) {
            text.push('-');
        }
        text.push_str(&dictionary[rng.gen_range(0..dictionary.len())]);
    }
    text
}

fn qps(count: usize, elapsed: std::time::Duration) -> f64 {
    count as f64 / elapsed.as_secs_f64()
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0);
    let dictionary = random_dictionary(&mut rng, DICTIONARY_SIZE, 25);

    let mut index = SearchIndex::new([dictionary[0].as_str()]).unwrap();
    for i in 0..DOCUMENT_COUNT {
        let text = random_text(&mut rng, &dictionary, 10, 0.0);
        if let Err(e) = index.add_document(i as i32, &text, DocumentStatus::Actual, &[1, 2, 3]) {
            eprintln!("skipping document {i}: {e}");
        }
    }
    println!("indexed {} documents", index.document_count());

    let queries: Vec<String> = (0..QUERY_COUNT)
        .map(|_| random_text(&mut rng, &dictionary, 7, 0.1))
        .collect();

    let start = Instant::now();
    let mut hits = 0usize;
    for query in &queries {
        hits += index.find_top_documents(query).expect("valid query").len();
    }
    let elapsed = start.elapsed();
    println!(
        "sequential loop:      {} queries in {:.2?} ({:.0} QPS, {} hits)",
        queries.len(),
        elapsed,
        qps(queries.len(), elapsed),
        hits
    );

    let start = Instant::now();
    let results = process_queries(&index, &queries).expect("valid queries");
    let elapsed = start.elapsed();
    let parallel_hits: usize = results.iter().map(|r| r.len()).sum();
    println!(
        "process_queries:      {} queries in {:.2?} ({:.0} QPS, {} hits)",
        queries.len(),
        elapsed,
        qps(queries.len(), elapsed),
        parallel_hits
    );

    let start = Instant::now();
    let joined = process_queries_joined(&index, &queries).expect("valid queries");
    let elapsed = start.elapsed();
    println!(
        "process_queries_joined: {} documents in {:.2?} ({:.0} QPS)",
        joined.len(),
        elapsed,
        qps(queries.len(), elapsed)
    );
}
