//! Benchmark suite for gresult/galloc
//!
//! Measures status construction and aligned allocate/free throughput.

use std::time::Instant;

use galloc::{allocate, deallocate, NoopSink};
use gresult::StatusCode;

fn main() {
    println!("=== gresult Benchmarks ===\n");

    bench_status_construct();
    bench_alloc_free(64, 16);
    bench_alloc_free(4096, 4096);

    println!("\n=== Benchmarks Complete ===");
}

fn bench_status_construct() {
    println!("Benchmark: Status construction");
    println!("{}", "─".repeat(40));

    let iterations: u64 = 10_000_000;

    let start = Instant::now();
    let mut failed = 0u64;
    for i in 0..iterations {
        let r = StatusCode::from_flag(i, i % 2 == 0);
        if !r.ok() {
            failed += 1;
        }
    }
    let elapsed = start.elapsed();

    let per_op = elapsed.as_nanos() as f64 / iterations as f64;
    println!("  Iterations:  {} ({} failed)", iterations, failed);
    println!("  Total time:  {:?}", elapsed);
    println!("  Per status:  {:.1} ns", per_op);
    println!("  Rate:        {:.0}/sec\n", iterations as f64 / elapsed.as_secs_f64());
}

fn bench_alloc_free(bytes: usize, alignment: usize) {
    println!("Benchmark: allocate/deallocate ({} B, align {})", bytes, alignment);
    println!("{}", "─".repeat(40));

    let iterations = 1_000_000;

    let start = Instant::now();
    let mut misses = 0u64;
    for _ in 0..iterations {
        let p = allocate(&NoopSink, bytes, alignment);
        if p.is_null() {
            misses += 1;
            continue;
        }
        unsafe { deallocate(&NoopSink, p, bytes, alignment) };
    }
    let elapsed = start.elapsed();

    let per_pair = elapsed.as_nanos() as f64 / iterations as f64;
    println!("  Iterations:  {} ({} misses)", iterations, misses);
    println!("  Total time:  {:?}", elapsed);
    println!("  Per pair:    {:.1} ns", per_pair);
    println!("  Rate:        {:.0}/sec\n", iterations as f64 / elapsed.as_secs_f64());
}
