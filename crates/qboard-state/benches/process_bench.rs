//! Benchmarks for state vector processing
//!
//! Run with: cargo bench -p qboard-state

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qboard_state::{Complex64, DisplayMode, StateVector, bitstring, process};

fn uniform_state(num_qubits: usize) -> StateVector {
    let size = 1usize << num_qubits;
    let amp = 1.0 / (size as f64).sqrt();
    StateVector::new(vec![Complex64::new(amp, 0.0); size]).unwrap()
}

/// Benchmark full dataset generation
fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");

    for num_qubits in &[2, 6, 10, 14] {
        let state = uniform_state(*num_qubits);
        group.bench_with_input(
            BenchmarkId::new("probability", num_qubits),
            &state,
            |b, state| {
                b.iter(|| process(black_box(state), DisplayMode::Probability).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("amplitude", num_qubits),
            &state,
            |b, state| {
                b.iter(|| process(black_box(state), DisplayMode::Amplitude).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark label formatting alone
fn bench_bitstring(c: &mut Criterion) {
    c.bench_function("bitstring_6", |b| {
        b.iter(|| {
            for i in 0..64 {
                black_box(bitstring(black_box(i), 6).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_process, bench_bitstring);
criterion_main!(benches);
