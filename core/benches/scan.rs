use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use minecount_core::{CellInput, Grid, scan};

/// Deterministic layout with roughly one mine in seven cells.
fn fixture(size: usize) -> Grid<CellInput> {
    Grid::from_fn((size, size), |(row, col)| {
        if (row * 31 + col * 17) % 7 == 0 {
            CellInput::Mine
        } else {
            CellInput::Empty
        }
    })
}

// Case IDs are the board side length, keep them stable so results stay comparable.
fn benches_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("core.scan");

    for size in [8usize, 64, 512] {
        let grid = fixture(size);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_function(size.to_string(), |b| b.iter(|| scan(black_box(&grid))));
    }

    group.finish();
}

criterion_group!(benches, benches_scan);
criterion_main!(benches);
