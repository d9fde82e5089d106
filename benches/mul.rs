use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use decimal_product::multiply;
use rand_core::{RngCore, SeedableRng};

fn random_operand(rng: &mut rand_chacha::ChaCha8Rng, digits: usize) -> String {
    let mut out = String::with_capacity(digits + 1);
    if rng.next_u32() & 1 == 1 {
        out.push('-');
    }
    out.push(char::from(b'1' + (rng.next_u32() % 9) as u8));
    for _ in 1..digits {
        out.push(char::from(b'0' + (rng.next_u32() % 10) as u8));
    }
    out
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for digits in [10usize, 100, 1000] {
        group.bench_function(format!("{digits} x {digits} digits"), |b| {
            let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
            b.iter_batched(
                || {
                    (
                        random_operand(&mut rng, digits),
                        random_operand(&mut rng, digits),
                    )
                },
                |(x, y)| black_box(multiply(&x, &y)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
