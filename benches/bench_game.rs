use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_referee::{Game, Placement};

const WORDS: &[&str] = &["know", "no", "not", "ow", "snow", "sn"];

fn tiles(specs: &[(char, usize, usize)]) -> Vec<Placement> {
    specs.iter().copied().map(Placement::from).collect()
}

fn bench_play_tiles(c: &mut Criterion, name: &str, specs: &[(char, usize, usize)]) {
    let mut game = Game::new().with_wordlist_from_words(WORDS);
    game.play_tiles(&tiles(&[('k', 7, 6), ('n', 7, 7), ('o', 7, 8), ('w', 7, 9)]))
        .unwrap();
    let placements = tiles(specs);
    c.bench_function(&format!("game.play_tiles.{}", name), |b| {
        b.iter(|| {
            let mut game = game.clone();
            game.play_tiles(&placements).unwrap()
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_play_tiles(c, "cross_words", &[('n', 6, 8), ('o', 6, 9), ('t', 6, 10)]);
    bench_play_tiles(c, "rejected", &[('x', 3, 3)]);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_main!(benches);
