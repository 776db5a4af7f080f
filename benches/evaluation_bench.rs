use criterion::{Criterion, criterion_group, criterion_main};
use zugzwang::board::ZobristTable;
use zugzwang::evaluation::evaluate;
use zugzwang::position::Position;

fn bench_evaluation(c: &mut Criterion) {
    zugzwang::board::init();
    let zt = ZobristTable::new(1);
    let positions = vec![
        ("startpos", Position::new(&zt)),
        (
            "middlegame",
            Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4", &zt).unwrap(),
        ),
        ("endgame", Position::from_fen("8/5k2/8/8/8/8/4K3/4R3 w - - 0 1", &zt).unwrap()),
        (
            "complex",
            Position::from_fen("r1bq1rk1/pp2ppbp/2np2p1/2n5/P3PP2/N1P2N2/1PB3PP/R1B1QRK1 b - - 0 10", &zt).unwrap(),
        ),
    ];
    for (name, position) in &positions {
        c.bench_function(&format!("eval_{}", name), |b| b.iter(|| evaluate(position, &zt)));
    }
}

criterion_group!(benches, bench_evaluation);
criterion_main!(benches);
