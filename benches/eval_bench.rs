use criterion::{criterion_group, criterion_main, Criterion, black_box};
use minimax_engine::{ChessPosition, ClassicEval, Evaluator};

fn bench_eval(c: &mut Criterion) {
    let pos = ChessPosition::startpos();
    let eval = ClassicEval::default();
    c.bench_function("classic_eval_startpos", |ben| {
        ben.iter(|| {
            let v = eval.evaluate(black_box(&pos));
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
