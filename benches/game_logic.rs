use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::core::{build_deck, shuffled_deck, GameSnapshot, Session, SessionAction, SimpleRng};
use memory_match::engine::GameEngine;
use memory_match::term::{GameView, ViewState, Viewport};
use memory_match::types::{Level, SYMBOLS};

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("shuffled_deck", |b| {
        b.iter(|| shuffled_deck(black_box(&SYMBOLS), &mut rng))
    });
}

fn bench_click_pair(c: &mut Criterion) {
    let session = Session::new(Level::Easy, build_deck(&SYMBOLS));

    c.bench_function("reduce_click_pair", |b| {
        b.iter(|| {
            let step = session.reduce(SessionAction::Click(black_box(0)));
            step.session.reduce(SessionAction::Click(black_box(1)))
        })
    });
}

fn bench_advance(c: &mut Criterion) {
    c.bench_function("advance_full_round", |b| {
        b.iter(|| {
            let mut engine = GameEngine::seeded(Level::Hard, 7);
            let first = engine.session().cards()[0].id;
            engine.click(first);
            engine.advance(black_box(45_000))
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = GameEngine::seeded(Level::Easy, 1);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            black_box(snap.fingerprint())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = GameEngine::seeded(Level::Easy, 1).snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, ViewState::default(), Viewport::new(80, 30));

    c.bench_function("render_80x30", |b| {
        b.iter(|| view.render_into(&snap, ViewState::default(), Viewport::new(80, 30), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_shuffle,
    bench_click_pair,
    bench_advance,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
