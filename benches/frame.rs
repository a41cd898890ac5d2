use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_bounce::core::{FpsEstimator, RenderState};
use term_bounce::term::{encode_frame_into, FrameView, ScreenBuffer};
use term_bounce::types::{HEIGHT, WIDTH};

fn bench_fps_update(c: &mut Criterion) {
    let mut fps = FpsEstimator::new();
    let mut now = 60_000_000_000u64;

    c.bench_function("fps_update_1ms", |b| {
        b.iter(|| {
            now += 1_000_000;
            fps.update(black_box(now));
        })
    });
}

fn bench_render_into(c: &mut Criterion) {
    let state = RenderState::new(WIDTH, HEIGHT, 0);
    let mut view = FrameView::new();
    let mut fb = ScreenBuffer::new(WIDTH, HEIGHT);

    c.bench_function("render_into_40x20", |b| {
        b.iter(|| {
            view.render_into(black_box(&state), &mut fb).unwrap();
        })
    });
}

fn bench_render_fresh(c: &mut Criterion) {
    let state = RenderState::new(WIDTH, HEIGHT, 0);
    let mut view = FrameView::new();

    c.bench_function("render_fresh_40x20", |b| {
        b.iter(|| view.render(black_box(&state), WIDTH, HEIGHT).unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let state = RenderState::new(WIDTH, HEIGHT, 0);
    let fb = FrameView::new().render(&state, WIDTH, HEIGHT).unwrap();
    let mut out = Vec::with_capacity(4 * 1024);

    c.bench_function("encode_frame_40x20", |b| {
        b.iter(|| {
            out.clear();
            encode_frame_into(black_box(&fb), &mut out);
        })
    });
}

criterion_group!(
    benches,
    bench_fps_update,
    bench_render_into,
    bench_render_fresh,
    bench_encode
);
criterion_main!(benches);
