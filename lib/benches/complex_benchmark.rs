use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fractal_lib::{
    fractal::{escape_time, render, FractalKind},
    math::Complex,
    presets,
};

fn complex_division(c: &mut Criterion) {
    let a = Complex::new(4., 6.);
    let b = Complex::new(2., 2.);

    c.bench_function("divide", |bench| {
        bench.iter(|| black_box(black_box(a).divide(black_box(b))))
    });
}

fn escape_time_inside(c: &mut Criterion) {
    // Never escapes, so every iteration is taken
    let point = Complex::new(-0.1, 0.1);

    c.bench_function("escape_time (inside, 1024)", |bench| {
        bench.iter(|| {
            black_box(escape_time(
                FractalKind::Mandelbrot,
                black_box(point),
                1024,
                2.,
            ))
        })
    });
}

fn render_small(c: &mut Criterion) {
    let mut config = presets::mandelbrot();
    config.size = (140, 100).into();

    c.bench_function("render (140x100)", |bench| {
        bench.iter(|| black_box(render(&config).unwrap()))
    });
}

criterion_group!(benches, complex_division, escape_time_inside, render_small);
criterion_main!(benches);
