use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_sprites::core::{Command, Registry};
use tui_sprites::term::Camera;
use tui_sprites::types::Position;

fn populated_registry(count: i32) -> Registry {
    let mut reg = Registry::new();
    for i in 0..count {
        // Scatter across a region larger than the viewport so the cull
        // has work to do.
        let pos = Position::new((i * 7) % 64 - 16, (i * 13) % 48 - 12);
        reg.register('*', pos, &format!("s{i}"), Some("stars"));
    }
    reg
}

fn bench_render(c: &mut Criterion) {
    let reg = populated_registry(256);
    let camera = Camera::new("bench", (32, 24), Position::new(0, 0), '.');

    c.bench_function("render_256_sprites_32x24", |b| {
        b.iter(|| camera.render(black_box(&reg)))
    });
}

fn bench_position_query(c: &mut Criterion) {
    let reg = populated_registry(256);

    c.bench_function("sprites_at", |b| {
        b.iter(|| reg.sprites_at(black_box(Position::new(5, 5))))
    });
}

fn bench_broadcast(c: &mut Criterion) {
    let mut reg = populated_registry(256);

    c.bench_function("broadcast_translate_256", |b| {
        b.iter(|| {
            reg.broadcast("stars", Command::Translate { dx: 1, dy: 0 })
                .unwrap()
        })
    });
}

fn bench_register_destroy(c: &mut Criterion) {
    c.bench_function("register_then_destroy", |b| {
        let mut reg = populated_registry(64);
        b.iter(|| {
            let id = reg.register('o', Position::new(3, 3), "apple", Some("collectable"));
            reg.destroy(id).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_render,
    bench_position_query,
    bench_broadcast,
    bench_register_destroy
);
criterion_main!(benches);
