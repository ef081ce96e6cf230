use criterion::{black_box, criterion_group, criterion_main, Criterion};
use storymap::cards::Function;
use storymap::map::ApplicationState;
use storymap::memento::Originator;
use storymap::snapshot::SnapshotRegistry;

fn state(size: u32) -> ApplicationState {
    let functions: Vec<Function> = (1..=size)
        .map(|n| Function::new(n, format!("Function {n}")).with_description("A step in the tale."))
        .collect();
    let mut state = ApplicationState::from_functions("Bench", &functions);
    for (index, f) in functions.iter().enumerate().step_by(2) {
        let _ = state.place_from_deck(f.name(), index);
    }
    state
}

fn bench_snapshot(c: &mut Criterion) {
    let registry = SnapshotRegistry::standard();
    let state = state(31);
    let json = registry.to_string(&state, false).unwrap_or_default();
    let memento = state.create_memento();

    c.bench_function("memento_create", |b| b.iter(|| black_box(&state).create_memento()));
    c.bench_function("memento_restore", |b| {
        b.iter(|| ApplicationState::from_memento(black_box(&memento)))
    });
    c.bench_function("document_write", |b| {
        b.iter(|| registry.to_string(black_box(&state), false))
    });
    c.bench_function("document_read", |b| {
        b.iter(|| registry.from_str::<ApplicationState>(black_box(&json)))
    });
}

criterion_group!(benches, bench_snapshot);
criterion_main!(benches);
