use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bilscore::core::{CatalogMode, GameState, RosterEntry, SessionConfig, SessionId};
use bilscore::events::EventId;
use bilscore::persist::MemoryStore;
use bilscore::session::GameSession;

fn roster(count: usize) -> Vec<RosterEntry> {
    (0..count)
        .map(|i| RosterEntry::new(format!("p{}", i), format!("P{}", i), "#ffa502"))
        .collect()
}

fn bench_trigger_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("trigger_undo");
    let big_win = EventId::new("b_dajin");

    for count in [4usize, 8] {
        let config = SessionConfig::new().with_mode(CatalogMode::Personal).with_seed(1);
        let mut session = GameSession::open(MemoryStore::new(), config);
        session.start_game(&roster(count));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                session.trigger_event(black_box(count - 1), &big_win, None);
                session.undo();
            })
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(SessionId::new("bench"), &roster(8));

    c.bench_function("snapshot_8_players", |b| b.iter(|| black_box(state.snapshot())));
}

criterion_group!(benches, bench_trigger_and_undo, bench_snapshot);
criterion_main!(benches);
