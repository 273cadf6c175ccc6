use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hayate::mcts::Node;
use hayate::report::{MultiPv, Reporter};
use hayate::shogi::{Move, Role, Square};
use std::hint::black_box;
use std::time::Duration;

fn moves(n: usize) -> Vec<Move> {
    let square = |file: usize, rank: usize| Square::new(file as u8 + 1, rank as u8 + 1);

    (0..n)
        .map(|i| {
            let whither = square(i % 9, i / 9 % 9).expect("is valid");
            let whence = square(i / 81 % 9, i % 7).expect("is valid");
            if i % 5 > 0 {
                Move::board(whence, whither, false)
            } else {
                Move::drop(Role::Pawn, whither)
            }
        })
        .collect()
}

/// A line of `depth` nodes, each with a single well visited child among `width`.
fn line(width: usize, depth: usize) -> Node {
    let moves = moves(width);
    let mut node = Node::new();
    for _ in 0..depth {
        let visits = node.move_count + 1;
        node = Node::expanded(moves.iter().copied())
            .with_move_count(visits)
            .with_visits(0, visits, visits as f32 * 0.5)
            .with_child(0, node);
    }

    node
}

fn tree(width: usize, depth: usize) -> Node {
    let moves = moves(width);
    let mut root = Node::expanded(moves.iter().copied());
    for idx in 0..width {
        let n = (width - idx) as u32 * 10;
        root = root.with_visits(idx, n, n as f32 * 0.5);
        if idx < MultiPv::MAX.into() {
            root = root.with_child(idx, line(8, depth));
        }
    }

    let total = root.child_move_count.iter().sum();
    root.with_move_count(total)
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    group.measurement_time(Duration::from_secs(2));

    for depth in [8, 64, 512] {
        let root = tree(593, depth);
        let reporter = Reporter::new(MultiPv::upper(), Duration::from_secs(1), 1 << 20);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &root, |b, root| {
            b.iter(|| black_box(reporter.report_with(black_box(root), drop)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
