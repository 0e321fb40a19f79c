use criterion::{criterion_group, criterion_main, Criterion};

use kociemba_solver::config::SolverConfig;
use kociemba_solver::cubie::CubieCube;
use kociemba_solver::moves::Move;
use kociemba_solver::scramble::scramble_from_str;
use kociemba_solver::solver::{solve, SolverTables};

fn build_tables() -> (SolverTables, SolverConfig) {
    let config = SolverConfig { persist_tables: true, ..SolverConfig::default() };
    let tables = SolverTables::build(&config).expect("build solver tables");
    (tables, config)
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("build solver tables (warm cache)", |b| {
        b.iter(|| SolverTables::build(&SolverConfig::default()).unwrap())
    });
}

fn bench_solve(c: &mut Criterion) {
    let (tables, config) = build_tables();
    let scrambles = [
        "R U R' U'",
        "F R U' B2 L D F' R2",
        "U R U' L' D2 F B' D R2 L2 U' F2 B2 D' R U L' F R2 B'",
    ];
    let mut group = c.benchmark_group("solve");
    for scramble in scrambles {
        let moves: Vec<Move> = scramble_from_str(scramble).unwrap();
        let mut cube = CubieCube::solved();
        for m in &moves {
            cube.apply_move(*m as usize);
        }
        group.bench_function(scramble, |b| b.iter(|| solve(&tables, &config, &cube).unwrap()));
    }
    group.finish();
}

criterion_group!(benches, bench_table_build, bench_solve);
criterion_main!(benches);
