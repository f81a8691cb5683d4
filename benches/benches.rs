use criterion::*;
use eigenweb::{RankEngine, SparseMatrix};
use rand::{prelude::*, rngs::SmallRng};

criterion_main!(benches);
criterion_group!(benches, ring, star, random_graph, random_graph_multiply);

fn ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ring");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[100usize, 1000usize, 10000usize, 100000usize];
    for n in SIZES.iter() {
        let edges: Vec<_> = (0..*n).map(|u| (u, (u + 1) % n)).collect();
        let m = SparseMatrix::from_edges(*n, &edges).unwrap();
        group.bench_with_input(BenchmarkId::new("Run", n), n, |b, _| {
            b.iter(|| {
                let mut engine = RankEngine::new(&m);
                black_box(engine.run().unwrap());
            })
        });
    }
    group.finish();
}

fn star(c: &mut Criterion) {
    let mut group = c.benchmark_group("Star");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[100usize, 1000usize, 10000usize, 100000usize];
    for n in SIZES.iter() {
        // every leaf links to the hub, which is dangling
        let edges: Vec<_> = (1..*n).map(|u| (u, 0)).collect();
        let m = SparseMatrix::from_edges(*n, &edges).unwrap();
        group.bench_with_input(BenchmarkId::new("Run", n), n, |b, _| {
            b.iter(|| {
                let mut engine = RankEngine::new(&m);
                black_box(engine.run().unwrap());
            })
        });
    }
    group.finish();
}

fn random_graph(c: &mut Criterion) {
    const V_SIZE: &[usize] = &[1000usize, 10000usize, 100000usize];
    const E_POW: &[f64] = &[1.0, 1.25, 1.5];
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut rng = SmallRng::seed_from_u64(3407);
    for e_m in E_POW.iter() {
        let mut group = c.benchmark_group(format!("RandomGraph_{e_m:.2}"));
        group.plot_config(plot_config.clone());
        for v_n in V_SIZE.iter() {
            let e_n = (*v_n as f64).powf(*e_m) as usize;
            let m = gen_random_graph(&mut rng, *v_n, e_n);
            group.bench_with_input(BenchmarkId::new("Run", v_n), v_n, |b, _| {
                b.iter(|| {
                    let mut engine = RankEngine::new(&m);
                    black_box(engine.run().unwrap());
                })
            });
        }
        group.finish();
    }
}

fn random_graph_multiply(c: &mut Criterion) {
    const V_SIZE: &[usize] = &[1000usize, 10000usize, 100000usize];
    const E_POW: &[f64] = &[1.0, 1.25, 1.5];
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut rng = SmallRng::seed_from_u64(3407);
    for e_m in E_POW.iter() {
        let mut group = c.benchmark_group(format!("RandomGraphMultiply_{e_m:.2}"));
        group.plot_config(plot_config.clone());
        for v_n in V_SIZE.iter() {
            let e_n = (*v_n as f64).powf(*e_m) as usize;
            let m = gen_random_graph(&mut rng, *v_n, e_n);
            let v = eigenweb::uniform(*v_n);
            group.bench_with_input(BenchmarkId::new("Multiply", v_n), v_n, |b, _| {
                b.iter(|| black_box(m.multiply(&v).unwrap()))
            });
        }
        group.finish();
    }
}

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn gen_random_graph<R>(rng: &mut R, v_n: usize, e_n: usize) -> SparseMatrix
where
    R: SeedableRng + Rng,
{
    let vs: Vec<_> = (0..v_n).collect();
    let mut edges = Vec::with_capacity(e_n);
    for _ in 0..e_n {
        let u = *vs.choose(rng).unwrap();
        let v = *vs.choose(rng).unwrap();
        edges.push((u, v));
    }
    SparseMatrix::from_edges(v_n, &edges).unwrap()
}
