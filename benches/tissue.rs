//! Tissue model benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use biotwin::{
    Action, DosingSchedule, InterventionGenerator, MockGenerator, Parameters, Simulation,
    TissueModel, TissueState,
};

fn bench_advance(c: &mut Criterion) {
    let model = TissueModel::default();

    c.bench_function("advance", |b| {
        let mut state = TissueState::default();
        b.iter(|| model.advance(black_box(&mut state)))
    });
}

fn bench_apply_treatment(c: &mut Criterion) {
    let model = TissueModel::default();
    let mut generator = MockGenerator::seeded(1);

    c.bench_function("apply_treatment", |b| {
        b.iter_batched(
            || {
                (
                    TissueState::default(),
                    generator.request_intervention("TGFBR2", Action::Inhibit),
                )
            },
            |(mut state, dose)| model.apply_treatment(&mut state, dose),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_dashboard_run(c: &mut Criterion) {
    let params = Parameters::default();

    c.bench_function("simulation_run_40", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(&params);
            let mut generator = MockGenerator::seeded(7);
            sim.run(40, &DosingSchedule::default(), &mut generator).len()
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_apply_treatment,
    bench_dashboard_run
);
criterion_main!(benches);
