//! Benchmarks for the zone update kernel and the numerical fluxes.
//!
//! Run with: `cargo bench --bench kernel_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dg_scalar::{
    advance_rk, upwind_flux, BoundaryCondition1D, Grid1D, ModalState1D, ScalarLaw,
};
use std::f64::consts::PI;

/// Build a periodic sine state ready for a kernel call.
fn setup(num_zones: usize) -> (Grid1D, ModalState1D, ModalState1D, ModalState1D) {
    let grid = Grid1D::uniform(0.0, 1.0, num_zones);
    let mut u_rd = ModalState1D::new(num_zones);
    u_rd.project(&grid, |x| (2.0 * PI * x).sin() + 0.1);
    BoundaryCondition1D::Periodic.fill_guard_zones(&mut u_rd);
    let u_rk = u_rd.clone();
    let u_wr = ModalState1D::new(num_zones);
    (grid, u_rk, u_rd, u_wr)
}

fn bench_advance_rk(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_rk");

    for &num_zones in &[64usize, 1024, 16384] {
        let (grid, u_rk, u_rd, mut u_wr) = setup(num_zones);

        for (name, law) in [
            ("advection", ScalarLaw::advection(1.0)),
            ("burgers", ScalarLaw::burgers()),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, num_zones),
                &num_zones,
                |b, _| {
                    b.iter(|| {
                        advance_rk(
                            black_box(&law),
                            black_box(&grid),
                            black_box(&u_rk),
                            black_box(&u_rd),
                            &mut u_wr,
                            0.0,
                            0.75,
                            1e-4,
                        )
                        .unwrap();
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_upwind_flux(c: &mut Criterion) {
    let advection = ScalarLaw::advection(1.0);
    let burgers = ScalarLaw::burgers();

    let traces: Vec<(f64, f64)> = (0..1000)
        .map(|i| {
            let phase = i as f64 * 0.1;
            (phase.sin(), (phase + 0.3).cos())
        })
        .collect();

    c.bench_function("upwind_flux/advection", |b| {
        b.iter(|| {
            for &(ul, ur) in &traces {
                black_box(upwind_flux(black_box(&advection), ul, ur));
            }
        })
    });

    c.bench_function("upwind_flux/burgers", |b| {
        b.iter(|| {
            for &(ul, ur) in &traces {
                black_box(upwind_flux(black_box(&burgers), ul, ur));
            }
        })
    });
}

criterion_group!(benches, bench_advance_rk, bench_upwind_flux);
criterion_main!(benches);
