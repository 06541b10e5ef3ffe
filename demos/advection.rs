//! 1D advection demo using the modal DG solver.
//!
//! Solves du/dt + a * du/dx = 0 on [0, 2] with:
//! - Initial condition: u(x, 0) = sin(pi * x)
//! - Advection velocity: a = 1
//! - Periodic boundaries
//!
//! After time t, exact solution is u(x, t) = sin(pi * (x - a*t))

use dg_scalar::{
    compute_dt, ssp_rk3_step, total_mass, BoundaryCondition1D, Grid1D, ModalState1D, ScalarLaw,
    NPOLY,
};
use std::f64::consts::PI;

fn main() {
    // Parameters
    let num_zones = 32;
    let x_min = 0.0;
    let x_max = 2.0;
    let a = 1.0; // Advection velocity
    let t_final = 1.0;
    let cfl = 0.2;

    println!("1D Modal DG Advection Solver");
    println!("============================");
    println!("Modes per zone: {}", NPOLY);
    println!("Zones: {}", num_zones);
    println!("Domain: [{}, {}]", x_min, x_max);
    println!("Advection velocity: {}", a);
    println!("Final time: {}", t_final);
    println!();

    let grid = Grid1D::uniform(x_min, x_max, num_zones);
    let law = ScalarLaw::advection(a);
    let bc = BoundaryCondition1D::Periodic;

    // Initial condition: sin(pi * x)
    let mut u = ModalState1D::new(num_zones);
    u.project(&grid, |x| (PI * x).sin());

    let mass_0 = total_mass(&grid, &u);

    // Time stepping, adjusted to hit t_final exactly
    let dt = compute_dt(&law, &grid, &u, cfl);
    let n_steps = (t_final / dt).ceil() as usize;
    let dt = t_final / n_steps as f64;

    println!("Time step: {:.4e}", dt);
    println!("Number of steps: {}", n_steps);
    println!();

    let mut t = 0.0;
    for _ in 0..n_steps {
        ssp_rk3_step(&law, &grid, &bc, &mut u, t, dt).expect("solver contract violated");
        t += dt;
    }

    let exact = |x: f64| (PI * (x - a * t)).sin();
    let error = u.l2_error(&grid, exact);
    let mass_drift = (total_mass(&grid, &u) - mass_0).abs();

    println!("Final L2 error: {:.4e}", error);
    println!("Mass drift: {:.4e}", mass_drift);

    // Print a short profile table: cell averages vs exact cell centers
    println!();
    println!("   x      computed     exact");
    for i in (0..num_zones).step_by(4) {
        let x = grid.zone_center(i);
        println!("{:6.3}  {:9.5}  {:9.5}", x, u.cell_average(i), exact(x));
    }
}
