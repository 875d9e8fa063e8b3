use std::time::Instant;

use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity, DEFAULT_G};
use crate::simulation::states::{Body, NVec2};

/// Bodies on a deterministic spiral, far enough apart that nothing collides
/// during a short benchmark run
pub fn spiral_bodies(n: usize) -> Result<Vec<Body>> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let r = 100.0 + 25.0 * i_f;
            let phi = i_f * 0.37;
            let x = NVec2::new(r * phi.cos(), r * phi.sin());
            let v = NVec2::new(-phi.sin(), phi.cos()) * 5.0;
            Body::new(1.0, 1.0 + (i % 7) as f64, x, v)
        })
        .collect()
}

/// Time one gravity accumulation and a batch of full engine steps for
/// growing body counts
pub fn bench_step() -> Result<()> {
    let ns = [25, 50, 100, 200, 400];
    let steps = 100;

    for n in ns {
        let bodies = spiral_bodies(n)?;
        let mut engine = Engine::new(bodies, Vec::new(), 0.001)?;

        let gravity = AccelSet::new().with(NewtonianGravity { g: DEFAULT_G });
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.accumulate_accels(0.0, engine.system(), &mut out)?;
        engine.step()?;

        let t0 = Instant::now();
        gravity.accumulate_accels(0.0, engine.system(), &mut out)?;
        let dt_gravity = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        for _ in 0..steps {
            engine.step()?;
        }
        let dt_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, gravity = {:10.6} s, step = {:10.6} s", dt_gravity, dt_step);
    }
    Ok(())
}
