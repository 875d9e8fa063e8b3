use std::io::{self, Write};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::Body;

/// Read-only consumer of body snapshots, called once per frame
pub trait FrameSink {
    fn frame(&mut self, t: f64, names: &[String], bodies: &[Body]) -> io::Result<()>;
}

/// Prints one line per body per frame
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for ConsoleSink<W> {
    fn frame(&mut self, t: f64, names: &[String], bodies: &[Body]) -> io::Result<()> {
        for (name, b) in names.iter().zip(bodies) {
            let (x, v) = (b.position(), b.velocity());
            writeln!(
                self.out,
                "t={t:10.4} {name:>12}  x=({:12.4}, {:12.4})  v=({:12.4}, {:12.4})",
                x.x, x.y, v.x, v.y
            )?;
        }
        Ok(())
    }
}

/// Run `scenario` to its end time, handing every `every`-th frame to `sink`
pub fn run_console<S: FrameSink>(scenario: &mut Scenario, sink: &mut S, every: usize) -> anyhow::Result<usize> {
    println!(
        "run_console: starting headless run with {} bodies, {} steps of {}",
        scenario.engine.bodies().len(),
        scenario.parameters.steps(),
        scenario.parameters.h0
    );

    let every = every.max(1);
    let Scenario {
        parameters,
        engine,
        names,
    } = scenario;
    let names: &[String] = names;

    sink.frame(engine.elapsed(), names, engine.bodies())?;

    let mut frame = 0usize;
    let mut sink_err = None;
    let steps = engine.run_until(parameters.t_end, |e| {
        frame += 1;
        if sink_err.is_none() && frame % every == 0 {
            if let Err(err) = sink.frame(e.elapsed(), names, e.bodies()) {
                sink_err = Some(err);
            }
        }
    })?;
    if let Some(err) = sink_err {
        return Err(err.into());
    }

    let p = engine.total_momentum();
    println!(
        "run_console: {steps} steps, t = {:.4}, momentum = ({:.6}, {:.6}), impulse = {:.6}",
        engine.elapsed(),
        p.x,
        p.y,
        engine.total_impulse()
    );
    Ok(steps)
}
