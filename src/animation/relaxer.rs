//! Relaxation drivers for iterative layouts.
//!
//! [`prerelax`] is the one-time warm-up run by
//! [`SmoothLayout::initialize`](super::SmoothLayout::initialize). [`Relaxer`]
//! keeps stepping a layout on a background thread so the animator sees a
//! live, converging set of targets.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use web_time::Duration;

use super::clock::Clock;
use crate::error::QuantoViewError;
use crate::layout::IterativeLayout;
use crate::options::RelaxOptions;

/// Step `layout` until it is done, the warm-up budget of clock time is
/// spent, or the step cap is hit. Returns the number of steps taken.
pub fn prerelax(
    layout: &dyn IterativeLayout,
    clock: &dyn Clock,
    options: &RelaxOptions,
) -> usize {
    let budget = Duration::from_millis(options.prerelax_ms);
    let start = clock.now();
    let mut steps = 0;

    while steps < options.prerelax_max_steps
        && !layout.done()
        && clock.now().saturating_duration_since(start) < budget
    {
        layout.step();
        steps += 1;
    }

    log::debug!("prerelax ran {steps} steps (done: {})", layout.done());
    steps
}

enum Command {
    Pause,
    Resume,
    Shutdown,
}

/// Background thread that steps an iterative layout at a fixed interval.
///
/// The thread idles while paused or once the layout reports done;
/// [`resume`](Self::resume) wakes it to check again (e.g. after the layout was
/// re-initialized because the graph changed).
pub struct Relaxer {
    command_tx: mpsc::Sender<Command>,
    steps: Arc<AtomicUsize>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl Relaxer {
    /// Spawn the relaxation thread.
    ///
    /// # Errors
    ///
    /// Returns [`QuantoViewError::ThreadSpawn`] if the thread fails to spawn.
    pub fn spawn(
        layout: Arc<dyn IterativeLayout>,
        options: &RelaxOptions,
    ) -> Result<Self, QuantoViewError> {
        let (command_tx, command_rx) = mpsc::channel::<Command>();
        let steps = Arc::new(AtomicUsize::new(0));
        let interval = Duration::from_millis(options.interval_ms.max(1));

        let counter = Arc::clone(&steps);
        let thread = std::thread::Builder::new()
            .name("layout-relaxer".into())
            .spawn(move || {
                Self::thread_loop(layout.as_ref(), &command_rx, interval, &counter);
            })
            .map_err(QuantoViewError::ThreadSpawn)?;

        Ok(Self {
            command_tx,
            steps,
            thread: Some(thread),
        })
    }

    /// Stop stepping until [`resume`](Self::resume).
    pub fn pause(&self) {
        let _ = self.command_tx.send(Command::Pause);
    }

    /// Continue stepping, and re-check whether the layout is done.
    pub fn resume(&self) {
        let _ = self.command_tx.send(Command::Resume);
    }

    /// Relaxation steps taken so far.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps.load(Ordering::Relaxed)
    }

    /// Shut down the background thread and wait for it to finish.
    pub fn shutdown(&mut self) {
        let _ = self.command_tx.send(Command::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    fn thread_loop(
        layout: &dyn IterativeLayout,
        command_rx: &mpsc::Receiver<Command>,
        interval: Duration,
        steps: &AtomicUsize,
    ) {
        let mut paused = false;

        loop {
            let command = if paused || layout.done() {
                match command_rx.recv() {
                    Ok(command) => Some(command),
                    Err(_) => break,
                }
            } else {
                match command_rx.recv_timeout(interval) {
                    Ok(command) => Some(command),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            };

            match command {
                None => {
                    layout.step();
                    let _ = steps.fetch_add(1, Ordering::Relaxed);
                }
                Some(Command::Pause) => paused = true,
                Some(Command::Resume) => paused = false,
                Some(Command::Shutdown) => break,
            }
        }

        log::debug!(
            "layout relaxer stopped after {} steps",
            steps.load(Ordering::Relaxed)
        );
    }
}

impl Drop for Relaxer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use web_time::Instant;

    use glam::Vec2;

    use super::*;
    use crate::animation::ManualClock;
    use crate::layout::{ForceLayout, ForceParams};

    fn triangle(max_iterations: usize) -> Arc<ForceLayout<u32>> {
        let layout = ForceLayout::new(
            Vec2::new(100.0, 100.0),
            ForceParams {
                max_iterations,
                ..ForceParams::default()
            },
        );
        for v in 0..3 {
            layout.add_vertex(v);
        }
        layout.add_edge(0, 1);
        layout.add_edge(1, 2);
        Arc::new(layout)
    }

    fn wait_for(mut condition: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            sleep(Duration::from_millis(1));
        }
        condition()
    }

    #[test]
    fn prerelax_stops_when_layout_is_done() {
        let layout = triangle(25);
        let steps =
            prerelax(layout.as_ref(), &ManualClock::new(), &RelaxOptions::default());
        assert!(layout.done());
        assert!(steps > 0 && steps <= 25, "{steps}");
        assert_eq!(steps, layout.iteration());
    }

    #[test]
    fn prerelax_honors_step_cap_and_budget() {
        let layout = triangle(1_000);
        let capped = RelaxOptions {
            prerelax_max_steps: 7,
            ..RelaxOptions::default()
        };
        assert_eq!(prerelax(layout.as_ref(), &ManualClock::new(), &capped), 7);

        let no_budget = RelaxOptions {
            prerelax_ms: 0,
            ..RelaxOptions::default()
        };
        assert_eq!(
            prerelax(layout.as_ref(), &ManualClock::new(), &no_budget),
            0
        );
    }

    #[test]
    fn relaxer_runs_layout_to_completion() {
        let layout = triangle(30);
        let options = RelaxOptions {
            interval_ms: 1,
            ..RelaxOptions::default()
        };
        let mut relaxer = Relaxer::spawn(layout.clone(), &options).unwrap();

        assert!(wait_for(
            || layout.done() && relaxer.steps() == layout.iteration()
        ));
        relaxer.shutdown();
        assert_eq!(relaxer.steps(), layout.iteration());
    }

    #[test]
    fn pause_and_resume() {
        let layout = triangle(1_000_000);
        let options = RelaxOptions {
            interval_ms: 1,
            ..RelaxOptions::default()
        };
        let relaxer = Relaxer::spawn(layout, &options).unwrap();
        assert!(wait_for(|| relaxer.steps() > 0));

        relaxer.pause();
        sleep(Duration::from_millis(50));
        let paused_at = relaxer.steps();
        sleep(Duration::from_millis(50));
        assert_eq!(relaxer.steps(), paused_at);

        relaxer.resume();
        assert!(wait_for(|| relaxer.steps() > paused_at));
    }
}
