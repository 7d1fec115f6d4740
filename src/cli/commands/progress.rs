//! Drive a demo indicator through its full lifecycle. Useful for eyeballing
//! redraw behavior on a real terminal, where tests can't go.

use crate::progress::ProgressIndicator;
use std::thread;
use std::time::Duration;

pub fn progress(label: &str, steps: u64, delay_ms: u64) {
    let mut bar = ProgressIndicator::new(label);
    bar.start();
    for step in 1..=steps {
        thread::sleep(Duration::from_millis(delay_ms));
        bar.progressed(step, steps);
    }
    bar.stop(true);
}
