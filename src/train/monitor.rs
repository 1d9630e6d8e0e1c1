use std::fmt;
use std::sync::mpsc;

use tracing::warn;

use crate::error::{NetworkError, Result};
use crate::network::Topology;
use crate::train::epoch_stats::EpochStats;

enum Sink<'a> {
    Callback(Box<dyn FnMut(usize, f64, &Topology) + 'a>),
    Channel {
        tx: mpsc::Sender<EpochStats>,
        disconnected: bool,
    },
}

/// Training hook, invoked synchronously after every epoch whose index is a
/// multiple of `frequency` (so always after epoch 0).
///
/// The callback sees the topology as it stands after that epoch's updates.
pub struct Monitor<'a> {
    frequency: usize,
    sink: Sink<'a>,
}

impl<'a> Monitor<'a> {
    /// Calls `function(epoch, error, topology)` on monitored epochs.
    pub fn new<F>(frequency: usize, function: F) -> Result<Monitor<'a>>
    where
        F: FnMut(usize, f64, &Topology) + 'a,
    {
        Monitor::with_sink(frequency, Sink::Callback(Box::new(function)))
    }

    /// Sends one `EpochStats` per monitored epoch. If the receiver has been
    /// dropped, training carries on and the monitor goes quiet.
    pub fn channel(frequency: usize, tx: mpsc::Sender<EpochStats>) -> Result<Monitor<'a>> {
        Monitor::with_sink(frequency, Sink::Channel { tx, disconnected: false })
    }

    fn with_sink(frequency: usize, sink: Sink<'a>) -> Result<Monitor<'a>> {
        if frequency == 0 {
            return Err(NetworkError::InvalidConfig(
                "monitor frequency must be at least 1".to_string(),
            ));
        }
        Ok(Monitor { frequency, sink })
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub(crate) fn is_due(&self, epoch: usize) -> bool {
        epoch % self.frequency == 0
    }

    pub(crate) fn notify(&mut self, stats: EpochStats, topology: &Topology) {
        match &mut self.sink {
            Sink::Callback(function) => (*function)(stats.epoch, stats.error, topology),
            Sink::Channel { tx, disconnected } => {
                if *disconnected {
                    return;
                }
                if tx.send(stats).is_err() {
                    warn!("monitor receiver dropped; no further epoch stats will be sent");
                    *disconnected = true;
                }
            }
        }
    }
}

impl fmt::Debug for Monitor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = match self.sink {
            Sink::Callback(_) => "callback",
            Sink::Channel { .. } => "channel",
        };
        f.debug_struct("Monitor")
            .field("frequency", &self.frequency)
            .field("sink", &sink)
            .finish()
    }
}
