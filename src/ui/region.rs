use std::sync::Mutex;

use tokio::sync::watch;

/// A single-writer text sink with a request-generation counter
///
/// Each triggered request starts a new generation via [`OutputRegion::begin`]
/// and completes through the returned [`RegionTicket`]. A completion whose
/// generation has been superseded by a newer trigger is dropped, so a slow
/// response can never overwrite the output of a request started after it.
///
/// Text changes are published on a watch channel so a front-end can render
/// updates as they land.
pub struct OutputRegion {
    name: &'static str,
    generation: Mutex<u64>,
    text: watch::Sender<String>,
}

/// Write permit bound to one generation of an [`OutputRegion`]
#[must_use = "a ticket that is never completed leaves the in-progress text in place"]
pub struct RegionTicket<'a> {
    region: &'a OutputRegion,
    generation: u64,
}

impl OutputRegion {
    pub fn new(name: &'static str) -> Self {
        let (text, _) = watch::channel(String::new());
        Self {
            name,
            generation: Mutex::new(0),
            text,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Starts a new generation, writes the in-progress text, and returns the
    /// ticket that the eventual completion must present.
    pub fn begin(&self, text: impl Into<String>) -> RegionTicket<'_> {
        let mut generation = self.generation.lock().unwrap();
        *generation += 1;
        self.text.send_replace(text.into());
        RegionTicket {
            region: self,
            generation: *generation,
        }
    }

    /// Writes text outside any request, superseding in-flight generations
    ///
    /// Used for messages that are not tied to a pending response, such as
    /// inline validation.
    pub fn replace(&self, text: impl Into<String>) {
        let mut generation = self.generation.lock().unwrap();
        *generation += 1;
        self.text.send_replace(text.into());
    }

    /// Current text of the region
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Subscribes to text changes
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text.subscribe()
    }
}

impl RegionTicket<'_> {
    /// Writes the final text if this ticket's generation is still current
    ///
    /// Returns whether the write landed. A stale completion is logged and
    /// dropped.
    pub fn complete(self, text: impl Into<String>) -> bool {
        let generation = self.region.generation.lock().unwrap();
        if *generation != self.generation {
            tracing::debug!(
                region = self.region.name,
                generation = self.generation,
                current = *generation,
                "Stale completion dropped"
            );
            return false;
        }
        self.region.text.send_replace(text.into());
        true
    }
}
