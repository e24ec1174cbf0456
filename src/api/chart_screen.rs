use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{debug, warn};

use crate::core::{FilterState, RawListing, manufacturer_options};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartContext, ChartEvent, ChartObserver};
use crate::render::Renderer;

use super::{
    ChartConfig, DatasetSource, DatasetStore, LoadPhase, LoadStatus, RedrawController,
    RedrawOutcome,
};

type LoadResult = ChartResult<Vec<RawListing>>;

/// Top-level listing visuals screen.
///
/// Owns the dataset store, the manufacturer filter and the redraw
/// controller. Every dataset completion and every filter replacement is
/// published to observers and followed by a full redraw of both charts.
pub struct ChartScreen<B: Renderer, S: Renderer> {
    store: DatasetStore,
    filter: FilterState,
    controller: RedrawController<B, S>,
    observers: Vec<Box<dyn ChartObserver>>,
    pending_load: Option<Receiver<LoadResult>>,
    last_outcome: Option<RedrawOutcome>,
}

impl<B: Renderer, S: Renderer> ChartScreen<B, S> {
    pub fn new(config: ChartConfig, bar_surface: B, scatter_surface: S) -> ChartResult<Self> {
        let store = DatasetStore::new(config.price_policy);
        let controller = RedrawController::new(config, bar_surface, scatter_surface)?;
        Ok(Self {
            store,
            filter: FilterState::new(),
            controller,
            observers: Vec::new(),
            pending_load: None,
            last_outcome: None,
        })
    }

    #[must_use]
    pub fn dataset(&self) -> &DatasetStore {
        &self.store
    }

    #[must_use]
    pub fn load_status(&self) -> &LoadStatus {
        self.store.status()
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn controller(&self) -> &RedrawController<B, S> {
        &self.controller
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<RedrawOutcome> {
        self.last_outcome
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Options for the manufacturer selection control.
    #[must_use]
    pub fn manufacturer_options(&self) -> Vec<String> {
        manufacturer_options(self.store.records())
    }

    /// Loads the dataset on the calling thread, then redraws.
    ///
    /// A failed load is reported through the returned phase and the load
    /// status; only a failing redraw, or a background load still pending,
    /// is an error.
    pub fn load_dataset(&mut self, source: &mut dyn DatasetSource) -> ChartResult<LoadPhase> {
        self.ensure_no_pending_load()?;
        let phase = self.store.load_from(source);
        self.publish_load(phase)
    }

    /// Starts fetching on a worker thread; pair with [`Self::poll_dataset`].
    pub fn begin_load<Src>(&mut self, mut source: Src) -> ChartResult<()>
    where
        Src: DatasetSource + Send + 'static,
    {
        self.ensure_no_pending_load()?;

        debug!(source = %source.describe(), "starting background dataset load");
        let (sender, receiver) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("listing-dataset-load".to_owned())
            .spawn(move || {
                // The screen may be gone by the time the fetch resolves.
                let _ = sender.send(source.fetch());
            });

        match spawned {
            Ok(_) => {
                self.pending_load = Some(receiver);
                Ok(())
            }
            Err(err) => {
                self.finish_load(Err(ChartError::DataLoad(format!(
                    "failed to start loader thread: {err}"
                ))))?;
                Ok(())
            }
        }
    }

    /// Applies a finished background load, if any. Returns `None` while the
    /// fetch is still running or when no load was started.
    pub fn poll_dataset(&mut self) -> ChartResult<Option<LoadPhase>> {
        let Some(receiver) = self.pending_load.take() else {
            return Ok(None);
        };

        match receiver.try_recv() {
            Ok(result) => self.finish_load(result).map(Some),
            Err(TryRecvError::Empty) => {
                self.pending_load = Some(receiver);
                Ok(None)
            }
            Err(TryRecvError::Disconnected) => self
                .finish_load(Err(ChartError::DataLoad(
                    "loader stopped without a result".to_owned(),
                )))
                .map(Some),
        }
    }

    /// Blocks until a background load finishes and applies it.
    pub fn wait_for_dataset(&mut self) -> ChartResult<Option<LoadPhase>> {
        let Some(receiver) = self.pending_load.take() else {
            return Ok(None);
        };
        let result = receiver.recv().unwrap_or_else(|_| {
            Err(ChartError::DataLoad(
                "loader stopped without a result".to_owned(),
            ))
        });
        self.finish_load(result).map(Some)
    }

    /// Replaces the filter with the given selection and redraws.
    pub fn select_manufacturers<I, T>(&mut self, selection: I) -> ChartResult<RedrawOutcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.filter = FilterState::from_selection(selection);
        debug!(selected = self.filter.len(), "manufacturer filter replaced");
        self.emit(ChartEvent::FilterReplaced {
            selected_len: self.filter.len(),
        });
        self.redraw()
    }

    /// Re-runs the chart pipeline with unchanged inputs.
    pub fn redraw(&mut self) -> ChartResult<RedrawOutcome> {
        let outcome = self.controller.on_state_change(&self.store, &self.filter)?;
        self.last_outcome = Some(outcome);
        self.emit(match outcome {
            RedrawOutcome::Skipped => ChartEvent::RedrawSkipped,
            RedrawOutcome::Rendered(summary) => ChartEvent::Redrawn(summary),
        });
        Ok(outcome)
    }

    /// Registers an observer with unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn ChartObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ChartError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers.iter().any(|entry| entry.id() == observer_id)
    }

    #[must_use]
    pub fn into_surfaces(self) -> (B, S) {
        self.controller.into_surfaces()
    }

    fn ensure_no_pending_load(&self) -> ChartResult<()> {
        if self.pending_load.is_some() {
            return Err(ChartError::InvalidData(
                "a dataset load is already in progress".to_owned(),
            ));
        }
        Ok(())
    }

    fn finish_load(&mut self, result: LoadResult) -> ChartResult<LoadPhase> {
        let phase = self.store.complete_load(result);
        self.publish_load(phase)
    }

    /// Notifies observers of the store's new status, then redraws.
    fn publish_load(&mut self, phase: LoadPhase) -> ChartResult<LoadPhase> {
        let event = match self.store.status() {
            LoadStatus::Loaded {
                records, excluded, ..
            } => Some(ChartEvent::DatasetLoaded {
                records_len: *records,
                excluded_len: *excluded,
            }),
            LoadStatus::Failed { reason, .. } => {
                warn!(reason = %reason, "charts will render without data");
                Some(ChartEvent::DatasetLoadFailed)
            }
            LoadStatus::Pending => None,
        };
        if let Some(event) = event {
            self.emit(event);
        }
        self.redraw()?;
        Ok(phase)
    }

    fn context(&self) -> ChartContext {
        ChartContext {
            load_phase: self.store.phase(),
            dataset_len: self.store.records().len(),
            selected_len: self.filter.len(),
        }
    }

    fn emit(&mut self, event: ChartEvent) {
        let context = self.context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
