use {
    crate::*,
    base::{Cancel, log_debug, log_error, log_info, log_warn},
    std::{
        path::{Path, PathBuf},
        sync::{Arc, mpsc},
        thread::{self, JoinHandle},
        time::Duration,
    },
    video::VideoSource,
};

/// How long `stop()` waits for the worker to wind down.
pub const STOP_TIMEOUT: Duration = Duration::from_secs(2);

pub const WINDOW_TITLE: &str = "Capture (ESC to stop)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Opening,
    Guiding,
    Recording,
    Stopping,
    Stopped,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// `stop()` was called.
    Requested,
    /// The maximum recording time elapsed.
    DurationElapsed,
    /// The camera stopped delivering frames.
    ReadFailure,
    /// Escape pressed or the window closed.
    UserCancelled,
    /// The camera could not be opened.
    DeviceUnavailable,
    /// The window could not be created or updated.
    SurfaceFailure,
}

/// What a finished session did.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    /// `Stopped` or `Errored`.
    pub state: PipelineState,
    pub reason: StopReason,
    pub saved: u64,
    pub failed_saves: u64,
    pub output_dir: PathBuf,
}

struct Worker {
    handle: JoinHandle<()>,
    reports: mpsc::Receiver<SessionReport>,
}

/// One capture session: open, guide, record, clean up, on one worker thread.
///
/// The only state shared with the worker is the cancel flag. A pipeline runs
/// once; build a new one for the next session.
pub struct CapturePipeline {
    config: CaptureConfig,
    output_dir: PathBuf,
    session: Option<Session>,
    cancel: Cancel,
    worker: Option<Worker>,
}

impl CapturePipeline {
    /// Validate `config`, create the output folder and prepare the session.
    ///
    /// Configuration errors surface here, before the camera is touched.
    pub fn new(config: CaptureConfig, source: Box<dyn VideoSource>) -> Result<Self, CaptureError> {
        config.validate()?;
        let sampler = Sampler::new(config.sampling())?;
        let storage = FrameStorage::from_config(&config)?;
        let output_dir = storage.dir().to_path_buf();
        let cancel = Cancel::new();
        let session = Session {
            config: config.clone(),
            resources: Resources { source },
            storage,
            sampler,
            surface_factory: None,
            clock: Arc::new(SystemClock),
            cancel: cancel.clone(),
            state: PipelineState::Idle,
            failed_saves: 0,
        };
        Ok(Self {
            config,
            output_dir,
            session: Some(session),
            cancel,
            worker: None,
        })
    }

    /// Use `factory` to build the preview window on the worker thread.
    pub fn with_surface(mut self, factory: SurfaceFactory) -> Self {
        if let Some(session) = self.session.as_mut() {
            session.surface_factory = Some(factory);
        }
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        if let Some(session) = self.session.as_mut() {
            session.clock = clock;
        }
        self
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Spawn the worker. Does nothing if this pipeline was already started.
    pub fn start(&mut self) {
        let Some(session) = self.session.take() else {
            log_debug!("capture already started");
            return;
        };
        let (sender, reports) = mpsc::channel();
        let handle = thread::spawn(move || {
            let _ = sender.send(session.run());
        });
        self.worker = Some(Worker { handle, reports });
    }

    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.handle.is_finished())
    }

    /// Ask the worker to stop and wait up to `STOP_TIMEOUT` for its report.
    ///
    /// An in-flight camera read is not interrupted; the worker notices the
    /// request between frames. Returns `None` if the worker was never
    /// started, already reported, or did not finish in time.
    pub fn stop(&mut self) -> Option<SessionReport> {
        self.cancel.cancel();
        self.collect(Some(STOP_TIMEOUT))
    }

    /// The report, if the worker has finished on its own. Never blocks.
    pub fn try_report(&mut self) -> Option<SessionReport> {
        self.collect(Some(Duration::ZERO))
    }

    /// Block until the worker finishes.
    pub fn wait(&mut self) -> Option<SessionReport> {
        self.collect(None)
    }

    fn collect(&mut self, timeout: Option<Duration>) -> Option<SessionReport> {
        let worker = self.worker.as_ref()?;
        let received = match timeout {
            None => worker.reports.recv().map_err(|_| None),
            Some(timeout) => worker.reports.recv_timeout(timeout).map_err(|e| match e {
                mpsc::RecvTimeoutError::Timeout => Some(timeout),
                mpsc::RecvTimeoutError::Disconnected => None,
            }),
        };
        match received {
            Ok(report) => {
                self.join();
                Some(report)
            }
            Err(Some(timeout)) => {
                if !timeout.is_zero() {
                    log_warn!("capture worker did not stop within {:?}", timeout);
                }
                None
            }
            Err(None) => {
                log_error!("capture worker exited without a report");
                self.join();
                None
            }
        }
    }

    fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.handle.join().is_err() {
                log_error!("capture worker panicked");
            }
        }
    }
}

impl Drop for CapturePipeline {
    fn drop(&mut self) {
        // the worker owns its resources and releases them when it exits
        self.cancel.cancel();
    }
}

// Releases the camera however the session ends.
struct Resources {
    source: Box<dyn VideoSource>,
}

impl Resources {
    fn release(&mut self) {
        if self.source.is_open() {
            self.source.release();
        }
    }
}

impl Drop for Resources {
    fn drop(&mut self) {
        self.release();
    }
}

// The session's window. Built on the worker and closed there when dropped;
// it never crosses threads.
struct OpenSurface(Box<dyn Surface>);

impl Drop for OpenSurface {
    fn drop(&mut self) {
        self.0.close();
    }
}

struct Session {
    config: CaptureConfig,
    resources: Resources,
    storage: FrameStorage,
    sampler: Sampler,
    surface_factory: Option<SurfaceFactory>,
    clock: Arc<dyn Clock>,
    cancel: Cancel,
    state: PipelineState,
    failed_saves: u64,
}

fn transition(state: &mut PipelineState, next: PipelineState) {
    log_debug!("capture: {:?} -> {:?}", state, next);
    *state = next;
}

impl Session {
    fn run(mut self) -> SessionReport {
        let reason = self.run_phases();

        let errored = matches!(
            reason,
            StopReason::DeviceUnavailable | StopReason::SurfaceFailure
        );
        if errored {
            transition(&mut self.state, PipelineState::Errored);
            self.resources.release();
        } else {
            transition(&mut self.state, PipelineState::Stopping);
            self.resources.release();
            transition(&mut self.state, PipelineState::Stopped);
        }

        log_info!(
            "capture finished ({:?}): {} saved, {} failed, in {}",
            reason,
            self.storage.saved(),
            self.failed_saves,
            self.storage.dir().display()
        );

        SessionReport {
            state: self.state,
            reason,
            saved: self.storage.saved(),
            failed_saves: self.failed_saves,
            output_dir: self.storage.dir().to_path_buf(),
        }
    }

    fn run_phases(&mut self) -> StopReason {
        let clock = self.clock.as_ref();

        transition(&mut self.state, PipelineState::Opening);
        let index = self.config.camera_index();
        match self.resources.source.open(index) {
            Ok(size) => log_info!("camera {} ready at {}", index, size),
            Err(e) => {
                log_error!("{}", CaptureError::from(e));
                return StopReason::DeviceUnavailable;
            }
        }

        let created = match self.surface_factory.take() {
            Some(factory) => factory(),
            None => Ok(Box::new(NullSurface) as Box<dyn Surface>),
        };
        let mut surface = match created {
            Ok(surface) => OpenSurface(surface),
            Err(e) => {
                log_error!("{}", e);
                return StopReason::SurfaceFailure;
            }
        };

        log_info!("saving to {}", self.storage.dir().display());
        log_info!(
            "throttle {} | max duration {:?} | countdown {:?}",
            self.sampler,
            self.config.max_duration(),
            self.config.countdown()
        );

        if !self.config.countdown().is_zero() {
            transition(&mut self.state, PipelineState::Guiding);
            let guide = PreCaptureGuide::new(self.config.countdown());
            let source = &mut *self.resources.source;
            match guide.run(source, &mut *surface.0, clock, &self.cancel) {
                GuideOutcome::Done => {}
                GuideOutcome::Cancelled if self.cancel.is_cancelled() => {
                    return StopReason::Requested;
                }
                GuideOutcome::Cancelled => {
                    log_info!("countdown cancelled");
                    return StopReason::UserCancelled;
                }
                GuideOutcome::ReadFailed => return StopReason::ReadFailure,
                GuideOutcome::SurfaceFailed => return StopReason::SurfaceFailure,
            }
        }

        transition(&mut self.state, PipelineState::Recording);
        let max_duration = self.config.max_duration();
        let start = clock.now();
        loop {
            if self.cancel.is_cancelled() {
                return StopReason::Requested;
            }
            if !max_duration.is_zero()
                && clock.now().saturating_duration_since(start) >= max_duration
            {
                log_info!("maximum duration of {:?} reached", max_duration);
                return StopReason::DurationElapsed;
            }

            let frame = match self.resources.source.read() {
                Ok(frame) => frame,
                Err(e) => {
                    log_warn!("{}", CaptureError::from(e));
                    return StopReason::ReadFailure;
                }
            };

            if self.config.preview() {
                if let Err(e) = surface.0.show(&frame) {
                    log_error!("{}", e);
                    return StopReason::SurfaceFailure;
                }
                if surface.0.poll_key().is_some_and(|key| key.is_cancel()) {
                    log_info!("recording cancelled");
                    return StopReason::UserCancelled;
                }
            }

            if self.sampler.should_save(clock.now()) {
                if let Err(e) = self.storage.save(&frame) {
                    self.failed_saves += 1;
                    log_warn!("{}", e);
                }
            }
        }
    }
}
