use {
    crate::{
        data::{PredictError, PredictionService},
        domain::{ResultSet, UploadedFile},
    },
    eframe::egui::Context,
    poll_promise::Promise,
    std::sync::Arc,
};

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Context as _, tokio::runtime::Runtime};

pub(crate) type PredictionPromise = Promise<Result<ResultSet, PredictError>>;

/// Runs prediction requests off the UI thread and hands back a promise to poll each frame.
pub(crate) struct PredictionDispatcher {
    service: Arc<dyn PredictionService>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Runtime,
}

impl PredictionDispatcher {
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn new(service: Arc<dyn PredictionService>) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("prediction-io")
            .enable_all()
            .build()
            .context("Failed to create the prediction runtime")?;
        Ok(Self { service, runtime })
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn new(service: Arc<dyn PredictionService>) -> anyhow::Result<Self> {
        Ok(Self { service })
    }

    /// NATIVE: spawned on the dedicated runtime.
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn dispatch(&self, ctx: &Context, file: UploadedFile) -> PredictionPromise {
        let (sender, promise) = Promise::new();
        let service = Arc::clone(&self.service);
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            sender.send(service.predict(file).await);
            ctx.request_repaint();
        });
        promise
    }

    /// WASM: spawned on the browser's event loop.
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn dispatch(&self, ctx: &Context, file: UploadedFile) -> PredictionPromise {
        let (sender, promise) = Promise::new();
        let service = Arc::clone(&self.service);
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            sender.send(service.predict(file).await);
            ctx.request_repaint();
        });
        promise
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use {
        super::*,
        crate::domain::PredictionPoint,
        async_trait::async_trait,
        std::time::{Duration, Instant},
    };

    struct Canned(Result<ResultSet, PredictError>);

    #[async_trait]
    impl PredictionService for Canned {
        async fn predict(&self, _file: UploadedFile) -> Result<ResultSet, PredictError> {
            self.0.clone()
        }
    }

    fn wait(promise: PredictionPromise) -> Result<ResultSet, PredictError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut promise = promise;
        loop {
            match promise.try_take() {
                Ok(outcome) => return outcome,
                Err(pending) => {
                    assert!(Instant::now() < deadline, "prediction never resolved");
                    promise = pending;
                    std::thread::sleep(Duration::from_millis(5));
                }
            }
        }
    }

    #[test]
    fn resolves_with_the_service_outcome() {
        let points = vec![PredictionPoint::new("2024-11-06T04:00:00Z", 72.5)];
        let dispatcher = PredictionDispatcher::new(Arc::new(Canned(Ok(points.clone())))).unwrap();
        let file = UploadedFile::new("scores.csv", None, b"Hour".to_vec());

        assert_eq!(wait(dispatcher.dispatch(&Context::default(), file)), Ok(points));
    }

    #[test]
    fn resolves_with_the_service_error() {
        let err = PredictError::Transport("boom".into());
        let dispatcher = PredictionDispatcher::new(Arc::new(Canned(Err(err.clone())))).unwrap();
        let file = UploadedFile::new("scores.csv", None, vec![]);

        assert_eq!(wait(dispatcher.dispatch(&Context::default(), file)), Err(err));
    }
}
