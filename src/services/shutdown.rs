use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Waits for SIGINT/SIGTERM, then runs registered callbacks in order.
///
/// The hook's [`CancellationToken`] is cancelled when the signal arrives, so
/// other tasks (for example `axum::serve(..).with_graceful_shutdown(..)`) can
/// stop on the same event. Cancelling the token by hand has the same effect as
/// a signal.
pub struct ShutdownHook {
    token: CancellationToken,
    callbacks: Vec<Callback>,
}

impl ShutdownHook {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            callbacks: Vec::new(),
        }
    }

    pub fn on_shutdown<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
        self
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Blocks until a signal arrives or the token is cancelled, then runs the
    /// callbacks.
    pub async fn wait(self) {
        info!("Running, press ctrl+c to quit");

        tokio::select! {
            () = signal() => {}
            () = self.token.cancelled() => {}
        }

        info!("Shutting down...");
        self.token.cancel();

        for callback in self.callbacks {
            callback();
        }
    }

    /// [`ShutdownHook::wait`] followed by process exit with status 0.
    pub async fn run(self) {
        self.wait().await;
        std::process::exit(0)
    }
}

impl Default for ShutdownHook {
    fn default() -> Self {
        Self::new()
    }
}

async fn signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
