//! The invocation entry point.
//!
//! Every invocation goes `Received → Dispatched → {Succeeded, Failed}` in
//! one synchronous call. Nothing is retried and no state is kept between
//! invocations besides what the store holds.

use std::sync::Arc;

use marbles_core::Store;
use tracing::{debug, debug_span, warn};

use crate::config::ExecutorConfig;
use crate::handlers::{marble, seed, Context};
use crate::{Command, Error, Output, Registry, Response, Result};

/// Dispatches operations against a store.
///
/// The executor is stateless: it can be shared across threads and reused
/// for any number of invocations.
pub struct Executor {
    ctx: Context,
    registry: Registry,
    config: ExecutorConfig,
}

impl Executor {
    /// Executor over `store` with default configuration.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_config(store, ExecutorConfig::default())
    }

    /// Executor over `store` with the given configuration.
    pub fn with_config(store: Arc<dyn Store>, config: ExecutorConfig) -> Self {
        Self::with_registry(store, config, Registry::standard())
    }

    /// Executor dispatching through a custom registry.
    pub fn with_registry(store: Arc<dyn Store>, config: ExecutorConfig, registry: Registry) -> Self {
        Self {
            ctx: Context::new(store, &config),
            registry,
            config,
        }
    }

    /// The store this executor writes to.
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.ctx.store
    }

    /// Active configuration.
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Dispatch table in use.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Instantiation hook called by the host. Always succeeds, touches nothing.
    pub fn init<S: AsRef<str>>(&self, args: &[S]) -> Response {
        debug!(args = args.len(), "init");
        Response::success(None)
    }

    /// Invoke `operation` with string arguments.
    pub fn invoke<S: AsRef<str>>(&self, operation: &str, args: &[S]) -> Response {
        let args: Vec<&str> = args.iter().map(|s| s.as_ref()).collect();
        Response::from(self.dispatch(operation, &args))
    }

    /// Invoke with the host's raw argument list: the first element names
    /// the operation, the rest are its arguments. All must be UTF-8.
    pub fn invoke_raw<A: AsRef<[u8]>>(&self, raw: &[A]) -> Response {
        let parsed = raw
            .iter()
            .enumerate()
            .map(|(i, a)| {
                std::str::from_utf8(a.as_ref()).map_err(|e| {
                    Error::invalid_arguments("invoke", format!("argument {} is not UTF-8: {}", i, e))
                })
            })
            .collect::<Result<Vec<&str>>>();

        let result = parsed.and_then(|args| match args.split_first() {
            Some((operation, rest)) => self.dispatch(operation, rest),
            None => Err(Error::invalid_arguments("invoke", "no operation name given")),
        });
        Response::from(result)
    }

    /// Look up `operation` and run its handler.
    pub fn dispatch(&self, operation: &str, args: &[&str]) -> Result<Output> {
        let span = debug_span!("invoke", operation);
        let _guard = span.enter();
        debug!(args = args.len(), "received");

        let handler = self.registry.get(operation).ok_or_else(|| {
            let err = Error::UnknownOperation {
                name: operation.to_string(),
            };
            warn!(code = err.code(), "rejected");
            err
        })?;

        debug!("dispatched");
        match handler(&self.ctx, args) {
            Ok(output) => {
                debug!("succeeded");
                Ok(output)
            }
            Err(e) => {
                warn!(code = e.code(), error = %e, "failed");
                Err(e)
            }
        }
    }

    /// Run a typed command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(operation = cmd.name(), "execute");
        match cmd {
            Command::Read { key } => marble::read(&self.ctx, &key),
            Command::AddMarble {
                key,
                color,
                size,
                owner,
            } => marble::add_marble(&self.ctx, &key, &color, size, &owner),
            Command::ChangeOwner { key, owner } => marble::change_owner(&self.ctx, &key, &owner),
            Command::Delete { key } => marble::delete(&self.ctx, &key),
            Command::InitMarbles => seed::init_marbles(&self.ctx),
        }
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
