use crate::clients::{LedgerClient, SessionClient};
use crate::config::{CafeConfig, ReasoningConfig};
use crate::dialogue::{OrderExtractor, ResponseGenerator};
use crate::ingest::{self, IngestError};
use crate::ledger_actor::{self, LedgerContext, LedgerError};
use crate::model::{Menu, OrderEntry};
use crate::reasoning::{OpenAiBackend, ReasoningBackend, RuleBasedBackend};
use crate::session_actor::{self, SessionContext, SessionError, TurnOutcome};
use crate::speech::{AudioAsset, HttpSpeechSynthesizer, SpeechSynthesizer};
use crate::store::{CsvOrderStore, OrderStore};
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("Setup failed: {0}")]
    Setup(String),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// Everything the system is assembled from.
pub struct SystemParts {
    pub backend: Arc<dyn ReasoningBackend>,
    pub store: Option<Arc<dyn OrderStore>>,
    pub speech: Option<Arc<dyn SpeechSynthesizer>>,
    pub reasoning: ReasoningConfig,
    pub menu: Menu,
    pub buffer_size: usize,
}

impl SystemParts {
    /// Parts with no store, no speech and an empty menu.
    pub fn new(backend: Arc<dyn ReasoningBackend>) -> Self {
        Self {
            backend,
            store: None,
            speech: None,
            reasoning: ReasoningConfig::default(),
            menu: Menu::default(),
            buffer_size: 32,
        }
    }
}

/// The outcome of one customer utterance as the front end presents it.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub reply: String,
    /// Set when the utterance completed an order.
    pub order: Option<OrderEntry>,
    pub audio: Option<AudioAsset>,
}

/// Runtime orchestrator for the café assistant.
///
/// `CafeSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the session and ledger actors
/// - **Dependency Wiring**: handing the session a `LedgerClient` and the reasoning backend
/// - **Outer plumbing**: menu uploads and speech synthesis around the conversation core
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::new(SystemParts::new(backend));
///
/// system.upload_menu(Path::new("menu.txt")).await?;
/// let turn = system.voice_interaction("A large latte please").await?;
/// let turn = system.voice_interaction("To go").await?;
/// assert!(turn.order.is_some());
///
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    /// Client for the Session actor
    pub session: SessionClient,

    /// Client for the Ledger actor
    pub ledger: LedgerClient,

    backend: Arc<dyn ReasoningBackend>,
    speech: Option<Arc<dyn SpeechSynthesizer>>,

    /// Task handles, session first (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Spawn both actors. Must be called inside a Tokio runtime.
    pub fn new(parts: SystemParts) -> Self {
        // 1. Create actors (no dependencies)
        let (ledger_actor, ledger) = ledger_actor::new(parts.buffer_size);
        let (session_actor, session) = session_actor::new(parts.menu, parts.buffer_size);

        // 2. Start actors with injected context
        let ledger_handle = tokio::spawn(ledger_actor.run(LedgerContext::new(parts.store)));

        let timeout = Duration::from_secs(parts.reasoning.timeout_secs);
        let context = SessionContext {
            generator: ResponseGenerator::from_config(Arc::clone(&parts.backend), &parts.reasoning),
            extractor: OrderExtractor::new(Arc::clone(&parts.backend), timeout),
            ledger: ledger.clone(),
        };
        let session_handle = tokio::spawn(session_actor.run(context));

        Self {
            session,
            ledger,
            backend: parts.backend,
            speech: parts.speech,
            handles: vec![session_handle, ledger_handle],
        }
    }

    /// Build the adapters `config` asks for and start the system.
    ///
    /// `offline` swaps the model endpoint for [`RuleBasedBackend`] and disables speech.
    pub fn from_config(config: &CafeConfig, menu: Menu, offline: bool) -> Result<Self, SystemError> {
        let backend: Arc<dyn ReasoningBackend> = if offline {
            Arc::new(RuleBasedBackend::new())
        } else {
            Arc::new(OpenAiBackend::from_config(&config.reasoning).map_err(|e| SystemError::Setup(e.to_string()))?)
        };

        let store = config
            .store
            .orders_csv
            .as_ref()
            .map(|path| Arc::new(CsvOrderStore::new(path.clone())) as Arc<dyn OrderStore>);

        let speech = if config.speech.enabled && !offline {
            let synth = HttpSpeechSynthesizer::from_config(&config.speech).map_err(|e| SystemError::Setup(e.to_string()))?;
            Some(Arc::new(synth) as Arc<dyn SpeechSynthesizer>)
        } else {
            None
        };

        Ok(Self::new(SystemParts {
            backend,
            store,
            speech,
            reasoning: config.reasoning.clone(),
            menu,
            buffer_size: config.session.buffer,
        }))
    }

    /// Handle one customer utterance and render the reply as audio when speech is on.
    #[instrument(skip(self))]
    pub async fn voice_interaction(&self, utterance: &str) -> Result<Interaction, SystemError> {
        let outcome = self.session.handle_utterance(utterance).await?;
        let reply = outcome.text().to_string();
        let audio = self.speak(&reply).await;
        let order = match outcome {
            TurnOutcome::OrderPlaced(entry) => Some(entry),
            TurnOutcome::Replied(_) => None,
        };
        Ok(Interaction { reply, order, audio })
    }

    async fn speak(&self, text: &str) -> Option<AudioAsset> {
        let speech = self.speech.as_ref()?;
        match speech.synthesize(text).await {
            Ok(asset) => Some(asset),
            Err(e) => {
                warn!(error = %e, "Speech synthesis failed, replying without audio");
                None
            }
        }
    }

    /// Load a menu file and make it the active menu. Returns the item count.
    #[instrument(skip(self))]
    pub async fn upload_menu(&self, path: &Path) -> Result<usize, SystemError> {
        let menu = ingest::load_menu(path, self.backend.as_ref()).await?;
        Ok(self.session.set_menu(menu).await?)
    }

    pub async fn orders(&self) -> Result<Vec<OrderEntry>, SystemError> {
        Ok(self.ledger.list().await?)
    }

    pub async fn revenue(&self) -> Result<Decimal, SystemError> {
        Ok(self.ledger.revenue().await?)
    }

    pub async fn reset_orders(&self) -> Result<usize, SystemError> {
        Ok(self.ledger.reset().await?)
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the channels. The session goes first; it holds the last
    /// other `LedgerClient` clone, so the ledger can only finish after it.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.session);
        drop(self.ledger);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTask(format!("{e:?}")));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
