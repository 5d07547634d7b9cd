//! End-to-end flows through a real CafeSystem (both actors running) with a scripted model.

use async_trait::async_trait;
use cafe_assistant::config::CafeConfig;
use cafe_assistant::dialogue::prompts::ORDER_CONFIRMED;
use cafe_assistant::lifecycle::{CafeSystem, SystemParts};
use cafe_assistant::model::{Menu, MenuItem};
use cafe_assistant::reasoning::ScriptedBackend;
use cafe_assistant::speech::{AudioAsset, SpeechError, SpeechSynthesizer};
use cafe_assistant::store::{CsvOrderStore, OrderStore};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;

fn summary(name: &str, items: &str, total: &str) -> String {
    format!("Customer Name: {name}\nItems: {items}\nCustomizations: \nPrice Per Item: {total}\nOrder Total: {total}")
}

fn menu() -> Menu {
    Menu::new(vec![
        MenuItem::new("Latte", "Espresso with steamed milk.", Decimal::new(450, 2), "milk"),
        MenuItem::new("Scone", "Buttery.", Decimal::new(300, 2), "gluten"),
    ])
}

fn parts(backend: ScriptedBackend) -> SystemParts {
    SystemParts {
        menu: menu(),
        ..SystemParts::new(Arc::new(backend))
    }
}

#[tokio::test]
async fn test_round_trip() {
    let backend = ScriptedBackend::new()
        .with_text("Hi! What can I get you?")
        .with_text("Large or small?")
        .with_text("Anything else?")
        .with_text(summary("Sam", "Large Latte", "4.50"));
    let system = CafeSystem::new(parts(backend));

    for utterance in ["Hi there", "A latte please", "Large"] {
        let turn = system.voice_interaction(utterance).await.unwrap();
        assert!(turn.order.is_none());
    }
    assert_eq!(system.session.history().await.unwrap().len(), 6);
    assert_eq!(system.ledger.count().await.unwrap(), 0);

    let turn = system.voice_interaction("That's all, to go").await.unwrap();
    assert_eq!(turn.reply, ORDER_CONFIRMED);
    assert_eq!(turn.order.as_ref().unwrap().items, "Large Latte");
    assert!(turn.audio.is_none());

    assert!(system.session.history().await.unwrap().is_empty());
    let orders = system.orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_total, Decimal::new(450, 2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_kept_in_placement_order_then_reset() {
    let mut backend = ScriptedBackend::new();
    for name in ["Ana", "Ben", "Cy"] {
        backend = backend
            .with_text("Anything else?")
            .with_text(summary(name, "Scone", "3.00"));
    }
    let system = CafeSystem::new(parts(backend));

    for _ in 0..3 {
        system.voice_interaction("A scone").await.unwrap();
        system.voice_interaction("For here").await.unwrap();
    }

    let names: Vec<String> = system.orders().await.unwrap().into_iter().map(|o| o.customer_name).collect();
    assert_eq!(names, vec!["Ana", "Ben", "Cy"]);
    assert_eq!(system.revenue().await.unwrap(), Decimal::new(900, 2));

    assert_eq!(system.reset_orders().await.unwrap(), 3);
    assert_eq!(system.ledger.count().await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_completion_on_empty_conversation_records_empty_entry() {
    let backend = Arc::new(ScriptedBackend::new());
    let system = CafeSystem::new(SystemParts::new(backend.clone()));

    let turn = system.voice_interaction("to-go").await.unwrap();

    assert_eq!(turn.reply, ORDER_CONFIRMED);
    assert!(turn.order.unwrap().is_empty());
    assert_eq!(system.ledger.count().await.unwrap(), 1);
    assert!(backend.requests().await.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_survive_restart_with_csv_store() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn OrderStore> = Arc::new(CsvOrderStore::new(dir.path().join("orders.csv")));

    let backend = ScriptedBackend::new()
        .with_text("Large or small?")
        .with_text(summary("Sam", "Latte", "4.50"));
    let system = CafeSystem::new(SystemParts {
        store: Some(store.clone()),
        ..parts(backend)
    });
    system.voice_interaction("A latte").await.unwrap();
    system.voice_interaction("take away").await.unwrap();
    system.shutdown().await.unwrap();

    assert_eq!(store.list().await.unwrap().len(), 1);

    let restarted = CafeSystem::new(SystemParts {
        store: Some(store.clone()),
        ..parts(ScriptedBackend::new())
    });
    let orders = restarted.orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].customer_name, "Sam");

    restarted.reset_orders().await.unwrap();
    assert!(store.list().await.unwrap().is_empty());
    restarted.shutdown().await.unwrap();
}

struct BrokenSpeaker;

#[async_trait]
impl SpeechSynthesizer for BrokenSpeaker {
    async fn synthesize(&self, _text: &str) -> Result<AudioAsset, SpeechError> {
        Err(SpeechError::Transport("no route to host".into()))
    }
}

struct FixedSpeaker;

#[async_trait]
impl SpeechSynthesizer for FixedSpeaker {
    async fn synthesize(&self, _text: &str) -> Result<AudioAsset, SpeechError> {
        Ok(AudioAsset {
            path: PathBuf::from("static/response.wav"),
            generated_at: 42,
        })
    }
}

#[tokio::test]
async fn test_speech_failure_still_replies() {
    let system = CafeSystem::new(SystemParts {
        speech: Some(Arc::new(BrokenSpeaker)),
        ..parts(ScriptedBackend::new().with_text("Large or small?"))
    });

    let turn = system.voice_interaction("A latte").await.unwrap();
    assert_eq!(turn.reply, "Large or small?");
    assert!(turn.audio.is_none());
    assert_eq!(system.session.history().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reply_audio_is_attached() {
    let system = CafeSystem::new(SystemParts {
        speech: Some(Arc::new(FixedSpeaker)),
        ..parts(ScriptedBackend::new().with_text("Large or small?"))
    });

    let turn = system.voice_interaction("A latte").await.unwrap();
    assert_eq!(turn.audio.unwrap().url(), "static/response.wav?t=42");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_upload_menu_replaces_active_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.csv");
    std::fs::write(&path, "name,description,price,allergens\nCortado,Short and strong,3.75,milk\n").unwrap();

    let backend = Arc::new(ScriptedBackend::new().with_text("A cortado is $3.75."));
    let system = CafeSystem::new(SystemParts::new(backend.clone()));

    assert_eq!(system.upload_menu(&path).await.unwrap(), 1);
    system.voice_interaction("What's a cortado?").await.unwrap();

    let requests = backend.requests().await;
    assert!(requests[0].messages[0].content.contains("Cortado | $3.75 | milk"));

    let bad = system.upload_menu(&dir.path().join("menu.pdf")).await;
    assert!(bad.is_err());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_buffer_config_is_rejected_and_system_still_starts() {
    assert!(CafeConfig::from_toml_str("[session]\nbuffer = 0").is_err());

    let mut config = CafeConfig::default();
    config.session.buffer = 0;
    config.store.orders_csv = None;
    let system = CafeSystem::from_config(&config, menu(), true).unwrap();

    assert_eq!(system.ledger.count().await.unwrap(), 0);
    system.shutdown().await.unwrap();
}
