use super::pcm::{decode_f32le, write_wav_f32_mono};
use super::{AudioAsset, SpeechError, SpeechSynthesizer};
use crate::config::SpeechConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, instrument};

const API_VERSION: &str = "2024-06-10";
const OUTPUT_FILE: &str = "response.wav";

/// Requests raw f32 PCM from a Cartesia-style `POST /tts/bytes` endpoint and stores it as
/// `response.wav` in the output directory, overwriting the previous reply.
pub struct HttpSpeechSynthesizer {
    client: Client,
    base_url: String,
    api_key: String,
    voice_id: String,
    model_id: String,
    sample_rate: u32,
    output_dir: PathBuf,
}

impl HttpSpeechSynthesizer {
    pub fn from_config(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
            voice_id: config.voice_id.clone(),
            model_id: config.model_id.clone(),
            sample_rate: config.sample_rate,
            output_dir: config.output_dir.clone(),
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpSpeechSynthesizer {
    #[instrument(skip(self, text), fields(chars = text.len()))]
    async fn synthesize(&self, text: &str) -> Result<AudioAsset, SpeechError> {
        let body = json!({
            "model_id": self.model_id,
            "transcript": text,
            "voice": { "mode": "id", "id": self.voice_id },
            "output_format": {
                "container": "raw",
                "encoding": "pcm_f32le",
                "sample_rate": self.sample_rate,
            },
        });

        let response = self
            .client
            .post(format!("{}/tts/bytes", self.base_url))
            .header("X-API-Key", &self.api_key)
            .header("Cartesia-Version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechError::Transport(format!("Speech request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SpeechError::Http { status, message });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Transport(format!("Failed to read audio body: {e}")))?;
        let samples = decode_f32le(&bytes)?;
        debug!(samples = samples.len(), "Audio received");

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(OUTPUT_FILE);
        let sample_rate = self.sample_rate;
        let target = path.clone();
        tokio::task::spawn_blocking(move || write_wav_f32_mono(&target, &samples, sample_rate))
            .await
            .map_err(|e| SpeechError::Encoding(format!("WAV writer task failed: {e}")))??;

        let generated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Ok(AudioAsset { path, generated_at })
    }
}
