//! tcstack CLI - signed Tencent Cloud API calls from the command line.
//!
//! # Usage
//!
//! ```text
//! tcstack-cli translate <text> [source] [target]
//! tcstack-cli transcribe <base64-wav> [audio-key]
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `TENCENT_CLOUD_SECRET_ID` | API secret ID |
//! | `TENCENT_CLOUD_SECRET_KEY` | API secret key |
//! | `RUST_LOG` | Tracing filter (default `info`) |

use anyhow::{Context, Result, bail};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tcstack_auth::Credentials;
use tcstack_client::TcClient;
use tcstack_client::tmt::TextTranslateRequest;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let credentials = Credentials::from_env();
    if !credentials.is_configured() {
        warn!("credentials are not set; the remote service will reject the call");
    }
    let client = TcClient::new(credentials).context("failed to build HTTP client")?;

    match args.first().map(String::as_str) {
        Some("translate") => {
            let text = args.get(1).context("usage: translate <text> [source] [target]")?;
            let source = args.get(2).map_or("en", String::as_str);
            let target = args.get(3).map_or("zh", String::as_str);

            let translated = client
                .translate_text(&TextTranslateRequest::new(text, source, target))
                .await
                .context("translation call failed")?;
            println!("{}", translated.target_text);
        }
        Some("transcribe") => {
            let audio = args.get(1).context("usage: transcribe <base64-wav> [audio-key]")?;
            let key = args.get(2).map_or("cli", String::as_str);

            let transcription = client
                .transcribe_and_translate(audio, key)
                .await
                .context("transcription call failed")?;
            println!("{}", transcription.transcript);
            if let Some(translation) = transcription.translation {
                println!("{translation}");
            }
        }
        _ => bail!("usage: tcstack-cli <translate|transcribe> ..."),
    }

    Ok(())
}
