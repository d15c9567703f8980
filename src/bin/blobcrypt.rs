// src/bin/blobcrypt.rs
//! blobcrypt: encode/decode stdin to stdout
//!
//! Usage: `blobcrypt <encode|decode> [--binary]`
//!
//! Text mode reads UTF-8 text (encode) or a hex frame (decode). Binary mode
//! reads and writes raw bytes. The passphrase comes from
//! `BLOBCRYPT_PASSPHRASE` or an interactive prompt.

use anyhow::{bail, Context, Result};
use blobcrypt::{load_config, Codec, Payload};
use rpassword::prompt_password;
use std::io::{Read, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PASSPHRASE_ENV: &str = "BLOBCRYPT_PASSPHRASE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Encode,
    Decode,
}

fn main() -> Result<()> {
    let config = load_config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut mode = None;
    let mut binary = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "encode" => mode = Some(Mode::Encode),
            "decode" => mode = Some(Mode::Decode),
            "--binary" | "-b" => binary = true,
            other => bail!("unknown argument {other:?}\nusage: blobcrypt <encode|decode> [--binary]"),
        }
    }
    let mode = mode.context("usage: blobcrypt <encode|decode> [--binary]")?;

    let passphrase = match std::env::var(PASSPHRASE_ENV) {
        Ok(p) => p,
        Err(_) => prompt_password("Passphrase: ").context("failed to read passphrase")?,
    };

    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("failed to read stdin")?;

    let payload = if binary {
        Payload::Binary(input)
    } else {
        let text = String::from_utf8(input).context("stdin is not valid UTF-8")?;
        match mode {
            // Hex frames are usually piped with a trailing newline
            Mode::Decode => Payload::Text(text.trim_end().to_owned()),
            Mode::Encode => Payload::Text(text),
        }
    };

    info!(?mode, kind = ?payload.kind(), len = payload.len(), "processing stdin");

    let codec = Codec::from_config(config);
    let output = match mode {
        Mode::Encode => codec.encode(&passphrase, payload),
        Mode::Decode => codec.decode(&passphrase, payload),
    }
    .context("codec failed")?;

    let mut stdout = std::io::stdout().lock();
    match output {
        Payload::Text(s) => {
            stdout.write_all(s.as_bytes())?;
            if mode == Mode::Encode {
                stdout.write_all(b"\n")?;
            }
        }
        Payload::Binary(b) => stdout.write_all(&b)?,
    }
    stdout.flush()?;

    Ok(())
}
