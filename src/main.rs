use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing_subscriber::EnvFilter;

use thermit::{key, Event, EventSource, TtyInput, Wait};

#[derive(Parser)]
#[command(name = "thermit", about = "Echo terminal input events as they arrive")]
struct Cli {
    /// Per-read timeout in milliseconds; negative waits indefinitely,
    /// 0 polls once per loop iteration
    #[arg(long, default_value_t = 1000)]
    timeout_ms: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // ── Terminal setup ──────────────────────────────────────────
    // This binary is the handle's owner: it flips raw mode on and is
    // responsible for flipping it back. The library never touches modes.
    enable_raw_mode()?;

    // Panic hook: restore the terminal before printing the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        original_hook(info);
    }));

    let result = run(cli.timeout_ms);

    // ── Terminal teardown ───────────────────────────────────────
    disable_raw_mode()?;

    result
}

fn run(timeout_ms: i32) -> Result<()> {
    let mut stdout = io::stdout();
    let mut tty = TtyInput::open();
    let mut source = EventSource::new(&mut tty);

    write!(stdout, "press keys to see their codes, q / Esc / Ctrl-C quits\r\n")?;
    stdout.flush()?;

    loop {
        // Raw mode is active, so every line needs an explicit \r.
        match source.read_event(Wait::from_millis(timeout_ms))? {
            Event::Key(code) if code == u16::from(b'q') => break,
            Event::Key(key::KEY_ESC) | Event::Key(0x03) => break,
            Event::Key(code) => write!(stdout, "key {code:#06x}\r\n")?,
            Event::Resize => {
                let (cols, rows) = crossterm::terminal::size()?;
                write!(stdout, "resize to {cols}x{rows}\r\n")?;
            }
            Event::Timeout => write!(stdout, "timeout\r\n")?,
            Event::None => {}
        }
        stdout.flush()?;
    }

    Ok(())
}
