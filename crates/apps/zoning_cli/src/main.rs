use std::sync::Arc;

use clap::Parser;
use client::{Backend, ClientConfig, HttpBackend};
use layers::symbology::Theme;
use session::{Event, EventLoop, EventSender, InfoPanel, Session, SessionOptions};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod command;
mod render;

use command::{Command, Query};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive parcel zoning session")]
struct Args {
    /// Backend base URL (default: $ZONING_BACKEND_URL)
    #[arg(long)]
    backend_url: Option<String>,

    /// MapTiler API key for the dark basemap (default: $ZONING_MAPTILER_KEY)
    #[arg(long)]
    maptiler_key: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Do not move the camera when parcels are selected
    #[arg(long)]
    no_auto_move: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the session output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ClientConfig::resolve(args.backend_url, args.maptiler_key)?;
    let http = HttpBackend::new(&config);
    info!(backend = %http.base_url(), "configuration loaded");

    let backend: Arc<dyn Backend> = Arc::new(http);
    let session = Session::new(SessionOptions {
        theme: if args.dark { Theme::Dark } else { Theme::Light },
        auto_move: !args.no_auto_move,
        maptiler_key: config.maptiler_key,
    });
    let mut event_loop = EventLoop::new(session, backend);

    let (query_tx, mut query_rx) = mpsc::unbounded_channel();
    tokio::spawn(read_commands(event_loop.sender(), query_tx));

    println!("{}", render::basemap(event_loop.session()));
    let start = event_loop.start();
    print_lines(render::tick(&start));

    let mut was_animating = false;
    loop {
        // Events queued before a query are handled before it is answered.
        tokio::select! {
            biased;
            tick = event_loop.next() => {
                let Some(tick) = tick else { break };
                print_lines(render::tick(&tick));
                if was_animating && !tick.animating {
                    println!("{}", render::camera(&tick));
                }
                was_animating = tick.animating;
            }
            Some(query) = query_rx.recv() => answer(query, event_loop.session()),
        }
    }

    info!("session closed");
    Ok(())
}

/// Reads stdin line by line until EOF or `quit`, forwarding events to the loop.
async fn read_commands(events: EventSender, queries: mpsc::UnboundedSender<Query>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("stdin read failed: {e}");
                break;
            }
        };
        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Dispatch(event))) => {
                if let Event::ZoningChosen(zoning) = &event
                    && !zoning.is_recognized()
                {
                    eprintln!("note: '{zoning}' is not a standard zoning class");
                }
                if !events.send(event) {
                    return;
                }
            }
            Ok(Some(Command::Query(query))) => {
                if queries.send(query).is_err() {
                    return;
                }
            }
            Ok(Some(Command::Quit)) => break,
            Err(msg) => eprintln!("{msg}"),
        }
    }
    events.quit();
}

fn answer(query: Query, session: &Session) {
    match query {
        Query::List => print!("{}", render::parcels(session)),
        Query::Info => {
            print!("{}", render::panel(&InfoPanel::build(session)));
            println!("{}", render::basemap(session));
        }
        Query::Help => println!("{}", command::usage()),
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
