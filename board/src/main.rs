//! Terminal front-end for a remote todo list.
//!
//! # Design
//! One task owns the `TodoBoard` and is its only writer. It multiplexes two
//! event sources: lines typed on stdin and completions of in-flight requests.
//! Each request effect runs on a blocking worker so the prompt stays
//! responsive; its completion comes back over a channel and is reduced in
//! arrival order. The board itself drops stale completions.

mod command;
mod config;
mod render;
mod transport;

use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use todo_board_core::{
    Action, BoardError, Completion, Effect, Pagination, TodoBoard, TodoClient, Transport,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::command::Command;
use crate::config::Config;
use crate::transport::UreqTransport;

/// How long quitting waits for requests that are already out.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    info!(base_url = %config.base_url, page_size = config.page_size, "starting board");

    let transport = UreqTransport::new();
    let mut board = TodoBoard::new(
        TodoClient::new(&config.base_url),
        Pagination::new(config.page_size),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();

    if let Some(effect) = board.reduce(Action::Load)? {
        spawn_effect(effect, &transport, &tx);
    }
    println!("{}", render::help());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", render::help()),
                    Ok(Command::Show) => print!("{}", render::board(&board)),
                    Ok(Command::Act(action)) => match board.reduce(action) {
                        Ok(Some(effect)) => spawn_effect(effect, &transport, &tx),
                        Ok(None) => print!("{}", render::board(&board)),
                        Err(e) => println!("{e}"),
                    },
                    Err(e) => println!("{e}"),
                }
            }
            Some(completion) = rx.recv() => {
                board.reduce(Action::Completed(completion))?;
                print!("{}", render::board(&board));
            }
        }
    }

    drain(&mut board, &mut rx, DRAIN_TIMEOUT).await?;
    if board.last_error().is_some() {
        print!("{}", render::board(&board));
    }
    Ok(())
}

/// Reduce completions of requests that are already out, giving up after
/// `limit`. Returns whether every request landed.
async fn drain(
    board: &mut TodoBoard,
    rx: &mut UnboundedReceiver<Completion>,
    limit: Duration,
) -> Result<bool, BoardError> {
    let landed = tokio::time::timeout(limit, async {
        while board.in_flight() > 0 {
            let Some(completion) = rx.recv().await else { break };
            board.reduce(Action::Completed(completion))?;
        }
        Ok::<_, BoardError>(())
    })
    .await;
    match landed {
        Ok(result) => result.map(|()| true),
        Err(_) => {
            warn!(in_flight = board.in_flight(), "gave up waiting for in-flight requests");
            Ok(false)
        }
    }
}

fn spawn_effect(effect: Effect, transport: &UreqTransport, tx: &UnboundedSender<Completion>) {
    let transport = transport.clone();
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        let response = transport.execute(&effect.request);
        if tx.send(effect.complete(response)).is_err() {
            debug!("board gone before the completion arrived");
        }
    });
}
