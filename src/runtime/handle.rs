use std::path::PathBuf;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{broadcast, mpsc, oneshot};

use crate::{
    adif::parser::{parse_adif, parse_file},
    core::{session::QslLog, store::RecordSet},
    error::ReadError,
    qso::QsoRecord,
    types::{BandFilter, FilterKind},
};

use super::events::QslEvent;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("runtime channel closed")]
    ChannelClosed,
    #[error("parse task failed: {0}")]
    Join(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub command_queue_bound: usize,
    pub event_queue_bound: usize,
    /// Parse on tokio's blocking pool instead of the runtime loop task.
    pub parse_on_blocking_pool: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_queue_bound: 256,
            event_queue_bound: 1024,
            parse_on_blocking_pool: true,
        }
    }
}

pub struct QslLogHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<QslEvent>,
}

impl Clone for QslLogHandle {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
            events_tx: self.events_tx.clone(),
        }
    }
}

enum Command {
    LoadFile {
        path: PathBuf,
        resp: oneshot::Sender<Result<usize, RuntimeError>>,
    },
    LoadText {
        content: String,
        resp: oneshot::Sender<Result<usize, RuntimeError>>,
    },
    Filter {
        kind: FilterKind,
        band: BandFilter,
        resp: oneshot::Sender<Vec<QsoRecord>>,
    },
    Query {
        kind: FilterKind,
        band: BandFilter,
        resp: oneshot::Sender<Vec<QsoRecord>>,
    },
    Bands {
        resp: oneshot::Sender<Vec<String>>,
    },
    Len {
        resp: oneshot::Sender<usize>,
    },
    Clear {
        resp: oneshot::Sender<()>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Starts the loop that owns `log`. Loads run to completion before the next
/// command is served, so readers never see a half-replaced set.
pub fn spawn_qsl_log(log: QslLog, config: RuntimeConfig) -> QslLogHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound.max(1));
    let (events_tx, _) = broadcast::channel::<QslEvent>(config.event_queue_bound.max(1));

    let events_tx_loop = events_tx.clone();

    tokio::spawn(async move {
        let mut log = log;
        while let Some(cmd) = cmd_rx.recv().await {
            let done = handle_command(cmd, &mut log, &events_tx_loop, &config).await;
            if done {
                break;
            }
        }
        debug!("qsl log runtime stopped");
    });

    QslLogHandle { cmd_tx, events_tx }
}

impl QslLogHandle {
    pub fn subscribe(&self) -> broadcast::Receiver<QslEvent> {
        self.events_tx.subscribe()
    }

    pub async fn load_file(&self, path: impl Into<PathBuf>) -> Result<usize, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::LoadFile {
                path: path.into(),
                resp: tx,
            })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    pub async fn load_text(&self, content: impl Into<String>) -> Result<usize, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::LoadText {
                content: content.into(),
                resp: tx,
            })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    pub async fn filter(&self, kind: FilterKind, band: BandFilter) -> Result<Vec<QsoRecord>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Filter { kind, band, resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    pub async fn query(&self, kind: FilterKind, band: BandFilter) -> Result<Vec<QsoRecord>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Query { kind, band, resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    pub async fn bands(&self) -> Result<Vec<String>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Bands { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    pub async fn len(&self) -> Result<usize, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Len { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    pub async fn clear(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Clear { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Shutdown { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }
}

async fn handle_command(
    cmd: Command,
    log: &mut QslLog,
    events_tx: &broadcast::Sender<QslEvent>,
    config: &RuntimeConfig,
) -> bool {
    match cmd {
        Command::LoadFile { path, resp } => {
            let res = load_file(path, config).await;
            let _ = resp.send(install(res, log, events_tx));
        }
        Command::LoadText { content, resp } => {
            let res = load_text(content, config).await;
            let _ = resp.send(install(res, log, events_tx));
        }
        Command::Filter { kind, band, resp } => {
            let out = log.filter_records(kind, &band).into_iter().cloned().collect();
            let _ = resp.send(out);
        }
        Command::Query { kind, band, resp } => {
            let out = log.query(kind, &band).into_iter().cloned().collect();
            let _ = resp.send(out);
        }
        Command::Bands { resp } => {
            let _ = resp.send(log.bands());
        }
        Command::Len { resp } => {
            let _ = resp.send(log.records().len());
        }
        Command::Clear { resp } => {
            log.clear();
            let _ = events_tx.send(QslEvent::Cleared);
            let _ = resp.send(());
        }
        Command::Shutdown { resp } => {
            let _ = resp.send(());
            return true;
        }
    }

    false
}

fn install(
    res: Result<RecordSet, RuntimeError>,
    log: &mut QslLog,
    events_tx: &broadcast::Sender<QslEvent>,
) -> Result<usize, RuntimeError> {
    match res {
        Ok(set) => {
            let source = set.source().map(|p| p.to_path_buf());
            let records = log.replace(set);
            let _ = events_tx.send(QslEvent::Loaded { records, source });
            Ok(records)
        }
        Err(err) => {
            warn!("load failed: {err}");
            let _ = events_tx.send(QslEvent::LoadFailed {
                message: err.to_string(),
            });
            Err(err)
        }
    }
}

async fn load_file(path: PathBuf, config: &RuntimeConfig) -> Result<RecordSet, RuntimeError> {
    if !config.parse_on_blocking_pool {
        return Ok(parse_file(&path)?);
    }
    tokio::task::spawn_blocking(move || parse_file(&path))
        .await
        .map_err(|e| RuntimeError::Join(e.to_string()))?
        .map_err(RuntimeError::from)
}

async fn load_text(content: String, config: &RuntimeConfig) -> Result<RecordSet, RuntimeError> {
    if !config.parse_on_blocking_pool {
        return Ok(RecordSet::from_records(parse_adif(&content)));
    }
    tokio::task::spawn_blocking(move || RecordSet::from_records(parse_adif(&content)))
        .await
        .map_err(|e| RuntimeError::Join(e.to_string()))
}
