use std::sync::Arc;

use dreamio::line::{normalize, BlockWriter, CommandReader};
use tokio::io::{AsyncRead, AsyncWrite};

use crate::story::Story;

/// Narrative states of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Menu,
    Forest,
    OraclePrompt,
    GuardianRedirect,
    Victory,
    Closed,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
    Disconnected,
}

/// One connection's interaction loop.
///
/// Owns its stream halves exclusively; nothing is shared between sessions
/// except the read-only `Story`.
#[derive(Debug)]
pub struct Session<R, W> {
    reader: CommandReader<R>,
    writer: BlockWriter<W>,
    story: Arc<Story>,
    stage: Stage,
    // A command typed into the crumble "Press Enter" wait is kept and
    // answered against the next riddle instead of being dropped.
    pending: Option<String>,
    turns: u64,
}

impl<R, W> Session<R, W> {
    pub fn new(rd: R, wr: W, story: Arc<Story>) -> Self {
        Self {
            reader: CommandReader::new(rd),
            writer: BlockWriter::new(wr),
            story,
            stage: Stage::Menu,
            pending: None,
            turns: 0,
        }
    }

    /// Inbound reads consumed so far (choices and Enter waits alike).
    pub fn turns(&self) -> u64 {
        self.turns
    }
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> Session<R, W> {
    /// Drive the state machine until a terminal stage.
    ///
    /// EOF anywhere is a clean disconnect (`Outcome::Disconnected`);
    /// read/write failures propagate as errors. Either way the stream is
    /// released when the session is dropped.
    pub async fn run(&mut self) -> std::io::Result<Outcome> {
        loop {
            match self.stage {
                Stage::Menu => self.menu().await?,
                Stage::OraclePrompt => self.oracle().await?,
                Stage::GuardianRedirect => self.guardian_wait().await?,
                Stage::Forest => return Ok(Outcome::Defeat),
                Stage::Victory => return Ok(Outcome::Victory),
                Stage::Closed => return Ok(Outcome::Disconnected),
            }
        }
    }

    async fn menu(&mut self) -> std::io::Result<()> {
        self.writer.send(self.story.welcome()).await?;
        let Some(cmd) = self.next_command().await? else {
            self.stage = Stage::Closed;
            return Ok(());
        };
        match cmd.as_str() {
            "a" => {
                self.writer.send(self.story.forest_defeat()).await?;
                self.stage = Stage::Forest;
            }
            "b" => self.stage = Stage::OraclePrompt,
            "c" => {
                self.writer.send(self.story.guardian_redirect()).await?;
                self.stage = Stage::GuardianRedirect;
            }
            _ => {
                // Unrecognized input re-prompts, never closes.
                self.writer.send(self.story.invalid_choice()).await?;
            }
        }
        Ok(())
    }

    async fn oracle(&mut self) -> std::io::Result<()> {
        self.writer.send(self.story.riddle()).await?;
        let cmd = match self.pending.take() {
            Some(cmd) => cmd,
            None => match self.next_command().await? {
                Some(cmd) => cmd,
                None => {
                    self.stage = Stage::Closed;
                    return Ok(());
                }
            },
        };
        match cmd.as_str() {
            "a" => {
                self.writer.send(&self.story.victory()).await?;
                self.stage = Stage::Victory;
            }
            "b" | "c" => {
                self.writer.send(self.story.crystal_crumbles()).await?;
                // Usually a bare Enter; anything typed here becomes the
                // answer to the re-shown riddle.
                match self.next_command().await? {
                    Some(line) if !line.is_empty() => self.pending = Some(line),
                    Some(_) => {}
                    None => self.stage = Stage::Closed,
                }
            }
            _ => {
                self.writer.send(self.story.invalid_choice()).await?;
            }
        }
        Ok(())
    }

    async fn guardian_wait(&mut self) -> std::io::Result<()> {
        // Any line (usually a bare Enter) returns to the menu.
        self.stage = match self.next_command().await? {
            Some(_) => Stage::Menu,
            None => Stage::Closed,
        };
        Ok(())
    }

    async fn next_command(&mut self) -> std::io::Result<Option<String>> {
        let Some(raw) = self.reader.read_command().await? else {
            return Ok(None);
        };
        self.turns += 1;
        Ok(Some(normalize(&raw)))
    }
}
