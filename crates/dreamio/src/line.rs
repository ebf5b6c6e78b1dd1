use bytes::Bytes;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;

pub const DEFAULT_MAX_COMMAND_LEN: usize = 1024;

#[derive(Debug)]
pub struct CommandReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R> CommandReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: vec![0u8; DEFAULT_MAX_COMMAND_LEN],
        }
    }

    pub fn max_command_len(mut self, max: usize) -> Self {
        self.buf.resize(max.max(1), 0);
        self
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: AsyncRead + Unpin> CommandReader<R> {
    /// Read one command as a single bounded read.
    ///
    /// Returns:
    /// - `Ok(Some(bytes))` for a raw chunk (whatever arrived, up to the bound),
    /// - `Ok(None)` on clean EOF.
    ///
    /// Input larger than the bound is truncated by the read size, not rejected.
    pub async fn read_command(&mut self) -> std::io::Result<Option<Bytes>> {
        let n = self.inner.read(&mut self.buf).await?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(Bytes::copy_from_slice(&self.buf[..n])))
    }
}

/// Decode a raw chunk into a command: lossy UTF-8, trimmed, lowercased.
pub fn normalize(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim().to_lowercase()
}

#[derive(Debug)]
pub struct BlockWriter<W> {
    inner: W,
}

impl<W> BlockWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: AsyncWrite + Unpin> BlockWriter<W> {
    /// Write one text block terminated by CRLF, then flush.
    pub async fn send(&mut self, block: &str) -> std::io::Result<()> {
        self.inner.write_all(block.as_bytes()).await?;
        self.inner.write_all(b"\r\n").await?;
        self.inner.flush().await
    }
}
