use bytes::Bytes;
use futures_util::Stream;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

/// `round(loaded / total * 100)`, or `None` when the total is unknown.
pub fn percent(loaded: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let ratio = (loaded.min(total) as f64) / (total as f64);
    Some((ratio * 100.0).round() as u8)
}

/// Counts bytes as the HTTP client pulls them from the inner body stream and
/// reports each change of the rounded percentage.
pub struct ProgressStream<S, F> {
    inner: S,
    loaded: u64,
    total: u64,
    last_percent: Option<u8>,
    on_progress: F,
}

impl<S, F> ProgressStream<S, F>
where
    S: Stream<Item = io::Result<Bytes>> + Unpin,
    F: FnMut(u8) + Unpin,
{
    pub fn new(inner: S, total: u64, on_progress: F) -> Self {
        Self {
            inner,
            loaded: 0,
            total,
            last_percent: None,
            on_progress,
        }
    }
}

impl<S, F> Stream for ProgressStream<S, F>
where
    S: Stream<Item = io::Result<Bytes>> + Unpin,
    F: FnMut(u8) + Unpin,
{
    type Item = io::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let polled = Pin::new(&mut this.inner).poll_next(cx);
        if let Poll::Ready(Some(Ok(chunk))) = &polled {
            this.loaded += chunk.len() as u64;
            if let Some(p) = percent(this.loaded, this.total) {
                if this.last_percent.map_or(true, |last| p > last) {
                    this.last_percent = Some(p);
                    (this.on_progress)(p);
                }
            }
        }
        polled
    }
}
