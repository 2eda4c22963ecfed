//! Simulated streaming of an already-complete response.
//!
//! The model call is not incremental; the streamer re-emits the finished,
//! formatted text as a finite sequence of growing prefixes, one character
//! per emission, with a small pacing delay. History is never touched here.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;

/// Wrap a raw completion in the fixed response template.
pub fn format_response(content: &str) -> String {
    format!("### Chatbot's Response\n**{content}**\n---\n")
}

/// Finite stream of growing prefixes of one formatted response. Not
/// restartable; every [`ResponseStreamer::stream`] call starts from empty.
pub struct ResponseStream {
    inner: Pin<Box<dyn Stream<Item = String> + Send>>,
}

impl ResponseStream {
    pub fn new(inner: Pin<Box<dyn Stream<Item = String> + Send>>) -> Self {
        Self { inner }
    }
}

impl Stream for ResponseStream {
    type Item = String;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

#[derive(Debug, Clone)]
pub struct ResponseStreamer {
    delay: Duration,
}

impl ResponseStreamer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Emit `formatted` as accumulated prefixes, one more character each
    /// time, paced by the configured delay (`Duration::ZERO` disables
    /// pacing). Emission count equals the character count; growth is
    /// strictly monotonic.
    pub fn stream(&self, formatted: String) -> ResponseStream {
        let delay = self.delay;
        ResponseStream::new(Box::pin(async_stream::stream! {
            let mut accumulated = String::with_capacity(formatted.len());
            for ch in formatted.chars() {
                accumulated.push(ch);
                yield accumulated.clone();
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
        }))
    }
}

impl Default for ResponseStreamer {
    fn default() -> Self {
        Self::new(Duration::from_millis(5))
    }
}
