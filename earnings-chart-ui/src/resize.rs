//! Throttled delivery of viewport widths.

use earnings_utils::throttle::Throttle;
use futures::{FutureExt, Stream, StreamExt};
use std::future::Future;

/// Forward `values` to `emit`, at most once per throttle window.
///
/// The first value after a quiet period opens a window and awaits `sleep()`.
/// Everything already queued when the sleep ends is folded in, and only the
/// latest value is emitted. Returns once `values` ends.
pub async fn throttle_latest<T, S, Sleep, Fut, Emit>(mut values: S, mut sleep: Sleep, mut emit: Emit)
where
    S: Stream<Item = T> + Unpin,
    Sleep: FnMut() -> Fut,
    Fut: Future<Output = ()>,
    Emit: FnMut(T),
{
    let mut throttle = Throttle::new();
    let mut closed = false;

    while !closed {
        let Some(value) = values.next().await else {
            break;
        };
        if !throttle.call(value) {
            continue;
        }

        sleep().await;
        loop {
            match values.next().now_or_never() {
                Some(Some(value)) => {
                    throttle.call(value);
                }
                Some(None) => {
                    closed = true;
                    break;
                }
                None => break,
            }
        }

        if let Some(value) = throttle.fire() {
            emit(value);
        }
    }
}
