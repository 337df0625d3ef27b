//! Latest-value broadcast built on `tokio::sync::watch`.

use tokio::sync::watch;

/// A broadcast cell holding the latest published value.
///
/// Subscribers observe values in publish order; the only permitted skip
/// is coalescing, where a value that was never consumed is replaced by
/// the next one. Publishing is wait-free with respect to subscribers,
/// however slow or numerous.
#[derive(Debug)]
pub struct ChangeFeed<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + Send + Sync + 'static> ChangeFeed<T> {
    /// Create a feed seeded with an initial value.
    ///
    /// A feed always has a current value; subscribers joining later see
    /// whatever is current at that moment, not history.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the current value and wake every active subscriber.
    ///
    /// Never blocks, even when subscribers are slow or gone.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Clone of the current value.
    pub fn latest(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Open a fresh live subscription starting at the current value.
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of currently active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// One subscriber's live view of a [`ChangeFeed`].
///
/// Dropping the subscription ends delivery for this subscriber only;
/// other subscribers and the publisher are unaffected.
#[derive(Debug)]
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// The value as of now, consumed: a following [`next`](Self::next)
    /// only yields values published after this call.
    pub fn current(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next value published after the last one seen.
    ///
    /// Values that were published but never consumed in between are
    /// skipped (latest-value-wins). Returns `None` once the feed has
    /// been dropped.
    pub async fn next(&mut self) -> Option<T> {
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_) => None,
        }
    }

    /// End delivery to this subscriber. Equivalent to dropping.
    pub fn unsubscribe(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_initial_value_is_visible() {
        let feed = ChangeFeed::new(7u32);
        let mut sub = feed.subscribe();
        assert_eq!(sub.current(), 7);
        assert_eq!(feed.latest(), 7);
    }

    #[tokio::test]
    async fn test_publish_reaches_subscriber() {
        let feed = ChangeFeed::new(0u32);
        let mut sub = feed.subscribe();
        feed.publish(1);
        assert_eq!(sub.next().await, Some(1));
    }

    #[tokio::test]
    async fn test_lagging_subscriber_sees_latest_only() {
        let feed = ChangeFeed::new(0u32);
        let mut sub = feed.subscribe();

        feed.publish(1);
        feed.publish(2);
        feed.publish(3);

        assert_eq!(sub.next().await, Some(3));
        // Nothing further is pending; the intermediate values are gone.
        assert!(timeout(Duration::from_millis(20), sub.next()).await.is_err());
    }

    #[tokio::test]
    async fn test_publish_never_blocks_on_sleepy_subscriber() {
        let feed = ChangeFeed::new(0u32);
        let _sleepy = feed.subscribe();
        for i in 0..10_000u32 {
            feed.publish(i);
        }
        assert_eq!(feed.latest(), 9_999);
    }

    #[tokio::test]
    async fn test_unsubscribe_leaves_others_live() {
        let feed = ChangeFeed::new(0u32);
        let mut keep = feed.subscribe();
        let gone = feed.subscribe();
        assert_eq!(feed.subscriber_count(), 2);

        gone.unsubscribe();
        assert_eq!(feed.subscriber_count(), 1);

        feed.publish(5);
        assert_eq!(keep.next().await, Some(5));
    }

    #[tokio::test]
    async fn test_subscriptions_start_fresh_without_replay() {
        let feed = ChangeFeed::new(0u32);
        feed.publish(1);
        feed.publish(2);

        let mut sub = feed.subscribe();
        assert_eq!(sub.current(), 2);
        assert!(timeout(Duration::from_millis(20), sub.next()).await.is_err());
    }

    #[tokio::test]
    async fn test_dropped_feed_ends_the_stream() {
        let feed = ChangeFeed::new(0u32);
        let mut sub = feed.subscribe();
        drop(feed);
        assert_eq!(sub.next().await, None);
    }

    #[tokio::test]
    async fn test_values_arrive_in_publish_order_when_consumed() {
        let feed = ChangeFeed::new(0u32);
        let mut sub = feed.subscribe();
        for i in 1..=5u32 {
            feed.publish(i);
            assert_eq!(sub.next().await, Some(i));
        }
    }
}
