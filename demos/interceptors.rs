//! Global + local interceptor chain with the built-in tracing logger.
//!
//! Run with: `cargo run --example interceptors --features logging`

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use topicbus::{
    BusConfig, ChannelBus, Event, InterceptorFn, InterceptorRef, ListenerError, ListenerFn,
    ListenerRef, LogInterceptor,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Global chain: every subscription gets delivery logging.
    let mut config = BusConfig::default();
    config.interceptors = vec![Arc::new(LogInterceptor::new())];
    let bus = ChannelBus::new(config);

    // Local chain: only the payments subscription gets the audit line.
    let audit: InterceptorRef = InterceptorFn::arc(|next: ListenerRef| -> ListenerRef {
        ListenerFn::arc(move |ctx: CancellationToken, event: Event| {
            let next = Arc::clone(&next);
            async move {
                tracing::info!(topic = event.topic(), "audit: delivery admitted");
                next.call(ctx, event).await
            }
        })
    });

    bus.subscribe(
        CancellationToken::new(),
        "payments",
        ListenerFn::arc(|_ctx: CancellationToken, event: Event| async move {
            if event.message().is_empty() {
                return Err(ListenerError::fail("empty payment payload"));
            }
            Ok(())
        }),
        vec![audit],
    )
    .await?;

    let accepted = Event::new()
        .with_topic("payments")
        .with_message(b"order-42".to_vec());
    bus.publish(CancellationToken::new(), accepted).await?;

    // The listener rejects this one; only the interceptor chain sees it.
    let rejected = Event::new().with_topic("payments");
    bus.publish(CancellationToken::new(), rejected).await?;

    bus.shutdown(CancellationToken::new()).await?;
    Ok(())
}
