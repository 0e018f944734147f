//! Minimal end-to-end run: subscribe, publish a few events, shut down.
//!
//! Run with: `cargo run --example basic`

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use topicbus::{BusConfig, ChannelBus, Event, ListenerError, ListenerFn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = BusConfig::default();
    config.listener_timeout = Duration::from_secs(5);
    let bus = ChannelBus::new(config);

    bus.subscribe(
        CancellationToken::new(),
        "org.acme.users",
        ListenerFn::arc(|_ctx: CancellationToken, event: Event| async move {
            println!(
                "received on {}: {}",
                event.topic(),
                String::from_utf8_lossy(event.message())
            );
            Ok::<_, ListenerError>(())
        }),
        Vec::new(),
    )
    .await?;

    for i in 0..3 {
        let event = Event::new()
            .with_topic("org.acme.users")
            .with_message(format!("user-{i} registered").into_bytes());
        bus.publish(CancellationToken::new(), event).await?;
    }

    bus.shutdown(CancellationToken::new()).await?;
    Ok(())
}
