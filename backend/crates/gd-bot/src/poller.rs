use crate::{AppContext, BotResult, ShutdownGuard, Update, dispatch};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};

/// Fixed pause after a failed poll
pub const POLL_ERROR_PAUSE: Duration = Duration::from_secs(3);

/// Fetch one batch of updates from `offset` and handle them in order.
/// Returns the offset for the next poll.
pub async fn poll_once(ctx: &AppContext, offset: i64) -> BotResult<i64> {
    let updates = ctx
        .telegram
        .get_updates(offset, ctx.config.telegram.poll_timeout_secs)
        .await?;

    Ok(dispatch_all(ctx, offset, updates).await)
}

async fn dispatch_all(ctx: &AppContext, mut offset: i64, updates: Vec<Update>) -> i64 {
    for update in updates {
        offset = offset.max(update.update_id + 1);
        dispatch(ctx, update).await;
    }
    offset
}

/// Long-poll until shutdown. Events are handled one at a time; a failed
/// poll is logged and retried after [`POLL_ERROR_PAUSE`].
pub async fn run_polling(ctx: Arc<AppContext>, mut shutdown: ShutdownGuard) {
    info!("Polling for updates");
    let mut offset = 0;

    while !shutdown.is_shutdown() {
        let polled = tokio::select! {
            _ = shutdown.wait() => break,
            result = ctx
                .telegram
                .get_updates(offset, ctx.config.telegram.poll_timeout_secs) => result,
        };

        match polled {
            Ok(updates) => {
                // A workflow in flight finishes before shutdown is observed
                offset = dispatch_all(&ctx, offset, updates).await;
            }
            Err(e) => {
                error!("Polling failed: {}", e);
                ctx.metrics.poll_error();

                tokio::select! {
                    _ = shutdown.wait() => break,
                    _ = tokio::time::sleep(POLL_ERROR_PAUSE) => {}
                }
            }
        }
    }

    info!("Polling stopped");
}
