//! Dashboard command handler

use anyhow::Result;
use tokio::io::BufReader;

use wcgen::live::{transport, Dashboard, LiveUpdateChannel, Statistics};

use super::Context;

/// Human-readable dashboard counters, one per line.
pub fn render_statistics(stats: &Statistics) -> String {
    let fmt_count = |v: Option<u64>| v.map_or_else(|| "-".to_string(), |n| n.to_string());
    let mut out = format!(
        "Users: {}\nWord clouds: {}\nActive sessions: {}\n",
        fmt_count(stats.total_users),
        fmt_count(stats.total_wordclouds),
        fmt_count(stats.active_sessions),
    );
    for (key, value) in &stats.extra {
        out.push_str(&format!("{}: {}\n", key, value));
    }
    out
}

/// Fetch statistics once; with `follow`, apply live updates from stdin until EOF.
#[cfg(not(tarpaulin_include))]
pub async fn handle(ctx: &Context, follow: bool) -> Result<()> {
    let mut dashboard = Dashboard::new(ctx.api.clone(), ctx.config.api.request_timeout());

    match dashboard.load().await {
        Ok(stats) => print!("{}", render_statistics(stats)),
        Err(e) if follow => eprintln!("Warning: {}", e),
        Err(e) => return Err(e.into()),
    }
    if !follow {
        return Ok(());
    }

    let channel = LiveUpdateChannel::new();
    let mut subscription = channel.subscribe();
    let reader = tokio::spawn(async move {
        let stdin = BufReader::new(tokio::io::stdin());
        transport::pump(stdin, &channel).await
    });

    while let Some(stats) = dashboard.follow(&mut subscription).await {
        println!();
        print!("{}", render_statistics(stats));
    }

    let published = reader.await??;
    tracing::debug!(published, "live update stream ended");
    Ok(())
}
