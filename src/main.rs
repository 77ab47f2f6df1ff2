//! Birthday Greeter - main entry point.
//!
//! Invocation: `birthday-greeter <smtp-username> <smtp-password> <roster.csv>
//! [reference-date]` where the optional reference date is `YYYY-MM-DD` and
//! defaults to the current local date.

use anyhow::{bail, Context, Result};
use birthday_greeter::mailer::{Mailer, NoopMailer, SmtpMailer};
use birthday_greeter::{Config, GreetingService};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut args = std::env::args().skip(1);
    let username = args
        .next()
        .context("usage: birthday-greeter <smtp-username> <smtp-password> <roster.csv> [reference-date]")?;
    let password = args.next().context("missing SMTP password argument")?;
    let roster_path = args.next().context("missing roster file argument")?;
    let reference = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("invalid reference date (expected YYYY-MM-DD): {raw}"))?,
        None => Local::now().date_naive(),
    };

    let mailer: Arc<dyn Mailer> = if config.dry_run {
        info!("dry run: greetings will be logged, not sent");
        Arc::new(NoopMailer)
    } else {
        info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            secure = config.smtp_secure,
            "connecting SMTP transport"
        );
        Arc::new(SmtpMailer::new(&config, &username, &password)?)
    };

    let service = GreetingService::new(mailer);
    let summary = service.run(&roster_path, reference).await?;

    info!(
        matched = summary.matched,
        sent = summary.sent,
        failed = summary.failures.len(),
        "run complete"
    );

    if !summary.is_success() {
        bail!(
            "{} of {} greetings failed to send",
            summary.failures.len(),
            summary.matched
        );
    }

    Ok(())
}
