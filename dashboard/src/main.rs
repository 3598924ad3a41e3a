//! Headless dashboard entry point.
//!
//! Renders a one-shot operational overview to stdout: headline stats, the
//! recent-transaction feed, and the monitoring widgets. Useful for smoke
//! checks against a running backend pair; the interactive front-end consumes
//! the same hooks through the library instead.

use std::sync::Arc;

use dashboard::app::AuthContext;
use dashboard::hooks::{DashboardHook, MonitoringHook};
use dashboard::services::ApiClient;
use dashboard::session::SessionStore;

#[tokio::main]
async fn main() {
    dashboard::debug::logger::init();

    let store = Arc::new(SessionStore::from_config());
    let client = Arc::new(ApiClient::new(Arc::clone(&store)));

    let auth = AuthContext::new(client.clone(), Arc::clone(&store));
    auth.initialize();

    if !auth.is_authenticated() {
        eprintln!("No stored session. Sign in through the dashboard first, or place a session file at the configured path.");
        std::process::exit(1);
    }

    if let Some(user) = auth.current_user() {
        println!("Signed in as {} <{}>", user.full_name(), user.email);
    }

    let dashboard_hook = DashboardHook::new(client.clone());
    let monitoring_hook = MonitoringHook::new(client.clone());
    tokio::join!(dashboard_hook.refetch(), monitoring_hook.refetch());

    let overview = dashboard_hook.snapshot();
    match overview.error {
        Some(error) => println!("Overview unavailable: {}", error),
        None => {
            let stats = &overview.stats;
            println!();
            println!("Total transactions : {}", stats.total_transactions);
            println!("Fraud detected     : {}", stats.fraud_detected);
            println!("Prevented losses   : ${:.2}", stats.prevented_losses);
            println!("Detection rate     : {:.1}%", stats.detection_rate);

            if !overview.recent_transactions.is_empty() {
                println!();
                println!("Recent activity:");
                for item in &overview.recent_transactions {
                    println!(
                        "  {:<20} {:>12}  {:<12} {:<10} {}",
                        item.name, item.amount, item.status, item.time, item.location
                    );
                }
            }
        }
    }

    let monitoring = monitoring_hook.snapshot();
    match monitoring.error {
        Some(error) => println!("Monitoring unavailable: {}", error),
        None => {
            if let Some(system) = monitoring.system {
                println!();
                println!(
                    "System status      : {}",
                    system.status.unwrap_or_else(|| "unknown".to_string())
                );
            }
            if let Some(risk) = monitoring.risk {
                println!(
                    "Risk level         : {} ({})",
                    risk.level.unwrap_or_else(|| "unknown".to_string()),
                    risk.score
                        .map(|score| format!("{:.0}", score))
                        .unwrap_or_else(|| "-".to_string())
                );
            }
        }
    }
}
