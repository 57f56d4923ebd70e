//! Office Punch
//!
//! This example walks one user through a working day at the Tech Park
//! office: a rejected punch from across town, a denied permission prompt,
//! then a check-in and a check-out from the desk.
//!
//! Run with: cargo run --example office_punch
//! Set RUST_LOG=geopunch=debug to see every evaluation.

use geopunch::builder::SessionBuilder;
use geopunch::config::AttendanceConfig;
use geopunch::core::Coordinate;
use geopunch::position::{AcquisitionError, ScriptedPositionSource};
use geopunch::session::TracingSink;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("geopunch=info")))
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    println!("=== Office Punch Example ===\n");

    let config = AttendanceConfig::default();
    let desk = Coordinate::new(12.9717, 77.5947)?;
    let across_town = Coordinate::new(12.9800, 77.6000)?;

    let source = ScriptedPositionSource::new([
        Ok(across_town),
        Err(AcquisitionError::PermissionDenied),
        Ok(desk),
        Ok(desk),
    ]);

    let mut session = SessionBuilder::new()
        .user_id("USER_123")
        .with_config(&config)?
        .source(source)
        .sink(TracingSink)
        .build()?;

    for attempt in 1..=4 {
        match session.punch().await {
            Ok(receipt) => println!(
                "Attempt {attempt}: {} at {} ({:.0}m from office)",
                receipt.status,
                receipt.timestamp.format("%H:%M:%S"),
                receipt.distance_meters
            ),
            Err(error) => println!(
                "Attempt {attempt}: rejected ({error}), still {}",
                session.status()
            ),
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
