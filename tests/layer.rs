use metalog::{Log, Logger, MetaLayer, Severity};
use std::error::Error;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tracing::{debug, error, info, info_span, trace, warn};
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn test_events_become_records() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("traced.log");
    let logger = Arc::new(Logger::new(&path, Severity::Info, false));

    let subscriber = tracing_subscriber::registry().with(MetaLayer::new(Arc::clone(&logger)));

    tracing::subscriber::with_default(subscriber, || {
        trace!("too quiet");
        debug!("still too quiet");
        info!("service started");
        info_span!("request").in_scope(|| {
            warn!(user = "ferris", attempts = 3, "slow response");
        });
        error!("gave up");
    });

    let contents = fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();

    assert!(lines.len() == 3);
    assert!(lines[0].ends_with("INFO     service started"));
    assert!(lines[1].ends_with("WARNING  slow response | user: ferris | attempts: 3"));
    assert!(lines[2].ends_with("ERROR    gave up"));

    Ok(())
}

#[test]
fn test_own_events_are_ignored() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("quiet.log");
    let logger = Logger::new(&path, Severity::Debug, true);

    let subscriber = tracing_subscriber::registry().with(MetaLayer::new(logger));

    tracing::subscriber::with_default(subscriber, || {
        info!(target: "metalog", "about myself");
        info!(target: "metalog::logger", "about my internals");
        info!(target: "metalogger", "about someone else");
    });

    let contents = fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();

    assert!(lines.len() == 1);
    assert!(lines[0].ends_with("about someone else"));

    Ok(())
}

#[test]
fn test_write_failures_do_not_panic() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let logger = Arc::new(Logger::new(dir.path().join("gone.log"), Severity::Info, false));
    logger.dispose()?;

    let subscriber = tracing_subscriber::registry().with(MetaLayer::new(Arc::clone(&logger)));

    tracing::subscriber::with_default(subscriber, || {
        info!("dropped on the floor");
    });

    assert!(!logger.log_file().exists());

    Ok(())
}

#[test]
fn test_layer_accessors() {
    let layer = MetaLayer::new(Logger::new("layer.log", Severity::Error, false));

    assert!(layer.logger().minimum_severity() == Severity::Error);

    let logger = layer.into_inner();
    assert!(!logger.use_stream());
}
