use metalog::{ErrorKind, Severity};
use tracing::Level;

#[test]
fn test_total_order() {
    for pair in Severity::ALL.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].rank() + 1 == pair[1].rank());
    }

    assert!(Severity::Debug < Severity::Info);
    assert!(Severity::Warning < Severity::Error);
    assert!(Severity::Critical == *Severity::ALL.iter().max().unwrap());
}

#[test]
fn test_names() {
    let names: Vec<String> = Severity::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]);

    assert_eq!(format!("{:<8}|", Severity::Info), "INFO    |");
}

#[test]
fn test_parse() -> Result<(), Box<dyn std::error::Error>> {
    for severity in Severity::ALL {
        assert!(severity.as_str().parse::<Severity>()? == severity);
        assert!(severity.as_str().to_lowercase().parse::<Severity>()? == severity);
    }

    assert!(" warn ".parse::<Severity>()? == Severity::Warning);
    assert!("Fatal".parse::<Severity>()? == Severity::Critical);

    let error = "verbose".parse::<Severity>().unwrap_err();
    assert!(error.kind() == ErrorKind::InvalidArgument);

    Ok(())
}

#[test]
fn test_from_tracing_level() {
    assert!(Severity::from(Level::TRACE) == Severity::Debug);
    assert!(Severity::from(Level::DEBUG) == Severity::Debug);
    assert!(Severity::from(Level::INFO) == Severity::Info);
    assert!(Severity::from(Level::WARN) == Severity::Warning);
    assert!(Severity::from(Level::ERROR) == Severity::Error);
}

#[test]
fn test_default_is_info() {
    assert!(Severity::default() == Severity::Info);
}
