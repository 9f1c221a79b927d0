use metalog::formatter::cause::{
    flatten_cause_chain, flatten_cause_chain_indented, CauseChain, MAX_CAUSE_DEPTH,
};
use metalog::ErrorKind;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
struct Chained {
    message: String,
    cause: Option<Box<Chained>>,
}

impl Chained {
    fn new(messages: &[&str]) -> Self {
        let mut messages = messages.iter().rev();
        let mut error = Chained {
            message: messages.next().map(|m| m.to_string()).unwrap_or_default(),
            cause: None,
        };
        for message in messages {
            error = Chained {
                message: message.to_string(),
                cause: Some(Box::new(error)),
            };
        }
        error
    }

    fn with_depth(depth: usize) -> Self {
        let messages: Vec<String> = (0..depth).map(|i| format!("[{}]", i)).collect();
        let messages: Vec<&str> = messages.iter().map(String::as_str).collect();
        Chained::new(&messages)
    }
}

impl fmt::Display for Chained {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Chained {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

#[derive(Debug)]
struct Ouroboros;

impl fmt::Display for Ouroboros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("eats itself")
    }
}

impl Error for Ouroboros {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self)
    }
}

#[test]
fn test_three_levels() -> Result<(), Box<dyn Error>> {
    let error = Chained::new(&["A", "B", "C"]);

    assert_eq!(flatten_cause_chain(&error)?, "ABC");

    Ok(())
}

#[test]
fn test_no_truncation() -> Result<(), Box<dyn Error>> {
    let error = Chained::new(&[
        "request failed: ",
        "could not reach upstream: ",
        "connection refused",
    ]);

    assert_eq!(
        flatten_cause_chain(&error)?,
        "request failed: could not reach upstream: connection refused"
    );

    Ok(())
}

#[test]
fn test_single_error() -> Result<(), Box<dyn Error>> {
    let error = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");

    assert_eq!(flatten_cause_chain(&error)?, "disk on fire");

    Ok(())
}

#[test]
fn test_longest_accepted_chain() -> Result<(), Box<dyn Error>> {
    let error = Chained::with_depth(MAX_CAUSE_DEPTH);
    let flattened = flatten_cause_chain(&error)?;

    assert!(flattened.starts_with("[0][1]"));
    assert!(flattened.ends_with(&format!("[{}]", MAX_CAUSE_DEPTH - 1)));

    Ok(())
}

#[test]
fn test_too_deep_chain() {
    let error = Chained::with_depth(MAX_CAUSE_DEPTH + 1);
    let result = flatten_cause_chain(&error);

    assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::InvalidChain));
}

#[test]
fn test_cyclic_chain() {
    match flatten_cause_chain(&Ouroboros) {
        Err(metalog::Error::InvalidChain { depth }) => assert!(depth == MAX_CAUSE_DEPTH),
        other => panic!("expected an invalid chain, got {:?}", other),
    }
}

#[test]
fn test_indent_is_tracked_not_rendered() -> Result<(), Box<dyn Error>> {
    let error = Chained::new(&["A", "B", "C"]);

    let indents = CauseChain::new(&error)
        .with_indent(2)
        .map(|cause| cause.map(|c| (c.depth, c.indent)))
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(indents, [(0, 2), (1, 6), (2, 10)]);
    assert_eq!(flatten_cause_chain_indented(&error, 8)?, "ABC");

    Ok(())
}

#[test]
fn test_chain_stops_after_error() {
    let mut chain = CauseChain::new(&Ouroboros);

    assert!(chain.by_ref().take(MAX_CAUSE_DEPTH).all(|cause| cause.is_ok()));
    assert!(matches!(chain.next(), Some(Err(_))));
    assert!(chain.next().is_none());
}
