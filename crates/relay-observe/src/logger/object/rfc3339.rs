use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// RFC3339 UTC timestamp formatter.
#[derive(Debug, Clone, Copy)]
pub struct LoggerRfc3339;

impl LoggerRfc3339 {
    fn now() -> Option<String> {
        OffsetDateTime::now_utc().format(&Rfc3339).ok()
    }
}

impl FormatTime for LoggerRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match Self::now() {
            Some(ts) => write!(w, "{ts}"),
            None => write!(w, "<invalid-time>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_utc_rfc3339() {
        let ts = LoggerRfc3339::now().unwrap();
        assert!(ts.ends_with('Z'), "expected UTC suffix in {ts}");
        assert_eq!(ts.as_bytes()[10], b'T');
    }
}
