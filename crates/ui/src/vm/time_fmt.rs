/// Formats a stopwatch reading as `MM:SS.cc`.
#[must_use]
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let minutes = (elapsed_ms / 60_000) % 60;
    let seconds = (elapsed_ms / 1_000) % 60;
    let centis = (elapsed_ms / 10) % 100;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_seconds_and_hundredths() {
        assert_eq!(format_elapsed(0), "00:00.00");
        assert_eq!(format_elapsed(1_230), "00:01.23");
        assert_eq!(format_elapsed(125_990), "02:05.99");
    }

    #[test]
    fn minutes_wrap_at_an_hour() {
        assert_eq!(format_elapsed(3_600_000 + 10), "00:00.01");
    }
}
