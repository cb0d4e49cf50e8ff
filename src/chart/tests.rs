use {
    super::*,
    std::io::{BufReader, Cursor, Seek, Write},
    time::macros::datetime,
};

const LOG: &str = "\
2024-03-09 14:02:11,500 GOOD     CORE_0: 10.00% CORE_1: 10.00% TOTAL: 10.00% SEND: 0.00B RECV: 0.00B
2024-03-09 14:02:16,500 WARNING  CORE_0: 70.00% CORE_1: 70.00% TOTAL: 70.00% SEND: 1.00KB RECV: 2.00KB
2024-03-09 14:02:21,750 CRITICAL CORE_0: 90.00% CORE_1: 90.00% TOTAL: 90.00% SEND: 4.00KB RECV: 1.50MB
";

mod point_parse_tests {
    use super::*;

    #[test]
    fn record() {
        let point = LOG.lines().nth(1).unwrap().parse::<Point>().unwrap();
        assert_eq!(
            point,
            Point {
                time: datetime!(2024-03-09 14:02:16.500),
                total: 70.0,
                sent: 1.0,
                received: 2.0,
            }
        );
    }

    /// the core count does not move the values.
    #[test]
    fn many_cores() {
        let line = "2024-03-09 14:02:16,611 GOOD     CORE_0: 1.00% CORE_1: 2.00% CORE_2: 3.00% \
                    CORE_3: 4.00% CORE_4: 5.00% CORE_5: 6.00% TOTAL: 3.50% SEND: 500.00B RECV: 2.00MB";
        let point = line.parse::<Point>().unwrap();
        assert_eq!(point.total, 3.5);
        assert_eq!(point.sent, 0.5);
        assert_eq!(point.received, 2000.0);
    }

    #[test]
    fn bad_timestamp() {
        let err = "yesterday noon GOOD TOTAL: 1.00% SEND: 0.00B RECV: 0.00B"
            .parse::<Point>()
            .unwrap_err();
        assert!(matches!(err, PointParseError::Timestamp(_)));
    }

    #[test]
    fn truncated() {
        let err = "2024-03-09 14:02:16,611 GOOD CORE_0: 1.00% TOTAL: 1.00% SEND:"
            .parse::<Point>()
            .unwrap_err();
        assert!(matches!(err, PointParseError::Missing("SEND:")));
    }

    #[test]
    fn percent_sign_missing() {
        let err = "2024-03-09 14:02:16,611 GOOD TOTAL: 1.00 SEND: 0.00B RECV: 0.00B"
            .parse::<Point>()
            .unwrap_err();
        assert!(matches!(err, PointParseError::Percent(_)));
    }

    #[test]
    fn one_token() {
        let err = "garbage".parse::<Point>().unwrap_err();
        assert!(matches!(err, PointParseError::MissingTimestamp));
    }
}

mod read_tests {
    use super::*;

    #[test]
    fn every_line() {
        let history = read(Cursor::new(LOG)).unwrap();
        assert_eq!(history.points.len(), 3);
        assert_eq!(history.skipped, 0);
    }

    #[test]
    fn skips_malformed_lines() {
        let log = format!("{LOG}this line is not a record\n\n2024-03-09 14:02:26,0 GOOD\n");
        let history = read(Cursor::new(log)).unwrap();
        assert_eq!(history.points.len(), 3);
        assert_eq!(history.skipped, 2);
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(LOG.as_bytes()).unwrap();
        file.rewind().unwrap();

        let history = read(BufReader::new(file)).unwrap();
        assert_eq!(history.points.len(), 3);
    }
}

mod history_tests {
    use super::*;

    #[test]
    fn cpu_series() {
        let history = read(Cursor::new(LOG)).unwrap();
        assert_eq!(
            history.cpu(),
            vec![(0.0, 10.0), (5.0, 70.0), (10.25, 90.0)]
        );
    }

    #[test]
    fn network_series() {
        let history = read(Cursor::new(LOG)).unwrap();
        let sent = history.sent().into_iter().map(|(_, kb)| kb).collect::<Vec<_>>();
        let received = history
            .received()
            .into_iter()
            .map(|(_, kb)| kb)
            .collect::<Vec<_>>();
        assert_eq!(sent, [0.0, 1.0, 4.0]);
        assert_eq!(received, [0.0, 2.0, 1500.0]);
    }

    #[test]
    fn cumulative_totals() {
        let history = read(Cursor::new(LOG)).unwrap();
        assert_eq!(history.cumulative_sent(), 5.0);
        assert_eq!(history.cumulative_received(), 1502.0);
    }

    #[test]
    fn empty() {
        let history = History::default();
        assert!(history.cpu().is_empty());
        assert!(history.span().is_none());
        assert_eq!(history.cumulative_sent(), 0.0);
    }
}
