use super::*;

const BASELINE: &str = "\
cpu  200 0 0 200 0 0 0 0 0 0
cpu0 100 0 0 100 0 0 0 0 0 0
cpu1 100 0 0 100 0 0 0 0 0 0
ctxt 1990473
";

const LATER: &str = "\
cpu  450 0 0 350 0 0 0 0 0 0
cpu0 190 0 0 110 0 0 0 0 0 0
cpu1 160 0 0 140 0 0 0 0 0 0
ctxt 1990999
";

const NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
  eth0:  2000      20    0    0    0     0          0         0     1000      10    0    0    0     0       0          0
";

mod proc_source_tests {
    use super::*;

    #[test]
    fn counts_cores_from_baseline() {
        let stats = MockProcFs::default().with_stat(BASELINE);
        let source = ProcSource::new(stats).unwrap();
        assert_eq!(source.core_count(), 2);
    }

    #[test]
    fn percentages_since_baseline() {
        let stats = MockProcFs::default().with_stat(BASELINE).with_stat(LATER);
        let mut source = ProcSource::new(stats).unwrap();
        let cpus = source.cpu_percentages().unwrap();
        assert_eq!(cpus, vec![90.0, 60.0]);
    }

    #[test]
    fn no_cores() {
        let stats = MockProcFs::default().with_stat("cpu 1 0 0 1 0 0 0 0 0 0\n");
        let err = ProcSource::new(stats).err().unwrap();
        assert!(matches!(err, SourceError::NoCores));
    }

    #[test]
    fn core_count_changed() {
        let stats = MockProcFs::default()
            .with_stat(BASELINE)
            .with_stat("cpu 1 0 0 1 0 0 0 0 0 0\ncpu0 1 0 0 1 0 0 0 0 0 0\n");
        let mut source = ProcSource::new(stats).unwrap();
        let err = source.cpu_percentages().unwrap_err();
        assert!(matches!(
            err,
            SourceError::CoreCount {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn unreadable_stats() {
        let stats = MockProcFs::default().with_stat(BASELINE);
        let mut source = ProcSource::new(stats).unwrap();
        let err = source.cpu_percentages().unwrap_err();
        assert!(matches!(err, SourceError::Stat(StatReadError::Io(_))));
    }

    #[test]
    fn network_counters() {
        let stats = MockProcFs::default()
            .with_stat(BASELINE)
            .with_net_dev(NET_DEV);
        let mut source = ProcSource::new(stats).unwrap();
        let counters = source.network_counters().unwrap();
        assert_eq!(
            counters,
            Counters {
                sent: 1000,
                received: 2000
            }
        );
    }
}

mod mock_source_tests {
    use super::*;

    #[test]
    fn replays_readings() {
        let mut source = MockSource::new(2)
            .reading(&[10.0, 20.0], 1, 2)
            .reading(&[30.0, 40.0], 3, 4);

        assert_eq!(source.cpu_percentages().unwrap(), vec![10.0, 20.0]);
        assert_eq!(source.network_counters().unwrap().sent, 1);
        assert_eq!(source.cpu_percentages().unwrap(), vec![30.0, 40.0]);
        assert_eq!(source.network_counters().unwrap().received, 4);
        assert!(source.cpu_percentages().is_err());
    }
}

#[test]
fn mock_clock_advances() {
    let start = OffsetDateTime::UNIX_EPOCH;
    let clock = MockClock::starting_at(start, Duration::seconds(5));
    assert_eq!(clock.now(), start);
    assert_eq!(clock.now(), start + Duration::seconds(5));
}
