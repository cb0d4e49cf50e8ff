use {super::*, crate::source::MockProcFs};

const NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo:  1000      10    0    0    0     0          0         0     1000      10    0    0    0     0       0          0
  eth0: 52000     300    0    0    0     0          0         0    31000     250    0    0    0     0       0          0
";

mod interface_parse_tests {
    use super::*;

    #[test]
    fn loopback() {
        let row = NET_DEV.lines().nth(2).unwrap();
        let interface = row.parse::<Interface>().unwrap();
        assert_eq!(
            interface,
            Interface {
                name: "lo".to_owned(),
                received: 1000,
                transmitted: 1000,
            }
        );
    }

    /// large counters push the first column against the colon.
    #[test]
    fn no_space_after_name() {
        let row = "enp3s0:123456789012 5 0 0 0 0 0 0 42 5 0 0 0 0 0 0";
        let interface = row.parse::<Interface>().unwrap();
        assert_eq!(interface.name, "enp3s0");
        assert_eq!(interface.received, 123456789012);
        assert_eq!(interface.transmitted, 42);
    }

    #[test]
    fn missing_separator() {
        let err = "eth0 1 2 3".parse::<Interface>().unwrap_err();
        assert_eq!(err, InterfaceParseError::MissingSeparator);
    }

    #[test]
    fn too_few_columns() {
        let err = "eth0: 1 2 3".parse::<Interface>().unwrap_err();
        assert_eq!(err, InterfaceParseError::Columns { found: 3 });
    }

    #[test]
    fn bad_counter() {
        let err = "eth0: 1 2 3 4 5 6 7 8 nine 10 11 12 13 14 15 16"
            .parse::<Interface>()
            .unwrap_err();
        assert!(matches!(err, InterfaceParseError::Counter(_)));
    }
}

mod read_tests {
    use super::*;

    #[test]
    fn sums_every_interface() {
        let stats = MockProcFs::default().with_net_dev(NET_DEV);
        let counters = read(&stats).unwrap();
        assert_eq!(
            counters,
            Counters {
                sent: 32000,
                received: 53000,
            }
        );
    }

    #[test]
    fn headers_only() {
        let headers = NET_DEV.lines().take(2).collect::<Vec<_>>().join("\n");
        let stats = MockProcFs::default().with_net_dev(&headers);
        assert_eq!(read(&stats).unwrap(), Counters::default());
    }

    #[test]
    fn malformed_row() {
        let stats = MockProcFs::default().with_net_dev("h1\nh2\n eth0: 1 2\n");
        let err = read(&stats).unwrap_err();
        assert!(matches!(
            err,
            NetReadError::Interface(InterfaceParseError::Columns { found: 2 })
        ));
    }
}
