mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_ring_lamp::config::SERIAL_TIMEOUT;
    use myrtio_ring_lamp::{BootChoice, BootPrompt, Prompt, Provisioning, ProvisioningState};

    fn feed(provisioning: &mut Provisioning, input: &[u8]) -> Vec<Prompt> {
        input
            .iter()
            .filter_map(|byte| provisioning.on_byte(*byte))
            .collect()
    }

    #[test]
    fn test_full_flow() {
        let mut provisioning = Provisioning::new();
        assert_eq!(provisioning.start(), Prompt::EnterSsid);

        assert_eq!(feed(&mut provisioning, b"home\r\n"), vec![Prompt::ConfirmSsid]);
        assert_eq!(provisioning.state(), ProvisioningState::ConfirmingSsid);
        assert_eq!(feed(&mut provisioning, b"y"), vec![Prompt::EnterPassword]);
        assert_eq!(
            feed(&mut provisioning, b"secret\n"),
            vec![Prompt::ConfirmPassword]
        );
        assert_eq!(provisioning.credentials(), None);
        assert_eq!(feed(&mut provisioning, b"Y"), vec![Prompt::Finished]);

        let credentials = provisioning.credentials().unwrap();
        assert_eq!(credentials.ssid.as_str(), "home");
        assert_eq!(credentials.password.as_str(), "secret");

        // Finished flow ignores further input
        assert!(feed(&mut provisioning, b"more\n").is_empty());
        assert_eq!(provisioning.state(), ProvisioningState::Done);
    }

    #[test]
    fn test_rejecting_restarts_entry() {
        let mut provisioning = Provisioning::new();
        feed(&mut provisioning, b"typo\n");
        assert_eq!(feed(&mut provisioning, b"n"), vec![Prompt::EnterSsid]);
        assert_eq!(provisioning.ssid(), "");

        feed(&mut provisioning, b"home\ny");
        feed(&mut provisioning, b"wrong\n");
        assert_eq!(feed(&mut provisioning, b"N"), vec![Prompt::EnterPassword]);
        assert_eq!(provisioning.password(), "");
        assert_eq!(provisioning.ssid(), "home");
    }

    #[test]
    fn test_empty_lines_and_stray_answers_are_ignored() {
        let mut provisioning = Provisioning::new();
        assert!(feed(&mut provisioning, b"\r\n\r\n").is_empty());
        assert_eq!(provisioning.state(), ProvisioningState::AwaitingSsid);

        feed(&mut provisioning, b"home\n");
        assert!(feed(&mut provisioning, b"x?").is_empty());
        assert_eq!(provisioning.state(), ProvisioningState::ConfirmingSsid);
    }

    #[test]
    fn test_control_bytes_are_dropped_and_overflow_truncated() {
        let mut provisioning = Provisioning::new();
        feed(&mut provisioning, b"my \x08net");
        assert_eq!(provisioning.ssid(), "my net");

        let mut provisioning = Provisioning::new();
        feed(&mut provisioning, &[b'a'; 40]);
        assert_eq!(provisioning.ssid().len(), 32);
    }

    #[test]
    fn test_prompt_text() {
        let mut provisioning = Provisioning::new();
        feed(&mut provisioning, b"home\n");

        let mut out = String::new();
        provisioning
            .write_prompt(Prompt::ConfirmSsid, &mut out)
            .unwrap();
        assert_eq!(out, "SSID: home\r\nSSID Correct? (Y/N):\r\n");

        out.clear();
        provisioning.write_prompt(Prompt::EnterSsid, &mut out).unwrap();
        assert_eq!(out, "Please enter WiFi SSID:\r\n");
    }

    #[test]
    fn test_boot_prompt_answers() {
        let prompt = BootPrompt::new(Instant::from_millis(0), Duration::from_millis(8000));
        assert_eq!(prompt.on_byte(b'Y'), Some(BootChoice::Update));
        assert_eq!(prompt.on_byte(b'y'), Some(BootChoice::Update));
        assert_eq!(prompt.on_byte(b'N'), Some(BootChoice::Keep));
        assert_eq!(prompt.on_byte(b'~'), Some(BootChoice::Erase));
        assert_eq!(prompt.on_byte(b'q'), None);
    }

    #[test]
    fn test_boot_prompt_timeout_keeps_credentials() {
        let prompt = BootPrompt::new(Instant::from_millis(1_000), SERIAL_TIMEOUT);
        assert_eq!(prompt.check_timeout(Instant::from_millis(5_000)), None);
        assert_eq!(prompt.check_timeout(Instant::from_millis(9_000)), None);
        assert_eq!(
            prompt.check_timeout(Instant::from_millis(9_001)),
            Some(BootChoice::Keep)
        );
    }
}
