    use super::*;

    fn client(base_url: &str) -> RemoteClient {
        RemoteClient::new(RemoteConfig {
            base_url: base_url.to_string(),
            environment: "DEV".to_string(),
        })
        .expect("build client")
    }

    #[test]
    fn app_names_are_percent_encoded_as_one_segment() -> Result<()> {
        let c = client("http://localhost:8080");
        let url = c.url(&["api", "app", "Billing API/v2"])?;
        assert_eq!(url.as_str(), "http://localhost:8080/api/app/Billing%20API%2Fv2");
        Ok(())
    }

    #[test]
    fn base_url_path_prefix_is_kept() -> Result<()> {
        let c = client("http://localhost:8080/portal/");
        assert_eq!(
            c.url(&["api", "apps"])?.as_str(),
            "http://localhost:8080/portal/api/apps"
        );
        Ok(())
    }

    #[test]
    fn bad_base_url_is_an_error() {
        assert!(client("not a url").url(&["api", "apps"]).is_err());
    }

    #[test]
    fn incomplete_submissions_are_skipped() -> Result<()> {
        let raw: Vec<BackendSubmission> = serde_json::from_str(
            r#"[
                {"appData":{"appName":"Billing"},
                 "formSubmission":{"changeNumber":"CHG1","approverName":"Dana",
                                   "decision":"Timed","environment":"PROD",
                                   "startTime":"09:00","endTime":"10:00"},
                 "submittedAt":"2026-01-01T00:00:00Z","status":"done"},
                {"formSubmission":{"decision":"Approved"},"submittedAt":"2026-01-02T00:00:00Z"},
                {"appData":{"appName":"Audit"},"submittedAt":"2026-01-03T00:00:00Z"}
            ]"#,
        )?;
        let events: Vec<SubmissionEvent> =
            raw.into_iter().filter_map(BackendSubmission::into_event).collect();

        assert_eq!(events.len(), 1);
        let e = &events[0];
        assert_eq!(e.app_name, "Billing");
        assert_eq!(e.decision, crate::model::Decision::Timed);
        assert_eq!(e.environment, "PROD");
        assert_eq!(e.start_time.as_deref(), Some("09:00"));
        assert!(e.approver_email.is_none());
        Ok(())
    }
