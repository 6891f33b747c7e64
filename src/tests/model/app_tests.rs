    use super::*;

    fn record(status: Option<&str>, disabled: Option<bool>) -> ApplicationRecord {
        ApplicationRecord {
            app_name: "billing".to_string(),
            change_number: "CHG001".to_string(),
            disabled,
            app_status: status.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn status_field_wins_over_disabled_flag() {
        assert_eq!(
            record(Some("enabled"), Some(true)).enablement(),
            Enablement::Enabled
        );
        assert_eq!(
            record(Some("disabled"), Some(false)).enablement(),
            Enablement::Disabled
        );
    }

    #[test]
    fn absent_or_empty_status_falls_back_to_disabled_flag() {
        assert_eq!(record(None, None).enablement(), Enablement::Enabled);
        assert_eq!(record(None, Some(false)).enablement(), Enablement::Enabled);
        assert_eq!(record(None, Some(true)).enablement(), Enablement::Disabled);
        assert_eq!(record(Some(""), Some(true)).enablement(), Enablement::Disabled);
    }

    #[test]
    fn set_enablement_keeps_both_fields_consistent() {
        let mut r = record(None, None);
        r.set_enablement(Enablement::Disabled);
        assert_eq!(r.app_status.as_deref(), Some("disabled"));
        assert_eq!(r.disabled, Some(true));

        r.set_enablement(Enablement::Enabled);
        assert_eq!(r.app_status.as_deref(), Some("enabled"));
        assert_eq!(r.disabled, Some(false));
    }

    #[test]
    fn same_content_ignores_enablement_fields() {
        let a = record(Some("enabled"), Some(false));
        let b = record(Some("disabled"), Some(true));
        assert!(a.same_content(&b));

        let mut c = a.clone();
        c.hosts.push("h1.com".to_string());
        assert!(!a.same_content(&c));
    }

    #[test]
    fn blank_template_is_enabled_and_unsavable() {
        let r = ApplicationRecord::blank();
        assert_eq!(r.enablement(), Enablement::Enabled);
        assert_eq!(
            r.missing_fields(),
            vec![RequiredField::AppName, RequiredField::ChangeNumber]
        );
    }

    #[test]
    fn whitespace_only_required_fields_are_missing() {
        let mut r = record(None, None);
        r.change_number = "   ".to_string();
        assert_eq!(r.missing_fields(), vec![RequiredField::ChangeNumber]);
        assert!(!r.is_savable());
    }

    #[test]
    fn parse_hosts_splits_on_commas_and_newlines() {
        assert_eq!(
            parse_hosts("h1.com, h2.com\nh3.com"),
            vec!["h1.com", "h2.com", "h3.com"]
        );
        assert_eq!(parse_hosts(" a ,,\n\n b,\r\n"), vec!["a", "b"]);
        assert!(parse_hosts("").is_empty());
    }

    #[test]
    fn wire_form_uses_camel_case_and_tolerates_missing_fields() {
        let r: ApplicationRecord = serde_json::from_value(serde_json::json!({
            "appName": "billing",
            "changeNumber": "CHG001",
            "disabled": true
        }))
        .expect("parse record");
        assert_eq!(r.app_name, "billing");
        assert!(r.hosts.is_empty());
        assert_eq!(r.app_status, None);
        assert_eq!(r.enablement(), Enablement::Disabled);

        let v = serde_json::to_value(&r).expect("serialize record");
        assert_eq!(v["appName"], "billing");
        assert_eq!(v["applicationOwner"], "");
        assert!(v.get("appStatus").is_none());
    }
