    use super::*;
    use crate::notify::NoticeLog;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .expect("read trace")
            .lines()
            .map(|l| serde_json::from_str(l).expect("parse trace line"))
            .collect()
    }

    #[test]
    fn events_are_numbered_and_appended() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested/trace.jsonl");
        let mut trace = Trace::open(Some(&path))?;
        assert!(trace.is_enabled());

        trace.event("session_start", json!({"command": "apps list"}));
        trace.state_change("toggle", "idle", "confirm_pending");

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["seq"], 1);
        assert_eq!(lines[0]["event"], "session_start");
        assert_eq!(lines[1]["seq"], 2);
        assert_eq!(lines[1]["payload"]["to"], "confirm_pending");
        assert!(lines[1]["ts"].as_str().is_some_and(|s| !s.is_empty()));
        Ok(())
    }

    #[test]
    fn disabled_trace_is_a_no_op() {
        let mut trace = Trace::disabled();
        trace.event("anything", json!({}));
        assert!(!trace.is_enabled());
        assert!(trace.path().is_none());
    }

    #[test]
    fn traced_notifier_records_and_forwards() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("trace.jsonl");
        let mut trace = Trace::open(Some(&path))?;

        let mut notifier = TracedNotifier::new(NoticeLog::new(), &mut trace);
        notifier.error("Save Failed", "Failed to save configuration changes.");
        let log = notifier.into_inner();

        assert!(log.has_errors());
        let lines = read_lines(&path);
        assert_eq!(lines[0]["event"], "notification");
        assert_eq!(lines[0]["payload"]["level"], "error");
        assert_eq!(lines[0]["payload"]["title"], "Save Failed");
        Ok(())
    }
