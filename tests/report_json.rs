//! WashReport JSON round-trip tests.

#[cfg(feature = "serde")]
mod tests {
    use fuzzy_wash::report::{WashReport, REPORT_VERSION};
    use fuzzy_wash::{ControllerConfig, ShapeProfile, WashController, WashTerm};

    #[test]
    fn test_report_round_trips_through_json() {
        let inf = WashController::new().evaluate(60.0, 35.0);
        let report = WashReport::from_inference(&inf);
        let json = serde_json::to_string(&report).expect("serialise");
        let restored: WashReport = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(restored, report);
        assert_eq!(restored.version, REPORT_VERSION);
        assert_eq!(restored.wash_time, inf.wash_time);
    }

    #[test]
    fn test_report_json_shape() {
        let report = WashReport::from(&WashController::new().evaluate(30.0, 10.0));
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["dirt"][1]["label"], "SD");
        assert_eq!(value["activations"][0]["label"], "VST");
        assert!((value["activations"][0]["degree"].as_f64().unwrap() - 0.6).abs() < 1e-12);
        assert_eq!(value["activations"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_config_and_terms_serialise() {
        let cfg = ControllerConfig { samples: 250, profile: ShapeProfile::Corrected };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ControllerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);

        let json = serde_json::to_string(&WashTerm::VeryLong).unwrap();
        assert_eq!(json, "\"VeryLong\"");
    }
}
