//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportConfig, ReportMeta, SystemInfo};
    use chrono::Utc;
    use sortbench_core::{Algorithm, AlgorithmResult, DatasetKind};

    #[test]
    fn test_json_contains_results_and_meta() {
        let meta = ReportMeta {
            version: "0.1.0".to_string(),
            timestamp: Utc::now(),
            system: SystemInfo {
                os: "linux".to_string(),
                arch: "x86_64".to_string(),
                cpu: "Unknown".to_string(),
                cpu_cores: 4,
            },
            config: ReportConfig {
                sizes: vec![10],
                kinds: vec![DatasetKind::Almost],
                repeats: 2,
                seed: 123,
            },
        };
        let results = vec![AlgorithmResult {
            algorithm: Algorithm::Insertion,
            kind: DatasetKind::Almost,
            n: 10,
            avg_seconds: 0.25,
        }];
        let report = Report::new(meta, results, 1.5);
        let json = generate_json_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["results"][0]["algorithm"], "Insertion");
        assert_eq!(value["results"][0]["kind"], "almost");
        assert_eq!(value["results"][0]["avg_seconds"], 0.25);
        assert_eq!(value["meta"]["config"]["seed"], 123);
        assert_eq!(value["summary"]["total_results"], 1);
        assert_eq!(value["summary"]["cases"], 1);

        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.results, report.results);
    }
}
