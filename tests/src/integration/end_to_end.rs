//! # End-to-End Flow
//!
//! Drives `maxsum_cli::run` exactly as `main` does, with in-memory streams
//! instead of stdin/stdout.

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use maxsum_cli::run;
    use maxsum_solver::{SolverConfig, SubarrayResult};

    // =============================================================================
    // TEST HELPERS
    // =============================================================================

    fn to_input(values: &[i64]) -> String {
        values.iter().map(|v| format!("{v}\n")).collect()
    }

    fn run_values(config: SolverConfig, values: &[i64]) -> (SubarrayResult, String) {
        let mut out = Vec::new();
        let result = run(config, Cursor::new(to_input(values)), &mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_output_is_exactly_three_lines() {
        let (_, out) = run_values(SolverConfig::default(), &[1, -2, 3, -1, 2]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["4", "2", "5"]);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_all_negative_prints_empty_range() {
        let (result, out) = run_values(SolverConfig::default(), &[-2, -3, -1]);
        assert_eq!(result.sum, 0);
        assert_eq!(result.begin, result.end);
        assert_eq!(out, format!("0\n{}\n{}\n", result.begin, result.end));
    }

    #[test]
    fn test_printed_result_matches_returned_result() {
        let values = [3, -7, 4, 4, -1, 6, -20, 5];
        let (result, out) = run_values(SolverConfig::sequential(), &values);
        assert_eq!(
            out,
            format!("{}\n{}\n{}\n", result.sum, result.begin, result.end)
        );
        assert!(result.is_consistent_with(&values));
    }

    #[test]
    fn test_large_input_parallel_matches_sequential() {
        let values: Vec<i64> = (0..20_000i64).map(|i| (i * 7919) % 201 - 100).collect();

        let parallel = SolverConfig {
            parallel: true,
            parallel_threshold: 256,
            ..Default::default()
        };
        let (par, par_out) = run_values(parallel, &values);
        let (seq, seq_out) = run_values(SolverConfig::sequential(), &values);

        assert_eq!(par, seq);
        assert_eq!(par_out, seq_out);
    }

    #[test]
    fn test_malformed_line_fails_without_output() {
        let mut out = Vec::new();
        let input = "1\n2\n3.5\n";
        let err = run(SolverConfig::default(), Cursor::new(input), &mut out).unwrap_err();

        assert!(format!("{err:#}").contains("Line 3"));
        assert!(out.is_empty());
    }
}
