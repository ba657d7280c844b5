//! Console Table
//!
//! Fixed-width columns `algo | kind | n | avg_sec`: text left-justified,
//! numbers right-justified, timings to 6 decimal places.

use sortbench_core::AlgorithmResult;

const ALGO_WIDTH: usize = 10;
const KIND_WIDTH: usize = 9;
const N_WIDTH: usize = 8;
const AVG_WIDTH: usize = 12;

/// Format results as an aligned table, header first, one line per result
pub fn format_table(results: &[AlgorithmResult]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<aw$} {:<kw$} {:>nw$} {:>vw$}\n",
        "algo",
        "kind",
        "n",
        "avg_sec",
        aw = ALGO_WIDTH,
        kw = KIND_WIDTH,
        nw = N_WIDTH,
        vw = AVG_WIDTH
    ));

    for r in results {
        output.push_str(&format!(
            "{:<aw$} {:<kw$} {:>nw$} {:>vw$.6}\n",
            r.algorithm,
            r.kind,
            r.n,
            r.avg_seconds,
            aw = ALGO_WIDTH,
            kw = KIND_WIDTH,
            nw = N_WIDTH,
            vw = AVG_WIDTH
        ));
    }

    output
}
