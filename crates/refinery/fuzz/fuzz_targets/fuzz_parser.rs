//! Fuzz target for the CSV parser and column profiler.
//!
//! Any input either parses into a rectangular table or returns an error;
//! profiling a parsed table never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use refinery::{ColumnProfiler, Parser};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    if let Ok(table) = Parser::new().parse_str(&input) {
        for column in table.columns() {
            assert_eq!(column.len(), table.row_count());
        }
        let _ = ColumnProfiler::profile(&table);
    }
});
