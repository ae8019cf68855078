//! Full-pipeline render tests over on-disk CSV fixtures
//!
//! These drive the complete read -> aggregate -> series -> render path
//! through real files, the way the command-line tool does.

use benchgraph_plots::{GroupedBarChart, GroupedBarOptions, Plot};
use benchgraph_report::{ResultTable, build_series, read_records};
use std::io::Write;
use tempfile::NamedTempFile;

/// Write a results CSV with the extra columns a harness reporter emits.
fn write_results_csv(rows: &[(&str, f64)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    writeln!(file, "name,iterations,real_time,time_unit,bytes_per_second").unwrap();
    for (name, bps) in rows {
        writeln!(file, "{name},100,0.5,ns,{bps}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn csv_file_renders_to_svg_markup() {
    let file = write_results_csv(&[
        ("BM_memcpy_suite::rust/1024", 10.0e9),
        ("BM_memcpy_suite::rust/1024", 10.1e9),
        ("BM_memcpy_suite::rust/1024", 0.2e9),
        ("BM_memcpy_suite::rust/8192", 20.0e9),
        ("BM_memcpy_suite::rust/8192", 20.1e9),
        ("BM_memcpy_suite::rust/8192", 0.4e9),
        ("BM_memcpy_suite::libc/1024", 9.0e9),
        ("BM_memcpy_suite::libc/1024", 9.1e9),
        ("BM_memcpy_suite::libc/1024", 0.2e9),
        ("BM_memcpy_suite::libc/8192", 18.0e9),
        ("BM_memcpy_suite::libc/8192", 18.1e9),
        ("BM_memcpy_suite::libc/8192", 0.4e9),
    ]);

    let records = read_records(file.path()).unwrap();
    let table = ResultTable::from_records(&records).unwrap();
    let series = build_series(&table).unwrap();
    let options = GroupedBarOptions::new().build().unwrap();
    let svg = GroupedBarChart::new().render(series, &options).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("1.0kB"));
    assert!(svg.contains("8.0kB"));
    assert!(svg.contains("rust"));
    assert!(svg.contains("libc"));
    assert!(svg.contains("Data sizes"));
    assert!(svg.contains("GB/s"));
}

#[test]
fn namespaced_case_renders_with_its_size_label() {
    let file = write_results_csv(&[
        ("BM_memcpy::dragons::method_a_4096", 1.0e9),
        ("BM_memcpy::dragons::method_a_4096", 1.1e9),
        ("BM_memcpy::dragons::method_a_4096", 0.05e9),
    ]);

    let records = read_records(file.path()).unwrap();
    let table = ResultTable::from_records(&records).unwrap();
    let series = build_series(&table).unwrap();
    let options = GroupedBarOptions::new().build().unwrap();
    let svg = GroupedBarChart::new().render(series, &options).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("4.0kB"));
    assert!(svg.contains("method_a"));
}
