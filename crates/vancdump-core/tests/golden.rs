use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use vancdump_core::{
    TimestampOptions, dump_rcwt, dump_vanc_from_mcc, dump_vanc_from_mxf_data_stream,
};

fn golden_dir(case: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("golden")
        .join(case)
}

fn expected(case: &str) -> String {
    fs::read_to_string(golden_dir(case).join("expected.txt")).expect("read expected.txt")
}

fn open(case: &str, name: &str) -> BufReader<File> {
    BufReader::new(File::open(golden_dir(case).join(name)).expect("open golden input"))
}

#[test]
fn golden_rcwt_basic() {
    let mut out = Vec::new();
    let summary = dump_rcwt(
        open("rcwt_basic", "input.rcwt"),
        &mut out,
        TimestampOptions::default(),
    )
    .expect("dump rcwt");
    assert_eq!(String::from_utf8(out).unwrap(), expected("rcwt_basic"));
    assert_eq!(summary.records, 4);
    assert_eq!(summary.lines_written, 5);
}

#[test]
fn golden_mxf_basic() {
    let mut out = Vec::new();
    let summary = dump_vanc_from_mxf_data_stream(open("mxf_basic", "input.mxf.dat"), &mut out)
        .expect("dump mxf");
    assert_eq!(String::from_utf8(out).unwrap(), expected("mxf_basic"));
    assert_eq!(summary.records, 4);
    assert_eq!(summary.dropped, 1);
}

#[test]
fn golden_mcc_basic() {
    let mut out = Vec::new();
    let summary =
        dump_vanc_from_mcc(open("mcc_basic", "input.mcc"), &mut out).expect("dump mcc");
    assert_eq!(String::from_utf8(out).unwrap(), expected("mcc_basic"));
    assert_eq!(summary.attributes, 5);
    assert_eq!(summary.records, 4);
    assert_eq!(summary.dropped, 1);
}

#[test]
fn golden_mcc_caption_is_a_whole_cdp() {
    let expected = expected("mcc_basic");
    let first = expected
        .lines()
        .find(|line| line.starts_with("Line 9:"))
        .expect("caption line");
    let data = first.split_once("Data: ").expect("data section").1;
    let cdp: Vec<u8> = data
        .split(' ')
        .map(|byte| u8::from_str_radix(byte, 16).expect("hex byte"))
        .collect();
    assert_eq!(&cdp[..2], &[0x96, 0x69]);
    assert_eq!(usize::from(cdp[2]), cdp.len());
    assert_eq!(cdp.iter().fold(0u8, |sum, b| sum.wrapping_add(*b)), 0);
}
