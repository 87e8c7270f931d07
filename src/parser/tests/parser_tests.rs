//! End-to-end tests for LasParser over complete file texts

use super::{SAMPLE_LAS, with_crlf};
use crate::config::ParserConfig;
use crate::models::{Curve, WellLogDocument};
use crate::parser::{LasParser, parse_las};

fn curve(name: &str, data: Vec<Option<f64>>) -> Curve {
    Curve {
        name: name.to_string(),
        unit: String::new(),
        data,
    }
}

#[test]
fn test_minimal_two_curve_file() {
    let text = "~Curve\nD.M : depth\nA.X : a\nB.X : b\n~ASCII\n1 10 20\n2 11 21\n";
    let doc = parse_las(text);

    assert_eq!(doc.depth, vec![Some(1.0), Some(2.0)]);
    assert_eq!(
        doc.curves,
        vec![
            curve("A", vec![Some(10.0), Some(11.0)]),
            curve("B", vec![Some(20.0), Some(21.0)]),
        ]
    );
    assert_eq!(doc.null_value, None);
    assert!(doc.well_info.is_empty());
}

#[test]
fn test_sample_file() {
    let doc = parse_las(SAMPLE_LAS);

    assert_eq!(doc.null_value, Some(-999.25));
    assert_eq!(doc.depth, vec![Some(1670.0), Some(1669.875), Some(1669.75)]);

    let names: Vec<&str> = doc.curves.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["DT", "RHOB", "NPHI"]);
    assert_eq!(
        doc.curve("DT").unwrap().data,
        vec![Some(123.45), Some(123.45), None]
    );

    let mnemonics: Vec<&str> = doc.well_info.iter().map(|e| e.mnemonic.as_str()).collect();
    assert_eq!(mnemonics, vec!["STRT", "STOP", "STEP", "NULL", "COMP", "WELL"]);
}

#[test]
fn test_curve_lengths_match_depth() {
    let doc = parse_las(SAMPLE_LAS);
    for curve in &doc.curves {
        assert_eq!(curve.data.len(), doc.depth.len(), "curve {}", curve.name);
        assert!(curve.unit.is_empty());
    }
}

#[test]
fn test_null_samples_become_missing_in_depth_and_curves() {
    let text = "\
~W
NULL . -999.25 : Absent Value
~Curve
DEPT.M
GR.GAPI
~ASCII
-999.25 10
101 -999.25
102 -999.250
103 -999.2
";
    let doc = parse_las(text);

    assert_eq!(doc.depth, vec![None, Some(101.0), Some(102.0), Some(103.0)]);
    assert_eq!(doc.curves[0].data, vec![Some(10.0), None, None, Some(-999.2)]);
}

#[test]
fn test_exact_match_is_default_tolerance_is_opt_in() {
    let text = "~W\nNULL. -999.25\n~Curve\nD.M\nX.M\n~ASCII\n1 -999.2500001\n";

    let exact = parse_las(text);
    assert_eq!(exact.curves[0].data, vec![Some(-999.2500001)]);

    let tolerant = LasParser::new(ParserConfig::default().with_null_tolerance(1e-6)).parse(text);
    assert_eq!(tolerant.curves[0].data, vec![None]);
}

#[test]
fn test_non_numeric_depth_row_dropped() {
    let text = "~Curve\nD.M\nA.X\nB.X\n~ASCII\n1 10 20\nabc 1 2\n2 11 21\n";
    let doc = parse_las(text);

    assert_eq!(doc.depth, vec![Some(1.0), Some(2.0)]);
    assert_eq!(doc.curves[0].data, vec![Some(10.0), Some(11.0)]);
    assert_eq!(doc.curves[1].data, vec![Some(20.0), Some(21.0)]);
}

#[test]
fn test_infinite_depth_row_dropped() {
    let doc = parse_las("~ASCII\ninf 1\ninfinity 2\n3 4\n");
    assert_eq!(doc.depth, vec![Some(3.0)]);
}

#[test]
fn test_short_rows_fill_missing() {
    let text = "~Curve\nD.M\nA.X\nB.X\nC.X\n~ASCII\n1 10\n2 11 21 31\n3 12 x\n";
    let doc = parse_las(text);

    assert_eq!(doc.curves[0].data, vec![Some(10.0), Some(11.0), Some(12.0)]);
    assert_eq!(doc.curves[1].data, vec![None, Some(21.0), None]);
    assert_eq!(doc.curves[2].data, vec![None, Some(31.0), None]);
}

#[test]
fn test_extra_columns_are_ignored() {
    let text = "~Curve\nD.M\nA.X\n~ASCII\n1 10 99 98\n";
    let doc = parse_las(text);

    assert_eq!(doc.curves.len(), 1);
    assert_eq!(doc.curves[0].data, vec![Some(10.0)]);
}

#[test]
fn test_single_curve_header_gives_no_curves() {
    let text = "~Curve\nDEPT.M\n~ASCII\n1 10\n2 11\n";
    let doc = parse_las(text);

    assert_eq!(doc.depth, vec![Some(1.0), Some(2.0)]);
    assert!(doc.curves.is_empty());
}

#[test]
fn test_rows_without_curve_section() {
    let doc = parse_las("~ASCII\n1 10\n2 11\n");
    assert_eq!(doc.depth.len(), 2);
    assert!(doc.curves.is_empty());
}

#[test]
fn test_no_ascii_section_gives_empty_vectors() {
    let text = "~W\nNULL. -999.25 : null\nWELL. TEST : well\n~Curve\nD.M\nA.X\n";
    let doc = parse_las(text);

    assert!(doc.depth.is_empty());
    assert!(doc.curves.is_empty());
    assert_eq!(doc.null_value, Some(-999.25));
    assert_eq!(doc.well_info.len(), 2);
}

#[test]
fn test_empty_and_garbage_input() {
    assert_eq!(parse_las(""), WellLogDocument::default());

    let doc = parse_las("this is not\na LAS file\n\n");
    assert!(doc.is_empty());
    assert!(doc.curves.is_empty());
    assert!(doc.well_info.is_empty());
    assert_eq!(doc.null_value, None);
}

#[test]
fn test_markers_case_insensitive() {
    for marker in ["~Curve", "~CURVE", "~curve Information"] {
        let text = format!("{}\nD.M\nA.X\n~ascii\n1 2\n", marker);
        let doc = parse_las(&text);
        assert_eq!(doc.curves.len(), 1, "marker {}", marker);
        assert_eq!(doc.curves[0].name, "A");
    }
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(parse_las(&with_crlf(SAMPLE_LAS)), parse_las(SAMPLE_LAS));
}

#[test]
fn test_leading_byte_order_mark_ignored() {
    let text = "\u{FEFF}~Well\nNULL. -999.25 : null\n~Curve\nD.M\nA.M\n~ASCII\n1 -999.25\n";
    let doc = parse_las(text);

    assert_eq!(doc.null_value, Some(-999.25));
    assert_eq!(doc.well_info.len(), 1);
    assert_eq!(doc.curves[0].data, vec![None]);
    assert_eq!(doc, parse_las(&text['\u{FEFF}'.len_utf8()..]));
}

#[test]
fn test_comment_lines_skipped_in_header_sections() {
    let text = "~W\n#NULL. -1 : commented\nNULL. -2\n~Curve\n#X.M\nD.M\nA.M\n~ASCII\n1 -2\n";
    let doc = parse_las(text);

    assert_eq!(doc.null_value, Some(-2.0));
    assert_eq!(doc.well_info.len(), 1);
    assert_eq!(doc.curves[0].name, "A");
    assert_eq!(doc.curves[0].data, vec![None]);
}

#[test]
fn test_last_null_declaration_wins() {
    let text = "~W\nNULL. -999.25\nNULL. -9999\n~Curve\nD.M\nA.M\n~ASCII\n1 -999.25\n2 -9999\n";
    let doc = parse_las(text);

    assert_eq!(doc.null_value, Some(-9999.0));
    assert_eq!(doc.curves[0].data, vec![Some(-999.25), None]);
    assert_eq!(doc.well_info.len(), 2);
}

#[test]
fn test_unknown_section_suppresses_lines_by_default() {
    let doc = parse_las(SAMPLE_LAS);

    // BHT lives in ~Parameter and must not leak into the curve list
    assert!(doc.curve("BHT").is_none());
    assert!(doc.well_info.iter().all(|e| e.mnemonic != "VERS"));
}

#[test]
fn test_retained_sections_misattribute_following_lines() {
    let parser = LasParser::new(ParserConfig::default().with_retained_sections());
    let doc = parser.parse(SAMPLE_LAS);

    let names: Vec<&str> = doc.curves.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["DT", "RHOB", "NPHI", "BHT"]);
    assert_eq!(doc.curve("BHT").unwrap().data, vec![None, None, None]);
}

#[test]
fn test_retained_section_before_any_header() {
    let parser = LasParser::new(ParserConfig::default().with_retained_sections());
    let doc = parser.parse("~Version\nVERS. 2.0 : version\n~ASCII\n1 2\n");

    assert!(doc.well_info.is_empty());
    assert_eq!(doc.depth, vec![Some(1.0)]);
}

#[test]
fn test_parse_is_idempotent() {
    let parser = LasParser::default();
    assert_eq!(parser.parse(SAMPLE_LAS), parser.parse(SAMPLE_LAS));
}

#[test]
fn test_parse_concurrently() {
    let parser = LasParser::default();
    let expected = parser.parse(SAMPLE_LAS);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || parser.parse(SAMPLE_LAS)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
