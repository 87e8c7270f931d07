//! Integration tests for the processor module
//!
//! Tests batch parsing and export using LAS files written to temporary
//! directories.


use std::fs;
use std::path::{Path, PathBuf};

/// A small LAS file with a null sentinel and two curves
pub const WELL_LAS: &str = "\
~Version Information
 VERS. 2.0 : CWLS LOG ASCII STANDARD
~Well Information
 STRT.M  100.0 : START DEPTH
 NULL.   -999.25 : NULL VALUE
 WELL.   ALPHA_1 : WELL
~Curve Information
 DEPT.M  : DEPTH
 GR.GAPI : GAMMA RAY
 RHOB.G/C3 : BULK DENSITY
~ASCII
100.0  45.0  2.35
100.5  -999.25  2.40
101.0  60.5  -999.25
";

/// Write `content` to `<dir>/<name>` and return the path
pub fn write_las(dir: &Path, name: &str, content: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
