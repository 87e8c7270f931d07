//! Tests for the LAS document parser
//!
//! Shared sample files used across the parser test modules.

pub mod parser_tests;

/// A LAS 2.0 file in the common layout, with a version block first
pub const SAMPLE_LAS: &str = "\
~Version Information
 VERS.                 2.0 :   CWLS LOG ASCII STANDARD - VERSION 2.0
 WRAP.                  NO :   ONE LINE PER DEPTH STEP
~Well Information Block
#MNEM.UNIT       DATA TYPE    INFORMATION
#---------    -------------   ------------------------------
 STRT.M        1670.0000    :START DEPTH
 STOP.M        1669.7500    :STOP DEPTH
 STEP.M          -0.1250    :STEP
 NULL.         -999.2500    :NULL VALUE
 COMP.         ANY OIL COMPANY INC. :COMPANY
 WELL.         AAAAA_2            :WELL
~Curve Information Block
#MNEM.UNIT      API CODE      CURVE DESCRIPTION
#---------    -------------   ------------------------------
 DEPT.M                       :  1  DEPTH
 DT  .US/M     60 520 32 00   :  2  SONIC TRANSIT TIME
 RHOB.K/M3     45 350 01 00   :  3  BULK DENSITY
 NPHI.V/V      42 890 00 00   :  4  NEUTRON POROSITY
~Parameter Information Block
 BHT .DEGC       35.5000      :BOTTOM HOLE TEMPERATURE
~Other
 Note: the logging tools became stuck at 625 metres
~A  DEPTH     DT    RHOB     NPHI
~ASCII
1670.000   123.450 2550.000    0.450
1669.875   123.450 2550.000    0.450
1669.750   -999.25 2550.000    0.450
";

/// The same minimal file with Windows line endings
pub fn with_crlf(text: &str) -> String {
    text.replace('\n', "\r\n")
}
