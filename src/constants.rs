//! Application constants for the LAS processor
//!
//! Section markers, file patterns and processing defaults shared across the
//! parser, the batch processor and the CLI.

// =============================================================================
// Section Markers
// =============================================================================

/// Every section header line starts with this character
pub const SECTION_PREFIX: char = '~';

/// Lowercase prefix that opens the well information section (`~W`, `~Well ...`)
pub const WELL_SECTION_MARKER: &str = "~w";

/// Lowercase prefix that opens the curve information section
pub const CURVE_SECTION_MARKER: &str = "~curve";

/// Lowercase prefix that opens the ASCII data section
pub const ASCII_SECTION_MARKER: &str = "~ascii";

/// Comment lines in header sections start with this character
pub const COMMENT_PREFIX: char = '#';

/// Leading byte order mark written by some Windows exporters
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Mnemonic of the well-info line that carries the null sentinel
pub const NULL_MNEMONIC: &str = "null";

// =============================================================================
// File Discovery
// =============================================================================

/// File extension of LAS files (compared case-insensitively)
pub const LAS_EXTENSION: &str = "las";

// =============================================================================
// Processing Defaults
// =============================================================================

/// Upper bound on files parsed at the same time when not configured
pub const DEFAULT_MAX_CONCURRENT_FILES: usize = 8;

/// Prefix of the cache key under which a parsed well log is stored
pub const WELL_CACHE_KEY_PREFIX: &str = "well";

/// Name of the depth column in tabular exports
pub const DEPTH_COLUMN: &str = "depth";

/// Progress bar template used by batch processing
pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";
