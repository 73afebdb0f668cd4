//! Application-wide constants
//!
//! Every literal the estimation engine matches against or emits lives here.
//! Constants are grouped by the pipeline stage that uses them.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Maximum accepted `code` length in characters (1 MB)
pub const MAX_CODE_LENGTH: u64 = 1024 * 1024;

/// Default maximum request body size in bytes (2 MB, leaves room for encoding)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Function definition keyword (Python). Shared by classifier, language
/// detector and recursion proxy.
pub const FUNCTION_DEF_MARKER: &str = "def ";

/// Include directive marker (C / C++)
pub const INCLUDE_MARKER: &str = "#include";

/// Substrings whose presence marks the input as code. Any single hit is enough.
pub const CODE_MARKERS: &[&str] = &[
    FUNCTION_DEF_MARKER,
    "{",
    "}",
    ";",
    INCLUDE_MARKER,
    "public static",
    "()",
];

// =============================================================================
// LANGUAGE DETECTION
// =============================================================================

/// Java entry point signature
pub const JAVA_MAIN_MARKER: &str = "public static void main";

/// JavaScript function keyword
pub const JAVASCRIPT_FUNCTION_MARKER: &str = "function";

/// Display labels for each language
pub mod languages {
    pub const PYTHON: &str = "Python";
    pub const C_CPP: &str = "C / C++";
    pub const JAVA: &str = "Java";
    pub const JAVASCRIPT: &str = "JavaScript";
    pub const UNKNOWN: &str = "Unknown";
}

// =============================================================================
// COMPLEXITY ESTIMATION
// =============================================================================

/// Loop keywords, counted as raw substrings
pub const LOOP_MARKERS: &[&str] = &["for", "while"];

/// Sorting call markers
pub const SORT_MARKERS: &[&str] = &["sort(", "sorted("];

/// Container keywords for space estimation, matched against lowercased input
pub const CONTAINER_MARKERS: &[&str] = &["list", "[]", "{}", "dict", "set"];

/// Complexity class labels
pub mod complexity {
    pub const CONSTANT: &str = "O(1)";
    pub const LINEAR: &str = "O(n)";
    pub const LINEARITHMIC: &str = "O(n log n)";
    pub const QUADRATIC: &str = "O(n²)";
}

// =============================================================================
// PERFORMANCE MODEL
// =============================================================================

/// Synthetic input size
pub const SYNTHETIC_INPUT_SIZE: u64 = 100_000;

/// ceil(log2(SYNTHETIC_INPUT_SIZE))
pub const SYNTHETIC_LOG2_INPUT_SIZE: u64 = 17;

/// Suffix appended to every synthetic execution time
pub const EXECUTION_TIME_SUFFIX: &str = " ms (n = 10⁵)";

/// Assumed throughput in operations per millisecond
pub mod ops_per_ms {
    pub const PYTHON: u64 = 5_000_000;
    pub const JAVA: u64 = 15_000_000;
    pub const C_CPP: u64 = 30_000_000;
    pub const DEFAULT: u64 = 5_000_000;
}

/// Compile time labels
pub mod compile_times {
    pub const PYTHON: &str = "0 ms (interpreted)";
    pub const C_CPP: &str = "40–150 ms";
    pub const JAVA: &str = "200–500 ms";
    pub const UNKNOWN: &str = "Unknown";
}

/// Speed class labels
pub mod speed_classes {
    pub const VERY_FAST: &str = "Very Fast";
    pub const FAST: &str = "Fast";
    pub const RISKY: &str = "Risky";
    pub const SLOW: &str = "Slow";
}

// =============================================================================
// REPORT TEMPLATES
// =============================================================================

pub mod report {
    pub const TYPE_CODE: &str = "Code";
    pub const TYPE_TEXT: &str = "Text / Problem Statement";
    pub const NOT_APPLICABLE: &str = "N/A";
    pub const PASTE_CODE: &str = "Paste code to estimate";
    pub const NOTE_CODE: &str =
        "All metrics are static estimates based on code structure, not real execution";
    pub const NOTE_TEXT: &str = "Static performance analysis requires actual source code";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

/// Header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";
