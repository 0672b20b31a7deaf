/// Shared helpers for integration tests.
use std::path::PathBuf;

/// Exact stdout of `generate_filter` with the default configuration,
/// as printed by `scipy.signal.firwin(41, 9e3, fs=44.1e3)` with `:0.7f`.
#[allow(unused)]
pub const DEFAULT_LISTING: &str = "\
-- Filter Coefficients --\n\
0.0006253,\n\
-0.0009991,\n\
-0.0016085,\n\
0.0004661,\n\
0.0033264,\n\
0.0017113,\n\
-0.0047963,\n\
-0.0066555,\n\
0.0033279,\n\
0.0135469,\n\
0.0043632,\n\
-0.0185222,\n\
-0.0201074,\n\
0.0147855,\n\
0.0424725,\n\
0.0070493,\n\
-0.0664233,\n\
-0.0653794,\n\
0.0849329,\n\
0.3036509,\n\
0.4084668,\n\
0.3036509,\n\
0.0849329,\n\
-0.0653794,\n\
-0.0664233,\n\
0.0070493,\n\
0.0424725,\n\
0.0147855,\n\
-0.0201074,\n\
-0.0185222,\n\
0.0043632,\n\
0.0135469,\n\
0.0033279,\n\
-0.0066555,\n\
-0.0047963,\n\
0.0017113,\n\
0.0033264,\n\
0.0004661,\n\
-0.0016085,\n\
-0.0009991,\n\
0.0006253\n\
";

#[allow(unused)]
/// Fresh, empty scratch directory unique to this process and `name`.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("lowpass-design-{}-{name}", std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir)
            .unwrap_or_else(|e| panic!("cannot clear {}: {e}", dir.display()));
    }
    std::fs::create_dir_all(&dir)
        .unwrap_or_else(|e| panic!("cannot create {}: {e}", dir.display()));
    dir
}

#[allow(unused)]
/// Is `line` a fixed-point number with exactly 7 fractional digits,
/// optionally signed, optionally followed by a single comma?
pub fn is_coefficient_line(line: &str) -> bool {
    let body = line.strip_suffix(',').unwrap_or(line);
    let digits = body.strip_prefix('-').unwrap_or(body);
    match digits.split_once('.') {
        Some((int, frac)) => {
            !int.is_empty()
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.len() == 7
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

#[allow(unused)]
/// PNG files start with this 8-byte signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
