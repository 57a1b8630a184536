pub mod check;
pub mod error;
pub mod result;

pub mod prelude {
    pub use super::check::{build_client, check, check_url};
    pub use super::error::CheckError;
    pub use super::result::RequestResult;
}

use std::fmt::Write;

/// Renders an error together with its whole `source()` chain, one cause per paragraph.
pub fn report_error_chain(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, "\n\nCaused by: {}", src);
        err = src;
    }
    s
}
